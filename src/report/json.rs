//! JSON report writer
//!
//! Uses an atomic write pattern: the report is written to a temp file in the
//! target directory and renamed into place, so an interrupted run never
//! leaves a truncated report behind.

use crate::error::{Result, TaginfoError};
use crate::types::FinalReport;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Write the album report as pretty-printed JSON
pub fn write_json(report: &FinalReport, output_path: &Path) -> Result<()> {
    let temp_path = output_path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| TaginfoError::Output {
        path: output_path.to_path_buf(),
        reason: format!("Failed to create temp file: {}", e),
    })?;

    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        TaginfoError::Output {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    std::fs::rename(&temp_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        TaginfoError::Output {
            path: output_path.to_path_buf(),
            reason: format!("Failed to finalize file: {}", e),
        }
    })?;

    info!(
        "Wrote {} albums to {}",
        report.albums.len(),
        output_path.display()
    );

    Ok(())
}

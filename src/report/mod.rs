//! Report building and emission
//!
//! Three output surfaces: JSON file, CSV file, and the colorized console
//! summary. File writes are independent of each other; a failed write is
//! logged and the remaining surfaces are still produced.

pub mod compare;
pub mod console;
pub mod csv;
pub mod json;

pub use compare::{build_album_reports, compare_songs};

use crate::config::Settings;
use crate::types::SongInfo;
use std::path::PathBuf;
use tracing::{error, warn};

/// JSON report file name, written into the target directory
pub const JSON_REPORT_NAME: &str = "tag_report.json";
/// CSV report file name, written into the target directory
pub const CSV_REPORT_NAME: &str = "tag_report.csv";

/// Build the album report from scanned songs and emit every enabled surface.
pub fn write_reports(songs: &[SongInfo], settings: &Settings) {
    if songs.is_empty() {
        println!("No songs to report.");
        return;
    }

    let (report, flat) = compare::build_album_reports(songs, settings);

    let target = report_dir();
    let mut written: Vec<PathBuf> = Vec::new();

    if settings.write_json || settings.write_csv {
        println!();
        println!("📝 Writing reports to {} ...", target.display());
    }

    if settings.write_json {
        let path = target.join(JSON_REPORT_NAME);
        match json::write_json(&report, &path) {
            Ok(()) => {
                println!("✅ JSON report written to {}", path.display());
                written.push(path);
            }
            Err(e) => error!("{}", e),
        }
    }

    if settings.write_csv {
        let path = target.join(CSV_REPORT_NAME);
        match csv::write_csv(&flat, &path) {
            Ok(()) => {
                println!("✅ CSV report written to {}", path.display());
                written.push(path);
            }
            Err(e) => error!("{}", e),
        }
    }

    console::print_album_summary(&report, settings);

    if !written.is_empty() {
        println!("──────────────────────────────");
        println!(" Reports written to:");
        for path in &written {
            println!("   {}", path.display());
        }
        println!("──────────────────────────────");
    }
}

/// Report target directory: home directory, current directory as fallback
fn report_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home,
        None => {
            warn!("Could not resolve home directory, using current folder");
            PathBuf::from(".")
        }
    }
}

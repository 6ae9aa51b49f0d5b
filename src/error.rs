//! Unified error types for taginfo
//!
//! Error strategy:
//! - Per-file errors (open, tag read): Recoverable, skip and continue
//! - Traversal and configuration errors: Fatal, abort the run
//! - Report write errors: Degraded, log and keep producing the other outputs

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for taginfo operations
#[derive(Debug, Error)]
pub enum TaginfoError {
    // =========================================================================
    // Recoverable errors - skip file, continue scan
    // =========================================================================
    #[error("error opening: {reason}")]
    Open { path: PathBuf, reason: String },

    #[error("error reading tags: {reason}")]
    TagRead { path: PathBuf, reason: String },

    // =========================================================================
    // Fatal errors - abort the run
    // =========================================================================
    #[error("source path does not exist: {0}\n  Tip: Check the path is correct and accessible")]
    SourceNotFound(PathBuf),

    #[error("error walking directory '{path}': {reason}")]
    Traversal { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    // =========================================================================
    // Reporting errors - logged, never fatal
    // =========================================================================
    #[error("Cannot write report to '{path}': {reason}\n  Tip: Check write permissions for the target directory")]
    Output { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for taginfo operations
pub type Result<T> = std::result::Result<T, TaginfoError>;

impl TaginfoError {
    /// Returns true if this error is recoverable (skip file, continue scan)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TaginfoError::Open { .. } | TaginfoError::TagRead { .. }
        )
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!(
                    "Permission denied. Check that you have write access to {}",
                    path.display()
                )
            }
            std::io::ErrorKind::NotFound => {
                format!(
                    "Directory does not exist: {}",
                    path.parent()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                )
            }
            _ => err.to_string(),
        };
        TaginfoError::Output { path, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_file_errors_are_recoverable() {
        let open = TaginfoError::Open {
            path: PathBuf::from("/a.mp3"),
            reason: "permission denied".into(),
        };
        let tags = TaginfoError::TagRead {
            path: PathBuf::from("/a.mp3"),
            reason: "no tags".into(),
        };
        assert!(open.is_recoverable());
        assert!(tags.is_recoverable());
    }

    #[test]
    fn traversal_and_output_errors_are_not_recoverable() {
        let walk = TaginfoError::Traversal {
            path: PathBuf::from("/music"),
            reason: "permission denied".into(),
        };
        let out = TaginfoError::Output {
            path: PathBuf::from("/tag_report.json"),
            reason: "disk full".into(),
        };
        assert!(!walk.is_recoverable());
        assert!(!out.is_recoverable());
    }
}

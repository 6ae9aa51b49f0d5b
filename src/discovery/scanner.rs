//! Directory traversal and extension filtering
//!
//! Traversal errors (missing root, permission denied while walking) are
//! fatal: scanning never starts on a partially-walked tree.

use crate::error::{Result, TaginfoError};
use crate::types::AudioFormat;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Recursively collect all supported audio files under `root`.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(TaginfoError::SourceNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| TaginfoError::Traversal {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            reason: e.to_string(),
        })?;

        let path = entry.path();
        if path.is_file() && AudioFormat::is_supported_path(path) {
            debug!("Discovered: {}", path.display());
            files.push(path.to_path_buf());
        }
    }

    info!("Discovered {} audio files", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").expect("failed to create fixture file");
    }

    #[test]
    fn missing_root_is_fatal() {
        let err = scan(Path::new("/does/not/exist")).unwrap_err();
        assert!(matches!(err, TaginfoError::SourceNotFound(_)));
    }

    #[test]
    fn filters_to_supported_extensions() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.mp3"));
        touch(&dir.path().join("b.M4A"));
        touch(&dir.path().join("c.alac"));
        touch(&dir.path().join("cover.jpg"));
        touch(&dir.path().join("notes.txt"));

        let mut files = scan(dir.path()).unwrap();
        files.sort();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.mp3", "b.M4A", "c.alac"]);
    }

    #[test]
    fn walks_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("artist").join("album");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested.join("01 track.mp3"));
        touch(&dir.path().join("loose.m4a"));

        let files = scan(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let files = scan(dir.path()).unwrap();
        assert!(files.is_empty());
    }
}

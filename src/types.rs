//! Core data types for taginfo
//!
//! These types represent the domain model and flow through the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Song metadata
// =============================================================================

/// Normalized metadata for a single audio file.
///
/// Every field other than `path` may be empty/zero, meaning "tag absent" -
/// that is distinct from a mismatch. `error_key` starts empty and is assigned
/// exactly once per song by the album comparator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInfo {
    /// File path; unique within one scan
    pub path: String,
    /// Tag format (e.g. "Id3v2", "Mp4Ilst")
    pub format: String,
    /// Container type (e.g. "Mpeg", "Mp4")
    #[serde(rename = "idtype")]
    pub id_type: String,
    pub genre: String,
    /// 0 = unknown
    pub year: u32,
    pub album: String,
    pub disc: u32,
    pub disc_count: u32,
    pub track: u32,
    pub track_count: u32,
    pub album_artist: String,
    pub artist: String,
    pub title: String,
    pub composer: String,
    pub comment: String,
    /// Descriptor of the embedded cover, "{ext}_{mime}_{type}_{description}_{len}",
    /// or "nil" when no picture is embedded
    pub picture: String,
    /// Embedded picture size in bytes, 0 = none
    pub pic_size: u64,
    /// Letter codes for fields diverging from the album baseline; empty = clean
    pub error_key: String,
}

/// Sentinel descriptor used when a file carries no embedded picture
pub const NO_PICTURE: &str = "nil";

// =============================================================================
// Album report structures
// =============================================================================

/// Classification of an album after comparing its songs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumStatus {
    /// All songs consistent, nothing missing
    Ok,
    /// No discrepancies, but missing cover / year / track count somewhere
    Warning,
    /// At least one song has a non-empty error key
    Issues,
}

impl fmt::Display for AlbumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumStatus::Ok => write!(f, "ok"),
            AlbumStatus::Warning => write!(f, "warning"),
            AlbumStatus::Issues => write!(f, "issues"),
        }
    }
}

/// Per-album song/issue counts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AlbumTotals {
    pub songs_total: usize,
    pub issues: usize,
}

/// One album's report entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub album_name: String,
    pub status: AlbumStatus,
    pub summary: AlbumTotals,
    pub songs: Vec<SongInfo>,
}

/// Aggregate counts over all processed albums (independent of the retention
/// filter applied to `FinalReport::albums`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub albums_ok: usize,
    pub albums_with_issues: usize,
    pub albums_with_warnings: usize,
    pub songs_total: usize,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalReport {
    pub albums: Vec<AlbumSummary>,
    pub summary_totals: SummaryTotals,
    pub generated_at: String,
}

// =============================================================================
// Supported formats
// =============================================================================

/// Audio formats taginfo scans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    M4a,
    Alac,
}

impl AudioFormat {
    /// Detect format from file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" => Some(AudioFormat::Mp3),
            "m4a" => Some(AudioFormat::M4a),
            "alac" => Some(AudioFormat::Alac),
            _ => None,
        }
    }

    /// Check if a path has a supported extension
    pub fn is_supported_path(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn format_detection_is_case_insensitive() {
        assert_eq!(AudioFormat::from_extension("MP3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_extension("m4A"), Some(AudioFormat::M4a));
        assert_eq!(AudioFormat::from_extension("alac"), Some(AudioFormat::Alac));
        assert_eq!(AudioFormat::from_extension("flac"), None);
    }

    #[test]
    fn supported_path_requires_extension() {
        assert!(AudioFormat::is_supported_path(Path::new("/m/a.mp3")));
        assert!(!AudioFormat::is_supported_path(Path::new("/m/cover.jpg")));
        assert!(!AudioFormat::is_supported_path(Path::new("/m/noext")));
    }

    #[test]
    fn album_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AlbumStatus::Issues).unwrap(),
            "\"issues\""
        );
        assert_eq!(serde_json::to_string(&AlbumStatus::Ok).unwrap(), "\"ok\"");
    }
}

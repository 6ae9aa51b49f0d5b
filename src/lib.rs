//! taginfo - Album tag consistency checker
//!
//! A command-line utility that scans a music library, reads embedded tags,
//! groups songs by album, and reports fields that differ between tracks of
//! the same album (year, genre, disc/track counts, cover art, ...).
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `discovery`: Directory traversal and extension filtering
//! - `extract`: Tag reading via lofty, normalized into `SongInfo`
//! - `pipeline`: Worker-pool scanning orchestration
//! - `report`: Album grouping, comparison, and JSON/CSV/console output
//!
//! # Example
//!
//! ```no_run
//! use taginfo::{config::Settings, pipeline};
//!
//! let settings = Settings {
//!     source: "/music".into(),
//!     ..Settings::default()
//! };
//! let result = pipeline::run(&settings).expect("scan failed");
//! println!("Processed {} files", result.total_files);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export key types at crate root
pub use error::{Result, TaginfoError};
pub use types::{AlbumStatus, AlbumSummary, FinalReport, SongInfo};

//! Runtime configuration settings

use std::path::PathBuf;

/// Runtime settings for the scan and comparison pipeline.
///
/// The comparator consumes these as plain values; there is no process-wide
/// comparison state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source directory to scan
    pub source: PathBuf,
    /// Number of scan worker threads
    pub workers: usize,
    /// Include albums without irregularities in the report
    pub show_all_albums: bool,
    /// List every song, even clean ones, in the console summary
    pub show_all_files: bool,
    /// Consider comment fields when comparing
    pub compare_comment: bool,
    /// Consider composer fields when comparing
    pub compare_composer: bool,
    /// Flag empty disc counts as issues
    pub flag_zero_disc_count: bool,
    /// Flag empty track counts as issues
    pub flag_zero_track_count: bool,
    /// Compare embedded pictures
    pub compare_pictures: bool,
    /// Minimum acceptable picture size in bytes
    pub min_picture_size: u64,
    /// Write the JSON report
    pub write_json: bool,
    /// Write the CSV report
    pub write_csv: bool,
    /// Suppress per-file progress lines
    pub quiet: bool,
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::Cli) -> Self {
        let workers = cli.workers.unwrap_or_else(default_workers).max(1);

        Self {
            source: cli.source.clone(),
            workers,
            show_all_albums: cli.all,
            show_all_files: cli.all_files,
            compare_comment: cli.comment,
            compare_composer: cli.composer,
            flag_zero_disc_count: !cli.allow_zero_disc_count,
            flag_zero_track_count: !cli.allow_zero_track_count,
            compare_pictures: !cli.skip_picture,
            min_picture_size: cli.min_pic_size,
            write_json: cli.json,
            write_csv: cli.csv,
            quiet: cli.quiet,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            workers: default_workers(),
            show_all_albums: false,
            show_all_files: false,
            compare_comment: false,
            compare_composer: false,
            flag_zero_disc_count: true,
            flag_zero_track_count: true,
            compare_pictures: true,
            min_picture_size: 8000,
            write_json: false,
            write_csv: false,
            quiet: false,
        }
    }
}

fn default_workers() -> usize {
    num_cpus::get().max(1)
}

//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// taginfo - Album tag consistency checker
///
/// Scans audio files (mp3/m4a/alac), compares tags across each album, and
/// produces a colorized summary plus optional JSON/CSV reports.
#[derive(Parser, Debug)]
#[command(name = "taginfo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory to scan
    #[arg(short, long, value_name = "DIR")]
    pub source: PathBuf,

    /// Number of parallel workers (defaults to CPU count)
    #[arg(short = 'j', long, value_name = "N")]
    pub workers: Option<usize>,

    /// Show all albums (include those without irregularities)
    #[arg(long, default_value = "false")]
    pub all: bool,

    /// Show all files (even those without irregularities)
    #[arg(long, default_value = "false")]
    pub all_files: bool,

    /// Consider comment fields when comparing
    #[arg(long, default_value = "false")]
    pub comment: bool,

    /// Consider composer fields when comparing
    #[arg(long, default_value = "false")]
    pub composer: bool,

    /// Do not compare embedded pictures
    #[arg(long, default_value = "false")]
    pub skip_picture: bool,

    /// Do not flag empty disc counts as issues
    #[arg(long, default_value = "false")]
    pub allow_zero_disc_count: bool,

    /// Do not flag empty track counts as issues
    #[arg(long, default_value = "false")]
    pub allow_zero_track_count: bool,

    /// Minimum acceptable picture size in bytes
    #[arg(long, value_name = "BYTES", default_value = "8000")]
    pub min_pic_size: u64,

    /// Write JSON report (tag_report.json)
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Write CSV report (tag_report.csv)
    #[arg(long, default_value = "false")]
    pub csv: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress per-file progress lines)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

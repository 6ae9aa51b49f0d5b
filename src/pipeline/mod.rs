//! Pipeline orchestration
//!
//! Coordinates discovery, the parallel tag scan, and report writing.
//! The scan runs a fixed pool of worker threads over a closed work queue;
//! per-file failures are logged inline and never abort the run.

use crate::config::Settings;
use crate::discovery;
use crate::error::Result;
use crate::extract;
use crate::report;
use crate::types::SongInfo;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Pipeline result summary
#[derive(Debug)]
pub struct PipelineResult {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Outcome of one worker-pool scan over a list of files
#[derive(Debug)]
pub struct ScanOutcome {
    /// Successfully extracted songs; order is not related to input order
    pub songs: Vec<SongInfo>,
    /// Files attempted (successes plus per-file failures); equals the input length
    pub attempted: usize,
    /// Files skipped because open or tag read failed
    pub failed: usize,
}

/// Run the full scan-and-report pipeline
pub fn run(settings: &Settings) -> Result<PipelineResult> {
    // Phase 1: Discovery
    let discovery_start = Instant::now();
    info!("Scanning for audio files...");
    let files = discovery::scan(&settings.source)?;

    if files.is_empty() {
        println!("No audio files found in {}", settings.source.display());
        return Ok(PipelineResult {
            total_files: 0,
            successful: 0,
            failed: 0,
        });
    }

    info!(
        "Found {} audio files in {:.2}s",
        files.len(),
        discovery_start.elapsed().as_secs_f64()
    );

    // Phase 2: Parallel tag extraction
    let scan_start = Instant::now();
    let outcome = scan_files(&files, settings.workers, settings.quiet);
    info!(
        "Scan completed in {:.2}s ({} ok, {} failed)",
        scan_start.elapsed().as_secs_f64(),
        outcome.songs.len(),
        outcome.failed
    );

    println!();
    println!("📦 Processed {} files", outcome.attempted);

    // Phase 3: Grouping, comparison, and report output
    report::write_reports(&outcome.songs, settings);

    Ok(PipelineResult {
        total_files: outcome.attempted,
        successful: outcome.songs.len(),
        failed: outcome.failed,
    })
}

/// Read tags from all files using a fixed pool of `workers` threads.
///
/// Prints one progress line per attempted file:
///
/// ```text
/// [  1/120] Scanning: /path/to/file.mp3
/// ```
///
/// with the error appended in parentheses when a file is skipped. The
/// progress counter is incremented exactly once per attempt, so its final
/// value always equals `files.len()`.
pub fn scan_files(files: &[PathBuf], workers: usize, quiet: bool) -> ScanOutcome {
    let total = files.len();

    // Producer side: enqueue everything, then drop the sender so workers
    // stop after draining the queue.
    let (tx, rx) = crossbeam_channel::unbounded::<PathBuf>();
    for path in files {
        if tx.send(path.clone()).is_err() {
            break;
        }
    }
    drop(tx);

    let results: Mutex<Vec<SongInfo>> = Mutex::new(Vec::with_capacity(total));
    let processed = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..workers.max(1) {
            let rx = rx.clone();
            let results = &results;
            let processed = &processed;
            let failed = &failed;

            scope.spawn(move || {
                for path in rx {
                    match extract::extract(&path) {
                        Ok(song) => {
                            results
                                .lock()
                                .expect("scan results lock poisoned")
                                .push(song);
                            let n = processed.fetch_add(1, Ordering::SeqCst) + 1;
                            if !quiet {
                                println!("[{:3}/{}] Scanning: {}", n, total, path.display());
                            }
                        }
                        Err(e) => {
                            failed.fetch_add(1, Ordering::SeqCst);
                            let n = processed.fetch_add(1, Ordering::SeqCst) + 1;
                            if !quiet {
                                println!(
                                    "[{:3}/{}] Scanning: {}  ({})",
                                    n,
                                    total,
                                    path.display(),
                                    e
                                );
                            }
                            warn!("Skipping {}: {}", path.display(), e);
                        }
                    }
                }
                debug!("Scan worker finished");
            });
        }
    });

    ScanOutcome {
        songs: results
            .into_inner()
            .expect("scan results lock poisoned"),
        attempted: processed.into_inner(),
        failed: failed.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn garbage_files(dir: &TempDir, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.path().join(format!("bad{}.mp3", i));
                fs::write(&path, b"not audio").unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn counter_equals_total_attempts() {
        let dir = TempDir::new().unwrap();
        let files = garbage_files(&dir, 7);

        let outcome = scan_files(&files, 3, true);
        assert_eq!(outcome.attempted, 7);
        assert_eq!(outcome.failed, 7);
        assert!(outcome.songs.is_empty());
    }

    #[test]
    fn failures_never_abort_siblings() {
        let dir = TempDir::new().unwrap();
        let mut files = garbage_files(&dir, 2);
        files.push(dir.path().join("missing.mp3"));

        let outcome = scan_files(&files, 2, true);
        assert_eq!(outcome.attempted, 3);
        assert_eq!(outcome.failed, 3);
    }

    #[test]
    fn empty_input_is_a_noop() {
        let outcome = scan_files(&[], 4, true);
        assert_eq!(outcome.attempted, 0);
        assert_eq!(outcome.failed, 0);
        assert!(outcome.songs.is_empty());
    }

    #[test]
    fn run_on_empty_directory_reports_zero_files() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            source: dir.path().to_path_buf(),
            quiet: true,
            ..Settings::default()
        };

        let result = run(&settings).unwrap();
        assert_eq!(result.total_files, 0);
        assert_eq!(result.successful, 0);
    }

    #[test]
    fn run_on_missing_directory_is_fatal() {
        let settings = Settings {
            source: PathBuf::from("/definitely/not/here"),
            quiet: true,
            ..Settings::default()
        };
        assert!(run(&settings).is_err());
    }
}

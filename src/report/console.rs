//! Colorized console album summary
//!
//! Plain ANSI escape codes, no terminal dependency. Albums are listed with a
//! status icon; issue albums show each discrepant song and its error key,
//! warning albums show the specific missing fields.

use crate::config::Settings;
use crate::types::{AlbumStatus, FinalReport, SongInfo};

const ANSI_RESET: &str = "\u{1b}[0m";
const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_GREEN: &str = "\u{1b}[32m";
const ANSI_YELLOW: &str = "\u{1b}[33m";
const ANSI_BOLD: &str = "\u{1b}[1m";

const ALBUM_COLUMN_WIDTH: usize = 30;

/// Print the legend, per-album lines, and aggregate totals
pub fn print_album_summary(report: &FinalReport, settings: &Settings) {
    let hline = "─".repeat(55);
    println!();
    println!("{}", hline);

    print_legend();

    println!(" Album Summary");
    println!("{}", hline);

    for album in &report.albums {
        match album.status {
            AlbumStatus::Ok => {
                println!(
                    " {}✅{} {} | {:3} songs | OK",
                    ANSI_GREEN,
                    ANSI_RESET,
                    pad_right(&album.album_name, ALBUM_COLUMN_WIDTH),
                    album.summary.songs_total
                );
                if settings.show_all_files {
                    for song in &album.songs {
                        println!(
                            "   ↳ {}  artist: {:<20} albumArtist: {:<20}",
                            pad_right(&song.title, ALBUM_COLUMN_WIDTH),
                            song.artist,
                            song.album_artist
                        );
                    }
                }
            }
            AlbumStatus::Issues => {
                println!(
                    " {}⛔{} {} | {:3} songs | ISSUES",
                    ANSI_RED,
                    ANSI_RESET,
                    pad_right(&album.album_name, ALBUM_COLUMN_WIDTH),
                    album.summary.songs_total
                );
                for song in &album.songs {
                    if !song.error_key.is_empty() {
                        println!(
                            "   ↳ {}  issues: {}{}{}",
                            pad_right(&song.title, ALBUM_COLUMN_WIDTH),
                            ANSI_RED,
                            song.error_key,
                            ANSI_RESET
                        );
                    }
                }
            }
            AlbumStatus::Warning => {
                println!(
                    " {}⚠️ {} {} | {:3} songs | WARNINGS",
                    ANSI_YELLOW,
                    ANSI_RESET,
                    pad_right(&album.album_name, ALBUM_COLUMN_WIDTH),
                    album.summary.songs_total
                );
                for song in &album.songs {
                    if song.error_key.is_empty() && has_warning(song) {
                        print!(
                            "   ↳ {}  warning: ",
                            pad_right(&song.title, ALBUM_COLUMN_WIDTH)
                        );
                        if song.pic_size == 0 {
                            print!("missing cover ");
                        }
                        if song.year == 0 {
                            print!("no year ");
                        }
                        if song.track_count == 0 {
                            print!("no track count ");
                        }
                        println!();
                    }
                }
            }
        }
    }

    println!("{}", hline);

    let totals = &report.summary_totals;
    if totals.albums_with_issues == 0 && totals.albums_with_warnings == 0 {
        println!(
            "{}🎉 All albums are consistent — no issues found!{}",
            ANSI_GREEN, ANSI_RESET
        );
    } else {
        println!(
            " {}✅ {} OK albums{}, {}❌ {} with issues{}, {}⚠️ {} warnings{}",
            ANSI_GREEN,
            totals.albums_ok,
            ANSI_RESET,
            ANSI_RED,
            totals.albums_with_issues,
            ANSI_RESET,
            ANSI_YELLOW,
            totals.albums_with_warnings,
            ANSI_RESET
        );
    }
    println!(" Total songs: {}", totals.songs_total);
    println!("{}", hline);
}

fn print_legend() {
    print!("{}Legend:{} ", ANSI_BOLD, ANSI_RESET);
    let codes = [
        ("f", "format"),
        ("i", "id"),
        ("g", "genre"),
        ("y", "year"),
        ("b", "album"),
        ("d", "disc"),
        ("D", "disc#"),
        ("T", "track#"),
        ("A", "albumArtist"),
        ("a", "artist"),
        ("C", "composer"),
        ("c", "comment"),
        ("p", "picSize"),
        ("P", "minPic"),
    ];
    for (code, label) in codes {
        print!("{}{}{}={} ", ANSI_RED, code, ANSI_RESET, label);
    }
    println!();
}

fn has_warning(song: &SongInfo) -> bool {
    song.pic_size == 0 || song.year == 0 || song.track_count == 0
}

/// Fixed-width column: pad with spaces, or truncate on character boundaries
fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.chars().take(width).collect()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

//! Album grouping and the discrepancy function
//!
//! Songs are grouped by a normalized album key, the first song of each group
//! (in insertion order) becomes the baseline, and every member - baseline
//! included - is diffed against it. The diff result is a short string of
//! single-letter codes, appended in a fixed order:
//!
//! ```text
//! f=format  i=id  g=genre  y=year  b=album  d=disc  D=disc#  T=track#
//! A=albumArtist  a=artist  C=composer  c=comment  p=picSize  P=minPic
//! ```

use crate::config::Settings;
use crate::types::{
    AlbumStatus, AlbumSummary, AlbumTotals, FinalReport, SongInfo, SummaryTotals,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

/// Album key used when neither the album tag nor the parent directory name
/// yields anything usable
pub const UNKNOWN_ALBUM: &str = "<unknown>";

/// Diff `candidate` against `baseline`, returning the error-key string.
///
/// Each check contributes at most one letter; an empty result means the song
/// is consistent with the baseline. Year 0 is always flagged; zero disc/track
/// counts and picture checks are gated on `settings`.
pub fn compare_songs(baseline: &SongInfo, candidate: &SongInfo, settings: &Settings) -> String {
    let mut key = String::new();
    if baseline.format != candidate.format {
        key.push('f');
    }
    if baseline.id_type != candidate.id_type {
        key.push('i');
    }
    if baseline.genre != candidate.genre {
        key.push('g');
    }
    if baseline.year != candidate.year || candidate.year == 0 {
        key.push('y');
    }
    if baseline.album != candidate.album {
        key.push('b');
    }
    if baseline.disc != candidate.disc {
        key.push('d');
    }
    if baseline.disc_count != candidate.disc_count
        || (settings.flag_zero_disc_count && candidate.disc_count == 0)
    {
        key.push('D');
    }
    if baseline.track_count != candidate.track_count
        || (settings.flag_zero_track_count && candidate.track_count == 0)
    {
        key.push('T');
    }
    if baseline.album_artist != candidate.album_artist {
        key.push('A');
    }
    if baseline.artist != candidate.artist {
        key.push('a');
    }
    if settings.compare_composer && baseline.composer != candidate.composer {
        key.push('C');
    }
    if settings.compare_comment && baseline.comment != candidate.comment {
        key.push('c');
    }
    if settings.compare_pictures && baseline.pic_size != candidate.pic_size {
        key.push('p');
    }
    if settings.compare_pictures && candidate.pic_size < settings.min_picture_size {
        key.push('P');
    }
    key
}

/// Grouping key: trimmed album tag, else parent directory base name, else
/// [`UNKNOWN_ALBUM`].
fn album_key(song: &SongInfo) -> String {
    let name = song.album.trim();
    if !name.is_empty() {
        return name.to_string();
    }

    let dir = Path::new(&song.path)
        .parent()
        .and_then(|d| d.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("");
    if dir.is_empty() || dir == "." {
        UNKNOWN_ALBUM.to_string()
    } else {
        dir.to_string()
    }
}

fn classify(album: &AlbumSummary, settings: &Settings) -> AlbumStatus {
    if album.summary.issues > 0 {
        return AlbumStatus::Issues;
    }
    let warn = album.songs.iter().any(|s| {
        (settings.compare_pictures && s.pic_size == 0)
            || (settings.flag_zero_track_count && s.track_count == 0)
            || s.year == 0
    });
    if warn {
        AlbumStatus::Warning
    } else {
        AlbumStatus::Ok
    }
}

/// Group songs by album, compute per-song error keys and per-album status,
/// and return the final report plus the flattened song list for CSV.
///
/// Albums appear in first-encounter order. The retention filter (only
/// non-`ok` albums unless show-all is set) applies to `FinalReport::albums`
/// and the flattened list; summary totals always cover every album.
pub fn build_album_reports(songs: &[SongInfo], settings: &Settings) -> (FinalReport, Vec<SongInfo>) {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<SongInfo>> = HashMap::new();
    let total_songs = songs.len();

    for song in songs {
        match groups.entry(album_key(song)) {
            Entry::Occupied(mut e) => e.get_mut().push(song.clone()),
            Entry::Vacant(e) => {
                order.push(e.key().clone());
                e.insert(vec![song.clone()]);
            }
        }
    }

    let mut report = FinalReport::default();
    let mut totals = SummaryTotals {
        songs_total: total_songs,
        ..SummaryTotals::default()
    };

    for name in order {
        let list = match groups.remove(&name) {
            Some(list) => list,
            None => continue,
        };

        let baseline = list[0].clone();
        let mut album = AlbumSummary {
            album_name: name,
            status: AlbumStatus::Ok,
            summary: AlbumTotals {
                songs_total: list.len(),
                issues: 0,
            },
            songs: Vec::with_capacity(list.len()),
        };

        for mut song in list {
            song.error_key = compare_songs(&baseline, &song, settings);
            if !song.error_key.is_empty() {
                album.summary.issues += 1;
            }
            album.songs.push(song);
        }

        album.status = classify(&album, settings);
        match album.status {
            AlbumStatus::Ok => totals.albums_ok += 1,
            AlbumStatus::Issues => totals.albums_with_issues += 1,
            AlbumStatus::Warning => totals.albums_with_warnings += 1,
        }

        if settings.show_all_albums || settings.show_all_files || album.status != AlbumStatus::Ok {
            report.albums.push(album);
        }
    }

    report.summary_totals = totals;
    report.generated_at = chrono::Utc::now().to_rfc3339();

    let flat: Vec<SongInfo> = report
        .albums
        .iter()
        .flat_map(|a| a.songs.iter().cloned())
        .collect();

    (report, flat)
}

//! CSV report writer
//!
//! Flattens the retained albums' songs into one row per song with a fixed
//! column set. The `errorKey` column carries the value assigned during
//! grouping; it is never recomputed here.

use crate::error::{Result, TaginfoError};
use crate::types::SongInfo;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Fixed CSV column set
pub const CSV_HEADER: [&str; 14] = [
    "path",
    "album",
    "artist",
    "title",
    "year",
    "track",
    "trackCount",
    "disc",
    "discCount",
    "albumArtist",
    "composer",
    "comment",
    "picSize",
    "errorKey",
];

/// Write the flattened song list as CSV
pub fn write_csv(flat: &[SongInfo], output_path: &Path) -> Result<()> {
    let file =
        File::create(output_path).map_err(|e| TaginfoError::output_error(output_path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    let to_output = |e: csv::Error| TaginfoError::Output {
        path: output_path.to_path_buf(),
        reason: e.to_string(),
    };

    writer.write_record(CSV_HEADER).map_err(to_output)?;

    for song in flat {
        let year = song.year.to_string();
        let track = song.track.to_string();
        let track_count = song.track_count.to_string();
        let disc = song.disc.to_string();
        let disc_count = song.disc_count.to_string();
        let pic_size = song.pic_size.to_string();

        writer
            .write_record([
                song.path.as_str(),
                song.album.as_str(),
                song.artist.as_str(),
                song.title.as_str(),
                year.as_str(),
                track.as_str(),
                track_count.as_str(),
                disc.as_str(),
                disc_count.as_str(),
                song.album_artist.as_str(),
                song.composer.as_str(),
                song.comment.as_str(),
                pic_size.as_str(),
                song.error_key.as_str(),
            ])
            .map_err(to_output)?;
    }

    writer.flush().map_err(|e| TaginfoError::Output {
        path: output_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!("Wrote {} rows to {}", flat.len(), output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn header_and_error_key_survive_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tag_report.csv");

        let songs = vec![
            SongInfo {
                path: "/m/a/1.mp3".to_string(),
                album: "A".to_string(),
                year: 1999,
                track: 1,
                error_key: String::new(),
                ..SongInfo::default()
            },
            SongInfo {
                path: "/m/a/2.mp3".to_string(),
                album: "A".to_string(),
                year: 0,
                track: 2,
                error_key: "yDTP".to_string(),
                ..SongInfo::default()
            },
        ];

        write_csv(&songs, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "/m/a/1.mp3");
        assert_eq!(&rows[0][13], "");
        assert_eq!(&rows[1][4], "0");
        assert_eq!(&rows[1][13], "yDTP");
    }

    #[test]
    fn missing_target_directory_is_an_output_error() {
        let err = write_csv(&[], Path::new("/no/such/dir/tag_report.csv")).unwrap_err();
        assert!(matches!(err, TaginfoError::Output { .. }));
    }
}

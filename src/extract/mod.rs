//! Metadata extraction from audio file tags
//!
//! Uses lofty to read ID3v2 (MP3) and MP4 ilst (M4A/ALAC) tags and normalize
//! them into a [`SongInfo`]. Individual missing tags become empty strings or
//! zeros; open and tag-read failures are recoverable per-file errors.

use crate::error::{Result, TaginfoError};
use crate::types::{SongInfo, NO_PICTURE};
use lofty::{Accessor, ItemKey, Probe, Tag, TaggedFileExt};
use std::path::Path;
use tracing::debug;

/// Read tags from one file and return its normalized metadata.
///
/// Deterministic given file content; no side effects beyond closing the
/// file handle.
pub fn extract(path: &Path) -> Result<SongInfo> {
    let probe = Probe::open(path).map_err(|e| TaginfoError::Open {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let tagged = probe.read().map_err(|e| TaginfoError::TagRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut song = SongInfo {
        path: path.display().to_string(),
        id_type: format!("{:?}", tagged.file_type()),
        picture: NO_PICTURE.to_string(),
        ..SongInfo::default()
    };

    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());
    if let Some(tag) = tag {
        fill_from_tag(&mut song, tag);
    } else {
        debug!("No tags found in {}", path.display());
    }

    Ok(song)
}

fn fill_from_tag(song: &mut SongInfo, tag: &Tag) {
    song.format = format!("{:?}", tag.tag_type());
    song.genre = tag.genre().map(|s| s.to_string()).unwrap_or_default();
    song.year = tag.year().unwrap_or(0);
    song.album = tag.album().map(|s| s.to_string()).unwrap_or_default();
    song.disc = tag.disk().unwrap_or(0);
    song.disc_count = tag.disk_total().unwrap_or(0);
    song.track = tag.track().unwrap_or(0);
    song.track_count = tag.track_total().unwrap_or(0);
    song.artist = tag.artist().map(|s| s.to_string()).unwrap_or_default();
    song.title = tag.title().map(|s| s.to_string()).unwrap_or_default();
    song.comment = tag.comment().map(|s| s.to_string()).unwrap_or_default();
    song.album_artist = tag
        .get_string(&ItemKey::AlbumArtist)
        .unwrap_or_default()
        .to_string();
    song.composer = tag
        .get_string(&ItemKey::Composer)
        .unwrap_or_default()
        .to_string();

    if let Some(pic) = tag.pictures().first() {
        let mime = pic.mime_type().map(|m| m.as_str()).unwrap_or("image/unknown");
        song.picture = format!(
            "{}_{}_{:?}_{}_{}",
            extension_for_mime(mime),
            mime,
            pic.pic_type(),
            pic.description().unwrap_or_default(),
            pic.data().len()
        );
        song.pic_size = pic.data().len() as u64;
    }
}

/// Conventional file extension for an embedded picture's MIME type
fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        "image/tiff" => "tiff",
        _ => "img",
    }
}

//! The playable-item model shared across the crate.
//!
//! Tracks are produced by the content API and treated as immutable
//! snapshots by the player; history clones them when recording a play.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackKind {
    Video,
    Audio,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Opaque unique id; identity for queue lookup and history dedup.
    pub id: String,
    pub title: String,
    /// Subtitle/artist line. Many video items carry none.
    pub artist: Option<String>,
    pub kind: TrackKind,
    /// Artwork URL, if the content API provided one.
    pub thumbnail: Option<String>,
    /// Media source URL handed to the playback element.
    pub file_url: String,
    /// Length in seconds. `None` until the playback element reports it.
    pub duration: Option<f64>,
}

impl Track {
    /// Render `"Artist - Title"`, falling back to the title alone when the
    /// artist is missing or blank.
    pub fn label(&self) -> String {
        match self.artist.as_deref() {
            Some(a) if !a.trim().is_empty() => format!("{} - {}", a.trim(), self.title),
            _ => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(artist: Option<&str>) -> Track {
        Track {
            id: "t1".into(),
            title: "Song".into(),
            artist: artist.map(Into::into),
            kind: TrackKind::Audio,
            thumbnail: None,
            file_url: "https://media.test/t1.mp3".into(),
            duration: None,
        }
    }

    #[test]
    fn label_prefers_artist_dash_title() {
        assert_eq!(song(Some("Artist")).label(), "Artist - Song");
        assert_eq!(song(Some("  Artist  ")).label(), "Artist - Song");
        assert_eq!(song(None).label(), "Song");
        assert_eq!(song(Some("")).label(), "Song");
        assert_eq!(song(Some("   ")).label(), "Song");
    }

    #[test]
    fn track_parses_with_optional_fields_absent() {
        let track: Track = toml::from_str(
            r#"
id = "v1"
title = "Clip"
kind = "video"
file_url = "https://media.test/v1.mp4"
"#,
        )
        .unwrap();

        assert_eq!(track.id, "v1");
        assert_eq!(track.kind, TrackKind::Video);
        assert!(track.artist.is_none());
        assert!(track.thumbnail.is_none());
        assert!(track.duration.is_none());
    }
}

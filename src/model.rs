//! Value types shared by the parsers and their consumers.
//!
//! All types serialize with the camelCase field names used by the JSON
//! documents the playback application caches offline, so a parsed [`Song`]
//! survives a serialize/deserialize round trip field-for-field.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A parsed karaoke song.
///
/// Produced wholesale by [`parse_song`](crate::parse_song); owns all of its
/// data, with no aliasing into the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Song title.
    pub title: String,
    /// Artist name.
    pub author: String,
    /// Opaque reference to the audio asset, resolved by the caller.
    pub soundtrack: String,
    /// One display string per surviving lyric line, the concatenation of
    /// that line's segment texts.
    pub lyrics: Vec<String>,
    /// The timed segments of each surviving lyric line.
    ///
    /// Always the same length as `lyrics`, and every inner list is
    /// non-empty: lines that yield no segment are dropped from both.
    pub lyric_segments: Vec<Vec<LyricSegment>>,
}

impl Song {
    /// Serializes the song to the JSON form used for offline caching.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a song from its cached JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One highlightable fragment of a lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricSegment {
    /// Highlight start, in seconds from the beginning of the track.
    pub start_time: f32,
    /// Display text, trimmed of surrounding whitespace.
    pub text: String,
    /// Highlight duration in seconds.
    ///
    /// Always resolved: derived from the next tag's start time when one
    /// exists, otherwise the fixed trailing default.
    pub duration: f32,
}

/// One entry of the remote playlist index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub name: String,
    pub artist: String,
    /// Entries still locked in the application are listed without content.
    #[serde(default)]
    pub locked: bool,
    /// Path of the song document, absent for locked entries.
    #[serde(default)]
    pub path: Option<String>,
}

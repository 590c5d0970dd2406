//! # `SongMD` Processor: A Parser for Karaoke Song Documents
//!
//! This crate parses the plain-text song documents used by karaoke playback
//! applications into structured, time-indexed data. A document carries a
//! short header section (`# title`, `# author`, `# soundtrack`) followed by a
//! `# lyrics` section whose lines embed `{ M:SS }` timestamp tags; the parser
//! turns it into a [`Song`] whose per-line [`LyricSegment`]s are ready to
//! drive a highlighting animation against the audio position.
//!
//! Parsing is a pure, synchronous computation with no I/O and no shared
//! state, and it is deliberately permissive: missing sections become empty
//! fields and malformed timestamp tags stay literal text, so any input
//! yields a best-effort [`Song`] rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use songmd_processor::parse_song;
//!
//! let document = "\
//! ## title
//! Creep
//! ## author
//! Radiohead
//! ## soundtrack
//! creep.mp3
//! ## lyrics
//! { 0:19 }When you were here before,
//! { 0:23 }Couldn't look you in the eye{ 0:25 }";
//!
//! let song = parse_song(document);
//!
//! assert_eq!(song.title, "Creep");
//! assert_eq!(song.lyrics.len(), 2);
//!
//! // The first segment ends where the next tag starts.
//! let first = &song.lyric_segments[0][0];
//! assert_eq!(first.start_time, 19.0);
//! assert_eq!(first.duration, 4.0);
//!
//! // The second segment's end is marked by its explicit `{ 0:25 }` tag.
//! let second = &song.lyric_segments[1][0];
//! assert_eq!(second.start_time, 23.0);
//! assert_eq!(second.duration, 2.0);
//! ```

pub mod error;
pub mod model;
pub mod parser;

pub use error::{ParseError, Result};
pub use model::{LyricSegment, PlaylistItem, Song};
pub use parser::{parse_playlist, parse_song, playlist_to_json};

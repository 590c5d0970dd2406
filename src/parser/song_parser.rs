//! Section scanner for the song document format.
//!
//! A song document is a small markup dialect: an ignored preamble, then
//! `# title`, `# author` and `# soundtrack` headers each followed by one
//! verbatim value line, then a `# lyrics` header after which every remaining
//! line is lyric content for the tag tokenizer.

use super::lyric_parser::parse_lyric_lines;
use crate::model::Song;

/// Parses a complete song document into a [`Song`].
///
/// The scan is a single pass over the document's lines and is fully
/// permissive: a missing section leaves its field empty, a header at the end
/// of the input yields an empty value instead of an out-of-bounds access,
/// and malformed lyric content degrades tag-by-tag. This function never
/// fails; it always returns a best-effort [`Song`].
#[must_use]
pub fn parse_song(content: &str) -> Song {
    let lines: Vec<&str> = content.lines().collect();

    let mut title = "";
    let mut author = "";
    let mut soundtrack = "";
    let mut raw_lyrics: Vec<&str> = Vec::new();

    let mut in_lyrics_section = false;
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if line.starts_with("# title") {
            i += 1;
            title = lines.get(i).copied().unwrap_or("");
        } else if line.starts_with("# author") {
            i += 1;
            author = lines.get(i).copied().unwrap_or("");
        } else if line.starts_with("# soundtrack") {
            i += 1;
            soundtrack = lines.get(i).copied().unwrap_or("");
        } else if line.starts_with("# lyrics") {
            in_lyrics_section = true;
        } else if in_lyrics_section {
            raw_lyrics.push(line);
        }
        i += 1;
    }

    let (lyrics, lyric_segments) = parse_lyric_lines(&raw_lyrics);

    Song {
        title: title.to_string(),
        author: author.to_string(),
        soundtrack: soundtrack.to_string(),
        lyrics,
        lyric_segments,
    }
}

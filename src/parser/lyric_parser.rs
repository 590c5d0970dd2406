//! Tokenizer for inline-timestamped lyric lines and per-line segment
//! assembly.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::utils::parse_timestamp;
use crate::model::LyricSegment;

/// Duration applied to the very last segment of a document when no later tag
/// exists to derive an end time from.
const DEFAULT_LAST_SEGMENT_DURATION: f32 = 2.0;

/// One well formed `{ M:SS }` tag together with the text that follows it, up
/// to the next tag or the end of its line.
///
/// A token with empty text never becomes a segment; it only anchors the end
/// time of the token before it. This is how an explicit end tag such as the
/// trailing `{ 0:25 }` in `{ 0:23 }some text{ 0:25 }` takes effect.
#[derive(Debug)]
struct TagToken {
    start_time: f32,
    text: String,
    line_index: usize,
}

/// Extracts the timed segments of every raw line of the lyrics section.
///
/// Lines that yield no segment are dropped entirely, so the two returned
/// vectors are parallel: the string at index `i` is the concatenation of the
/// segment texts at index `i`.
pub(super) fn parse_lyric_lines(raw_lines: &[&str]) -> (Vec<String>, Vec<Vec<LyricSegment>>) {
    let mut tokens: Vec<TagToken> = Vec::new();
    for (line_index, line) in raw_lines.iter().enumerate() {
        let token_count = tokens.len();
        tokenize_line(line, line_index, &mut tokens);
        if tokens.len() == token_count && !line.trim().is_empty() {
            debug!("line {}: no timestamp tag, dropping '{line}'", line_index + 1);
        }
    }

    let mut line_map: BTreeMap<usize, Vec<LyricSegment>> = BTreeMap::new();
    for (index, token) in tokens.iter().enumerate() {
        if token.text.is_empty() {
            continue;
        }
        // The end time comes from the next tag anywhere in the document,
        // whether it opens a segment on the same line, an explicit end
        // marker, or the first segment of a later line.
        let duration = tokens
            .get(index + 1)
            .map_or(DEFAULT_LAST_SEGMENT_DURATION, |next| {
                next.start_time - token.start_time
            });
        line_map
            .entry(token.line_index)
            .or_default()
            .push(LyricSegment {
                start_time: token.start_time,
                text: token.text.clone(),
                duration,
            });
    }

    let mut lyrics = Vec::with_capacity(line_map.len());
    let mut lyric_segments = Vec::with_capacity(line_map.len());
    for (_, line_segments) in line_map {
        lyrics.push(
            line_segments
                .iter()
                .map(|segment| segment.text.as_str())
                .collect::<String>(),
        );
        lyric_segments.push(line_segments);
    }
    (lyrics, lyric_segments)
}

/// Scans one raw line for `{ M:SS }` tags and the text between them.
///
/// Text before the first tag belongs to no segment and is discarded. A `{`
/// that does not open a well formed tag (missing `}` or unparsable
/// timestamp) stays literal text of the open token, and the scan resumes
/// right after it, so a malformed tag never aborts the rest of the line.
fn tokenize_line(line: &str, line_index: usize, tokens: &mut Vec<TagToken>) {
    let mut current: Option<(f32, String)> = None;
    let mut rest = line;

    while let Some(brace) = rest.find('{') {
        let (before, from_brace) = rest.split_at(brace);
        if let Some((_, text)) = current.as_mut() {
            text.push_str(before);
        }

        if let Some((start_time, after)) = read_tag(from_brace, line_index) {
            if let Some((start, text)) = current.take() {
                tokens.push(TagToken {
                    start_time: start,
                    text: text.trim().to_string(),
                    line_index,
                });
            }
            current = Some((start_time, String::new()));
            rest = after;
        } else {
            if let Some((_, text)) = current.as_mut() {
                text.push('{');
            }
            rest = &from_brace[1..];
        }
    }

    if let Some((start, mut text)) = current {
        text.push_str(rest);
        tokens.push(TagToken {
            start_time: start,
            text: text.trim().to_string(),
            line_index,
        });
    }
}

/// Reads the timestamp tag at the start of `rest` (which begins with `{`).
///
/// Returns the parsed start time and the remainder after the closing `}`, or
/// `None` when the tag is malformed.
fn read_tag(rest: &str, line_index: usize) -> Option<(f32, &str)> {
    let inner = &rest[1..];
    let close = inner.find('}')?;
    let expr = &inner[..close];

    match parse_timestamp(expr) {
        Ok(start_time) => Some((start_time, &inner[close + 1..])),
        Err(err) => {
            warn!(
                "line {}: ignoring malformed timestamp tag '{{{expr}}}': {err}",
                line_index + 1
            );
            None
        }
    }
}

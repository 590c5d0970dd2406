use std::num::ParseFloatError;
use thiserror::Error;

/// Errors produced while decoding song and playlist data.
///
/// [`parse_song`](crate::parse_song) itself never returns an error: malformed
/// documents degrade to empty fields or skipped tags. This type covers the
/// JSON boundary and the internal timestamp parsing, whose failures the lyric
/// tokenizer downgrades to literal text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Invalid time format string.
    #[error("invalid time format: {0}")]
    InvalidTime(String),

    /// JSON parsing failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ParseFloatError> for ParseError {
    fn from(err: ParseFloatError) -> Self {
        Self::InvalidTime(format!("failed to parse number from time component: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

//! Helpers shared by the song document parsers.

use crate::error::{ParseError, Result};

/// Parses a `M:SS` or `M:SS.ff` timestamp expression into seconds.
///
/// Both components are float-parsed and no upper bound is enforced on
/// either, so `1:75` is accepted and simply means 135 seconds.
pub(super) fn parse_timestamp(expr: &str) -> Result<f32> {
    let (minutes_str, seconds_str) = expr
        .trim()
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidTime(format!("missing ':' in '{expr}'")))?;

    let minutes: f32 = minutes_str.trim().parse()?;
    let seconds: f32 = seconds_str.trim().parse()?;
    if minutes < 0.0 || seconds < 0.0 {
        return Err(ParseError::InvalidTime(format!(
            "negative component in '{expr}'"
        )));
    }

    Ok(minutes.mul_add(60.0, seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("0:19").unwrap(), 19.0);
        assert_eq!(parse_timestamp("1:16").unwrap(), 76.0);
        assert_eq!(parse_timestamp("0:23.5").unwrap(), 23.5);
        assert_eq!(parse_timestamp("2:05.25").unwrap(), 125.25);
        assert_eq!(parse_timestamp(" 0:19 ").unwrap(), 19.0);
        // Out-of-range seconds are not validated, only summed.
        assert_eq!(parse_timestamp("1:75").unwrap(), 135.0);

        assert!(matches!(
            parse_timestamp("19"),
            Err(ParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_timestamp("0:xx"),
            Err(ParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_timestamp("x:19"),
            Err(ParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_timestamp("1:2:3"),
            Err(ParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_timestamp("-1:20"),
            Err(ParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_timestamp(""),
            Err(ParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_timestamp(":19"),
            Err(ParseError::InvalidTime(_))
        ));
    }
}

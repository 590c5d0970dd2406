//! Decoding of the remote playlist index.

use crate::error::Result;
use crate::model::PlaylistItem;

/// Decodes the playlist index JSON into a list of [`PlaylistItem`]s.
///
/// Unlike the song document parser there is no best-effort mode here: the
/// playlist is machine-generated JSON and malformed input is a real error.
pub fn parse_playlist(json: &str) -> Result<Vec<PlaylistItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Encodes a playlist back to its JSON form.
pub fn playlist_to_json(items: &[PlaylistItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_playlist() {
        let json = r#"[
            {"name": "Creep", "artist": "Radiohead", "locked": false, "path": "Creep/Creep.md"},
            {"name": "Bohemian Rhapsody", "artist": "Queen", "locked": true, "path": null},
            {"name": "Imagine", "artist": "John Lennon"}
        ]"#;

        let items = parse_playlist(json).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Creep");
        assert_eq!(items[0].path.as_deref(), Some("Creep/Creep.md"));
        assert!(items[1].locked);
        assert_eq!(items[1].path, None);
        assert!(!items[2].locked);
    }

    #[test]
    fn test_playlist_round_trip() {
        let items = vec![
            PlaylistItem {
                name: "Creep".to_string(),
                artist: "Radiohead".to_string(),
                locked: false,
                path: Some("Creep/Creep.md".to_string()),
            },
            PlaylistItem {
                name: "Nook".to_string(),
                artist: "Milet".to_string(),
                locked: true,
                path: None,
            },
        ];

        let restored = parse_playlist(&playlist_to_json(&items).unwrap()).unwrap();
        assert_eq!(items, restored);
    }

    #[test]
    fn test_malformed_playlist_is_an_error() {
        assert!(matches!(
            parse_playlist("not json"),
            Err(ParseError::Json(_))
        ));
    }
}

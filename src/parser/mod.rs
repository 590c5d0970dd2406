mod lyric_parser;
mod playlist_parser;
mod song_parser;
mod utils;

pub use playlist_parser::{parse_playlist, playlist_to_json};
pub use song_parser::parse_song;

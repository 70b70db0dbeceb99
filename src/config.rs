//! Application-level configuration constants.

use once_cell::sync::Lazy;
use regex::Regex;

// Remote API
pub const API_BASE_URL: &str = "https://api.opendota.com/api";
pub const DEFAULT_PLAYER_ID: u64 = 205_511_222;

// Cache
pub const CACHE_KEY: &str = "heroesData";
pub const CACHE_TTL_MS: i64 = 60 * 60 * 1000;

// Logging
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

static PLAYER_PARAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^\?|&)player=(\d+)(?:&|$)").unwrap());

/// Player id from a URL query string such as `?player=123&x=1`.
///
/// Falls back to [`DEFAULT_PLAYER_ID`] when the parameter is missing, not
/// numeric, or zero.
pub fn player_id_from_query(query: &str) -> u64 {
    PLAYER_PARAM_REGEX
        .captures(query)
        .and_then(|captures| captures[1].parse::<u64>().ok())
        .filter(|&id| id != 0)
        .unwrap_or(DEFAULT_PLAYER_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_player_param() {
        assert_eq!(player_id_from_query("?player=86745912"), 86_745_912);
        assert_eq!(player_id_from_query("?lang=en&player=42"), 42);
        assert_eq!(player_id_from_query("?player=42&lang=en"), 42);
    }

    #[test]
    fn falls_back_to_default_player() {
        assert_eq!(player_id_from_query(""), DEFAULT_PLAYER_ID);
        assert_eq!(player_id_from_query("?player=abc"), DEFAULT_PLAYER_ID);
        assert_eq!(player_id_from_query("?player=0"), DEFAULT_PLAYER_ID);
        assert_eq!(player_id_from_query("?otherplayer=5"), DEFAULT_PLAYER_ID);
    }
}

//! Position-suffix extraction and normalization
//!
//! A selector string may end with `:N`, `:first` or `:last` to select which
//! match of the selector to use. `first` normalizes to `1`, `last` to `-1`,
//! and integer text to its signed value; negative positions count from the
//! end. There is no error case: a string without a recognizable suffix is
//! the whole value at the default position.

use once_cell::sync::Lazy;
use regex::Regex;
use wtl_model::DEFAULT_POSITION;

/// Position meaning "the last match"
pub const LAST_POSITION: i32 = -1;

const FIRST_KEYWORD: &str = "first";
const LAST_KEYWORD: &str = "last";

static POSITION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":(-?[0-9]+|first|last)$").expect("position suffix pattern"));

/// Split `value:position` into the value string and its normalized position.
/// A suffix whose token does not normalize (including integer text out of
/// `i32` range) is treated as absent and stays in the value.
pub fn extract(identifier_string: &str) -> (String, i32) {
    if let Some(suffix) = POSITION_SUFFIX.find(identifier_string) {
        let token = &identifier_string[suffix.start() + 1..];
        if let Some(position) = parse_token(token) {
            return (identifier_string[..suffix.start()].to_string(), position);
        }
    }

    (identifier_string.to_string(), DEFAULT_POSITION)
}

/// Normalize a bare position token. Returns None for anything that is not
/// `first`, `last` or integer text; callers treat that as "no position".
pub fn parse_token(token: &str) -> Option<i32> {
    match token {
        FIRST_KEYWORD => Some(DEFAULT_POSITION),
        LAST_KEYWORD => Some(LAST_POSITION),
        _ => token.parse().ok(),
    }
}

//! CSS colour function decoding.
//!
//! Accepts `rgba(R, G, B, A)`. Channels are integers; a trailing `%` is
//! allowed but only the digits are kept, so `50%` reads as 50. Alpha is a
//! plain decimal fraction and is required. The whole input has to match;
//! trailing or leading garbage is rejected.

use std::sync::LazyLock;

use regex::Regex;

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*,\s*([0-9]*\.?[0-9]+)\s*\)$",
    )
    .expect("valid regex")
});

/// Decode a CSS `rgba()` string into channel bytes and alpha.
///
/// Returns `None` when the pattern does not match or a component is out of
/// range (channel above 255, alpha above 1.0).
pub fn parse_css(input: &str) -> Option<([u8; 3], f32)> {
    let input = input.trim();

    let Some(caps) = RGBA_RE.captures(input) else {
        log::debug!("rejecting css colour {:?}: no match", input);
        return None;
    };

    let r = parse_channel(&caps[1])?;
    let g = parse_channel(&caps[2])?;
    let b = parse_channel(&caps[3])?;
    let a = parse_alpha(&caps[4])?;

    Some(([r, g, b], a))
}

/// Format channel bytes and alpha as `rgba(R, G, B, A)`.
pub fn format_css(r: u8, g: u8, b: u8, a: f32) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, a)
}

/// Parse the digits of a channel, rejecting anything above 255.
fn parse_channel(digits: &str) -> Option<u8> {
    match digits.parse::<u8>() {
        Ok(c) => Some(c),
        Err(_) => {
            log::debug!("rejecting css channel {}: above 255", digits);
            None
        }
    }
}

/// Parse alpha, rejecting anything above 1.0.
fn parse_alpha(s: &str) -> Option<f32> {
    let alpha = s.parse::<f32>().ok()?;

    if alpha <= 1.0 {
        Some(alpha)
    } else {
        log::debug!("rejecting css alpha {}: above 1", s);
        None
    }
}

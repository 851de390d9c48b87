//! Hex colour decoding.
//!
//! Accepts `#RRGGBB` and the `#RGB` shorthand, with or without the leading
//! `#`. Digits are case-insensitive. Alpha is not encoded. Surrounding
//! whitespace is not stripped; callers trim user input themselves.

/// Decode a hex string into its three channel bytes.
///
/// Returns `None` for anything other than 3 or 6 hex digits.
pub fn parse_hex(input: &str) -> Option<[u8; 3]> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        log::debug!("rejecting hex colour {:?}: non-hex digit", input);
        return None;
    }

    let expanded;
    let digits = match digits.len() {
        // #RGB -> #RRGGBB
        3 => {
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        }
        6 => digits,
        n => {
            log::debug!("rejecting hex colour {:?}: {} digits", input, n);
            return None;
        }
    };

    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some([r, g, b])
}

/// Encode three channel bytes as `#rrggbb`.
pub fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_6digit() {
        assert_eq!(parse_hex("#FF0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex("#1a1a2e"), Some([0x1a, 0x1a, 0x2e]));
    }

    #[test]
    fn test_parse_3digit() {
        assert_eq!(parse_hex("#03F"), Some([0x00, 0x33, 0xff]));
        assert_eq!(parse_hex("abc"), Some([0xaa, 0xbb, 0xcc]));
    }

    #[test]
    fn test_parse_no_hash() {
        assert_eq!(parse_hex("0033ff"), Some([0, 51, 255]));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_hex("not-a-color"), None);
        assert_eq!(parse_hex("#GGG"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#FF000080"), None);
        assert_eq!(parse_hex("##fff"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#"), None);
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert_eq!(parse_hex(" #fff"), None);
        assert_eq!(parse_hex("#fff "), None);
        assert_eq!(parse_hex("ff 000"), None);
    }

    #[test]
    fn test_parse_rejects_sign() {
        // from_str_radix would accept a leading '+'
        assert_eq!(parse_hex("+fffff"), None);
    }

    #[test]
    fn test_format_pads() {
        assert_eq!(format_hex(0, 5, 255), "#0005ff");
        assert_eq!(format_hex(0xab, 0xcd, 0xef), "#abcdef");
    }
}

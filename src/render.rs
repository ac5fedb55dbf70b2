//! Best-effort rendering of opaque color strings
//!
//! The persisted model treats color as an opaque string (hex or named) and
//! never validates it. Painting still needs a concrete color, so parsing
//! here is best-effort with a visible fallback; the stored string itself is
//! never rewritten.

use egui::Color32;

/// Fallback for color strings we cannot interpret.
const FALLBACK: Color32 = Color32::DARK_GRAY;

/// Parse a hex (`#rgb`, `#rrggbb`, `#rrggbbaa`) or CSS-named color string.
pub fn parse_color(value: &str) -> Color32 {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(FALLBACK);
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::from_rgb(0xff, 0x00, 0x00),
        "green" => Color32::from_rgb(0x00, 0x80, 0x00),
        "blue" => Color32::from_rgb(0x00, 0x00, 0xff),
        "yellow" => Color32::from_rgb(0xff, 0xff, 0x00),
        "orange" => Color32::from_rgb(0xff, 0xa5, 0x00),
        "purple" => Color32::from_rgb(0x80, 0x00, 0x80),
        "cyan" => Color32::from_rgb(0x00, 0xff, 0xff),
        "magenta" => Color32::from_rgb(0xff, 0x00, 0xff),
        "gray" | "grey" => Color32::from_rgb(0x80, 0x80, 0x80),
        _ => FALLBACK,
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Some(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
            if hex.len() == 8 {
                Some(Color32::from_rgba_unmultiplied(r, g, b, byte(6)?))
            } else {
                Some(Color32::from_rgb(r, g, b))
            }
        }
        _ => None,
    }
}

/// Format a picker color back into the `#rrggbb` form the model stores.
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_color("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("#00ff7f"), Color32::from_rgb(0, 255, 127));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_color("#f00"), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("#abc"), Color32::from_rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("green"), Color32::from_rgb(0, 128, 0));
        assert_eq!(parse_color("Blue"), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_unparseable_strings_fall_back() {
        assert_eq!(parse_color("chartreuse-ish"), FALLBACK);
        assert_eq!(parse_color("#zzzzzz"), FALLBACK);
        assert_eq!(parse_color(""), FALLBACK);
    }

    #[test]
    fn test_hex_round_trip() {
        let hex = "#12f0a3";
        assert_eq!(color_to_hex(parse_color(hex)), hex);
    }
}

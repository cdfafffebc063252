//! Theme color normalization and tinting.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::net::types::DEFAULT_THEME_COLOR;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Canonical lowercase `#rrggbb`, or the default accent when `value` is not
/// a hex color. Stored theme colors are user input and go through this
/// before reaching a `style` attribute.
pub fn theme_color(value: &str) -> String {
    let (r, g, b) = parse_hex_rgb(value)
        .or_else(|| parse_hex_rgb(DEFAULT_THEME_COLOR))
        .unwrap_or((0, 255, 136));
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `rgba()` of the theme color at `alpha` (0.0..=1.0), for glows and badges.
pub fn tint(value: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex_rgb(&theme_color(value)).unwrap_or((0, 255, 136));
    format!("rgba({r}, {g}, {b}, {:.2})", alpha.clamp(0.0, 1.0))
}

use plotters::style::RGBColor;

use crate::error::{Result, WigplotError};

const NAMED: &[(&str, RGBColor)] = &[
    ("black", RGBColor(0, 0, 0)),
    ("blue", RGBColor(31, 119, 180)),
    ("cyan", RGBColor(23, 190, 207)),
    ("gray", RGBColor(127, 127, 127)),
    ("green", RGBColor(0, 128, 0)),
    ("magenta", RGBColor(255, 0, 255)),
    ("orange", RGBColor(255, 127, 14)),
    ("purple", RGBColor(148, 103, 189)),
    ("red", RGBColor(255, 0, 0)),
];

/// A color name from the table above or a `#rrggbb` literal.
pub fn parse_color(spec: &str) -> Result<RGBColor> {
    let s = spec.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                return Ok(RGBColor(r, g, b));
            }
        }
        return Err(WigplotError::InvalidColor(spec.to_string()));
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|&(_, c)| c)
        .ok_or_else(|| WigplotError::InvalidColor(spec.to_string()))
}

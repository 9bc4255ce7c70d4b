//! Color tokens and the site palette
//!
//! Colors are written as 6-digit hex tokens (`"#D4AF37"`, `"d4af37"`) in code and
//! in config files. This module turns them into `image` pixels and back, and
//! defines the [`Palette`] that every scene is drawn from.

use crate::error::{AssetError, AssetResult};
use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Resolve a hex token to an RGB triple
///
/// Leading marker characters (usually `#`) are ignored. The rest must be
/// exactly six hexadecimal digits.
pub fn parse_hex(token: &str) -> AssetResult<Rgb<u8>> {
    let digits = token.trim_start_matches(|c: char| !c.is_ascii_hexdigit());

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AssetError::invalid_color(token));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| AssetError::invalid_color(token))
    };

    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Resolve a hex token plus an explicit alpha byte to RGBA
pub fn parse_hex_alpha(token: &str, alpha: u8) -> AssetResult<Rgba<u8>> {
    let Rgb([r, g, b]) = parse_hex(token)?;
    Ok(Rgba([r, g, b, alpha]))
}

/// Encode an RGB triple as a lowercase `#rrggbb` token
pub fn to_hex(color: Rgb<u8>) -> String {
    let Rgb([r, g, b]) = color;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// An RGB color that reads and writes itself as a hex token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Rgb<u8>);

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb([r, g, b]))
    }

    pub fn rgb(self) -> Rgb<u8> {
        self.0
    }

    /// Opaque RGBA
    pub fn rgba(self) -> Rgba<u8> {
        self.with_alpha(255)
    }

    pub fn with_alpha(self, alpha: u8) -> Rgba<u8> {
        let Rgb([r, g, b]) = self.0;
        Rgba([r, g, b, alpha])
    }
}

impl FromStr for HexColor {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl TryFrom<String> for HexColor {
    type Error = AssetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(self.0))
    }
}

/// Named colors used by the hero mockup and the feature icons
///
/// Every field can be overridden from the config file; missing fields keep the
/// gold-on-black defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub gold: HexColor,
    pub gold_light: HexColor,
    pub crimson: HexColor,
    pub dark_bg: HexColor,
    pub surface: HexColor,
    pub surface_elevated: HexColor,
    /// Outer phone frame
    pub frame: HexColor,
    pub notch: HexColor,
    pub text_primary: HexColor,
    pub text_secondary: HexColor,
    pub text_muted: HexColor,
    /// Profile placeholder gradient, top to bottom
    pub placeholder_top: HexColor,
    pub placeholder_bottom: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gold: HexColor::new(0xD4, 0xAF, 0x37),
            gold_light: HexColor::new(0xF2, 0xD2, 0x6D),
            crimson: HexColor::new(0xC4, 0x1E, 0x3A),
            dark_bg: HexColor::new(0x0D, 0x0D, 0x0D),
            surface: HexColor::new(0x1A, 0x1A, 0x1A),
            surface_elevated: HexColor::new(0x24, 0x24, 0x24),
            frame: HexColor::new(0x08, 0x08, 0x08),
            notch: HexColor::new(0x00, 0x00, 0x00),
            text_primary: HexColor::new(0xFF, 0xFF, 0xFF),
            text_secondary: HexColor::new(0x88, 0x88, 0x88),
            text_muted: HexColor::new(0x66, 0x66, 0x66),
            placeholder_top: HexColor::new(0x33, 0x33, 0x33),
            placeholder_bottom: HexColor::new(0x1A, 0x1A, 0x1A),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_marker() {
        assert_eq!(parse_hex("#D4AF37").unwrap(), Rgb([212, 175, 55]));
        assert_eq!(parse_hex("c41e3a").unwrap(), Rgb([196, 30, 58]));
        assert_eq!(parse_hex("#000000").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_hex("#ffffff").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_hex("##123456").unwrap(), Rgb([0x12, 0x34, 0x56]));
        assert_eq!(parse_hex("###D4AF37").unwrap(), Rgb([212, 175, 55]));
    }

    #[test]
    fn round_trips_through_hex() {
        for token in ["#D4AF37", "#f2d26d", "#0D0D0D", "#1a1A1a", "#00ff7F", "#123abc"] {
            let rgb = parse_hex(token).unwrap();
            assert!(
                to_hex(rgb).eq_ignore_ascii_case(token),
                "{token} re-encoded as {}",
                to_hex(rgb)
            );
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in [
            "", "#", "#FFF", "#12345", "#1234567", "#GG0000", "#12 456", "0x123456", "##",
            "#12345é",
        ] {
            assert!(
                matches!(
                    parse_hex(token),
                    Err(AssetError::InvalidColorFormat { .. })
                ),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn alpha_is_carried_through() {
        assert_eq!(
            parse_hex_alpha("#D4AF37", 60).unwrap(),
            Rgba([212, 175, 55, 60])
        );
        assert!(parse_hex_alpha("nope", 60).is_err());
    }

    #[test]
    fn hex_color_serde_uses_token_form() {
        let color: HexColor = serde_json::from_str("\"#C41E3A\"").unwrap();
        assert_eq!(color, HexColor::new(0xC4, 0x1E, 0x3A));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#c41e3a\"");
        assert!(serde_json::from_str::<HexColor>("\"#C41E3\"").is_err());
    }

    #[test]
    fn palette_fills_missing_fields_with_defaults() {
        let palette: Palette = serde_json::from_str(r##"{ "gold": "#FFD700" }"##).unwrap();
        assert_eq!(palette.gold, HexColor::new(0xFF, 0xD7, 0x00));
        assert_eq!(palette.crimson, Palette::default().crimson);
    }
}

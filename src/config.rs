//! Run configuration
//!
//! Everything has a default, so an empty JSON object (or no file at all) gives
//! the stock gold theme written to `assets/generated`.

use crate::color::Palette;
use crate::error::{AssetError, AssetResult};
use rusttype::Font;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fonts tried, in order, when no font is configured
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the PNG files are written to, created if missing
    pub output_dir: PathBuf,
    pub palette: Palette,
    pub glow: GlowConfig,
    /// TrueType font for the hero text
    pub font: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets/generated"),
            palette: Palette::default(),
            glow: GlowConfig::default(),
            font: None,
        }
    }
}

/// Soft halo drawn behind the hero phone frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// Transparent padding added on every side of the hero canvas
    pub margin: u32,
    /// Gaussian blur sigma
    pub blur: f32,
    pub alpha: u8,
}

impl GlowConfig {
    /// Largest accepted margin, keeping the padded hero within rasterizable bounds
    pub const MAX_MARGIN: u32 = 2000;

    pub fn validate(&self) -> AssetResult<()> {
        if self.margin > Self::MAX_MARGIN {
            return Err(AssetError::config(format!(
                "glow margin {} is larger than the maximum of {}",
                self.margin,
                Self::MAX_MARGIN
            )));
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            return Err(AssetError::config(format!(
                "glow blur must be a non-negative number, got {}",
                self.blur
            )));
        }
        Ok(())
    }
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            margin: 20,
            blur: 15.0,
            alpha: 60,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> AssetResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| AssetError::config(format!("{}: {e}", path.display())))?;
        config.glow.validate()?;
        Ok(config)
    }

    /// Load the configured font, or the first usable system font
    ///
    /// Returns `Ok(None)` when nothing is configured and no system font is found.
    pub fn load_font(&self) -> AssetResult<Option<Font<'static>>> {
        if let Some(path) = &self.font {
            let bytes = std::fs::read(path).map_err(|e| AssetError::io(path, e))?;
            return Font::try_from_vec(bytes).map(Some).ok_or_else(|| {
                AssetError::config(format!("{} is not a usable TrueType font", path.display()))
            });
        }

        for candidate in SYSTEM_FONTS {
            let Ok(bytes) = std::fs::read(candidate) else {
                continue;
            };
            if let Some(font) = Font::try_from_vec(bytes) {
                debug!(font = *candidate, "using system font");
                return Ok(Some(font));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use tempfile::TempDir;

    #[test]
    fn empty_object_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir, PathBuf::from("assets/generated"));
        assert_eq!(config.glow.margin, 20);
    }

    #[test]
    fn load_reads_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(
            &path,
            r##"{ "output_dir": "out", "glow": { "margin": 8 }, "palette": { "crimson": "#FF0000" } }"##,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.glow.margin, 8);
        assert_eq!(config.glow.alpha, 60);
        assert_eq!(config.palette.crimson, HexColor::new(255, 0, 0));
    }

    #[test]
    fn bad_palette_token_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(&path, r##"{ "palette": { "gold": "#GOLD00" } }"##).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::Config(_)));
        assert!(err.to_string().contains("invalid color format"));
    }

    #[test]
    fn oversized_glow_margin_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(&path, r#"{ "glow": { "margin": 2147483647 } }"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::Config(_)));
        assert!(err.to_string().contains("glow margin 2147483647"));

        std::fs::write(&path, r#"{ "glow": { "margin": 2000 } }"#).unwrap();
        assert_eq!(Config::load(&path).unwrap().glow.margin, GlowConfig::MAX_MARGIN);
    }

    #[test]
    fn negative_blur_is_rejected() {
        let glow = GlowConfig {
            blur: -1.0,
            ..GlowConfig::default()
        };
        assert!(matches!(glow.validate(), Err(AssetError::Config(_))));
        assert!(GlowConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn unreadable_font_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let config = Config {
            font: Some(path),
            ..Config::default()
        };
        assert!(matches!(config.load_font(), Err(AssetError::Config(_))));
    }
}

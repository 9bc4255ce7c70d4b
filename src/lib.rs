//! Procedural PNG assets for the marketing site: the app hero mockup and the
//! feature icons, drawn from a configurable gold palette.

pub mod asset_gen;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod gradient;
pub mod mask;
mod raster;
pub mod scene;
pub mod shape;

pub use asset_gen::generate_assets;
pub use color::{parse_hex, parse_hex_alpha, to_hex, HexColor, Palette};
pub use config::{Config, GlowConfig};
pub use error::{AssetError, AssetResult};
pub use scene::{Asset, Icon};

use std::path::PathBuf;

pub type AssetResult<T> = Result<T, AssetError>;

/// Errors raised while resolving colors, compositing buffers or writing assets
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("invalid color format: {token:?} (expected 6 hex digits, e.g. \"#D4AF37\")")]
    InvalidColorFormat { token: String },

    #[error(
        "dimension mismatch: overlay is {}x{} but mask is {}x{}",
        overlay.0, overlay.1, mask.0, mask.1
    )]
    DimensionMismatch {
        overlay: (u32, u32),
        mask: (u32, u32),
    },

    #[error("canvas too large to rasterize: {width}x{height}")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("io error with {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown asset: {0}")]
    UnknownAsset(String),
}

impl AssetError {
    pub fn invalid_color(token: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            token: token.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

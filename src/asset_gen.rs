use crate::config::Config;
use crate::error::AssetError;
use crate::scene::Asset;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use rusttype::Font;
use std::{
    fs::create_dir_all,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Generate the selected assets (all of them when `only` is `None`) into
/// `config.output_dir`, returning the written paths in generation order
pub fn generate_assets(config: &Config, only: Option<&[String]>) -> Result<Vec<PathBuf>> {
    // Resolve the selection before touching the filesystem
    let assets = select_assets(only)?;

    let font = config.load_font().context("Failed to load font")?;
    if font.is_none() && assets.contains(&Asset::Hero) {
        warn!("no font found, hero text will be left out (pass --font to include it)");
    }

    // Ensure the output directory exists
    create_dir_all(&config.output_dir)
        .map_err(|e| AssetError::io(&config.output_dir, e))
        .context("Can't create output directory")?;

    let mut written = Vec::with_capacity(assets.len());
    for asset in assets {
        written.push(generate_asset(asset, config, font.as_ref())?);
    }

    Ok(written)
}

/// Parse asset names, keeping generation order and dropping duplicates
fn select_assets(only: Option<&[String]>) -> Result<Vec<Asset>> {
    let Some(names) = only else {
        return Ok(Asset::all());
    };

    let mut wanted = Vec::new();
    for name in names {
        let asset: Asset = name
            .trim()
            .parse()
            .with_context(|| format!("Unknown asset {name:?}. Available: {}", available()))?;
        wanted.push(asset);
    }

    Ok(Asset::all()
        .into_iter()
        .filter(|asset| wanted.contains(asset))
        .collect())
}

fn available() -> String {
    Asset::all()
        .into_iter()
        .map(Asset::name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn generate_asset(asset: Asset, config: &Config, font: Option<&Font<'static>>) -> Result<PathBuf> {
    let filename = asset.file_name();
    println!("Generating {filename}...");

    let image = asset
        .render(config, font)
        .with_context(|| format!("Failed to render {filename}"))?;

    let output_path = config.output_dir.join(&filename);
    save_png(&image, &output_path)?;

    info!(
        path = %output_path.display(),
        width = image.width(),
        height = image.height(),
        "asset written"
    );
    println!("✓ Generated {filename}");
    Ok(output_path)
}

/// Write `image` next to `path` and move it into place once fully encoded, so an
/// earlier good file is never left half overwritten
fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| AssetError::io(dir, e))
        .context("Failed to create PNG file")?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_png(image, &mut writer).context("Failed to write PNG")?;
        writer
            .flush()
            .map_err(|e| AssetError::io(path, e))
            .context("Failed to write PNG")?;
    }

    tmp.persist(path)
        .map_err(|e| AssetError::io(path, e.error))
        .with_context(|| format!("Failed to move PNG into place at {}", path.display()))?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(AssetError::from)?;
    Ok(())
}

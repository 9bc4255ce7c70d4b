use image::{io::Reader as ImageReader, RgbaImage};
use site_assets::{Asset, GlowConfig};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let dir = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "assets/generated".to_string()),
    );
    let glow = GlowConfig::default();
    let mut problems = 0;

    println!("Checking assets in: {}", dir.display());

    for asset in Asset::all() {
        let path = dir.join(asset.file_name());
        let decoded = ImageReader::open(&path)
            .map_err(image::ImageError::from)
            .and_then(|reader| reader.decode());
        let img = match decoded {
            Ok(img) => img.to_rgba8(),
            Err(err) => {
                println!("✗ {}: {err}", asset.file_name());
                problems += 1;
                continue;
            }
        };

        let layout = asset
            .dimensions(&glow)
            .map(|(w, h)| format!("{w}x{h}"))
            .unwrap_or_else(|err| err.to_string());

        println!("\n{} (default layout: {layout}):", asset.file_name());
        if !report(&img) {
            problems += 1;
        }
    }

    if problems == 0 {
        println!("\n✓ All assets present");
        ExitCode::SUCCESS
    } else {
        println!("\n⚠ {problems} asset(s) missing or empty");
        ExitCode::FAILURE
    }
}

/// Print the size, centre pixel and visible pixel count of one decoded asset,
/// returning whether it looks usable
fn report(img: &RgbaImage) -> bool {
    let (width, height) = img.dimensions();
    println!("  Dimensions: {width}x{height}");
    if width == 0 || height == 0 {
        println!("  ⚠ Image has no pixels");
        return false;
    }

    let center = img.get_pixel(width / 2, height / 2);
    let visible = img.pixels().filter(|p| p[3] > 0).count();
    println!(
        "  Center pixel: RGBA [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );
    println!("  Visible pixels: {visible}");

    if visible == 0 {
        println!("  ⚠ Asset is fully transparent");
        return false;
    }
    true
}

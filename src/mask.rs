//! Shape masks and mask-weighted compositing

use crate::error::{AssetError, AssetResult};
use crate::raster::{coverage_mask, Style};
use crate::shape::{Rect, Shape};
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgba, RgbaImage};
use vello_cpu::peniko::Fill;

/// Build a `width` x `height` opacity mask for `shape` inscribed in the region
///
/// Pixels inside the shape are 255, pixels outside are 0, and pixels on the
/// edge hold their anti-aliased coverage.
pub fn build_mask(width: u32, height: u32, shape: Shape) -> AssetResult<GrayImage> {
    let path = shape.path(Rect::of_size(width, height).area(0.0));
    coverage_mask(&path, &Style::Fill(Fill::NonZero), width, height)
}

/// Paste `overlay` onto `dest` at (`x`, `y`), weighted by `mask`
///
/// The effective weight of each pixel is `mask / 255` times the overlay's own
/// alpha. A weight of 255 replaces the destination pixel, a weight of 0 leaves it
/// untouched, anything in between is blended source-over. Pixels falling outside
/// `dest` are skipped, so the origin may be negative or past the edge.
pub fn composite<P>(
    dest: &mut RgbaImage,
    overlay: &ImageBuffer<P, Vec<u8>>,
    mask: &GrayImage,
    x: i64,
    y: i64,
) -> AssetResult<()>
where
    P: Pixel<Subpixel = u8>,
{
    if overlay.dimensions() != mask.dimensions() {
        return Err(AssetError::DimensionMismatch {
            overlay: overlay.dimensions(),
            mask: mask.dimensions(),
        });
    }

    let (dest_w, dest_h) = (dest.width() as i64, dest.height() as i64);

    for (ox, oy, src) in overlay.enumerate_pixels() {
        let (Some(dx), Some(dy)) = (x.checked_add(ox.into()), y.checked_add(oy.into())) else {
            continue;
        };
        if dx < 0 || dy < 0 || dx >= dest_w || dy >= dest_h {
            continue;
        }

        let Luma([m]) = *mask.get_pixel(ox, oy);
        if m == 0 {
            continue;
        }

        let src = src.to_rgba();
        let weight = mul_div255(m, src[3]);
        let dst = dest.get_pixel_mut(dx as u32, dy as u32);
        *dst = over(*dst, src, weight);
    }

    Ok(())
}

/// Source-over of the colour channels of `src` at `weight`, ignoring `src`'s own alpha
pub(crate) fn over(dst: Rgba<u8>, src: Rgba<u8>, weight: u8) -> Rgba<u8> {
    match weight {
        0 => dst,
        255 => Rgba([src[0], src[1], src[2], 255]),
        _ => {
            let sa = weight as f32 / 255.0;
            let da = dst[3] as f32 / 255.0 * (1.0 - sa);
            let out_a = sa + da;

            let mut out = [0u8; 4];
            for i in 0..3 {
                let c = (src[i] as f32 * sa + dst[i] as f32 * da) / out_a;
                out[i] = c.round().clamp(0.0, 255.0) as u8;
            }
            out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
            Rgba(out)
        }
    }
}

pub(crate) fn mul_div255(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

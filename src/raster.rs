//! Anti-aliased path coverage, rendered with `vello_cpu`
//!
//! Paths are rasterized in white into a pixmap sized to the part of the surface
//! they can touch; the pixmap's alpha channel is then the per-pixel coverage.

use crate::error::{AssetError, AssetResult};
use image::{GrayImage, Luma};
use vello_cpu::kurbo::{Affine, BezPath, Shape as _, Stroke};
use vello_cpu::peniko::{Color, Fill};
use vello_cpu::{Pixmap, RenderContext};

/// How a path is turned into covered area
#[derive(Debug, Clone)]
pub(crate) enum Style {
    Fill(Fill),
    Stroke(Stroke),
}

impl Style {
    /// Distance paint can reach past the path's bounding box, anti-aliasing included
    fn reach(&self) -> f64 {
        match self {
            Style::Fill(_) => 1.0,
            Style::Stroke(stroke) => stroke.width / 2.0 + 1.0,
        }
    }
}

/// Coverage of one path over a pixel region of a larger surface
pub(crate) struct Coverage {
    x: u32,
    y: u32,
    pixmap: Pixmap,
}

impl Coverage {
    /// Rasterize `path` over the part of a `width` x `height` surface it touches
    ///
    /// Returns `None` when the path lies entirely off the surface. Regions are
    /// capped at `u16::MAX` pixels per side.
    pub(crate) fn render(path: &BezPath, style: &Style, width: u32, height: u32) -> Option<Self> {
        let reach = style.reach();
        let bbox = path.bounding_box().inflate(reach, reach);
        let x0 = bbox.x0.floor().max(0.0);
        let y0 = bbox.y0.floor().max(0.0);
        let x1 = bbox.x1.ceil().min(f64::from(width));
        let y1 = bbox.y1.ceil().min(f64::from(height));
        // Also rejects NaN bounds
        if !(x1 > x0 && y1 > y0) {
            return None;
        }

        let region_w = (x1 - x0).min(f64::from(u16::MAX)) as u16;
        let region_h = (y1 - y0).min(f64::from(u16::MAX)) as u16;

        let mut ctx = RenderContext::new(region_w, region_h);
        ctx.set_transform(Affine::translate((-x0, -y0)));
        ctx.set_paint(Color::from_rgba8(255, 255, 255, 255));
        match style {
            Style::Fill(rule) => {
                ctx.set_fill_rule(*rule);
                ctx.fill_path(path);
            }
            Style::Stroke(stroke) => {
                ctx.set_stroke(stroke.clone());
                ctx.stroke_path(path);
            }
        }
        ctx.flush();

        let mut pixmap = Pixmap::new(region_w, region_h);
        ctx.render_to_pixmap(&mut pixmap);

        Some(Self {
            x: x0 as u32,
            y: y0 as u32,
            pixmap,
        })
    }

    /// Surface position and coverage of every pixel the path touches
    pub(crate) fn pixels(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        let stride = u32::from(self.pixmap.width());
        self.pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px[3] > 0)
            .map(move |(i, px)| {
                let i = i as u32;
                (self.x + i % stride, self.y + i / stride, px[3])
            })
    }
}

/// Coverage of `path` over a whole `width` x `height` surface, as a grayscale mask
pub(crate) fn coverage_mask(
    path: &BezPath,
    style: &Style,
    width: u32,
    height: u32,
) -> AssetResult<GrayImage> {
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(AssetError::CanvasTooLarge { width, height });
    }

    let mut mask = GrayImage::new(width, height);
    if let Some(coverage) = Coverage::render(path, style, width, height) {
        for (x, y, a) in coverage.pixels() {
            mask.put_pixel(x, y, Luma([a]));
        }
    }
    Ok(mask)
}

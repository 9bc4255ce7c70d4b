//! Immediate-mode drawing on an RGBA canvas
//!
//! Boxes use inclusive pixel coordinates, so `Rect::new(10.0, 10.0, 390.0, 790.0)`
//! covers 381 x 781 pixels. Angles are in degrees, clockwise from three o'clock.
//! Shapes are built as `kurbo` paths and rasterized with `vello_cpu`.

use crate::mask::{mul_div255, over};
use crate::raster::{Coverage, Style};
use crate::shape::{rounded_rect, Rect, TOLERANCE};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use tracing::debug;
use vello_cpu::kurbo::{self, BezPath, Cap, Ellipse, Join, Shape as _, Vec2};
use vello_cpu::peniko::Fill;

/// Stroke color and width for an outline
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub color: Rgba<u8>,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Rgba<u8>, width: f32) -> Self {
        Self { color, width }
    }

    fn style(&self, cap: Cap) -> Style {
        Style::Stroke(
            kurbo::Stroke::new(f64::from(self.width))
                .with_caps(cap)
                .with_join(Join::Round),
        )
    }

    /// Distance from a box's edge to the centre line of an outline drawn inside it
    fn inset(&self) -> f64 {
        f64::from(self.width) / 2.0
    }
}

/// Draws filled and stroked shapes onto a canvas
///
/// A single shape is rasterized over at most `u16::MAX` pixels per side.
pub struct Painter<'a> {
    canvas: &'a mut RgbaImage,
    font: Option<&'a Font<'static>>,
    text_scale: Scale,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut RgbaImage) -> Self {
        Self {
            canvas,
            font: None,
            text_scale: Scale::uniform(14.0),
        }
    }

    pub fn with_font(mut self, font: Option<&'a Font<'static>>) -> Self {
        self.font = font;
        self
    }

    pub fn canvas(&mut self) -> &mut RgbaImage {
        &mut *self.canvas
    }

    /// Solid axis aligned rectangle
    pub fn rect(&mut self, bounds: Rect, fill: Rgba<u8>) {
        let path = bounds.area(0.0).to_path(TOLERANCE);
        self.paint(&path, &Style::Fill(Fill::NonZero), fill);
    }

    /// Rounded rectangle, the outline drawn just inside `bounds`
    pub fn rounded_rect(
        &mut self,
        bounds: Rect,
        radius: f32,
        fill: Option<Rgba<u8>>,
        outline: Option<Stroke>,
    ) {
        let radius = f64::from(radius);
        if let Some(fill) = fill {
            let path = rounded_rect(bounds.area(0.0), radius);
            self.paint(&path, &Style::Fill(Fill::NonZero), fill);
        }
        if let Some(stroke) = outline {
            let inset = stroke.inset();
            let path = rounded_rect(bounds.area(inset), radius - inset);
            self.paint(&path, &stroke.style(Cap::Butt), stroke.color);
        }
    }

    /// Ellipse inscribed in `bounds`, the outline drawn just inside it
    pub fn ellipse(&mut self, bounds: Rect, fill: Option<Rgba<u8>>, outline: Option<Stroke>) {
        if let Some(fill) = fill {
            let path = Ellipse::from_rect(bounds.area(0.0)).to_path(TOLERANCE);
            self.paint(&path, &Style::Fill(Fill::NonZero), fill);
        }
        if let Some(stroke) = outline {
            let path = Ellipse::from_rect(bounds.area(stroke.inset())).to_path(TOLERANCE);
            self.paint(&path, &stroke.style(Cap::Butt), stroke.color);
        }
    }

    /// Elliptical arc band from `start` to `end` degrees, wrapping past 360
    pub fn arc(&mut self, bounds: Rect, start: f32, end: f32, stroke: Stroke) {
        let start = start.rem_euclid(360.0);
        let mut sweep = end.rem_euclid(360.0) - start;
        if sweep <= 0.0 {
            sweep += 360.0;
        }

        let area = bounds.area(stroke.inset());
        // y grows downwards, so a positive sweep runs clockwise on screen
        let arc = kurbo::Arc {
            center: area.center(),
            radii: Vec2::new(area.width() / 2.0, area.height() / 2.0),
            start_angle: f64::from(start).to_radians(),
            sweep_angle: f64::from(sweep).to_radians(),
            x_rotation: 0.0,
        };
        self.paint(&arc.to_path(TOLERANCE), &stroke.style(Cap::Butt), stroke.color);
    }

    /// Polyline through the centres of the pixels at `points`, with round joins and caps
    pub fn line(&mut self, points: &[(f32, f32)], stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        let path = pixel_path(points, false);
        self.paint(&path, &stroke.style(Cap::Round), stroke.color);
    }

    /// Even-odd filled polygon through the centres of the pixels at `points`
    pub fn polygon(&mut self, points: &[(f32, f32)], fill: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }
        let path = pixel_path(points, true);
        self.paint(&path, &Style::Fill(Fill::EvenOdd), fill);
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    ///
    /// Without a font the call is skipped, leaving the rest of the scene intact.
    pub fn text(&mut self, x: f32, y: f32, text: &str, color: Rgba<u8>) {
        let Some(font) = self.font else {
            debug!(text, "no font loaded, skipping text");
            return;
        };

        let ascent = font.v_metrics(self.text_scale).ascent;
        let canvas = &mut *self.canvas;
        let (width, height) = canvas.dimensions();

        for glyph in font.layout(text, self.text_scale, point(x, y + ascent)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                    blend_pixel(canvas, px as u32, py as u32, color, v);
                }
            });
        }
    }

    /// Blend `color` onto the canvas wherever `path` covers it
    fn paint(&mut self, path: &BezPath, style: &Style, color: Rgba<u8>) {
        let (width, height) = self.canvas.dimensions();
        let Some(coverage) = Coverage::render(path, style, width, height) else {
            return;
        };

        for (x, y, a) in coverage.pixels() {
            let pixel = self.canvas.get_pixel_mut(x, y);
            *pixel = over(*pixel, color, mul_div255(a, color[3]));
        }
    }
}

/// Source-over blend of `color` at `coverage` onto a single pixel
pub fn blend_pixel(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    let weight = (color[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
    let pixel = canvas.get_pixel_mut(x, y);
    *pixel = over(*pixel, color, weight);
}

fn pixel_path(points: &[(f32, f32)], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        let p = (f64::from(x) + 0.5, f64::from(y) + 0.5);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    if closed {
        path.close_path();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: Rgba<u8> = Rgba([212, 175, 55, 255]);

    fn blank(size: u32) -> RgbaImage {
        RgbaImage::new(size, size)
    }

    #[track_caller]
    fn assert_painted(img: &RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
        let p = *img.get_pixel(x, y);
        assert!(p[3] > 250, "({x}, {y}) is {p:?}");
        assert_eq!(p.0[..3], color.0[..3], "({x}, {y})");
    }

    #[test]
    fn rect_fills_inclusive_bounds() {
        let mut img = blank(20);
        Painter::new(&mut img).rect(Rect::new(2.0, 3.0, 5.0, 6.0), GOLD);
        assert_painted(&img, 2, 3, GOLD);
        assert_painted(&img, 5, 6, GOLD);
        assert_eq!(img.get_pixel(6, 6)[3], 0);
        assert_eq!(img.get_pixel(1, 3)[3], 0);
        assert_eq!(img.pixels().filter(|p| p[3] > 0).count(), 16);
    }

    #[test]
    fn rounded_rect_outline_stays_inside_its_box() {
        let mut img = blank(40);
        Painter::new(&mut img).rounded_rect(
            Rect::new(5.0, 5.0, 34.0, 34.0),
            6.0,
            None,
            Some(Stroke::new(GOLD, 2.0)),
        );
        assert_painted(&img, 20, 5, GOLD);
        assert_painted(&img, 20, 6, GOLD);
        assert_eq!(img.get_pixel(20, 4)[3], 0);
        assert_eq!(img.get_pixel(20, 20)[3], 0);
        assert_eq!(img.get_pixel(5, 5)[3], 0);
    }

    #[test]
    fn ellipse_outline_leaves_centre_empty() {
        let mut img = blank(40);
        Painter::new(&mut img).ellipse(
            Rect::new(0.0, 0.0, 39.0, 39.0),
            None,
            Some(Stroke::new(GOLD, 3.0)),
        );
        assert_eq!(img.get_pixel(20, 20)[3], 0);
        assert_painted(&img, 20, 1, GOLD);
    }

    #[test]
    fn lower_half_arc_skips_upper_half() {
        let mut img = blank(40);
        Painter::new(&mut img).arc(
            Rect::new(0.0, 0.0, 39.0, 39.0),
            0.0,
            180.0,
            Stroke::new(GOLD, 3.0),
        );
        assert_painted(&img, 20, 38, GOLD);
        assert_eq!(img.get_pixel(20, 1)[3], 0);
    }

    #[test]
    fn wrapping_arc_covers_upper_half() {
        let mut img = blank(40);
        Painter::new(&mut img).arc(
            Rect::new(0.0, 0.0, 39.0, 39.0),
            180.0,
            0.0,
            Stroke::new(GOLD, 3.0),
        );
        assert_painted(&img, 20, 1, GOLD);
        assert_eq!(img.get_pixel(20, 38)[3], 0);
    }

    #[test]
    fn line_covers_its_path() {
        let mut img = blank(30);
        Painter::new(&mut img).line(&[(2.0, 15.0), (28.0, 15.0)], Stroke::new(GOLD, 4.0));
        assert_painted(&img, 15, 14, GOLD);
        assert_painted(&img, 15, 16, GOLD);
        assert_eq!(img.get_pixel(15, 25)[3], 0);
    }

    #[test]
    fn polygon_fills_interior_only() {
        let mut img = blank(30);
        Painter::new(&mut img).polygon(&[(5.0, 5.0), (25.0, 5.0), (15.0, 25.0)], GOLD);
        assert_painted(&img, 15, 10, GOLD);
        assert_eq!(img.get_pixel(2, 20)[3], 0);
    }

    #[test]
    fn shapes_off_the_canvas_are_clipped() {
        let mut img = blank(10);
        let mut p = Painter::new(&mut img);
        p.ellipse(Rect::new(-40.0, -40.0, -20.0, -20.0), Some(GOLD), None);
        p.rect(Rect::new(-5.0, 8.0, 50.0, 50.0), GOLD);
        assert_painted(&img, 0, 9, GOLD);
        assert_eq!(img.get_pixel(0, 7)[3], 0);
    }

    #[test]
    fn text_without_font_is_a_no_op() {
        let mut img = blank(30);
        Painter::new(&mut img).text(2.0, 2.0, "9:41", GOLD);
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn translucent_fill_blends_over_existing_pixels() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        Painter::new(&mut img).rect(Rect::new(0.0, 0.0, 3.0, 3.0), Rgba([255, 255, 255, 128]));
        let p = *img.get_pixel(1, 1);
        assert_eq!(p[3], 255);
        assert!(p[0] > 100 && p[0] < 160);
    }
}

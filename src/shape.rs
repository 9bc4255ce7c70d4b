//! Shape geometry shared by the mask builder and the painter

use vello_cpu::kurbo::{self, BezPath, Ellipse, RoundedRect, Shape as _};

/// Curve flattening tolerance, in pixels
pub(crate) const TOLERANCE: f64 = 0.1;

/// Axis aligned box with inclusive pixel coordinates, `x0..=x1` by `y0..=y1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box covering a whole `width` x `height` buffer
    pub fn of_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32 - 1.0, height as f32 - 1.0)
    }

    /// Covered area in continuous coordinates, shrunk by `inset` on every side
    ///
    /// The inset is capped at half the box's size.
    pub(crate) fn area(&self, inset: f64) -> kurbo::Rect {
        let outer = kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1) + 1.0,
            f64::from(self.y1) + 1.0,
        )
        .abs();
        let inset = inset.min(outer.width() / 2.0).min(outer.height() / 2.0).max(0.0);
        kurbo::Rect::new(
            outer.x0 + inset,
            outer.y0 + inset,
            outer.x1 - inset,
            outer.y1 - inset,
        )
    }
}

/// Shape inscribed in a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    RoundedRect { radius: f32 },
    Ellipse,
}

impl Shape {
    /// Closed outline of the shape inscribed in `area`
    pub(crate) fn path(&self, area: kurbo::Rect) -> BezPath {
        match *self {
            Shape::RoundedRect { radius } => rounded_rect(area, f64::from(radius)),
            Shape::Ellipse => Ellipse::from_rect(area).to_path(TOLERANCE),
        }
    }
}

/// Rounded rectangle path, the radius clamped to fit the area
pub(crate) fn rounded_rect(area: kurbo::Rect, radius: f64) -> BezPath {
    let limit = area.width().min(area.height()) / 2.0;
    RoundedRect::from_rect(area, radius.min(limit).max(0.0)).to_path(TOLERANCE)
}

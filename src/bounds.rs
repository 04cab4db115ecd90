//! Outline bounding boxes, measured the way a y-down renderer sees them.

use kurbo::{BezPath, Point, Rect, Shape};

/// An axis-aligned rectangle with y pointing down, so `top` is the smallest
/// y value and `bottom` the largest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    // An outline with no points. Its edges are infinite, which is what lets
    // callers recognise empty glyphs from the numbers alone.
    pub const EMPTY: Bounds = Bounds {
        left: f64::INFINITY,
        top: f64::INFINITY,
        right: f64::NEG_INFINITY,
        bottom: f64::NEG_INFINITY,
    };

    pub fn is_empty(&self) -> bool {
        !(self.left <= self.right && self.top <= self.bottom)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::EMPTY
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds {
            left: rect.x0,
            top: rect.y0,
            right: rect.x1,
            bottom: rect.y1,
        }
    }
}

/// Collects a glyph outline as a path. Incoming points are in font design
/// units with y up; they are scaled by `scale` and flipped so the path is in
/// the same space as `Bounds`.
pub struct BoundsBuilder {
    scale: f64,
    path: BezPath,
}

impl BoundsBuilder {
    pub fn new(scale: f64) -> Self {
        BoundsBuilder {
            scale,
            path: BezPath::new(),
        }
    }

    /// Tight bounds of the outline collected so far, curve extrema
    /// included. An outline without any segments is `Bounds::EMPTY`.
    pub fn bounds(&self) -> Bounds {
        if self.path.segments().next().is_none() {
            return Bounds::EMPTY;
        }
        Bounds::from(self.path.bounding_box())
    }

    fn transform(&self, x: f32, y: f32) -> Point {
        Point::new(f64::from(x) * self.scale, -f64::from(y) * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for BoundsBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.transform(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.transform(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.transform(x1, y1);
        let p = self.transform(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.transform(x1, y1);
        let c2 = self.transform(x2, y2);
        let p = self.transform(x, y);
        self.path.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

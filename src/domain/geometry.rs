//! Geometric types for the logical floor-plan canvas
//!
//! Every bounding box lives in a fixed 1200×800 logical space. Widgets map
//! pointer positions into that space through a [`ViewTransform`], so stored
//! geometry never depends on window size.

use serde::{Deserialize, Serialize};

/// Logical canvas width in units
pub const CANVAS_WIDTH: f32 = 1200.0;
/// Logical canvas height in units
pub const CANVAS_HEIGHT: f32 = 800.0;

/// A point in logical canvas (or widget-local screen) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp this point into the logical canvas
    pub fn clamp_to_canvas(self) -> Self {
        Self {
            x: self.x.clamp(0.0, CANVAS_WIDTH),
            y: self.y.clamp(0.0, CANVAS_HEIGHT),
        }
    }
}

/// Axis-aligned rectangle in logical canvas units
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build the box spanned by two arbitrary corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Check if a point lies inside the box (edges inclusive)
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Grow the box by `pad` on every side
    pub fn inflate(&self, pad: f32) -> Self {
        Self {
            x: self.x - pad,
            y: self.y - pad,
            width: self.width + 2.0 * pad,
            height: self.height + 2.0 * pad,
        }
    }

    /// True when both sides are strictly larger than `min`
    pub fn exceeds(&self, min: f32) -> bool {
        self.width > min && self.height > min
    }
}

/// Scale/translate mapping between widget-local screen space and the logical canvas
///
/// `screen = offset + logical * scale`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ViewTransform {
    /// Fit the logical canvas into `width`×`height`, preserving aspect ratio and centering
    pub fn fit(width: f32, height: f32) -> Self {
        let scale = (width / CANVAS_WIDTH).min(height / CANVAS_HEIGHT).max(f32::EPSILON);
        Self {
            scale,
            offset_x: (width - CANVAS_WIDTH * scale) * 0.5,
            offset_y: (height - CANVAS_HEIGHT * scale) * 0.5,
        }
    }

    pub fn to_logical(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset_x) / self.scale,
            (screen.y - self.offset_y) / self.scale,
        )
    }

    pub fn to_screen(&self, logical: Point) -> Point {
        Point::new(
            self.offset_x + logical.x * self.scale,
            self.offset_y + logical.y * self.scale,
        )
    }

    pub fn box_to_screen(&self, bbox: &BoundingBox) -> BoundingBox {
        let origin = self.to_screen(Point::new(bbox.x, bbox.y));
        BoundingBox::new(
            origin.x,
            origin.y,
            bbox.width * self.scale,
            bbox.height * self.scale,
        )
    }
}

//! Drag gesture state for drawing machine bounding boxes
//!
//! All points are stored in logical canvas coordinates.

use super::geometry::{BoundingBox, Point};

/// In-progress pointer drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    /// Where the pointer went down
    pub start: Point,
    /// Latest pointer position, replaced on every move
    pub current: Point,
}

impl Drag {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            current: start,
        }
    }

    /// Rectangle spanned by the gesture so far
    pub fn rect(&self) -> BoundingBox {
        BoundingBox::from_corners(self.start, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_rect_tracks_latest_point() {
        let mut drag = Drag::new(Point::new(300.0, 300.0));
        drag.current = Point::new(250.0, 400.0);
        drag.current = Point::new(260.0, 410.0);
        assert_eq!(drag.rect(), BoundingBox::new(260.0, 300.0, 40.0, 110.0));
    }
}

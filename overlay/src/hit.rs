//! Occupied-region tests: whether a press lands on a layer's content.
//!
//! A drag only starts when the press falls inside the screen rectangle the
//! active layer's source currently occupies. Edges count as inside.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::image::ImageSize;
use crate::mapper::{CoordinateMapper, Point};
use crate::view::LayerView;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ScreenRect {
    /// Inclusive on all four edges.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Screen rectangle covered by the background image at its displayed size.
#[must_use]
pub fn image_region(original: ImageSize, view: &LayerView) -> ScreenRect {
    let displayed = original.scaled(view.scale());
    let left = f64::from(view.offset_x());
    let top = f64::from(view.offset_y());
    ScreenRect {
        left,
        top,
        right: left + f64::from(displayed.width),
        bottom: top + f64::from(displayed.height),
    }
}

/// Screen rectangle covered by the whole drawing space of the network.
#[must_use]
pub fn network_region(mapper: &CoordinateMapper, view: &LayerView) -> ScreenRect {
    let (width, height) = mapper.drawing_extent();
    let top_left = CoordinateMapper::to_screen(Point::new(0.0, 0.0), view);
    let bottom_right = CoordinateMapper::to_screen(Point::new(width, height), view);
    ScreenRect { left: top_left.x, top: top_left.y, right: bottom_right.x, bottom: bottom_right.y }
}

//! Transforms between network-model space, drawing space and screen space.
//!
//! Drawing space is a normalized, aspect-preserving frame derived from the
//! network's bounding box: its width is a fixed extent `S` and its height is
//! `S * height / width`. Model Y grows upward while drawing Y grows downward,
//! so the vertical axis is flipped on the way in and out. Screen space applies
//! a [`LayerView`]'s scale and pan offset on top of drawing space.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::error::BoundsError;
use crate::view::LayerView;

/// A point in network, drawing or screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a network, in network-model units.
///
/// Always has a strictly positive width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkBounds {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl NetworkBounds {
    /// Build bounds from an origin and extent.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::NonFinite`] for NaN/infinite inputs and
    /// [`BoundsError::Degenerate`] when either extent is not positive.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Result<Self, BoundsError> {
        if !(min_x.is_finite() && min_y.is_finite() && width.is_finite() && height.is_finite()) {
            return Err(BoundsError::NonFinite);
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(BoundsError::Degenerate { width, height });
        }
        Ok(Self { min_x, min_y, width, height })
    }

    /// Min/max scan over a set of node coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Empty`] when there are no points,
    /// [`BoundsError::NonFinite`] for any NaN/infinite coordinate, otherwise
    /// the same errors as [`NetworkBounds::new`].
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Result<Self, BoundsError> {
        let mut points = points.into_iter().map(|p| {
            if p.x.is_finite() && p.y.is_finite() { Ok(p) } else { Err(BoundsError::NonFinite) }
        });
        let first = points.next().ok_or(BoundsError::Empty)??;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            let p = p?;
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }
}

/// Pure mapping between the three coordinate spaces for one network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: NetworkBounds,
    extent: f64,
}

impl CoordinateMapper {
    /// `extent` is the drawing-space width `S` and must be positive and finite.
    #[must_use]
    pub fn new(bounds: NetworkBounds, extent: f64) -> Self {
        Self { bounds, extent }
    }

    #[must_use]
    pub fn bounds(&self) -> NetworkBounds {
        self.bounds
    }

    /// Width and height of drawing space. The height keeps the network's aspect ratio.
    #[must_use]
    pub fn drawing_extent(&self) -> (f64, f64) {
        (self.extent, self.drawing_height())
    }

    fn drawing_height(&self) -> f64 {
        self.extent * self.bounds.height / self.bounds.width
    }

    /// Network-model coordinates to drawing space.
    #[must_use]
    pub fn to_drawing_space(&self, network: Point) -> Point {
        let u = (network.x - self.bounds.min_x) / self.bounds.width * self.extent;
        let v = (network.y - self.bounds.min_y) / self.bounds.width * self.extent;
        Point::new(u, self.drawing_height() - v)
    }

    /// Drawing space back to network-model coordinates.
    #[must_use]
    pub fn to_network_space(&self, drawing: Point) -> Point {
        let x = drawing.x / self.extent * self.bounds.width + self.bounds.min_x;
        let y = (self.drawing_height() - drawing.y) / self.extent * self.bounds.width + self.bounds.min_y;
        Point::new(x, y)
    }

    /// Drawing (layer) space to screen pixels under `view`.
    #[must_use]
    pub fn to_screen(layer: Point, view: &LayerView) -> Point {
        Point::new(
            layer.x * view.scale() + f64::from(view.offset_x()),
            layer.y * view.scale() + f64::from(view.offset_y()),
        )
    }

    /// Screen pixels back to drawing (layer) space under `view`.
    #[must_use]
    pub fn to_layer_space(screen: Point, view: &LayerView) -> Point {
        Point::new(
            (screen.x - f64::from(view.offset_x())) / view.scale(),
            (screen.y - f64::from(view.offset_y())) / view.scale(),
        )
    }

    /// Network-model coordinates straight to screen pixels.
    #[must_use]
    pub fn network_to_screen(&self, network: Point, view: &LayerView) -> Point {
        Self::to_screen(self.to_drawing_space(network), view)
    }

    /// Screen pixels straight to network-model coordinates.
    #[must_use]
    pub fn screen_to_network(&self, screen: Point, view: &LayerView) -> Point {
        self.to_network_space(Self::to_layer_space(screen, view))
    }
}

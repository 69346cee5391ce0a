//! Per-layer pan offset and zoom scale.
//!
//! The background image has its own [`LayerView`]; the network and overlay
//! layers share one. Views change only through zoom commands, completed drag
//! gestures, overlay file loads, and [`LayerView::reset`] when the layer's
//! source is replaced.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::consts::DEFAULT_SCALE;
use crate::error::ViewError;
use crate::input::Layer;

/// Pan offset (whole screen pixels) and zoom scale of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerView {
    scale: f64,
    offset_x: i32,
    offset_y: i32,
}

impl Default for LayerView {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE, offset_x: 0, offset_y: 0 }
    }
}

impl LayerView {
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidScale`] unless `scale` is positive and finite.
    pub fn new(scale: f64, offset_x: i32, offset_y: i32) -> Result<Self, ViewError> {
        check_scale(scale)?;
        Ok(Self { scale, offset_x, offset_y })
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    /// Replace the zoom scale.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidScale`] unless `scale` is positive and
    /// finite; the view is left unchanged in that case.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ViewError> {
        check_scale(scale)?;
        self.scale = scale;
        Ok(())
    }

    /// Replace the pan offset.
    pub fn set_offset(&mut self, offset_x: i32, offset_y: i32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Commit the delta of one completed drag gesture.
    pub fn apply_pan(&mut self, dx: i32, dy: i32) {
        self.offset_x = self.offset_x.saturating_add(dx);
        self.offset_y = self.offset_y.saturating_add(dy);
    }

    /// Back to `scale = 1.0`, offset `(0, 0)`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn check_scale(scale: f64) -> Result<(), ViewError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ViewError::InvalidScale(scale))
    }
}

/// The two independently pannable views of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerViews {
    /// Background reference image.
    pub image: LayerView,
    /// Network topology and the overlay drawn on top of it.
    pub network: LayerView,
}

impl LayerViews {
    /// The view a layer is drawn and panned through.
    #[must_use]
    pub fn for_layer(&self, layer: Layer) -> &LayerView {
        match layer {
            Layer::Background => &self.image,
            Layer::Network | Layer::Overlay => &self.network,
        }
    }

    pub fn for_layer_mut(&mut self, layer: Layer) -> &mut LayerView {
        match layer {
            Layer::Background => &mut self.image,
            Layer::Network | Layer::Overlay => &mut self.network,
        }
    }
}

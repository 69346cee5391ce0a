//! Background image source collaborator.
//!
//! The core never holds pixels. It keeps only the raster's size, which is
//! all it needs to place the image and hit-test presses against it; the
//! raster itself goes back to the caller for the render sink.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use std::path::Path;

use crate::error::SourceLoadError;

/// Pixel dimensions of a raster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of the raster after scaling by `factor`, truncated to whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |v: u32| (f64::from(v) * factor).max(0.0) as u32;
        Self { width: scale(self.width), height: scale(self.height) }
    }
}

/// Anything that knows its pixel dimensions.
pub trait RasterImage {
    fn size(&self) -> ImageSize;
}

impl RasterImage for ImageSize {
    fn size(&self) -> ImageSize {
        *self
    }
}

/// Loads a background raster from a path.
pub trait ImageSource {
    type Image: RasterImage;

    /// # Errors
    ///
    /// Returns a [`SourceLoadError`] when the image cannot be read or decoded.
    fn load_image(&self, path: &Path) -> Result<Self::Image, SourceLoadError>;
}

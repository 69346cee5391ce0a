//! File-backed network and image collaborators.

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

use std::fs;
use std::path::Path;

use overlay::error::SourceLoadError;
use overlay::image::{ImageSize, ImageSource};
use overlay::network::{NetworkModel, NetworkSource};

/// Reads a network exported as JSON:
/// `{"nodes": [{"id", "x", "y"}], "pipes": [{"start", "end"}]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNetworkFile;

impl NetworkSource for JsonNetworkFile {
    fn load_network(&self, path: &Path) -> Result<NetworkModel, SourceLoadError> {
        let text = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
        serde_json::from_str(&text).map_err(|e| load_error(path, e))
    }
}

/// Reads only the header of a raster file for its pixel dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFile;

impl ImageSource for ImageFile {
    type Image = ImageSize;

    fn load_image(&self, path: &Path) -> Result<ImageSize, SourceLoadError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| load_error(path, e))?;
        Ok(ImageSize::new(width, height))
    }
}

fn load_error(path: &Path, err: impl std::fmt::Display) -> SourceLoadError {
    SourceLoadError::new(path.display().to_string(), err.to_string())
}

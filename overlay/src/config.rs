//! Session configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_DRAWING_EXTENT, DEFAULT_MAX_SCALE};
use crate::error::ConfigError;
use crate::store::OverlayCategory;

pub const DRAWING_EXTENT_VAR: &str = "OVERLAY_DRAWING_EXTENT";
pub const MAX_SCALE_VAR: &str = "OVERLAY_MAX_SCALE";
pub const DEFAULT_CATEGORY_VAR: &str = "OVERLAY_DEFAULT_CATEGORY";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    /// Width `S` of drawing space in drawing units.
    pub drawing_extent: f64,
    /// Largest zoom scale any layer accepts.
    pub max_scale: f64,
    /// Category selected when a session starts.
    pub default_category: OverlayCategory,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            drawing_extent: DEFAULT_DRAWING_EXTENT,
            max_scale: DEFAULT_MAX_SCALE,
            default_category: OverlayCategory::default(),
        }
    }
}

impl OverlayConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `OVERLAY_DRAWING_EXTENT`: default 1000
    /// - `OVERLAY_MAX_SCALE`: default 20
    /// - `OVERLAY_DEFAULT_CATEGORY`: `House` (default) or any other category name
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a value that is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`OverlayConfig::from_env`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a value that is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let drawing_extent = positive(DRAWING_EXTENT_VAR, lookup(DRAWING_EXTENT_VAR), defaults.drawing_extent)?;
        let max_scale = positive(MAX_SCALE_VAR, lookup(MAX_SCALE_VAR), defaults.max_scale)?;
        let default_category = match lookup(DEFAULT_CATEGORY_VAR) {
            None => defaults.default_category,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: DEFAULT_CATEGORY_VAR, value: raw.clone() })?,
        };
        Ok(Self { drawing_extent, max_scale, default_category })
    }
}

fn positive(key: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidValue { key, value: raw }),
    }
}

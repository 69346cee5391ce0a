//! Error taxonomy for the overlay core.
//!
//! Each failure class has its own enum so callers can match on exactly what
//! went wrong; [`SessionError`] wraps them for [`crate::engine::Session`]
//! operations that can fail in more than one way.

/// The network's node coordinates do not span a usable area.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundsError {
    /// The network has no nodes at all.
    #[error("network has no nodes")]
    Empty,
    /// The network spans zero (or negative) width or height.
    #[error("inappropriate size of network: width {width}, height {height}")]
    Degenerate { width: f64, height: f64 },
    /// A node coordinate is NaN or infinite.
    #[error("network contains a non-finite coordinate")]
    NonFinite,
}

/// An overlay file could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level JSON value is not an object.
    #[error("invalid file format: expected a JSON object")]
    NotAnObject,
    /// `elements` is present but is not an array.
    #[error("invalid file format: `elements` must be a list")]
    ElementsNotAList,
    /// An entry in `elements` is not an object.
    #[error("element {index} is not an object")]
    ElementNotAnObject { index: usize },
    /// An element lacks one of `x`, `y` or `type`.
    #[error("element {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
    /// An element's `type` is not a known category.
    #[error("element {index} has unknown type {value:?}")]
    UnknownCategory { index: usize, value: String },
    /// A coordinate or view parameter is not a finite number.
    #[error("`{field}` must be a finite number")]
    NonNumeric { field: String },
    /// A saved scale is zero or negative.
    #[error("`{field}` must be greater than zero")]
    NonPositiveScale { field: String },
}

/// A network or image collaborator failed to load its source.
///
/// The message is carried opaquely; the core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to load {path}: {message}")]
pub struct SourceLoadError {
    pub path: String,
    pub message: String,
}

impl SourceLoadError {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

/// A zoom command carried an unusable scale.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),
}

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure of a [`crate::engine::Session`] operation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Source(#[from] SourceLoadError),
    #[error(transparent)]
    View(#[from] ViewError),
    /// Overlay files can only be loaded or saved against a loaded network.
    #[error("no network loaded")]
    NoNetwork,
}

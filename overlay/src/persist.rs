//! Overlay file codec.
//!
//! A saved overlay is a JSON object carrying the six view parameters of the
//! session next to the list of elements:
//!
//! ```json
//! {
//!   "offset_img_x": 0, "offset_img_y": 0, "scale_img": 1.0,
//!   "offset_net_x": 0, "offset_net_y": 0, "scale_net": 1.0,
//!   "elements": [{"x": 12.5, "y": 40.0, "type": "House"}]
//! }
//! ```
//!
//! On read every key is optional. View parameters go through the
//! [`VIEW_OPTIONS`] table: recognized keys overwrite the matching field of the
//! current views, anything else in the object is ignored. Elements, on the
//! other hand, are strict: a missing field or an unknown `type` fails the load.
//! Decoding never touches live state; the caller commits the returned
//! [`DecodedOverlay`] in one step.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::OVERLAY_FILE_EXTENSION;
use crate::error::FormatError;
use crate::store::{OverlayCategory, OverlayElement, OverlayStore};
use crate::view::LayerViews;

/// The on-disk form of a saved overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayDocument {
    pub offset_img_x: i32,
    pub offset_img_y: i32,
    pub scale_img: f64,
    pub offset_net_x: i32,
    pub offset_net_y: i32,
    pub scale_net: f64,
    pub elements: Vec<OverlayElement>,
}

/// Result of decoding an overlay file against the views in effect at the time.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedOverlay {
    pub views: LayerViews,
    pub store: OverlayStore,
}

/// A view parameter that an overlay file may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOption {
    ImageOffsetX,
    ImageOffsetY,
    ImageScale,
    NetworkOffsetX,
    NetworkOffsetY,
    NetworkScale,
}

/// Recognized top-level keys and the view field each one updates.
pub const VIEW_OPTIONS: [(&str, ViewOption); 6] = [
    ("offset_img_x", ViewOption::ImageOffsetX),
    ("offset_img_y", ViewOption::ImageOffsetY),
    ("scale_img", ViewOption::ImageScale),
    ("offset_net_x", ViewOption::NetworkOffsetX),
    ("offset_net_y", ViewOption::NetworkOffsetY),
    ("scale_net", ViewOption::NetworkScale),
];

impl ViewOption {
    fn apply(self, views: &mut LayerViews, key: &str, value: f64) -> Result<(), FormatError> {
        let view = match self {
            Self::ImageOffsetX | Self::ImageOffsetY | Self::ImageScale => &mut views.image,
            Self::NetworkOffsetX | Self::NetworkOffsetY | Self::NetworkScale => &mut views.network,
        };
        match self {
            Self::ImageOffsetX | Self::NetworkOffsetX => {
                view.set_offset(to_offset(key, value)?, view.offset_y());
            }
            Self::ImageOffsetY | Self::NetworkOffsetY => {
                view.set_offset(view.offset_x(), to_offset(key, value)?);
            }
            Self::ImageScale | Self::NetworkScale => {
                view.set_scale(value)
                    .map_err(|_| FormatError::NonPositiveScale { field: key.to_owned() })?;
            }
        }
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_offset(key: &str, value: f64) -> Result<i32, FormatError> {
    let rounded = value.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(FormatError::NonNumeric { field: key.to_owned() });
    }
    Ok(rounded as i32)
}

impl OverlayStore {
    /// Bundle the elements with the session's view parameters for saving.
    #[must_use]
    pub fn serialize(&self, views: &LayerViews) -> OverlayDocument {
        OverlayDocument {
            offset_img_x: views.image.offset_x(),
            offset_img_y: views.image.offset_y(),
            scale_img: views.image.scale(),
            offset_net_x: views.network.offset_x(),
            offset_net_y: views.network.offset_y(),
            scale_net: views.network.scale(),
            elements: self.elements().to_vec(),
        }
    }

    /// Decode a parsed overlay file.
    ///
    /// View parameters absent from `data` keep their value from `current`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] describing the first problem found.
    pub fn deserialize(data: &Value, current: &LayerViews) -> Result<DecodedOverlay, FormatError> {
        let object = data.as_object().ok_or(FormatError::NotAnObject)?;

        let mut views = *current;
        for (key, option) in VIEW_OPTIONS {
            if let Some(raw) = object.get(key) {
                option.apply(&mut views, key, number(raw, key)?)?;
            }
        }

        let elements = match object.get("elements") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| decode_element(index, item))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(FormatError::ElementsNotAList),
        };

        Ok(DecodedOverlay { views, store: OverlayStore::from_elements(elements) })
    }
}

fn number(raw: &Value, field: &str) -> Result<f64, FormatError> {
    raw.as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FormatError::NonNumeric { field: field.to_owned() })
}

fn decode_element(index: usize, item: &Value) -> Result<OverlayElement, FormatError> {
    let fields = item.as_object().ok_or(FormatError::ElementNotAnObject { index })?;
    let x = coordinate(index, fields, "x")?;
    let y = coordinate(index, fields, "y")?;
    let raw_type = fields.get("type").ok_or(FormatError::MissingField { index, field: "type" })?;
    match raw_type.as_str().map(str::parse::<OverlayCategory>) {
        Some(Ok(category)) => Ok(OverlayElement { x, y, category }),
        _ => Err(FormatError::UnknownCategory {
            index,
            value: raw_type.as_str().map_or_else(|| raw_type.to_string(), str::to_owned),
        }),
    }
}

fn coordinate(index: usize, fields: &Map<String, Value>, key: &'static str) -> Result<f64, FormatError> {
    let raw = fields.get(key).ok_or(FormatError::MissingField { index, field: key })?;
    number(raw, &format!("elements[{index}].{key}"))
}

/// Encode a document as compact JSON text.
///
/// # Errors
///
/// Fails only if serialization itself fails.
pub fn to_json(document: &OverlayDocument) -> Result<String, FormatError> {
    Ok(serde_json::to_string(document)?)
}

/// Parse overlay file text and decode it against `current`.
///
/// # Errors
///
/// Returns [`FormatError::Json`] for invalid JSON, otherwise the errors of
/// [`OverlayStore::deserialize`].
pub fn from_json(text: &str, current: &LayerViews) -> Result<DecodedOverlay, FormatError> {
    let value: Value = serde_json::from_str(text)?;
    OverlayStore::deserialize(&value, current)
}

/// Append the overlay file extension unless `path` already ends with it
/// (compared case-insensitively).
#[must_use]
pub fn with_overlay_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OVERLAY_FILE_EXTENSION));
    if has_extension {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(OVERLAY_FILE_EXTENSION);
    PathBuf::from(name)
}

//! Overlay annotations: categories, elements, and the append-only store.
//!
//! Element positions are kept in network-model space so that they stay
//! attached to the same spot on the network no matter how the network view is
//! later zoomed or panned. The store is ordered by insertion and never removes
//! or edits an element; discarding changes means loading a fresh store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Water-demand category of an annotated building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OverlayCategory {
    /// Single-family house (default selection).
    #[default]
    House,
    Apartments,
    Wholesale,
    Commercial,
    Institutional,
    Industrial,
    Other,
}

impl OverlayCategory {
    /// Every category in menu order.
    pub const ALL: [Self; 7] = [
        Self::House,
        Self::Apartments,
        Self::Wholesale,
        Self::Commercial,
        Self::Institutional,
        Self::Industrial,
        Self::Other,
    ];

    /// The string stored in overlay files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartments => "Apartments",
            Self::Wholesale => "Wholesale",
            Self::Commercial => "Commercial",
            Self::Institutional => "Institutional",
            Self::Industrial => "Industrial",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for OverlayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`OverlayCategory::from_str`] for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overlay category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for OverlayCategory {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match against [`OverlayCategory::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// One annotated point, in network-model coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayElement {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub category: OverlayCategory,
}

/// Ordered, append-only collection of overlay elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayStore {
    elements: Vec<OverlayElement>,
}

impl OverlayStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-decoded elements, keeping their order.
    #[must_use]
    pub fn from_elements(elements: Vec<OverlayElement>) -> Self {
        Self { elements }
    }

    /// Append an element and return its index.
    ///
    /// No deduplication and no check against the network bounds; points
    /// outside the network are kept as placed.
    pub fn add(&mut self, x: f64, y: f64, category: OverlayCategory) -> usize {
        self.elements.push(OverlayElement { x, y, category });
        self.elements.len() - 1
    }

    #[must_use]
    pub fn elements(&self) -> &[OverlayElement] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverlayElement> {
        self.elements.iter()
    }

    /// The most recently added element.
    #[must_use]
    pub fn last(&self) -> Option<&OverlayElement> {
        self.elements.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

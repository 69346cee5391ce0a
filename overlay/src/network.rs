//! Network source collaborator and the node/pipe model the core consumes.
//!
//! Parsing hydraulic model files is left to whatever implements
//! [`NetworkSource`]; the core only needs node coordinates (for bounds) and
//! the pipe list (to hand node positions to the renderer).

#[cfg(test)]
#[path = "network_test.rs"]
mod network_test;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoundsError, SourceLoadError};
use crate::mapper::{NetworkBounds, Point};

/// A junction, tank or reservoir with model-space coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A pipe between two nodes, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipe {
    pub start: String,
    pub end: String,
}

/// Topology returned by a [`NetworkSource`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkModel {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub pipes: Vec<Pipe>,
}

impl NetworkModel {
    /// Bounding box of all node coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] when there are no nodes or they do not span
    /// a positive area.
    pub fn bounds(&self) -> Result<NetworkBounds, BoundsError> {
        NetworkBounds::from_points(self.nodes.iter().map(Node::position))
    }
}

/// Loads a network model from a path.
pub trait NetworkSource {
    /// # Errors
    ///
    /// Returns a [`SourceLoadError`] when the source cannot be read or parsed.
    fn load_network(&self, path: &Path) -> Result<NetworkModel, SourceLoadError>;
}

/// A validated network ready for mapping and rendering.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    model: NetworkModel,
    bounds: NetworkBounds,
    by_id: HashMap<String, usize>,
}

impl LoadedNetwork {
    /// Validate `model` and index its nodes by id.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] for an empty or zero-area network.
    pub fn new(model: NetworkModel) -> Result<Self, BoundsError> {
        let bounds = model.bounds()?;
        let by_id = model
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id.clone(), index))
            .collect();
        Ok(Self { model, bounds, by_id })
    }

    #[must_use]
    pub fn model(&self) -> &NetworkModel {
        &self.model
    }

    #[must_use]
    pub fn bounds(&self) -> NetworkBounds {
        self.bounds
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.by_id.get(id).and_then(|&index| self.model.nodes.get(index))
    }

    /// Start and end node of every pipe whose endpoints both exist.
    pub fn pipe_endpoints(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.model
            .pipes
            .iter()
            .filter_map(|pipe| Some((self.node(&pipe.start)?, self.node(&pipe.end)?)))
    }
}

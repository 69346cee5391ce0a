//! Session engine: owns every piece of per-session state.
//!
//! A [`Session`] holds the loaded network and its mapper, the background
//! image size, both layer views, the overlay store and the interaction
//! controller. Loads follow load-then-validate-then-commit: a failed load
//! returns before any field is replaced.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::path::Path;

use tracing::{info, warn};

use crate::config::OverlayConfig;
use crate::error::{BoundsError, SessionError, ViewError};
use crate::image::{ImageSize, ImageSource, RasterImage};
use crate::input::{Event, InteractionController, Layer, SessionConfig, Targets};
use crate::mapper::{CoordinateMapper, NetworkBounds};
use crate::network::{LoadedNetwork, NetworkModel, NetworkSource};
use crate::persist::{self, OverlayDocument};
use crate::render::{self, RenderSink, Scene};
use crate::store::{OverlayElement, OverlayStore};
use crate::view::LayerViews;

/// Outcomes of an event for the shell to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A press landed on `layer`'s content and a drag is now in progress.
    DragStarted { layer: Layer },
    /// A drag finished and moved `layer`'s view by `(dx, dy)`.
    PanCommitted { layer: Layer, dx: i32, dy: i32 },
    /// An overlay element was appended at `index`.
    ElementAdded { index: usize, element: OverlayElement },
    /// `layer`'s view now has `scale` (after clamping).
    ZoomApplied { layer: Layer, scale: f64 },
    /// The zoom control should show `scale` for the newly active `layer`.
    ZoomDisplayed { layer: Layer, scale: f64 },
    RenderNeeded,
}

/// A loaded network together with the mapper built from its bounds.
#[derive(Debug, Clone)]
pub struct ActiveNetwork {
    pub loaded: LoadedNetwork,
    pub mapper: CoordinateMapper,
}

/// All state of one annotation session.
///
/// Loads validate the incoming data completely before replacing anything, so
/// a failed load leaves the previous network, image, views and overlay intact.
pub struct Session {
    config: OverlayConfig,
    network: Option<ActiveNetwork>,
    image: Option<ImageSize>,
    views: LayerViews,
    store: OverlayStore,
    controller: InteractionController,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            network: None,
            image: None,
            views: LayerViews::default(),
            store: OverlayStore::new(),
            controller: InteractionController::new(config.max_scale),
        }
    }

    // --- Sources ---

    /// Load a network through `source` and make it the session's network.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Source`] when the collaborator fails and
    /// [`SessionError::Bounds`] for a degenerate network. Nothing changes on error.
    pub fn load_network<S: NetworkSource>(&mut self, source: &S, path: &Path) -> Result<NetworkBounds, SessionError> {
        let model = source.load_network(path).inspect_err(|e| warn!(error = %e, "network load failed"))?;
        Ok(self.install_network(model)?)
    }

    /// Validate `model` and, if it spans a usable area, replace the current
    /// network. The overlay store is emptied and the network view reset.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] and leaves the session untouched when the
    /// network is empty or zero-area.
    pub fn install_network(&mut self, model: NetworkModel) -> Result<NetworkBounds, BoundsError> {
        let loaded = LoadedNetwork::new(model).inspect_err(|e| warn!(error = %e, "network rejected"))?;
        let bounds = loaded.bounds();
        let mapper = CoordinateMapper::new(bounds, self.config.drawing_extent);
        info!(
            nodes = loaded.model().nodes.len(),
            pipes = loaded.model().pipes.len(),
            min_x = bounds.min_x(),
            min_y = bounds.min_y(),
            width = bounds.width(),
            height = bounds.height(),
            "network loaded"
        );
        self.network = Some(ActiveNetwork { loaded, mapper });
        self.store = OverlayStore::new();
        self.views.network.reset();
        self.controller.cancel();
        Ok(bounds)
    }

    /// Drop the network and its overlay.
    pub fn unload_network(&mut self) {
        self.network = None;
        self.store = OverlayStore::new();
        self.views.network.reset();
        self.controller.cancel();
    }

    /// Load a background image through `source`. The session keeps only its
    /// size; the raster is returned for the render sink.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Source`] and leaves the session untouched when
    /// the collaborator fails.
    pub fn load_image<S: ImageSource>(&mut self, source: &S, path: &Path) -> Result<S::Image, SessionError> {
        let image = source.load_image(path).inspect_err(|e| warn!(error = %e, "image load failed"))?;
        self.install_image(image.size());
        Ok(image)
    }

    /// Replace the background image and reset its view.
    pub fn install_image(&mut self, size: ImageSize) {
        info!(width = size.width, height = size.height, "background image loaded");
        self.image = Some(size);
        self.views.image.reset();
        self.controller.cancel();
    }

    // --- Input ---

    /// Feed one event through the interaction state machine.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidScale`] for a zoom to an unusable scale.
    pub fn handle_event(&mut self, event: Event, config: &SessionConfig) -> Result<Vec<Action>, ViewError> {
        let targets = Targets {
            views: &mut self.views,
            store: &mut self.store,
            mapper: self.network.as_ref().map(|n| &n.mapper),
            image: self.image,
        };
        self.controller.handle(event, config, targets)
    }

    // --- Overlay files ---

    /// Replace the overlay and view parameters from overlay file text.
    ///
    /// Returns the number of elements loaded.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoNetwork`] without a loaded network and
    /// [`SessionError::Format`] for a malformed file. Nothing changes on error.
    pub fn load_overlay(&mut self, text: &str) -> Result<usize, SessionError> {
        if self.network.is_none() {
            return Err(SessionError::NoNetwork);
        }
        let decoded = persist::from_json(text, &self.views).inspect_err(|e| warn!(error = %e, "overlay rejected"))?;
        self.views = decoded.views;
        self.store = decoded.store;
        self.controller.cancel();
        info!(elements = self.store.len(), "overlay loaded");
        Ok(self.store.len())
    }

    /// The overlay and view parameters in saved form.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoNetwork`] without a loaded network.
    pub fn overlay_document(&self) -> Result<OverlayDocument, SessionError> {
        if self.network.is_none() {
            return Err(SessionError::NoNetwork);
        }
        Ok(self.store.serialize(&self.views))
    }

    /// Overlay file text for the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoNetwork`] without a loaded network.
    pub fn save_overlay(&self) -> Result<String, SessionError> {
        let text = persist::to_json(&self.overlay_document()?)?;
        info!(elements = self.store.len(), "overlay saved");
        Ok(text)
    }

    // --- Render ---

    #[must_use]
    pub fn scene(&self) -> Scene {
        render::build_scene(
            self.network.as_ref().map(|n| (&n.loaded, &n.mapper)),
            self.image,
            &self.views,
            &self.store,
        )
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.render(&self.scene());
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn network(&self) -> Option<&ActiveNetwork> {
        self.network.as_ref()
    }

    #[must_use]
    pub fn mapper(&self) -> Option<&CoordinateMapper> {
        self.network.as_ref().map(|n| &n.mapper)
    }

    #[must_use]
    pub fn bounds(&self) -> Option<NetworkBounds> {
        self.network.as_ref().map(|n| n.loaded.bounds())
    }

    #[must_use]
    pub fn network_loaded(&self) -> bool {
        self.network.is_some()
    }

    #[must_use]
    pub fn image_size(&self) -> Option<ImageSize> {
        self.image
    }

    #[must_use]
    pub fn image_loaded(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn views(&self) -> &LayerViews {
        &self.views
    }

    #[must_use]
    pub fn store(&self) -> &OverlayStore {
        &self.store
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }
}

//! Input model: layers, session configuration, events, and the gesture state machine.
//!
//! `Layer` and `SessionConfig` capture what the user has selected in the
//! surrounding UI; they are owned by the shell and passed in with every event.
//! `InteractionController` is the press/drag/release state machine. On the
//! background and network layers a press inside the layer's content starts a
//! drag, and the release commits the whole drag delta as one pan. On the
//! overlay layer every press places an annotation instead.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::DEFAULT_MAX_SCALE;
use crate::engine::Action;
use crate::error::ViewError;
use crate::hit::{image_region, network_region};
use crate::image::ImageSize;
use crate::mapper::{CoordinateMapper, Point};
use crate::store::{OverlayCategory, OverlayElement, OverlayStore};
use crate::view::LayerViews;

/// Which layer pointer input is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layer {
    /// Background reference image (default).
    #[default]
    Background,
    /// Network topology.
    Network,
    /// Annotation placement on top of the network.
    Overlay,
}

impl Layer {
    /// Every layer in menu order.
    pub const ALL: [Self; 3] = [Self::Background, Self::Network, Self::Overlay];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Network => "Network",
            Self::Overlay => "Overlay",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Layer::from_str`] for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layer {0:?}")]
pub struct UnknownLayer(pub String);

impl FromStr for Layer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLayer(s.to_owned()))
    }
}

/// UI selections that steer how an event is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub active_layer: Layer,
    /// Category given to annotations placed on the overlay layer.
    pub selected_category: OverlayCategory,
}

/// A discrete input event delivered by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Primary button pressed at a screen position.
    PointerDown { x: i32, y: i32 },
    /// Primary button released at a screen position.
    PointerUp { x: i32, y: i32 },
    /// The zoom control now shows `scale` for the active layer.
    ZoomChanged { scale: f64 },
    /// The user switched to another layer.
    LayerChanged { layer: Layer },
}

/// Screen position of the press that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub start_x: i32,
    pub start_y: i32,
}

impl DragGesture {
    /// Delta from the press to a release at `(x, y)`.
    #[must_use]
    pub fn delta_to(&self, x: i32, y: i32) -> (i32, i32) {
        (x.saturating_sub(self.start_x), y.saturating_sub(self.start_y))
    }
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A press landed on the content of `layer` and the button is still down.
    Dragging { layer: Layer, gesture: DragGesture },
}

/// Session state an event may read or mutate.
pub struct Targets<'a> {
    pub views: &'a mut LayerViews,
    pub store: &'a mut OverlayStore,
    /// Present once a network is loaded.
    pub mapper: Option<&'a CoordinateMapper>,
    /// Original size of the background image, once one is loaded.
    pub image: Option<ImageSize>,
}

/// Press/drag/release state machine.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InputState,
    max_scale: f64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCALE)
    }
}

impl InteractionController {
    /// Zoom commands above `max_scale` are clamped to it.
    #[must_use]
    pub fn new(max_scale: f64) -> Self {
        Self { state: InputState::Idle, max_scale }
    }

    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InputState::Dragging { .. })
    }

    /// Drop any gesture in progress without committing it.
    pub fn cancel(&mut self) {
        self.state = InputState::Idle;
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidScale`] for a zoom to a non-positive or
    /// non-finite scale. No state changes in that case.
    pub fn handle(&mut self, event: Event, config: &SessionConfig, targets: Targets<'_>) -> Result<Vec<Action>, ViewError> {
        let actions = match event {
            Event::PointerDown { x, y } => self.on_pointer_down(x, y, config, targets),
            Event::PointerUp { x, y } => self.on_pointer_up(x, y, targets),
            Event::ZoomChanged { scale } => self.on_zoom(scale, config.active_layer, targets)?,
            Event::LayerChanged { layer } => {
                self.cancel();
                vec![Action::ZoomDisplayed { layer, scale: targets.views.for_layer(layer).scale() }]
            }
        };
        Ok(actions)
    }

    fn on_pointer_down(&mut self, x: i32, y: i32, config: &SessionConfig, targets: Targets<'_>) -> Vec<Action> {
        if self.is_dragging() {
            return Vec::new();
        }
        let layer = config.active_layer;
        let press = Point::new(f64::from(x), f64::from(y));
        let view = targets.views.for_layer(layer);

        match layer {
            Layer::Overlay => {
                let Some(mapper) = targets.mapper else {
                    return Vec::new();
                };
                let at = mapper.screen_to_network(press, view);
                let category = config.selected_category;
                let index = targets.store.add(at.x, at.y, category);
                let element = OverlayElement { x: at.x, y: at.y, category };
                debug!(index, x = at.x, y = at.y, category = %element.category, "overlay element added");
                vec![Action::ElementAdded { index, element }, Action::RenderNeeded]
            }
            Layer::Background | Layer::Network => {
                let region = match layer {
                    Layer::Background => targets.image.map(|size| image_region(size, view)),
                    _ => targets.mapper.map(|mapper| network_region(mapper, view)),
                };
                if !region.is_some_and(|r| r.contains(press)) {
                    return Vec::new();
                }
                self.state = InputState::Dragging { layer, gesture: DragGesture { start_x: x, start_y: y } };
                vec![Action::DragStarted { layer }]
            }
        }
    }

    fn on_pointer_up(&mut self, x: i32, y: i32, targets: Targets<'_>) -> Vec<Action> {
        let InputState::Dragging { layer, gesture } = self.state else {
            return Vec::new();
        };
        self.state = InputState::Idle;
        let (dx, dy) = gesture.delta_to(x, y);
        targets.views.for_layer_mut(layer).apply_pan(dx, dy);
        debug!(%layer, dx, dy, "pan committed");
        vec![Action::PanCommitted { layer, dx, dy }, Action::RenderNeeded]
    }

    fn on_zoom(&mut self, scale: f64, layer: Layer, targets: Targets<'_>) -> Result<Vec<Action>, ViewError> {
        let view = targets.views.for_layer_mut(layer);
        view.set_scale(scale)?;
        if view.scale() > self.max_scale {
            view.set_scale(self.max_scale)?;
        }
        let scale = view.scale();
        debug!(%layer, scale, "zoom applied");
        Ok(vec![Action::ZoomApplied { layer, scale }, Action::RenderNeeded])
    }
}

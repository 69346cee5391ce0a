//! Replay scripts: JSON lines of UI selections and pointer events.
//!
//! Each non-blank line is either a category selection or an input event:
//!
//! ```text
//! {"select": "Commercial"}
//! {"event": "layer_changed", "layer": "Overlay"}
//! {"event": "pointer_down", "x": 205, "y": 55}
//! {"event": "zoom_changed", "scale": 2.0}
//! ```
//!
//! Lines starting with `#` are comments.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::Deserialize;
use tracing::debug;

use overlay::config::OverlayConfig;
use overlay::engine::{Action, Session};
use overlay::error::ViewError;
use overlay::input::{Event, SessionConfig};
use overlay::store::OverlayCategory;

/// One script line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Change the category given to new annotations.
    Select { select: OverlayCategory },
    Event(Event),
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Step {
        line: usize,
        #[source]
        source: ViewError,
    },
}

/// Parse a whole script, skipping blank and comment lines.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] with the 1-based line number of the first
/// line that is not a valid step.
pub fn parse(text: &str) -> Result<Vec<(usize, Step)>, ScriptError> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, raw)| !raw.is_empty() && !raw.starts_with('#'))
        .map(|(line, raw)| {
            serde_json::from_str(raw)
                .map(|step| (line, step))
                .map_err(|source| ScriptError::Parse { line, source })
        })
        .collect()
}

/// Shell-side UI state for a replay: what the layer and category pickers show.
#[derive(Debug, Clone, Copy, Default)]
pub struct Replay {
    config: SessionConfig,
}

impl Replay {
    #[must_use]
    pub fn new(config: &OverlayConfig) -> Self {
        Self { config: SessionConfig { selected_category: config.default_category, ..SessionConfig::default() } }
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Apply one step to `session`.
    ///
    /// # Errors
    ///
    /// Returns the session's [`ViewError`] for an unusable zoom.
    pub fn apply(&mut self, session: &mut Session, step: Step) -> Result<Vec<Action>, ViewError> {
        match step {
            Step::Select { select } => {
                debug!(category = %select, "category selected");
                self.config.selected_category = select;
                Ok(Vec::new())
            }
            Step::Event(event) => {
                if let Event::LayerChanged { layer } = event {
                    self.config.active_layer = layer;
                }
                session.handle_event(event, &self.config)
            }
        }
    }

    /// Apply every step in order, stopping at the first failure.
    ///
    /// Returns the actions produced across the whole script.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Step`] with the failing line number.
    pub fn run(&mut self, session: &mut Session, steps: &[(usize, Step)]) -> Result<Vec<Action>, ScriptError> {
        let mut actions = Vec::new();
        for &(line, step) in steps {
            actions.extend(self.apply(session, step).map_err(|source| ScriptError::Step { line, source })?);
        }
        Ok(actions)
    }
}

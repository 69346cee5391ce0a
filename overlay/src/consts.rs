//! Shared numeric constants for the overlay crate.

// ── Drawing space ───────────────────────────────────────────────

/// Default normalized width of drawing space, in drawing units.
pub const DEFAULT_DRAWING_EXTENT: f64 = 1000.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Scale a freshly loaded layer starts at.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default upper zoom limit for any layer.
pub const DEFAULT_MAX_SCALE: f64 = 20.0;

// ── Files ───────────────────────────────────────────────────────

/// Extension of saved overlay files, without the leading dot.
pub const OVERLAY_FILE_EXTENSION: &str = "inpx";

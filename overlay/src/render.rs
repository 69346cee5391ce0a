//! Scene computation for the external renderer.
//!
//! The core decides where everything goes; a [`RenderSink`] decides what it
//! looks like. [`build_scene`] resolves every node, pipe and overlay marker to
//! screen coordinates through the network view, places the background image
//! through its own view, and sizes the scrollable canvas to fit both.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::image::ImageSize;
use crate::mapper::{CoordinateMapper, Point};
use crate::network::LoadedNetwork;
use crate::store::{OverlayCategory, OverlayStore};
use crate::view::{LayerView, LayerViews};

/// Where the background image lands on screen, at its displayed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePlacement {
    pub x: i32,
    pub y: i32,
    pub size: ImageSize,
}

/// An overlay element resolved to screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub category: OverlayCategory,
}

/// Everything a sink needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Scrollable canvas width in pixels.
    pub canvas_width: i64,
    /// Scrollable canvas height in pixels.
    pub canvas_height: i64,
    pub image: Option<ImagePlacement>,
    /// Scale of the network view; sinks size node and marker glyphs by it.
    pub network_scale: f64,
    pub nodes: Vec<Point>,
    pub pipes: Vec<(Point, Point)>,
    pub markers: Vec<Marker>,
}

/// Receives computed scenes and produces pixels.
pub trait RenderSink {
    fn render(&mut self, scene: &Scene);
}

/// Compute the scene for the current session state.
///
/// Markers are only produced while a network is loaded, since their
/// coordinates mean nothing without its bounds. Pipes whose endpoints are
/// not in the network are skipped.
#[must_use]
pub fn build_scene(
    network: Option<(&LoadedNetwork, &CoordinateMapper)>,
    image: Option<ImageSize>,
    views: &LayerViews,
    store: &OverlayStore,
) -> Scene {
    let mut scene = Scene { network_scale: views.network.scale(), ..Scene::default() };

    if let Some(original) = image {
        let size = original.scaled(views.image.scale());
        scene.image = Some(ImagePlacement { x: views.image.offset_x(), y: views.image.offset_y(), size });
        scene.canvas_width = i64::from(size.width) + i64::from(views.image.offset_x());
        scene.canvas_height = i64::from(size.height) + i64::from(views.image.offset_y());
    }

    if let Some((loaded, mapper)) = network {
        let view = &views.network;
        let (width, height) = network_canvas_size(mapper, view);
        scene.canvas_width = scene.canvas_width.max(width);
        scene.canvas_height = scene.canvas_height.max(height);

        scene.nodes = loaded
            .model()
            .nodes
            .iter()
            .map(|node| mapper.network_to_screen(node.position(), view))
            .collect();
        scene.pipes = loaded
            .pipe_endpoints()
            .map(|(a, b)| (mapper.network_to_screen(a.position(), view), mapper.network_to_screen(b.position(), view)))
            .collect();
        scene.markers = store
            .iter()
            .map(|e| Marker {
                position: mapper.network_to_screen(Point::new(e.x, e.y), view),
                category: e.category,
            })
            .collect();
    }

    scene
}

/// Right and bottom screen edge of the network's drawing space, truncated to pixels.
#[allow(clippy::cast_possible_truncation)]
fn network_canvas_size(mapper: &CoordinateMapper, view: &LayerView) -> (i64, i64) {
    let (width, height) = mapper.drawing_extent();
    let corner = CoordinateMapper::to_screen(Point::new(width, height), view);
    (corner.x as i64, corner.y as i64)
}

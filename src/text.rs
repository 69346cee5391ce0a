//! Plain-text render sink for inspecting a scene from the terminal.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use std::fmt::Write;

use overlay::render::{RenderSink, Scene};

/// Writes each rendered scene as lines of text.
#[derive(Debug, Default)]
pub struct TextSink {
    out: String,
}

impl TextSink {
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl RenderSink for TextSink {
    fn render(&mut self, scene: &Scene) {
        // Writing into a String cannot fail.
        if write_scene(&mut self.out, scene).is_err() {
            self.out.push_str("<scene formatting failed>\n");
        }
    }
}

fn write_scene(out: &mut String, scene: &Scene) -> std::fmt::Result {
    writeln!(out, "canvas {}x{}", scene.canvas_width, scene.canvas_height)?;
    if let Some(image) = scene.image {
        writeln!(out, "image at ({}, {}) size {}x{}", image.x, image.y, image.size.width, image.size.height)?;
    }
    writeln!(out, "network scale {}", scene.network_scale)?;
    for node in &scene.nodes {
        writeln!(out, "node ({:.2}, {:.2})", node.x, node.y)?;
    }
    for (a, b) in &scene.pipes {
        writeln!(out, "pipe ({:.2}, {:.2}) -> ({:.2}, {:.2})", a.x, a.y, b.x, b.y)?;
    }
    for marker in &scene.markers {
        writeln!(out, "marker {} ({:.2}, {:.2})", marker.category, marker.position.x, marker.position.y)?;
    }
    Ok(())
}

use overlay::image::ImageSize;
use overlay::mapper::Point;
use overlay::render::{ImagePlacement, Marker};
use overlay::store::OverlayCategory;

use super::*;

#[test]
fn empty_scene_prints_canvas_and_scale() {
    let mut sink = TextSink::default();
    sink.render(&Scene { network_scale: 1.0, ..Scene::default() });
    assert_eq!(sink.into_string(), "canvas 0x0\nnetwork scale 1\n");
}

#[test]
fn full_scene_lists_every_item() {
    let scene = Scene {
        canvas_width: 1000,
        canvas_height: 500,
        image: Some(ImagePlacement { x: 3, y: 4, size: ImageSize::new(20, 10) }),
        network_scale: 2.0,
        nodes: vec![Point::new(0.0, 500.0)],
        pipes: vec![(Point::new(0.0, 500.0), Point::new(1000.0, 0.0))],
        markers: vec![Marker { position: Point::new(12.5, 6.0), category: OverlayCategory::Apartments }],
    };
    let mut sink = TextSink::default();
    sink.render(&scene);
    let text = sink.into_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "canvas 1000x500",
            "image at (3, 4) size 20x10",
            "network scale 2",
            "node (0.00, 500.00)",
            "pipe (0.00, 500.00) -> (1000.00, 0.00)",
            "marker Apartments (12.50, 6.00)",
        ]
    );
}

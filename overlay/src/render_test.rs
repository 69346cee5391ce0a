#![allow(clippy::float_cmp)]

use super::*;
use crate::network::{Node, NetworkModel, Pipe};

fn node(id: &str, x: f64, y: f64) -> Node {
    Node { id: id.to_owned(), x, y }
}

fn pipe(start: &str, end: &str) -> Pipe {
    Pipe { start: start.to_owned(), end: end.to_owned() }
}

fn triangle() -> LoadedNetwork {
    LoadedNetwork::new(NetworkModel {
        nodes: vec![node("J1", 0.0, 0.0), node("J2", 100.0, 0.0), node("R1", 50.0, 50.0)],
        pipes: vec![pipe("J1", "J2"), pipe("J2", "R1"), pipe("R1", "GHOST")],
    })
    .expect("network")
}

fn mapper_for(loaded: &LoadedNetwork) -> CoordinateMapper {
    CoordinateMapper::new(loaded.bounds(), 1000.0)
}

#[test]
fn empty_session_has_empty_scene() {
    let scene = build_scene(None, None, &LayerViews::default(), &OverlayStore::new());
    assert_eq!(scene.canvas_width, 0);
    assert_eq!(scene.canvas_height, 0);
    assert!(scene.image.is_none());
    assert!(scene.nodes.is_empty());
    assert!(scene.markers.is_empty());
    assert_eq!(scene.network_scale, 1.0);
}

#[test]
fn image_only_scene_sizes_canvas_to_displayed_image() {
    let mut views = LayerViews::default();
    views.image = LayerView::new(2.0, 10, 20).expect("view");
    let scene = build_scene(None, Some(ImageSize::new(300, 200)), &views, &OverlayStore::new());
    assert_eq!(scene.image, Some(ImagePlacement { x: 10, y: 20, size: ImageSize::new(600, 400) }));
    assert_eq!((scene.canvas_width, scene.canvas_height), (610, 420));
}

#[test]
fn nodes_and_pipes_are_placed_through_network_view() {
    let loaded = triangle();
    let mapper = mapper_for(&loaded);
    let scene = build_scene(Some((&loaded, &mapper)), None, &LayerViews::default(), &OverlayStore::new());

    assert_eq!(scene.nodes, vec![Point::new(0.0, 500.0), Point::new(1000.0, 500.0), Point::new(500.0, 0.0)]);
    assert_eq!(
        scene.pipes,
        vec![
            (Point::new(0.0, 500.0), Point::new(1000.0, 500.0)),
            (Point::new(1000.0, 500.0), Point::new(500.0, 0.0)),
        ]
    );
    assert_eq!((scene.canvas_width, scene.canvas_height), (1000, 500));
}

#[test]
fn canvas_covers_the_larger_of_image_and_network() {
    let loaded = triangle();
    let mapper = mapper_for(&loaded);
    let mut views = LayerViews::default();
    views.image = LayerView::new(1.0, 0, 0).expect("view");
    views.network = LayerView::new(0.5, 40, 30).expect("view");
    let scene = build_scene(Some((&loaded, &mapper)), Some(ImageSize::new(800, 900)), &views, &OverlayStore::new());
    assert_eq!(scene.canvas_width, 800);
    assert_eq!(scene.canvas_height, 900);

    views.network = LayerView::new(2.0, 40, 30).expect("view");
    let scene = build_scene(Some((&loaded, &mapper)), Some(ImageSize::new(800, 900)), &views, &OverlayStore::new());
    assert_eq!(scene.canvas_width, 2040);
    assert_eq!(scene.canvas_height, 1030);
    assert_eq!(scene.network_scale, 2.0);
}

#[test]
fn markers_follow_network_view() {
    let loaded = triangle();
    let mapper = mapper_for(&loaded);
    let mut store = OverlayStore::new();
    store.add(50.0, 25.0, OverlayCategory::Commercial);
    store.add(100.0, 50.0, OverlayCategory::House);

    let mut views = LayerViews::default();
    views.network = LayerView::new(2.0, 5, 5).expect("view");
    let scene = build_scene(Some((&loaded, &mapper)), None, &views, &store);
    assert_eq!(
        scene.markers,
        vec![
            Marker { position: Point::new(1005.0, 505.0), category: OverlayCategory::Commercial },
            Marker { position: Point::new(2005.0, 5.0), category: OverlayCategory::House },
        ]
    );
}

#[test]
fn markers_are_not_produced_without_a_network() {
    let mut store = OverlayStore::new();
    store.add(1.0, 2.0, OverlayCategory::Other);
    let scene = build_scene(None, None, &LayerViews::default(), &store);
    assert!(scene.markers.is_empty());
}

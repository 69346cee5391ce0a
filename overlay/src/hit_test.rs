use super::*;
use crate::mapper::NetworkBounds;

fn mapper() -> CoordinateMapper {
    CoordinateMapper::new(NetworkBounds::new(0.0, 0.0, 100.0, 50.0).expect("bounds"), 1000.0)
}

#[test]
fn rect_contains_is_inclusive() {
    let r = ScreenRect { left: 0.0, top: 0.0, right: 10.0, bottom: 5.0 };
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 5.0)));
    assert!(!r.contains(Point::new(10.5, 5.0)));
    assert!(!r.contains(Point::new(-0.5, 2.0)));
}

#[test]
fn image_region_uses_displayed_size_and_offset() {
    let view = LayerView::new(0.5, 20, 10).expect("view");
    let r = image_region(ImageSize::new(400, 300), &view);
    assert_eq!(r, ScreenRect { left: 20.0, top: 10.0, right: 220.0, bottom: 160.0 });
}

#[test]
fn network_region_spans_scaled_drawing_space() {
    let view = LayerView::new(2.0, 5, 5).expect("view");
    let r = network_region(&mapper(), &view);
    assert_eq!(r, ScreenRect { left: 5.0, top: 5.0, right: 2005.0, bottom: 1005.0 });
}

#[test]
fn press_outside_network_region_misses() {
    let r = network_region(&mapper(), &LayerView::default());
    assert!(r.contains(Point::new(999.0, 499.0)));
    assert!(!r.contains(Point::new(999.0, 501.0)));
}

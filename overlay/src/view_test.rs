#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_view_is_unit_scale_at_origin() {
    let v = LayerView::default();
    assert_eq!(v.scale(), 1.0);
    assert_eq!((v.offset_x(), v.offset_y()), (0, 0));
}

#[test]
fn new_rejects_unusable_scale() {
    assert_eq!(LayerView::new(0.0, 0, 0), Err(ViewError::InvalidScale(0.0)));
    assert_eq!(LayerView::new(-2.0, 0, 0), Err(ViewError::InvalidScale(-2.0)));
    assert!(LayerView::new(f64::NAN, 0, 0).is_err());
    assert!(LayerView::new(f64::INFINITY, 0, 0).is_err());
}

#[test]
fn set_scale_replaces_scale_only() {
    let mut v = LayerView::new(1.0, 7, -3).expect("view");
    v.set_scale(2.5).expect("scale");
    assert_eq!(v.scale(), 2.5);
    assert_eq!((v.offset_x(), v.offset_y()), (7, -3));
}

#[test]
fn set_scale_error_leaves_view_unchanged() {
    let mut v = LayerView::new(1.5, 0, 0).expect("view");
    assert!(v.set_scale(0.0).is_err());
    assert_eq!(v.scale(), 1.5);
}

#[test]
fn apply_pan_accumulates() {
    let mut v = LayerView::default();
    v.apply_pan(30, 15);
    v.apply_pan(-10, 5);
    assert_eq!((v.offset_x(), v.offset_y()), (20, 20));
}

#[test]
fn apply_pan_saturates_instead_of_overflowing() {
    let mut v = LayerView::new(1.0, i32::MAX - 1, i32::MIN + 1).expect("view");
    v.apply_pan(10, -10);
    assert_eq!((v.offset_x(), v.offset_y()), (i32::MAX, i32::MIN));
}

#[test]
fn reset_restores_defaults() {
    let mut v = LayerView::new(3.0, 40, 50).expect("view");
    v.reset();
    assert_eq!(v, LayerView::default());
}

#[test]
fn network_and_overlay_share_one_view() {
    let mut views = LayerViews::default();
    views.for_layer_mut(Layer::Overlay).apply_pan(4, 4);
    assert_eq!(views.for_layer(Layer::Network).offset_x(), 4);
    assert_eq!(views.network.offset_y(), 4);
    assert_eq!(views.image, LayerView::default());
}

#[test]
fn background_view_is_independent() {
    let mut views = LayerViews::default();
    views.for_layer_mut(Layer::Background).set_scale(0.5).expect("scale");
    assert_eq!(views.image.scale(), 0.5);
    assert_eq!(views.for_layer(Layer::Network).scale(), 1.0);
}

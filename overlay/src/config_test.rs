#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let cfg = OverlayConfig::from_lookup(lookup_from(&[])).expect("config");
    assert_eq!(cfg, OverlayConfig::default());
    assert_eq!(cfg.drawing_extent, 1000.0);
    assert_eq!(cfg.max_scale, 20.0);
    assert_eq!(cfg.default_category, OverlayCategory::House);
}

#[test]
fn overrides_are_parsed() {
    let cfg = OverlayConfig::from_lookup(lookup_from(&[
        (DRAWING_EXTENT_VAR, "2500"),
        (MAX_SCALE_VAR, " 8.5 "),
        (DEFAULT_CATEGORY_VAR, "Commercial"),
    ]))
    .expect("config");
    assert_eq!(cfg.drawing_extent, 2500.0);
    assert_eq!(cfg.max_scale, 8.5);
    assert_eq!(cfg.default_category, OverlayCategory::Commercial);
}

#[test]
fn non_positive_extent_is_rejected() {
    let err = OverlayConfig::from_lookup(lookup_from(&[(DRAWING_EXTENT_VAR, "0")])).expect_err("zero");
    assert_eq!(err, ConfigError::InvalidValue { key: DRAWING_EXTENT_VAR, value: "0".to_owned() });
}

#[test]
fn unparseable_scale_is_rejected() {
    let err = OverlayConfig::from_lookup(lookup_from(&[(MAX_SCALE_VAR, "lots")])).expect_err("text");
    assert!(matches!(err, ConfigError::InvalidValue { key: MAX_SCALE_VAR, .. }));
}

#[test]
fn unknown_category_is_rejected() {
    let err = OverlayConfig::from_lookup(lookup_from(&[(DEFAULT_CATEGORY_VAR, "Castle")])).expect_err("category");
    assert!(matches!(err, ConfigError::InvalidValue { key: DEFAULT_CATEGORY_VAR, .. }));
}

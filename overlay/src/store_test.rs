use super::*;

#[test]
fn new_store_is_empty() {
    let store = OverlayStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.last().is_none());
}

#[test]
fn add_appends_in_call_order() {
    let mut store = OverlayStore::new();
    let calls = [
        (1.0, 2.0, OverlayCategory::House),
        (-3.5, 400.25, OverlayCategory::Industrial),
        (1.0, 2.0, OverlayCategory::House),
        (9e6, -9e6, OverlayCategory::Other),
    ];
    for (i, &(x, y, category)) in calls.iter().enumerate() {
        assert_eq!(store.add(x, y, category), i);
    }
    assert_eq!(store.len(), calls.len());
    for (element, &(x, y, category)) in store.iter().zip(calls.iter()) {
        assert_eq!(*element, OverlayElement { x, y, category });
    }
}

#[test]
fn add_keeps_duplicates() {
    let mut store = OverlayStore::new();
    store.add(5.0, 5.0, OverlayCategory::Commercial);
    store.add(5.0, 5.0, OverlayCategory::Commercial);
    assert_eq!(store.len(), 2);
}

#[test]
fn last_is_most_recent() {
    let mut store = OverlayStore::new();
    store.add(0.0, 0.0, OverlayCategory::House);
    store.add(1.0, 1.0, OverlayCategory::Wholesale);
    assert_eq!(store.last().map(|e| e.category), Some(OverlayCategory::Wholesale));
}

#[test]
fn from_elements_keeps_order() {
    let elements = vec![
        OverlayElement { x: 2.0, y: 2.0, category: OverlayCategory::Apartments },
        OverlayElement { x: 1.0, y: 1.0, category: OverlayCategory::Institutional },
    ];
    let store = OverlayStore::from_elements(elements.clone());
    assert_eq!(store.elements(), elements.as_slice());
}

// =============================================================
// OverlayCategory
// =============================================================

#[test]
fn category_default_is_house() {
    assert_eq!(OverlayCategory::default(), OverlayCategory::House);
}

#[test]
fn category_names_round_trip_through_from_str() {
    for category in OverlayCategory::ALL {
        assert_eq!(category.as_str().parse::<OverlayCategory>(), Ok(category));
        assert_eq!(category.to_string(), category.as_str());
    }
}

#[test]
fn category_from_str_is_case_sensitive() {
    assert_eq!("house".parse::<OverlayCategory>(), Err(UnknownCategory("house".to_owned())));
    assert!("Mansion".parse::<OverlayCategory>().is_err());
    assert!("".parse::<OverlayCategory>().is_err());
}

#[test]
fn category_serializes_as_file_string() {
    let json = serde_json::to_string(&OverlayCategory::Institutional).expect("serialize");
    assert_eq!(json, "\"Institutional\"");
}

#[test]
fn element_serializes_category_under_type_key() {
    let element = OverlayElement { x: 1.5, y: -2.0, category: OverlayCategory::Other };
    let value = serde_json::to_value(element).expect("serialize");
    assert_eq!(value, serde_json::json!({"x": 1.5, "y": -2.0, "type": "Other"}));
}

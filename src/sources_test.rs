use std::fs;

use super::*;

#[test]
fn json_network_file_loads_nodes_and_pipes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("net.json");
    fs::write(
        &path,
        r#"{"nodes": [{"id": "J1", "x": 0, "y": 0}, {"id": "J2", "x": 10.5, "y": 4}],
            "pipes": [{"start": "J1", "end": "J2"}]}"#,
    )
    .expect("write");

    let model = JsonNetworkFile.load_network(&path).expect("load");
    assert_eq!(model.nodes.len(), 2);
    assert_eq!(model.nodes[1].id, "J2");
    assert_eq!(model.pipes.len(), 1);
}

#[test]
fn missing_network_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = JsonNetworkFile.load_network(&path).expect_err("missing");
    assert_eq!(err.path, path.display().to_string());
    assert!(!err.message.is_empty());
}

#[test]
fn malformed_network_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("net.json");
    fs::write(&path, r#"{"pipes": []}"#).expect("write");
    assert!(JsonNetworkFile.load_network(&path).is_err());
}

#[test]
fn image_file_reports_dimensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("background.png");
    image::RgbImage::new(7, 3).save(&path).expect("save png");
    assert_eq!(ImageFile.load_image(&path).expect("load"), ImageSize::new(7, 3));
}

#[test]
fn unreadable_image_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("background.png");
    fs::write(&path, b"not a png").expect("write");
    assert!(ImageFile.load_image(&path).is_err());
}

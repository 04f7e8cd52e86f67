use openscad_customizer::{Catalog, CustomizerError, Possible, Value};
use std::io::Write;

#[test]
fn loads_model_file() {
    let mut file = tempfile::Builder::new().suffix(".scad").tempfile().unwrap();
    writeln!(
        file,
        "right_curve = false;\nstraight_length = 0; // [0:none, 51:xsmall, 102:small]\nmodule track() {{}}"
    )
    .unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("right_curve").unwrap().possible, Possible::Flag);
    assert_eq!(
        catalog.get("straight_length").unwrap().possible.get("small"),
        Some(Value::Number(102.0))
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.scad");
    let err = Catalog::load(&path).unwrap_err();
    match err {
        CustomizerError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn empty_source_has_no_parameters() {
    let catalog = Catalog::from_source("").unwrap();
    assert!(catalog.is_empty());
}

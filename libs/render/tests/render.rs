//! Render requests against real processes and a scratch directory.

use openscad_customizer::{Catalog, Value};
use openscad_render::{OpenScadModel, RenderError, RenderOptions};
use std::fs;
use std::path::PathBuf;
use track_sweep::{ModelHandle, RenderOutcome};

const SOURCE: &str = r#"
base = "male"; // [male, female]
size = 90; // [90:small, 180:large]
"#;

fn model_in(dir: &std::path::Path, openscad: &str) -> OpenScadModel {
    debug_model_in(dir, openscad, false)
}

fn debug_model_in(dir: &std::path::Path, openscad: &str, debug: bool) -> OpenScadModel {
    let catalog = Catalog::from_source(SOURCE).unwrap();
    let options = RenderOptions {
        openscad: openscad.to_string(),
        output_dir: Some(dir.to_path_buf()),
        debug,
        ..RenderOptions::default()
    };
    OpenScadModel::with_catalog("track-t.scad", catalog, options)
}

#[test]
fn test_open_reads_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("track-t.scad");
    fs::write(&path, SOURCE).unwrap();

    let model = OpenScadModel::open(&path, RenderOptions::default()).unwrap();
    assert_eq!(model.catalog().len(), 2);
    assert!(model.catalog().contains("size"));
    assert_eq!(model.path(), path.as_path());
    assert_eq!(model.options(), &RenderOptions::default());
}

#[test]
fn test_open_missing_model() {
    let err = OpenScadModel::open("/nonexistent/track-t.scad", RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, RenderError::Catalog(_)));
}

#[test]
fn test_existing_file_kept_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("track-t-small.stl"), "solid").unwrap();

    // The binary is never started when the file is kept.
    let mut model = model_in(dir.path(), "/nonexistent/openscad");
    let outcome = model.render_to_file("track-t-small", false).unwrap();

    assert_eq!(outcome, RenderOutcome::Kept);
    assert_eq!(
        fs::read_to_string(dir.path().join("track-t-small.stl")).unwrap(),
        "solid"
    );
}

#[test]
fn test_missing_binary_is_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = model_in(dir.path(), "/nonexistent/openscad");

    let err = model.render_to_file("track-t-small", true).unwrap_err();
    assert!(matches!(err, RenderError::Spawn { program, .. } if program == "/nonexistent/openscad"));
}

#[cfg(unix)]
#[test]
fn test_failing_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = model_in(dir.path(), "false");
    model.set("base", Value::from("female")).unwrap();

    let err = model.render_to_file("track-t-female", true).unwrap_err();
    match err {
        RenderError::Failed { output, status, .. } => {
            assert_eq!(output, dir.path().join("track-t-female.stl"));
            assert!(!status.success());
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_successful_renderer_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = model_in(dir.path(), "true");

    let outcome = model.render_to_file("track-t-stl/track-t-small", true).unwrap();

    assert_eq!(outcome, RenderOutcome::Rendered);
    assert!(dir.path().join(PathBuf::from("track-t-stl")).is_dir());
}

#[cfg(unix)]
#[test]
fn test_debug_mode_inherits_stdio() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = debug_model_in(dir.path(), "true", true);
    model.set("size", Value::Number(180.0)).unwrap();

    let outcome = model.render_to_file("track-t-stl/track-t-large", true).unwrap();

    assert_eq!(outcome, RenderOutcome::Rendered);
    assert!(model.options().debug);
    assert!(dir.path().join("track-t-stl").is_dir());
}

#[cfg(unix)]
#[test]
fn test_debug_mode_failure_has_no_captured_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = debug_model_in(dir.path(), "false", true);

    let err = model.render_to_file("track-t-small", true).unwrap_err();
    match err {
        RenderError::Failed {
            output,
            status,
            stderr,
        } => {
            assert_eq!(output, dir.path().join("track-t-small.stl"));
            assert!(!status.success());
            assert!(stderr.is_empty());
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

//! The three track tables against fixture models, recorded instead of
//! rendered.

use openscad_customizer::{Catalog, Value};
use std::collections::HashSet;
use track_render::tables::{standard, standard_flags, t_junction};
use track_sweep::{run_sweep, RecordingModel, Sweep, SweepReport};

const STANDARD: &str = include_str!("fixtures/track-standard.scad");
const STANDARD_FLAGS: &str = include_str!("fixtures/track-standard-flags.scad");
const T_JUNCTION: &str = include_str!("fixtures/track-t.scad");

fn record(sweep: &Sweep, source: &str) -> (RecordingModel, SweepReport, String) {
    let mut model = RecordingModel::new(Catalog::from_source(source).unwrap());
    let mut out = Vec::new();
    let report = run_sweep(sweep, &mut model, &mut out).unwrap();
    (model, report, String::from_utf8(out).unwrap())
}

fn assert_unique(names: &[&str]) {
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn standard_straights_skip_auto_and_assign_numbers() {
    let (model, _, _) = record(&standard::sweep(), STANDARD);
    let names = model.rendered_names();

    assert_eq!(
        &names[..4],
        [
            "track-male-straight-xsmall-male",
            "track-male-straight-xsmall-female",
            "track-female-straight-xsmall-male",
            "track-female-straight-xsmall-female",
        ]
    );
    assert!(!names.iter().any(|n| n.contains("auto")));

    let first = &model.renders()[0];
    assert_eq!(first.value("straight_size"), Some(&Value::Number(51.0)));
    assert_eq!(first.value("right"), Some(&Value::from("none")));
    assert_eq!(first.value("left"), Some(&Value::from("none")));
}

#[test]
fn standard_curves_need_one_curve_and_omit_absent_ends() {
    let (model, report, stdout) = record(&standard::sweep(), STANDARD);
    let names = model.rendered_names();

    // 3 sizes x 4 straights, then 8 curve pairs x 2 radii x 3 straights x 2 bases
    assert_eq!(names.len(), 12 + 96);
    assert_eq!(report.duplicates, 0);
    assert_unique(&names);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), names);

    assert_eq!(names[12], "track-male-curve-small-left-male");
    assert_eq!(names[13], "track-female-curve-small-left-male");
    assert!(names.contains(&"track-female-curve-large-right-female-left-male-straight-female"));
    assert!(!names.iter().any(|n| n.contains("none")));

    let curve = &model.renders()[12];
    assert_eq!(curve.value("straight_size"), Some(&Value::from("auto")));
    assert_eq!(curve.value("radius"), Some(&Value::Number(90.0)));
}

#[test]
fn flag_straights_start_at_xsmall() {
    let (model, _, _) = record(&standard_flags::sweep(), STANDARD_FLAGS);
    let straights: Vec<_> = model
        .rendered_names()
        .into_iter()
        .filter(|n| n.contains("-straight-") && !n.contains("-curve-"))
        .collect();

    assert_eq!(straights.len(), 16);
    assert!(!straights.iter().any(|n| n.contains("stub") || n.contains("none")));
    assert_eq!(straights[0], "track-male-straight-xsmall-male");
    assert_eq!(straights[15], "track-female-straight-large-female");
}

#[test]
fn flag_curves_collapse_absent_connectors() {
    let (model, report, _) = record(&standard_flags::sweep(), STANDARD_FLAGS);
    let names = model.rendered_names();

    // per size: both curves 8 + 16, right only 4 + 8, left only 4 + 8
    assert_eq!(names.len(), 16 + 2 * 48);
    assert_eq!(report.duplicates, 0);
    assert_unique(&names);

    assert_eq!(names[16], "track-male-curve-small-right-male-left-male");
    assert!(names.contains(&"track-female-curve-large-left-female-straight-male"));
    assert!(names.contains(&"track-male-curve-small-right-female"));

    for render in &model.renders()[16..] {
        if !render.name.contains("-right-") {
            assert_eq!(render.value("right_curve"), Some(&Value::Boolean(false)));
            assert_eq!(render.value("right_connector"), Some(&Value::from("male")));
        }
        if !render.name.contains("-straight-") {
            assert_eq!(render.value("straight_length"), Some(&Value::Number(0.0)));
        }
    }
}

#[test]
fn flag_switch_straight_follows_curve_size() {
    let (model, _, _) = record(&standard_flags::sweep(), STANDARD_FLAGS);
    let find = |name: &str| {
        model
            .renders()
            .iter()
            .find(|r| r.name == name)
            .unwrap()
            .clone()
    };

    let small = find("track-male-curve-small-right-male-straight-male");
    assert_eq!(small.value("straight_length"), Some(&Value::Number(102.0)));
    assert_eq!(small.value("radius"), Some(&Value::Number(90.0)));

    let large = find("track-male-curve-large-right-male-straight-male");
    assert_eq!(large.value("straight_length"), Some(&Value::Number(152.0)));
    assert_eq!(large.value("radius"), Some(&Value::Number(180.0)));
}

#[test]
fn t_junction_covers_every_table_entry() {
    let (model, report, _) = record(&t_junction::sweep(), T_JUNCTION);
    let names = model.rendered_names();

    assert_eq!(names.len(), 2 * 2 * 3 * 3);
    assert_eq!(report.rendered, 36);
    assert_eq!(names[0], "track-t-stl/track-t-small-male-left-none-right-none");
    assert_eq!(names[1], "track-t-stl/track-t-small-male-left-none-right-male");
    assert_eq!(names[35], "track-t-stl/track-t-large-female-left-female-right-female");
    assert!(model.renders().iter().all(|r| !r.overwrite));
}

#[test]
fn t_junction_keeps_existing_files() {
    let catalog = Catalog::from_source(T_JUNCTION).unwrap();
    let mut model = RecordingModel::new(catalog)
        .with_existing("track-t-stl/track-t-small-male-left-none-right-none");
    let report = run_sweep(&t_junction::sweep(), &mut model, std::io::sink()).unwrap();

    assert_eq!(report.kept, 1);
    assert_eq!(report.rendered, 35);
}

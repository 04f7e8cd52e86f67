//! # Standard Track, Flag Schema
//!
//! Revision of `track-standard.scad` that switches each curve on with a
//! boolean and carries one connector variable per end.
//!
//! Straights come in every length of at least `xsmall`. Curves come in the
//! `small` and `large` radius; a curve with a straight is a switch, whose
//! straight is `small` beside a small curve and `medium` beside a large one.
//! Connectors of absent ends collapse to `male` and stay out of the name.

use super::genders;
use config::constants::{ABSENT_KEY, PLACEHOLDER_CONNECTOR};
use openscad_customizer::Choice;
use track_sweep::axis::numeric_value;
use track_sweep::{Axis, Domain, NameTemplate, Phase, Sweep};

/// Model file swept by this table.
pub const MODEL: &str = "track-standard.scad";

pub fn sweep() -> Sweep {
    Sweep::new(MODEL).phase(straights()).phase(curves())
}

fn straights() -> Phase {
    let name = NameTemplate::new()
        .text("track")
        .key("base_connector")
        .text("straight")
        .key("size")
        .key("straight_connector");

    Phase::new("straight", name)
        .fix("right_curve", false)
        .fix("left_curve", false)
        .axis(
            Axis::new("size", Domain::possible("straight_length").at_least("xsmall"))
                .sets("straight_length"),
        )
        .axis(Axis::new("base_connector", genders()))
        .axis(Axis::new("straight_connector", genders()))
}

/// No straight, or the switch straight matching the curve size.
fn switch_straight() -> Domain {
    Domain::derived(|catalog, combination| {
        let switch = match combination.key("size") {
            Some("small") => "small",
            _ => "medium",
        };
        Ok(vec![
            Choice::new(ABSENT_KEY, 0),
            Choice::new(switch, numeric_value(catalog, "straight_length", switch)?),
        ])
    })
}

fn curves() -> Phase {
    let name = NameTemplate::new()
        .text("track")
        .key("base_connector")
        .text("curve")
        .key("size")
        .tagged("right", "right_connector")
        .tagged("left", "left_connector")
        .tagged("straight", "straight_connector");

    Phase::new("curve", name)
        .axis(Axis::new("size", Domain::possible_keys("radius", ["small", "large"])).sets("radius"))
        .axis(Axis::new("right_curve", Domain::flag()))
        .axis(
            Axis::new("left_curve", Domain::flag())
                .reject_if(|c| !c.flag("right_curve") && !c.flag("left_curve")),
        )
        .axis(Axis::new("straight_length", switch_straight()))
        .axis(Axis::new("base_connector", genders()))
        .axis(
            Axis::new("straight_connector", genders()).relevant_when(
                |c| c.key("straight_length") != Some(ABSENT_KEY),
                PLACEHOLDER_CONNECTOR,
            ),
        )
        .axis(
            Axis::new("right_connector", genders())
                .relevant_when(|c| c.flag("right_curve"), PLACEHOLDER_CONNECTOR),
        )
        .axis(
            Axis::new("left_connector", genders())
                .relevant_when(|c| c.flag("left_curve"), PLACEHOLDER_CONNECTOR),
        )
}

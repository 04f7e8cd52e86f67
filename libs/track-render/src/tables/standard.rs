//! # Standard Track
//!
//! `track-standard.scad` with connector variables that name the gender of
//! each end, `none` meaning the end does not exist.
//!
//! Straights first, in every size but `auto`; then every curve and split
//! with at least one curve, with `straight_size` left on `auto`.

use super::genders;
use config::constants::ABSENT_KEY;
use track_sweep::{Axis, Domain, NameTemplate, Phase, Sweep};

/// Model file swept by this table.
pub const MODEL: &str = "track-standard.scad";

pub fn sweep() -> Sweep {
    Sweep::new(MODEL).phase(straights()).phase(curves())
}

fn straights() -> Phase {
    let name = NameTemplate::new()
        .text("track")
        .key("base")
        .text("straight")
        .key("size")
        .key("straight");

    Phase::new("straight", name)
        .fix("right", ABSENT_KEY)
        .fix("left", ABSENT_KEY)
        .axis(
            Axis::new(
                "size",
                Domain::possible("straight_size")
                    .excluding(["auto"])
                    .numeric(),
            )
            .sets("straight_size"),
        )
        .axis(Axis::new("base", genders()))
        .axis(Axis::new("straight", genders()))
}

fn curves() -> Phase {
    let end = || Domain::literal([ABSENT_KEY, "male", "female"]);
    let name = NameTemplate::new()
        .text("track")
        .key("base")
        .text("curve")
        .key("radius")
        .tagged_unless("right", "right", ABSENT_KEY)
        .tagged_unless("left", "left", ABSENT_KEY)
        .tagged_unless("straight", "straight", ABSENT_KEY);

    Phase::new("curve", name)
        .fix("straight_size", "auto")
        .axis(Axis::new("right", end()))
        // at least one curve
        .axis(Axis::new("left", end()).reject_if(|c| {
            c.key("right") == Some(ABSENT_KEY) && c.key("left") == Some(ABSENT_KEY)
        }))
        .axis(Axis::new("radius", Domain::possible_keys("radius", ["small", "large"])))
        .axis(Axis::new("straight", end()))
        .axis(Axis::new("base", genders()))
}

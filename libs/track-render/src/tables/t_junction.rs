//! # T Junction
//!
//! Every entry of every table of `track-t.scad`. Outputs land in
//! `track-t-stl/` and existing files are kept.

use track_sweep::{Axis, Domain, NameTemplate, Phase, Sweep};

/// Model file swept by this table.
pub const MODEL: &str = "track-t.scad";

/// Directory the pieces are written to, relative to the models directory.
pub const OUTPUT_DIR: &str = "track-t-stl";

pub fn sweep() -> Sweep {
    let name = NameTemplate::new()
        .text(format!("{OUTPUT_DIR}/track-t"))
        .key("radius")
        .key("base")
        .tagged("left", "left")
        .tagged("right", "right");

    let phase = ["radius", "base", "left", "right"]
        .into_iter()
        .fold(Phase::new("t", name), |phase, variable| {
            phase.axis(Axis::new(variable, Domain::possible(variable)))
        });

    Sweep::new(MODEL).overwrite(false).phase(phase)
}

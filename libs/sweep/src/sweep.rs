//! # Sweep Definitions
//!
//! A [`Sweep`] is a model file, an overwrite policy, and one or more
//! [`Phase`]s. A phase is one nest of axes with its fixed assignments and
//! name template. All phases of a run share one Seen-Name Set.
//!
//! ## Example
//!
//! ```rust
//! use track_sweep::{Axis, Domain, NameTemplate, Phase, Sweep};
//!
//! let sweep = Sweep::new("track-standard.scad").phase(
//!     Phase::new(
//!         "straight",
//!         NameTemplate::new().text("track").key("base").text("straight").key("straight"),
//!     )
//!     .fix("right", "none")
//!     .axis(Axis::new("base", Domain::literal(["male", "female"])))
//!     .axis(Axis::new("straight", Domain::literal(["male", "female"]))),
//! );
//! assert_eq!(sweep.phases().len(), 1);
//! assert!(sweep.overwrites());
//! ```

use crate::axis::Axis;
use crate::naming::NameTemplate;
use crate::product::Combinations;
use openscad_customizer::{Catalog, Value};
use std::path::{Path, PathBuf};

// =============================================================================
// PHASE
// =============================================================================

/// One nest of axes.
#[derive(Debug)]
pub struct Phase {
    label: String,
    fixed: Vec<(String, Value)>,
    axes: Vec<Axis>,
    name: NameTemplate,
}

impl Phase {
    pub fn new(label: impl Into<String>, name: NameTemplate) -> Self {
        Self {
            label: label.into(),
            fixed: Vec::new(),
            axes: Vec::new(),
            name,
        }
    }

    /// Assign `value` to `variable` once, before the first combination.
    pub fn fix(mut self, variable: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fixed.push((variable.into(), value.into()));
        self
    }

    /// Append an axis nested inside the previous ones.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fixed(&self) -> &[(String, Value)] {
        &self.fixed
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn name_template(&self) -> &NameTemplate {
        &self.name
    }

    /// Enumerate the phase's combinations.
    pub fn combinations<'a>(&'a self, catalog: &'a Catalog) -> Combinations<'a> {
        Combinations::new(&self.axes, catalog)
    }
}

// =============================================================================
// SWEEP
// =============================================================================

/// A full sweep over one model file.
#[derive(Debug)]
pub struct Sweep {
    model: PathBuf,
    overwrite: bool,
    phases: Vec<Phase>,
}

impl Sweep {
    /// Sweep over `model`; existing files are overwritten by default.
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            overwrite: true,
            phases: Vec::new(),
        }
    }

    /// Set whether existing output files are re-rendered.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Append a phase.
    pub fn phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    pub fn overwrites(&self) -> bool {
        self.overwrite
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}

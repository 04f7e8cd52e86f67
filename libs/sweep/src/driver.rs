//! # Sweep Driver
//!
//! Visits every combination of a sweep and issues one render request per
//! distinct canonical name.
//!
//! Per combination:
//!
//! 1. assign every bound axis onto the model handle
//! 2. derive the canonical name from the relevant axes
//! 3. skip silently if the name was already seen
//! 4. otherwise mark it seen, print it, and render
//!
//! The first assignment or render failure aborts the run.

use crate::error::SweepError;
use crate::model::{ModelHandle, RenderOutcome};
use crate::seen::SeenNames;
use crate::sweep::{Phase, Sweep};
use std::io::Write;
use std::ops::AddAssign;
use tracing::{debug, info, warn};

// =============================================================================
// REPORT
// =============================================================================

/// Counters of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Render requests the renderer carried out.
    pub rendered: usize,
    /// Render requests answered with an existing file.
    pub kept: usize,
    /// Combinations skipped because their name was already seen.
    pub duplicates: usize,
}

impl SweepReport {
    /// Total render requests issued.
    pub fn requests(&self) -> usize {
        self.rendered + self.kept
    }
}

impl AddAssign for SweepReport {
    fn add_assign(&mut self, other: Self) {
        self.rendered += other.rendered;
        self.kept += other.kept;
        self.duplicates += other.duplicates;
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// State of one sweep invocation: the model handle, the Seen-Name Set and
/// the progress sink.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::Catalog;
/// use track_sweep::{Axis, Domain, Driver, NameTemplate, Phase, RecordingModel, Sweep};
///
/// let catalog = Catalog::from_source("base = \"male\"; // [male, female]").unwrap();
/// let mut model = RecordingModel::new(catalog);
/// let sweep = Sweep::new("demo.scad").phase(
///     Phase::new("base", NameTemplate::new().text("demo").key("base"))
///         .axis(Axis::new("base", Domain::possible("base"))),
/// );
///
/// let mut out = Vec::new();
/// let report = Driver::new(&mut model, &mut out).run(&sweep).unwrap();
/// assert_eq!(report.rendered, 2);
/// assert_eq!(String::from_utf8(out).unwrap(), "demo-male\ndemo-female\n");
/// ```
pub struct Driver<'m, M, W> {
    model: &'m mut M,
    out: W,
    seen: SeenNames,
}

impl<'m, M: ModelHandle, W: Write> Driver<'m, M, W> {
    /// Start a run with an empty Seen-Name Set.
    pub fn new(model: &'m mut M, out: W) -> Self {
        Self {
            model,
            out,
            seen: SeenNames::new(),
        }
    }

    /// Continue from an existing Seen-Name Set; names in it are never
    /// requested again.
    pub fn with_seen(model: &'m mut M, out: W, seen: SeenNames) -> Self {
        Self { model, out, seen }
    }

    /// Names requested so far in this run.
    pub fn seen(&self) -> &SeenNames {
        &self.seen
    }

    /// End the run, keeping its Seen-Name Set.
    pub fn into_seen(self) -> SeenNames {
        self.seen
    }

    /// Run every phase of a sweep in order.
    pub fn run(&mut self, sweep: &Sweep) -> Result<SweepReport, SweepError> {
        info!(
            model = %sweep.model().display(),
            phases = sweep.phases().len(),
            overwrite = sweep.overwrites(),
            "starting sweep"
        );

        let mut report = SweepReport::default();
        for phase in sweep.phases() {
            report += self.run_phase(phase, sweep.overwrites())?;
        }

        info!(
            rendered = report.rendered,
            kept = report.kept,
            duplicates = report.duplicates,
            "sweep complete"
        );
        Ok(report)
    }

    /// Run a single phase.
    pub fn run_phase(&mut self, phase: &Phase, overwrite: bool) -> Result<SweepReport, SweepError> {
        info!(phase = phase.label(), axes = phase.axes().len(), "starting phase");

        for (variable, value) in phase.fixed() {
            self.model
                .set(variable, value.clone())
                .map_err(SweepError::model)?;
        }

        let catalog = self.model.catalog().clone();
        let mut report = SweepReport::default();

        for combination in phase.combinations(&catalog) {
            let combination = combination?;

            for (variable, value) in combination.assignments() {
                debug!(variable, %value, "assign");
                self.model
                    .set(variable, value.clone())
                    .map_err(SweepError::model)?;
            }

            let name = phase.name_template().render(&combination)?;
            if !self.seen.insert(&name) {
                debug!(%name, "duplicate canonical name, skipping");
                report.duplicates += 1;
                continue;
            }

            writeln!(self.out, "{name}").map_err(SweepError::Output)?;

            match self
                .model
                .render_to_file(&name, overwrite)
                .map_err(SweepError::model)?
            {
                RenderOutcome::Rendered => report.rendered += 1,
                RenderOutcome::Kept => {
                    warn!(%name, "output exists and overwrite is off, kept");
                    report.kept += 1;
                }
            }
        }

        Ok(report)
    }
}

/// Run a sweep with a fresh Seen-Name Set.
pub fn run_sweep<M: ModelHandle, W: Write>(
    sweep: &Sweep,
    model: &mut M,
    out: W,
) -> Result<SweepReport, SweepError> {
    Driver::new(model, out).run(sweep)
}

//! # Runner
//!
//! Resolves settings, picks the model handle and runs a sweep table with
//! canonical names written to stdout.

use anyhow::{Context, Result};
use config::Settings;
use openscad_customizer::Catalog;
use openscad_render::{OpenScadModel, RenderOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use track_sweep::{run_sweep, RecordingModel, Sweep, SweepReport};
use tracing::info;

/// Directory holding the model files: the configured one, else the
/// directory of the running executable.
pub fn models_dir(settings: &Settings) -> Result<PathBuf> {
    if let Some(dir) = &settings.models_dir {
        return Ok(dir.clone());
    }
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("executable has no parent directory")
}

/// Run a sweep from the environment: change into the models directory and
/// print every canonical name to stdout.
pub fn run(sweep: &Sweep) -> Result<SweepReport> {
    let settings = Settings::from_env();
    let dir = models_dir(&settings)?;
    std::env::set_current_dir(&dir)
        .with_context(|| format!("failed to enter models directory {}", dir.display()))?;

    let stdout = std::io::stdout();
    run_with(sweep, &settings, None, stdout.lock())
}

/// Run a sweep with explicit settings.
///
/// ## Parameters
///
/// - `models_dir`: Directory of the model file and the outputs; `None` is the
///   working directory
/// - `out`: Sink for the canonical names
pub fn run_with<W: Write>(
    sweep: &Sweep,
    settings: &Settings,
    models_dir: Option<&Path>,
    out: W,
) -> Result<SweepReport> {
    let model_path = match models_dir {
        Some(dir) => dir.join(sweep.model()),
        None => sweep.model().to_path_buf(),
    };

    let report = if settings.dry_run {
        info!(model = %model_path.display(), "dry run, nothing is rendered");
        let catalog = Catalog::load(&model_path)
            .with_context(|| format!("failed to load {}", model_path.display()))?;
        let mut model = RecordingModel::new(catalog);
        run_sweep(sweep, &mut model, out)?
    } else {
        let options = RenderOptions {
            output_dir: models_dir.map(Path::to_path_buf),
            ..RenderOptions::from(settings)
        };
        let mut model = OpenScadModel::open(&model_path, options)
            .with_context(|| format!("failed to open {}", model_path.display()))?;
        info!(
            model = %model.path().display(),
            openscad = %model.options().openscad,
            debug = model.options().debug,
            "rendering with openscad"
        );
        run_sweep(sweep, &mut model, out)?
    };

    Ok(report)
}

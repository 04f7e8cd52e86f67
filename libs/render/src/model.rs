//! # OpenSCAD Model Handle
//!
//! Renders by running the OpenSCAD command line once per request:
//!
//! ```text
//! openscad -o <name>.stl -D base="male" -D radius=152 track-t.scad
//! ```
//!
//! Only variables assigned through [`ModelHandle::set`] are passed with `-D`;
//! everything else keeps the default written in the model file.

use crate::error::RenderError;
use config::constants::EXPORT_EXTENSION;
use config::Settings;
use openscad_customizer::{Catalog, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use track_sweep::{ModelHandle, RenderOutcome};
use tracing::{debug, info};

// =============================================================================
// OPTIONS
// =============================================================================

/// How OpenSCAD is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// OpenSCAD executable.
    pub openscad: String,
    /// Output extension; selects the export format.
    pub extension: String,
    /// Directory output names are resolved against; `None` = working directory.
    pub output_dir: Option<PathBuf>,
    /// Inherit OpenSCAD's stdio and log full command lines.
    pub debug: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for RenderOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            openscad: settings.openscad.clone(),
            extension: EXPORT_EXTENSION.to_string(),
            output_dir: None,
            debug: settings.debug,
        }
    }
}

// =============================================================================
// MODEL
// =============================================================================

/// A `.scad` model rendered through the OpenSCAD command line.
#[derive(Debug, Clone)]
pub struct OpenScadModel {
    path: PathBuf,
    catalog: Catalog,
    overrides: HashMap<String, Value>,
    options: RenderOptions,
}

impl OpenScadModel {
    /// Open a model file and read its parameters.
    pub fn open(path: impl Into<PathBuf>, options: RenderOptions) -> Result<Self, RenderError> {
        let path = path.into();
        let catalog = Catalog::load(&path)?;
        Ok(Self::with_catalog(path, catalog, options))
    }

    /// Wrap a model whose catalog is already known.
    pub fn with_catalog(path: impl Into<PathBuf>, catalog: Catalog, options: RenderOptions) -> Self {
        Self {
            path: path.into(),
            catalog,
            overrides: HashMap::new(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Value assigned to a variable, if any.
    pub fn assigned(&self, variable: &str) -> Option<&Value> {
        self.overrides.get(variable)
    }

    /// File a render request for `name` writes.
    pub fn output_path(&self, name: &str) -> PathBuf {
        let file = PathBuf::from(format!("{name}.{}", self.options.extension));
        match &self.options.output_dir {
            Some(dir) => dir.join(file),
            None => file,
        }
    }

    /// `-D name=value` definitions for the current assignment, in catalog
    /// order.
    pub fn definitions(&self) -> Vec<String> {
        self.catalog
            .iter()
            .filter_map(|v| {
                self.assigned(&v.name)
                    .map(|value| format!("{}={}", v.name, value))
            })
            .collect()
    }

    /// Program and arguments of the render command for `output`.
    pub fn command_line(&self, output: &Path) -> Vec<String> {
        let mut line = vec![
            self.options.openscad.clone(),
            "-o".to_string(),
            output.display().to_string(),
        ];
        for definition in self.definitions() {
            line.push("-D".to_string());
            line.push(definition);
        }
        line.push(self.path.display().to_string());
        line
    }

    fn command(&self, output: &Path) -> Command {
        let mut command = Command::new(&self.options.openscad);
        command.arg("-o").arg(output);
        for definition in self.definitions() {
            command.arg("-D").arg(definition);
        }
        command.arg(&self.path);
        command
    }

    fn run(&self, output: &Path) -> Result<(), RenderError> {
        let mut command = self.command(output);
        let spawn_error = |source| RenderError::Spawn {
            program: self.options.openscad.clone(),
            source,
        };

        if self.options.debug {
            info!(command = ?self.command_line(output), "running openscad");
            let status = command
                .stdin(Stdio::null())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(spawn_error)?;
            if !status.success() {
                return Err(RenderError::Failed {
                    output: output.to_path_buf(),
                    status,
                    stderr: String::new(),
                });
            }
        } else {
            debug!(command = ?self.command_line(output), "running openscad");
            let result = command
                .stdin(Stdio::null())
                .output()
                .map_err(spawn_error)?;
            if !result.status.success() {
                return Err(RenderError::Failed {
                    output: output.to_path_buf(),
                    status: result.status,
                    stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
                });
            }
        }

        Ok(())
    }
}

impl ModelHandle for OpenScadModel {
    type Error = RenderError;

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn set(&mut self, variable: &str, value: Value) -> Result<(), Self::Error> {
        if !self.catalog.contains(variable) {
            return Err(RenderError::UnknownVariable {
                variable: variable.to_string(),
            });
        }
        self.overrides.insert(variable.to_string(), value);
        Ok(())
    }

    fn render_to_file(
        &mut self,
        name: &str,
        overwrite: bool,
    ) -> Result<RenderOutcome, Self::Error> {
        let output = self.output_path(name);
        if !overwrite && output.exists() {
            return Ok(RenderOutcome::Kept);
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.run(&output)?;
        Ok(RenderOutcome::Rendered)
    }
}

// =============================================================================
// TESTS
// =============================================================================

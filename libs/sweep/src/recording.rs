//! # Recording Model
//!
//! A [`ModelHandle`] that never renders: it records every assignment and
//! render request. Backs dry runs and tests.
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::{Catalog, Value};
//! use track_sweep::{ModelHandle, RecordingModel, RenderOutcome};
//!
//! let catalog = Catalog::from_source("base = \"male\"; // [male, female]").unwrap();
//! let mut model = RecordingModel::new(catalog);
//! model.set("base", Value::from("female")).unwrap();
//! assert_eq!(model.render_to_file("track-female", true).unwrap(), RenderOutcome::Rendered);
//! assert_eq!(model.renders()[0].value("base"), Some(&Value::from("female")));
//! ```

use crate::model::{ModelHandle, RenderOutcome};
use openscad_customizer::{Catalog, Value};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised by [`RecordingModel`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordingError {
    /// Assignment to a variable the catalog does not declare.
    #[error("model has no variable '{0}'")]
    UnknownVariable(String),

    /// Render of a name registered with [`RecordingModel::fail_on`].
    #[error("render of '{0}' failed")]
    RenderFailed(String),
}

/// One recorded render request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Canonical name passed to the handle.
    pub name: String,
    /// Overwrite flag passed to the handle.
    pub overwrite: bool,
    /// Explicit assignments at the time of the request, in catalog order.
    pub assignments: Vec<(String, Value)>,
    /// Outcome reported back to the caller.
    pub outcome: RenderOutcome,
}

impl RenderRequest {
    /// Value assigned to a variable at the time of the request.
    pub fn value(&self, variable: &str) -> Option<&Value> {
        self.assignments
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, value)| value)
    }
}

/// In-memory model handle.
#[derive(Debug, Clone, Default)]
pub struct RecordingModel {
    catalog: Catalog,
    assignments: HashMap<String, Value>,
    existing: HashSet<String>,
    failing: HashSet<String>,
    renders: Vec<RenderRequest>,
}

impl RecordingModel {
    /// Create a handle over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Treat `name` as already present on disk.
    pub fn with_existing(mut self, name: impl Into<String>) -> Self {
        self.existing.insert(name.into());
        self
    }

    /// Make the render of `name` fail.
    pub fn fail_on(mut self, name: impl Into<String>) -> Self {
        self.failing.insert(name.into());
        self
    }

    /// Render requests received so far, in order.
    pub fn renders(&self) -> &[RenderRequest] {
        &self.renders
    }

    /// Names of the render requests received so far, in order.
    pub fn rendered_names(&self) -> Vec<&str> {
        self.renders.iter().map(|r| r.name.as_str()).collect()
    }

    /// Current value of a variable, if it was assigned.
    pub fn assigned(&self, variable: &str) -> Option<&Value> {
        self.assignments.get(variable)
    }
}

impl ModelHandle for RecordingModel {
    type Error = RecordingError;

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn set(&mut self, variable: &str, value: Value) -> Result<(), Self::Error> {
        if !self.catalog.contains(variable) {
            return Err(RecordingError::UnknownVariable(variable.to_string()));
        }
        self.assignments.insert(variable.to_string(), value);
        Ok(())
    }

    fn render_to_file(
        &mut self,
        name: &str,
        overwrite: bool,
    ) -> Result<RenderOutcome, Self::Error> {
        if self.failing.contains(name) {
            return Err(RecordingError::RenderFailed(name.to_string()));
        }

        let outcome = if !overwrite && self.existing.contains(name) {
            RenderOutcome::Kept
        } else {
            self.existing.insert(name.to_string());
            RenderOutcome::Rendered
        };

        let assignments = self
            .catalog
            .iter()
            .filter_map(|v| {
                self.assignments
                    .get(&v.name)
                    .map(|value| (v.name.clone(), value.clone()))
            })
            .collect();

        self.renders.push(RenderRequest {
            name: name.to_string(),
            overwrite,
            assignments,
            outcome,
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> RecordingModel {
        RecordingModel::new(
            Catalog::from_source("base = \"male\"; // [male, female]\nradius = 90;").unwrap(),
        )
    }

    #[test]
    fn test_unknown_variable_is_rejected() {
        let mut model = model();
        let err = model.set("gauge", Value::Number(1.0)).unwrap_err();
        assert_eq!(err, RecordingError::UnknownVariable("gauge".into()));
    }

    #[test]
    fn test_assignments_recorded_in_catalog_order() {
        let mut model = model();
        model.set("radius", Value::Number(180.0)).unwrap();
        model.set("base", Value::from("female")).unwrap();
        model.render_to_file("t", true).unwrap();
        let names: Vec<&str> = model.renders()[0]
            .assignments
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["base", "radius"]);
    }

    #[test]
    fn test_existing_file_kept_without_overwrite() {
        let mut model = model().with_existing("t");
        assert_eq!(model.render_to_file("t", false).unwrap(), RenderOutcome::Kept);
        assert_eq!(model.render_to_file("t", true).unwrap(), RenderOutcome::Rendered);
    }

    #[test]
    fn test_fail_on() {
        let mut model = model().fail_on("bad");
        assert!(model.render_to_file("bad", true).is_err());
        assert!(model.renders().is_empty());
    }
}

//! # Runtime Settings
//!
//! Settings resolved from the environment at startup.
//!
//! ## Example
//!
//! ```rust
//! use config::Settings;
//!
//! let settings = Settings::from_lookup(|key| match key {
//!     "OPENSCAD" => Some("/opt/openscad/bin/openscad".to_string()),
//!     _ => None,
//! });
//! assert_eq!(settings.openscad, "/opt/openscad/bin/openscad");
//! assert!(!settings.dry_run);
//! ```

use crate::constants::{
    is_truthy, ENV_DEBUG, ENV_DRY_RUN, ENV_MODELS_DIR, ENV_OPENSCAD, OPENSCAD_BINARY,
};
use std::path::PathBuf;

// =============================================================================
// SETTINGS
// =============================================================================

/// Runtime settings shared by the render binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// OpenSCAD executable (name on `PATH` or absolute path).
    pub openscad: String,
    /// Explicit models directory, if configured.
    pub models_dir: Option<PathBuf>,
    /// Record render requests instead of invoking OpenSCAD.
    pub dry_run: bool,
    /// Inherit OpenSCAD stdio and log full command lines.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openscad: OPENSCAD_BINARY.to_string(),
            models_dir: None,
            dry_run: false,
            debug: false,
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary lookup function.
    ///
    /// Empty values are treated as unset.
    ///
    /// ## Parameters
    ///
    /// - `lookup`: Returns the value of an environment variable, if any
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            openscad: get(ENV_OPENSCAD).unwrap_or_else(|| OPENSCAD_BINARY.to_string()),
            models_dir: get(ENV_MODELS_DIR).map(PathBuf::from),
            dry_run: get(ENV_DRY_RUN).is_some_and(|v| is_truthy(&v)),
            debug: get(ENV_DEBUG).is_some_and(|v| is_truthy(&v)),
        }
    }
}

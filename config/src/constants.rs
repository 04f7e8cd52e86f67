//! # Configuration Constants
//!
//! Centralized constants for the track render sweep. Renderer defaults,
//! naming conventions, and the environment variable names read by
//! [`crate::Settings`] are defined here.
//!
//! ## Categories
//!
//! - **Renderer**: OpenSCAD binary, export format, annotation limits
//! - **Naming**: Canonical name separator and placeholder keys
//! - **Environment**: Variable names for runtime overrides
//! - **Logging**: Default filter directive

// =============================================================================
// RENDERER CONSTANTS
// =============================================================================

/// OpenSCAD executable looked up on `PATH` when no override is set.
///
/// # Example
///
/// ```rust
/// use config::constants::OPENSCAD_BINARY;
///
/// let cmd = std::process::Command::new(OPENSCAD_BINARY);
/// assert_eq!(cmd.get_program(), "openscad");
/// ```
pub const OPENSCAD_BINARY: &str = "openscad";

/// File extension of rendered meshes.
///
/// OpenSCAD picks the export format from the output extension, so this
/// constant also selects the format.
///
/// # Example
///
/// ```rust
/// use config::constants::EXPORT_EXTENSION;
///
/// let file = format!("track-male-straight-small-male.{}", EXPORT_EXTENSION);
/// assert!(file.ends_with(".stl"));
/// ```
pub const EXPORT_EXTENSION: &str = "stl";

/// Upper bound on the number of values a slider annotation may enumerate.
///
/// A `// [min:step:max]` range is expanded into one choice per step; ranges
/// larger than this are rejected when the model is read.
pub const MAX_RANGE_CHOICES: usize = 10_000;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Separator placed between the parts of a canonical name.
pub const NAME_SEPARATOR: &str = "-";

/// Key of an enumeration value meaning "feature absent" (e.g. no curve).
pub const ABSENT_KEY: &str = "none";

/// Connector gender bound to an axis whose feature is disabled.
///
/// A disabled feature has no meaningful gender; the axis collapses to this
/// single value and contributes nothing to the canonical name.
pub const PLACEHOLDER_CONNECTOR: &str = "male";

/// Connector genders in enumeration order.
pub const CONNECTOR_GENDERS: [&str; 2] = ["male", "female"];

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Overrides [`OPENSCAD_BINARY`].
pub const ENV_OPENSCAD: &str = "OPENSCAD";

/// Directory holding the `.scad` models; the binaries change into it.
///
/// Defaults to the directory of the running executable.
pub const ENV_MODELS_DIR: &str = "TRACK_MODELS_DIR";

/// When truthy, render requests are recorded and printed but OpenSCAD is
/// never invoked.
pub const ENV_DRY_RUN: &str = "TRACK_RENDER_DRY_RUN";

/// When truthy, OpenSCAD inherits stdout/stderr and command lines are
/// logged at info level.
pub const ENV_DEBUG: &str = "TRACK_RENDER_DEBUG";

// =============================================================================
// LOGGING CONSTANTS
// =============================================================================

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Interpret an environment flag value.
///
/// `1`, `true`, `yes` and `on` (any case) are truthy; everything else,
/// including the empty string, is not.
///
/// # Example
///
/// ```rust
/// use config::constants::is_truthy;
///
/// assert!(is_truthy("1"));
/// assert!(is_truthy("TRUE"));
/// assert!(!is_truthy("0"));
/// assert!(!is_truthy(""));
/// ```
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

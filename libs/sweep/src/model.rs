//! # Parametric Model Handle
//!
//! The seam between the sweep and whatever turns an assignment into a file.

use openscad_customizer::{Catalog, Value};

/// Result of a render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The renderer produced the file.
    Rendered,
    /// The file already existed and overwriting was not requested.
    Kept,
}

/// A parametric model with settable variables and a synchronous renderer.
///
/// Implementations keep the current assignment; [`ModelHandle::set`]
/// replaces one variable's value and [`ModelHandle::render_to_file`] renders
/// whatever is assigned at that moment.
pub trait ModelHandle {
    /// Error raised by assignments and renders.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Variables of the model and their possible domains.
    fn catalog(&self) -> &Catalog;

    /// Assign a value to a variable.
    fn set(&mut self, variable: &str, value: Value) -> Result<(), Self::Error>;

    /// Render the current assignment to a file named after `name`.
    ///
    /// Blocks until the render completes.
    fn render_to_file(&mut self, name: &str, overwrite: bool)
        -> Result<RenderOutcome, Self::Error>;
}

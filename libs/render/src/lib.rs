//! # OpenSCAD Render
//!
//! [`track_sweep::ModelHandle`] implementation that exports meshes with the
//! OpenSCAD command line.
//!
//! ## Example
//!
//! ```no_run
//! use openscad_customizer::Value;
//! use openscad_render::{OpenScadModel, RenderOptions};
//! use track_sweep::ModelHandle;
//!
//! let mut model = OpenScadModel::open("track-t.scad", RenderOptions::default())?;
//! model.set("base", Value::from("female"))?;
//! model.render_to_file("track-t-female", true)?;
//! # Ok::<(), openscad_render::RenderError>(())
//! ```

pub mod error;
pub mod model;

pub use error::RenderError;
pub use model::{OpenScadModel, RenderOptions};

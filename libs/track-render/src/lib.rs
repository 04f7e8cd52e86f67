//! # Track Render
//!
//! Render sweeps for the wooden railway track models. Each sweep is a table
//! of phases and axes run by [`track_sweep`]; the binaries pick a table and
//! hand it to [`runner::run`].
//!
//! | Binary | Table | Model |
//! |--------|-------|-------|
//! | `track-standard-render` | [`tables::standard`] | `track-standard.scad` |
//! | `track-standard-flags-render` | [`tables::standard_flags`] | `track-standard.scad` |
//! | `track-t-render` | [`tables::t_junction`] | `track-t.scad` |

pub mod logging;
pub mod runner;
pub mod tables;

pub use runner::{models_dir, run, run_with};

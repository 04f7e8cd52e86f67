//! # Config Crate
//!
//! Centralized configuration for the track render sweep.
//! Every default and every environment variable name the workspace reads is
//! defined here so the libraries and binaries agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EXPORT_EXTENSION, OPENSCAD_BINARY};
//! use config::Settings;
//!
//! let settings = Settings::from_lookup(|_| None);
//! assert_eq!(settings.openscad, OPENSCAD_BINARY);
//! assert_eq!(EXPORT_EXTENSION, "stl");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: constants defined once, used everywhere
//! - **Environment Overrides**: runtime settings resolve from env vars
//! - **OpenSCAD Compatible**: defaults match a stock OpenSCAD install

pub mod constants;
pub mod settings;

pub use settings::Settings;

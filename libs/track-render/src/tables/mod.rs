//! # Sweep Tables
//!
//! One declarative table per track model. Each module exposes the model file
//! it sweeps and a `sweep()` constructor.

pub mod standard;
pub mod standard_flags;
pub mod t_junction;

use config::constants::CONNECTOR_GENDERS;
use track_sweep::Domain;

/// `male`, `female`.
pub(crate) fn genders() -> Domain {
    Domain::literal(CONNECTOR_GENDERS)
}

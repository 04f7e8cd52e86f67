//! # Track Sweep
//!
//! Enumerates parameter combinations of a parametric model and requests one
//! render per semantically distinct combination.
//!
//! ## Architecture
//!
//! ```text
//! Sweep ─ Phase ─ Axis (Domain, relevance, pruning)
//!            │
//!            ▼
//!     Combinations (Cartesian product with pruning)
//!            │
//!            ▼
//!     NameTemplate ─▶ SeenNames ─▶ ModelHandle::render_to_file
//! ```
//!
//! Combinations that differ only in axes irrelevant to them (for example the
//! connector gender of a curve that is not present) collapse to the same
//! canonical name; only the first one is rendered.

pub mod axis;
pub mod combination;
pub mod driver;
pub mod error;
pub mod model;
pub mod naming;
pub mod product;
pub mod recording;
pub mod seen;
pub mod sweep;

pub use axis::{Axis, Domain};
pub use combination::{Binding, Combination};
pub use driver::{run_sweep, Driver, SweepReport};
pub use error::{BoxError, SweepError};
pub use model::{ModelHandle, RenderOutcome};
pub use naming::{NamePart, NameTemplate};
pub use product::Combinations;
pub use recording::{RecordingError, RecordingModel, RenderRequest};
pub use seen::SeenNames;
pub use sweep::{Phase, Sweep};

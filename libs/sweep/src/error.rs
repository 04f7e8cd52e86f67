//! # Sweep Errors
//!
//! Error types for sweep enumeration and driving.

use thiserror::Error;

/// Boxed error produced by a model handle.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a sweep.
///
/// Duplicate canonical names are not errors; they are counted in
/// [`crate::SweepReport::duplicates`].
#[derive(Debug, Error)]
pub enum SweepError {
    /// A domain refers to a variable the model does not declare.
    #[error("model has no variable '{variable}'")]
    UnknownVariable {
        /// Requested variable.
        variable: String,
    },

    /// A domain refers to a key missing from a variable's table.
    #[error("variable '{variable}' has no possible value '{key}'")]
    UnknownKey {
        /// Variable whose table was searched.
        variable: String,
        /// Missing key.
        key: String,
    },

    /// A threshold comparison met a non-numeric value.
    #[error("value of '{key}' in '{variable}' is not numeric")]
    NotNumeric {
        /// Variable whose table was searched.
        variable: String,
        /// Key with the non-numeric value.
        key: String,
    },

    /// A threshold was requested on a domain that is not backed by a table.
    #[error("threshold '{key}' needs a domain drawn from a variable's table")]
    ThresholdWithoutTable {
        /// Threshold key.
        key: String,
    },

    /// A name template refers to an axis that is not bound.
    #[error("name part refers to unbound axis '{label}'")]
    UnboundAxis {
        /// Axis label.
        label: String,
    },

    /// Writing the progress line failed.
    #[error("failed to write progress output")]
    Output(#[source] std::io::Error),

    /// The model handle rejected an assignment or a render request.
    #[error("model handle failed")]
    Model(#[source] BoxError),
}

impl SweepError {
    /// Wrap a model handle error.
    pub fn model(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Model(Box::new(err))
    }
}

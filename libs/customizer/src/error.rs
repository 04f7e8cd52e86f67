//! # Customizer Errors
//!
//! Error types raised while reading a model's parameters.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a [`crate::Catalog`].
#[derive(Debug, Error)]
pub enum CustomizerError {
    /// The model file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A string literal runs to end of file.
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString {
        /// 1-indexed line of the opening quote.
        line: usize,
    },

    /// A block comment runs to end of file.
    #[error("unterminated block comment starting on line {line}")]
    UnterminatedComment {
        /// 1-indexed line of the opening `/*`.
        line: usize,
    },

    /// A number literal could not be parsed.
    #[error("invalid number '{text}' on line {line}")]
    InvalidNumber {
        /// The offending text.
        text: String,
        /// 1-indexed line.
        line: usize,
    },

    /// A `// [...]` annotation could not be interpreted.
    #[error("invalid annotation for '{variable}' on line {line}: {reason}")]
    InvalidAnnotation {
        /// Variable the annotation belongs to.
        variable: String,
        /// 1-indexed line.
        line: usize,
        /// What is wrong with it.
        reason: AnnotationError,
    },
}

/// Reasons an annotation is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnotationError {
    /// `[]` or `[a,,b]`.
    #[error("empty item")]
    EmptyItem,

    /// A range with a non-finite part, a step that is not positive, or
    /// reversed bounds.
    #[error("invalid range {min}:{step}:{max}")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Step.
        step: f64,
        /// Upper bound.
        max: f64,
    },

    /// A range expanding to more values than allowed.
    #[error("range expands to {count} values (limit {limit})")]
    RangeTooLarge {
        /// Number of values the range would produce.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CustomizerError::InvalidAnnotation {
            variable: "radius".to_string(),
            line: 3,
            reason: AnnotationError::EmptyItem,
        };
        let msg = err.to_string();
        assert!(msg.contains("radius"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("empty item"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CustomizerError::Io {
            path: PathBuf::from("track-t.scad"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("track-t.scad"));
    }
}

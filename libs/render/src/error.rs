//! # Render Errors

use openscad_customizer::CustomizerError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised by [`crate::OpenScadModel`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// The model's parameters could not be read.
    #[error("failed to read model parameters")]
    Catalog(#[from] CustomizerError),

    /// Assignment to a variable the model does not declare.
    #[error("model has no variable '{variable}'")]
    UnknownVariable {
        /// Requested variable.
        variable: String,
    },

    /// Preparing the output location failed.
    #[error("failed to prepare {}", .path.display())]
    Io {
        /// Path being prepared.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// OpenSCAD could not be started.
    #[error("failed to run '{program}'; is OpenSCAD installed and on PATH?")]
    Spawn {
        /// Program that was executed.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// OpenSCAD exited unsuccessfully.
    #[error("rendering {} failed ({status}){}", .output.display(), format_stderr(.stderr))]
    Failed {
        /// Requested output file.
        output: PathBuf,
        /// Exit status of the process.
        status: ExitStatus,
        /// Captured standard error; empty in debug mode.
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stderr() {
        assert_eq!(format_stderr("  \n"), "");
        assert_eq!(
            format_stderr("ERROR: Parser error\n"),
            ": ERROR: Parser error"
        );
    }

    #[test]
    fn test_spawn_error_mentions_program() {
        let err = RenderError::Spawn {
            program: "openscad".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("'openscad'"));
    }
}

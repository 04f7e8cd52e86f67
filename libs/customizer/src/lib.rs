//! # OpenSCAD Customizer
//!
//! Extracts the Customizer parameters of an OpenSCAD model: every top-level
//! literal assignment before the first module, with the domain of possible
//! values declared in its trailing `// [...]` comment.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer (comments kept) → Tokens → CatalogParser → Catalog
//! ```
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::{Catalog, Value};
//!
//! let catalog = Catalog::from_source(r#"
//!     straight_size = 102; // [auto:auto, 51:xsmall, 102:small, 152:medium]
//! "#).unwrap();
//!
//! let sizes = &catalog.get("straight_size").unwrap().possible;
//! assert_eq!(sizes.keys(), vec!["auto", "xsmall", "small", "medium"]);
//! assert_eq!(sizes.get("medium"), Some(Value::Number(152.0)));
//! ```

pub mod catalog;
pub mod error;
pub mod lexer;
pub mod possible;
pub mod span;
pub mod value;

pub use catalog::{Catalog, Variable};
pub use error::{AnnotationError, CustomizerError};
pub use possible::{Choice, Possible};
pub use span::{Position, Span};
pub use value::Value;

//! # Canonical Names
//!
//! A [`NameTemplate`] turns a combination into its canonical name from the
//! relevant axes only. Parts referring to a collapsed axis are omitted, so
//! every combination differing only in irrelevant axes maps to the same name.
//!
//! ## Example
//!
//! ```rust
//! use track_sweep::NameTemplate;
//!
//! let template = NameTemplate::new()
//!     .text("track")
//!     .key("base")
//!     .text("curve")
//!     .key("radius")
//!     .tagged_unless("right", "right", "none");
//! assert_eq!(template.parts().len(), 5);
//! ```

use crate::combination::{Binding, Combination};
use crate::error::SweepError;
use config::constants::NAME_SEPARATOR;

/// One part of a canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePart {
    /// Literal text.
    Text(String),
    /// Key bound to an axis.
    Key(String),
    /// `tag-key` for an axis, omitted when the key equals `omit_key`.
    Tagged {
        tag: String,
        label: String,
        omit_key: Option<String>,
    },
}

/// Ordered parts joined by a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    parts: Vec<NamePart>,
    separator: String,
}

impl Default for NameTemplate {
    fn default() -> Self {
        Self {
            parts: Vec::new(),
            separator: NAME_SEPARATOR.to_string(),
        }
    }
}

impl NameTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(NamePart::Text(text.into()));
        self
    }

    /// Append the key bound to `label`.
    pub fn key(mut self, label: impl Into<String>) -> Self {
        self.parts.push(NamePart::Key(label.into()));
        self
    }

    /// Append `tag-key` for `label`.
    pub fn tagged(mut self, tag: impl Into<String>, label: impl Into<String>) -> Self {
        self.parts.push(NamePart::Tagged {
            tag: tag.into(),
            label: label.into(),
            omit_key: None,
        });
        self
    }

    /// Append `tag-key` for `label` unless its key is `omit_key`.
    pub fn tagged_unless(
        mut self,
        tag: impl Into<String>,
        label: impl Into<String>,
        omit_key: impl Into<String>,
    ) -> Self {
        self.parts.push(NamePart::Tagged {
            tag: tag.into(),
            label: label.into(),
            omit_key: Some(omit_key.into()),
        });
        self
    }

    /// Replace the separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn parts(&self) -> &[NamePart] {
        &self.parts
    }

    /// Canonical name of a combination.
    ///
    /// ## Errors
    ///
    /// [`SweepError::UnboundAxis`] when a part names an axis the combination
    /// does not bind.
    pub fn render(&self, combination: &Combination) -> Result<String, SweepError> {
        let mut pieces: Vec<&str> = Vec::with_capacity(self.parts.len() * 2);

        for part in &self.parts {
            match part {
                NamePart::Text(text) => pieces.push(text),
                NamePart::Key(label) => {
                    let binding = bound(combination, label)?;
                    if binding.active {
                        pieces.push(&binding.choice.key);
                    }
                }
                NamePart::Tagged {
                    tag,
                    label,
                    omit_key,
                } => {
                    let binding = bound(combination, label)?;
                    let omitted = omit_key.as_deref() == Some(binding.choice.key.as_str());
                    if binding.active && !omitted {
                        pieces.push(tag);
                        pieces.push(&binding.choice.key);
                    }
                }
            }
        }

        Ok(pieces.join(&self.separator))
    }
}

fn bound<'c>(combination: &'c Combination, label: &str) -> Result<&'c Binding, SweepError> {
    combination.get(label).ok_or_else(|| SweepError::UnboundAxis {
        label: label.to_string(),
    })
}

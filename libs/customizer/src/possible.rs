//! # Possible Values
//!
//! The domain of a Customizer parameter, parsed from its trailing
//! `// [...]` annotation.
//!
//! | Annotation              | Domain                                  |
//! |-------------------------|-----------------------------------------|
//! | `[male, female]`        | options keyed by their own text         |
//! | `[50:xsmall, 100:small]`| options keyed by label, valued by number|
//! | `[0:90]`, `[0:5:90]`    | slider range                            |
//! | `[90]`                  | slider from 0 to 90                     |
//! | none, boolean default   | flag                                    |
//! | none                    | unconstrained                           |
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::{Possible, Value};
//!
//! let sizes = Possible::from_annotation(
//!     Some("[50:xsmall, 100:small, 150:medium]"),
//!     &Value::Number(100.0),
//! )
//! .unwrap();
//! assert_eq!(sizes.get("small"), Some(Value::Number(100.0)));
//! assert_eq!(sizes.keys(), vec!["xsmall", "small", "medium"]);
//! ```

use crate::error::AnnotationError;
use crate::value::Value;
use config::constants::MAX_RANGE_CHOICES;

// =============================================================================
// CHOICE
// =============================================================================

/// One entry of a domain: the symbolic key and the concrete value.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Key used in canonical names (`"small"`, `"male"`).
    pub key: String,
    /// Value assigned to the model variable.
    pub value: Value,
}

impl Choice {
    /// Create a choice from a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A choice whose value is its own key as a string (`male` → `"male"`).
    pub fn literal(key: impl Into<String>) -> Self {
        let key = key.into();
        let value = Value::String(key.clone());
        Self { key, value }
    }

    /// A boolean choice keyed `true` / `false`.
    pub fn flag(value: bool) -> Self {
        Self::new(value.to_string(), value)
    }
}

impl From<&str> for Choice {
    fn from(key: &str) -> Self {
        Self::literal(key)
    }
}

// =============================================================================
// POSSIBLE
// =============================================================================

/// Domain of allowed values for a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Possible {
    /// No annotation; any value is accepted and nothing can be enumerated.
    Unconstrained,
    /// Boolean checkbox: `true`, `false`.
    Flag,
    /// Explicit enumeration or keyed size table, in declaration order.
    Options(Vec<Choice>),
    /// Numeric slider.
    Range { min: f64, step: f64, max: f64 },
}

impl Possible {
    /// Parse the body of a trailing comment (without `//`) into a domain.
    ///
    /// ## Parameters
    ///
    /// - `annotation`: Comment body, if the assignment has one
    /// - `default`: Default value; option values are typed after it
    ///
    /// ## Errors
    ///
    /// Empty items, non-finite, reversed or zero-step ranges, and ranges larger than
    /// [`MAX_RANGE_CHOICES`].
    pub fn from_annotation(
        annotation: Option<&str>,
        default: &Value,
    ) -> Result<Self, AnnotationError> {
        let body = annotation
            .map(str::trim)
            .and_then(|a| a.strip_prefix('['))
            .and_then(|a| a.strip_suffix(']'))
            .map(str::trim);

        let Some(body) = body else {
            return Ok(match default {
                Value::Boolean(_) => Self::Flag,
                _ => Self::Unconstrained,
            });
        };

        let items: Vec<&str> = body.split(',').map(str::trim).collect();
        if items.iter().any(|item| item.is_empty()) {
            return Err(AnnotationError::EmptyItem);
        }

        if let [single] = items.as_slice() {
            if let Some(range) = parse_range(single, default)? {
                return Ok(range);
            }
        }

        Ok(Self::Options(
            items.into_iter().map(|item| parse_option(item, default)).collect(),
        ))
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Self::Unconstrained => None,
            Self::Flag => key.parse::<bool>().ok().map(Value::Boolean),
            Self::Options(choices) => choices
                .iter()
                .find(|c| c.key == key)
                .map(|c| c.value.clone()),
            Self::Range { .. } => self
                .choices()
                .into_iter()
                .find(|c| c.key == key)
                .map(|c| c.value),
        }
    }

    /// Every choice, in enumeration order.
    pub fn choices(&self) -> Vec<Choice> {
        match self {
            Self::Unconstrained => Vec::new(),
            Self::Flag => vec![Choice::flag(true), Choice::flag(false)],
            Self::Options(choices) => choices.clone(),
            Self::Range { min, step, max } => (0..range_count(*min, *step, *max))
                .map(|i| {
                    let value = Value::Number(min + step * i as f64);
                    Choice::new(value.key_text(), value)
                })
                .collect(),
        }
    }

    /// Every key, in enumeration order.
    pub fn keys(&self) -> Vec<String> {
        self.choices().into_iter().map(|c| c.key).collect()
    }

    /// True when the domain cannot be enumerated.
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Number of values in an inclusive range; a small tolerance absorbs
/// floating-point drift in `(max - min) / step`. Saturates at `usize::MAX`.
fn range_count(min: f64, step: f64, max: f64) -> usize {
    let steps = ((max - min) / step + 1e-9).floor();
    if !steps.is_finite() || steps >= usize::MAX as f64 {
        return usize::MAX;
    }
    (steps as usize).saturating_add(1)
}

/// `min:max`, `min:step:max` or a lone `max` with a numeric default.
fn parse_range(item: &str, default: &Value) -> Result<Option<Possible>, AnnotationError> {
    let parts: Option<Vec<f64>> = item.split(':').map(|p| p.trim().parse().ok()).collect();
    let (min, step, max) = match parts.as_deref() {
        Some([max]) if default.is_number() => (0.0, 1.0, *max),
        Some([min, max]) => (*min, 1.0, *max),
        Some([min, step, max]) => (*min, *step, *max),
        _ => return Ok(None),
    };

    let finite = min.is_finite() && step.is_finite() && max.is_finite();
    if !finite || step <= 0.0 || max < min {
        return Err(AnnotationError::InvalidRange { min, step, max });
    }
    let count = range_count(min, step, max);
    if count > MAX_RANGE_CHOICES {
        return Err(AnnotationError::RangeTooLarge {
            count,
            limit: MAX_RANGE_CHOICES,
        });
    }

    Ok(Some(Possible::Range { min, step, max }))
}

/// `value` or `value:label`.
fn parse_option(item: &str, default: &Value) -> Choice {
    let (raw, label) = match item.split_once(':') {
        Some((raw, label)) => (raw.trim(), label.trim()),
        None => (item, item),
    };
    let raw = raw
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(raw);
    let label = label
        .strip_prefix('"')
        .and_then(|l| l.strip_suffix('"'))
        .unwrap_or(label);

    let value = match default {
        Value::Number(_) => raw
            .parse::<f64>()
            .map(Value::Number)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        Value::Boolean(_) => raw
            .parse::<bool>()
            .map(Value::Boolean)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        _ => Value::String(raw.to_string()),
    };

    Choice::new(label, value)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> Value {
        Value::from("male")
    }

    #[test]
    fn test_plain_options() {
        let possible = Possible::from_annotation(Some("[male, female]"), &text()).unwrap();
        assert_eq!(
            possible,
            Possible::Options(vec![Choice::literal("male"), Choice::literal("female")])
        );
    }

    #[test]
    fn test_labeled_numeric_options() {
        let possible =
            Possible::from_annotation(Some("[0:none, 51:xsmall, 102:small]"), &Value::Number(0.0))
                .unwrap();
        assert_eq!(possible.get("xsmall"), Some(Value::Number(51.0)));
        assert_eq!(possible.keys(), vec!["none", "xsmall", "small"]);
    }

    #[test]
    fn test_non_numeric_entry_in_numeric_table_stays_string() {
        let possible =
            Possible::from_annotation(Some("[auto:auto, 51:xsmall]"), &Value::Number(51.0))
                .unwrap();
        assert_eq!(possible.get("auto"), Some(Value::from("auto")));
        assert_eq!(possible.get("xsmall"), Some(Value::Number(51.0)));
    }

    #[test]
    fn test_range() {
        let possible = Possible::from_annotation(Some("[0:30:90]"), &Value::Number(0.0)).unwrap();
        assert_eq!(possible.keys(), vec!["0", "30", "60", "90"]);
        assert_eq!(possible.get("60"), Some(Value::Number(60.0)));
        assert_eq!(possible.get("45"), None);
    }

    #[test]
    fn test_single_number_is_slider_max() {
        let possible = Possible::from_annotation(Some("[3]"), &Value::Number(1.0)).unwrap();
        assert_eq!(
            possible,
            Possible::Range {
                min: 0.0,
                step: 1.0,
                max: 3.0
            }
        );
    }

    #[test]
    fn test_single_labeled_entry_is_option() {
        let possible = Possible::from_annotation(Some("[10:tiny]"), &Value::Number(10.0)).unwrap();
        assert_eq!(possible.keys(), vec!["tiny"]);
    }

    #[test]
    fn test_flag_without_annotation() {
        let possible = Possible::from_annotation(None, &Value::Boolean(true)).unwrap();
        assert_eq!(possible, Possible::Flag);
        assert_eq!(possible.keys(), vec!["true", "false"]);
        assert_eq!(possible.get("false"), Some(Value::Boolean(false)));
    }

    #[test]
    fn test_free_text_comment_is_unconstrained() {
        let possible =
            Possible::from_annotation(Some("length of the piece"), &Value::Number(1.0)).unwrap();
        assert!(possible.is_unconstrained());
        assert!(possible.choices().is_empty());
    }

    #[test]
    fn test_empty_item_is_rejected() {
        let err = Possible::from_annotation(Some("[male,,female]"), &text()).unwrap_err();
        assert_eq!(err, AnnotationError::EmptyItem);
        let err = Possible::from_annotation(Some("[]"), &text()).unwrap_err();
        assert_eq!(err, AnnotationError::EmptyItem);
    }

    #[test]
    fn test_invalid_ranges_are_rejected() {
        let num = Value::Number(0.0);
        assert!(matches!(
            Possible::from_annotation(Some("[10:0:20]"), &num),
            Err(AnnotationError::InvalidRange { .. })
        ));
        assert!(matches!(
            Possible::from_annotation(Some("[20:10]"), &num),
            Err(AnnotationError::InvalidRange { .. })
        ));
        assert!(matches!(
            Possible::from_annotation(Some("[0:0.001:1000]"), &num),
            Err(AnnotationError::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_wide_ranges_are_too_large() {
        let num = Value::Number(1.0);
        for annotation in ["[0:1e300]", "[0:1e-300:1]", "[-1e308:1e308]"] {
            assert!(
                matches!(
                    Possible::from_annotation(Some(annotation), &num),
                    Err(AnnotationError::RangeTooLarge { limit, .. }) if limit == MAX_RANGE_CHOICES
                ),
                "{annotation}"
            );
        }
    }

    #[test]
    fn test_non_finite_bounds_are_invalid() {
        let num = Value::Number(1.0);
        for annotation in ["[0:inf]", "[-inf:0]", "[nan:1]", "[0:nan:1]", "[0:inf:1]"] {
            assert!(
                matches!(
                    Possible::from_annotation(Some(annotation), &num),
                    Err(AnnotationError::InvalidRange { .. })
                ),
                "{annotation}"
            );
        }
    }

    #[test]
    fn test_range_count_saturates() {
        assert_eq!(range_count(0.0, 1e-300, 1.0), usize::MAX);
        assert_eq!(range_count(0.0, 1.0, f64::INFINITY), usize::MAX);
        assert_eq!(range_count(0.0, 5.0, 90.0), 19);
    }
}

//! # Axes and Domains
//!
//! Declarative description of one sweep dimension: where its values come
//! from, which model variable they are assigned to, when the axis is
//! relevant, and which prefixes prune the sweep.
//!
//! ## Example
//!
//! ```rust
//! use track_sweep::{Axis, Domain};
//!
//! // Connector gender of the right curve, only meaningful when it exists.
//! let right_connector = Axis::new("right_connector", Domain::literal(["male", "female"]))
//!     .relevant_when(|c| c.flag("right_curve"), "male");
//! assert_eq!(right_connector.label(), "right_connector");
//! ```

use crate::combination::Combination;
use crate::error::SweepError;
use openscad_customizer::{Catalog, Choice, Possible, Value};
use std::fmt;

/// Predicate over the bindings made so far.
pub type Predicate = dyn Fn(&Combination) -> bool;

/// Domain computed from the catalog and the bindings made so far.
pub type DeriveFn = dyn Fn(&Catalog, &Combination) -> Result<Vec<Choice>, SweepError>;

// =============================================================================
// DOMAIN
// =============================================================================

enum Source {
    Choices(Vec<Choice>),
    Possible { variable: String },
    PossibleKeys { variable: String, keys: Vec<String> },
    Derived(Box<DeriveFn>),
}

/// Provider of an axis' values.
pub struct Domain {
    source: Source,
    excluded: Vec<String>,
    at_least: Option<String>,
    numeric: bool,
}

impl Domain {
    fn from_source(source: Source) -> Self {
        Self {
            source,
            excluded: Vec::new(),
            at_least: None,
            numeric: false,
        }
    }

    /// Fixed keys whose values are the keys themselves as strings.
    pub fn literal<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::choices(keys.into_iter().map(Choice::literal).collect())
    }

    /// `true`, then `false`.
    pub fn flag() -> Self {
        Self::choices(vec![Choice::flag(true), Choice::flag(false)])
    }

    /// Explicit choices.
    pub fn choices(choices: Vec<Choice>) -> Self {
        Self::from_source(Source::Choices(choices))
    }

    /// Every entry of a variable's possible table, in declaration order.
    pub fn possible(variable: impl Into<String>) -> Self {
        Self::from_source(Source::Possible {
            variable: variable.into(),
        })
    }

    /// Selected entries of a variable's possible table, in the given order.
    pub fn possible_keys<I, S>(variable: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_source(Source::PossibleKeys {
            variable: variable.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        })
    }

    /// Choices computed from the catalog and the outer bindings.
    pub fn derived(
        derive: impl Fn(&Catalog, &Combination) -> Result<Vec<Choice>, SweepError> + 'static,
    ) -> Self {
        Self::from_source(Source::Derived(Box::new(derive)))
    }

    /// Drop the given keys.
    pub fn excluding<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Drop entries whose numeric value is below the value of `key` in the
    /// same table.
    ///
    /// Compares underlying values, not key names, so renaming or reordering
    /// the table does not change which entries survive.
    pub fn at_least(mut self, key: impl Into<String>) -> Self {
        self.at_least = Some(key.into());
        self
    }

    /// Assign values as numbers even when the table stores them as text,
    /// as in `[auto, 51:xsmall]` where the default is a string.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Resolve the choices for the current outer bindings.
    pub fn resolve(
        &self,
        catalog: &Catalog,
        combination: &Combination,
    ) -> Result<Vec<Choice>, SweepError> {
        let mut choices = match &self.source {
            Source::Choices(choices) => choices.clone(),
            Source::Possible { variable } => table(catalog, variable)?.choices(),
            Source::PossibleKeys { variable, keys } => {
                let possible = table(catalog, variable)?;
                keys.iter()
                    .map(|key| {
                        possible
                            .get(key)
                            .map(|value| Choice::new(key.clone(), value))
                            .ok_or_else(|| SweepError::UnknownKey {
                                variable: variable.clone(),
                                key: key.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            Source::Derived(derive) => derive(catalog, combination)?,
        };

        choices.retain(|c| !self.excluded.contains(&c.key));

        if let Some(threshold) = &self.at_least {
            let variable = self
                .table_variable()
                .ok_or_else(|| SweepError::ThresholdWithoutTable {
                    key: threshold.clone(),
                })?;
            let minimum = numeric_value(catalog, variable, threshold)?;
            let mut kept = Vec::with_capacity(choices.len());
            for choice in choices {
                let value = choice.value.as_f64().ok_or_else(|| SweepError::NotNumeric {
                    variable: variable.to_string(),
                    key: choice.key.clone(),
                })?;
                if value >= minimum {
                    kept.push(choice);
                }
            }
            choices = kept;
        }

        if self.numeric {
            for choice in &mut choices {
                let value = choice.value.as_f64().ok_or_else(|| SweepError::NotNumeric {
                    variable: self.table_variable().unwrap_or_default().to_string(),
                    key: choice.key.clone(),
                })?;
                choice.value = Value::Number(value);
            }
        }

        Ok(choices)
    }

    fn table_variable(&self) -> Option<&str> {
        match &self.source {
            Source::Possible { variable } | Source::PossibleKeys { variable, .. } => {
                Some(variable)
            }
            Source::Choices(_) | Source::Derived(_) => None,
        }
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Source::Choices(choices) => format!("choices({})", choices.len()),
            Source::Possible { variable } => format!("possible({variable})"),
            Source::PossibleKeys { variable, keys } => {
                format!("possible_keys({variable}, {keys:?})")
            }
            Source::Derived(_) => "derived".to_string(),
        };
        f.debug_struct("Domain")
            .field("source", &source)
            .field("excluded", &self.excluded)
            .field("at_least", &self.at_least)
            .field("numeric", &self.numeric)
            .finish()
    }
}

/// Possible table of a catalog variable.
pub fn table<'c>(catalog: &'c Catalog, variable: &str) -> Result<&'c Possible, SweepError> {
    catalog
        .get(variable)
        .map(|v| &v.possible)
        .ok_or_else(|| SweepError::UnknownVariable {
            variable: variable.to_string(),
        })
}

/// Numeric value of `key` in a variable's table.
pub fn numeric_value(catalog: &Catalog, variable: &str, key: &str) -> Result<f64, SweepError> {
    let value = table(catalog, variable)?
        .get(key)
        .ok_or_else(|| SweepError::UnknownKey {
            variable: variable.to_string(),
            key: key.to_string(),
        })?;
    value.as_f64().ok_or_else(|| SweepError::NotNumeric {
        variable: variable.to_string(),
        key: key.to_string(),
    })
}

// =============================================================================
// AXIS
// =============================================================================

/// One dimension of a sweep.
pub struct Axis {
    label: String,
    variable: String,
    domain: Domain,
    relevance: Option<(Box<Predicate>, Choice)>,
    reject: Option<Box<Predicate>>,
}

impl Axis {
    /// Axis assigning its choices to the model variable of the same name.
    pub fn new(label: impl Into<String>, domain: Domain) -> Self {
        let label = label.into();
        Self {
            variable: label.clone(),
            label,
            domain,
            relevance: None,
            reject: None,
        }
    }

    /// Assign choices to `variable` instead of the variable named after the
    /// label.
    pub fn sets(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Enumerate the domain only while `predicate` holds; otherwise bind the
    /// single `placeholder` and mark the axis collapsed.
    pub fn relevant_when(
        mut self,
        predicate: impl Fn(&Combination) -> bool + 'static,
        placeholder: impl Into<Choice>,
    ) -> Self {
        self.relevance = Some((Box::new(predicate), placeholder.into()));
        self
    }

    /// Prune every combination whose bindings up to and including this axis
    /// satisfy `predicate`.
    pub fn reject_if(mut self, predicate: impl Fn(&Combination) -> bool + 'static) -> Self {
        self.reject = Some(Box::new(predicate));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Choices for the current outer bindings, and whether the axis is
    /// active (false = collapsed to its placeholder).
    pub fn resolve(
        &self,
        catalog: &Catalog,
        combination: &Combination,
    ) -> Result<(Vec<Choice>, bool), SweepError> {
        if let Some((relevant, placeholder)) = &self.relevance {
            if !relevant(combination) {
                return Ok((vec![placeholder.clone()], false));
            }
        }
        Ok((self.domain.resolve(catalog, combination)?, true))
    }

    /// Whether the bindings made so far are pruned by this axis.
    pub fn rejects(&self, combination: &Combination) -> bool {
        self.reject.as_ref().is_some_and(|reject| reject(combination))
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("label", &self.label)
            .field("variable", &self.variable)
            .field("domain", &self.domain)
            .field("conditional", &self.relevance.is_some())
            .field("pruning", &self.reject.is_some())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

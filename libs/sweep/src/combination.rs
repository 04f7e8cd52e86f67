//! # Configuration Assignment
//!
//! One point of a sweep: the choice bound to every axis, in nesting order.

use openscad_customizer::{Choice, Value};

/// The choice bound to one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Axis label.
    pub label: String,
    /// Model variable the choice is assigned to.
    pub variable: String,
    /// Bound choice.
    pub choice: Choice,
    /// False when the axis collapsed to its placeholder.
    pub active: bool,
}

/// Bindings of every axis of a phase, outermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Combination {
    bindings: Vec<Binding>,
}

impl Combination {
    /// Binding of an axis.
    pub fn get(&self, label: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.label == label)
    }

    /// Key chosen for an axis.
    pub fn key(&self, label: &str) -> Option<&str> {
        self.get(label).map(|b| b.choice.key.as_str())
    }

    /// Value chosen for an axis.
    pub fn value(&self, label: &str) -> Option<&Value> {
        self.get(label).map(|b| &b.choice.value)
    }

    /// Truthiness of the value chosen for an axis; unbound axes are false.
    pub fn flag(&self, label: &str) -> bool {
        self.value(label).is_some_and(Value::is_truthy)
    }

    /// Whether an axis is bound and did not collapse.
    pub fn is_active(&self, label: &str) -> bool {
        self.get(label).is_some_and(|b| b.active)
    }

    /// All bindings, outermost first.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// `(variable, value)` pairs to assign onto the model.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings
            .iter()
            .map(|b| (b.variable.as_str(), &b.choice.value))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.bindings.truncate(len);
    }
}

impl FromIterator<Binding> for Combination {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(label: &str, choice: Choice, active: bool) -> Binding {
        Binding {
            label: label.into(),
            variable: label.into(),
            choice,
            active,
        }
    }

    #[test]
    fn test_lookups() {
        let combination: Combination = [
            binding("right_curve", Choice::flag(false), true),
            binding("right_connector", Choice::literal("male"), false),
        ]
        .into_iter()
        .collect();

        assert!(!combination.flag("right_curve"));
        assert_eq!(combination.key("right_connector"), Some("male"));
        assert!(!combination.is_active("right_connector"));
        assert!(!combination.is_active("left_connector"));
        assert_eq!(combination.assignments().count(), 2);
    }
}

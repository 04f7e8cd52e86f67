//! # Cartesian Product with Pruning
//!
//! Depth-first enumeration of a phase's axes. Each axis' domain is resolved
//! against the bindings of the axes outside it, so domains may depend on
//! earlier choices. An axis whose reject predicate holds prunes the whole
//! subtree below it; an empty domain prunes too.
//!
//! ```text
//! axis 0:  a ─────────────┬──── b ──── ...
//! axis 1:  x ──┬── y      │
//! axis 2:  1 2 │  1 2     (rejected: skipped with everything below)
//! ```

use crate::axis::Axis;
use crate::combination::{Binding, Combination};
use crate::error::SweepError;
use openscad_customizer::{Catalog, Choice};

/// Pending choices of one axis.
struct Frame {
    choices: Vec<Choice>,
    next: usize,
    active: bool,
}

/// Iterator over the combinations of a list of axes, outermost varying
/// slowest.
///
/// Yields `Err` at most once; iteration ends after an error.
pub struct Combinations<'a> {
    axes: &'a [Axis],
    catalog: &'a Catalog,
    frames: Vec<Frame>,
    current: Combination,
    started: bool,
    done: bool,
}

impl<'a> Combinations<'a> {
    /// Enumerate `axes` resolving domains against `catalog`.
    pub fn new(axes: &'a [Axis], catalog: &'a Catalog) -> Self {
        Self {
            axes,
            catalog,
            frames: Vec::with_capacity(axes.len()),
            current: Combination::default(),
            started: false,
            done: false,
        }
    }

    /// Resolve the domain of the axis at the next depth.
    fn descend(&mut self) -> Result<(), SweepError> {
        let axis = &self.axes[self.frames.len()];
        let (choices, active) = axis.resolve(self.catalog, &self.current)?;
        self.frames.push(Frame {
            choices,
            next: 0,
            active,
        });
        Ok(())
    }

    fn fail(&mut self, err: SweepError) -> Option<Result<Combination, SweepError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl Iterator for Combinations<'_> {
    type Item = Result<Combination, SweepError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            if self.axes.is_empty() {
                self.done = true;
                return Some(Ok(Combination::default()));
            }
            if let Err(err) = self.descend() {
                return self.fail(err);
            }
        }

        loop {
            let depth = self.frames.len().checked_sub(1)?;
            let frame = &mut self.frames[depth];

            let Some(choice) = frame.choices.get(frame.next).cloned() else {
                self.frames.pop();
                if self.frames.is_empty() {
                    self.done = true;
                    return None;
                }
                continue;
            };
            frame.next += 1;
            let active = frame.active;

            let axis = &self.axes[depth];
            self.current.truncate(depth);
            self.current.push(Binding {
                label: axis.label().to_string(),
                variable: axis.variable().to_string(),
                choice,
                active,
            });

            if axis.rejects(&self.current) {
                continue;
            }

            if depth + 1 == self.axes.len() {
                return Some(Ok(self.current.clone()));
            }

            if let Err(err) = self.descend() {
                return self.fail(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Domain;

    fn keys(combination: &Combination) -> Vec<&str> {
        combination
            .bindings()
            .iter()
            .map(|b| b.choice.key.as_str())
            .collect()
    }

    fn collect(axes: &[Axis]) -> Vec<Vec<String>> {
        let catalog = Catalog::default();
        Combinations::new(axes, &catalog)
            .map(|c| {
                keys(&c.unwrap())
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_outer_axis_varies_slowest() {
        let axes = [
            Axis::new("base", Domain::literal(["male", "female"])),
            Axis::new("straight", Domain::literal(["male", "female"])),
        ];
        assert_eq!(
            collect(&axes),
            vec![
                vec!["male", "male"],
                vec!["male", "female"],
                vec!["female", "male"],
                vec!["female", "female"],
            ]
        );
    }

    #[test]
    fn test_no_axes_yield_one_empty_combination() {
        let result = collect(&[]);
        assert_eq!(result, vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_reject_prunes_subtree() {
        let axes = [
            Axis::new("right", Domain::literal(["none", "male"])),
            Axis::new("left", Domain::literal(["none", "male"]))
                .reject_if(|c| c.key("right") == Some("none") && c.key("left") == Some("none")),
            Axis::new("base", Domain::literal(["male", "female"])),
        ];
        let result = collect(&axes);
        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|k| !(k[0] == "none" && k[1] == "none")));
    }

    #[test]
    fn test_empty_domain_prunes() {
        let axes = [
            Axis::new("a", Domain::literal(["x", "y"])),
            Axis::new("b", Domain::literal(Vec::<String>::new())),
        ];
        assert!(collect(&axes).is_empty());
    }

    #[test]
    fn test_domain_depends_on_outer_binding() {
        let axes = [
            Axis::new("curve", Domain::flag()),
            Axis::new("connector", Domain::literal(["male", "female"]))
                .relevant_when(|c| c.flag("curve"), "male"),
        ];
        assert_eq!(
            collect(&axes),
            vec![
                vec!["true", "male"],
                vec!["true", "female"],
                vec!["false", "male"],
            ]
        );
    }

    #[test]
    fn test_error_ends_iteration() {
        let catalog = Catalog::default();
        let axes = [
            Axis::new("a", Domain::literal(["x", "y"])),
            Axis::new("b", Domain::possible("missing")),
        ];
        let mut iter = Combinations::new(&axes, &catalog);
        assert!(matches!(iter.next(), Some(Err(SweepError::UnknownVariable { .. }))));
        assert!(iter.next().is_none());
    }
}

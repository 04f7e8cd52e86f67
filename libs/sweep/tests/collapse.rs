//! Property: collapsed axes never influence the canonical name.

use openscad_customizer::Choice;
use proptest::prelude::*;
use track_sweep::{Binding, Combination, NameTemplate};

fn binding(label: &str, key: &str, active: bool) -> Binding {
    Binding {
        label: label.to_string(),
        variable: label.to_string(),
        choice: Choice::literal(key),
        active,
    }
}

fn gender() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("male"), Just("female")]
}

fn template() -> NameTemplate {
    NameTemplate::new()
        .text("track")
        .key("base")
        .text("curve")
        .key("size")
        .tagged("right", "right_connector")
        .tagged("left", "left_connector")
        .tagged("straight", "straight_connector")
}

proptest! {
    #[test]
    fn collapsed_connectors_do_not_fork_names(
        base in gender(),
        right_active in any::<bool>(),
        first in (gender(), gender(), gender()),
        second in (gender(), gender(), gender()),
    ) {
        let build = |(right, left, straight): (&str, &str, &str)| -> Combination {
            [
                binding("base", base, true),
                binding("size", "small", true),
                binding("right_connector", right, right_active),
                binding("left_connector", left, false),
                binding("straight_connector", straight, false),
            ]
            .into_iter()
            .collect()
        };

        let a = template().render(&build(first)).unwrap();
        let b = template().render(&build(second)).unwrap();

        if right_active && first.0 != second.0 {
            prop_assert_ne!(a, b);
        } else {
            prop_assert_eq!(a, b);
        }
    }
}

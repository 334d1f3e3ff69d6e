//! Property tests for workspace listing and selection.

use proptest::prelude::*;

use shipit::domain::services::{parse_workspaces, plan_workspace, WorkspaceAction};

fn workspace_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every listed name survives parsing, marked or not.
    #[test]
    fn property_parse_keeps_every_name(
        names in proptest::collection::vec(workspace_name(), 0..=8),
        current in any::<prop::sample::Index>(),
    ) {
        let marked = if names.is_empty() { None } else { Some(current.index(names.len())) };
        let listing: String = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if Some(i) == marked {
                    format!("* {name}\n")
                } else {
                    format!("  {name}\n")
                }
            })
            .collect();

        prop_assert_eq!(parse_workspaces(&listing), names);
    }

    /// PROPERTY: Selection happens exactly when the target is listed.
    #[test]
    fn property_plan_selects_iff_listed(
        names in proptest::collection::vec(workspace_name(), 0..=8),
        target in workspace_name(),
    ) {
        let action = plan_workspace(&names, &target);
        if names.contains(&target) {
            prop_assert_eq!(action, WorkspaceAction::Select(target));
        } else {
            prop_assert_eq!(action, WorkspaceAction::Create(target));
        }
    }

    /// PROPERTY: Parsing arbitrary text never panics and never yields blank names.
    #[test]
    fn property_parse_never_yields_blank(listing in ".{0,200}") {
        for name in parse_workspaces(&listing) {
            prop_assert!(!name.is_empty());
            prop_assert_eq!(name.trim(), name.as_str());
        }
    }
}

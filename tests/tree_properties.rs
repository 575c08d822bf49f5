//! Property-based tests for tree building over generated registries.
//!
//! Invariants checked at every depth:
//! 1. The reserved `helptree` name never appears among children
//! 2. Leaves come before groups, each bucket in byte order
//! 3. Hidden parameters and help aliases never reach any renderer

use clap_helptree::introspect::{RawParameter, RegistryCommand, TreeBuilder, DEFAULT_RESERVED_NAME};
use clap_helptree::render::{render_console, render_document, render_svg, render_text, TreeHeader};
use clap_helptree::CommandNode;
use proptest::prelude::*;

/// Fixed case count and no failure persistence, so runs are reproducible
fn deterministic_config() -> ProptestConfig {
    ProptestConfig {
        cases: 128,
        max_shrink_iters: 512,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Command names, biased towards the reserved name and case variants of it
fn command_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-zA-Z][a-z0-9-]{0,6}",
        1 => Just(DEFAULT_RESERVED_NAME.to_string()),
        1 => Just("Helptree".to_string()),
        1 => Just("helptree-x".to_string()),
    ]
}

fn parameter() -> impl Strategy<Value = RawParameter> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|n| RawParameter::flag(n.clone(), &[format!("--{}", n).as_str()]).help("visible")),
        "[a-z]{1,6}".prop_map(|n| RawParameter::option(n.clone(), &[format!("--{}", n).as_str()]).help("visible")),
        "[a-z]{1,6}".prop_map(|n| RawParameter::positional(n).help("visible")),
        "[a-z]{1,6}".prop_map(|n| RawParameter::flag(n.clone(), &[format!("--{}", n).as_str()])
            .help("SECRET")
            .hidden(true)),
        Just(RawParameter::flag("help", &["-h", "--help"]).help("SECRET")),
    ]
}

fn registry() -> impl Strategy<Value = RegistryCommand> {
    let leaf = (command_name(), prop::collection::vec(parameter(), 0..3)).prop_map(|(name, params)| {
        params
            .into_iter()
            .fold(RegistryCommand::leaf(name), RegistryCommand::param)
    });

    leaf.prop_recursive(4, 48, 6, |inner| {
        (
            command_name(),
            prop::collection::vec(parameter(), 0..3),
            prop::collection::vec(inner, 0..6),
            prop::option::of(command_name()),
        )
            .prop_map(|(name, params, children, dangling)| {
                let group = params
                    .into_iter()
                    .fold(RegistryCommand::group(name), RegistryCommand::param);
                let group = children.into_iter().fold(group, RegistryCommand::command);
                match dangling {
                    Some(missing) => group.dangling(missing),
                    None => group,
                }
            })
    })
}

fn build(root: &RegistryCommand) -> CommandNode {
    TreeBuilder::default().build(&root)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(deterministic_config())]

    #[test]
    fn reserved_name_never_appears(root in registry()) {
        let tree = build(&root);
        for node in tree.iter() {
            prop_assert!(node.children.iter().all(|c| c.name != DEFAULT_RESERVED_NAME));
        }
    }

    #[test]
    fn leaves_precede_groups_in_byte_order(root in registry()) {
        let tree = build(&root);
        for node in tree.iter() {
            let split = node.children.iter().position(|c| c.is_group).unwrap_or(node.children.len());
            let (leaves, groups) = node.children.split_at(split);

            prop_assert!(groups.iter().all(|c| c.is_group));
            prop_assert!(leaves.windows(2).all(|w| w[0].name.as_bytes() <= w[1].name.as_bytes()));
            prop_assert!(groups.windows(2).all(|w| w[0].name.as_bytes() <= w[1].name.as_bytes()));
        }
    }

    #[test]
    fn hidden_parameters_never_rendered(root in registry()) {
        let tree = build(&root);
        let header = TreeHeader::new("app");

        let text = render_text(&tree, &header, 200);
        prop_assert!(!text.contains("SECRET"));
        prop_assert!(!text.contains("--help"));

        let console = render_console(&tree, &header, true);
        prop_assert!(!console.contains("SECRET"));
        prop_assert!(!console.contains("--help"));

        let svg = render_svg(&tree, &header, 100);
        prop_assert!(!svg.contains("SECRET"));
        prop_assert!(!svg.contains("--help"));

        let document = render_document(&tree, None).unwrap();
        prop_assert!(!document.contains("SECRET"));
        prop_assert!(!document.contains("--help"));
    }

    #[test]
    fn document_is_stable_across_builds(root in registry()) {
        let first = render_document(&build(&root), Some("1.0.0")).unwrap();
        let second = render_document(&build(&root), Some("1.0.0")).unwrap();
        prop_assert_eq!(first, second);
    }
}

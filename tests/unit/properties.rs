use deptree_cli::rules::RuleNames;
use deptree_cli::snapshot::{Catalog, ProjectUpdate, RuleChange};
use deptree_cli::test_utils::{node, scenario_catalog, scenario_provider};
use deptree_cli::tree::{DefaultNodeFactory, NodeFactory};

fn unresolved_adds(keys: &[&str]) -> RuleChange {
    let mut change = RuleChange::new("rulenameUnresolved").with_added(keys);
    for key in keys {
        change = change.with_after_item(key, &[]);
    }
    change
}

#[test]
fn test_empty_update_yields_empty_change() {
    let provider = scenario_provider();
    let change = provider.process_dependencies_changes(&ProjectUpdate::new(), &scenario_catalog());
    assert!(change.is_empty());
}

#[test]
fn test_rules_missing_from_catalog_are_skipped() {
    let provider = scenario_provider();
    let update = ProjectUpdate::new().with_rule(unresolved_adds(&["item1"]));

    let change = provider.process_dependencies_changes(&update, &Catalog::new());
    assert!(change.is_empty());
}

#[test]
fn test_unregistered_rules_are_skipped() {
    let mut provider = scenario_provider();
    provider.set_unresolved_reference_rule_names(Vec::<String>::new());
    let update = ProjectUpdate::new().with_rule(unresolved_adds(&["item1"]));

    let change = provider.process_dependencies_changes(&update, &scenario_catalog());
    assert!(change.is_empty());
}

#[test]
fn test_removals_only_report_existing_children() {
    let mut provider = scenario_provider();
    let mut root = DefaultNodeFactory::new("MyProvider").create_root_node();
    root.add_child(node("present", "myUnresolvedItemType", None, false));
    provider.set_root_node(root);

    let update = ProjectUpdate::new().with_rule(
        RuleChange::new("rulenameUnresolved").with_removed(&["absent", "present"]),
    );
    let change = provider.process_dependencies_changes(&update, &scenario_catalog());

    assert_eq!(change.removed_nodes.len(), 1);
    assert!(provider.root().contains_child(change.removed_nodes[0].id()));
}

#[test]
fn test_unresolved_additions_precede_resolved_ones() {
    let provider = scenario_provider();
    let update = ProjectUpdate::new()
        .with_rule(unresolved_adds(&["a", "b", "c"]))
        .with_rule(
            RuleChange::new("rulenameResolved")
                .with_after_item("b.dll", &[("OriginalItemSpec", "b")])
                .with_added(&["b.dll"]),
        );

    let change = provider.process_dependencies_changes(&update, &scenario_catalog());
    let resolved: Vec<bool> = change.added_nodes.iter().map(|n| n.resolved()).collect();
    assert_eq!(resolved, vec![false, false, true]);
    assert_eq!(change.added_nodes[2].id().item_spec, "b");
}

#[test]
fn test_rule_sets_are_replaced_whole() {
    let mut provider = scenario_provider();
    let before: RuleNames = provider.rule_names().clone();

    provider.set_resolved_reference_rule_names(["other"]);
    assert!(before.resolved().contains("rulenameResolved"));
    assert!(!provider.rule_names().resolved().contains("rulenameResolved"));
    assert!(provider.rule_names().unresolved().contains("rulenameUnresolved"));
}

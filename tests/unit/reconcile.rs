use deptree_cli::constants::ORIGINAL_ITEM_SPEC_PROPERTY;
use deptree_cli::snapshot::{ProjectUpdate, RuleChange};
use deptree_cli::test_utils::{
    SnapshotFixture, init_test_logging, node, scenario_catalog, scenario_provider, scenario_root,
};
use deptree_cli::tree::{DependencyNode, NodeFactory, NodeId};

fn scenario_update() -> ProjectUpdate {
    ProjectUpdate::from_json(&SnapshotFixture::scenario().content).unwrap()
}

fn captions(nodes: &[DependencyNode]) -> Vec<&str> {
    nodes.iter().map(DependencyNode::caption).collect()
}

#[test]
fn test_mixed_update_produces_ordered_change() {
    init_test_logging(None);
    let mut provider = scenario_provider();
    provider.set_root_node(scenario_root());

    let change = provider.process_dependencies_changes(&scenario_update(), &scenario_catalog());

    assert_eq!(
        captions(&change.added_nodes),
        vec![
            "item3",
            "unresolvedItemTobeAddedInsteadOfRemovedResolvedItem",
            "item1",
            "item2"
        ]
    );

    let added = &change.added_nodes;
    for unresolved in &added[..2] {
        assert!(!unresolved.resolved());
        assert!(!unresolved.has_original_item_spec());
    }
    for resolved in &added[2..] {
        assert!(resolved.resolved());
        assert!(resolved.has_original_item_spec());
        assert_eq!(resolved.id().item_type, "myUnresolvedItemType");
    }
    assert_eq!(added[2].property(ORIGINAL_ITEM_SPEC_PROPERTY), Some("item1"));

    let removed: Vec<&NodeId> = change.removed_nodes.iter().map(DependencyNode::id).collect();
    assert_eq!(
        removed,
        vec![
            &NodeId::new("MyProvider", "item4", "myUnresolvedItemType"),
            &NodeId::new("MyProvider", "resolvedItemTobeRemoved", "myUnresolvedItemType"),
        ]
    );
    assert!(change.updated_nodes.is_empty());
}

#[test]
fn test_update_without_changes_is_empty() {
    let mut provider = scenario_provider();
    provider.set_root_node(scenario_root());
    let update = ProjectUpdate::from_json(&SnapshotFixture::unchanged().content).unwrap();

    let change = provider.process_dependencies_changes(&update, &scenario_catalog());
    assert!(change.added_nodes.is_empty());
    assert!(change.removed_nodes.is_empty());
}

#[test]
fn test_reconcile_leaves_tree_untouched() {
    let mut provider = scenario_provider();
    provider.set_root_node(scenario_root());

    let _ = provider.process_dependencies_changes(&scenario_update(), &scenario_catalog());
    assert_eq!(provider.root(), &scenario_root());
}

#[test]
fn test_apply_update_then_follow_up() {
    let mut provider = scenario_provider();
    provider.set_root_node(scenario_root());

    provider.apply_update(&scenario_update(), &scenario_catalog());
    assert_eq!(
        captions(provider.root().children()),
        vec![
            "item3",
            "unresolvedItemTobeAddedInsteadOfRemovedResolvedItem",
            "item1",
            "item2"
        ]
    );

    let follow_up = ProjectUpdate::from_json(&SnapshotFixture::remove_item3().content).unwrap();
    let change = provider.apply_update(&follow_up, &scenario_catalog());
    assert_eq!(captions(&change.removed_nodes), vec!["item3"]);
    assert!(change.added_nodes.is_empty());
    assert_eq!(provider.root().children().len(), 3);
}

#[test]
fn test_unregistered_rule_never_appears() {
    let mut provider = scenario_provider();
    let change = provider.apply_update(&scenario_update(), &scenario_catalog());

    let all = change.added_nodes.iter().chain(provider.root().children());
    for node in all {
        assert_ne!(node.id().item_spec, "shouldNotAppear");
    }
}

#[test]
fn test_custom_original_item_spec_property() {
    let json = r#"{
        "ProjectChanges": {
            "rulenameUnresolved": {
                "After": { "Items": { "item1": { } } },
                "Difference": { "AddedItems": [ "item1" ], "AnyChanges": "true" }
            },
            "rulenameResolved": {
                "After": { "Items": { "item1.dll": { "DeclaredAs": "item1" } } },
                "Difference": { "AddedItems": [ "item1.dll" ], "AnyChanges": "true" }
            }
        }
    }"#;
    let update = ProjectUpdate::from_json(json).unwrap();

    let config = deptree_cli::config::ProviderConfig {
        provider_type: "MyProvider".to_string(),
        resolved_rules: vec!["rulenameResolved".to_string()],
        unresolved_rules: vec!["rulenameUnresolved".to_string()],
        original_item_spec_property: "DeclaredAs".to_string(),
        visible_when_empty: false,
    };
    let provider = deptree_cli::provider::DependenciesProvider::from_config(
        deptree_cli::tree::DefaultNodeFactory::new("MyProvider"),
        &config,
    );

    let change = provider.process_dependencies_changes(&update, &scenario_catalog());
    assert_eq!(change.added_nodes.len(), 1);
    assert!(change.added_nodes[0].resolved());
    assert_eq!(change.added_nodes[0].property("DeclaredAs"), Some("item1"));
    assert!(change.added_nodes[0].has_original_item_spec());
    assert_eq!(change.added_nodes[0].original_item_spec(), Some("item1"));
}

#[test]
fn test_resolved_removal_without_original_item_spec() {
    let mut provider = scenario_provider();
    let mut root = provider.factory().create_root_node();
    root.add_child(node("lib.dll", "myUnresolvedItemType", None, true));
    provider.set_root_node(root);

    let update = ProjectUpdate::new().with_rule(
        RuleChange::new("rulenameResolved")
            .with_before_item("lib.dll", &[])
            .with_removed(&["lib.dll"]),
    );

    let change = provider.process_dependencies_changes(&update, &scenario_catalog());
    assert_eq!(captions(&change.removed_nodes), vec!["lib.dll"]);
    assert!(change.added_nodes.is_empty());
}

#[test]
fn test_declaration_and_resolution_removed_together() {
    let mut provider = scenario_provider();
    let mut root = provider.factory().create_root_node();
    root.add_child(node("resolvedItemTobeRemoved", "myUnresolvedItemType", None, true));
    root.add_child(node("item2", "myUnresolvedItemType", None, false));
    provider.set_root_node(root);

    let update = ProjectUpdate::new()
        .with_rule(RuleChange::new("rulenameUnresolved").with_removed(&["orig"]))
        .with_rule(
            RuleChange::new("rulenameResolved")
                .with_before_item(
                    "resolvedItemTobeRemoved",
                    &[(ORIGINAL_ITEM_SPEC_PROPERTY, "orig")],
                )
                .with_removed(&["resolvedItemTobeRemoved"]),
        );

    let change = provider.apply_update(&update, &scenario_catalog());
    assert_eq!(captions(&change.removed_nodes), vec!["resolvedItemTobeRemoved"]);
    assert!(change.added_nodes.is_empty());
    assert_eq!(captions(provider.root().children()), vec!["item2"]);
}

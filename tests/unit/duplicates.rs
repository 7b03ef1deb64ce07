use std::collections::HashSet;

use deptree_cli::test_utils::{node, scenario_provider};
use deptree_cli::tree::{DefaultNodeFactory, DependenciesChange, DependencyNode, NodeFactory};

/// Root with three top nodes, the second already showing its alias.
fn root_with_top_nodes() -> DependencyNode {
    let mut root = DefaultNodeFactory::new("MyProvider").create_root_node();
    root.add_child(node("TopNodeItemSpec1", "", Some("Caption1"), true));
    let mut top2 = node("TopNodeItemSpec2", "", Some("Caption2"), true);
    top2.apply_alias();
    root.add_child(top2);
    root.add_child(node("TopNodeItemSpec3", "", Some("Caption3"), true));
    root
}

fn added_nodes() -> DependenciesChange {
    let mut change = DependenciesChange::new();
    change
        .added_nodes
        .push(node("TopNodeItemSpec1", "OtherItemType", Some("Caption1"), true));
    change
        .added_nodes
        .push(node("TopNodeItemSpec2", "OtherItemType", Some("Caption2"), true));
    change
}

#[test]
fn test_colliding_captions_switch_to_aliases() {
    let mut provider = scenario_provider();
    provider.set_root_node(root_with_top_nodes());
    let mut change = added_nodes();

    provider.process_duplicated_nodes(&mut change);

    assert_eq!(change.updated_nodes.len(), 1);
    let updated = &change.updated_nodes[0];
    assert_eq!(updated.id().item_spec, "TopNodeItemSpec1");
    assert_eq!(updated.caption(), updated.alias());

    let children = provider.root().children();
    assert_eq!(children.len(), 5);
    assert_eq!(children[0].caption(), children[0].alias());
    assert_eq!(children[0].caption(), "Caption1 (TopNodeItemSpec1)");
    assert_eq!(children[1].caption(), "Caption2 (TopNodeItemSpec2)");
    assert_eq!(children[2].caption(), "Caption3");
    assert_eq!(children[3].caption(), children[3].alias());
    assert_eq!(children[3].caption(), "Caption1 (OtherItemType/TopNodeItemSpec1)");
    assert_eq!(children[4].caption(), children[4].alias());

    for added in &change.added_nodes {
        assert!(added.uses_alias());
    }
}

#[test]
fn test_captions_are_unique_after_resolution() {
    let mut provider = scenario_provider();
    provider.set_root_node(root_with_top_nodes());
    let mut change = added_nodes();
    change.added_nodes.push(node("x", "T", Some("Caption3"), false));

    provider.process_duplicated_nodes(&mut change);

    let captions: Vec<&str> = provider.root().children().iter().map(DependencyNode::caption).collect();
    let unique: HashSet<&str> = captions.iter().copied().collect();
    assert_eq!(captions.len(), unique.len(), "captions: {captions:?}");
}

#[test]
fn test_resolution_is_idempotent() {
    let mut provider = scenario_provider();
    provider.set_root_node(root_with_top_nodes());
    let mut change = added_nodes();
    provider.process_duplicated_nodes(&mut change);
    let settled = provider.root().clone();

    let mut replay = DependenciesChange {
        updated_nodes: Vec::new(),
        ..change
    };
    provider.process_duplicated_nodes(&mut replay);

    assert!(replay.updated_nodes.is_empty());
    assert_eq!(provider.root(), &settled);
}

#[test]
fn test_no_added_nodes_changes_nothing() {
    let mut provider = scenario_provider();
    provider.set_root_node(root_with_top_nodes());
    let mut change = DependenciesChange::new();

    provider.process_duplicated_nodes(&mut change);

    assert!(change.is_empty());
    assert_eq!(provider.root(), &root_with_top_nodes());
}

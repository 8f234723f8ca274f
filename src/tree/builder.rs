use serde_json::Value;

use super::node::{ContainerKind, ContainerNode, NodeId, ParentKind, PrimitiveNode, TreeNode, TreeState};

/// Per-build id counter. Threaded through the recursion explicitly so two
/// documents can be built at the same time without sharing state.
#[derive(Default)]
struct IdCounter {
    next: u64,
}

impl IdCounter {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next);
        self.next += 1;
        id
    }
}

/// Builds the node tree for a parsed document.
///
/// `initial_state` applies to the root only; nested containers always start
/// collapsed so the first render stays cheap on large documents.
pub fn build_tree(value: &Value, initial_state: TreeState) -> TreeNode {
    let mut ids = IdCounter::default();
    build_node(value, &mut ids, initial_state, 0, None, true, ParentKind::None)
}

fn build_node(
    value: &Value,
    ids: &mut IdCounter,
    state: TreeState,
    level: usize,
    key: Option<String>,
    is_last_item: bool,
    parent_kind: ParentKind,
) -> TreeNode {
    match value {
        Value::Array(items) => {
            let id = ids.next_id();
            let children = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    build_node(
                        item,
                        ids,
                        TreeState::Collapsed,
                        level + 1,
                        Some(index.to_string()),
                        index + 1 == items.len(),
                        ParentKind::Array,
                    )
                })
                .collect();
            TreeNode::Container(ContainerNode {
                id,
                level,
                kind: ContainerKind::Array,
                state,
                key,
                children,
                is_last_item,
                parent_kind,
            })
        }
        Value::Object(entries) => {
            let id = ids.next_id();
            let last = entries.len();
            let children = entries
                .iter()
                .enumerate()
                .map(|(index, (name, item))| {
                    build_node(
                        item,
                        ids,
                        TreeState::Collapsed,
                        level + 1,
                        Some(name.clone()),
                        index + 1 == last,
                        ParentKind::Object,
                    )
                })
                .collect();
            TreeNode::Container(ContainerNode {
                id,
                level,
                kind: ContainerKind::Object,
                state,
                key,
                children,
                is_last_item,
                parent_kind,
            })
        }
        primitive => TreeNode::Primitive(PrimitiveNode {
            id: ids.next_id(),
            level,
            key,
            value: primitive.clone(),
            is_last_item,
            parent_kind,
        }),
    }
}

/// Copy of `node` with every container above `depth` expanded and everything
/// deeper collapsed. Ids are untouched. Used by the non-interactive printer.
pub fn expand_to_depth(node: &TreeNode, depth: usize) -> TreeNode {
    match node {
        TreeNode::Primitive(_) => node.clone(),
        TreeNode::EndBracket(bracket) => {
            panic!("end bracket {:?} is not part of a tree", bracket.id)
        }
        TreeNode::Container(container) => {
            let state = if container.level < depth {
                TreeState::Expanded
            } else {
                TreeState::Collapsed
            };
            let children = container
                .children
                .iter()
                .map(|child| expand_to_depth(child, depth))
                .collect();
            TreeNode::Container(ContainerNode {
                state,
                children,
                ..container.clone()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario() -> Value {
        json!({"a": 1, "b": [true, null]})
    }

    fn collect_ids(node: &TreeNode, out: &mut Vec<NodeId>) {
        out.push(node.id());
        if let TreeNode::Container(container) = node {
            for child in &container.children {
                collect_ids(child, out);
            }
        }
    }

    #[test]
    fn root_gets_the_initial_state() {
        let root = build_tree(&scenario(), TreeState::FirstItemExpanded);
        let TreeNode::Container(root) = root else {
            panic!("root of an object document must be a container");
        };
        assert_eq!(root.kind, ContainerKind::Object);
        assert_eq!(root.state, TreeState::FirstItemExpanded);
        assert_eq!(root.level, 0);
        assert_eq!(root.key, None);
        assert_eq!(root.parent_kind, ParentKind::None);
        assert!(root.is_last_item);
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn object_children_keep_document_order_and_keys() {
        let root = build_tree(&scenario(), TreeState::Expanded);
        let TreeNode::Container(root) = root else { unreachable!() };
        let TreeNode::Primitive(a) = &root.children[0] else {
            panic!("first child must be the primitive field");
        };
        assert_eq!(a.key.as_deref(), Some("a"));
        assert_eq!(a.level, 1);
        assert_eq!(a.parent_kind, ParentKind::Object);
        assert!(!a.is_last_item);
        let TreeNode::Container(b) = &root.children[1] else {
            panic!("second child must be the array field");
        };
        assert_eq!(b.key.as_deref(), Some("b"));
        assert_eq!(b.kind, ContainerKind::Array);
        assert!(b.is_last_item);
    }

    #[test]
    fn nested_containers_start_collapsed_regardless_of_root_state() {
        let root = build_tree(&scenario(), TreeState::Expanded);
        let TreeNode::Container(root) = root else { unreachable!() };
        let TreeNode::Container(b) = &root.children[1] else { unreachable!() };
        assert_eq!(b.state, TreeState::Collapsed);
    }

    #[test]
    fn array_children_use_stringified_indices() {
        let root = build_tree(&json!([10, 20, 30]), TreeState::Expanded);
        let TreeNode::Container(root) = root else { unreachable!() };
        let keys: Vec<String> = root
            .children
            .iter()
            .map(|child| match child {
                TreeNode::Primitive(p) => p.key.clone().unwrap(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(keys, ["0", "1", "2"]);
        assert!(!root.children[0].is_last_item());
        assert!(root.children[2].is_last_item());
        let TreeNode::Primitive(first) = &root.children[0] else { unreachable!() };
        assert_eq!(first.parent_kind, ParentKind::Array);
    }

    #[test]
    fn primitive_document_builds_a_single_node() {
        let root = build_tree(&json!("hello"), TreeState::FirstItemExpanded);
        let TreeNode::Primitive(root) = root else {
            panic!("a bare string must build a primitive root");
        };
        assert_eq!(root.level, 0);
        assert_eq!(root.key, None);
        assert_eq!(root.parent_kind, ParentKind::None);
        assert!(root.is_last_item);
    }

    #[test]
    fn ids_are_unique_and_assigned_in_preorder() {
        let root = build_tree(&json!({"a": {"b": [1, 2]}, "c": 3}), TreeState::Expanded);
        let mut ids = Vec::new();
        collect_ids(&root, &mut ids);
        assert!(
            ids.windows(2).all(|pair| pair[0] < pair[1]),
            "a pre-order walk must see strictly increasing ids"
        );
    }

    #[test]
    fn two_builds_do_not_share_the_counter() {
        let first = build_tree(&json!({"a": 1}), TreeState::Collapsed);
        let second = build_tree(&json!({"b": 2}), TreeState::Collapsed);
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn expand_to_depth_sets_states_but_keeps_ids() {
        let root = build_tree(&json!({"a": {"b": {"c": 1}}}), TreeState::Collapsed);
        let expanded = expand_to_depth(&root, 2);

        let mut before = Vec::new();
        let mut after = Vec::new();
        collect_ids(&root, &mut before);
        collect_ids(&expanded, &mut after);
        assert_eq!(before, after);

        let TreeNode::Container(r) = &expanded else { unreachable!() };
        assert_eq!(r.state, TreeState::Expanded);
        let TreeNode::Container(a) = &r.children[0] else { unreachable!() };
        assert_eq!(a.state, TreeState::Expanded);
        let TreeNode::Container(b) = &a.children[0] else { unreachable!() };
        assert_eq!(b.state, TreeState::Collapsed);
    }
}

use super::flatten::flatten_into;
use super::node::{ContainerNode, NodeId, TreeNode, TreeState};

/// Flips the collapse state of the container identified by `id` and returns
/// the resulting render list. The input list is left untouched so the view
/// can compare old and new by reference.
///
/// Panics if `id` does not name an entry of `list`, or names one that is not
/// a container — both mean the caller offered a toggle affordance on a row
/// that has none.
pub fn toggle(list: &[TreeNode], id: NodeId) -> Vec<TreeNode> {
    assert!(
        !id.is_end_bracket(),
        "only containers can be toggled, {id:?} is an end bracket"
    );
    let index = list
        .iter()
        .position(|node| node.id() == id)
        .unwrap_or_else(|| panic!("toggle target {id:?} is not present in the current list"));
    let container = match &list[index] {
        TreeNode::Container(container) => container,
        other => panic!("only containers can be toggled, {:?} is not one", other.id()),
    };

    match container.state {
        TreeState::Collapsed => expand_at(list, index, container),
        TreeState::Expanded | TreeState::FirstItemExpanded => collapse_at(list, index, container),
    }
}

/// Single-entry replacement: the opened container, its children flattened at
/// whatever collapse states they last had, and the closing bracket. Nothing
/// outside the new span is touched.
fn expand_at(list: &[TreeNode], index: usize, container: &ContainerNode) -> Vec<TreeNode> {
    let mut replacement = Vec::with_capacity(container.children.len() + 2);
    replacement.push(TreeNode::Container(ContainerNode {
        state: TreeState::Expanded,
        ..container.clone()
    }));
    for child in &container.children {
        flatten_into(child, &mut replacement);
    }
    replacement.push(TreeNode::EndBracket(container.end_bracket()));

    let mut out = list.to_vec();
    out.splice(index..=index, replacement);
    out
}

/// Removes the interval from the container to its bracket and puts back one
/// collapsed entry. The removed span is folded into the replacement's
/// children first, so states toggled while the container was open survive
/// the next expand.
fn collapse_at(list: &[TreeNode], index: usize, container: &ContainerNode) -> Vec<TreeNode> {
    let bracket_id = container.id.end_bracket();
    let end_index = list[index + 1..]
        .iter()
        .position(|node| node.id() == bracket_id)
        .map(|offset| index + 1 + offset)
        .unwrap_or_else(|| {
            panic!("expanded container {:?} has no bracket in the list", container.id)
        });

    let children = fold_span(&list[index + 1..end_index]);
    let mut out = list.to_vec();
    out.splice(
        index..=end_index,
        [TreeNode::Container(with_children(
            container,
            TreeState::Collapsed,
            children,
        ))],
    );
    out
}

/// Copy of `container` with new state and children; the old children vector
/// is not cloned.
fn with_children(
    container: &ContainerNode,
    state: TreeState,
    children: Vec<TreeNode>,
) -> ContainerNode {
    ContainerNode {
        id: container.id,
        level: container.level,
        kind: container.kind,
        state,
        key: container.key.clone(),
        children,
        is_last_item: container.is_last_item,
        parent_kind: container.parent_kind,
    }
}

/// Rebuilds a children vector from the visible entries between a container
/// and its bracket. Open containers inside the span recurse, so the whole
/// subtree's current states are captured.
fn fold_span(span: &[TreeNode]) -> Vec<TreeNode> {
    let mut children = Vec::new();
    let mut index = 0;
    while index < span.len() {
        match &span[index] {
            TreeNode::Primitive(_) => {
                children.push(span[index].clone());
                index += 1;
            }
            TreeNode::Container(container) if container.state.is_collapsed() => {
                children.push(span[index].clone());
                index += 1;
            }
            TreeNode::Container(container) => {
                let bracket_id = container.id.end_bracket();
                let end = span[index + 1..]
                    .iter()
                    .position(|node| node.id() == bracket_id)
                    .map(|offset| index + 1 + offset)
                    .unwrap_or_else(|| {
                        panic!("open container {:?} has no bracket in its span", container.id)
                    });
                let inner = fold_span(&span[index + 1..end]);
                children.push(TreeNode::Container(with_children(
                    container,
                    container.state,
                    inner,
                )));
                index = end + 1;
            }
            TreeNode::EndBracket(bracket) => {
                panic!("stray end bracket {:?} inside a container span", bracket.id)
            }
        }
    }
    children
}

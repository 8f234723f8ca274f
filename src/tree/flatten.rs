use super::node::TreeNode;

/// Projects a node tree onto the flat render list.
///
/// Pre-order: a container contributes itself, then (unless collapsed) its
/// children and one synthetic closing bracket. A collapsed container
/// contributes exactly one entry.
pub fn flatten(root: &TreeNode) -> Vec<TreeNode> {
    let mut list = Vec::new();
    flatten_into(root, &mut list);
    list
}

pub(crate) fn flatten_into(node: &TreeNode, list: &mut Vec<TreeNode>) {
    match node {
        TreeNode::EndBracket(bracket) => panic!(
            "end bracket {:?} flattened directly; brackets are emitted while flattening their container",
            bracket.id
        ),
        TreeNode::Primitive(_) => list.push(node.clone()),
        TreeNode::Container(container) => {
            list.push(node.clone());
            if !container.state.is_collapsed() {
                for child in &container.children {
                    flatten_into(child, list);
                }
                list.push(TreeNode::EndBracket(container.end_bracket()));
            }
        }
    }
}

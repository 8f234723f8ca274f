//! The document tree and its flat projection.
//!
//! A parsed JSON value becomes a tree of immutable nodes with stable ids
//! (`builder`), the tree is projected onto the flat list a virtualized view
//! renders from (`flatten`), and expand/collapse rewrites that list by
//! splicing one container's span instead of re-deriving it from the root
//! (`toggle`). `controller` owns the list for the lifetime of one document.

mod builder;
mod controller;
mod flatten;
mod node;
mod toggle;

pub use builder::{build_tree, expand_to_depth};
pub use controller::{TreeController, ViewerState};
pub use flatten::flatten;
pub use node::{
    ContainerKind, ContainerNode, EndBracketNode, NodeId, ParentKind, PrimitiveNode, TreeNode,
    TreeState, display_value,
};
pub use toggle::toggle;

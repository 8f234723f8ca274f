use serde_json::Value;
use tracing::{debug, warn};

use super::builder::build_tree;
use super::flatten::flatten;
use super::node::{NodeId, TreeNode, TreeState};
use super::toggle::toggle;

/// Lifecycle of one displayed document.
#[derive(Debug)]
pub enum ViewerState {
    /// No document has been consumed yet.
    Loading,
    /// The document failed to parse. Terminal until a new document arrives;
    /// no partial tree is ever shown.
    ParseError(serde_json::Error),
    /// The current render list.
    Ready(Vec<TreeNode>),
}

/// Owns the flat render list for one document and applies toggles to it.
/// The only mutable state in the crate's core; driven by a single event loop.
#[derive(Debug)]
pub struct TreeController {
    state: ViewerState,
}

impl Default for TreeController {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeController {
    pub fn new() -> Self {
        Self {
            state: ViewerState::Loading,
        }
    }

    /// Consumes a new document, discarding whatever was loaded before along
    /// with all of its node identities.
    pub fn load_text(&mut self, text: &str, initial_state: TreeState) {
        self.state = ViewerState::Loading;
        match serde_json::from_str::<Value>(text) {
            Ok(value) => self.load_value(&value, initial_state),
            Err(err) => {
                warn!("document rejected: {err}");
                self.state = ViewerState::ParseError(err);
            }
        }
    }

    /// Same as [`load_text`](Self::load_text) for an already-parsed value.
    pub fn load_value(&mut self, value: &Value, initial_state: TreeState) {
        let root = build_tree(value, initial_state);
        let list = flatten(&root);
        debug!("document ready with {} visible rows", list.len());
        self.state = ViewerState::Ready(list);
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// The current render list, when a document is ready.
    pub fn list(&self) -> Option<&[TreeNode]> {
        match &self.state {
            ViewerState::Ready(list) => Some(list),
            _ => None,
        }
    }

    /// Flips the collapse state of the container with `id` and replaces the
    /// held list. Panics when no document is ready — a toggle can only come
    /// from a rendered row, so getting one in any other state is a defect.
    pub fn toggle(&mut self, id: NodeId) {
        let ViewerState::Ready(list) = &self.state else {
            panic!("toggle requested while no document is ready");
        };
        let new_list = toggle(list, id);
        debug!("toggled {id:?}, {} visible rows", new_list.len());
        self.state = ViewerState::Ready(new_list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::NodeId;

    #[test]
    fn starts_loading_and_reaches_ready() {
        let mut controller = TreeController::new();
        assert!(matches!(controller.state(), ViewerState::Loading));

        controller.load_text(r#"{"a": 1}"#, TreeState::FirstItemExpanded);
        assert!(matches!(controller.state(), ViewerState::Ready(_)));
        assert_eq!(controller.list().unwrap().len(), 3);
    }

    #[test]
    fn malformed_input_becomes_a_parse_error_with_no_list() {
        let mut controller = TreeController::new();
        controller.load_text(r#"{"a":"#, TreeState::FirstItemExpanded);
        assert!(matches!(controller.state(), ViewerState::ParseError(_)));
        assert!(controller.list().is_none());
    }

    #[test]
    fn toggle_replaces_the_held_list() {
        let mut controller = TreeController::new();
        controller.load_text(r#"{"a": {"b": 1}}"#, TreeState::Expanded);
        let a_id = controller.list().unwrap()[1].id();

        controller.toggle(a_id);
        assert_eq!(controller.list().unwrap().len(), 5);

        controller.toggle(a_id);
        assert_eq!(controller.list().unwrap().len(), 3);
    }

    #[test]
    fn a_new_document_discards_the_previous_one() {
        let mut controller = TreeController::new();
        controller.load_text(r#"{"a": {"b": 1}}"#, TreeState::Expanded);
        let a_id = controller.list().unwrap()[1].id();
        controller.toggle(a_id);

        controller.load_text(r#"[1, 2]"#, TreeState::Expanded);
        assert_eq!(controller.list().unwrap().len(), 4);
    }

    #[test]
    fn load_value_skips_the_parse_step() {
        let mut controller = TreeController::new();
        controller.load_value(&serde_json::json!([true]), TreeState::Collapsed);
        assert_eq!(controller.list().unwrap().len(), 1);
    }

    #[test]
    #[should_panic(expected = "no document is ready")]
    fn toggling_before_a_document_is_ready_is_a_defect() {
        let mut controller = TreeController::new();
        controller.toggle(NodeId::new(0));
    }

    #[test]
    #[should_panic(expected = "no document is ready")]
    fn toggling_after_a_parse_error_is_a_defect() {
        let mut controller = TreeController::new();
        controller.load_text("not json", TreeState::Expanded);
        controller.toggle(NodeId::new(0));
    }
}

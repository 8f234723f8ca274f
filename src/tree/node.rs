use serde_json::Value;

/// Identifier of one row the viewer can display.
///
/// Ids are handed out once per loaded document and stay stable across
/// expand/collapse; the virtualized list keys its rows by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

const END_BRACKET_BIT: u64 = 1 << 63;

impl NodeId {
    pub(crate) fn new(raw: u64) -> Self {
        debug_assert!(raw & END_BRACKET_BIT == 0, "id counter overflowed into the bracket bit");
        NodeId(raw)
    }

    /// Id of the closing-bracket row owned by the container with this id.
    /// Derived, so the bracket can be found again without storing it anywhere.
    pub fn end_bracket(self) -> NodeId {
        NodeId(self.0 | END_BRACKET_BIT)
    }

    pub fn is_end_bracket(self) -> bool {
        self.0 & END_BRACKET_BIT != 0
    }
}

/// Collapse state of a container row. `FirstItemExpanded` is only ever given
/// to the root when the document is first shown; after that it behaves
/// exactly like `Expanded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    Collapsed,
    Expanded,
    FirstItemExpanded,
}

impl TreeState {
    pub fn is_collapsed(self) -> bool {
        matches!(self, TreeState::Collapsed)
    }
}

/// What kind of value the node's parent is. Decides whether the key is a
/// field name, an array index, or absent entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    None,
    Array,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Object,
}

impl ContainerKind {
    pub fn open_bracket(self) -> &'static str {
        match self {
            ContainerKind::Array => "[",
            ContainerKind::Object => "{",
        }
    }

    pub fn close_bracket(self) -> &'static str {
        match self {
            ContainerKind::Array => "]",
            ContainerKind::Object => "}",
        }
    }
}

/// One node of the document tree, and also one entry of the flat render
/// list. Nodes are immutable values; every state change produces a new node.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Primitive(PrimitiveNode),
    Container(ContainerNode),
    EndBracket(EndBracketNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNode {
    pub id: NodeId,
    pub level: usize,
    pub key: Option<String>,
    /// Always one of null/bool/number/string.
    pub value: Value,
    pub is_last_item: bool,
    pub parent_kind: ParentKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub id: NodeId,
    pub level: usize,
    pub kind: ContainerKind,
    pub state: TreeState,
    pub key: Option<String>,
    /// Direct children in document order; each child carries its own key.
    pub children: Vec<TreeNode>,
    pub is_last_item: bool,
    pub parent_kind: ParentKind,
}

impl ContainerNode {
    /// The synthetic closing-bracket row shown while this container is open.
    pub fn end_bracket(&self) -> EndBracketNode {
        EndBracketNode {
            id: self.id.end_bracket(),
            level: self.level,
            is_last_item: self.is_last_item,
            kind: self.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndBracketNode {
    pub id: NodeId,
    pub level: usize,
    pub is_last_item: bool,
    pub kind: ContainerKind,
}

impl TreeNode {
    pub fn id(&self) -> NodeId {
        match self {
            TreeNode::Primitive(node) => node.id,
            TreeNode::Container(node) => node.id,
            TreeNode::EndBracket(node) => node.id,
        }
    }

    pub fn level(&self) -> usize {
        match self {
            TreeNode::Primitive(node) => node.level,
            TreeNode::Container(node) => node.level,
            TreeNode::EndBracket(node) => node.level,
        }
    }

    pub fn is_last_item(&self) -> bool {
        match self {
            TreeNode::Primitive(node) => node.is_last_item,
            TreeNode::Container(node) => node.is_last_item,
            TreeNode::EndBracket(node) => node.is_last_item,
        }
    }
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(a) => format!("[{}]", a.len()),
        Value::Object(o) => format!("{{{}}}", o.len()),
    }
}

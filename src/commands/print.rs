use anyhow::Result;
use std::path::Path;

use crate::cli::PrintArgs;
use crate::commands::Document;
use crate::tree::{
    ParentKind, TreeNode, TreeState, build_tree, display_value, expand_to_depth, flatten,
};

/// Writes a plain-text rendering of the tree to stdout, expanded down to
/// `--depth` (everything, when absent). No terminal UI involved.
pub fn run(args: &PrintArgs) -> Result<()> {
    let document = Document::read(Path::new(&args.file))?;
    let value = document.parse()?;

    let root = build_tree(&value, TreeState::Collapsed);
    let root = expand_to_depth(&root, args.depth.unwrap_or(usize::MAX));
    for line in render_lines(&flatten(&root)) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render_lines(list: &[TreeNode]) -> Vec<String> {
    list.iter().map(row_text).collect()
}

fn row_text(node: &TreeNode) -> String {
    let indent = "  ".repeat(node.level());
    let separator = if node.is_last_item() { "" } else { "," };
    match node {
        TreeNode::Primitive(primitive) => {
            format!(
                "{}{}{}{}",
                indent,
                key_prefix(&primitive.key, primitive.parent_kind),
                display_value(&primitive.value),
                separator
            )
        }
        TreeNode::Container(container) if container.state.is_collapsed() => {
            format!(
                "{}{}{}{}{}{}",
                indent,
                key_prefix(&container.key, container.parent_kind),
                container.kind.open_bracket(),
                container.children.len(),
                container.kind.close_bracket(),
                separator
            )
        }
        TreeNode::Container(container) => {
            format!(
                "{}{}{}",
                indent,
                key_prefix(&container.key, container.parent_kind),
                container.kind.open_bracket()
            )
        }
        TreeNode::EndBracket(bracket) => {
            format!("{}{}{}", indent, bracket.kind.close_bracket(), separator)
        }
    }
}

fn key_prefix(key: &Option<String>, parent_kind: ParentKind) -> String {
    match (key, parent_kind) {
        (Some(key), ParentKind::Object) => format!("\"{}\": ", key),
        _ => String::new(),
    }
}

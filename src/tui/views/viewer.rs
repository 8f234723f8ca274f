use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use serde_json::Value;

use crate::tree::{ParentKind, TreeNode, ViewerState, display_value};
use crate::tui::app::{App, Tab};
use crate::tui::widgets::status_bar;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let main_area = chunks[0];
    let status_area = chunks[1];

    let filename = app
        .file
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", filename))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let inner = block.inner(main_area);
    frame.render_widget(block, main_area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    render_tabs(frame, app, inner_chunks[0]);
    match app.tab {
        Tab::Tree => render_tree(frame, app, inner_chunks[1]),
        Tab::Raw => render_raw(frame, app, inner_chunks[1]),
    }

    status_bar::render(frame, status_area, &[
        ("Tab", "switch"),
        ("\u{2191}\u{2193}", "move"),
        ("Enter", "expand/collapse"),
        ("q", "quit"),
    ]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let idx = match app.tab {
        Tab::Tree => 0,
        Tab::Raw => 1,
    };
    let tabs = Tabs::new(vec!["Tree", "Raw"])
        .select(idx)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|");
    frame.render_widget(tabs, area);
}

fn render_tree(frame: &mut Frame, app: &App, area: Rect) {
    let list = match app.controller.state() {
        ViewerState::Loading => {
            let msg = Paragraph::new("Loading...").style(Style::default().fg(Color::Gray));
            frame.render_widget(msg, area);
            return;
        }
        ViewerState::ParseError(err) => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Invalid JSON",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", err),
                    Style::default().fg(Color::Red),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }
        ViewerState::Ready(list) => list,
    };

    let lines: Vec<Line> = list
        .iter()
        .enumerate()
        .skip(app.selected)
        .map(|(i, node)| node_line(node, i == app.selected))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_raw(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .raw
        .lines()
        .skip(app.selected)
        .map(|l| Line::from(l.to_string()))
        .collect();
    let para = Paragraph::new(lines).style(Style::default().fg(Color::Gray));
    frame.render_widget(para, area);
}

fn node_line(node: &TreeNode, is_selected: bool) -> Line<'static> {
    let bg = if is_selected { Color::DarkGray } else { Color::Reset };
    let symbol = Style::default().fg(Color::DarkGray).bg(bg);
    let indent = "  ".repeat(node.level());
    let separator = if node.is_last_item() { "" } else { "," };

    match node {
        TreeNode::Container(container) => {
            let arrow = if container.state.is_collapsed() {
                "\u{25b6}"
            } else {
                "\u{25bc}"
            };
            let mut spans = vec![
                Span::raw(indent).style(Style::default().bg(bg)),
                Span::styled(format!("{} ", arrow), Style::default().fg(Color::Yellow).bg(bg)),
            ];
            spans.extend(key_spans(&container.key, container.parent_kind, bg));
            if container.state.is_collapsed() {
                // collapsed containers summarize their direct child count
                spans.push(Span::styled(
                    format!(
                        "{}{}{}{}",
                        container.kind.open_bracket(),
                        container.children.len(),
                        container.kind.close_bracket(),
                        separator
                    ),
                    symbol,
                ));
            } else {
                spans.push(Span::styled(container.kind.open_bracket(), symbol));
            }
            Line::from(spans)
        }
        TreeNode::Primitive(primitive) => {
            let mut spans = vec![Span::raw(format!("{}  ", indent)).style(Style::default().bg(bg))];
            spans.extend(key_spans(&primitive.key, primitive.parent_kind, bg));
            spans.push(Span::styled(
                display_value(&primitive.value),
                Style::default().fg(value_color(&primitive.value)).bg(bg),
            ));
            if !separator.is_empty() {
                spans.push(Span::styled(separator, symbol));
            }
            Line::from(spans)
        }
        TreeNode::EndBracket(bracket) => Line::from(vec![
            Span::raw(format!("{}  ", indent)).style(Style::default().bg(bg)),
            Span::styled(format!("{}{}", bracket.kind.close_bracket(), separator), symbol),
        ]),
    }
}

fn key_spans(key: &Option<String>, parent_kind: ParentKind, bg: Color) -> Vec<Span<'static>> {
    match (key, parent_kind) {
        (Some(key), ParentKind::Object) => vec![
            Span::styled(format!("\"{}\"", key), Style::default().fg(Color::Cyan).bg(bg)),
            Span::styled(": ", Style::default().fg(Color::DarkGray).bg(bg)),
        ],
        _ => Vec::new(),
    }
}

fn value_color(value: &Value) -> Color {
    match value {
        Value::String(_) => Color::Yellow,
        Value::Number(_) => Color::Cyan,
        Value::Bool(_) => Color::Green,
        Value::Null => Color::DarkGray,
        // containers never appear as primitive values
        Value::Array(_) | Value::Object(_) => Color::DarkGray,
    }
}

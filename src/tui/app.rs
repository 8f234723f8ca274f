use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::path::{Path, PathBuf};

use crate::commands::Document;
use crate::tree::{TreeController, TreeNode, TreeState};

use super::views;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Tree,
    Raw,
}

#[derive(Debug)]
pub enum Message {
    Quit,
    NavigateUp,
    NavigateDown,
    SwitchTab,
    ToggleNode,
    Noop,
}

pub struct App {
    pub should_quit: bool,
    pub file: PathBuf,
    pub raw: String,
    pub controller: TreeController,
    pub tab: Tab,
    /// Index of the selected row; rendering starts at it, so it doubles as
    /// the scroll offset.
    pub selected: usize,
}

impl App {
    pub fn new(path: &Path, initial_state: TreeState) -> anyhow::Result<Self> {
        let document = Document::read(path)?;
        let mut controller = TreeController::new();
        controller.load_text(&document.raw, initial_state);

        Ok(Self {
            should_quit: false,
            file: document.path,
            raw: document.raw,
            controller,
            tab: Tab::Tree,
            selected: 0,
        })
    }

    pub fn handle_event(&self, event: Event) -> Message {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => Message::Noop,
        }
    }

    fn handle_key(&self, key: crossterm::event::KeyEvent) -> Message {
        if key.code == KeyCode::Char('q') {
            return Message::Quit;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Message::Quit;
        }

        match key.code {
            KeyCode::Tab => Message::SwitchTab,
            KeyCode::Up | KeyCode::Char('k') => Message::NavigateUp,
            KeyCode::Down | KeyCode::Char('j') => Message::NavigateDown,
            KeyCode::Enter => Message::ToggleNode,
            _ => Message::Noop,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Quit => self.should_quit = true,
            Message::NavigateUp => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            Message::NavigateDown => {
                let max = match self.tab {
                    Tab::Tree => self.controller.list().map_or(0, |list| list.len()),
                    Tab::Raw => self.raw.lines().count(),
                };
                if self.selected + 1 < max {
                    self.selected += 1;
                }
            }
            Message::SwitchTab => {
                self.selected = 0;
                self.tab = match self.tab {
                    Tab::Tree => Tab::Raw,
                    Tab::Raw => Tab::Tree,
                };
            }
            Message::ToggleNode => self.toggle_selected(),
            Message::Noop => {}
        }
    }

    /// Only container rows have a toggle affordance; activating any other
    /// row does nothing, so the controller never sees an invalid id.
    fn toggle_selected(&mut self) {
        if self.tab != Tab::Tree {
            return;
        }
        let id = match self.controller.list().and_then(|list| list.get(self.selected)) {
            Some(TreeNode::Container(container)) => container.id,
            _ => return,
        };
        self.controller.toggle(id);
    }

    pub fn view(&self, frame: &mut Frame) {
        views::viewer::render(frame, self);
    }
}

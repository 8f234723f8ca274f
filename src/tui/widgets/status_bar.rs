use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// One-line key-binding bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, bindings: &[(&str, &str)]) {
    let spans: Vec<Span> = bindings
        .iter()
        .flat_map(|(key, description)| {
            vec![
                Span::styled(
                    format!(" {} ", key),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}  ", description), Style::default().fg(Color::White)),
            ]
        })
        .collect();

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

//! Status Bar View Component
//!
//! Renders the bottom bar: pending fetch, focus, and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use vsview_runtime::{Focus, NavigationController};

pub struct StatusBarView<'a> {
    controller: &'a NavigationController,
}

impl<'a> StatusBarView<'a> {
    pub fn new(controller: &'a NavigationController) -> Self {
        Self { controller }
    }
}

fn key_hint<'a>(key: &'a str, label: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(label),
    ]
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let focus = match self.controller.focus() {
            Focus::Columns => format!("Column {}", self.controller.current_column() + 1),
            Focus::DataPane => "Data".to_string(),
        };
        let mut status = vec![Span::raw(format!("{} ", focus)), Span::raw("| ")];
        match self.controller.pending_path() {
            Some(path) => status.push(Span::styled(
                format!("Loading {}", path),
                Style::default().fg(Color::Cyan),
            )),
            None => status.push(Span::styled("Ready", Style::default().fg(Color::Green))),
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let hints: Vec<Span> = match self.controller.focus() {
            Focus::Columns => [
                key_hint("[q]", "uit "),
                key_hint("[↑↓]", "move "),
                key_hint("[⏎]", "open "),
                key_hint("[←→]", "column "),
                key_hint("[s]", "data"),
            ]
            .into_iter()
            .flatten()
            .collect(),
            Focus::DataPane => [
                key_hint("[q]", "uit "),
                key_hint("[↑↓]", "scroll "),
                key_hint("[PgUp/PgDn]", "page "),
                key_hint("[w]", "columns"),
            ]
            .into_iter()
            .flatten()
            .collect(),
        };
        Paragraph::new(Line::from(hints)).render(chunks[1], buf);
    }
}

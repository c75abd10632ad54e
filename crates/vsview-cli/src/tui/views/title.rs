//! Title View Component

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const TITLE: &str = "VStorage Viewer";

pub struct TitleView<'a> {
    root: &'a str,
}

impl<'a> TitleView<'a> {
    pub fn new(root: &'a str) -> Self {
        Self { root }
    }
}

impl<'a> Widget for TitleView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.root, Style::default().fg(Color::DarkGray)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

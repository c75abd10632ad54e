//! Data Pane View Component
//!
//! Shows the decoded value of the last leaf, headed by a colored status
//! line. Decode failures show the cleaned payload under the error detail.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use vsview_types::DecodedValue;

use super::{border_style, value_status_to_color};

pub struct DataPaneView<'a> {
    value: Option<&'a DecodedValue>,
    focused: bool,
    scroll: u16,
}

impl<'a> DataPaneView<'a> {
    pub fn new(value: Option<&'a DecodedValue>, focused: bool, scroll: u16) -> Self {
        Self {
            value,
            focused,
            scroll,
        }
    }

    fn title(&self) -> String {
        match self.value {
            Some(value) => format!("Data: {}", value.path),
            None => "Data".to_string(),
        }
    }
}

impl<'a> Widget for DataPaneView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.focused))
            .title(self.title());

        let text = match self.value {
            None => Text::from(Line::styled(
                "Select a leaf to view its value",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Some(value) => {
                let color = value_status_to_color(value.status);
                let mut header = vec![Span::styled(
                    format!("[{}]", value.status.tag()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )];
                if let Some(detail) = &value.detail {
                    header.push(Span::raw(" "));
                    header.push(Span::styled(detail.as_str(), Style::default().fg(color)));
                }

                let mut lines = vec![Line::from(header)];
                lines.extend(value.text.lines().map(Line::raw));
                Text::from(lines)
            }
        };

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

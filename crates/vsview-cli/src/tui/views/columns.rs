//! Column View Component
//!
//! Renders one Miller column. The cursor row is drawn with the list
//! highlight; the committed selection (the label whose children fill the
//! next column) keeps a bold style after the cursor moves away.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};
use vsview_runtime::Column;

use super::border_style;

const HIGHLIGHT_SYMBOL: &str = ">> ";

pub struct ColumnView<'a> {
    column: &'a Column,
    title: &'a str,
    focused: bool,
}

impl<'a> ColumnView<'a> {
    pub fn new(column: &'a Column, title: &'a str, focused: bool) -> Self {
        Self {
            column,
            title,
            focused,
        }
    }
}

impl<'a> Widget for ColumnView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self.column.selected();

        let items: Vec<ListItem> = self
            .column
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if Some(i) == selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::styled(label.as_str(), style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.focused))
            .title(self.title);

        let highlight = if self.focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        let list = List::new(items)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(highlight);

        let mut state = ListState::default();
        if !self.column.is_empty() {
            state.select(Some(self.column.cursor()));
        }

        StatefulWidget::render(list, area, buf, &mut state);
    }
}

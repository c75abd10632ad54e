//! Browser View Components
//!
//! Ratatui Widget wrappers for each pane of the browser. Views borrow
//! runtime state and only map it onto widgets; all navigation decisions
//! live in `NavigationController`.

pub mod columns;
pub mod data_pane;
pub mod status_bar;
pub mod title;

pub use columns::ColumnView;
pub use data_pane::DataPaneView;
pub use status_bar::StatusBarView;
pub use title::TitleView;

use ratatui::style::{Color, Modifier, Style};
use vsview_types::ValueStatus;

/// Convert ValueStatus to Ratatui Color
pub(crate) fn value_status_to_color(status: ValueStatus) -> Color {
    match status {
        ValueStatus::Ok => Color::Green,
        ValueStatus::FetchError => Color::Red,
        ValueStatus::DecodeError => Color::Yellow,
    }
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

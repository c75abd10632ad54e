use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};
use vsview_runtime::{Focus, NavigationController};

use super::views::{ColumnView, DataPaneView, StatusBarView, TitleView};

/// Layout: [Title | Columns | Data | Status Bar]
pub fn draw(f: &mut Frame, controller: &NavigationController, scroll: u16) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Length(3),
    ])
    .split(f.area());

    let model = controller.columns();
    f.render_widget(TitleView::new(model.root().as_str()), chunks[0]);

    let count = model.len() as u32;
    let column_areas =
        Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(chunks[1]);

    let columns_focused = controller.focus() == Focus::Columns;
    for (level, (column, area)) in model.columns().iter().zip(column_areas.iter()).enumerate() {
        // Column 0 lists the root; every other column lists the children of
        // the selection to its left.
        let title = if level == 0 {
            model.root().label()
        } else {
            model.columns()[level - 1].selected_label().unwrap_or("")
        };
        let focused = columns_focused && level == controller.current_column();
        f.render_widget(ColumnView::new(column, title, focused), *area);
    }

    f.render_widget(
        DataPaneView::new(controller.data(), !columns_focused, scroll),
        chunks[2],
    );
    f.render_widget(StatusBarView::new(controller), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use vsview_runtime::{Command, Effect};
    use vsview_testing::fixtures::SMALLCAPS_RECORD;
    use vsview_testing::ScriptedTreeClient;
    use vsview_types::StoragePath;

    fn render(controller: &NavigationController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, controller, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_title_and_root_labels() {
        let client = ScriptedTreeClient::new().with_children("published", &["wallet", "agoricNames"]);
        let mut controller = NavigationController::new(StoragePath::default(), 3);
        let request = controller.start();
        controller.complete(request.run(&client));

        let screen = render(&controller);
        assert!(screen.contains("VStorage Viewer"));
        assert!(screen.contains("wallet"));
        assert!(screen.contains("agoricNames"));
        assert!(screen.contains("Data"));
        assert!(screen.contains("Ready"));
    }

    #[test]
    fn test_draws_leaf_value_with_status_tag() {
        let client = ScriptedTreeClient::new()
            .with_children("published", &["a"])
            .with_leaf("published.a", SMALLCAPS_RECORD);
        let mut controller = NavigationController::new(StoragePath::default(), 3);
        let request = controller.start();
        controller.complete(request.run(&client));
        let Effect::Fetch(request) = controller.handle(Command::Activate) else {
            panic!("activate should fetch");
        };
        controller.complete(request.run(&client));

        let screen = render(&controller);
        assert!(screen.contains("Data: published.a"));
        assert!(screen.contains("[ok]"));
    }
}

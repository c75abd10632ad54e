//! Navigation state machine.
//!
//! The controller owns the [`BrowserState`] and is its only writer. Input
//! arrives as [`Command`]s, network work leaves as [`FetchRequest`]s and
//! comes back as [`FetchResponse`]s. Only the response to the most recently
//! issued request is applied; anything older is dropped.

use crate::column::{Column, ColumnModel};
use crate::fetch::{FetchRequest, FetchResponse, FetchTarget, RequestId, Resolution};
use vsview_types::{DecodedValue, StoragePath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Columns have focus; the column index is active.
    Browsing(usize),
    /// A leaf selected in this column is on display; the column keeps focus.
    LeafDisplay(usize),
    /// The user moved focus to the data pane.
    DataFocus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Columns,
    DataPane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CursorUp,
    CursorDown,
    /// Select the highlighted entry of the active column.
    Activate,
    MoveLeft,
    MoveRight,
    FocusData,
    FocusColumns,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    pub columns: ColumnModel,
    /// Always within `0..columns.len()`.
    pub current_column: usize,
    pub mode: NavState,
}

impl BrowserState {
    pub fn focus(&self) -> Focus {
        match self.mode {
            NavState::DataFocus => Focus::DataPane,
            NavState::Browsing(_) | NavState::LeafDisplay(_) => Focus::Columns,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    id: RequestId,
    path: StoragePath,
}

#[derive(Debug)]
pub struct NavigationController {
    state: BrowserState,
    data: Option<DecodedValue>,
    pending: Option<PendingFetch>,
    last_request: u64,
}

impl NavigationController {
    pub fn new(root: StoragePath, column_count: usize) -> Self {
        Self {
            state: BrowserState {
                columns: ColumnModel::new(root, column_count),
                current_column: 0,
                mode: NavState::Browsing(0),
            },
            data: None,
            pending: None,
            last_request: 0,
        }
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.state.columns
    }

    pub fn current_column(&self) -> usize {
        self.state.current_column
    }

    pub fn mode(&self) -> NavState {
        self.state.mode
    }

    pub fn focus(&self) -> Focus {
        self.state.focus()
    }

    pub fn data(&self) -> Option<&DecodedValue> {
        self.data.as_ref()
    }

    /// Path of the outstanding fetch, if any.
    pub fn pending_path(&self) -> Option<&StoragePath> {
        self.pending.as_ref().map(|p| &p.path)
    }

    /// Request for the root listing that fills column 0.
    pub fn start(&mut self) -> FetchRequest {
        let root = self.state.columns.root().clone();
        self.issue(
            root,
            FetchTarget {
                level: 0,
                origin: None,
            },
        )
    }

    /// Select `label` in column `level`.
    ///
    /// Commits the selection, clears the now stale columns to the right and
    /// returns the request that resolves the selected node. `None` if the
    /// label is not in that column or the column is not reachable.
    pub fn select(&mut self, level: usize, label: &str) -> Option<FetchRequest> {
        let path = self.state.columns.select(level, label)?;
        self.state.current_column = level;
        self.state.mode = NavState::Browsing(level);

        Some(self.issue(
            path,
            FetchTarget {
                level: level + 1,
                origin: Some(level),
            },
        ))
    }

    pub fn handle(&mut self, command: Command) -> Effect {
        match command {
            Command::Exit => return Effect::Exit,
            Command::CursorUp => self.with_active_column(|c| c.cursor_up()),
            Command::CursorDown => self.with_active_column(|c| c.cursor_down()),
            Command::Activate => return self.activate(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::FocusData => {
                if self.focus() == Focus::Columns {
                    self.state.mode = NavState::DataFocus;
                }
            }
            Command::FocusColumns => {
                if self.state.mode == NavState::DataFocus {
                    self.state.mode = NavState::Browsing(self.state.current_column);
                }
            }
        }
        Effect::None
    }

    /// Apply a fetch result. Returns false when the response was stale and
    /// dropped.
    pub fn complete(&mut self, response: FetchResponse) -> bool {
        match &self.pending {
            Some(pending) if pending.id == response.id => {}
            _ => {
                tracing::debug!(
                    id = response.id.0,
                    path = %response.path,
                    "dropping superseded fetch result"
                );
                return false;
            }
        }
        self.pending = None;

        let FetchTarget { level, origin } = response.target;
        match response.resolution {
            Resolution::Children(labels) if level < self.state.columns.len() => {
                tracing::debug!(path = %response.path, level, count = labels.len(), "populating column");
                self.state.columns.populate(level, labels);
                self.state.current_column = level;
                self.enter(NavState::Browsing(level));
            }
            Resolution::Children(labels) => {
                self.data = Some(listing(response.path, &labels));
                self.focus_origin(origin);
            }
            Resolution::Leaf(value) => {
                self.state.columns.clear_from(level);
                self.data = Some(value);
                self.focus_origin(origin);
            }
        }
        true
    }

    fn issue(&mut self, path: StoragePath, target: FetchTarget) -> FetchRequest {
        self.last_request += 1;
        let id = RequestId(self.last_request);
        if let Some(previous) = self.pending.take() {
            tracing::debug!(id = previous.id.0, path = %previous.path, "superseded");
        }
        self.pending = Some(PendingFetch {
            id,
            path: path.clone(),
        });
        FetchRequest { id, path, target }
    }

    /// Switch to `mode` unless the data pane holds focus. `current_column`
    /// is already updated, so `w` lands on the right column later.
    fn enter(&mut self, mode: NavState) {
        if self.state.mode != NavState::DataFocus {
            self.state.mode = mode;
        }
    }

    fn activate(&mut self) -> Effect {
        if self.focus() != Focus::Columns {
            return Effect::None;
        }
        let level = self.state.current_column;
        let root_missing = self.state.columns.column(0).is_some_and(|c| !c.is_populated());
        if level == 0 && root_missing && self.pending.is_none() {
            tracing::info!(root = %self.state.columns.root(), "retrying root listing");
            return Effect::Fetch(self.start());
        }
        let Some(label) = self
            .state
            .columns
            .column(level)
            .and_then(|c| c.cursor_label())
            .map(str::to_string)
        else {
            return Effect::None;
        };

        match self.select(level, &label) {
            Some(request) => Effect::Fetch(request),
            None => Effect::None,
        }
    }

    fn move_left(&mut self) {
        if self.focus() != Focus::Columns || self.state.current_column == 0 {
            return;
        }
        self.state.current_column -= 1;
        self.state.mode = NavState::Browsing(self.state.current_column);
    }

    fn move_right(&mut self) {
        if self.focus() != Focus::Columns {
            return;
        }
        let target = self.state.current_column + 1;
        let has_items = self
            .state
            .columns
            .column(target)
            .is_some_and(|c| !c.is_empty());
        if !has_items {
            return;
        }
        self.state.current_column = target;
        self.state.mode = NavState::Browsing(target);
    }

    fn with_active_column(&mut self, f: impl FnOnce(&mut Column)) {
        if self.focus() != Focus::Columns {
            return;
        }
        if let Some(column) = self.state.columns.column_mut(self.state.current_column) {
            f(column);
        }
    }

    /// Leaves keep focus on the column that was acted on.
    fn focus_origin(&mut self, origin: Option<usize>) {
        match origin {
            Some(level) => {
                self.state.current_column = level;
                self.enter(NavState::LeafDisplay(level));
            }
            None => {
                self.state.current_column = 0;
                self.enter(NavState::Browsing(0));
            }
        }
    }
}

/// Children of a node selected in the deepest column, shown as a JSON
/// array since no column is left to hold them.
fn listing(path: StoragePath, labels: &[String]) -> DecodedValue {
    let text = serde_json::to_string_pretty(labels).unwrap_or_else(|_| labels.join("\n"));
    DecodedValue::ok(path, text)
}

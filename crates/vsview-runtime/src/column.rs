//! Structural bookkeeping for the visible columns.
//!
//! Column `i` lists the children of the node selected in column `i - 1`
//! (column 0 lists the children of the root). Nothing here does I/O.

use vsview_types::StoragePath;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    labels: Vec<String>,
    /// Committed selection; drives path composition.
    selected: Option<usize>,
    /// Highlighted row, moved by the cursor keys.
    cursor: usize,
    populated: bool,
}

impl Column {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_label(&self) -> Option<&str> {
        self.labels.get(self.cursor).map(String::as_str)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.labels.len() {
            self.cursor += 1;
        }
    }

    fn clear(&mut self) {
        *self = Column::default();
    }

    fn fill(&mut self, labels: Vec<String>) {
        self.labels = labels;
        self.selected = None;
        self.cursor = 0;
        self.populated = true;
    }
}

/// The K columns plus the root they hang from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnModel {
    root: StoragePath,
    columns: Vec<Column>,
}

impl ColumnModel {
    /// `count` is clamped to at least one column.
    pub fn new(root: StoragePath, count: usize) -> Self {
        Self {
            root,
            columns: vec![Column::default(); count.max(1)],
        }
    }

    pub fn root(&self) -> &StoragePath {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, level: usize) -> Option<&Column> {
        self.columns.get(level)
    }

    pub fn column_mut(&mut self, level: usize) -> Option<&mut Column> {
        self.columns.get_mut(level)
    }

    /// Empty every column at `level` and to its right.
    pub fn clear_from(&mut self, level: usize) {
        for column in self.columns.iter_mut().skip(level) {
            column.clear();
        }
    }

    /// Replace column `level` with `labels`, invalidating everything from
    /// `level` rightwards first. Returns false if `level` is out of range.
    pub fn populate(&mut self, level: usize, labels: Vec<String>) -> bool {
        if level >= self.columns.len() {
            return false;
        }
        self.clear_from(level);
        self.columns[level].fill(labels);
        true
    }

    /// Path of the node whose children belong in column `level`.
    ///
    /// `None` when a column before `level` has no selection. `level` may be
    /// one past the last column: that is the path of a node selected in
    /// the deepest column.
    pub fn path_at(&self, level: usize) -> Option<StoragePath> {
        if level > self.columns.len() {
            return None;
        }
        let mut path = self.root.clone();
        for column in &self.columns[..level] {
            path = path.child(column.selected_label()?);
        }
        Some(path)
    }

    /// Commit `label` as the selection of column `level`.
    ///
    /// Columns to the right become stale and are cleared. Returns the
    /// selected node's path.
    pub fn select(&mut self, level: usize, label: &str) -> Option<StoragePath> {
        let parent = self.path_at(level)?;
        let column = self.columns.get_mut(level)?;
        let index = column.labels.iter().position(|l| l == label)?;

        column.selected = Some(index);
        column.cursor = index;
        self.clear_from(level + 1);

        Some(parent.child(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn model() -> ColumnModel {
        ColumnModel::new(StoragePath::default(), 4)
    }

    #[test]
    fn test_populate_fills_level_without_selection() {
        let mut model = model();
        assert!(model.populate(0, labels(&["a", "b"])));

        let column = model.column(0).unwrap();
        assert_eq!(column.labels(), &["a".to_string(), "b".to_string()]);
        assert!(column.is_populated());
        assert_eq!(column.selected(), None);
        assert_eq!(column.cursor(), 0);
    }

    #[test]
    fn test_populate_out_of_range_is_rejected() {
        let mut model = model();
        assert!(!model.populate(4, labels(&["x"])));
    }

    #[test]
    fn test_populate_clears_columns_to_the_right() {
        let mut model = model();
        model.populate(0, labels(&["a"]));
        model.select(0, "a");
        model.populate(1, labels(&["b"]));
        model.select(1, "b");
        model.populate(2, labels(&["c"]));

        model.populate(1, labels(&["d", "e"]));

        assert_eq!(model.column(1).unwrap().labels().len(), 2);
        for level in 2..model.len() {
            let column = model.column(level).unwrap();
            assert!(column.is_empty());
            assert_eq!(column.selected(), None);
            assert!(!column.is_populated());
        }
    }

    #[test]
    fn test_path_at_joins_selected_labels() {
        let mut model = model();
        assert_eq!(model.path_at(0).unwrap().as_str(), "published");

        model.populate(0, labels(&["agoricNames", "wallet"]));
        assert_eq!(model.path_at(1), None);

        let selected = model.select(0, "agoricNames").unwrap();
        assert_eq!(selected.as_str(), "published.agoricNames");
        model.populate(1, labels(&["brand", "instance"]));
        model.select(1, "instance");

        assert_eq!(
            model.path_at(2).unwrap().as_str(),
            "published.agoricNames.instance"
        );
    }

    #[test]
    fn test_reselect_clears_deeper_columns() {
        let mut model = model();
        model.populate(0, labels(&["a", "b"]));
        model.select(0, "a");
        model.populate(1, labels(&["x"]));
        model.select(1, "x");

        model.select(0, "b");

        assert_eq!(model.column(0).unwrap().selected_label(), Some("b"));
        assert!(model.column(1).unwrap().is_empty());
        assert_eq!(model.path_at(2), None);
    }

    #[test]
    fn test_select_unknown_label_changes_nothing() {
        let mut model = model();
        model.populate(0, labels(&["a"]));
        let before = model.clone();

        assert_eq!(model.select(0, "zzz"), None);
        assert_eq!(model, before);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut model = model();
        model.populate(0, labels(&["a", "b"]));
        let column = model.column_mut(0).unwrap();

        column.cursor_up();
        assert_eq!(column.cursor(), 0);
        column.cursor_down();
        column.cursor_down();
        assert_eq!(column.cursor(), 1);
        assert_eq!(column.cursor_label(), Some("b"));
    }
}

//! Scripted tree client.
//!
//! Every path answers from a table filled by the test. Paths without an
//! entry fail like an unreachable server would, so a test that forgets to
//! script a path sees the error branch instead of a silent leaf.

use std::collections::HashMap;
use std::sync::Mutex;
use vsview_client::TreeClient;
use vsview_types::{Error, Result, StoragePath};

const SCRIPTED_BASE: &str = "scripted://vstorage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Children(String),
    Leaf(String),
}

#[derive(Debug, Default)]
pub struct ScriptedTreeClient {
    children: HashMap<String, Result<Vec<String>>>,
    leaves: HashMap<String, Result<String>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTreeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(mut self, path: &str, labels: &[&str]) -> Self {
        self.children.insert(
            path.to_string(),
            Ok(labels.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    /// A node that lists no children and serves `raw` from `/data`.
    pub fn with_leaf(mut self, path: &str, raw: &str) -> Self {
        self.children.insert(path.to_string(), Ok(Vec::new()));
        self.leaves.insert(path.to_string(), Ok(raw.to_string()));
        self
    }

    pub fn with_children_error(mut self, path: &str, reason: &str) -> Self {
        self.children
            .insert(path.to_string(), Err(transport_error("children", path, reason)));
        self
    }

    pub fn with_leaf_error(mut self, path: &str, reason: &str) -> Self {
        self.leaves
            .insert(path.to_string(), Err(transport_error("data", path, reason)));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn leaf_calls(&self, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Leaf(p) if p == path))
            .count()
    }

    pub fn children_calls(&self, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Children(p) if p == path))
            .count()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl TreeClient for ScriptedTreeClient {
    fn fetch_children(&self, path: &StoragePath) -> Result<Vec<String>> {
        self.record(Call::Children(path.to_string()));
        self.children
            .get(path.as_str())
            .cloned()
            .unwrap_or_else(|| Err(transport_error("children", path.as_str(), "no route")))
    }

    fn fetch_leaf(&self, path: &StoragePath) -> Result<String> {
        self.record(Call::Leaf(path.to_string()));
        self.leaves
            .get(path.as_str())
            .cloned()
            .unwrap_or_else(|| Err(transport_error("data", path.as_str(), "no route")))
    }
}

fn transport_error(endpoint: &str, path: &str, reason: &str) -> Error {
    Error::fetch(format!("{}/{}/{}", SCRIPTED_BASE, endpoint, path), reason)
}

//! Dot-separated addresses into the vstorage tree.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SEPARATOR: char = '.';

/// Root of the published subtree on Agoric chains.
pub const DEFAULT_ROOT_PATH: &str = "published";

/// A non-empty, dot-separated path such as `published.agoricNames.brand`.
///
/// Every segment is non-empty, so the path never starts or ends with a
/// separator and never contains two in a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(Error::InvalidPath("path is empty".to_string()));
        }
        if path.split(SEPARATOR).any(str::is_empty) {
            return Err(Error::InvalidPath(format!(
                "'{}' contains an empty segment",
                path
            )));
        }
        Ok(Self(path))
    }

    /// Path of the child `label` under this node.
    ///
    /// Labels come from a children listing and are checked with
    /// [`is_valid_segment`] before they reach a column.
    pub fn child(&self, label: &str) -> Self {
        debug_assert!(is_valid_segment(label), "invalid segment {:?}", label);
        Self(format!("{}{}{}", self.0, SEPARATOR, label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment, e.g. `brand` for `published.agoricNames.brand`.
    pub fn label(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or(&self.0)
    }
}

impl Default for StoragePath {
    fn default() -> Self {
        Self(DEFAULT_ROOT_PATH.to_string())
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoragePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StoragePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl std::str::FromStr for StoragePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<StoragePath> for String {
    fn from(path: StoragePath) -> Self {
        path.0
    }
}

/// A single child label can be appended to a path without breaking the
/// no-empty-segment rule.
pub fn is_valid_segment(label: &str) -> bool {
    !label.is_empty() && !label.contains(SEPARATOR)
}

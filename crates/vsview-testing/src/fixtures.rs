//! Payloads in the shape vstorage serves them, and config file helpers.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Marshalled record `{"x":1}` as a smallcaps string.
pub const SMALLCAPS_RECORD: &str = r##""#{\"x\":1}""##;

/// Same record with the outer string escaped once more.
pub const ESCAPED_RECORD: &str = r##"\"#{\"y\":2}\""##;

/// Stream cell holding one marshalled value.
pub const STREAM_CELL: &str = r##"{"value":"{\"blockHeight\":\"9\",\"values\":[\"{\\\"body\\\":\\\"#{\\\\\\\"n\\\\\\\":1}\\\",\\\"slots\\\":[]}\"]}"}"##;

/// A body the decoder cannot turn into JSON.
pub const NOT_JSON: &str = "upstream timed out";

/// Temporary directory holding a `config.toml`.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn with_contents(contents: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("config.toml"), contents)?;
        Ok(Self { dir })
    }

    pub fn empty() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }
}

//! Assertions over the scripted client's call log.

use crate::client::{Call, ScriptedTreeClient};
use anyhow::Result;

/// `path` was resolved as a leaf: one children probe, then exactly one
/// data fetch.
pub fn assert_leaf_fallback(client: &ScriptedTreeClient, path: &str) -> Result<()> {
    let children = client.children_calls(path);
    let leaves = client.leaf_calls(path);

    if children != 1 {
        anyhow::bail!("Expected one children fetch for {}, got {}", path, children);
    }
    if leaves != 1 {
        anyhow::bail!("Expected one leaf fetch for {}, got {}", path, leaves);
    }

    Ok(())
}

/// No data fetch was made for `path`.
pub fn assert_no_leaf_fetch(client: &ScriptedTreeClient, path: &str) -> Result<()> {
    let leaves = client.leaf_calls(path);
    if leaves != 0 {
        anyhow::bail!("Expected no leaf fetch for {}, got {}", path, leaves);
    }
    Ok(())
}

/// The call log matches `expected` in order.
pub fn assert_calls(client: &ScriptedTreeClient, expected: &[Call]) -> Result<()> {
    let calls = client.calls();
    if calls != expected {
        anyhow::bail!("Expected calls {:?}, got {:?}", expected, calls);
    }
    Ok(())
}

//! Fetch requests and their resolution against a [`TreeClient`].
//!
//! A request resolves a node in at most two calls: a children probe, and a
//! data fetch only when the probe comes back empty or fails.

use vsview_client::{decode_leaf, TreeClient};
use vsview_types::{DecodedValue, StoragePath};

/// Monotonically increasing per controller; the latest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Where the result of a fetch lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTarget {
    /// Column that receives the children.
    pub level: usize,
    /// Column the user acted on; `None` for the initial root load.
    pub origin: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub path: StoragePath,
    pub target: FetchTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The node has children, in server order.
    Children(Vec<String>),
    /// The node is a leaf, or the children probe failed.
    Leaf(DecodedValue),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub id: RequestId,
    pub path: StoragePath,
    pub target: FetchTarget,
    pub resolution: Resolution,
}

impl FetchRequest {
    /// Run the request to completion on the calling thread.
    pub fn run<C: TreeClient + ?Sized>(self, client: &C) -> FetchResponse {
        let resolution = resolve(client, &self.path);
        FetchResponse {
            id: self.id,
            path: self.path,
            target: self.target,
            resolution,
        }
    }
}

pub fn resolve<C: TreeClient + ?Sized>(client: &C, path: &StoragePath) -> Resolution {
    match client.fetch_children(path) {
        Ok(children) if !children.is_empty() => return Resolution::Children(children),
        Ok(_) => {}
        Err(err) => {
            tracing::debug!(path = %path, error = %err, "children probe failed, trying data");
        }
    }

    let value = match client.fetch_leaf(path) {
        Ok(raw) => decode_leaf(path.clone(), &raw),
        Err(err) => {
            tracing::warn!(path = %path, error = %err, "leaf fetch failed");
            DecodedValue::fetch_error(path.clone(), &err)
        }
    };
    Resolution::Leaf(value)
}

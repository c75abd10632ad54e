//! Read-only access to a vstorage tree.
//!
//! - [`TreeClient`]: the two remote operations the browser needs
//! - [`HttpTreeClient`]: the REST implementation (`/children/..`, `/data/..`)
//! - [`decoder`]: turns double-encoded leaf payloads into pretty JSON

pub mod client;
pub mod decoder;
pub mod http;

pub use client::{parse_children, ChildrenResponse, TreeClient};
pub use decoder::{clean, cleanup_pass, decode, decode_leaf, DecodeFailure};
pub use http::{HttpTreeClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

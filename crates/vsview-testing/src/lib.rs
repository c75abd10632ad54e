//! Testing infrastructure for vsview.
//!
//! - `ScriptedTreeClient`: in-memory tree with canned answers and a call log
//! - `fixtures`: leaf payloads as the chain serves them, config files
//! - `assertions`: checks over the recorded call log
//! - `server`: loopback HTTP server with canned responses

pub mod assertions;
pub mod client;
pub mod fixtures;
pub mod server;

pub use client::{Call, ScriptedTreeClient};
pub use server::{CannedResponse, StubServer};

pub mod column;
pub mod config;
pub mod error;
pub mod fetch;
pub mod navigation;
pub mod worker;

pub use column::{Column, ColumnModel};
pub use config::{Config, ConfigOverrides, DEFAULT_COLUMN_COUNT};
pub use error::{Error, Result};
pub use fetch::{FetchRequest, FetchResponse, FetchTarget, RequestId, Resolution};
pub use navigation::{BrowserState, Command, Effect, Focus, NavState, NavigationController};
pub use worker::FetchWorker;

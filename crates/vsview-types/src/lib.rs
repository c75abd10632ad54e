pub mod error;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use path::{StoragePath, is_valid_segment, DEFAULT_ROOT_PATH, SEPARATOR};
pub use value::{DecodedValue, ValueStatus};

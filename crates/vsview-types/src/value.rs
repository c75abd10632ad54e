use crate::{Error, StoragePath};

/// Outcome tag shown in front of the data pane text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStatus {
    Ok,
    FetchError,
    DecodeError,
}

impl ValueStatus {
    pub fn tag(self) -> &'static str {
        match self {
            ValueStatus::Ok => "ok",
            ValueStatus::FetchError => "fetch error",
            ValueStatus::DecodeError => "decode error",
        }
    }
}

/// Content of the data pane for one leaf.
///
/// Replaced as a whole on every leaf fetch; nothing updates it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedValue {
    pub path: StoragePath,
    pub status: ValueStatus,
    /// Pretty JSON on success, the cleaned payload on decode failure, the
    /// error message on fetch failure.
    pub text: String,
    /// Error detail for decode failures, where `text` holds the payload.
    pub detail: Option<String>,
}

impl DecodedValue {
    pub fn ok(path: StoragePath, pretty: String) -> Self {
        Self {
            path,
            status: ValueStatus::Ok,
            text: pretty,
            detail: None,
        }
    }

    pub fn fetch_error(path: StoragePath, error: &Error) -> Self {
        Self {
            path,
            status: ValueStatus::FetchError,
            text: error.to_string(),
            detail: None,
        }
    }

    pub fn decode_error(path: StoragePath, cleaned: String, error: &Error) -> Self {
        Self {
            path,
            status: ValueStatus::DecodeError,
            text: cleaned,
            detail: Some(error.to_string()),
        }
    }
}

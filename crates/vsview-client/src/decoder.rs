//! Leaf payload decoding.
//!
//! vstorage stores a JSON document as a JSON string inside another JSON
//! document, and marshalled values add `#{` / `#[` sentinels in front of
//! structured strings. The cleanup below strips one layer of that escaping
//! per pass so the result parses as ordinary JSON.

use vsview_types::{DecodedValue, Error, StoragePath};

/// Substitutions in priority order. At each position the first matching
/// pattern wins.
const CLEANUP_RULES: [(&str, &str); 7] = [
    (r"\\", ""),
    (r##""#{"##, "{"),
    (r#""{"#, "{"),
    (r##""#["##, "["),
    (r#"}""#, "}"),
    (r#"]""#, "]"),
    (r#"\""#, "\""),
];

/// Number of cleanup passes; the store nests encodings one level deep.
const CLEANUP_PASSES: usize = 2;

/// Failed decode, carrying the cleaned text so it can still be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub cleaned: String,
    pub error: Error,
}

/// One left-to-right scan applying [`CLEANUP_RULES`].
pub fn cleanup_pass(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    'scan: while !rest.is_empty() {
        for (pattern, replacement) in CLEANUP_RULES {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }

    out
}

/// Full cleanup of a raw leaf body.
pub fn clean(raw: &str) -> String {
    (0..CLEANUP_PASSES).fold(raw.to_string(), |text, _| cleanup_pass(&text))
}

/// Clean `raw` and re-indent it as JSON with two spaces.
pub fn decode(raw: &str) -> Result<String, DecodeFailure> {
    let cleaned = clean(raw);

    let value: serde_json::Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            return Err(DecodeFailure {
                error: Error::DecodeFailed(format!("leaf is not valid JSON: {}", e)),
                cleaned,
            });
        }
    };

    serde_json::to_string_pretty(&value).map_err(|e| DecodeFailure {
        error: Error::DecodeFailed(e.to_string()),
        cleaned,
    })
}

/// Decode the leaf at `path` into what the data pane shows.
pub fn decode_leaf(path: StoragePath, raw: &str) -> DecodedValue {
    match decode(raw) {
        Ok(pretty) => DecodedValue::ok(path, pretty),
        Err(failure) => {
            tracing::debug!(path = %path, error = %failure.error, "leaf did not decode as JSON");
            DecodedValue::decode_error(path, failure.cleaned, &failure.error)
        }
    }
}

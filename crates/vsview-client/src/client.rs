use serde::Deserialize;
use vsview_types::{is_valid_segment, Error, Result, StoragePath};

/// Read-only view of a remote vstorage tree.
///
/// Implementations are called from the fetch worker thread, hence
/// `Send + Sync`. Each call is a single attempt; retrying is the user's
/// decision.
pub trait TreeClient: Send + Sync {
    /// Child labels of `path` in server order.
    ///
    /// An empty list is not an error: it is how a leaf answers.
    fn fetch_children(&self, path: &StoragePath) -> Result<Vec<String>>;

    /// Raw leaf payload of `path`, undecoded.
    fn fetch_leaf(&self, path: &StoragePath) -> Result<String>;
}

/// Body of `GET /children/{path}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildrenResponse {
    pub children: Vec<String>,
    /// Only the first page is used.
    #[serde(default)]
    pub pagination: Option<serde_json::Value>,
}

/// Parse a children listing, dropping labels that cannot form a path.
pub fn parse_children(body: &str) -> Result<Vec<String>> {
    let response: ChildrenResponse = serde_json::from_str(body)
        .map_err(|e| Error::DecodeFailed(format!("unexpected children response: {}", e)))?;

    let (valid, invalid): (Vec<String>, Vec<String>) = response
        .children
        .into_iter()
        .partition(|label| is_valid_segment(label));
    if !invalid.is_empty() {
        tracing::warn!(labels = ?invalid, "skipping child labels that are not path segments");
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_children_keeps_server_order() {
        let body = r#"{"children":["wallet","agoricNames","vaultFactory"],"pagination":null}"#;
        let children = parse_children(body).unwrap();
        assert_eq!(children, vec!["wallet", "agoricNames", "vaultFactory"]);
    }

    #[test]
    fn test_parse_children_empty_is_leaf_signal() {
        let children = parse_children(r#"{"children":[]}"#).unwrap();
        assert!(children.is_empty());
    }

    #[test]
    fn test_parse_children_ignores_pagination_shape() {
        let body = r#"{"children":["a"],"pagination":{"next_key":null,"total":"1"}}"#;
        assert_eq!(parse_children(body).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_parse_children_rejects_wrong_shape() {
        let err = parse_children(r#"{"code":5,"message":"not found"}"#).unwrap_err();
        assert!(matches!(err, Error::DecodeFailed(_)));

        let err = parse_children("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, Error::DecodeFailed(_)));
    }

    #[test]
    fn test_parse_children_drops_unusable_labels() {
        let children = parse_children(r#"{"children":["ok","","a.b"]}"#).unwrap();
        assert_eq!(children, vec!["ok"]);
    }
}

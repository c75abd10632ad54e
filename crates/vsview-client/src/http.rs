use crate::client::{parse_children, TreeClient};
use reqwest::blocking::Client;
use std::time::Duration;
use vsview_types::{Error, Result, StoragePath};

pub const DEFAULT_BASE_URL: &str = "https://main.api.agoric.net:443/agoric/vstorage";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// [`TreeClient`] over the vstorage REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpTreeClient {
    http: Client,
    base_url: String,
}

impl HttpTreeClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vsview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::fetch(&base_url, e))?;

        Ok(Self { http, base_url })
    }

    pub fn children_url(&self, path: &StoragePath) -> String {
        format!("{}/children/{}", self.base_url, path)
    }

    pub fn data_url(&self, path: &StoragePath) -> String {
        format!("{}/data/{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| Error::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(url, format!("HTTP {}", status)));
        }

        response.text().map_err(|e| Error::fetch(url, e))
    }
}

impl TreeClient for HttpTreeClient {
    fn fetch_children(&self, path: &StoragePath) -> Result<Vec<String>> {
        let body = self.get(&self.children_url(path))?;
        parse_children(&body)
    }

    fn fetch_leaf(&self, path: &StoragePath) -> Result<String> {
        self.get(&self.data_url(path))
    }
}

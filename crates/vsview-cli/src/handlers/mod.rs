pub mod browse;
pub mod children;
pub mod config;
pub mod get;

use anyhow::Result;
use std::sync::Arc;
use vsview_client::HttpTreeClient;
use vsview_runtime::Config;

pub(crate) fn http_client(config: &Config) -> Result<Arc<HttpTreeClient>> {
    let client = HttpTreeClient::new(config.base_url(), config.request_timeout())?;
    Ok(Arc::new(client))
}

use anyhow::Result;
use vsview_client::{decode, TreeClient};
use vsview_runtime::Config;
use vsview_types::StoragePath;

pub fn handle(config: &Config, path: &StoragePath) -> Result<()> {
    let client = super::http_client(config)?;
    let raw = client.fetch_leaf(path)?;

    match decode(&raw) {
        Ok(pretty) => {
            println!("{}", pretty);
            Ok(())
        }
        Err(failure) => {
            // Cleaned text still goes to stdout; the exit status reports the failure.
            println!("{}", failure.cleaned);
            Err(failure.error.into())
        }
    }
}

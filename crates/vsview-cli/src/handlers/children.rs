use anyhow::Result;
use std::io::{self, Write};
use vsview_client::TreeClient;
use vsview_runtime::Config;
use vsview_types::StoragePath;

pub fn handle(config: &Config, path: &StoragePath) -> Result<()> {
    let client = super::http_client(config)?;
    let children = client.fetch_children(path)?;
    write_labels(&mut io::stdout().lock(), &children)
}

fn write_labels(out: &mut impl Write, labels: &[String]) -> Result<()> {
    for label in labels {
        writeln!(out, "{}", label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_label_per_line() {
        let mut out = Vec::new();
        write_labels(&mut out, &["wallet".to_string(), "agoricNames".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "wallet\nagoricNames\n");
    }
}

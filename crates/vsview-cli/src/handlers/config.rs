use crate::ConfigCommand;
use anyhow::Result;
use std::path::Path;
use vsview_runtime::Config;

pub fn handle(command: ConfigCommand, config_path: &Path, config: &Config) -> Result<()> {
    match command {
        ConfigCommand::Path => println!("{}", config_path.display()),
        ConfigCommand::Show => print!("{}", config.to_toml()?),
    }
    Ok(())
}

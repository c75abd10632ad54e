use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use vsview_runtime::config::resolve_config_path;
use vsview_runtime::{Config, ConfigOverrides};

pub fn run(cli: Cli) -> Result<()> {
    if let Err(e) = logging::init(cli.log_level, cli.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?
        .with_overrides(ConfigOverrides {
            base_url: cli.base_url,
            root_path: cli.root,
            column_count: cli.columns,
            request_timeout_secs: cli.timeout,
        })?;

    tracing::info!(
        base_url = config.base_url(),
        root = %config.root_path,
        columns = config.column_count,
        "configuration loaded"
    );

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => handlers::browse::handle(&config),
        Commands::Children { path } => handlers::children::handle(&config, &path),
        Commands::Get { path } => handlers::get::handle(&config, &path),
        Commands::Config { command } => handlers::config::handle(command, &config_path, &config),
    }
}

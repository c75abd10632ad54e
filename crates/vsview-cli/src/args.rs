use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use vsview_types::StoragePath;

#[derive(Parser)]
#[command(name = "vsview")]
#[command(about = "Browse an Agoric vstorage tree in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $VSVIEW_CONFIG or <config dir>/vsview/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// vstorage REST endpoint, e.g. https://main.api.agoric.net:443/agoric/vstorage
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path listed in the first column
    #[arg(long, global = true)]
    pub root: Option<StoragePath>,

    /// Number of columns
    #[arg(long, global = true)]
    pub columns: Option<usize>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log file (default: <state dir>/vsview/vsview.log)
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the column browser (default)
    Browse,

    /// Print the child labels of a path, one per line
    Children { path: StoragePath },

    /// Print the decoded value stored at a path
    Get { path: StoragePath },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_browse() {
        let cli = Cli::try_parse_from(["vsview"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_root_is_validated_while_parsing() {
        assert!(Cli::try_parse_from(["vsview", "--root", "published..x"]).is_err());

        let cli = Cli::try_parse_from(["vsview", "get", "published.agoricNames"]).unwrap();
        match cli.command {
            Some(Commands::Get { path }) => assert_eq!(path.as_str(), "published.agoricNames"),
            _ => panic!("expected get"),
        }
    }
}

//! CLI definitions for the dashboard tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dashboard CLI.
#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Build and inspect configuration-driven dashboards")]
#[command(version)]
pub(crate) struct Cli {
    /// Directory holding `<name>.toml` dashboard configurations
    #[arg(short, long, default_value = "config/rtm", env = "DASHBOARD_CONFIG_DIR", global = true)]
    pub config_dir: String,

    /// Also write logs to daily rotated files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build a dashboard and list its widget ids
    List {
        /// Dashboard configuration name
        name: String,
    },

    /// Build a dashboard and print one widget as JSON
    Show {
        /// Dashboard configuration name
        name: String,

        /// Widget ID
        widget_id: String,
    },

    /// Check a dashboard configuration without building widgets
    Validate {
        /// Dashboard configuration name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_show() {
        let cli =
            Cli::try_parse_from(["dashboard", "-c", "/etc/rtm", "show", "sales", "clock"]).unwrap();
        assert_eq!(cli.config_dir, "/etc/rtm");
        match cli.command {
            Commands::Show { name, widget_id } => {
                assert_eq!(name, "sales");
                assert_eq!(widget_id, "clock");
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["dashboard"]).is_err());
    }

    #[test]
    fn test_cli_log_dir_is_global() {
        let cli =
            Cli::try_parse_from(["dashboard", "list", "sales", "--log-dir", "/tmp/logs"]).unwrap();
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
    }
}

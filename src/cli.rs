//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for imgseek using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal image browser (default)
//! - **search**: One-shot search printing one or more pages
//! - **config**: Read and change settings
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Repeatable `-v` for more log output
//! - Command aliases (`b` for `browse`, `s` for `search`)
//!
//! # Examples
//!
//! ```
//! use imgseek::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["imgseek", "search", "mountain", "--pages", "2"]);
//! match cli.get_command() {
//!     Commands::Search { query, pages, .. } => {
//!         assert_eq!(query, "mountain");
//!         assert_eq!(pages, 2);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::logging::Verbosity;
use clap::{ArgAction, Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "imgseek")]
#[command(about = "Search and browse photos from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive image browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Search to run on startup
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Search once and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Search text
        #[arg(value_name = "QUERY")]
        query: String,

        /// Number of pages to fetch, following "next"
        #[arg(short = 'p', long = "pages", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// Items per page
        #[arg(long = "per-page", default_value_t = crate::api::DEFAULT_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..=30))]
        per_page: u32,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., api.timeout_secs=5)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., api.base_url)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the config file location
    Path,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { query: None })
    }

    /// Log verbosity requested by the flags
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Split a `key=value` setting
///
/// Returns `None` if there is no `=` or the key is empty.
#[must_use]
pub fn parse_setting(setting: &str) -> Option<(&str, &str)> {
    let (key, value) = setting.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["imgseek"]);
        assert_eq!(cli.get_command(), Commands::Browse { query: None });
    }

    #[test]
    fn test_parse_browse_with_query() {
        let cli = Cli::parse_from(["imgseek", "b", "red fox"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: Some("red fox".to_string())
            }
        );
    }

    #[test]
    fn test_parse_search_defaults() {
        let cli = Cli::parse_from(["imgseek", "search", "mountain"]);
        assert_eq!(
            cli.get_command(),
            Commands::Search {
                query: "mountain".to_string(),
                pages: 1,
                per_page: 20,
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_search_options() {
        let cli = Cli::parse_from([
            "imgseek", "s", "lake", "--pages", "3", "--per-page", "10", "--json",
        ]);
        assert_eq!(
            cli.get_command(),
            Commands::Search {
                query: "lake".to_string(),
                pages: 3,
                per_page: 10,
                json: true,
            }
        );
    }

    #[test]
    fn test_zero_pages_rejected() {
        let result = Cli::try_parse_from(["imgseek", "search", "lake", "--pages", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_commands() {
        let cli = Cli::parse_from(["imgseek", "config", "set", "quiet=true"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Set {
                    setting: "quiet=true".to_string()
                }
            }
        );

        let cli = Cli::parse_from(["imgseek", "config", "path"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Path
            }
        );
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(Cli::parse_from(["imgseek"]).verbosity(), Verbosity::Normal);
        assert_eq!(Cli::parse_from(["imgseek", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(Cli::parse_from(["imgseek", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(Cli::parse_from(["imgseek", "-vv"]).verbosity(), Verbosity::Debug);
        assert_eq!(Cli::parse_from(["imgseek", "-vvvv"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["imgseek", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting("quiet=true"), Some(("quiet", "true")));
        assert_eq!(parse_setting(" api.base_url = http://x "), Some(("api.base_url", "http://x")));
        assert_eq!(parse_setting("a=b=c"), Some(("a", "b=c")));
        assert_eq!(parse_setting("novalue"), None);
        assert_eq!(parse_setting("=x"), None);
    }
}

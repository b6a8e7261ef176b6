//! imgseek CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive browser (default command)
//! imgseek
//! imgseek browse "northern lights"
//!
//! # Print the first two pages of results
//! imgseek search mountain --pages 2
//!
//! # Scripting: id and full-size URL only, or JSON
//! imgseek -q search mountain
//! imgseek search mountain --json
//!
//! # Settings
//! imgseek config set api.access_key=<key>
//! imgseek config get api.base_url
//! imgseek config path
//! ```
//!
//! # Configuration
//!
//! On first run, imgseek will prompt for an access key. Configuration is stored
//! in the user's config directory (`~/.config/imgseek/config.toml` on Linux).

use imgseek::{
    ImgseekError, Result,
    api::UnsplashClient,
    cli::{Cli, Commands},
    commands::{self, search::SearchOptions},
    config::ImgseekConfig,
    logging::{self, LogTarget},
    ui::output::{OutputWriter, StdoutWriter},
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported by the command
        Err(ImgseekError::FetchFailed(_)) => ExitCode::FAILURE,
        Err(e) => {
            StdoutWriter::new(cli.quiet).error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();
    init_logging(cli, &command);

    if let Commands::Config { command } = &command {
        let path = ImgseekConfig::config_path()?;
        return commands::config(command, &path, &StdoutWriter::new(cli.quiet));
    }

    let config = ImgseekConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;

    match &command {
        Commands::Browse { query } => commands::browse(&config, query.as_deref()),
        Commands::Search {
            query,
            pages,
            per_page,
            json,
        } => {
            let client = UnsplashClient::new(&config.api)?;
            let options = SearchOptions {
                query,
                pages: *pages,
                per_page: *per_page,
                json: *json,
                quiet,
            };
            commands::search(&client, &options, &StdoutWriter::new(quiet))
        }
        Commands::Config { .. } => Ok(()),
    }
}

/// The browser owns the terminal, so it logs to a file
fn init_logging(cli: &Cli, command: &Commands) {
    let target = match command {
        Commands::Browse { .. } => {
            logging::default_log_path().map_or(LogTarget::Stderr, LogTarget::File)
        }
        _ => LogTarget::Stderr,
    };

    if let Err(e) = logging::init_subscriber(cli.verbosity(), &target) {
        eprintln!("imgseek: logging disabled: {e}");
    }
}

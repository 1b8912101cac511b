//! Urban Dict CLI - Look up Urban Dictionary definitions from the terminal
//!
//! Definitions are served from a local SQLite cache when present and fetched
//! from the Urban Dictionary API otherwise.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;

use urban_dict::app::Dictionary;
use urban_dict::cache::SqliteStore;
use urban_dict::cli::{Action, Cli};
use urban_dict::config::Config;
use urban_dict::data::UrbanClient;
use urban_dict::error::AppError;
use urban_dict::logging;
use urban_dict::render;

async fn run(cli: Cli) -> Result<(), AppError> {
    let action = cli.action();
    if action == Action::Usage {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = Config::from_cli(&cli)?;
    let store = SqliteStore::open(&config.db_path)?;
    let mut dictionary = Dictionary::new(store, UrbanClient::with_base_url(config.api_url.clone()));

    match action {
        Action::Lookup(query) => {
            let definitions = dictionary.lookup(&query).await?;
            render::print_definitions(&definitions, config.line_width)?;
        }
        Action::Delete(query) => {
            dictionary.delete(&query)?;
            println!("Deleted entries for \"{}\" from the database", query);
        }
        Action::Usage => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

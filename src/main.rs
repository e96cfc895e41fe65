use clap::Parser;
use color_eyre::eyre::Result;

// Declare modules
mod cli;
mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod presentation;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    cli::{Action, Cli},
    state::{App, AppConfig, StartupTarget},
};

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = AppConfig::load().with_indexer_url(cli.indexer_url.clone());

    match cli.action(&config) {
        Action::Print(command) => {
            logging::init_stderr();
            cli::run(command, &config).await
        }
        Action::Tui(target) => run_tui(config, target).await,
    }
}

async fn run_tui(config: AppConfig, target: StartupTarget) -> Result<()> {
    // The screen belongs to the UI, so logs go to a file.
    if let Err(e) = logging::init_file() {
        eprintln!("Logging disabled: {e}");
    }
    tracing::info!("Starting with indexer {}", config.indexer_url);

    let mut app = App::new(config, target)?;
    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

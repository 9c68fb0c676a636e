//! st - Agile Sprint Tracker terminal client
//!
//! An interactive console client for the sprint tracker REST API.
//!
//! # Examples
//!
//! ```bash
//! # Connect to the server from config (or the default localhost URL)
//! st
//!
//! # Point at another server and enable live GitHub import
//! st --server http://tracker.local:9000 --github-live
//! ```

use st_cli::{App, Cli, Client, logger};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match st_config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let log_file = config.logging.file.clone().map(PathBuf::from);
    if let Err(e) = logger::initialize(config.logging.level, log_file, true) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let client = Client::new(&config.server.url);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut app = App::new(client, config.github.clone(), stdin.lock(), stdout.lock());

    match app.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

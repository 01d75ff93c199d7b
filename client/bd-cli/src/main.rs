//! bankdash - banking dashboard client
//!
//! Drives the session store and the cards page store from the terminal and
//! prints their state as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in against the configured API
//! bankdash session login --email a@b.com --password secret
//!
//! # Load cards, transactions and balance
//! bankdash dashboard --pretty
//!
//! # Freeze the second card
//! bankdash cards freeze 1
//! ```

use bd_cli::{App, Cli, logger};
use bd_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load and validate configuration
    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {}", e.display_message());
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.display_message());
            return ExitCode::FAILURE;
        }
    };

    let result = app.run(cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.display_message());
            ExitCode::FAILURE
        }
    }
}

//! OCM CLI - Command-line interface for the OCM accounts management API
//!
//! This CLI reads accounts, organizations and subscriptions, and can wait for
//! a subscription to reach a given status.

use anyhow::Result;

use clap::Parser;
use serde_json::{Value, json};
use std::process;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::Config;
use error::CliError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
    // Parse command line arguments
    let cli = Cli::parse();

    let result = run(cli.command, cli.url, cli.token, cli.json).await;

    if let Err(err) = result {
        if cli.json {
            let payload = format_error_json(&err);
            output::print_output(payload, true);
        } else {
            eprintln!("Error: {}", err);
        }
        process::exit(1);
    }

    Ok(())
}

async fn run(
    command: Commands,
    url: Option<String>,
    token: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    // Load configuration, then apply command-line overrides
    let mut config = Config::load().await?.with_url(url)?;
    if token.is_some() {
        config.auth_token = token;
    }

    match command {
        Commands::CurrentAccount => {
            commands::account::handle_current_account_command(&config, json).await
        }
        Commands::Account { subcommand } => {
            commands::account::handle_account_command(&config, subcommand, json).await
        }
        Commands::Organization { subcommand } => {
            commands::organization::handle_organization_command(&config, subcommand, json).await
        }
        Commands::Subscription { subcommand } => {
            commands::subscription::handle_subscription_command(&config, subcommand, json).await
        }
    }
}

fn format_error_json(err: &CliError) -> Value {
    match err {
        CliError::Api(api) => json!({
            "error": {
                "type": err.kind(),
                "message": err.to_string(),
                "status": api.status,
                "code": api.code,
                "reason": api.reason,
                "operation_id": api.operation_id,
            }
        }),
        _ => json!({
            "error": {
                "type": err.kind(),
                "message": err.to_string(),
            }
        }),
    }
}

//! HeatGuard CLI
//!
//! Runs searches in-process or checks a running server.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use chrono::Timelike;
use clap::Parser;
use infrastructure::{AppConfig, LogFormat, Services, init_logging};
use presentation_cli::{
    Cli, Commands,
    cli::log_filter_from_verbosity,
    interactive,
    render::{RenderContext, render_error, render_result},
    status::{fetch_status, render_status},
};
use tokio::io::BufReader;

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

fn current_hour() -> u8 {
    u8::try_from(chrono::Local::now().hour()).unwrap_or(0)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LogFormat::Text, log_filter_from_verbosity(cli.verbose))?;

    match &cli.command {
        Commands::Search { .. } => {
            let config = load_config(&cli)?;
            let services = Services::from_config(&config)?;
            let city = cli.command.city().unwrap_or_default();
            let ctx = RenderContext {
                theatre_schedule: config.theatre_schedule.as_ref(),
                hour: current_hour(),
            };

            match services.orchestrator.execute(&city).await {
                Ok(result) => println!("{}", render_result(&result, ctx)),
                Err(e) => {
                    println!("{}", render_error(&e));
                    std::process::exit(1);
                },
            }
        },

        Commands::Interactive => {
            let config = load_config(&cli)?;
            let services = Services::from_config(&config)?;
            let ctx = RenderContext {
                theatre_schedule: config.theatre_schedule.as_ref(),
                hour: current_hour(),
            };

            interactive::run(
                Arc::new(services.session()),
                BufReader::new(tokio::io::stdin()),
                &mut std::io::stdout(),
                ctx,
            )
            .await?;
        },

        Commands::Status { url } => {
            let client = reqwest::Client::new();
            match fetch_status(&client, url).await {
                Ok(status) => {
                    print!("{}", render_status(&status));
                    if !status.ready {
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    println!("❌ Server unreachable: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}

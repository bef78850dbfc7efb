//
//  booker-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use booker_client::cli::{Cli, Commands};
use booker_client::output::{OutputFormat, OutputWriter};
use booker_client::{exit_codes, BookerError};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::new(OutputFormat::Table).write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("BOOKER_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BookerError>() {
        Some(BookerError::Config(_)) => exit_codes::CONFIG_ERROR,
        Some(BookerError::Authentication(_)) => exit_codes::AUTH_ERROR,
        Some(e) if e.status() == Some(401) => exit_codes::AUTH_ERROR,
        Some(e) if e.status() == Some(404) => exit_codes::NOT_FOUND,
        _ => exit_codes::ERROR,
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Availability(cmd) => cmd.run(&cli.global).await,
        Commands::BookClass(cmd) => cmd.run(&cli.global).await,
        Commands::Location(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("booker version {}", booker_client::VERSION);
            Ok(())
        }
    }
}

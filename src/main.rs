//! Gym membership CLI
//!
//! `shell` (default) runs the interactive session, `serve` starts the quote API.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use gym_membership::config::Config;
use gym_membership::pricing::PricingEngine;
use gym_membership::shell::Session;
use gym_membership::{app, init_tracing, AppState};

#[derive(Debug, Parser)]
#[command(name = "gym-membership", version, about = "Gym membership pricing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price and confirm a membership interactively
    Shell,
    /// Serve the JSON quote API
    Serve {
        /// Bind host (overrides GYM_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides GYM_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = Config::load();
    init_tracing(&config.log_level);

    let result = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(),
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the membership was confirmed
fn run_shell() -> Result<bool> {
    let engine = PricingEngine::default();
    let stdin = io::stdin();
    let outcome = Session::new(&engine, stdin.lock(), io::stdout().lock()).run()?;
    info!("Session ended: {:?}", outcome);
    Ok(outcome.is_confirmed())
}

fn serve(config: Config) -> Result<bool> {
    let addr = config.socket_addr()?;
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Quote API listening on http://{}", addr);
        axum::serve(listener, app(AppState::new(PricingEngine::default())))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("Quote API stopped");
        Ok::<_, anyhow::Error>(true)
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}

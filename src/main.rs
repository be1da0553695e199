//! Appliance Sim - appliance access management API simulator
//!
//! Serves the console CLI, DCUI, SSH and shell access toggles over HTTP
//! for testing appliance management clients.

use anyhow::Result;
use appliance_sim::{
    access::AccessService,
    config::SimulatorConfig,
    host::SimulatorBuilder,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "appliance-sim")]
#[command(author = "A3S Lab Team")]
#[command(version)]
#[command(about = "Appliance access management API simulator")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "APPLIANCE_SIM_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the simulator
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("appliance_sim={},tower_http=debug", log_level).into());
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Load configuration
    let config = match cli.config {
        Some(path) => SimulatorConfig::load(&path)?,
        None => SimulatorConfig::default(),
    };

    match cli.command {
        Commands::Serve { host, port } => {
            run_simulator(config, host, port).await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

async fn run_simulator(
    mut config: SimulatorConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    let simulator = SimulatorBuilder::new()
        .config(config.server)
        .endpoint(AccessService::new(config.access))
        .build();

    let addr = simulator.start().await?;
    tracing::info!(%addr, "Appliance simulator is running. Press Ctrl+C to stop.");

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down...");
    simulator.stop().await?;

    Ok(())
}

fn show_config(config: Option<&SimulatorConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    println!("{}", config.to_toml()?);
    Ok(())
}

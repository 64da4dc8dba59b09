mod config;
mod logging;
mod scenario_cmd;
mod server;
mod signals;

use std::path::PathBuf;
use std::sync::Arc;

use admin_mock::AdminService;
use anyhow::Result;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use crate::scenario_cmd::ScenarioCommand;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Mock Server - scenario-driven mock backend for the admin UI
#[derive(Parser)]
#[command(name = "mock-server")]
#[command(about = "Mock Server - scenario-driven mock backend for the admin UI")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Inspect or change the persisted mock scenario
    #[command(subcommand)]
    Scenario(ScenarioCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref()
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
        Commands::Scenario(command) => scenario_cmd::run(&command, &config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let manager = Arc::new(config.scenarios.build_manager(&config.server.home_dir));
    let service = Arc::new(AdminService::new(config.fixtures));
    tracing::info!(
        scenario = %manager.current(),
        products = config.fixtures.products,
        orders = config.fixtures.orders,
        "Mock server starting"
    );

    let router = server::build_router(&config, &manager, &service);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handling failed");
        }
        signal_cancel.cancel();
    });

    server::serve(&config.server, router, cancel).await
}

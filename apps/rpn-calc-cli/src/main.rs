mod command;
mod config;
mod logging;
mod session;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use rpn_calc::RpnCalcModule;

use crate::config::AppConfig;
use crate::session::Session;

/// RPN calculator shell - one core call per input line
#[derive(Parser)]
#[command(name = "rpn-calc-cli")]
#[command(about = "RPN calculator shell - one core call per input line")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
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
    /// Read commands from stdin (default)
    Run,
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (RPNCALC__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init_logging(&config.logging);

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_session(&config),
        Commands::Check => check_config(&config),
    }
}

fn run_session(config: &AppConfig) -> Result<()> {
    tracing::info!("rpn-calc-cli starting");

    let module = RpnCalcModule::default();
    let client = module.init(&config.rpn_calc)?;

    let stats = Session::new(client).run(io::stdin().lock(), io::stdout().lock());
    let torn_down = module.shutdown();

    let stats = stats?;
    tracing::info!(
        commands = stats.commands,
        errors = stats.errors,
        calculators_left = torn_down,
        "session finished"
    );
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}

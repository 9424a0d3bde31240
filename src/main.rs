//! Rail Fence Cipher - Main entry point
//!
//! Starts the interactive menu by default, or runs a one-shot command.

use std::io;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use railfence::cli::{Cli, Commands};
use railfence::commands::{self, Operation};
use railfence::{FenceConfig, Shell};

/// Initialize the logger with appropriate settings
fn init_logger(default_filter: &str) {
    // RUST_LOG overrides the -v level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<FenceConfig> {
    let Some(path) = &cli.config else {
        return Ok(FenceConfig::default());
    };
    info!("Loading configuration from: {:?}", path);
    let config = FenceConfig::load_from_file(path)?;
    config.validate()?;
    Ok(config)
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_logger(cli.log_filter());
    debug!("CLI arguments parsed");

    if let Some(Commands::ValidateConfig { config }) = &cli.command {
        info!("Validating configuration file: {:?}", config);
        match FenceConfig::load_from_file(config).and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => println!("✓ Configuration file is valid: {:?}", config),
            Err(e) => {
                error!("Configuration validation failed: {:#}", e);
                eprintln!("✗ Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration file: {:#}", e);
            eprintln!("✗ Failed to load configuration file: {:#}", e);
            std::process::exit(1);
        }
    };
    let source = config.source_loader();

    let (operation, args) = match cli.command {
        Some(Commands::Encrypt(args)) => (Operation::Encrypt, args),
        Some(Commands::Decrypt(args)) => (Operation::Decrypt, args),
        Some(Commands::Render(args)) => (Operation::Render, args),
        Some(Commands::ValidateConfig { .. }) => return Ok(()),
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(source, stdin.lock(), io::stdout());
            if let Some(key) = config.fence_key()? {
                info!(%key, "using key from configuration");
                shell = shell.with_key(key);
            }
            shell.run()?;
            return Ok(());
        }
    };

    if let Err(e) = commands::execute(
        operation,
        &args,
        &config,
        &source,
        io::stdin().lock(),
        io::stdout().lock(),
    ) {
        error!(%operation, "command failed: {}", e);
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

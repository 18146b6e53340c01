use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use rusikaram_core::config::AppConfig;
use rusikaram_infrastructure::{ConfigService, RusikaramPaths};

mod bootstrap;
mod logging;
mod render;
mod repl;

#[derive(Parser)]
#[command(name = "rusikaram")]
#[command(about = "Rusikaram Orders - take and track snack orders", long_about = None)]
struct Cli {
    /// Directory holding the order store and logs
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file to use instead of the default one
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also print log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive order form (default)
    Form,
    /// Print every submitted order and the grand total
    Orders,
    /// Send the payment confirmation for a paid order
    Notify {
        /// Order number as shown by `orders`
        order: usize,
    },
    /// Print where configuration, data and logs are kept
    Paths,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_file = match cli.config {
        Some(path) => path,
        None => RusikaramPaths::default_config_file()?,
    };
    let config_service = ConfigService::new(config_file.clone());
    let loaded = config_service.load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let data_dir = cli.data_dir.or_else(|| config.storage.data_dir.clone());
    let paths = RusikaramPaths::resolve(Some(config_file), data_dir)?;

    let _log_guard = logging::init(&paths.logs_dir(), &config.logging, cli.verbose)?;
    if let Err(e) = loaded {
        tracing::warn!(path = %paths.config_file.display(), error = %e, "Using default configuration");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Rusikaram");

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => {
            let mut controller = bootstrap::build_controller(&paths, &config)?;
            repl::run(&mut controller)?;
        }
        Commands::Orders => {
            let controller = bootstrap::build_controller(&paths, &config)?;
            print!("{}", render::render_overview(&controller.overview()));
        }
        Commands::Notify { order } => {
            let controller = bootstrap::build_controller(&paths, &config)?;
            repl::send_notice(&controller, order)?;
        }
        Commands::Paths => print_paths(&paths, &config),
    }

    Ok(())
}

fn print_paths(paths: &RusikaramPaths, config: &AppConfig) {
    println!("{} {}", "Config:".bold(), paths.config_file.display());
    println!("{} {}", "Data:  ".bold(), paths.data_dir.display());
    println!("{} {}", "Store: ".bold(), paths.store_file().display());
    println!("{} {}", "Logs:  ".bold(), paths.logs_dir().display());
    println!(
        "{} {}",
        "Links: ".bold(),
        if config.notification.open_links {
            "opened automatically"
        } else {
            "printed only"
        }
    );
}

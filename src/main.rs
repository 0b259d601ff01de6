use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use zerohero::core::catalog::Catalog;
use zerohero::core::config::{self, CliOverrides, ZeroHeroConfig};
use zerohero::core::state::App;
use zerohero::tui;

#[derive(Parser)]
#[command(name = "zerohero", about = "Step through a tutorial course in the terminal")]
struct Args {
    /// Catalog file to load (.toml or .json) instead of the bundled course
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Validate the catalog, print its outline, and exit
    #[arg(long)]
    check: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Loaded before the logger: the log file path is a config setting
    let loaded = config::load_config();
    let fallback = ZeroHeroConfig::default();
    let file_config = match &loaded {
        Ok((file_config, _)) => file_config,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            &fallback
        }
    };
    let config = config::resolve(
        file_config,
        &CliOverrides {
            catalog: args.catalog,
            verbose: args.verbose,
        },
    );

    // Initialize file logger
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    match &loaded {
        Ok((file_config, source)) => {
            source.log();
            log::debug!("Config: {:?}", file_config);
        }
        Err(e) => log::warn!("Ignoring config file: {e}"),
    }

    log::info!(
        "zerohero starting up with catalog: {}",
        config
            .catalog
            .as_deref()
            .map_or_else(|| "<bundled>".to_string(), |p| p.display().to_string())
    );

    let catalog = match Catalog::load_or_builtin(config.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load catalog: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        return match catalog.write_outline(&mut std::io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match tui::run(App::new(Arc::new(catalog)), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

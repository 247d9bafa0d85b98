//! chapashop: run the directory's hours and location utilities over JSON records.

use chapashop_core::config::Config;
use chapashop_core::exit_codes;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Business-hours and location utilities for ChapaShop listings
#[derive(Parser)]
#[command(name = "chapashop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a configuration file (defaults to .chapashop.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the weekly schedule
    Hours {
        /// JSON file with the weekly schedule
        file: PathBuf,
    },

    /// Show today's hours
    Today {
        /// JSON file with the weekly schedule
        file: PathBuf,

        /// Evaluate at this local time instead of now (YYYY-MM-DD HH:MM)
        #[arg(long)]
        at: Option<String>,
    },

    /// Check whether the business is open right now
    OpenNow {
        /// JSON file with the weekly schedule
        file: PathBuf,

        /// Evaluate at this local time instead of now (YYYY-MM-DD HH:MM)
        #[arg(long)]
        at: Option<String>,
    },

    /// Show display text and map link for a business location
    Location {
        /// JSON file with the business record
        file: PathBuf,
    },

    /// Distance between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lng1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lng2: f64,
    },

    /// Rank businesses by distance
    Nearby {
        /// JSON file with an array of businesses (id, lat/lng or location)
        file: PathBuf,

        /// User latitude (uses the configured home position if omitted)
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,

        /// User longitude
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,

        /// Only include businesses within this radius in kilometers
        #[arg(short, long)]
        radius: Option<f64>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Turn a backend error payload into a user-facing message
    BackendError {
        /// JSON file with the error payload
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return exit(e.exit_code());
        }
    };

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.general.log_level.clone()
    };
    let telemetry = chapashop_telemetry::TelemetryConfig::with_level(level);
    if let Err(e) = chapashop_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow(), e);
    }

    let result = match cli.command {
        Commands::Hours { file } => {
            commands::hours::weekly(&file, &config.schema.general.app_name, cli.format)
        }
        Commands::Today { file, at } => commands::hours::today(&file, at.as_deref(), cli.format),
        Commands::OpenNow { file, at } => {
            commands::hours::open_now(&file, at.as_deref(), cli.format)
        }
        Commands::Location { file } => commands::location::show(&file, cli.format),
        Commands::Distance { lat1, lng1, lat2, lng2 } => {
            commands::location::distance(lat1, lng1, lat2, lng2, cli.format)
        }
        Commands::Nearby { file, lat, lng, radius, limit } => {
            let query = commands::location::NearbyQuery { lat, lng, radius, limit };
            commands::location::nearby(&file, query, &config, cli.format).await
        }
        Commands::BackendError { file } => commands::backend::shape(&file, cli.format),
    };

    match result {
        Ok(()) => exit(exit_codes::SUCCESS),
        Err(e) => {
            tracing::debug!(report = ?e.to_report(), "Command failed");
            eprintln!("{} {}", "Error:".red().bold(), e);
            exit(e.exit_code())
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

//! pricecast - predicts a stock's closing price from one day's open, high,
//! low (in rupees) and traded volume.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=data/ml/model.json SCALER_PATH=data/ml/scaler.json \
//!     cargo run -- --open 14981.5 --high 15130.9 --low 14923.4 --volume 45000000
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Fitted regression model JSON (default: data/ml/model.json)
//! - `SCALER_PATH` - Fitted feature scaler JSON (default: data/ml/scaler.json)
//! - `MODEL_KIND` - `random_forest` or `linear` (default: random_forest)
//! - `RUST_LOG` - Log filter (default: info)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pricecast::application::system::Application;
use pricecast::config::Config;
use pricecast::interfaces::form::{
    DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_OPEN, DEFAULT_VOLUME, PredictionForm,
};
use pricecast::interfaces::result_view::{render_error, render_outcome};
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Open price (₹)
    #[arg(long, default_value = DEFAULT_OPEN, allow_hyphen_values = true)]
    open: String,

    /// High price (₹)
    #[arg(long, default_value = DEFAULT_HIGH, allow_hyphen_values = true)]
    high: String,

    /// Low price (₹)
    #[arg(long, default_value = DEFAULT_LOW, allow_hyphen_values = true)]
    low: String,

    /// Traded volume
    #[arg(long, default_value = DEFAULT_VOLUME, allow_hyphen_values = true)]
    volume: String,

    /// Override MODEL_PATH
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// Override SCALER_PATH
    #[arg(long)]
    scaler_path: Option<PathBuf>,

    /// Print the outcome as JSON instead of the result card
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();

    info!("pricecast {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(path) = args.model_path {
        config.artifacts = config.artifacts.with_model_path(path);
    }
    if let Some(path) = args.scaler_path {
        config.artifacts = config.artifacts.with_scaler_path(path);
    }

    // No input is read until both artifacts are in memory
    let app = match Application::build(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Startup aborted: {}", e);
            eprintln!("{}", render_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    let form = PredictionForm {
        open: args.open,
        high: args.high,
        low: args.low,
        volume: args.volume,
    };

    match app.submit(&form) {
        Ok(outcome) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", render_outcome(&outcome));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", render_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

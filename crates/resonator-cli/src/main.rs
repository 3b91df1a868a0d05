// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Command-Line Entry Point
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Optimize readout resonator dimensions and print them.
//!
//! Usage:
//! ```text
//! resonator-opt --config configs/transmon_readout.json --snr 10000
//! ```

use clap::Parser;
use resonator_core::optimizer::ResonatorOptimizer;
use resonator_types::config::ResonatorConfig;
use resonator_types::constants::DEFAULT_INITIAL_GUESS;
use resonator_types::error::ResonatorResult;
use resonator_types::state::Dimensions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "resonator-opt",
    version,
    about = "Barrier-method optimizer for qubit readout resonator dimensions"
)]
struct Cli {
    /// JSON design configuration (built-in 5 GHz transmon readout if omitted)
    #[arg(long)]
    config: Option<String>,

    /// Initial guess for the resonator length [m]
    #[arg(long, default_value_t = DEFAULT_INITIAL_GUESS[0])]
    length: f64,

    /// Initial guess for the resonator width [m]
    #[arg(long, default_value_t = DEFAULT_INITIAL_GUESS[1])]
    width: f64,

    /// Override the target signal-to-noise ratio
    #[arg(long)]
    snr: Option<f64>,

    /// Override the outer anneal budget
    #[arg(long)]
    max_iterations: Option<usize>,
}

fn load_config(cli: &Cli) -> ResonatorResult<ResonatorConfig> {
    let mut config = match &cli.config {
        Some(path) => ResonatorConfig::from_file(path)?,
        None => ResonatorConfig::default(),
    };
    if let Some(snr) = cli.snr {
        config.targets.snr_target = snr;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.optimizer.max_outer_iterations = max_iterations;
    }
    Ok(config)
}

fn run(cli: &Cli) -> ResonatorResult<Dimensions> {
    let config = load_config(cli)?;
    info!(
        design = %config.design_name,
        snr_target = config.targets.snr_target,
        frequency_hz = config.targets.frequency,
        max_outer_iterations = config.optimizer.max_outer_iterations,
        "starting resonator optimization"
    );

    let optimizer = ResonatorOptimizer::new(config)?;
    let outcome = optimizer.optimize(&[cli.length, cli.width])?;
    Ok(outcome.dimensions)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(dims) => {
            println!("Length: {} m", dims[0]);
            println!("Width: {} m", dims[1]);
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

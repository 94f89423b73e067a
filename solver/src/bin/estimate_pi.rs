//! Print a Monte Carlo estimate of π using the reference parameters.
//!
//! Command-line arguments are ignored.

use montecarlo_pi::env_config::init_tracing;
use montecarlo_pi::format::output_line;
use montecarlo_pi::{run, EstimatorConfig};

fn main() {
    init_tracing();

    let config = EstimatorConfig::default();
    match run(&config) {
        Ok(estimate) => println!("{}", output_line(&estimate)),
        Err(e) => {
            eprintln!("Estimation failed: {}", e);
            std::process::exit(1);
        }
    }
}

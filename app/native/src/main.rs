#![allow(clippy::multiple_crate_versions)]

//! Tricol - command-line preview of master/stack tiling layouts.
//!
//! Logging goes to stderr and is controlled by the `TRICOL_LOG` environment
//! variable, using `tracing` filter syntax (e.g. `TRICOL_LOG=debug`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TRICOL_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    init_logging();

    if let Err(err) = tricol_lib::cli::run() {
        eprintln!("tricol: {err}");
        std::process::exit(1);
    }
}

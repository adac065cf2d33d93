//! Host adapter: reads an input payload from stdin, writes the result payload
//! to stdout. Diagnostics go to stderr.
//!
//! Logging is configured through `RUST_LOG` (default
//! `b2b_eu_tax_pricing=info`) and `LOG_FORMAT=json` for JSON lines.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use b2b_eu_tax_pricing::core::PricingError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("b2b_eu_tax_pricing=info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init();
    }
}

fn process() -> Result<(), PricingError> {
    let mut payload = String::new();
    io::stdin().read_to_string(&mut payload)?;

    let output = b2b_eu_tax_pricing::run_json(&payload)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logger();

    match process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "pricing run failed");
            ExitCode::FAILURE
        }
    }
}

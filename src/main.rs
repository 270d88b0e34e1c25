use std::io::{self, Write};

use anyhow::Context;
use log::info;

/// Entry point for the `dual-demo` binary.
fn main() -> anyhow::Result<()> {
    // Default filter is "warn" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Running dual number examples");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dual::demo::run(&mut out).context("Failed to write examples to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    info!("Done");
    Ok(())
}

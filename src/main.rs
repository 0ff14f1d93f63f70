//! Retail Catalog - demonstration entry point

use anyhow::{Context, Result};
use clap::Parser;
use retail_catalog::{demo, logging, AppContext, Config};

fn main() {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    logging::init_logger(config.verbose);

    // Failures are reported but the process still exits 0.
    if let Err(e) = run(config) {
        tracing::error!("Demonstration failed: {:#}", e);
        eprintln!("An error occurred: {:#}", e);
    }
}

fn run(config: Config) -> Result<()> {
    tracing::debug!("Config: {:?}", config);
    let ctx = AppContext::new(config).context("invalid configuration")?;
    let stdout = std::io::stdout();
    demo::run(&ctx, &mut stdout.lock())?;
    tracing::info!(next_order_id = ctx.order_ids.peek(), "Demonstration complete");
    Ok(())
}

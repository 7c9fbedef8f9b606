//! Find a shortest path on a loaded or generated board and print it.
//!
//! Run: cargo run --bin gridstar -- --width 30 --height 12 --density 0.3

use clap::Parser;
use gridstar_demos::{Cli, config, run};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = run(&cli)?;
    print!("{}", report.to_text(cli.quiet));
    Ok(())
}

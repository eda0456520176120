use anyhow::Result;
use clap::Parser;
use richtext::cli::{self, Cli};

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logging comes up before any theme work so load paths are visible.
    richtext::debug::init_log_bridge(args.log_level);
    log::info!("Starting richtext-theme");

    let output = cli::run(&args.command)?;
    println!("{output}");
    Ok(())
}

//! Match CLI
//!
//! Thin binary over `fb_cli::run`: parse arguments, set up logging, print.

use anyhow::Result;
use clap::Parser;
use fb_cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Running command: {:?}", cli.command);

    let output = fb_cli::run(cli)?;
    println!("{}", output);
    Ok(())
}

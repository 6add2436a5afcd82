use anyhow::Result;
use clap::Parser;
use hangterm::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli(Cli::parse()).await
}

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = nordlocate::cli::Cli::parse();
    cli.run()
}

//! CLI entry point for the identicon generator

use blockies::io::cli::{Cli, IconProcessor};
use clap::Parser;

fn main() -> blockies::Result<()> {
    let cli = Cli::parse();
    let mut processor = IconProcessor::new(cli);
    processor.process().map(|_| ())
}

//! scout: CLI for recursive source file discovery

use clap::Parser;
use scout_cli::cli::{effective_extensions, setup_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let extensions = effective_extensions(&cli.extensions);
    scout_cli::commands::list::run(
        &cli.path,
        &extensions,
        &cli.exclude,
        cli.fail_fast,
        cli.follow_links,
    )
}

//! pagesplit command-line entry point

use clap::Parser;
use pagesplit_cli::commands::SplitArgs;
use pagesplit_cli::CliResult;

fn main() -> CliResult<()> {
    SplitArgs::parse().execute()
}

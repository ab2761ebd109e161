//! lzframe: compress and decompress LZO1X-1 frames from the command line.

mod args;
mod logging;
mod run;

use anyhow::Result;
use clap::Parser;

use crate::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log.as_deref())?;
    run::run(&cli)
}

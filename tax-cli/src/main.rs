use clap::Parser;

use tax_cli::cli::{self, Cli};
use tax_cli::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;
    cli::run(cli)
}

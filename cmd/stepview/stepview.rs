mod cli;
mod initializers;

use clap::Parser;
use tracing::error;

fn main() {
    let cli = cli::CLI::parse();

    initializers::init_tracing(cli.log_level);

    if let Err(e) = cli::run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

//! Langpick command-line entry point

use clap::Parser;
use langpick_cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

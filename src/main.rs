use clap::Parser;
use color_eyre::Result;

use relwatch::cli::args::Args;
use relwatch::cli::commands;
use relwatch::logger;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logger::init(args.verbose) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let output = commands::run(&args.command)?;
    print!("{output}");
    Ok(())
}

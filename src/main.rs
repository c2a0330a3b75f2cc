use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Arranges pennant chains with same-coloured pennants spread as far apart as possible", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Optimize a pile given on the command line or in a file.
    Search(cmd::search::SearchArgs),
    /// Enter the pile by hand, then run every strategy on it.
    Interactive(cmd::interactive::InteractiveArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Interactive(args) => cmd::interactive::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}

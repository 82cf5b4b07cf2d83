//! Console front-end for the Storyteller text-adventure engine.

mod commands;
mod markup;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter such as `st_fiction=debug`.
const LOG_ENV: &str = "STORYTELLER_LOG";

#[derive(Parser)]
#[command(
    name = "storyteller",
    about = "Storyteller: a text adventure in your terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the sample adventure interactively
    Play {
        /// RNG seed for reproducible dialogue and ambience
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print raw text, including markup, without colors
        #[arg(long)]
        plain: bool,
    },

    /// Run every line of a file as a command and print the transcript
    Transcript {
        /// File with one command per line
        file: PathBuf,

        /// RNG seed for reproducible dialogue and ambience
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print raw text, including markup, without colors
        #[arg(long)]
        plain: bool,
    },
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { seed, plain } => commands::play::run(seed, plain),
        Commands::Transcript { file, seed, plain } => {
            commands::transcript::run(&file, seed, plain)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

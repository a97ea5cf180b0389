//! Terminal player for the "Sarayda Bir Yolculuk" interactive narrative.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "saray",
    about = "Sarayda Bir Yolculuk — an interactive Ottoman-court narrative",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the story interactively
    Play {
        /// Scene to start from (default: the story's start scene)
        #[arg(long)]
        from: Option<String>,

        /// Protagonist to front the story with (skips the selection prompt)
        #[arg(short, long)]
        character: Option<String>,

        /// Write the choice history as JSON when the session ends
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Validate the story catalog and print a summary
    Check,

    /// List all scenes in authored order
    List,

    /// Show one scene in detail
    Show {
        /// Scene identifier (e.g. bolum_12)
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            from,
            character,
            transcript,
        } => commands::play::run(from.as_deref(), character.as_deref(), transcript.as_deref()),
        Commands::Check => commands::check::run(),
        Commands::List => commands::list::run(),
        Commands::Show { id } => commands::show::run(&id),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! CLI frontend for the Menufiction engine.

mod commands;
mod terminal;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::NarratorArgs;

#[derive(Parser)]
#[command(
    name = "mf",
    about = "Menufiction: interactive fiction played from menus",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the sample game
    Play {
        /// Take choices from a choice log instead of the keyboard
        #[arg(long)]
        replay: Option<PathBuf>,

        /// Save the choices made to a choice log
        #[arg(long)]
        record: Option<PathBuf>,

        /// Save the narration to a file
        #[arg(long)]
        transcript: Option<PathBuf>,

        #[command(flatten)]
        narrator: NarratorArgs,

        /// Log engine decisions to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Replay a choice log and compare the narration with a saved transcript
    Check {
        /// Choice log to replay
        #[arg(long)]
        choices: PathBuf,

        /// Transcript the replay must reproduce
        #[arg(long)]
        transcript: PathBuf,

        #[command(flatten)]
        narrator: NarratorArgs,
    },
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "mf_fiction=debug,mf_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(true),
        )
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Play { verbose: true, .. });
    init_tracing(verbose);

    let result = match cli.command {
        Commands::Play {
            replay,
            record,
            transcript,
            narrator,
            verbose: _,
        } => commands::play::run(
            replay.as_deref(),
            record.as_deref(),
            transcript.as_deref(),
            &narrator,
        ),
        Commands::Check {
            choices,
            transcript,
            narrator,
        } => commands::check::run(&choices, &transcript, &narrator),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

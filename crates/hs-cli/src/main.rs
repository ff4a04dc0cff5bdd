//! CLI frontend for the heartsim combat simulator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hsim",
    about = "heartsim — repeated combat simulations for Heart-style parties",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the combat simulation and report aggregated results
    Run {
        /// Directory of player character JSON files
        #[arg(long, default_value = "pc")]
        pcs: PathBuf,

        /// Directory of NPC JSON files
        #[arg(long, default_value = "npc")]
        npcs: PathBuf,

        /// JSON config file (defaults apply when absent or malformed)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of fights to run (overrides the config file)
        #[arg(short, long)]
        fights: Option<u64>,

        /// Round cap per fight (overrides the config file)
        #[arg(short, long)]
        max_rounds: Option<u32>,

        /// Master RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Replay every fight's event log
        #[arg(short, long)]
        verbose: bool,

        /// Skip the per-character breakdown tables
        #[arg(long)]
        summary_only: bool,
    },

    /// Load and display both rosters without fighting
    Roster {
        /// Directory of player character JSON files
        #[arg(long, default_value = "pc")]
        pcs: PathBuf,

        /// Directory of NPC JSON files
        #[arg(long, default_value = "npc")]
        npcs: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            pcs,
            npcs,
            config,
            fights,
            max_rounds,
            seed,
            verbose,
            summary_only,
        } => commands::run::run(commands::run::RunArgs {
            pcs,
            npcs,
            config,
            fights,
            max_rounds,
            seed,
            verbose,
            summary_only,
        }),
        Commands::Roster { pcs, npcs } => commands::roster::run(&pcs, &npcs),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

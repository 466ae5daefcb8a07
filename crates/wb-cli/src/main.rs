//! CLI host for WriterBot writing prompts.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use wb_core::commands::Command;

#[derive(Parser)]
#[command(
    name = "writerbot",
    about = "WriterBot: random prompts, names, and babble for writers",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory containing the word-list files
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: writerbot.toml in the current directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible output
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// A random plot bunny (story hook)
    Bunny {
        /// Name of the main character
        mc: Option<String>,
    },

    /// A random plot ninja (story twist)
    Ninja {
        /// How many distinct ninjas to draw
        count: Option<String>,
    },

    /// A random profession
    Profession,

    /// A random job (alias of profession)
    Job,

    /// A random character name
    Name {
        /// m/male or f/female (default: random)
        gender: Option<String>,
    },

    /// Nonsense sentences built from the word lists
    Babble {
        /// How many sentences
        count: Option<String>,
    },

    /// Roll dice in NdM notation (default: 1d20)
    Roll {
        /// Dice to roll, e.g. 2d6
        dice: Option<String>,
    },

    /// Show the loaded word lists
    Lists,

    /// Read commands from stdin, one per line, until EOF or `quit`
    Chat,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match commands::resolve_config(cli.config.as_deref(), cli.data_dir, cli.seed) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Bunny { mc } => {
            commands::prompt::run(&config, Command::PlotBunny, mc, cli.json)
        }
        Commands::Ninja { count } => {
            commands::prompt::run(&config, Command::PlotNinja, count, cli.json)
        }
        Commands::Profession | Commands::Job => {
            commands::prompt::run(&config, Command::RandomProfession, None, cli.json)
        }
        Commands::Name { gender } => {
            commands::prompt::run(&config, Command::RandomName, gender, cli.json)
        }
        Commands::Babble { count } => {
            commands::prompt::run(&config, Command::Babble, count, cli.json)
        }
        Commands::Roll { dice } => commands::prompt::run(&config, Command::Roll, dice, cli.json),
        Commands::Lists => commands::lists::run(&config, cli.json),
        Commands::Chat => commands::chat::run(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! CLI frontend for NobleItems definitions and resource packs.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "noble",
    about = "Manage NobleItems definitions and build their resource pack",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding items.json, mobs.json and the referenced assets
    #[arg(short, long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ListKind {
    Items,
    Mobs,
}

#[derive(Subcommand)]
enum Commands {
    /// Write starter items.json and mobs.json files
    Init,

    /// Validate definitions and referenced assets
    Check,

    /// List item and mob definitions
    List {
        /// Only list this kind
        kind: Option<ListKind>,
    },

    /// Show one item or mob definition
    Show {
        /// Item or mob id (case-insensitive)
        id: String,

        /// Print the definition as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the resource pack archive
    BuildPack {
        /// Archive file, relative to the data directory
        #[arg(default_value = noble_pack::config::DEFAULT_PACK_FILE)]
        file: PathBuf,

        /// Directory to create the temporary working directory in
        #[arg(long)]
        work_dir: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dir = cli.data_dir;
    let result = match cli.command {
        Commands::Init => commands::init::run(&dir),
        Commands::Check => commands::check::run(&dir),
        Commands::List { kind } => commands::list::run(&dir, kind),
        Commands::Show { id, json } => commands::show::run(&dir, &id, json),
        Commands::BuildPack { file, work_dir } => {
            commands::build_pack::run(&dir, &file, work_dir.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

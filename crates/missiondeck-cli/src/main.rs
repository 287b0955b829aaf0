mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deck",
    about = "Manage daily mission packs — parse, generate, merge, and export mission markdown",
    version,
    propagate_version = true
)]
struct Cli {
    /// Deck root (default: auto-detect from deck.yaml or .git/)
    #[arg(long, global = true, env = "DECK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a deck in the current directory
    Init,

    /// List stored packs, newest first
    List,

    /// Show the pack for a date
    Show {
        /// Pack date (YYYY-MM-DD)
        date: String,

        /// Print the raw markdown instead of a summary
        #[arg(long)]
        raw: bool,
    },

    /// Show the newest pack
    Latest {
        /// Print the raw markdown instead of a summary
        #[arg(long)]
        raw: bool,
    },

    /// Store a batch of missions, merging into the pack for that date
    Add {
        /// JSON file holding the mission batch (an array of missions)
        #[arg(long)]
        from: PathBuf,

        /// Pack date (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Print one mission as standalone markdown, addressed by slug
    Export { slug: String },

    /// Check a pack's numbering and structure
    Validate {
        /// Pack date (YYYY-MM-DD)
        date: String,
    },

    /// List glossary terms appearing in a pack's missions
    Terms {
        /// Pack date (YYYY-MM-DD)
        date: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::List => cmd::list::run(&root, cli.json),
        Commands::Show { date, raw } => cmd::show::run(&root, &date, raw, cli.json),
        Commands::Latest { raw } => cmd::latest::run(&root, raw, cli.json),
        Commands::Add { from, date } => cmd::add::run(&root, &from, date.as_deref(), cli.json),
        Commands::Export { slug } => cmd::export::run(&root, &slug),
        Commands::Validate { date } => cmd::validate::run(&root, &date, cli.json),
        Commands::Terms { date } => cmd::terms::run(&root, &date, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

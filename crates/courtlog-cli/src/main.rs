use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "courtlog")]
#[command(about = "Attended-games log: milestones, badges, exports", long_about = None)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the log and write export artifacts
    Compute {
        /// Path to the games JSON file
        #[arg(long)]
        games: String,

        /// Path to the player appearances JSON file
        #[arg(long)]
        players: Option<String>,

        /// Path to a roster override JSON file
        #[arg(long)]
        rosters: Option<String>,

        /// Exports root directory (one subdirectory per export id)
        #[arg(long, default_value = "exports")]
        out: String,
    },

    /// Replay the log and print aggregate totals
    Summary {
        /// Path to the games JSON file
        #[arg(long)]
        games: String,

        /// Path to the player appearances JSON file
        #[arg(long)]
        players: Option<String>,

        /// Path to a roster override JSON file
        #[arg(long)]
        rosters: Option<String>,

        /// Print the summary document as JSON instead of key=value lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Replay the log and print badge rows in stream order
    Badges {
        /// Path to the games JSON file
        #[arg(long)]
        games: String,

        /// Path to the player appearances JSON file
        #[arg(long)]
        players: Option<String>,

        /// Path to a roster override JSON file
        #[arg(long)]
        rosters: Option<String>,

        /// Only print badges earned at this game id
        #[arg(long)]
        game: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env.local if present. Silent if the file does not exist;
    // deployments inject env vars directly.
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Compute {
            games,
            players,
            rosters,
            out,
        } => commands::compute::execute(games, players, rosters, out),

        Commands::Summary {
            games,
            players,
            rosters,
            json,
        } => commands::summary::execute(games, players, rosters, json),

        Commands::Badges {
            games,
            players,
            rosters,
            game,
        } => commands::badges::execute(games, players, rosters, game),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

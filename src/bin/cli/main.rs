mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "glossa-cli", about = "Glossa vocabulary drill CLI", version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List registered vocabulary files and their session progress
    List,

    /// Register a vocabulary file (.xlsx)
    Add {
        /// Path of the vocabulary file
        path: String,
    },

    /// Remove a vocabulary file from the list (files stay on disk)
    Remove {
        /// Path of the vocabulary file
        path: String,
    },

    /// Run a learning session in the terminal
    Drill {
        /// Path of the vocabulary file
        path: String,

        /// Session number (1-3)
        #[arg(long, short, default_value = "1")]
        session: usize,

        /// Restart the session instead of continuing it
        #[arg(long)]
        restart: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => commands::list(&cli.format),
        Command::Add { path } => commands::add(&path),
        Command::Remove { path } => commands::remove(&path),
        Command::Drill {
            path,
            session,
            restart,
        } => commands::drill(&path, session, restart),
    }
}

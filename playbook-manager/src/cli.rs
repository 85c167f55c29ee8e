//! CLI argument parsing for the playbook manager

use clap::{Parser, Subcommand};

/// Browse playbook chapters and run RACI certification quizzes
#[derive(Parser, Debug)]
#[command(name = "playbook-manager", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List playbook files in a directory
    List {
        /// Directory to scan for playbook YAML files
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
    /// Show a playbook's chapters with completion and lock state
    Chapters {
        /// Path to the playbook YAML file
        #[arg(short, long)]
        playbook: String,
        /// Completion ledger file (defaults to ~/.playbook-manager/completions.json)
        #[arg(long)]
        ledger: Option<String>,
    },
    /// Generate a chapter quiz and print it or save it to a file
    Generate {
        /// Path to the playbook YAML file
        #[arg(short, long)]
        playbook: String,
        /// Chapter id to generate a quiz for
        #[arg(short, long)]
        chapter: String,
        /// Seed for deterministic generation
        #[arg(long)]
        seed: Option<u64>,
        /// Output file path (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Take a chapter quiz interactively and record the result
    Take {
        /// Path to the playbook YAML file
        #[arg(short, long)]
        playbook: String,
        /// Chapter id to take the quiz for
        #[arg(short, long)]
        chapter: String,
        /// Completion ledger file (defaults to ~/.playbook-manager/completions.json)
        #[arg(long)]
        ledger: Option<String>,
    },
    /// Generate quiz snapshot files for a playbook's chapters
    Bank {
        /// Path to the playbook YAML file
        #[arg(short, long)]
        playbook: String,
        /// Directory the quiz files are written to
        #[arg(short, long, default_value = "./QUIZZES")]
        output_dir: String,
        /// Number of chapters generated in parallel
        #[arg(long, default_value = "1")]
        batch_size: usize,
        /// Base seed for deterministic generation
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated chapter ids (all chapters when omitted)
        #[arg(long)]
        chapters: Option<String>,
    },
}

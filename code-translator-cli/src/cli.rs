//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const ENVIRONMENT_HELP: &str = "\
Environment:
  CODE_TRANSLATOR_ENGINE, CODE_TRANSLATOR_ENDPOINT, CODE_TRANSLATOR_API_KEY,
  CODE_TRANSLATOR_MODEL, CODE_TRANSLATOR_DB, CODE_TRANSLATOR_USER, RUST_LOG";

/// Translate source code between languages and manage your translation history
#[derive(Parser, Debug)]
#[command(name = "code-translator", version, about, after_help = ENVIRONMENT_HELP)]
pub struct Cli {
    /// Path to config file
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,

    /// Sign in as this user, overriding the configured one
    #[arg(long, value_name = "ID", global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List supported languages
    Languages,

    /// Translate a file (or stdin)
    Translate {
        /// Source language code
        #[arg(short, long, default_value_t)]
        from: String,

        /// Target language code
        #[arg(short, long, default_value_t)]
        to: String,

        /// Read from stdin when absent
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Copy the translation to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List your translation history
    History,

    /// Filter history by language or code
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Print a history record
    Show { id: String },

    /// Delete a history record
    Delete { id: String },

    /// Copy a record's output (or input) to the clipboard
    Copy {
        id: String,

        /// Copy the submitted source instead of the translation
        #[arg(long)]
        input: bool,
    },
}

//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vent")]
#[command(about = "Local-first note stash", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new stash
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Save a new entry
    Add {
        /// Entry text: a link, a snippet, anything on your mind
        text: String,

        /// Category label (repeatable)
        #[arg(short, long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,
    },

    /// List saved entries
    List {
        /// Case-insensitive text search
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only entries with this exact category
        #[arg(short, long, default_value = "")]
        category: String,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry in full
    Show {
        /// Entry id (see 'vent list')
        id: i64,
    },

    /// Delete an entry
    Delete {
        /// Entry id (see 'vent list')
        id: i64,
    },

    /// List all categories in use
    Categories,

    /// Report estimated storage usage
    Storage,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

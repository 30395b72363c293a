//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zenith")]
#[command(about = "Terminal personal wellbeing client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

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

    /// Add a journal record
    Add {
        /// Record title
        title: String,

        /// Record body
        #[arg(short, long, default_value = "")]
        content: String,

        /// Emotion name (see 'zenith emotions')
        #[arg(short, long)]
        emotion: Option<String>,
    },

    /// List journal records, newest first
    List,

    /// Delete a journal record by id
    Delete {
        /// Record id (see 'zenith list')
        id: String,
    },

    /// List the emotion catalog
    Emotions,

    /// Show wellbeing tips
    Tips,

    /// Show the emotion calendar for a month
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        #[arg(value_name = "MONTH")]
        month: Option<String>,
    },

    /// Run a guided breathing session
    Breathe {
        /// Session length in seconds (default: configured breathing_secs)
        seconds: Option<u32>,
    },
}

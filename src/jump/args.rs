use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jump")]
#[command(about = "Jump to frecently visited directories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// State directory (overrides $JUMP_HOME and the default location)
    #[arg(long = "dir", id = "state_dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a visit to a directory (called by the shell on every cd)
    Chdir {
        /// Directory that was entered (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// List tracked directories, best first
    Top {
        /// Show the score and last visit next to each path
        #[arg(short, long)]
        scores: bool,
    },

    /// Print the best directory for a query
    #[command(alias = "j")]
    Cd {
        /// Search terms, matched in order against the path
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Pin a directory under a name
    Pin {
        /// Name of the pin
        name: String,

        /// Directory to pin (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Remove a pin
    Unpin {
        /// Name of the pin
        name: String,
    },

    /// List all pins
    Pins,

    /// Stop tracking a directory
    Forget {
        /// Directory to forget (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Remove tracked directories that no longer exist
    Clean,
}

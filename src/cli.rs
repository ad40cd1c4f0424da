use crate::secret::ExpirationChoice;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stash")]
#[command(about = "Label a secret, pick when it expires, and hand it off as JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the save dialog (default)
    Save {
        /// Initial secret value
        value: Option<String>,

        /// Read the initial value from standard input
        #[arg(long, conflicts_with = "value")]
        stdin: bool,
    },
    /// Print when a secret saved now would expire
    Expiry {
        /// hour, day, week, month or year
        choice: ExpirationChoice,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Save {
            value: None,
            stdin: false,
        }
    }
}

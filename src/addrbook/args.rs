use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "In-memory contact address book with phone validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demonstration sequence (the default)
    Demo,

    /// Check phone numbers against the configured phone check
    #[command(alias = "check")]
    Validate {
        /// Phone numbers to check
        #[arg(required = true, num_args = 1..)]
        phones: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., phone-check)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

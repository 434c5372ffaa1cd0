use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carpark")]
#[command(about = "Car park occupancy and fee tracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the data file and config (defaults to the user data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enter the car park
    #[command(alias = "in")]
    Enter {
        /// Vehicle registration number, e.g. "LM55 TCU"
        registration: String,
    },

    /// Exit the car park
    #[command(alias = "out")]
    Exit {
        /// Vehicle registration number used at entry
        registration: String,
    },

    /// View available parking spaces
    #[command(alias = "free")]
    Spaces,

    /// Query a parking record by ticket number
    #[command(alias = "q")]
    Query {
        /// Ticket number issued at entry
        ticket: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (capacity, hourly-rate)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

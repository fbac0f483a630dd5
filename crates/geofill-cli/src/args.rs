use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for geofill
#[derive(Debug, Parser)]
#[command(
    name = "geofill",
    version,
    about = "Query a geocoding provider the way the address autocomplete field does"
)]
pub struct CliArgs {
    /// Country filter sent with every lookup (default: ae)
    #[arg(short = 'c', long = "country", global = true)]
    pub country: Option<String>,

    /// Provider search endpoint (default: Nominatim)
    #[arg(short = 'e', long = "endpoint", global = true)]
    pub endpoint: Option<String>,

    /// Drop replies that are not for the most recently issued lookup
    #[arg(long = "last-issued", global = true)]
    pub last_issued: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the request URL for a query
    Url {
        /// Free-text address query
        query: String,
    },

    /// Run one lookup and print the candidates
    Search {
        /// Free-text address query (at least 3 characters)
        query: String,
    },

    /// Replay typed text through the widget and commit a suggestion
    Replay {
        /// Successive input snapshots, e.g. D Du Dub
        #[arg(required = true)]
        keystrokes: Vec<String>,

        /// ArrowDown presses before Enter
        #[arg(short = 'd', long = "down", default_value_t = 1)]
        down: usize,

        /// Value the host holds before typing starts
        #[arg(long = "initial")]
        initial: Option<String>,
    },
}

use crate::export::ExportFormat;
use crate::grid::{FilterOption, SortDirection};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tsgrid
/// Terminal grid for timestamped records with an in-range date-time filter
#[derive(Parser)]
#[command(
    name = "tsgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter and sort timestamped records by a date-time range",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that builds a filtered view.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Dataset to load (.json or .csv); defaults to `data_file` from the config
    #[arg(long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Filter option applied to the event timestamp column
    #[arg(long = "filter", value_enum, default_value = "in-range")]
    pub filter: FilterOption,

    /// Start boundary (YYYY-MM-DDTHH:MM[:SS]), local wall-clock time
    #[arg(long = "from", value_name = "DATETIME")]
    pub from: Option<String>,

    /// End boundary for in-range filtering
    #[arg(long = "to", value_name = "DATETIME")]
    pub to: Option<String>,

    /// Keep rows equal to either range bound
    #[arg(long = "inclusive")]
    pub inclusive: bool,

    /// Timezone for wall-clock values: local, utc or an offset like +02:00
    #[arg(long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Sort by event timestamp
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortDirection>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// List the rows visible under the given filter
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Compare a filter boundary with a stored timestamp (-1, 0 or 1)
    Compare {
        /// Filter boundary (wall-clock time)
        boundary: String,

        /// Stored cell value (may end with a UTC marker)
        cell: String,

        #[arg(long = "tz", value_name = "ZONE")]
        tz: Option<String>,
    },

    /// Export the rows visible under the given filter
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

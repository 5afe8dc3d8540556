use crate::provider::SortDirection;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bluebird
/// Track nesting boxes and the observations recorded at each visit
#[derive(Parser)]
#[command(
    name = "bluebird",
    version = env!("CARGO_PKG_VERSION"),
    about = "Nesting-box monitoring: record boxes and observations in a local SQLite store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage the database (integrity checks, info, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operation journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Print the MIME type of a resource URI
    Type {
        /// Resource URI (content://bluebird.tracking.data/...)
        uri: String,
    },

    /// Query rows through a resource URI
    Query {
        uri: String,

        #[arg(long, value_delimiter = ',', help = "Columns to return (comma separated)")]
        columns: Vec<String>,

        #[arg(long = "where", help = "Extra predicate, with ? placeholders")]
        selection: Option<String>,

        #[arg(long = "arg", help = "Value for a ? placeholder (repeatable)")]
        args: Vec<String>,

        #[arg(long, value_enum, help = "Direction of the primary sort key")]
        sort: Option<SortDirection>,

        #[arg(long, help = "Print rows as JSON")]
        json: bool,
    },

    /// Insert a row through a collection URI
    Insert {
        uri: String,

        #[arg(long = "set", required = true, help = "column=value (repeatable)")]
        set: Vec<String>,
    },

    /// Update rows through a resource URI
    Update {
        uri: String,

        #[arg(long = "set", required = true, help = "column=value (repeatable)")]
        set: Vec<String>,

        #[arg(long = "where", help = "Predicate, ignored for single-item URIs")]
        selection: Option<String>,

        #[arg(long = "arg", help = "Value for a ? placeholder (repeatable)")]
        args: Vec<String>,
    },

    /// Delete rows through a resource URI
    Delete {
        uri: String,

        #[arg(long = "where", help = "Predicate, ignored for single-item URIs")]
        selection: Option<String>,

        #[arg(long = "arg", help = "Value for a ? placeholder (repeatable)")]
        args: Vec<String>,
    },

    /// Manage nesting boxes
    Box {
        #[command(subcommand)]
        action: BoxAction,
    },

    /// Manage observations
    Obs {
        #[command(subcommand)]
        action: ObsAction,
    },
}

#[derive(Subcommand)]
pub enum BoxAction {
    /// Add a box
    Add {
        /// Label painted on the box
        number: String,
    },

    /// List every box
    List,

    /// Show a box and its observations, newest first
    Show { id: i64 },
}

#[derive(Subcommand)]
pub enum ObsAction {
    /// Record a visit to a box
    Add {
        #[arg(long = "box", help = "Id of the box visited")]
        box_id: i64,

        #[arg(long, help = "Date of the visit (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long)]
        problem: Option<String>,

        #[arg(long)]
        laid: Option<i64>,

        #[arg(long)]
        missing: Option<i64>,

        #[arg(long)]
        destroyed: Option<i64>,

        #[arg(long = "non-viable")]
        non_viable: Option<i64>,
    },
}

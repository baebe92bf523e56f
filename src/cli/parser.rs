use clap::{Parser, Subcommand};

/// Command-line interface definition for wh
/// CLI application to track work days and work periods with SQLite
#[derive(Parser)]
#[command(
    name = "wh",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work hours: work days, work periods, time remaining and estimated finish",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostics on stderr (WH_LOG overrides the level)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new work day
    Add {
        /// Date of the work day (YYYY-MM-DD), today when omitted
        date: Option<String>,

        #[arg(short = 'l', long = "length", help = "Work day length (e.g. 4h30m)")]
        length: Option<String>,

        #[arg(short = 'n', long = "note", help = "Work day note")]
        note: Option<String>,
    },

    /// Start tracking work hours
    Start {
        /// Start time: HH:MM, or relative to now (1h30m, -15m)
        #[arg(allow_hyphen_values = true)]
        time: Option<String>,

        #[arg(
            short = 'l',
            long = "length",
            help = "Work day length (e.g. 4h30m), when the day is created"
        )]
        length: Option<String>,

        #[arg(short = 'n', long = "note", help = "Work period note")]
        note: Option<String>,

        #[arg(
            short = 'd',
            long = "day-note",
            help = "Work day note, when the day is created"
        )]
        day_note: Option<String>,
    },

    /// Stop tracking work hours
    Stop {
        /// End time: HH:MM, or relative to now (1h30m, -15m)
        #[arg(allow_hyphen_values = true)]
        time: Option<String>,

        #[arg(short = 'n', long = "note", help = "Work period note")]
        note: Option<String>,
    },

    /// Show details about a work day
    Show {
        /// Date of the work day (YYYY-MM-DD)
        date: String,
    },
}

use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetrack
#[derive(Parser)]
#[command(
    name = "rtimetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily activities, aggregate durations and compare them with a work schedule",
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

    /// Start the REST server
    Serve {
        #[arg(long = "bind", help = "Address to listen on (default: bind_address from config)")]
        bind: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Log an activity for a user
    Add {
        /// User id
        user: i64,

        /// Activity label (BREAK / DAY_END are markers)
        label: String,

        #[arg(long = "date", help = "Day of the activity (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Clock time (HH:MM, default: now)")]
        at: Option<String>,
    },

    /// List the raw activities of a day, most recent first
    List {
        /// User id
        user: i64,

        #[arg(long = "date", help = "Day to list (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Show per-activity totals and the delta against the schedule
    Report {
        /// User id
        user: i64,

        #[arg(long = "date", help = "Day to report (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "now", help = "Evaluate the schedule up to this clock time (HH:MM)")]
        now: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user
    Add { username: String, password: String },
}

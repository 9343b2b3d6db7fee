use crate::cli::commands::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtimebalance
/// CLI punch clock to track working hours and compute time balances
#[derive(Parser)]
#[command(
    name = "rtimebalance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch-clock CLI: track working hours, waive days, and compute time balances",
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

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid fields")]
        check: bool,
    },

    /// Record the current time as the next punch of today
    Punch,

    /// Replace the punch sequence of a day
    Add {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Alternating begin/end punch times (HH:MM), in order
        #[arg(required = true)]
        times: Vec<String>,
    },

    /// Waive a day (holiday, PTO) with a fixed hour credit
    Waive {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        #[arg(long = "reason", help = "Why the day is waived", default_value = "")]
        reason: String,

        #[arg(long = "hours", help = "Hour credit for the day (HH:MM)")]
        hours: Option<String>,

        #[arg(long = "remove", help = "Remove an existing waiver instead")]
        remove: bool,
    },

    /// Delete the punch sequence of a day
    Del {
        /// Date of the day (YYYY-MM-DD)
        date: String,
    },

    /// List days with punches, totals and balances
    List {
        #[arg(
            long = "period",
            help = "Period to list: YYYY, YYYY-MM, YYYY-MM-DD, or start:end"
        )]
        period: Option<String>,

        #[arg(long = "now", help = "List only today")]
        now: bool,

        #[arg(long = "all", help = "Include non-working days")]
        all: bool,
    },

    /// Show month balance, all-time balance and today's leave-by time
    Balance {
        #[arg(long = "month", help = "Month to balance (YYYY-MM), default current")]
        month: Option<String>,
    },

    /// Export the whole store to a file
    Export {
        /// Destination file
        file: String,

        #[arg(long = "format", value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Import entries from a JSON export file
    Import {
        /// Source file
        file: String,
    },

    /// Copy the database to a backup file
    Backup {
        /// Destination file
        dest: String,

        #[arg(long = "compress", help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(long = "force", help = "Overwrite the destination if it exists")]
        force: bool,
    },
}

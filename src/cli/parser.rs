use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Cravings Coach
/// CLI application to log cravings and healthier alternatives with SQLite
#[derive(Parser)]
#[command(
    name = "cravings",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log food cravings, pick a healthier alternative and review your progress",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage the database (migrations, integrity checks, info)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Type a craving without submitting it yet
    Draft {
        /// Draft text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Log a craving (uses the draft when no text is given)
    Crave {
        /// What are you craving?
        text: Vec<String>,
    },

    /// Show the alternatives for the current craving
    Suggest,

    /// Record what you did about the current craving
    Choose {
        /// Free-text action, or the text for "Other" when used with --pick
        action: Vec<String>,

        #[arg(long, short, help = "Pick a suggested alternative by its number")]
        pick: Option<usize>,

        #[arg(long, help = "You ate the craved item after all")]
        ate: bool,
    },

    /// Discard the current craving without saving it
    Cancel,

    /// Clear the draft input
    Clear,

    /// Show the current session
    Status,

    /// List logged cravings, newest first
    History {
        #[arg(long, short, help = "Number of rows to show (default from config)")]
        limit: Option<usize>,

        #[arg(long, conflicts_with = "limit", help = "Show every row")]
        all: bool,
    },

    /// Totals, success rate and hour-of-day breakdown
    Insights,

    /// Create an account and sign in
    Register {
        email: String,

        #[arg(long, help = "Password (prompted when omitted; the prompt echoes input)")]
        password: Option<String>,

        #[arg(long, help = "Password confirmation (prompted when omitted; the prompt echoes input)")]
        confirm: Option<String>,
    },

    /// Sign in with email and password
    Login {
        email: String,

        #[arg(long, help = "Password (prompted when omitted; the prompt echoes input)")]
        password: Option<String>,
    },

    /// Sign out of the current session
    Logout,

    /// Export your craving history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

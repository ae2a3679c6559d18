use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A timesheet CLI: record regular and overtime hours and compute gross/net earnings",
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record hours for a day (a value of 0 clears that field)
    Set {
        /// Date of the entry (YYYY-MM-DD or "today")
        date: String,

        #[arg(long = "normal", allow_hyphen_values = true, help = "Regular hours")]
        normal: Option<String>,

        #[arg(long = "ot50", allow_hyphen_values = true, help = "Overtime hours paid at 1.5x")]
        ot50: Option<String>,

        #[arg(long = "ot100", allow_hyphen_values = true, help = "Overtime hours paid at 2.0x")]
        ot100: Option<String>,
    },

    /// Set the hourly rate
    Rate {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Set the flat tax rate in percent (0-100)
    Tax {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Set the currency used to display amounts
    Currency {
        #[arg(value_parser = PossibleValuesParser::new(crate::models::Currency::codes()))]
        code: String,
    },

    /// List the supported currencies
    Currencies,

    /// Show a week with its hours and the week/month/year earnings
    Week {
        #[arg(long, short, help = "Any date inside the week (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(
            long,
            short,
            default_value_t = 0,
            allow_hyphen_values = true,
            help = "Weeks to move from the selected one (-1 = previous, 1 = next)"
        )]
        offset: i64,
    },

    /// Export all data to a JSON file
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: timesheet-data.json)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Replace all data with the content of a JSON file
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Delete ALL saved data and reset the settings
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

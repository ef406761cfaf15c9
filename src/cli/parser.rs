use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stundenzettel:
/// a CLI timesheet tracking work, vacation, sick and on-call days.
#[derive(Parser)]
#[command(
    name = "stundenzettel",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: record daily entries and calculate overtime using SQLite",
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

    /// Add a day entry (work, Urlaub, Krank, Bereitschaft or Pause)
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Location text; the reserved words Urlaub/Krank/Bereitschaft/Pause
        /// mark special days, anything else is a regular work location
        location: String,

        /// Start time (HH:MM), required for regular entries
        #[arg(long = "in")]
        start: Option<String>,

        /// End time (HH:MM), required for regular entries
        #[arg(long = "out")]
        end: Option<String>,

        /// Mark a sick day as child-sick
        #[arg(long = "child-sick")]
        child_sick: bool,

        /// On-call deployment as LOCATION,HH:MM,HH:MM (repeatable)
        #[arg(long = "deployment", value_name = "SPEC")]
        deployments: Vec<String>,
    },

    /// Edit an existing entry by id
    Edit {
        /// Entry id
        id: i64,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "location", help = "New location text")]
        location: Option<String>,

        #[arg(long = "in", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "child-sick", help = "Set or clear the child-sick flag")]
        child_sick: Option<bool>,

        /// Replace the deployment list (repeatable); see `add`
        #[arg(long = "deployment", value_name = "SPEC")]
        deployments: Vec<String>,

        /// Remove all deployments
        #[arg(long = "clear-deployments", conflicts_with = "deployments")]
        clear_deployments: bool,
    },

    /// Delete an entry by id
    Del {
        id: i64,
    },

    /// List entries in display order
    List {
        #[arg(long, short, help = "Filter by period: YYYY, YYYY-MM or YYYY-MM-DD")]
        period: Option<String>,
    },

    /// Show overtime and day-count summary
    Summary {
        #[arg(long, value_name = "YYYY-MM", help = "Month for the current-month figure (default: this month)")]
        month: Option<String>,
    },

    /// Show or change configuration and document settings
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "name", help = "Set the employee name")]
        name: Option<String>,

        #[arg(
            long = "base-overtime",
            allow_hyphen_values = true,
            help = "Set the baseline overtime correction in hours (may be negative)"
        )]
        base_overtime: Option<f64>,

        #[arg(long = "locations", help = "Print the saved work locations")]
        locations: bool,
    },

    /// Export the document (JSON), the entry table (CSV) or the report (PDF)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default derived from month)")]
        file: Option<String>,

        #[arg(long, value_name = "YYYY-MM", help = "Report month (default: this month)")]
        month: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import a JSON document, replacing the current one
    Import {
        /// Path of the JSON file to import
        file: String,

        #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
        force: bool,
    },

    /// Bundle report + document into a zip for handoff
    Share {
        #[arg(long, value_name = "DIR")]
        dir: String,

        #[arg(long, value_name = "YYYY-MM", help = "Report month (default: this month)")]
        month: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing bundle without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Clear all entries, or reset the whole document
    Reset {
        #[arg(long = "entries-only", help = "Clear entries but keep settings and saved locations")]
        entries_only: bool,
    },
}

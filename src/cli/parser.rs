use crate::models::document::LayoutStyle;
use crate::models::markdown::FontFamily;
use clap::{Parser, Subcommand};

/// Command-line interface definition for taskdiary:
/// turn daily-task spreadsheets into a paginated diary document model.
#[derive(Parser)]
#[command(
    name = "taskdiary",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build a paginated diary document model from daily-task spreadsheets with markdown notes",
    long_about = None
)]
pub struct Cli {
    /// Override the state store path (useful for tests or custom setups)
    #[arg(global = true, long = "state")]
    pub state: Option<String>,

    /// Enable diagnostic logging
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default files
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Record the user details printed on the cover page
    User {
        #[arg(long, help = "Full name")]
        name: Option<String>,

        #[arg(long = "id-no", help = "ID number (also used for the output filename)")]
        id_no: Option<String>,

        #[arg(long = "ip-station", help = "IP station")]
        ip_station: Option<String>,

        #[arg(long, help = "Internship start date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Internship end date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "faculty-mentor", help = "Faculty mentor name")]
        faculty_mentor: Option<String>,

        #[arg(long = "company-mentor", help = "Company mentor name")]
        company_mentor: Option<String>,
    },

    /// Ingest a daily-task spreadsheet (csv, xls or xlsx)
    Load {
        /// Path of the spreadsheet file
        file: String,
    },

    /// Fetch a published spreadsheet's CSV export
    Fetch {
        /// Spreadsheet link; defaults to the last fetched one
        url: Option<String>,
    },

    /// Replace the task text behind a content page
    Edit {
        /// Content page number (1-based, as shown by preview)
        page: usize,

        /// New markdown task text
        task: String,
    },

    /// Show the assembled document in the terminal
    Preview {
        /// Page number to show in full; omit for the page inventory
        page: Option<usize>,
    },

    /// Assemble the document model and write it as JSON
    Build {
        #[arg(long = "out", help = "Output file (default: derived from the user id)")]
        out: Option<String>,

        #[arg(long, value_enum, help = "Font family for the document body")]
        font: Option<FontFamily>,

        #[arg(long, value_enum, help = "Layout style (page position presets)")]
        layout: Option<LayoutStyle>,

        #[arg(long, help = "Overwrite the output file if it exists")]
        force: bool,
    },
}

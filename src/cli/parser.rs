use crate::export::ExportFormat;
use crate::models::category::Category;
use crate::models::priority::Priority;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rcalendar
#[derive(Parser)]
#[command(
    name = "rcalendar",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal calendar manager: sorted events, filters, search and CSV export",
    long_about = None
)]
pub struct Cli {
    /// Override the calendar data file
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Use a configuration file other than the default one
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// Disable ANSI colors in the output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty calendar
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Add a new event
    Add {
        /// Date of the event (YYYY-MM-DD or DD/MM/YYYY)
        date: String,

        /// Start time (HH:MM, 24h)
        #[arg(long, conflicts_with = "all_day", required_unless_present = "all_day")]
        time: Option<String>,

        /// Mark the event as lasting all day
        #[arg(long = "all-day")]
        all_day: bool,

        /// Event description (max 99 characters, longer text is cut)
        #[arg(long = "desc", short = 'd')]
        desc: String,

        #[arg(long, short = 'p', value_enum, ignore_case = true, default_value = "medium")]
        priority: Priority,

        #[arg(long, short = 'c', value_enum, ignore_case = true, default_value = "other")]
        category: Category,
    },

    /// List events, optionally filtered (at most one filter)
    List {
        #[arg(long, group = "filter", help = "Only today's events")]
        today: bool,

        #[arg(
            long,
            group = "filter",
            value_parser = clap::value_parser!(i32).range(1..=12),
            help = "Events in this month (1-12) of any year"
        )]
        month: Option<i32>,

        #[arg(long, group = "filter", value_enum, ignore_case = true)]
        category: Option<Category>,

        #[arg(long, group = "filter", value_enum, ignore_case = true)]
        priority: Option<Priority>,

        #[arg(
            long,
            group = "filter",
            num_args = 0..=1,
            value_name = "DAYS",
            value_parser = clap::value_parser!(u32).range(1..=365),
            help = "Events from today through the next DAYS days (default from config)"
        )]
        upcoming: Option<Option<u32>>,

        #[arg(long, group = "filter", requires = "to", value_name = "DATE")]
        from: Option<String>,

        #[arg(long, requires = "from", value_name = "DATE")]
        to: Option<String>,

        #[arg(long, short = 'k', group = "filter", help = "Case-insensitive search in descriptions")]
        keyword: Option<String>,
    },

    /// Edit description, priority or category of an event
    Edit {
        id: i32,

        /// New description (omit to keep the current one)
        #[arg(long = "desc", short = 'd')]
        desc: Option<String>,

        #[arg(long, short = 'p', value_enum, ignore_case = true)]
        priority: Option<Priority>,

        #[arg(long, short = 'c', value_enum, ignore_case = true)]
        category: Option<Category>,
    },

    /// Delete an event by ID
    Del {
        id: i32,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show event counts per priority and category
    Stats,

    /// Export all events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default from config)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}

//! Command-line interface for helpdesk
//!
//! Each subcommand opens one dashboard over freshly seeded demo data, applies
//! the requested actions and prints the result.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "helpdesk")]
#[command(version)]
#[command(about = "Role-based issue desk for technicians, administrators and end users", long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to helpdesk.yaml in the config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the technician board
    #[command(visible_alias = "tech")]
    Technician {
        /// Filter by id, title or description (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Move a ticket forward, e.g. --set-status TK-001 in-progress
        #[arg(long, num_args = 2, value_names = ["ID", "STATUS"])]
        set_status: Vec<String>,

        /// Mark notifications as read
        #[arg(long)]
        clear_notifications: bool,

        /// Write the matching tickets to this CSV file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },

    /// Show the end-user dashboard, optionally submitting a ticket
    #[command(name = "enduser", visible_alias = "user")]
    EndUser {
        /// Title of the new ticket
        #[arg(short, long)]
        title: Option<String>,

        /// Description of the new ticket
        #[arg(short, long)]
        description: Option<String>,

        /// low, medium, high or urgent
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// onsite or remote
        #[arg(short, long, default_value = "onsite")]
        location: String,

        /// Affected device
        #[arg(long)]
        device: Option<String>,
    },

    /// Show analytics and the technician roster
    Admin {
        /// Export a report: tickets, performance or analytics
        #[arg(short, long, value_name = "KIND")]
        export: Option<String>,

        /// Write the exported CSV to this file
        #[arg(short, long, value_name = "FILE", requires = "export")]
        output: Option<PathBuf>,

        /// Show the report for one technician (name, email or id)
        #[arg(long)]
        technician: Option<String>,
    },

    /// Run the notification feed and print alerts as they arrive
    Watch {
        /// Stop after this many ticks
        #[arg(long, default_value_t = 6)]
        ticks: u32,

        /// Tick interval in milliseconds (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Chance per tick of a new alert (overrides config)
        #[arg(long)]
        probability: Option<f64>,
    },

    /// Interactive session with role switching
    Shell,

    /// Print the effective configuration
    Config,
}

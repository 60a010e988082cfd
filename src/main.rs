//! helpdesk - Role-based issue desk
//!
//! This is the main entry point for the helpdesk CLI application.
//! It handles command-line argument parsing and dispatches to the appropriate
//! command handlers.

use clap::Parser;
use helpdesk::cli::handlers::{
    HandlerContext, SubmitParams, WatchParams, handle_admin_command, handle_config_command,
    handle_end_user_command, handle_shell_command, handle_technician_command,
    handle_watch_command,
};
use helpdesk::cli::{Cli, Commands, OutputFormatter};
use helpdesk::config::Config;
use helpdesk::error::{HelpdeskError, Result};
use std::process;
use tracing_subscriber::EnvFilter;

/// Main entry point for the helpdesk CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any error that occurs during command execution
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    if !config.output.color {
        formatter.disable_color();
    }
    tracing::debug!(?config, "configuration loaded");

    let mut ctx = HandlerContext::new(config)?;
    dispatch_command(cli.command, &mut ctx, formatter)
}

/// Logs go to stderr so JSON on stdout stays parseable
fn init_logging(verbose: bool) {
    let filter = if verbose {
        Some(EnvFilter::new("helpdesk=debug"))
    } else {
        EnvFilter::try_from_default_env().ok()
    };

    if let Some(filter) = filter {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

fn dispatch_command(
    command: Commands,
    ctx: &mut HandlerContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Technician {
            search,
            set_status,
            clear_notifications,
            export,
        } => handle_technician_command(
            search.as_deref(),
            &set_status,
            clear_notifications,
            export.as_deref(),
            ctx,
            formatter,
        ),
        Commands::EndUser {
            title,
            description,
            priority,
            location,
            device,
        } => handle_end_user_command(
            SubmitParams {
                title,
                description,
                priority,
                location,
                device,
            },
            ctx,
            formatter,
        ),
        Commands::Admin {
            export,
            output,
            technician,
        } => handle_admin_command(
            export.as_deref(),
            output.as_deref(),
            technician.as_deref(),
            ctx,
            formatter,
        ),
        Commands::Watch {
            ticks,
            interval_ms,
            probability,
        } => handle_watch_command(
            WatchParams {
                ticks,
                interval_ms,
                probability,
            },
            ctx,
            formatter,
        ),
        Commands::Shell => handle_shell_command(ctx, formatter),
        Commands::Config => handle_config_command(ctx, formatter),
    }
}

/// Handle errors and display them to the user
///
/// This function formats errors in a user-friendly way, including:
/// - The main error message
/// - Any suggestions for fixing the error
/// - Additional context in verbose mode
fn handle_error(error: &HelpdeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() && !formatter.is_json() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    // In JSON mode, output error as JSON
    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "error_type": format!("{:?}", error),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    // In verbose mode, show the full error chain
    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

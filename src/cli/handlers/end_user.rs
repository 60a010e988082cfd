//! Handler for the `enduser` command
//!
//! Submits a new ticket when a title or description is given, then lists
//! the tickets the end user has reported.

use super::common::{HandlerContext, ticket_detail, ticket_line};
use crate::cli::OutputFormatter;
use crate::core::{Location, Priority};
use crate::error::Result;
use crate::views::{EndUserAction, EndUserView};

/// Fields of the "Submit New Ticket" form as given on the command line
#[derive(Debug, Default)]
pub struct SubmitParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: String,
    pub location: String,
    pub device: Option<String>,
}

impl SubmitParams {
    /// Whether the user asked to submit anything at all
    pub const fn wants_submit(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

/// Handler for the `enduser` command
///
/// # Errors
///
/// Returns a validation error naming the missing fields when only one of
/// title and description is given. Nothing is added in that case.
pub fn handle_end_user_command(
    params: SubmitParams,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let view = &mut ctx.desk.end_user;

    if params.wants_submit() {
        let priority: Priority = params.priority.parse()?;
        let location: Location = params.location.parse()?;

        let actions = [
            EndUserAction::SetTitle(params.title.unwrap_or_default()),
            EndUserAction::SetDescription(params.description.unwrap_or_default()),
            EndUserAction::SetPriority(priority),
            EndUserAction::SetLocation(location),
            EndUserAction::SetDevice(params.device),
            EndUserAction::Submit,
        ];
        for action in actions {
            if let Some(toast) = view.apply(action)? {
                output.toast(&toast);
            }
        }
    }

    if output.is_json() {
        output_json(view, output)
    } else {
        output_text(view, output);
        Ok(())
    }
}

fn output_json(view: &EndUserView, output: &OutputFormatter) -> Result<()> {
    let stats = view.stats();
    let tickets: Vec<_> = view.tickets().iter().collect();
    output.print_json(&serde_json::json!({
        "user": view.user(),
        "stats": {
            "total": stats.total,
            "open": stats.open,
            "in_progress": stats.in_progress,
            "resolved": stats.resolved,
        },
        "tickets": tickets,
    }))
}

pub(super) fn output_text(view: &EndUserView, output: &OutputFormatter) {
    output.heading(&format!("My Tickets - {}", view.user()));

    let stats = view.stats();
    output.info(&format!(
        "Total: {}   Open: {}   In Progress: {}   Resolved: {}",
        stats.total, stats.open, stats.in_progress, stats.resolved
    ));
    output.info("");

    if view.tickets().is_empty() {
        output.info("You have not submitted any tickets yet");
        return;
    }
    for ticket in view.tickets() {
        output.info(&ticket_line(ticket));
        output.info(&ticket_detail(ticket));
    }
}

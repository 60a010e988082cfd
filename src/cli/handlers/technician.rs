//! Handler for the `technician` command
//!
//! Applies the requested status changes and search to the technician
//! dashboard, then prints the board split into workflow columns.

use super::common::{HandlerContext, parse_status_changes, ticket_detail, ticket_line};
use crate::cli::OutputFormatter;
use crate::core::{Status, StatusBoard, TicketStats};
use crate::error::Result;
use crate::export::tickets_csv;
use crate::views::{TechnicianAction, TechnicianView};
use std::path::Path;

/// Handler for the `technician` command
///
/// Status changes are applied in order. The first one that fails aborts the
/// command; changes already applied are still shown in the error output.
/// The export holds the tickets matching the search, after all changes.
pub fn handle_technician_command(
    search: Option<&str>,
    set_status: &[String],
    clear_notifications: bool,
    export: Option<&Path>,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let changes = parse_status_changes(set_status)?;
    let view = &mut ctx.desk.technician;

    for (id, status) in changes {
        if let Some(toast) = view.apply(TechnicianAction::ChangeStatus { id, status })? {
            output.toast(&toast);
        }
    }

    if clear_notifications {
        view.apply(TechnicianAction::ClearNotifications)?;
    }
    if let Some(term) = search {
        view.apply(TechnicianAction::Search(term.to_string()))?;
    }
    if let Some(path) = export {
        export_tickets(view, path, output)?;
    }

    if output.is_json() {
        output_json(view, output)
    } else {
        output_text(view, output);
        Ok(())
    }
}

fn export_tickets(view: &TechnicianView, path: &Path, output: &OutputFormatter) -> Result<()> {
    let tickets = view.filtered();
    std::fs::write(path, tickets_csv(&tickets)?)?;
    tracing::info!(path = %path.display(), rows = tickets.len(), "tickets exported");
    output.success(&format!("Wrote {} tickets to {}", tickets.len(), path.display()));
    Ok(())
}

fn output_json(view: &TechnicianView, output: &OutputFormatter) -> Result<()> {
    let board = view.board();
    output.print_json(&serde_json::json!({
        "technician": view.technician(),
        "search": view.search_term(),
        "notifications": view.notifications(),
        "my_tickets": view.my_ticket_count(),
        "stats": stats_json(&view.stats()),
        "board": {
            "open": board.open,
            "in_progress": board.in_progress,
            "resolved": board.resolved,
        },
    }))
}

fn stats_json(stats: &TicketStats) -> serde_json::Value {
    serde_json::json!({
        "total": stats.total,
        "open": stats.open,
        "in_progress": stats.in_progress,
        "resolved": stats.resolved,
    })
}

pub(super) fn output_text(view: &TechnicianView, output: &OutputFormatter) {
    output.heading(&format!("Technician Dashboard - {}", view.technician()));
    output.info(&format!(
        "Notifications: {}   My Tickets: {}",
        view.notifications(),
        view.my_ticket_count()
    ));

    let stats = view.stats();
    output.info(&format!(
        "Open: {}   In Progress: {}   Resolved: {}   Total: {}",
        stats.open, stats.in_progress, stats.resolved, stats.total
    ));
    output.info("");

    let board = view.board();
    if board.is_empty() && !view.search_term().is_empty() {
        output.warning(&format!("No tickets match '{}'", view.search_term()));
        return;
    }

    display_board(&board, output);
}

fn display_board(board: &StatusBoard<'_>, output: &OutputFormatter) {
    for status in Status::ALL {
        let column = board.column(status);
        output.info(&format!("{} ({})", column_title(status), column.len()));
        if column.is_empty() {
            output.info("  -");
        }
        for ticket in column {
            output.info(&format!("  {}", ticket_line(ticket)));
            output.info(&ticket_detail(ticket));
        }
        output.info("");
    }
}

const fn column_title(status: Status) -> &'static str {
    match status {
        Status::Open => "Open",
        Status::InProgress => "In Progress",
        Status::Resolved => "Resolved",
    }
}

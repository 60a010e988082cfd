//! Handler for the `admin` command
//!
//! Prints the analytics summary and technician roster, optionally runs a
//! report export and writes the CSV to disk.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{Technician, TrendTotals};
use crate::error::Result;
use crate::export::{ExportKind, ExportReceipt};
use crate::views::AdminView;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Handler for the `admin` command
///
/// # Errors
///
/// Returns an error if the export kind or technician is unknown, or the
/// CSV cannot be written to `output_path`.
pub fn handle_admin_command(
    export: Option<&str>,
    output_path: Option<&Path>,
    technician: Option<&str>,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let view = &mut ctx.desk.admin;

    if let Some(query) = technician {
        view.select_technician(query)?;
    }

    let receipt = match export {
        Some(kind) => Some(run_export(view, kind.parse()?, output_path, output)?),
        None => None,
    };

    if output.is_json() {
        output_json(view, receipt.as_ref(), output)
    } else {
        output_text(view, output);
        Ok(())
    }
}

pub(super) fn run_export(
    view: &AdminView,
    kind: ExportKind,
    output_path: Option<&Path>,
    output: &OutputFormatter,
) -> Result<ExportReceipt> {
    let spinner = export_spinner(kind, output);
    let result = view.export(kind);
    spinner.finish_and_clear();
    let receipt = result?;

    output.success(&receipt.message);
    if let Some(path) = output_path {
        std::fs::write(path, &receipt.csv)?;
        tracing::info!(path = %path.display(), rows = receipt.rows, "export written");
        output.info(&format!("Wrote {} rows to {}", receipt.rows, path.display()));
    }
    Ok(receipt)
}

fn export_spinner(kind: ExportKind, output: &OutputFormatter) -> ProgressBar {
    if output.is_json() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/", "✓"])
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(format!("Exporting {kind} report..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn output_json(
    view: &AdminView,
    receipt: Option<&ExportReceipt>,
    output: &OutputFormatter,
) -> Result<()> {
    output.print_json(&serde_json::json!({
        "summary": view.summary(),
        "assigned_tickets": view.assigned_tickets(),
        "active_technicians": view.active_technicians(),
        "weekly": view.weekly_totals(),
        "trend": view.trend(),
        "priority_distribution": view.priority_distribution(),
        "roster": view.roster(),
        "selected_technician": view.selected_technician(),
        "export": receipt,
    }))
}

pub(super) fn output_text(view: &AdminView, output: &OutputFormatter) {
    output.heading("Administrator Dashboard");

    let summary = view.summary();
    output.info(&format!(
        "Total Tickets: {}   Avg Resolution: {}   Resolution Rate: {}%   Active Technicians: {}",
        summary.total_tickets,
        summary.avg_resolution,
        summary.resolution_rate,
        view.active_technicians()
    ));
    output.info("");

    display_trend(view, output);
    display_priorities(view, output);
    display_roster(view.roster(), output);

    if let Some(technician) = view.selected_technician() {
        output.info("");
        display_report(technician, output);
    }
}

fn display_trend(view: &AdminView, output: &OutputFormatter) {
    let totals = view.weekly_totals();
    output.info(&format!(
        "Weekly Trend (opened {}, resolved {})",
        totals.opened, totals.resolved
    ));
    let peak = TrendTotals::peak_day(view.trend()).map(|day| day.day.as_str());
    for day in view.trend() {
        let marker = if Some(day.day.as_str()) == peak { " <- peak" } else { "" };
        output.info(&format!(
            "  {:<4} {:>3} open  {:>3} resolved{marker}",
            day.day, day.open, day.resolved
        ));
    }
    output.info("");
}

fn display_priorities(view: &AdminView, output: &OutputFormatter) {
    output.info("Priority Distribution");
    for share in view.priority_distribution() {
        let bar = "█".repeat(usize::from(share.percent / 5));
        output.info(&format!(
            "  {:<7} {:>3}% {}",
            share.priority.as_str(),
            share.percent,
            bar.cyan()
        ));
    }
    output.info("");
}

fn display_roster(roster: &[Technician], output: &OutputFormatter) {
    output.info("Technician Roster");
    for technician in roster {
        let status = if technician.is_active() {
            technician.status.to_string().green()
        } else {
            technician.status.to_string().dimmed()
        };
        output.info(&format!(
            "  [{}] {:<14} {:<18} {:<8} {:>3} tickets  avg {}",
            technician.initials(),
            technician.name,
            technician.role,
            status,
            technician.tickets,
            technician.avg_resolution
        ));
    }
}

fn display_report(technician: &Technician, output: &OutputFormatter) {
    output.info(&format!("Report: {} <{}>", technician.name, technician.email));
    output.info(&format!("  Role: {}", technician.role));
    output.info(&format!("  Status: {}", technician.status));
    output.info(&format!("  Tickets handled: {}", technician.tickets));
    output.info(&format!("  Average resolution: {}", technician.avg_resolution));
}

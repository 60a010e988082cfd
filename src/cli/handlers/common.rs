use crate::config::Config;
use crate::core::{Priority, Status, SystemClock, Ticket, TicketId};
use crate::error::{HelpdeskError, Result};
use crate::views::Desk;
use colored::{ColoredString, Colorize};
use std::sync::Arc;

/// Common context for all handler operations
#[derive(Debug)]
pub struct HandlerContext {
    pub config: Config,
    pub desk: Desk,
}

impl HandlerContext {
    /// Seed a demo desk for the configured users on the system clock
    pub fn new(config: Config) -> Result<Self> {
        let desk = Desk::from_config(&config, Arc::new(SystemClock))?;
        Ok(Self { config, desk })
    }
}

/// Turn `--set-status ID STATUS` value pairs into typed changes
pub fn parse_status_changes(values: &[String]) -> Result<Vec<(TicketId, Status)>> {
    if values.len() % 2 != 0 {
        return Err(HelpdeskError::InvalidInput(
            "--set-status takes a ticket id and a status".to_string(),
        ));
    }

    values
        .chunks_exact(2)
        .map(|pair| Ok((TicketId::parse_str(&pair[0])?, pair[1].parse::<Status>()?)))
        .collect()
}

pub fn status_marker(status: Status) -> ColoredString {
    match status {
        Status::Open => "●".yellow(),
        Status::InProgress => "◐".blue(),
        Status::Resolved => "✓".green(),
    }
}

pub fn priority_label(priority: Priority) -> ColoredString {
    let label = priority.as_str();
    match priority {
        Priority::Low => label.dimmed(),
        Priority::Medium => label.normal(),
        Priority::High => label.yellow(),
        Priority::Urgent => label.red().bold(),
    }
}

/// One-line summary of a ticket for board and list output
pub fn ticket_line(ticket: &Ticket) -> String {
    let mut line = format!(
        "{} {} [{}] {}",
        status_marker(ticket.status),
        ticket.id.as_str().bold(),
        priority_label(ticket.priority),
        ticket.title
    );
    if let Some(device) = &ticket.device {
        line.push_str(&format!(" ({}, {device})", ticket.location));
    } else {
        line.push_str(&format!(" ({})", ticket.location));
    }
    line
}

/// Second line: who has it and when it last changed
pub fn ticket_detail(ticket: &Ticket) -> String {
    format!(
        "    {} | assigned: {} | updated {}",
        ticket.description,
        ticket.assignee_label(),
        ticket.last_updated.format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_changes() {
        let values = ["tk-001".to_string(), "in progress".to_string()];
        let changes = parse_status_changes(&values).unwrap();
        assert_eq!(changes, vec![(TicketId::from_number(1), Status::InProgress)]);
    }

    #[test]
    fn test_parse_status_changes_rejects_bad_input() {
        assert!(parse_status_changes(&["TK-001".to_string()]).is_err());
        assert!(parse_status_changes(&["TK-001".to_string(), "closed".to_string()]).is_err());
        assert!(parse_status_changes(&["ticket-1".to_string(), "open".to_string()]).is_err());
    }

    #[test]
    fn test_ticket_line_mentions_id_and_title() {
        colored::control::set_override(false);
        let ticket = crate::core::seed::technician_tickets("John Smith").remove(0);
        let line = ticket_line(&ticket);
        assert!(line.contains("TK-001"));
        assert!(line.contains("Computer won't start"));
        assert!(line.contains("[high]"));
    }
}

//! Search filtering, status partitioning and counters over a ticket collection

use super::{Status, Ticket};
use serde::Serialize;

/// Case-insensitive substring search over title, description and id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketSearch {
    needle: String,
}

impl TicketSearch {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.needle
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        ticket.matches_search(&self.needle)
    }

    /// Matching tickets in collection order
    pub fn apply<'a>(&self, tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<&'a Ticket> {
        tickets.into_iter().filter(|t| self.matches(t)).collect()
    }
}

/// Tickets grouped into the three workflow columns, each in collection order
#[derive(Debug, Default, Serialize)]
pub struct StatusBoard<'a> {
    pub open: Vec<&'a Ticket>,
    pub in_progress: Vec<&'a Ticket>,
    pub resolved: Vec<&'a Ticket>,
}

impl<'a> StatusBoard<'a> {
    pub fn partition(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut board = Self::default();
        for ticket in tickets {
            match ticket.status {
                Status::Open => board.open.push(ticket),
                Status::InProgress => board.in_progress.push(ticket),
                Status::Resolved => board.resolved.push(ticket),
            }
        }
        board
    }

    #[must_use]
    pub fn column(&self, status: Status) -> &[&'a Ticket] {
        match status {
            Status::Open => &self.open,
            Status::InProgress => &self.in_progress,
            Status::Resolved => &self.resolved,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len() + self.in_progress.len() + self.resolved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> TicketStats {
        TicketStats {
            total: self.len(),
            open: self.open.len(),
            in_progress: self.in_progress.len(),
            resolved: self.resolved.len(),
        }
    }
}

/// Per-status counts shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl TicketStats {
    pub fn collect<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut stats = Self::default();
        for ticket in tickets {
            stats.total += 1;
            match ticket.status {
                Status::Open => stats.open += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Resolved => stats.resolved += 1,
            }
        }
        stats
    }

    /// Tickets still needing work
    #[must_use]
    pub const fn active(&self) -> usize {
        self.open + self.in_progress
    }
}

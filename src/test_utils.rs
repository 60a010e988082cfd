//! Test utilities for helpdesk
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{ManualClock, Priority, Status, Ticket, TicketBuilder, TicketId};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

/// Fixed instant every fixture is stamped with
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap()
}

/// Manual clock starting at [`fixed_now`]
pub fn fixed_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(fixed_now()))
}

/// Create a test ticket numbered `TK-<number>`
pub fn create_test_ticket(number: u32, title: &str, priority: Priority, status: Status) -> Ticket {
    TicketBuilder::new()
        .id(TicketId::from_number(number))
        .title(title)
        .description(format!("Description for {title}"))
        .priority(priority)
        .status(status)
        .date_submitted(fixed_now())
        .build()
}

/// Assert that two tickets are equal (ignoring timestamps)
pub fn assert_tickets_equal(left: &Ticket, right: &Ticket) {
    assert_eq!(left.id, right.id, "Ticket IDs don't match");
    assert_eq!(left.title, right.title, "Ticket titles don't match");
    assert_eq!(
        left.description, right.description,
        "Ticket descriptions don't match"
    );
    assert_eq!(
        left.priority, right.priority,
        "Ticket priorities don't match"
    );
    assert_eq!(left.status, right.status, "Ticket statuses don't match");
    assert_eq!(
        left.assigned_to, right.assigned_to,
        "Ticket assignees don't match"
    );
}

/// Test data builder for complex scenarios
pub struct TestDataBuilder {
    tickets: Vec<Ticket>,
}

impl TestDataBuilder {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
        }
    }

    fn next_number(&self) -> u32 {
        u32::try_from(self.tickets.len()).unwrap() + 1
    }

    /// Add a ticket with specific properties
    pub fn with_ticket(mut self, title: &str, priority: Priority, status: Status) -> Self {
        let number = self.next_number();
        self.tickets
            .push(create_test_ticket(number, title, priority, status));
        self
    }

    /// Add multiple tickets with the same status
    pub fn with_tickets_in_status(mut self, status: Status, count: usize) -> Self {
        for i in 1..=count {
            let number = self.next_number();
            self.tickets.push(create_test_ticket(
                number,
                &format!("{status} ticket {i}"),
                Priority::Medium,
                status,
            ));
        }
        self
    }

    /// Build and return the tickets
    pub fn build(self) -> Vec<Ticket> {
        self.tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder() {
        let tickets = TestDataBuilder::new()
            .with_ticket("Bug fix", Priority::High, Status::Open)
            .with_tickets_in_status(Status::InProgress, 2)
            .build();

        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets[0].title, "Bug fix");
        assert_eq!(tickets[1].status, Status::InProgress);
        assert_eq!(tickets[2].id.as_str(), "TK-003");
    }

    #[test]
    fn test_fixture_timestamps_match() {
        let ticket = create_test_ticket(1, "Printer jam", Priority::Low, Status::Open);
        assert_eq!(ticket.date_submitted, fixed_now());
        assert_eq!(ticket.last_updated, ticket.date_submitted);
        assert_tickets_equal(&ticket, &ticket.clone());
    }
}

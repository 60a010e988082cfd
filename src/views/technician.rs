//! Technician dashboard: assigned tickets, search, status changes and the
//! notification counter

use super::Toast;
use crate::core::{Clock, Status, StatusBoard, Ticket, TicketId, TicketSearch, TicketStats, seed};
use crate::error::Result;
use crate::notify::{Notification, NotificationSource};
use crate::storage::{MemoryStorage, TicketRepository};
use std::sync::Arc;

/// Actions the technician dashboard reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechnicianAction {
    /// Replace the search term
    Search(String),
    /// Move a ticket forward in the workflow
    ChangeStatus { id: TicketId, status: Status },
    /// A notification arrived from the feed
    Notify(Notification),
    /// Mark all notifications as read
    ClearNotifications,
}

pub struct TechnicianView {
    technician: String,
    tickets: MemoryStorage,
    search: TicketSearch,
    notifications: u32,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TechnicianView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TechnicianView")
            .field("technician", &self.technician)
            .field("tickets", &self.tickets.len())
            .field("search", &self.search.term())
            .field("notifications", &self.notifications)
            .field("clock", &"Arc<dyn Clock>")
            .finish()
    }
}

impl TechnicianView {
    /// Fails with `DuplicateTicket` if two tickets share an id
    pub fn new(
        technician: impl Into<String>,
        tickets: Vec<Ticket>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        Ok(Self {
            technician: technician.into(),
            tickets: MemoryStorage::from_tickets(tickets)?,
            search: TicketSearch::default(),
            notifications: 0,
            clock,
        })
    }

    /// Dashboard seeded with the demo tickets assigned to `technician`
    pub fn demo(technician: &str, unread: u32, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut view = Self::new(technician, seed::technician_tickets(technician), clock)?;
        view.notifications = unread;
        Ok(view)
    }

    #[must_use]
    pub fn technician(&self) -> &str {
        &self.technician
    }

    #[must_use]
    pub const fn tickets(&self) -> &MemoryStorage {
        &self.tickets
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search.term()
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = TicketSearch::new(term);
        tracing::debug!(term = self.search.term(), "technician search updated");
    }

    /// Tickets matching the current search, in collection order
    #[must_use]
    pub fn filtered(&self) -> Vec<&Ticket> {
        self.search.apply(&self.tickets)
    }

    /// Matching tickets split into workflow columns
    #[must_use]
    pub fn board(&self) -> StatusBoard<'_> {
        StatusBoard::partition(self.filtered())
    }

    /// Counts over the matching tickets
    #[must_use]
    pub fn stats(&self) -> TicketStats {
        TicketStats::collect(self.filtered())
    }

    /// Badge count for "My Tickets": matching tickets not yet resolved
    #[must_use]
    pub fn my_ticket_count(&self) -> usize {
        self.stats().active()
    }

    #[must_use]
    pub const fn notifications(&self) -> u32 {
        self.notifications
    }

    /// Move `ticket_id` to `new_status` and stamp `last_updated`
    ///
    /// Every other ticket is left exactly as it was. Unknown ids and
    /// non-forward moves fail without changing anything.
    pub fn handle_status_change(&mut self, ticket_id: &TicketId, new_status: Status) -> Result<Toast> {
        let mut ticket = self.tickets.load(ticket_id).inspect_err(|_| {
            tracing::warn!(id = %ticket_id, "status change for unknown ticket");
        })?;

        let previous = ticket.transition(new_status, self.clock.now())?;
        self.tickets.update(ticket)?;

        tracing::info!(
            id = %ticket_id,
            from = %previous,
            to = %new_status,
            "ticket status changed"
        );
        Ok(Toast::new(
            "Ticket Updated",
            format!("Ticket {ticket_id} marked as {new_status}"),
        ))
    }

    /// Count a notification and raise its toast
    pub fn receive_notification(&mut self, notification: Notification) -> Toast {
        self.notifications = self.notifications.saturating_add(1);
        tracing::info!(unread = self.notifications, title = %notification.title, "notification received");
        Toast::new(notification.title, notification.description)
    }

    /// Poll `source` once, as a single timer tick would
    pub fn poll(&mut self, source: &mut dyn NotificationSource) -> Option<Toast> {
        source
            .next_notification()
            .map(|notification| self.receive_notification(notification))
    }

    pub fn clear_notifications(&mut self) {
        self.notifications = 0;
    }

    /// Apply one action, returning the toast it raises
    pub fn apply(&mut self, action: TechnicianAction) -> Result<Option<Toast>> {
        match action {
            TechnicianAction::Search(term) => {
                self.set_search(&term);
                Ok(None)
            },
            TechnicianAction::ChangeStatus { id, status } => {
                self.handle_status_change(&id, status).map(Some)
            },
            TechnicianAction::Notify(notification) => Ok(Some(self.receive_notification(notification))),
            TechnicianAction::ClearNotifications => {
                self.clear_notifications();
                Ok(None)
            },
        }
    }
}

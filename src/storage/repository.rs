use crate::core::{Ticket, TicketId};
use crate::error::Result;

/// Repository trait for a dashboard's ticket collection
///
/// Collections are ordered; new tickets go to the front so listings read
/// newest-first.
pub trait TicketRepository {
    /// Adds a new ticket at the front of the collection
    fn insert(&mut self, ticket: Ticket) -> Result<()>;

    /// Replaces the stored ticket with the same ID, keeping its position
    fn update(&mut self, ticket: Ticket) -> Result<()>;

    /// Loads a ticket by ID
    fn load(&self, id: &TicketId) -> Result<Ticket>;

    /// Checks if a ticket exists by ID
    fn exists(&self, id: &TicketId) -> bool;
}

use super::memory::MemoryStorage;
use crate::error::HelpdeskError;

impl TicketRepository for MemoryStorage {
    fn insert(&mut self, ticket: Ticket) -> Result<()> {
        if self.contains(&ticket.id) {
            return Err(HelpdeskError::DuplicateTicket {
                id: ticket.id.to_string(),
            });
        }
        self.push_front(ticket);
        Ok(())
    }

    fn update(&mut self, ticket: Ticket) -> Result<()> {
        let slot = self
            .get_mut(&ticket.id)
            .ok_or_else(|| HelpdeskError::TicketNotFound {
                id: ticket.id.to_string(),
            })?;
        *slot = ticket;
        Ok(())
    }

    fn load(&self, id: &TicketId) -> Result<Ticket> {
        self.get(id)
            .cloned()
            .ok_or_else(|| HelpdeskError::TicketNotFound { id: id.to_string() })
    }

    fn exists(&self, id: &TicketId) -> bool {
        self.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, Status};
    use crate::test_utils::create_test_ticket;

    fn storage_with(count: u32) -> MemoryStorage {
        let tickets = (1..=count)
            .map(|n| create_test_ticket(n, &format!("Ticket {n}"), Priority::Medium, Status::Open))
            .collect();
        MemoryStorage::from_tickets(tickets).unwrap()
    }

    #[test]
    fn test_ticket_repository_insert_and_load() {
        let mut storage = storage_with(2);
        let ticket = create_test_ticket(9, "New ticket", Priority::High, Status::Open);

        storage.insert(ticket.clone()).expect("Failed to insert ticket");

        let loaded = storage.load(&ticket.id).expect("Failed to load ticket");
        assert_eq!(loaded, ticket);
        assert_eq!(storage.iter().next().unwrap().id, ticket.id);
    }

    #[test]
    fn test_ticket_repository_rejects_duplicates() {
        let mut storage = storage_with(2);
        let duplicate = create_test_ticket(1, "Again", Priority::Low, Status::Open);

        let err = storage.insert(duplicate).unwrap_err();
        assert!(matches!(err, HelpdeskError::DuplicateTicket { .. }));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn test_ticket_repository_update_keeps_position() {
        let mut storage = storage_with(3);
        let mut second = storage.load(&TicketId::from_number(2)).unwrap();
        second.status = Status::InProgress;

        storage.update(second).expect("Failed to update ticket");

        let all: Vec<_> = storage.iter().collect();
        assert_eq!(all[1].id.number(), 2);
        assert_eq!(all[1].status, Status::InProgress);
    }

    #[test]
    fn test_ticket_repository_update_missing() {
        let mut storage = storage_with(1);
        let ghost = create_test_ticket(99, "Ghost", Priority::Low, Status::Open);
        assert!(matches!(
            storage.update(ghost),
            Err(HelpdeskError::TicketNotFound { .. })
        ));
    }

    #[test]
    fn test_ticket_repository_exists() {
        let storage = storage_with(3);
        assert!(storage.exists(&TicketId::from_number(2)));
        assert!(!storage.exists(&TicketId::from_number(42)));
    }
}

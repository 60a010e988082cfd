use super::TicketRepository;
use crate::core::{Ticket, TicketId};
use crate::error::Result;
use std::collections::VecDeque;

/// Ordered, process-local ticket collection owned by one dashboard
///
/// Nothing is written anywhere; dropping the storage drops the tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    tickets: VecDeque<Ticket>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect tickets, keeping their order
    ///
    /// Fails with `DuplicateTicket` if two tickets share an id.
    pub fn from_tickets(tickets: Vec<Ticket>) -> Result<Self> {
        let mut storage = Self::new();
        // Inserting at the front in reverse restores the given order
        for ticket in tickets.into_iter().rev() {
            storage.insert(ticket)?;
        }
        Ok(storage)
    }

    pub(crate) fn push_front(&mut self, ticket: Ticket) {
        self.tickets.push_front(ticket);
    }

    #[must_use]
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| &t.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &TicketId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl<'a> IntoIterator for &'a MemoryStorage {
    type Item = &'a Ticket;
    type IntoIter = std::collections::vec_deque::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.iter()
    }
}

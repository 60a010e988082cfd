use super::{Ticket, TicketId};

/// Source of fresh ticket ids
pub trait IdGenerator: Send {
    /// Next id, or `None` once the generator has run out of numbers
    fn next_id(&mut self) -> Option<TicketId>;
}

/// Monotonic counter producing `TK-###` ids
///
/// Seeded past the highest id in a collection, it never hands out an id the
/// collection already holds.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u32>,
}

impl SequentialIds {
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next: Some(next) }
    }

    /// Continue numbering after the highest id in `tickets`
    #[must_use]
    pub fn after<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let highest = tickets
            .into_iter()
            .map(|t| t.id.number())
            .max()
            .unwrap_or(0);
        Self {
            next: highest.checked_add(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<TicketId> {
        let number = self.next?;
        self.next = number.checked_add(1);
        Some(TicketId::from_number(number))
    }
}

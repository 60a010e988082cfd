//! In-memory ticket collections
//!
//! Each dashboard owns its own [`MemoryStorage`]; collections are never
//! shared or synchronized between dashboards.

mod memory;
mod repository;

pub use memory::MemoryStorage;
pub use repository::TicketRepository;

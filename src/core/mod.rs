//! Ticket model shared by every dashboard
//!
//! The model is a single canonical [`Ticket`] with closed enumerations for
//! its priority, workflow status and location, plus the read-only records
//! the administrator dashboard shows.

mod analytics;
mod builders;
mod clock;
mod filter;
mod id;
pub mod seed;
mod technician;
mod ticket;

pub use analytics::{DailyTrend, DeskSummary, PriorityShare, TrendTotals};
pub use builders::{TechnicianBuilder, TicketBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
pub use filter::{StatusBoard, TicketSearch, TicketStats};
pub use id::{IdGenerator, SequentialIds};
pub use technician::{Technician, TechnicianStatus};
pub use ticket::{Location, Priority, Status, Ticket, TicketId};

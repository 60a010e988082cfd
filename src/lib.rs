//! helpdesk - A role-based issue desk over in-memory ticket data
//!
//! This crate provides three dashboards over mock ticket data:
//! - Technicians search their assigned tickets and move them through the workflow
//! - End users submit new tickets and follow the ones they reported
//! - Administrators review analytics and the technician roster and export reports
//!
//! A simulated notification feed raises "new ticket assigned" alerts for the
//! technician on a timer.

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_self)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::map_unwrap_or)]

//! # Example
//!
//! ```rust
//! use helpdesk::core::{Status, SystemClock, TicketId};
//! use helpdesk::views::TechnicianView;
//! use std::sync::Arc;
//!
//! let mut view = TechnicianView::demo("John Smith", 0, Arc::new(SystemClock))?;
//! view.handle_status_change(&TicketId::from_number(1), Status::InProgress)?;
//!
//! let stats = view.stats();
//! assert_eq!(stats.open, 0);
//! assert_eq!(stats.in_progress, 2);
//! # Ok::<(), helpdesk::HelpdeskError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod notify;
pub mod storage;
pub mod views;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};

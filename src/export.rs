//! Report export for the administrator dashboard
//!
//! Exports are rendered to CSV in memory and handed back in an
//! [`ExportReceipt`]. Writing the CSV anywhere is up to the caller.

use crate::core::{DailyTrend, PriorityShare, Technician, Ticket};
use crate::error::{HelpdeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Which report the administrator asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Ticket volume log
    Tickets,
    /// Technician performance summary
    Performance,
    /// Priority breakdown
    Analytics,
}

impl ExportKind {
    pub const ALL: [Self; 3] = [Self::Tickets, Self::Performance, Self::Analytics];

    /// Confirmation shown once the export finishes
    #[must_use]
    pub const fn confirmation(self) -> &'static str {
        match self {
            Self::Tickets => "Ticket data exported - This would download a CSV/PDF file",
            Self::Performance | Self::Analytics => {
                "Performance data exported - This would download a CSV/PDF file"
            },
        }
    }

    /// Suggested file name for the CSV
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{self}-report.csv")
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tickets => f.write_str("tickets"),
            Self::Performance => f.write_str("performance"),
            Self::Analytics => f.write_str("analytics"),
        }
    }
}

impl FromStr for ExportKind {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tickets" | "ticket" => Ok(Self::Tickets),
            "performance" => Ok(Self::Performance),
            "analytics" => Ok(Self::Analytics),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Invalid export kind: {s}. Must be one of: tickets, performance, analytics"
            ))),
        }
    }
}

/// Result of an export action
#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    pub id: Uuid,
    pub kind: ExportKind,
    pub message: String,
    pub generated_at: DateTime<Utc>,
    pub rows: usize,
    pub csv: String,
}

impl ExportReceipt {
    pub fn new(kind: ExportKind, rows: usize, csv: String, generated_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: kind.confirmation().to_string(),
            generated_at,
            rows,
            csv,
        }
    }
}

/// Serialize rows to CSV with a header taken from the row's field names
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| HelpdeskError::SerializationError(format!("Failed to get CSV data: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| HelpdeskError::SerializationError(format!("Invalid UTF-8 in CSV: {e}")))
}

pub fn trend_csv(series: &[DailyTrend]) -> Result<String> {
    to_csv(series)
}

pub fn roster_csv(roster: &[Technician]) -> Result<String> {
    to_csv(roster)
}

pub fn priority_csv(shares: &[PriorityShare]) -> Result<String> {
    to_csv(shares)
}

/// Flat CSV of a ticket list, with empty cells for missing optional fields
pub fn tickets_csv(tickets: &[&Ticket]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "title",
        "priority",
        "status",
        "location",
        "device",
        "assigned_to",
        "date_submitted",
        "last_updated",
    ])?;

    for ticket in tickets {
        let submitted = ticket.date_submitted.to_rfc3339();
        let updated = ticket.last_updated.to_rfc3339();
        writer.write_record([
            ticket.id.as_str(),
            ticket.title.as_str(),
            ticket.priority.as_str(),
            ticket.status.as_str(),
            ticket.location.as_str(),
            ticket.device.as_deref().unwrap_or_default(),
            ticket.assigned_to.as_deref().unwrap_or_default(),
            submitted.as_str(),
            updated.as_str(),
        ])?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| HelpdeskError::SerializationError(format!("Failed to get CSV data: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| HelpdeskError::SerializationError(format!("Invalid UTF-8 in CSV: {e}")))
}

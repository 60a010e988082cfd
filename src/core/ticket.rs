use crate::error::{HelpdeskError, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static TICKET_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^TK-(\d{3,})$").unwrap_or_else(|e| panic!("invalid ticket id pattern: {e}"))
});

/// Ticket identifier of the form `TK-###`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId(String);

impl TicketId {
    /// Build the id for a ticket number, zero-padded to three digits
    #[must_use]
    pub fn from_number(number: u32) -> Self {
        Self(format!("TK-{number:03}"))
    }

    /// Parse an id, accepting any casing of the `TK-` prefix
    pub fn parse_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase();
        if TICKET_ID_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(HelpdeskError::InvalidInput(format!(
                "'{s}' is not a ticket id (expected TK-###)"
            )))
        }
    }

    /// Numeric part of the id
    #[must_use]
    pub fn number(&self) -> u32 {
        TICKET_ID_PATTERN
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TicketId {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl TryFrom<String> for TicketId {
    type Error = HelpdeskError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_str(&value)
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

/// Urgency classification of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Invalid priority: {s}. Must be one of: low, medium, high, urgent"
            ))),
        }
    }
}

/// Workflow stage of a ticket
///
/// The workflow is linear: a ticket only ever moves towards `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Resolved];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// The stage offered as the next action for a ticket in this stage
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Open => Some(Self::InProgress),
            Self::InProgress => Some(Self::Resolved),
            Self::Resolved => None,
        }
    }

    /// Whether moving from `self` to `to` goes forward in the workflow
    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        to > self
    }

    /// Anything not yet resolved
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Resolved)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "open" => Ok(Self::Open),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Invalid status: {s}. Must be one of: open, in-progress, resolved"
            ))),
        }
    }
}

/// Where the ticket gets resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    #[default]
    Onsite,
    Remote,
}

impl Location {
    pub const ALL: [Self; 2] = [Self::Onsite, Self::Remote];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Onsite => "onsite",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "onsite" | "on-site" => Ok(Self::Onsite),
            "remote" => Ok(Self::Remote),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Invalid location: {s}. Must be one of: onsite, remote"
            ))),
        }
    }
}

/// A unit of reported work
///
/// Technician and end-user dashboards share this one shape; fields only one
/// of them fills in (`device`, `reported_by`) are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub date_submitted: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Ticket {
    /// Create an open ticket submitted at `now`
    pub fn new(
        id: TicketId,
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
            status: Status::Open,
            location: Location::default(),
            device: None,
            reported_by: None,
            assigned_to: None,
            date_submitted: now,
            last_updated: now,
        }
    }

    /// Move the ticket to `to`, stamping `last_updated`
    ///
    /// The ticket is left untouched when the move is not forward.
    pub fn transition(&mut self, to: Status, now: DateTime<Utc>) -> Result<Status> {
        if !self.status.can_transition_to(to) {
            return Err(HelpdeskError::InvalidTransition {
                id: self.id.to_string(),
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        let previous = self.status;
        self.status = to;
        self.last_updated = now;
        Ok(previous)
    }

    /// Case-insensitive match of `needle` (already lowercased) against
    /// title, description and id
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.as_str().to_lowercase().contains(needle)
    }

    /// Display name of the assignee
    #[must_use]
    pub fn assignee_label(&self) -> &str {
        self.assigned_to.as_deref().unwrap_or("Unassigned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_parsing() {
        assert_eq!(TicketId::parse_str("TK-001").unwrap().number(), 1);
        assert_eq!(TicketId::parse_str("tk-042").unwrap().as_str(), "TK-042");
        assert_eq!(TicketId::parse_str("TK-1234").unwrap().number(), 1234);
        assert!(TicketId::parse_str("TK-1").is_err());
        assert!(TicketId::parse_str("001").is_err());
        assert_eq!(TicketId::from_number(8).to_string(), "TK-008");
    }

    #[test]
    fn test_status_ordering_is_forward_only() {
        assert!(Status::Open.can_transition_to(Status::InProgress));
        assert!(Status::InProgress.can_transition_to(Status::Resolved));
        assert!(Status::Open.can_transition_to(Status::Resolved));
        assert!(!Status::Resolved.can_transition_to(Status::Open));
        assert!(!Status::InProgress.can_transition_to(Status::InProgress));
        assert_eq!(Status::Resolved.next(), None);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("RESOLVED".parse::<Status>().unwrap(), Status::Resolved);
        assert!("closed".parse::<Status>().is_err());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&Location::Onsite).unwrap(), "\"onsite\"");
        assert_eq!(serde_json::to_string(&Priority::Urgent).unwrap(), "\"urgent\"");
    }

    #[test]
    fn test_transition_rejects_backward_move() {
        let now = Utc::now();
        let mut ticket = Ticket::new(TicketId::from_number(1), "t", "d", now);
        ticket.status = Status::Resolved;
        let before = ticket.clone();

        let err = ticket
            .transition(Status::InProgress, now + chrono::Duration::minutes(5))
            .unwrap_err();
        assert!(matches!(err, HelpdeskError::InvalidTransition { .. }));
        assert_eq!(ticket, before);
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let ticket = Ticket::new(
            TicketId::from_number(7),
            "Printer paper jam",
            "Office printer",
            Utc::now(),
        );
        assert!(ticket.matches_search("printer"));
        assert!(ticket.matches_search("tk-007"));
        assert!(ticket.matches_search(""));
        assert!(!ticket.matches_search("laptop"));
    }
}

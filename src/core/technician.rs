use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability of a technician
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechnicianStatus {
    Active,
    Offline,
}

impl fmt::Display for TechnicianStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Offline => f.write_str("offline"),
        }
    }
}

/// Roster entry shown on the administrator dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: TechnicianStatus,
    /// Number of tickets handled
    pub tickets: u32,
    /// Average resolution time, display only (e.g. "2.4h")
    pub avg_resolution: String,
}

impl Technician {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, TechnicianStatus::Active)
    }

    /// Initials used in place of an avatar
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Whether `query` names this technician by id, name or email
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.id == query
            || self.name.eq_ignore_ascii_case(query)
            || self.email.eq_ignore_ascii_case(query)
    }
}

//! Error types for the helpdesk crate
//!
//! Every fallible operation in the crate returns [`Result`], whose error
//! variant is [`HelpdeskError`]. The CLI uses the helper methods on the error
//! to print a friendly message and recovery suggestions.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// Errors produced by the ticket model, the dashboards and the CLI
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// Required ticket form fields were left empty
    #[error("Please fill in all required fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    /// No ticket with the given id exists in the collection
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// A ticket with the given id already exists in the collection
    #[error("Ticket already exists: {id}")]
    DuplicateTicket { id: String },

    /// Every ticket number past the highest existing id is taken
    #[error("No ticket ids left to assign")]
    IdsExhausted,

    /// The requested status change does not move the ticket forward
    #[error("Ticket {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: String,
        to: String,
    },

    /// No technician matched the lookup
    #[error("Technician not found: {query}")]
    TechnicianNotFound { query: String },

    /// Unparseable user input (ids, enum names, flags)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Interactive prompt failure
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl HelpdeskError {
    /// Create a validation error for the given missing fields
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Message shown to the user on the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { .. } => format!("Error: {self}"),
            Self::TicketNotFound { id } => format!("No ticket with id '{id}' in this dashboard"),
            _ => self.to_string(),
        }
    }

    /// Hints for recovering from the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { .. } => vec![
                "Provide both --title and --description".to_string(),
            ],
            Self::TicketNotFound { .. } => vec![
                "Run 'helpdesk technician' to list the tickets on the board".to_string(),
                "Ticket ids look like TK-001".to_string(),
            ],
            Self::InvalidTransition { .. } => vec![
                "Tickets move forward only: open -> in-progress -> resolved".to_string(),
            ],
            Self::TechnicianNotFound { .. } => vec![
                "Run 'helpdesk admin' to see the technician roster".to_string(),
            ],
            Self::Config(_) | Self::InvalidConfig(_) => vec![
                "Check the file passed with --config".to_string(),
                "HELPDESK_* environment variables override file settings".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Whether the user can retry the same operation with different input
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::TicketNotFound { .. }
                | Self::InvalidTransition { .. }
                | Self::TechnicianNotFound { .. }
                | Self::InvalidInput(_)
        )
    }

    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidConfig(_))
    }
}

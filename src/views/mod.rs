//! The three role-based dashboards and the switcher that composes them
//!
//! Each dashboard owns its state outright. Mutations go through the
//! dashboard's `apply` method, one action at a time, and either succeed
//! completely or leave the state untouched.

mod admin;
mod end_user;
mod technician;

pub use admin::AdminView;
pub use end_user::{EndUserAction, EndUserView, NewTicketForm};
pub use technician::{TechnicianAction, TechnicianView};

use crate::config::Config;
use crate::core::Clock;
use crate::error::{HelpdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which dashboard is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Technician,
    Admin,
    EndUser,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Technician, Self::Admin, Self::EndUser];

    /// Label shown on the role switcher
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technician => "Technician",
            Self::Admin => "Administrator",
            Self::EndUser => "End User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "technician" | "tech" => Ok(Self::Technician),
            "admin" | "administrator" => Ok(Self::Admin),
            "enduser" | "user" => Ok(Self::EndUser),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Invalid role: {s}. Must be one of: technician, admin, enduser"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient message raised by a dashboard action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// Red toast reporting a failed action
    #[must_use]
    pub fn from_error(error: &HelpdeskError) -> Self {
        Self {
            title: "Error".to_string(),
            description: error.to_string(),
            variant: ToastVariant::Destructive,
        }
    }

    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self.variant, ToastVariant::Destructive)
    }
}

/// Top-level switcher holding all three dashboards
///
/// Switching roles never touches dashboard state, and the dashboards never
/// see each other's tickets.
#[derive(Debug)]
pub struct Desk {
    role: Role,
    pub technician: TechnicianView,
    pub end_user: EndUserView,
    pub admin: AdminView,
}

impl Desk {
    /// Demo desk seeded with mock data for the configured users
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            role: config.desk.default_role,
            technician: TechnicianView::demo(
                &config.desk.technician,
                config.notifications.initial_count,
                Arc::clone(&clock),
            )?,
            end_user: EndUserView::demo(&config.desk.end_user, Arc::clone(&clock))?,
            admin: AdminView::demo(clock),
        })
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn switch_role(&mut self, role: Role) {
        if role != self.role {
            tracing::info!(from = %self.role, to = %role, "switching dashboard");
            self.role = role;
        }
    }
}

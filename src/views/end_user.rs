//! End-user dashboard: submitted tickets and the new-ticket form

use super::Toast;
use crate::core::{
    Clock, IdGenerator, Location, Priority, SequentialIds, Ticket, TicketBuilder, TicketStats, seed,
};
use crate::error::{HelpdeskError, Result};
use crate::storage::{MemoryStorage, TicketRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Contents of the "Submit New Ticket" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicketForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub location: Location,
    pub device: Option<String>,
}

impl NewTicketForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub const fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Title and description are required
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(HelpdeskError::missing_fields(missing))
        }
    }
}

/// Actions the end-user dashboard reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndUserAction {
    SetTitle(String),
    SetDescription(String),
    SetPriority(Priority),
    SetLocation(Location),
    SetDevice(Option<String>),
    /// Submit the form as currently filled in
    Submit,
    ResetForm,
}

pub struct EndUserView {
    user: String,
    tickets: MemoryStorage,
    form: NewTicketForm,
    ids: Box<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for EndUserView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndUserView")
            .field("user", &self.user)
            .field("tickets", &self.tickets.len())
            .field("form", &self.form)
            .field("ids", &"Box<dyn IdGenerator>")
            .field("clock", &"Arc<dyn Clock>")
            .finish()
    }
}

impl EndUserView {
    /// Dashboard over `tickets`, numbering new tickets after the highest id
    ///
    /// Fails with `DuplicateTicket` if two tickets share an id.
    pub fn new(user: impl Into<String>, tickets: Vec<Ticket>, clock: Arc<dyn Clock>) -> Result<Self> {
        let ids = SequentialIds::after(&tickets);
        Self::with_id_generator(user, tickets, Box::new(ids), clock)
    }

    pub fn with_id_generator(
        user: impl Into<String>,
        tickets: Vec<Ticket>,
        ids: Box<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        Ok(Self {
            user: user.into(),
            tickets: MemoryStorage::from_tickets(tickets)?,
            form: NewTicketForm::default(),
            ids,
            clock,
        })
    }

    pub fn demo(user: &str, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::new(user, seed::end_user_tickets(), clock)
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub const fn tickets(&self) -> &MemoryStorage {
        &self.tickets
    }

    #[must_use]
    pub const fn form(&self) -> &NewTicketForm {
        &self.form
    }

    #[must_use]
    pub fn stats(&self) -> TicketStats {
        TicketStats::collect(&self.tickets)
    }

    /// Validate `form` and add the resulting ticket at the front of the list
    ///
    /// On success the dashboard's form is reset to its defaults. On a
    /// validation failure nothing changes.
    pub fn submit_ticket(&mut self, form: NewTicketForm) -> Result<Ticket> {
        form.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "ticket submission rejected");
        })?;

        let id = loop {
            let id = self.ids.next_id().ok_or(HelpdeskError::IdsExhausted)?;
            if !self.tickets.exists(&id) {
                break id;
            }
        };

        let now = self.clock.now();
        let mut builder = TicketBuilder::new()
            .id(id)
            .title(form.title.trim())
            .description(form.description.trim())
            .priority(form.priority)
            .location(form.location)
            .reported_by(self.user.clone())
            .date_submitted(now)
            .last_updated(now);
        if let Some(device) = form.device.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            builder = builder.device(device);
        }
        let ticket = builder.build();

        self.tickets.insert(ticket.clone())?;
        self.form = NewTicketForm::default();

        tracing::info!(id = %ticket.id, priority = %ticket.priority, "ticket submitted");
        Ok(ticket)
    }

    /// Submit the dashboard's own form
    pub fn submit(&mut self) -> Result<Ticket> {
        self.submit_ticket(self.form.clone())
    }

    /// Apply one action, returning the toast it raises
    pub fn apply(&mut self, action: EndUserAction) -> Result<Option<Toast>> {
        match action {
            EndUserAction::SetTitle(title) => self.form.title = title,
            EndUserAction::SetDescription(description) => self.form.description = description,
            EndUserAction::SetPriority(priority) => self.form.priority = priority,
            EndUserAction::SetLocation(location) => self.form.location = location,
            EndUserAction::SetDevice(device) => self.form.device = device,
            EndUserAction::ResetForm => self.form = NewTicketForm::default(),
            EndUserAction::Submit => {
                let ticket = self.submit()?;
                return Ok(Some(Toast::new(
                    "Ticket Submitted",
                    format!("Your ticket {} has been submitted successfully", ticket.id),
                )));
            },
        }
        Ok(None)
    }
}

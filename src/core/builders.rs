use super::{Location, Priority, Status, Technician, TechnicianStatus, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    location: Option<Location>,
    device: Option<String>,
    reported_by: Option<String>,
    assigned_to: Option<String>,
    date_submitted: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the location
    #[must_use]
    pub const fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the affected device
    #[must_use]
    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Set the reporter
    #[must_use]
    pub fn reported_by(mut self, reported_by: impl Into<String>) -> Self {
        self.reported_by = Some(reported_by.into());
        self
    }

    /// Set the assigned technician
    #[must_use]
    pub fn assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Set `date_submitted` timestamp
    #[must_use]
    pub const fn date_submitted(mut self, date_submitted: DateTime<Utc>) -> Self {
        self.date_submitted = Some(date_submitted);
        self
    }

    /// Set `last_updated` timestamp
    #[must_use]
    pub const fn last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    /// Build the ticket
    ///
    /// `last_updated` falls back to `date_submitted`, which falls back to now.
    pub fn build(self) -> Ticket {
        let date_submitted = self.date_submitted.unwrap_or_else(Utc::now);
        Ticket {
            id: self.id.unwrap_or_else(|| TicketId::from_number(0)),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            device: self.device,
            reported_by: self.reported_by,
            assigned_to: self.assigned_to,
            date_submitted,
            last_updated: self.last_updated.unwrap_or(date_submitted),
        }
    }
}

/// Builder for roster entries
#[derive(Default)]
pub struct TechnicianBuilder {
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    status: Option<TechnicianStatus>,
    tickets: u32,
    avg_resolution: Option<String>,
}

impl TechnicianBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TechnicianStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn tickets(mut self, tickets: u32) -> Self {
        self.tickets = tickets;
        self
    }

    #[must_use]
    pub fn avg_resolution(mut self, avg_resolution: impl Into<String>) -> Self {
        self.avg_resolution = Some(avg_resolution.into());
        self
    }

    pub fn build(self) -> Technician {
        Technician {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: self.role.unwrap_or_else(|| "Technician".to_string()),
            status: self.status.unwrap_or(TechnicianStatus::Offline),
            tickets: self.tickets,
            avg_resolution: self.avg_resolution.unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .id(TicketId::from_number(1))
            .title("Computer won't start")
            .description("Desktop won't power on")
            .priority(Priority::High)
            .device("Dell OptiPlex 7090")
            .assigned_to("John Smith")
            .build();

        assert_eq!(ticket.id.as_str(), "TK-001");
        assert_eq!(ticket.title, "Computer won't start");
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.status, Status::Open);
        assert_eq!(ticket.location, Location::Onsite);
        assert_eq!(ticket.device.as_deref(), Some("Dell OptiPlex 7090"));
        assert_eq!(ticket.last_updated, ticket.date_submitted);
    }

    #[test]
    fn test_technician_builder() {
        let tech = TechnicianBuilder::new()
            .id("4")
            .name("Lisa Chen")
            .status(TechnicianStatus::Offline)
            .tickets(10)
            .build();

        assert_eq!(tech.name, "Lisa Chen");
        assert!(!tech.is_active());
        assert_eq!(tech.role, "Technician");
    }
}

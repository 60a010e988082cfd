//! Demo data each dashboard starts from

use super::{
    DailyTrend, DeskSummary, Location, Priority, PriorityShare, Status, Technician,
    TechnicianBuilder, TechnicianStatus, Ticket, TicketBuilder, TicketId,
};
use chrono::{DateTime, TimeZone, Utc};

fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Tickets assigned to the demo technician
pub fn technician_tickets(technician: &str) -> Vec<Ticket> {
    vec![
        TicketBuilder::new()
            .id(TicketId::from_number(1))
            .title("Computer won't start")
            .description("Desktop computer in accounting department won't power on after power outage")
            .priority(Priority::High)
            .status(Status::Open)
            .location(Location::Onsite)
            .device("Dell OptiPlex 7090")
            .reported_by("Sarah Johnson")
            .assigned_to(technician)
            .date_submitted(stamp(2024, 1, 15, 9, 30))
            .build(),
        TicketBuilder::new()
            .id(TicketId::from_number(2))
            .title("Slow internet connection")
            .description("Internet speed significantly reduced, affecting productivity")
            .priority(Priority::Medium)
            .status(Status::InProgress)
            .location(Location::Remote)
            .device("Network Infrastructure")
            .reported_by("Mike Davis")
            .assigned_to(technician)
            .date_submitted(stamp(2024, 1, 14, 14, 20))
            .last_updated(stamp(2024, 1, 15, 8, 45))
            .build(),
        TicketBuilder::new()
            .id(TicketId::from_number(3))
            .title("Printer not responding")
            .description("HP LaserJet printer not responding to print commands")
            .priority(Priority::Low)
            .status(Status::Resolved)
            .location(Location::Onsite)
            .device("HP LaserJet Pro 400")
            .reported_by("Lisa Chen")
            .assigned_to(technician)
            .date_submitted(stamp(2024, 1, 13, 11, 15))
            .last_updated(stamp(2024, 1, 14, 16, 30))
            .build(),
        TicketBuilder::new()
            .id(TicketId::from_number(4))
            .title("Email server down")
            .description("Unable to send or receive emails company-wide")
            .priority(Priority::Urgent)
            .status(Status::Resolved)
            .location(Location::Remote)
            .device("Exchange Server")
            .reported_by("IT Department")
            .assigned_to(technician)
            .date_submitted(stamp(2024, 1, 15, 10, 45))
            .last_updated(stamp(2024, 1, 15, 13, 5))
            .build(),
    ]
}

/// Tickets submitted by the demo end user, newest first
pub fn end_user_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new()
            .id(TicketId::from_number(5))
            .title("Laptop screen flickering")
            .description("My laptop screen has been flickering intermittently")
            .priority(Priority::Medium)
            .status(Status::InProgress)
            .location(Location::Onsite)
            .assigned_to("John Smith")
            .date_submitted(stamp(2024, 1, 14, 10, 30))
            .last_updated(stamp(2024, 1, 15, 9, 15))
            .build(),
        TicketBuilder::new()
            .id(TicketId::from_number(6))
            .title("Cannot access shared drive")
            .description("Unable to connect to the company shared drive from home")
            .priority(Priority::High)
            .status(Status::Open)
            .location(Location::Remote)
            .date_submitted(stamp(2024, 1, 15, 8, 45))
            .build(),
        TicketBuilder::new()
            .id(TicketId::from_number(7))
            .title("Printer paper jam")
            .description("Office printer has a paper jam that I cannot clear")
            .priority(Priority::Low)
            .status(Status::Resolved)
            .location(Location::Onsite)
            .assigned_to("Sarah Johnson")
            .date_submitted(stamp(2024, 1, 12, 14, 20))
            .last_updated(stamp(2024, 1, 13, 11, 30))
            .build(),
    ]
}

pub fn roster() -> Vec<Technician> {
    vec![
        TechnicianBuilder::new()
            .id("1")
            .name("John Smith")
            .email("john@company.com")
            .role("Senior Technician")
            .status(TechnicianStatus::Active)
            .tickets(15)
            .avg_resolution("2.4h")
            .build(),
        TechnicianBuilder::new()
            .id("2")
            .name("Sarah Johnson")
            .email("sarah@company.com")
            .role("Technician")
            .status(TechnicianStatus::Active)
            .tickets(12)
            .avg_resolution("3.1h")
            .build(),
        TechnicianBuilder::new()
            .id("3")
            .name("Mike Davis")
            .email("mike@company.com")
            .role("Junior Technician")
            .status(TechnicianStatus::Active)
            .tickets(8)
            .avg_resolution("4.2h")
            .build(),
        TechnicianBuilder::new()
            .id("4")
            .name("Lisa Chen")
            .email("lisa@company.com")
            .role("Technician")
            .status(TechnicianStatus::Offline)
            .tickets(10)
            .avg_resolution("2.8h")
            .build(),
    ]
}

pub fn weekly_trend() -> Vec<DailyTrend> {
    [
        ("Mon", 12, 8),
        ("Tue", 15, 12),
        ("Wed", 8, 14),
        ("Thu", 18, 16),
        ("Fri", 22, 18),
        ("Sat", 5, 8),
        ("Sun", 3, 5),
    ]
    .into_iter()
    .map(|(day, open, resolved)| DailyTrend {
        day: day.to_string(),
        open,
        resolved,
    })
    .collect()
}

pub fn priority_distribution() -> Vec<PriorityShare> {
    vec![
        PriorityShare {
            priority: Priority::Low,
            percent: 35,
        },
        PriorityShare {
            priority: Priority::Medium,
            percent: 40,
        },
        PriorityShare {
            priority: Priority::High,
            percent: 20,
        },
        PriorityShare {
            priority: Priority::Urgent,
            percent: 5,
        },
    ]
}

pub fn summary() -> DeskSummary {
    DeskSummary {
        total_tickets: 156,
        avg_resolution: "3.1h".to_string(),
        resolution_rate: 94,
    }
}

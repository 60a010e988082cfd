//! Handler for the `shell` command
//!
//! An interactive session over one desk. The role switcher picks which
//! dashboard's menu is shown; state carries over between switches for the
//! rest of the session.

use super::common::HandlerContext;
use super::{admin, end_user, technician};
use crate::cli::OutputFormatter;
use crate::core::{Location, Priority, Status, Ticket, TicketId};
use crate::error::{HelpdeskError, Result};
use crate::export::ExportKind;
use crate::views::{EndUserAction, Role, TechnicianAction, Toast};
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// What the user picked from a dashboard menu
enum Step {
    Stay,
    Switch,
    Quit,
}

/// Handler for the `shell` command
pub fn handle_shell_command(ctx: &mut HandlerContext, output: &OutputFormatter) -> Result<()> {
    let theme = ColorfulTheme::default();
    output.heading("helpdesk interactive shell");

    loop {
        let role = ctx.desk.role();
        let step = match role {
            Role::Technician => technician_menu(ctx, &theme, output)?,
            Role::EndUser => end_user_menu(ctx, &theme, output)?,
            Role::Admin => admin_menu(ctx, &theme, output)?,
        };

        match step {
            Step::Stay => {},
            Step::Switch => {
                let next = select_role(&theme, role)?;
                ctx.desk.switch_role(next);
            },
            Step::Quit => break,
        }
    }

    Ok(())
}

fn select_role(theme: &ColorfulTheme, current: Role) -> Result<Role> {
    let labels: Vec<_> = Role::ALL.iter().map(|r| r.label()).collect();
    let default = Role::ALL.iter().position(|r| *r == current).unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt("Switch to")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Role::ALL[selection])
}

/// Show a failed action as a red toast when the user can simply retry
fn report(result: Result<Option<Toast>>, output: &OutputFormatter) -> Result<()> {
    match result {
        Ok(Some(toast)) => output.toast(&toast),
        Ok(None) => {},
        Err(e) if e.is_recoverable() => output.toast(&Toast::from_error(&e)),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn technician_menu(
    ctx: &mut HandlerContext,
    theme: &ColorfulTheme,
    output: &OutputFormatter,
) -> Result<Step> {
    let view = &mut ctx.desk.technician;
    let items = [
        "Show board",
        "Search tickets",
        "Change ticket status",
        "Mark notifications read",
        "Switch role",
        "Quit",
    ];
    let selection = Select::with_theme(theme)
        .with_prompt(format!("Technician ({} unread)", view.notifications()))
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => technician::output_text(view, output),
        1 => {
            let term: String = Input::with_theme(theme)
                .with_prompt("Search (empty to clear)")
                .allow_empty(true)
                .with_initial_text(view.search_term())
                .interact_text()?;
            view.apply(TechnicianAction::Search(term))?;
            technician::output_text(view, output);
        },
        2 => {
            let moves = next_moves(view.filtered());
            if moves.is_empty() {
                output.warning("No open or in-progress tickets on the board");
                return Ok(Step::Stay);
            }
            let labels: Vec<String> = moves.iter().map(|(_, label, _)| label.clone()).collect();
            let selection = Select::with_theme(theme)
                .with_prompt("Ticket")
                .items(&labels)
                .default(0)
                .interact()?;
            let (id, _, status) = moves[selection].clone();
            report(view.apply(TechnicianAction::ChangeStatus { id, status }), output)?;
        },
        3 => {
            view.apply(TechnicianAction::ClearNotifications)?;
            output.success("All notifications marked as read");
        },
        4 => return Ok(Step::Switch),
        _ => return Ok(Step::Quit),
    }
    Ok(Step::Stay)
}

/// The single forward action each unresolved ticket offers
fn next_moves(tickets: Vec<&Ticket>) -> Vec<(TicketId, String, Status)> {
    tickets
        .into_iter()
        .filter_map(|ticket| {
            let next = ticket.status.next()?;
            let action = match next {
                Status::InProgress => "Start Work",
                _ => "Resolve",
            };
            let label = format!("{action}: {} {}", ticket.id, ticket.title);
            Some((ticket.id.clone(), label, next))
        })
        .collect()
}

fn end_user_menu(
    ctx: &mut HandlerContext,
    theme: &ColorfulTheme,
    output: &OutputFormatter,
) -> Result<Step> {
    let view = &mut ctx.desk.end_user;
    let items = ["Show my tickets", "Submit new ticket", "Switch role", "Quit"];
    let selection = Select::with_theme(theme)
        .with_prompt("End User")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => end_user::output_text(view, output),
        1 => {
            for action in prompt_form(theme)? {
                report(view.apply(action), output)?;
            }
        },
        2 => return Ok(Step::Switch),
        _ => return Ok(Step::Quit),
    }
    Ok(Step::Stay)
}

/// Collect the new-ticket form, ending with a submit
fn prompt_form(theme: &ColorfulTheme) -> Result<Vec<EndUserAction>> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let priorities: Vec<_> = Priority::ALL.iter().map(|p| p.as_str()).collect();
    let priority = Select::with_theme(theme)
        .with_prompt("Priority")
        .items(&priorities)
        .default(1)
        .interact()?;

    let location = Select::with_theme(theme)
        .with_prompt("Location")
        .items(&["onsite", "remote"])
        .default(0)
        .interact()?;

    let device: String = Input::with_theme(theme)
        .with_prompt("Device (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(vec![
        EndUserAction::SetTitle(title),
        EndUserAction::SetDescription(description),
        EndUserAction::SetPriority(Priority::ALL[priority]),
        EndUserAction::SetLocation(if location == 0 {
            Location::Onsite
        } else {
            Location::Remote
        }),
        EndUserAction::SetDevice(Some(device).filter(|d| !d.trim().is_empty())),
        EndUserAction::Submit,
    ])
}

fn admin_menu(
    ctx: &mut HandlerContext,
    theme: &ColorfulTheme,
    output: &OutputFormatter,
) -> Result<Step> {
    let view = &mut ctx.desk.admin;
    let items = [
        "Show dashboard",
        "Export report",
        "Technician report",
        "Switch role",
        "Quit",
    ];
    let selection = Select::with_theme(theme)
        .with_prompt("Administrator")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => admin::output_text(view, output),
        1 => {
            let kinds: Vec<String> = ExportKind::ALL.iter().map(ToString::to_string).collect();
            let kind = Select::with_theme(theme)
                .with_prompt("Report")
                .items(&kinds)
                .default(0)
                .interact()?;
            admin::run_export(view, ExportKind::ALL[kind], None, output)?;
        },
        2 => {
            let names: Vec<&str> = view.roster().iter().map(|t| t.name.as_str()).collect();
            let pick = Select::with_theme(theme)
                .with_prompt("Technician")
                .items(&names)
                .default(0)
                .interact()?;
            let name = names[pick].to_string();
            match view.select_technician(&name) {
                Ok(_) => admin::output_text(view, output),
                Err(e @ HelpdeskError::TechnicianNotFound { .. }) => {
                    output.toast(&Toast::from_error(&e));
                },
                Err(e) => return Err(e),
            }
        },
        3 => return Ok(Step::Switch),
        _ => return Ok(Step::Quit),
    }
    Ok(Step::Stay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDataBuilder;

    #[test]
    fn test_next_moves_offer_one_forward_step() {
        let tickets = TestDataBuilder::new()
            .with_ticket("Computer won't start", Priority::High, Status::Open)
            .with_ticket("Slow internet connection", Priority::Medium, Status::InProgress)
            .with_ticket("Printer not responding", Priority::Low, Status::Resolved)
            .build();

        let moves = next_moves(tickets.iter().collect());
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].0.as_str(), "TK-001");
        assert_eq!(moves[0].1, "Start Work: TK-001 Computer won't start");
        assert_eq!(moves[0].2, Status::InProgress);
        assert_eq!(moves[1].1, "Resolve: TK-002 Slow internet connection");
        assert_eq!(moves[1].2, Status::Resolved);
    }

    #[test]
    fn test_resolved_board_has_no_moves() {
        let tickets = TestDataBuilder::new()
            .with_tickets_in_status(Status::Resolved, 3)
            .build();
        assert!(next_moves(tickets.iter().collect()).is_empty());
    }
}

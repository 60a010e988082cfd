//! Administrator dashboard: analytics, technician roster and report export
//!
//! Nothing here mutates tickets. The only state is which technician the
//! custom report is filtered to.

use crate::core::{
    Clock, DailyTrend, DeskSummary, PriorityShare, Technician, TrendTotals, seed,
};
use crate::error::{HelpdeskError, Result};
use crate::export::{self, ExportKind, ExportReceipt};
use std::sync::Arc;

pub struct AdminView {
    roster: Vec<Technician>,
    trend: Vec<DailyTrend>,
    priorities: Vec<PriorityShare>,
    summary: DeskSummary,
    selected: Option<String>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for AdminView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminView")
            .field("roster", &self.roster.len())
            .field("trend", &self.trend.len())
            .field("selected", &self.selected)
            .field("clock", &"Arc<dyn Clock>")
            .finish()
    }
}

impl AdminView {
    pub fn new(
        roster: Vec<Technician>,
        trend: Vec<DailyTrend>,
        priorities: Vec<PriorityShare>,
        summary: DeskSummary,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            roster,
            trend,
            priorities,
            summary,
            selected: None,
            clock,
        }
    }

    pub fn demo(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            seed::roster(),
            seed::weekly_trend(),
            seed::priority_distribution(),
            seed::summary(),
            clock,
        )
    }

    #[must_use]
    pub fn roster(&self) -> &[Technician] {
        &self.roster
    }

    #[must_use]
    pub fn trend(&self) -> &[DailyTrend] {
        &self.trend
    }

    #[must_use]
    pub fn priority_distribution(&self) -> &[PriorityShare] {
        &self.priorities
    }

    #[must_use]
    pub const fn summary(&self) -> &DeskSummary {
        &self.summary
    }

    #[must_use]
    pub fn active_technicians(&self) -> usize {
        self.roster.iter().filter(|t| t.is_active()).count()
    }

    /// Tickets handled across the whole roster
    #[must_use]
    pub fn assigned_tickets(&self) -> u32 {
        self.roster.iter().map(|t| t.tickets).sum()
    }

    #[must_use]
    pub fn weekly_totals(&self) -> TrendTotals {
        TrendTotals::from_series(&self.trend)
    }

    /// Look up a roster entry by id, name or email
    pub fn technician_report(&self, query: &str) -> Result<&Technician> {
        self.roster
            .iter()
            .find(|t| t.matches(query))
            .ok_or_else(|| HelpdeskError::TechnicianNotFound {
                query: query.to_string(),
            })
    }

    /// Filter the custom report to one technician
    pub fn select_technician(&mut self, query: &str) -> Result<&Technician> {
        let id = self.technician_report(query)?.id.clone();
        tracing::debug!(technician = %id, "custom report technician selected");
        self.selected = Some(id);
        self.technician_report(query)
    }

    #[must_use]
    pub fn selected_technician(&self) -> Option<&Technician> {
        let id = self.selected.as_deref()?;
        self.roster.iter().find(|t| t.id == id)
    }

    /// Render the requested report to CSV and confirm it
    pub fn export(&self, kind: ExportKind) -> Result<ExportReceipt> {
        let (rows, csv) = match kind {
            ExportKind::Tickets => (self.trend.len(), export::trend_csv(&self.trend)?),
            ExportKind::Performance => {
                let roster: Vec<Technician> = self
                    .selected_technician()
                    .map_or_else(|| self.roster.clone(), |t| vec![t.clone()]);
                (roster.len(), export::roster_csv(&roster)?)
            },
            ExportKind::Analytics => (
                self.priorities.len(),
                export::priority_csv(&self.priorities)?,
            ),
        };

        let receipt = ExportReceipt::new(kind, rows, csv, self.clock.now());
        tracing::info!(kind = %kind, rows, receipt = %receipt.id, "report exported");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SystemClock;

    fn view() -> AdminView {
        AdminView::demo(Arc::new(SystemClock))
    }

    #[test]
    fn test_counters() {
        let view = view();
        assert_eq!(view.active_technicians(), 3);
        assert_eq!(view.assigned_tickets(), 45);
        assert_eq!(view.summary().total_tickets, 156);

        let totals = view.weekly_totals();
        assert_eq!(totals.opened, 83);
        assert_eq!(totals.resolved, 81);
    }

    #[test]
    fn test_technician_report_lookup() {
        let view = view();
        assert_eq!(view.technician_report("sarah johnson").unwrap().id, "2");
        assert_eq!(view.technician_report("4").unwrap().name, "Lisa Chen");
        assert!(matches!(
            view.technician_report("Nobody"),
            Err(HelpdeskError::TechnicianNotFound { .. })
        ));
    }

    #[test]
    fn test_export_receipts() {
        let view = view();
        let tickets = view.export(ExportKind::Tickets).unwrap();
        assert_eq!(tickets.rows, 7);
        assert!(tickets.message.starts_with("Ticket data exported"));
        assert!(tickets.csv.starts_with("day,open,resolved"));

        let analytics = view.export(ExportKind::Analytics).unwrap();
        assert!(analytics.message.starts_with("Performance data exported"));
        assert_ne!(tickets.id, analytics.id);
    }

    #[test]
    fn test_performance_export_follows_selection() {
        let mut view = view();
        assert_eq!(view.export(ExportKind::Performance).unwrap().rows, 4);

        view.select_technician("mike@company.com").unwrap();
        assert_eq!(view.selected_technician().unwrap().name, "Mike Davis");

        let receipt = view.export(ExportKind::Performance).unwrap();
        assert_eq!(receipt.rows, 1);
        assert!(receipt.csv.contains("Mike Davis"));
    }
}

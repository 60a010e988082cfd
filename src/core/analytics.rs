//! Static analytics series shown on the administrator dashboard

use super::Priority;
use serde::{Deserialize, Serialize};

/// Tickets opened and resolved on one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrend {
    pub day: String,
    pub open: u32,
    pub resolved: u32,
}

/// Share of tickets at one priority, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityShare {
    pub priority: Priority,
    pub percent: u8,
}

/// Headline figures reported by the analytics backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskSummary {
    pub total_tickets: u32,
    pub avg_resolution: String,
    pub resolution_rate: u8,
}

/// Totals over a trend series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrendTotals {
    pub opened: u32,
    pub resolved: u32,
}

impl TrendTotals {
    #[must_use]
    pub fn from_series(series: &[DailyTrend]) -> Self {
        series.iter().fold(Self::default(), |acc, day| Self {
            opened: acc.opened + day.open,
            resolved: acc.resolved + day.resolved,
        })
    }

    /// The busiest day by opened tickets
    #[must_use]
    pub fn peak_day(series: &[DailyTrend]) -> Option<&DailyTrend> {
        series.iter().max_by_key(|day| day.open)
    }
}

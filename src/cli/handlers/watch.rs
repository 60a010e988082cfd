//! Handler for the `watch` command
//!
//! Runs the simulated notification feed against the technician dashboard
//! for a fixed number of ticks, or until Ctrl-C.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::error::{HelpdeskError, Result};
use crate::notify::{Notification, NotificationFeed, RandomNotifications};
use crate::views::TechnicianAction;
use std::time::Duration;
use tokio::time::Instant;

/// Options for the `watch` command
#[derive(Debug, Clone, Copy)]
pub struct WatchParams {
    pub ticks: u32,
    pub interval_ms: Option<u64>,
    pub probability: Option<f64>,
}

/// Handler for the `watch` command
pub fn handle_watch_command(
    params: WatchParams,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let interval = params
        .interval_ms
        .map_or_else(|| ctx.config.notifications.interval(), Duration::from_millis);
    if interval.is_zero() {
        return Err(HelpdeskError::InvalidInput(
            "--interval-ms must be greater than zero".to_string(),
        ));
    }
    let probability = params
        .probability
        .unwrap_or(ctx.config.notifications.probability);
    let run_for = run_length(interval, params.ticks)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    output.info(&format!(
        "Watching for new tickets every {}ms ({} ticks, Ctrl-C to stop)",
        interval.as_millis(),
        params.ticks
    ));

    let received = runtime.block_on(watch(run_for, interval, probability, ctx, output))?;

    let view = &ctx.desk.technician;
    if output.is_json() {
        output.print_json(&serde_json::json!({
            "received": received,
            "notifications": view.notifications(),
        }))?;
    } else {
        output.info(&format!(
            "Received {} new notification(s); {} unread",
            received.len(),
            view.notifications()
        ));
    }
    Ok(())
}

/// Time to run for `ticks` ticks, with half a period of slack so the final
/// tick lands before the deadline
fn run_length(interval: Duration, ticks: u32) -> Result<Duration> {
    interval
        .checked_mul(ticks)
        .and_then(|total| total.checked_add(interval / 2))
        .filter(|total| Instant::now().checked_add(*total).is_some())
        .ok_or_else(|| {
            HelpdeskError::InvalidInput(
                "--ticks times --interval-ms is too long to schedule".to_string(),
            )
        })
}

async fn watch(
    run_for: Duration,
    interval: Duration,
    probability: f64,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<Vec<Notification>> {
    let mut feed = NotificationFeed::spawn(RandomNotifications::new(probability), interval);
    let deadline = Instant::now() + run_for;
    let mut received = Vec::new();

    loop {
        tokio::select! {
            () = tokio::time::sleep_until(deadline) => break,
            _ = tokio::signal::ctrl_c() => {
                output.warning("Interrupted");
                break;
            },
            next = feed.recv() => {
                let Some(notification) = next else { break };
                let action = TechnicianAction::Notify(notification.clone());
                if let Some(toast) = ctx.desk.technician.apply(action)? {
                    output.toast(&toast);
                }
                received.push(notification);
            },
        }
    }

    let ran = feed.shutdown().await;
    tracing::debug!(ticks = ran, received = received.len(), "watch finished");
    Ok(received)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length_adds_half_a_tick() {
        let run_for = run_length(Duration::from_millis(100), 3).unwrap();
        assert_eq!(run_for, Duration::from_millis(350));
    }

    #[test]
    fn test_run_length_overflow_is_invalid_input() {
        let err = run_length(Duration::from_millis(u64::MAX), u32::MAX).unwrap_err();
        assert!(matches!(err, HelpdeskError::InvalidInput(_)));
    }
}

//! Simulated push notifications for the technician dashboard
//!
//! A [`NotificationSource`] is asked once per tick whether something new has
//! arrived. [`RandomNotifications`] reproduces the demo's coin flip;
//! [`ScriptedNotifications`] replays a fixed sequence so callers get
//! deterministic behavior. [`NotificationFeed`] drives a source on a timer.

mod feed;

pub use feed::NotificationFeed;

use crate::core::Priority;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Chance per tick that the random source fires
pub const DEFAULT_PROBABILITY: f64 = 0.2;

/// An incoming notification for the technician
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Notification {
    /// The message the demo feed raises
    #[must_use]
    pub fn ticket_assigned() -> Self {
        Self {
            title: "New Ticket Assigned".to_string(),
            description: "A new high-priority ticket has been assigned to you.".to_string(),
            priority: Priority::High,
        }
    }
}

/// Source of notifications, polled once per tick
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSource: Send {
    /// The notification that arrived since the last poll, if any
    fn next_notification(&mut self) -> Option<Notification>;
}

/// Fires [`Notification::ticket_assigned`] with a fixed probability per poll
#[derive(Debug)]
pub struct RandomNotifications {
    probability: f64,
    rng: StdRng,
}

impl RandomNotifications {
    /// `probability` is clamped to `0.0..=1.0`
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source for a given seed
    #[must_use]
    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomNotifications {
    fn default() -> Self {
        Self::new(DEFAULT_PROBABILITY)
    }
}

impl NotificationSource for RandomNotifications {
    fn next_notification(&mut self) -> Option<Notification> {
        self.rng
            .gen_bool(self.probability)
            .then(Notification::ticket_assigned)
    }
}

/// Replays a fixed sequence of poll results, then stays quiet
#[derive(Debug, Default, Clone)]
pub struct ScriptedNotifications {
    script: VecDeque<Option<Notification>>,
}

impl ScriptedNotifications {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Option<Notification>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// A script of `ticks` polls where the listed ticks (zero-based) fire
    #[must_use]
    pub fn firing_on(ticks: usize, firing: &[usize]) -> Self {
        Self::new((0..ticks).map(|tick| {
            firing
                .contains(&tick)
                .then(Notification::ticket_assigned)
        }))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl NotificationSource for ScriptedNotifications {
    fn next_notification(&mut self) -> Option<Notification> {
        self.script.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut source = ScriptedNotifications::firing_on(4, &[1, 3]);
        let fired: Vec<bool> = (0..6).map(|_| source.next_notification().is_some()).collect();
        assert_eq!(fired, vec![false, true, false, true, false, false]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_random_source_extremes() {
        let mut never = RandomNotifications::seeded(0.0, 7);
        let mut always = RandomNotifications::seeded(1.0, 7);
        for _ in 0..50 {
            assert!(never.next_notification().is_none());
            assert!(always.next_notification().is_some());
        }
    }

    #[test]
    fn test_random_source_is_reproducible() {
        let mut a = RandomNotifications::seeded(DEFAULT_PROBABILITY, 42);
        let mut b = RandomNotifications::seeded(DEFAULT_PROBABILITY, 42);
        for _ in 0..100 {
            assert_eq!(a.next_notification(), b.next_notification());
        }
    }

    #[test]
    fn test_probability_is_clamped() {
        assert!((RandomNotifications::new(3.0).probability() - 1.0).abs() < f64::EPSILON);
        assert!(RandomNotifications::new(-1.0).probability().abs() < f64::EPSILON);
    }

    #[test]
    fn test_mock_source() {
        let mut mock = MockNotificationSource::new();
        mock.expect_next_notification()
            .times(1)
            .returning(|| Some(Notification::ticket_assigned()));

        let notification = mock.next_notification().unwrap();
        assert_eq!(notification.title, "New Ticket Assigned");
    }
}

use super::{Notification, NotificationSource};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Timer-driven delivery of notifications from a source
///
/// The source is polled every `period`, starting one period after spawn.
/// Anything it yields is queued for [`NotificationFeed::recv`]. The feed
/// stops when cancelled or dropped.
pub struct NotificationFeed {
    token: CancellationToken,
    receiver: mpsc::Receiver<Notification>,
    handle: Option<JoinHandle<usize>>,
}

impl std::fmt::Debug for NotificationFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationFeed")
            .field("cancelled", &self.token.is_cancelled())
            .field("receiver", &"mpsc::Receiver<Notification>")
            .finish()
    }
}

impl NotificationFeed {
    /// Start polling `source` on a tokio task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S>(mut source: S, period: Duration) -> Self
    where
        S: NotificationSource + 'static,
    {
        let token = CancellationToken::new();
        let (sender, receiver) = mpsc::channel(16);
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut ticks = 0usize;

            loop {
                tokio::select! {
                    biased;
                    () = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        ticks += 1;
                        let Some(notification) = source.next_notification() else {
                            tracing::debug!(tick = ticks, "notification feed tick, nothing new");
                            continue;
                        };
                        tracing::debug!(tick = ticks, title = %notification.title, "notification feed fired");
                        tokio::select! {
                            biased;
                            () = task_token.cancelled() => break,
                            sent = sender.send(notification) => {
                                if sent.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
            }

            tracing::debug!(ticks, "notification feed stopped");
            ticks
        });

        Self {
            token,
            receiver,
            handle: Some(handle),
        }
    }

    /// Next delivered notification; `None` once the feed has stopped and
    /// the queue is drained
    pub async fn recv(&mut self) -> Option<Notification> {
        self.receiver.recv().await
    }

    /// Stop polling; already queued notifications can still be received
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel and wait for the polling task, returning how many ticks ran
    pub async fn shutdown(mut self) -> usize {
        self.token.cancel();
        match self.handle.take() {
            Some(handle) => handle.await.unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for NotificationFeed {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::services::SessionService;
use crate::session::Session;

/// Remaining time under which the countdown flags a low-time warning.
const LOW_TIME_MILLIS: i64 = 5 * 60 * 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    Running {
        /// `mm:ss`, whole seconds floored.
        display: String,
        /// Latched: once under five minutes it stays set, since remaining
        /// time only decreases.
        low_time: bool,
    },
    Expired,
}

/// Pure countdown against a fixed deadline. The async driver feeds it wall
/// clock readings; tests feed it synthetic ones.
pub struct Countdown {
    deadline: DateTime<Utc>,
    low_time: bool,
}

impl Countdown {
    pub fn new(deadline: DateTime<Utc>) -> Self {
        Self {
            deadline,
            low_time: false,
        }
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        let remaining_millis = (self.deadline - now).num_milliseconds();
        if remaining_millis <= 0 {
            return Tick::Expired;
        }

        if remaining_millis < LOW_TIME_MILLIS {
            self.low_time = true;
        }

        let total_seconds = remaining_millis / 1000;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        Tick::Running {
            display: format!("{:02}:{:02}", minutes, seconds),
            low_time: self.low_time,
        }
    }
}

/// Cancellable countdown task tied to one session. Checks once per second;
/// on expiry it displays `00:00` and submits exactly once through the same
/// guard the manual finish path uses. The task stops on its own as soon as
/// the session leaves `InProgress` by any path.
pub struct SessionTimer {
    handle: JoinHandle<()>,
}

impl SessionTimer {
    /// Spawns the countdown for a timed session. Returns `None` when the
    /// session has no deadline. Waits for the session lock rather than
    /// giving up on contention: a timed session must always get its timer.
    pub async fn spawn<F>(
        session: Arc<Mutex<Session>>,
        service: Arc<SessionService>,
        on_tick: F,
    ) -> Option<SessionTimer>
    where
        F: Fn(Tick) + Send + 'static,
    {
        let deadline = { session.lock().await.deadline() }?;

        let handle = tokio::spawn(async move {
            let mut countdown = Countdown::new(deadline);
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately; the check
            // cadence starts one second in, as a recurring timer would.
            interval.tick().await;

            loop {
                interval.tick().await;

                let mut session = session.lock().await;
                if !session.is_in_progress() {
                    break;
                }

                match countdown.tick(Utc::now()) {
                    tick @ Tick::Running { .. } => {
                        drop(session);
                        on_tick(tick);
                    }
                    Tick::Expired => {
                        if let Err(err) = service.submit(&mut session, None, Utc::now()).await {
                            log::error!("Timed auto-submit failed: {}", err);
                        }
                        // Release the session before the callback, as the
                        // Running branch does, so the callback may inspect it.
                        drop(session);
                        on_tick(Tick::Expired);
                        break;
                    }
                }
            }
        });

        Some(SessionTimer { handle })
    }

    /// Stops the countdown without touching the session. Must be called when
    /// a session is abandoned, so no dangling check fires later.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn countdown_formats_remaining_time_floored() {
        let deadline = Utc::now() + ChronoDuration::milliseconds(90_500);
        let mut countdown = Countdown::new(deadline);

        let tick = countdown.tick(deadline - ChronoDuration::milliseconds(90_500));
        // 90.5s remaining displays as 01:30, not 01:31.
        assert_eq!(
            tick,
            Tick::Running {
                display: "01:30".to_string(),
                low_time: true,
            }
        );
    }

    #[test]
    fn countdown_is_not_low_time_above_five_minutes() {
        let start = Utc::now();
        let mut countdown = Countdown::new(start + ChronoDuration::minutes(10));

        match countdown.tick(start) {
            Tick::Running { display, low_time } => {
                assert_eq!(display, "10:00");
                assert!(!low_time);
            }
            Tick::Expired => panic!("timer should still be running"),
        }
    }

    #[test]
    fn low_time_latches_on_once_under_five_minutes() {
        let start = Utc::now();
        let mut countdown = Countdown::new(start + ChronoDuration::minutes(6));

        assert!(matches!(
            countdown.tick(start),
            Tick::Running { low_time: false, .. }
        ));
        assert!(matches!(
            countdown.tick(start + ChronoDuration::minutes(2)),
            Tick::Running { low_time: true, .. }
        ));
        // Stays flagged on every later tick.
        assert!(matches!(
            countdown.tick(start + ChronoDuration::minutes(3)),
            Tick::Running { low_time: true, .. }
        ));
    }

    #[test]
    fn countdown_expires_at_and_past_the_deadline() {
        let start = Utc::now();
        let deadline = start + ChronoDuration::minutes(1);
        let mut countdown = Countdown::new(deadline);

        assert_eq!(countdown.tick(deadline), Tick::Expired);
        assert_eq!(
            countdown.tick(deadline + ChronoDuration::seconds(5)),
            Tick::Expired
        );
    }
}

//! Scoped one-second countdown ticker.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::remaining::{remaining_for, DigitVisibility, Remaining};

/// Period between countdown recomputations.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One published countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CountdownTick {
    pub remaining: Remaining,
    pub visibility: DigitVisibility,
}

impl CountdownTick {
    /// Countdown state for `target` as seen at `now`.
    pub fn at(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let remaining = remaining_for(target, now);
        Self {
            remaining,
            visibility: remaining.visibility(),
        }
    }
}

/// Recurring countdown owned by a view.
///
/// The ticker task lives exactly as long as this handle: dropping it (or
/// calling [`CountdownTimer::stop`]) aborts the task, so no tick ever runs
/// against a torn-down view. To follow a new target, drop the timer and
/// start another one.
///
/// Ticks are published on a [`watch`] channel; each tick is sent before the
/// next one is computed. The task ends on its own once it has published an
/// expired tick.
#[derive(Debug)]
pub struct CountdownTimer {
    receiver: watch::Receiver<CountdownTick>,
    task: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    /// Start counting down to `target`.
    ///
    /// The initial state is computed immediately. When `target` is `None`
    /// or already in the past no task is spawned. Outside a tokio runtime
    /// the timer keeps its initial state and never ticks.
    pub fn start<C: Clock>(target: Option<DateTime<Utc>>, clock: C) -> Self {
        let initial = CountdownTick::at(target, clock.now());
        let (sender, receiver) = watch::channel(initial);

        let task = match (target, Handle::try_current()) {
            (Some(target), Ok(runtime)) if !initial.remaining.is_expired() => {
                tracing::debug!(%target, "countdown timer started");
                Some(runtime.spawn(run_ticker(target, clock, sender)))
            }
            (Some(_), Err(_)) if !initial.remaining.is_expired() => {
                tracing::warn!("no tokio runtime, countdown will not tick");
                None
            }
            _ => None,
        };

        Self { receiver, task }
    }

    /// A timer with no target: all zero, nothing scheduled.
    pub fn idle() -> Self {
        let (_, receiver) = watch::channel(CountdownTick::default());
        Self {
            receiver,
            task: None,
        }
    }

    /// Latest published state.
    pub fn current(&self) -> CountdownTick {
        *self.receiver.borrow()
    }

    /// Subscribe to tick updates.
    ///
    /// `changed()` on the receiver errors once the ticker has stopped.
    pub fn subscribe(&self) -> watch::Receiver<CountdownTick> {
        self.receiver.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the ticker. The last published state stays readable.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("countdown timer stopped");
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_ticker<C: Clock>(
    target: DateTime<Utc>,
    clock: C,
    sender: watch::Sender<CountdownTick>,
) {
    let mut ticks = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;

        let tick = CountdownTick::at(Some(target), clock.now());
        if sender.send(tick).is_err() {
            break;
        }
        if tick.remaining.is_expired() {
            tracing::debug!(%target, "countdown reached zero");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Wall clock anchored at `base` that advances with tokio's (pausable)
    /// clock.
    struct TestClock {
        base: DateTime<Utc>,
        started: Instant,
    }

    impl TestClock {
        fn new(base: DateTime<Utc>) -> Self {
            Self {
                base,
                started: Instant::now(),
            }
        }
    }

    impl Clock for TestClock {
        fn now(&self) -> DateTime<Utc> {
            let elapsed = chrono::Duration::from_std(self.started.elapsed()).unwrap();
            self.base + elapsed
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 9, 18, 23, 59, 50).unwrap()
    }

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 9, 19, 0, 0, 0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state_is_immediate() {
        let timer = CountdownTimer::start(Some(target()), TestClock::new(base()));
        assert_eq!(timer.current().remaining.seconds, 10);
        assert_eq!(timer.current().visibility, DigitVisibility::Visible);
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let timer = CountdownTimer::start(Some(target()), TestClock::new(base()));
        let mut updates = timer.subscribe();

        for expected in [9, 8, 7] {
            updates.changed().await.unwrap();
            let tick = *updates.borrow_and_update();
            assert_eq!(tick.remaining.seconds, expected);
            assert_eq!(tick.visibility, DigitVisibility::for_seconds(expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_after_expiry() {
        let timer = CountdownTimer::start(Some(target()), TestClock::new(base()));
        let mut updates = timer.subscribe();

        let mut last = timer.current();
        while updates.changed().await.is_ok() {
            last = *updates.borrow_and_update();
        }

        assert!(last.remaining.is_expired());
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticker() {
        let timer = CountdownTimer::start(Some(target()), TestClock::new(base()));
        let mut updates = timer.subscribe();
        updates.changed().await.unwrap();

        drop(timer);

        assert!(updates.changed().await.is_err());
        assert_eq!(updates.borrow().remaining.seconds, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_keeps_last_state() {
        let mut timer = CountdownTimer::start(Some(target()), TestClock::new(base()));
        let mut updates = timer.subscribe();
        updates.changed().await.unwrap();

        timer.stop();
        tokio::task::yield_now().await;

        assert!(!timer.is_running());
        assert_eq!(timer.current().remaining.seconds, 9);
    }

    #[test]
    fn test_without_runtime_keeps_initial_state() {
        let timer = CountdownTimer::start(Some(target()), TestClock::new(base()));
        assert!(!timer.is_running());
        assert_eq!(timer.current().remaining.seconds, 10);
    }

    #[tokio::test]
    async fn test_missing_or_past_target_schedules_nothing() {
        let unset = CountdownTimer::start(None, SystemClock);
        assert!(!unset.is_running());
        assert_eq!(unset.current(), CountdownTick::default());

        let past = CountdownTimer::start(Some(target()), SystemClock);
        assert!(!past.is_running());
        assert!(past.current().remaining.is_expired());

        assert!(!CountdownTimer::idle().is_running());
    }
}

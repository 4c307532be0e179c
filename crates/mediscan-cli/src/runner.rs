//! Terminal host for the analysis driver
//!
//! Carries out driver effects on tokio timers. A run ends when the driver
//! navigates, or when `shutdown` resolves first, in which case the driver is
//! torn down and its pending timers dropped.

use mediscan_core::{Effect, Notification, ProgressDriver, Route, RunId, UploadError, UploadProgress, UploadSelection};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use tokio::time::{interval_at, sleep, Instant, Interval, MissedTickBehavior, Sleep};
use tracing::{debug, warn};

/// Something the user would have seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Progress(UploadProgress),
    Notified(Notification),
    Navigated(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(Route),
    Interrupted { percent: u8 },
}

struct Timers {
    ticker: Option<(RunId, Interval)>,
    completion: Option<(RunId, Pin<Box<Sleep>>)>,
}

impl Timers {
    fn is_idle(&self) -> bool {
        self.ticker.is_none() && self.completion.is_none()
    }
}

async fn next_tick(ticker: &mut Option<(RunId, Interval)>) -> RunId {
    match ticker {
        Some((run, interval)) => {
            interval.tick().await;
            *run
        }
        None => std::future::pending().await,
    }
}

async fn next_completion(completion: &mut Option<(RunId, Pin<Box<Sleep>>)>) -> RunId {
    match completion {
        Some((run, delay)) => {
            delay.as_mut().await;
            *run
        }
        None => std::future::pending().await,
    }
}

pub async fn run<F>(
    driver: &mut ProgressDriver,
    selection: &UploadSelection,
    shutdown: F,
    mut on_event: impl FnMut(HostEvent),
) -> Result<RunOutcome, UploadError>
where
    F: Future<Output = ()>,
{
    let mut pending: VecDeque<Effect> = driver.start(selection)?.into();
    let mut timers = Timers {
        ticker: None,
        completion: None,
    };
    let mut percent = 0;
    tokio::pin!(shutdown);

    loop {
        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::Progress(progress) => {
                    percent = progress.percent;
                    on_event(HostEvent::Progress(progress));
                }
                Effect::StartTicker { run, every } => {
                    let mut interval = interval_at(Instant::now() + every, every);
                    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    timers.ticker = Some((run, interval));
                }
                Effect::StopTicker { run } => {
                    if matches!(&timers.ticker, Some((current, _)) if *current == run) {
                        timers.ticker = None;
                    }
                }
                Effect::ScheduleCompletion { run, after } => {
                    timers.completion = Some((run, Box::pin(sleep(after))));
                }
                Effect::CancelCompletion { run } => {
                    if matches!(&timers.completion, Some((current, _)) if *current == run) {
                        timers.completion = None;
                    }
                }
                Effect::Notify(notification) => on_event(HostEvent::Notified(notification)),
                Effect::Navigate(route) => {
                    on_event(HostEvent::Navigated(route));
                    return Ok(RunOutcome::Completed(route));
                }
            }
        }

        if timers.is_idle() {
            warn!("driver left no timers pending");
            return Ok(RunOutcome::Interrupted { percent });
        }

        tokio::select! {
            _ = &mut shutdown => {
                debug!(percent, "shutdown requested");
                // Pending timers drop with this frame
                driver.teardown();
                return Ok(RunOutcome::Interrupted { percent });
            }
            run = next_tick(&mut timers.ticker) => pending.extend(driver.tick(run)),
            run = next_completion(&mut timers.completion) => {
                timers.completion = None;
                pending.extend(driver.complete(run));
            }
        }
    }
}

//! Simulated analysis driver
//!
//! [`ProgressDriver`] is a small state machine that owns no timers. Every
//! operation returns the [`Effect`]s its host has to carry out: start or stop
//! the periodic ticker, arm or disarm the completion timer, show a
//! notification, navigate. Timer effects carry the [`RunId`] they belong to,
//! and ticks or completions from any other run are dropped.
//!
//! ```text
//! Idle ──start──▶ Running ──tick (100%)──▶ Settling ──complete──▶ Completed
//!                    │                        │
//!                    └──────── teardown ──────┴──▶ Detached
//! ```

use super::{UploadError, UploadSelection};
use crate::notify::{self, Notification};
use crate::route::Route;
use crate::{CoreResult, SimulationConfig};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Identifies one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

/// What the progress indicator shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadProgress {
    pub is_uploading: bool,
    /// 0-100
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running { run: RunId, percent: u8 },
    /// 100% reached, completion timer armed
    Settling { run: RunId },
    Completed { run: RunId },
    /// The hosting view is gone
    Detached,
}

/// Work the host performs on behalf of the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Progress(UploadProgress),
    StartTicker { run: RunId, every: Duration },
    StopTicker { run: RunId },
    ScheduleCompletion { run: RunId, after: Duration },
    CancelCompletion { run: RunId },
    Notify(Notification),
    Navigate(Route),
}

#[derive(Debug, Clone)]
pub struct ProgressDriver {
    config: SimulationConfig,
    state: DriverState,
    runs_started: u64,
}

impl ProgressDriver {
    /// Build a driver, rejecting a config that could never reach 100%
    pub fn new(config: SimulationConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SimulationConfig) -> Self {
        Self {
            config,
            state: DriverState::Idle,
            runs_started: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn current_run(&self) -> Option<RunId> {
        match self.state {
            DriverState::Running { run, .. }
            | DriverState::Settling { run }
            | DriverState::Completed { run } => Some(run),
            DriverState::Idle | DriverState::Detached => None,
        }
    }

    pub fn progress(&self) -> UploadProgress {
        match self.state {
            DriverState::Running { percent, .. } => UploadProgress { is_uploading: true, percent },
            DriverState::Settling { .. } => UploadProgress { is_uploading: true, percent: 100 },
            DriverState::Completed { .. } => UploadProgress { is_uploading: false, percent: 100 },
            DriverState::Idle | DriverState::Detached => UploadProgress::default(),
        }
    }

    /// Begin a run.
    ///
    /// A run already in flight is left untouched and the call is rejected with
    /// [`UploadError::AlreadyRunning`]. A missing selection is rejected before
    /// any state changes.
    pub fn start(&mut self, selection: &UploadSelection) -> Result<Vec<Effect>, UploadError> {
        match self.state {
            DriverState::Detached => return Err(UploadError::Detached),
            DriverState::Running { run, .. } | DriverState::Settling { run } => {
                debug!(%run, "start ignored, run in progress");
                return Err(UploadError::AlreadyRunning);
            }
            DriverState::Idle | DriverState::Completed { .. } => {}
        }

        let (report_type, file) = selection.require().map_err(|e| {
            warn!("analysis requested without a complete selection");
            e
        })?;

        self.runs_started += 1;
        let run = RunId(self.runs_started);
        self.state = DriverState::Running { run, percent: 0 };
        debug!(%run, report_type = report_type.id(), file = %file.name, "analysis started");

        Ok(vec![
            Effect::Progress(self.progress()),
            Effect::StartTicker {
                run,
                every: self.config.tick_interval,
            },
        ])
    }

    /// Advance the counter by one step, clamped at 100
    pub fn tick(&mut self, run: RunId) -> Vec<Effect> {
        let percent = match self.state {
            DriverState::Running { run: current, percent } if current == run => percent,
            _ => {
                trace!(%run, "stale tick dropped");
                return Vec::new();
            }
        };

        let next = percent.saturating_add(self.config.step).min(100);
        if next < 100 {
            self.state = DriverState::Running { run, percent: next };
            return vec![Effect::Progress(self.progress())];
        }

        self.state = DriverState::Settling { run };
        debug!(%run, "progress complete, settling");
        vec![
            Effect::Progress(self.progress()),
            Effect::StopTicker { run },
            Effect::ScheduleCompletion {
                run,
                after: self.config.completion_delay,
            },
        ]
    }

    /// Fire the completion action. Only the first call for a settled run has
    /// any effect.
    pub fn complete(&mut self, run: RunId) -> Vec<Effect> {
        match self.state {
            DriverState::Settling { run: current } if current == run => {}
            _ => {
                trace!(%run, "completion dropped");
                return Vec::new();
            }
        }

        self.state = DriverState::Completed { run };
        debug!(%run, "analysis completed");
        vec![
            Effect::Progress(self.progress()),
            Effect::Notify(Notification::success(notify::ANALYSIS_COMPLETE)),
            Effect::Navigate(Route::Results),
        ]
    }

    /// Detach from the hosting view, releasing whatever timer is pending.
    /// Every later call is a no-op.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let effects = match self.state {
            DriverState::Running { run, .. } => vec![Effect::StopTicker { run }],
            DriverState::Settling { run } => vec![Effect::CancelCompletion { run }],
            _ => Vec::new(),
        };
        if !effects.is_empty() {
            debug!("driver torn down mid-run");
        }
        self.state = DriverState::Detached;
        effects
    }
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::with_valid_config(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReportType;
    use crate::notify::NotificationLevel;
    use crate::upload::SelectedFile;
    use crate::CoreError;

    /// Runs the driver against a virtual clock
    struct VirtualHost {
        driver: ProgressDriver,
        now: Duration,
        ticker: Option<(RunId, Duration, Duration)>,
        completion: Option<(RunId, Duration)>,
        tickers_started: usize,
        percents: Vec<u8>,
        notifications: Vec<Notification>,
        navigations: Vec<Route>,
    }

    impl VirtualHost {
        fn new(config: SimulationConfig) -> Self {
            Self {
                driver: ProgressDriver::new(config).unwrap(),
                now: Duration::ZERO,
                ticker: None,
                completion: None,
                tickers_started: 0,
                percents: Vec::new(),
                notifications: Vec::new(),
                navigations: Vec::new(),
            }
        }

        fn apply(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::Progress(p) => self.percents.push(p.percent),
                    Effect::StartTicker { run, every } => {
                        assert!(self.ticker.is_none(), "second ticker scheduled");
                        self.ticker = Some((run, every, self.now + every));
                        self.tickers_started += 1;
                    }
                    Effect::StopTicker { run } => {
                        if matches!(self.ticker, Some((r, _, _)) if r == run) {
                            self.ticker = None;
                        }
                    }
                    Effect::ScheduleCompletion { run, after } => {
                        assert!(self.completion.is_none(), "second completion scheduled");
                        self.completion = Some((run, self.now + after));
                    }
                    Effect::CancelCompletion { run } => {
                        if matches!(self.completion, Some((r, _)) if r == run) {
                            self.completion = None;
                        }
                    }
                    Effect::Notify(n) => self.notifications.push(n),
                    Effect::Navigate(route) => self.navigations.push(route),
                }
            }
        }

        fn start(&mut self, selection: &UploadSelection) -> Result<(), UploadError> {
            let effects = self.driver.start(selection)?;
            self.apply(effects);
            Ok(())
        }

        fn teardown(&mut self) {
            let effects = self.driver.teardown();
            self.apply(effects);
        }

        fn advance(&mut self, by: Duration) {
            let until = self.now + by;
            loop {
                let next_tick = self.ticker.map(|(_, _, due)| due);
                let next_completion = self.completion.map(|(_, due)| due);
                let due = match [next_tick, next_completion].into_iter().flatten().min() {
                    Some(due) if due <= until => due,
                    _ => break,
                };
                self.now = due;

                if next_completion == Some(due) {
                    let (run, _) = self.completion.take().unwrap();
                    let effects = self.driver.complete(run);
                    self.apply(effects);
                } else {
                    let (run, every, _) = self.ticker.unwrap();
                    self.ticker = Some((run, every, due + every));
                    let effects = self.driver.tick(run);
                    self.apply(effects);
                }
            }
            self.now = until;
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn mri_selection() -> UploadSelection {
        UploadSelection {
            report_type: Some(ReportType::Mri),
            file: Some(SelectedFile::new("scan.png", 2048, "image/png")),
        }
    }

    #[test]
    fn test_full_run_scenario() {
        let mut host = VirtualHost::new(SimulationConfig::default());
        host.start(&mri_selection()).unwrap();
        assert!(host.driver.progress().is_uploading);

        host.advance(ms(2000));
        assert_eq!(host.percents, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(host.ticker.is_none());
        assert!(host.navigations.is_empty());

        host.advance(ms(499));
        assert!(host.notifications.is_empty());

        host.advance(ms(1));
        assert_eq!(host.notifications.len(), 1);
        assert_eq!(host.notifications[0].level, NotificationLevel::Success);
        assert_eq!(host.navigations, vec![Route::Results]);
        assert!(!host.driver.progress().is_uploading);

        host.advance(ms(10_000));
        assert_eq!(host.notifications.len(), 1);
        assert_eq!(host.navigations.len(), 1);
    }

    #[test]
    fn test_missing_report_type() {
        let mut host = VirtualHost::new(SimulationConfig::default());
        let selection = UploadSelection {
            report_type: None,
            file: Some(SelectedFile::new("scan.png", 10, "image/png")),
        };

        let err = host.start(&selection).unwrap_err();
        assert_eq!(err, UploadError::MissingSelection);
        assert!(err.notification().unwrap().is_error());

        host.advance(ms(5000));
        assert!(host.percents.is_empty());
        assert_eq!(host.driver.state(), DriverState::Idle);
        assert!(!host.driver.progress().is_uploading);
    }

    #[test]
    fn test_missing_file() {
        let mut driver = ProgressDriver::default();
        let selection = UploadSelection {
            report_type: Some(ReportType::BloodTest),
            file: None,
        };
        assert_eq!(driver.start(&selection), Err(UploadError::MissingSelection));
        assert_eq!(driver.current_run(), None);
    }

    #[test]
    fn test_percent_is_monotonic_and_clamped() {
        let config = SimulationConfig { step: 30, ..Default::default() };
        let mut host = VirtualHost::new(config);
        host.start(&mri_selection()).unwrap();
        host.advance(ms(10_000));

        assert_eq!(host.percents.first(), Some(&0));
        assert_eq!(host.percents.last(), Some(&100));
        assert!(host.percents.windows(2).all(|w| w[0] <= w[1]));
        assert!(host.percents.iter().all(|p| *p <= 100));
        assert!(host.percents.starts_with(&[0, 30, 60, 90, 100]));
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let mut host = VirtualHost::new(SimulationConfig::default());
        host.start(&mri_selection()).unwrap();
        host.advance(ms(400));

        assert_eq!(host.start(&mri_selection()), Err(UploadError::AlreadyRunning));
        assert_eq!(host.tickers_started, 1);
        assert_eq!(host.driver.progress().percent, 20);

        host.advance(ms(2000));
        assert_eq!(host.start(&mri_selection()), Err(UploadError::AlreadyRunning));

        host.advance(ms(1000));
        assert_eq!(host.notifications.len(), 1);
        assert_eq!(host.navigations.len(), 1);
    }

    #[test]
    fn test_restart_after_completion_fires_once_per_run() {
        let mut host = VirtualHost::new(SimulationConfig::default());
        host.start(&mri_selection()).unwrap();
        host.advance(ms(3000));
        let first = host.driver.current_run().unwrap();

        host.start(&mri_selection()).unwrap();
        let second = host.driver.current_run().unwrap();
        assert_ne!(first, second);

        // leftovers from the first run are ignored
        assert!(host.driver.tick(first).is_empty());
        assert!(host.driver.complete(first).is_empty());

        host.advance(ms(3000));
        assert_eq!(host.tickers_started, 2);
        assert_eq!(host.notifications.len(), 2);
        assert_eq!(host.navigations, vec![Route::Results, Route::Results]);
    }

    #[test]
    fn test_completion_only_after_full_progress() {
        let mut driver = ProgressDriver::default();
        driver.start(&mri_selection()).unwrap();
        let run = driver.current_run().unwrap();

        assert!(driver.complete(run).is_empty());
        for _ in 0..9 {
            driver.tick(run);
        }
        assert_eq!(driver.progress().percent, 90);
        assert!(driver.complete(run).is_empty());

        let effects = driver.tick(run);
        assert!(effects.contains(&Effect::StopTicker { run }));
        assert!(effects.contains(&Effect::ScheduleCompletion { run, after: ms(500) }));

        let effects = driver.complete(run);
        assert!(effects.contains(&Effect::Navigate(Route::Results)));
        assert!(driver.complete(run).is_empty());
    }

    #[test]
    fn test_ticks_after_settling_are_dropped() {
        let mut driver = ProgressDriver::new(SimulationConfig { step: 100, ..Default::default() }).unwrap();
        driver.start(&mri_selection()).unwrap();
        let run = driver.current_run().unwrap();
        assert_eq!(driver.tick(run).len(), 3);
        assert!(driver.tick(run).is_empty());
        assert_eq!(driver.state(), DriverState::Settling { run });
    }

    #[test]
    fn test_teardown_mid_run_stops_everything() {
        let mut host = VirtualHost::new(SimulationConfig::default());
        host.start(&mri_selection()).unwrap();
        host.advance(ms(600));
        assert_eq!(host.percents.last(), Some(&30));
        let run = host.driver.current_run().unwrap();

        host.teardown();
        assert!(host.ticker.is_none());

        host.advance(ms(10_000));
        assert_eq!(host.percents.last(), Some(&30));
        assert!(host.notifications.is_empty());
        assert!(host.navigations.is_empty());

        assert!(host.driver.tick(run).is_empty());
        assert!(host.driver.complete(run).is_empty());
        assert_eq!(host.start(&mri_selection()), Err(UploadError::Detached));
    }

    #[test]
    fn test_teardown_while_settling_cancels_completion() {
        let mut host = VirtualHost::new(SimulationConfig::default());
        host.start(&mri_selection()).unwrap();
        host.advance(ms(2100));
        assert!(host.completion.is_some());

        host.teardown();
        assert!(host.completion.is_none());

        host.advance(ms(5000));
        assert!(host.notifications.is_empty());
        assert!(host.navigations.is_empty());
    }

    #[test]
    fn test_teardown_when_idle_is_quiet() {
        let mut driver = ProgressDriver::default();
        assert!(driver.teardown().is_empty());
        assert!(driver.teardown().is_empty());
        assert_eq!(driver.state(), DriverState::Detached);
    }

    #[test]
    fn test_zero_step_config_is_rejected() {
        let config = SimulationConfig { step: 0, ..Default::default() };
        assert!(matches!(ProgressDriver::new(config), Err(CoreError::Config(_))));

        let config = SimulationConfig { tick_interval: Duration::ZERO, ..Default::default() };
        assert!(ProgressDriver::new(config).is_err());
    }

    #[test]
    fn test_every_valid_step_reaches_exactly_100() {
        for step in 1..=100u8 {
            let mut driver = ProgressDriver::new(SimulationConfig { step, ..Default::default() }).unwrap();
            driver.start(&mri_selection()).unwrap();
            let run = driver.current_run().unwrap();
            for _ in 0..driver.config().ticks_per_run() {
                driver.tick(run);
            }
            assert_eq!(driver.state(), DriverState::Settling { run }, "step {}", step);
            assert_eq!(driver.progress().percent, 100);
        }
    }
}

//! Browser host for the analysis driver
//!
//! Carries out the driver's effects with the window's timers. The interval
//! and timeout handles are owned here and cleared when the upload page goes
//! away, so no tick or completion can fire against a disposed view.

use crate::components::Toaster;
use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::*;
use mediscan_core::{Effect, ProgressDriver, Route, RunId, UploadProgress, UploadSelection};
use tracing::{debug, error};

#[derive(Clone, Copy)]
pub struct DriverHost {
    driver: StoredValue<ProgressDriver>,
    ticker: StoredValue<Option<IntervalHandle>>,
    completion: StoredValue<Option<TimeoutHandle>>,
    progress: WriteSignal<UploadProgress>,
    toaster: Toaster,
    navigate: Callback<Route>,
}

impl DriverHost {
    /// Create a host bound to the current reactive owner. Teardown is
    /// registered with `on_cleanup`.
    pub fn mount(
        driver: ProgressDriver,
        progress: WriteSignal<UploadProgress>,
        toaster: Toaster,
        navigate: Callback<Route>,
    ) -> Self {
        let host = Self {
            driver: store_value(driver),
            ticker: store_value(None),
            completion: store_value(None),
            progress,
            toaster,
            navigate,
        };
        on_cleanup(move || host.teardown());
        host
    }

    pub fn start(self, selection: &UploadSelection) {
        match self.driver.try_update_value(|driver| driver.start(selection)) {
            Some(Ok(effects)) => self.apply(effects),
            Some(Err(err)) => match err.notification() {
                Some(notification) => self.toaster.push(notification),
                None => debug!(%err, "start ignored"),
            },
            None => {}
        }
    }

    fn tick(self, run: RunId) {
        if let Some(effects) = self.driver.try_update_value(|driver| driver.tick(run)) {
            self.apply(effects);
        }
    }

    fn complete(self, run: RunId) {
        if let Some(effects) = self.driver.try_update_value(|driver| driver.complete(run)) {
            self.apply(effects);
        }
    }

    fn teardown(self) {
        if let Some(effects) = self.driver.try_update_value(|driver| driver.teardown()) {
            self.apply(effects);
        }
    }

    fn apply(self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Progress(progress) => {
                    self.progress.try_set(progress);
                }
                Effect::StartTicker { run, every } => {
                    match set_interval_with_handle(move || self.tick(run), every) {
                        Ok(handle) => self.replace_ticker(Some(handle)),
                        Err(err) => error!(?err, "failed to start progress ticker"),
                    }
                }
                Effect::StopTicker { .. } => self.replace_ticker(None),
                Effect::ScheduleCompletion { run, after } => {
                    match set_timeout_with_handle(move || self.complete(run), after) {
                        Ok(handle) => self.replace_completion(Some(handle)),
                        Err(err) => error!(?err, "failed to schedule completion"),
                    }
                }
                Effect::CancelCompletion { .. } => self.replace_completion(None),
                Effect::Notify(notification) => self.toaster.push(notification),
                Effect::Navigate(route) => self.navigate.call(route),
            }
        }
    }

    fn replace_ticker(self, next: Option<IntervalHandle>) {
        match self.ticker.try_update_value(|slot| std::mem::replace(slot, next)) {
            Some(previous) => previous.into_iter().for_each(|handle| handle.clear()),
            // Owner already disposed; nothing may keep running
            None => next.into_iter().for_each(|handle| handle.clear()),
        }
    }

    fn replace_completion(self, next: Option<TimeoutHandle>) {
        match self.completion.try_update_value(|slot| std::mem::replace(slot, next)) {
            Some(previous) => previous.into_iter().for_each(|handle| handle.clear()),
            None => next.into_iter().for_each(|handle| handle.clear()),
        }
    }
}

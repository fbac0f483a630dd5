// crates/geofill-core/src/debounce.rs

//! # Debouncer
//!
//! A single-slot owner for the pending fetch trigger. Every new trigger
//! cancels the previous timer through the host's [`Scheduler`] before a new
//! one is scheduled, so at most one timer is ever live.

use std::time::Duration;

/// Stamp identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken(pub u64);

/// Host timer facility.
///
/// When the delay elapses the host calls back into the controller with the
/// token it was given (see [`crate::AddressAutocomplete::handle_debounce_elapsed`]).
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay: Duration, token: DebounceToken) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    next_token: u64,
    slot: Option<(DebounceToken, S::Handle)>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            next_token: 0,
            slot: None,
        }
    }

    /// Cancels any live timer and schedules a fresh one.
    pub fn trigger(&mut self) -> DebounceToken {
        self.cancel();
        let token = DebounceToken(self.next_token);
        self.next_token += 1;
        let handle = self.scheduler.schedule(self.delay, token);
        self.slot = Some((token, handle));
        token
    }

    /// Consumes the slot if `token` is the live timer.
    ///
    /// Returns `false` for a timer that was already replaced or cancelled.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        match &self.slot {
            Some((live, _)) if *live == token => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.slot.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

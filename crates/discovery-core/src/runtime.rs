//! Async driver for the simulated operations.
//!
//! The driver owns a [`Session`], turns every [`Effect`] into a Tokio timer
//! and feeds the completion intent back when the timer fires. Timers live in
//! a [`JoinSet`], so dropping the driver aborts whatever is still pending.

use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::TimingConfig;
use crate::message::{Effect, Intent};
use crate::session::Session;

pub struct Driver {
    session: Session,
    timing: TimingConfig,
    timers: JoinSet<Intent>,
}

impl Driver {
    pub fn new(session: Session) -> Self {
        let timing = session.config().timing.clone();
        Self {
            session,
            timing,
            timers: JoinSet::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(mut self) -> Session {
        self.shutdown();
        self.session
    }

    /// Number of timers not yet delivered.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Apply an intent and schedule its effects.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn dispatch(&mut self, intent: Intent) {
        for effect in self.session.update(intent) {
            self.schedule(effect);
        }
    }

    fn delay_for(&self, effect: &Effect) -> Duration {
        match effect {
            Effect::StartFetch(_) => self.timing.fetch_delay(),
            Effect::StartSave { .. } => self.timing.save_delay(),
            Effect::ScheduleSaveDismiss(_) => self.timing.save_dismiss(),
        }
    }

    fn schedule(&mut self, effect: Effect) {
        let delay = self.delay_for(&effect);
        debug!(
            ticket = %effect.ticket(),
            ?delay,
            ?effect,
            "timer scheduled"
        );
        self.timers.spawn(async move {
            tokio::time::sleep(delay).await;
            effect.completion()
        });
    }

    /// Wait for the next timer and apply its completion.
    ///
    /// Returns `None` once no timers are left.
    pub async fn step(&mut self) -> Option<Intent> {
        loop {
            match self.timers.join_next().await? {
                Ok(intent) => {
                    self.dispatch(intent.clone());
                    return Some(intent);
                }
                Err(error) if error.is_cancelled() => continue,
                Err(error) => warn!(%error, "timer task failed"),
            }
        }
    }

    /// Apply completions until `done` holds or no timers remain.
    pub async fn run_until(&mut self, done: impl Fn(&Session) -> bool) -> bool {
        while !done(&self.session) {
            if self.step().await.is_none() {
                return done(&self.session);
            }
        }
        true
    }

    /// Apply completions until no timers remain.
    pub async fn settle(&mut self) {
        while self.step().await.is_some() {}
    }

    /// Abort every pending timer and cancel the operations they served.
    pub fn shutdown(&mut self) {
        if !self.timers.is_empty() {
            debug!(pending = self.timers.len(), "aborting timers");
        }
        self.timers.abort_all();
        self.session.cancel_pending();
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("session", &self.session)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}

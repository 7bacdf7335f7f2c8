//! Timer session state machine
//!
//! A session moves between three phases:
//! - Idle: name and duration can be edited
//! - Running: the ticker counts `time_left` down once per second
//! - Finished: the countdown reached zero; start again or reset
//!
//! `name` and `completions` are rehydrated from storage when the session
//! is mounted and written back whenever they change.

use crate::storage::{self, SharedStore, KEY_COMPLETIONS, KEY_USERNAME};
use crate::timer::Ticker;
use crate::types::{progress_percent, Phase, TimerDuration, PHRASES};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Rejected timer operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("Enter your name!")]
    EmptyName,
}

/// Message the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Invalid(TimerError),
    Completed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Invalid(_) => "Cannot Start",
            Notice::Completed => "Done",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Invalid(e) => e.to_string(),
            Notice::Completed => "🎉 Timer finished!".to_string(),
        }
    }
}

/// State of one timer widget
pub struct TimerSession {
    name: String,
    duration: TimerDuration,
    time_left: u32,
    phase: Phase,
    completions: u64,
    phrase: Option<&'static str>,
    // Present exactly while the phase is Running
    ticker: Option<Ticker>,
    store: SharedStore,
}

impl fmt::Debug for TimerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerSession")
            .field("name", &self.name)
            .field("duration", &self.duration)
            .field("time_left", &self.time_left)
            .field("phase", &self.phase)
            .field("completions", &self.completions)
            .field("phrase", &self.phrase)
            .finish_non_exhaustive()
    }
}

impl TimerSession {
    /// Create a session, reading the persisted name and completion count
    pub fn mount(store: SharedStore) -> Self {
        let name = storage::read(&store, KEY_USERNAME).unwrap_or_default();
        let completions = storage::parse_count(storage::read(&store, KEY_COMPLETIONS).as_deref());

        debug!(name = %name, completions, "Timer session mounted");

        Self {
            name,
            duration: TimerDuration::default(),
            time_left: 0,
            phase: Phase::Idle,
            completions,
            phrase: None,
            ticker: None,
            store,
        }
    }

    // === VIEW STATE ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> TimerDuration {
        self.duration
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn completions(&self) -> u64 {
        self.completions
    }

    /// Phrase picked by the last completed run, empty otherwise
    pub fn motivational_phrase(&self) -> &str {
        self.phrase.unwrap_or("")
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.duration.seconds(), self.time_left)
    }

    /// Time until the ticker next fires, if one is armed
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().map(|t| t.until_next(now))
    }

    // === IDLE EDITING ===

    /// Replace the name. Only allowed while idle.
    pub fn set_name(&mut self, name: &str) {
        if self.phase != Phase::Idle || self.name == name {
            return;
        }
        self.name = name.to_string();
        self.persist_name();
    }

    pub fn push_name_char(&mut self, c: char) {
        if self.phase != Phase::Idle {
            return;
        }
        self.name.push(c);
        self.persist_name();
    }

    pub fn pop_name_char(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        if self.name.pop().is_some() {
            self.persist_name();
        }
    }

    /// Choose the countdown length. Only allowed while idle.
    pub fn set_duration(&mut self, duration: TimerDuration) {
        if self.phase == Phase::Idle {
            self.duration = duration;
        }
    }

    /// Step the duration selector forward or backward
    pub fn cycle_duration(&mut self, forward: bool) {
        let next = if forward {
            self.duration.next()
        } else {
            self.duration.prev()
        };
        self.set_duration(next);
    }

    // === TRANSITIONS ===

    /// Start (or restart after finishing) the countdown
    pub fn start(&mut self, now: Instant) -> Result<(), TimerError> {
        if self.phase == Phase::Running {
            debug!("Start ignored, countdown already running");
            return Ok(());
        }
        if self.name.trim().is_empty() {
            return Err(TimerError::EmptyName);
        }

        self.time_left = self.duration.seconds();
        self.phrase = None;
        self.phase = Phase::Running;
        self.ticker = Some(Ticker::start(now));

        info!(name = %self.name, seconds = self.time_left, "Countdown started");
        Ok(())
    }

    /// Deliver every tick that is due at `now`
    pub fn advance(&mut self, now: Instant) -> Option<Notice> {
        let due = self.ticker.as_mut().map_or(0, |t| t.drain(now));
        for _ in 0..due {
            if let Some(notice) = self.tick() {
                return Some(notice);
            }
        }
        None
    }

    /// One elapsed second
    pub fn tick(&mut self) -> Option<Notice> {
        self.tick_with(&mut rand::thread_rng())
    }

    /// One elapsed second, picking the phrase with `rng`
    pub fn tick_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Notice> {
        if !self.is_running() {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);
        debug!(time_left = self.time_left, "Tick");

        if self.time_left > 0 {
            return None;
        }

        self.finish(rng);
        Some(Notice::Completed)
    }

    /// Return to idle, clearing the name and the chosen duration
    pub fn reset(&mut self) {
        self.ticker = None;
        self.phase = Phase::Idle;
        self.time_left = 0;
        self.duration = TimerDuration::default();
        self.phrase = None;

        if !self.name.is_empty() {
            self.name.clear();
            self.persist_name();
        }

        info!("Timer reset");
    }

    fn finish<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ticker = None;
        self.phase = Phase::Finished;
        self.phrase = PHRASES.choose(rng).copied();
        self.completions = self.completions.saturating_add(1);
        storage::write(&self.store, KEY_COMPLETIONS, &self.completions.to_string());

        info!(
            name = %self.name,
            completions = self.completions,
            "Countdown finished"
        );
    }

    fn persist_name(&self) {
        storage::write(&self.store, KEY_USERNAME, &self.name);
    }
}

impl Drop for TimerSession {
    fn drop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Cancelled running ticker on teardown");
        }
    }
}

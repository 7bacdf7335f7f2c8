//! Core data types for focustick
//!
//! This module defines the small value types shared by the timer,
//! the theme context and the UI.

/// Countdown length offered by the duration selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerDuration {
    #[default]
    Ten,
    Twenty,
    Thirty,
}

impl TimerDuration {
    pub fn all() -> &'static [TimerDuration] {
        &[TimerDuration::Ten, TimerDuration::Twenty, TimerDuration::Thirty]
    }

    pub fn seconds(&self) -> u32 {
        match self {
            TimerDuration::Ten => 10,
            TimerDuration::Twenty => 20,
            TimerDuration::Thirty => 30,
        }
    }

    pub fn label(&self) -> String {
        format!("{} seconds", self.seconds())
    }

    pub fn next(&self) -> Self {
        match self {
            TimerDuration::Ten => TimerDuration::Twenty,
            TimerDuration::Twenty => TimerDuration::Thirty,
            TimerDuration::Thirty => TimerDuration::Ten,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            TimerDuration::Ten => TimerDuration::Thirty,
            TimerDuration::Twenty => TimerDuration::Ten,
            TimerDuration::Thirty => TimerDuration::Twenty,
        }
    }
}

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Parse a stored value. Anything unrecognised falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Which of the three timer views is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Ready",
            Phase::Running => "Running",
            Phase::Finished => "Finished",
        }
    }
}

/// Phrases shown after a completed countdown
pub const PHRASES: [&str; 8] = [
    "You did that brilliantly!",
    "Great work!",
    "Strong focus, well done!",
    "You never give up, and it shows!",
    "Every step is progress!",
    "🔥 Fire in your eyes, well done!",
    "🚀 You're on the runway to success!",
    "🌟 A brilliant result!",
];

// Helper functions

/// Share of the countdown already elapsed, in percent (0..=100)
pub fn progress_percent(duration: u32, time_left: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    let elapsed = duration.saturating_sub(time_left);
    (f64::from(elapsed) / f64::from(duration) * 100.0).clamp(0.0, 100.0)
}

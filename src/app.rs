//! Application state and event handling
//!
//! This is the core of focustick, managing:
//! - The timer session and the theme context it lives in
//! - Event handling (keyboard input)
//! - Driving the ticker and surfacing notices

use crate::config::Config;
use crate::storage::SharedStore;
use crate::theme_ctx::ThemeContext;
use crate::timer::{Notice, TimerSession};
use crate::types::Phase;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// How long a flash message stays visible
const FLASH_TTL: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub config: Config,

    // Provider wrapping the widget; the session and the UI both read it
    pub theme_ctx: ThemeContext,
    pub session: TimerSession,

    // Popup state
    pub popup: PopupState,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

/// Popup overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    /// Blocking message, dismissed with Enter or Esc
    Notice {
        title: String,
        message: String,
        is_error: bool,
    },
}

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowNotice,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, store: SharedStore) -> Self {
        let theme_ctx = ThemeContext::provide(store.clone());
        let session = TimerSession::mount(store);

        Self {
            should_quit: false,
            config,
            theme_ctx,
            session,
            popup: PopupState::None,
            flash_message: None,
        }
    }

    /// Get current app state
    pub fn state(&self) -> AppState {
        match &self.popup {
            PopupState::None => AppState::Normal,
            PopupState::Notice { .. } => AppState::ShowNotice,
        }
    }

    /// Palette for the current theme
    pub fn palette(&self) -> Theme {
        Theme::from_mode(self.theme_ctx.theme())
    }

    /// How long the main loop may wait for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = self.config.poll_interval();
        match self.session.until_next_tick(now) {
            Some(until_tick) => idle.min(until_tick),
            None => idle,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.expire_flash();

        match self.state() {
            AppState::ShowNotice => self.handle_notice_key(key),
            AppState::Normal => self.handle_normal_key(key),
        }
    }

    /// Handle key in normal state
    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keys (work in every phase)
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('t') if ctrl => {
                self.toggle_theme();
                return Ok(());
            }
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return Ok(());
            }
            _ => {}
        }

        // Phase-specific handling
        match self.session.phase() {
            Phase::Idle => self.handle_idle_key(key),
            Phase::Running => self.handle_running_key(key),
            Phase::Finished => self.handle_finished_key(key),
        }
    }

    /// Handle keys while editing name and duration
    fn handle_idle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.start(),
            KeyCode::Tab | KeyCode::Right => self.session.cycle_duration(true),
            KeyCode::BackTab | KeyCode::Left => self.session.cycle_duration(false),
            KeyCode::Backspace => self.session.pop_name_char(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.set_name("");
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.push_name_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the countdown runs
    fn handle_running_key(&mut self, key: KeyEvent) -> Result<()> {
        self.handle_shortcut(key);
        Ok(())
    }

    /// Handle keys on the finish screen
    fn handle_finished_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.start(),
            _ => self.handle_shortcut(key),
        }
        Ok(())
    }

    /// Plain-letter shortcuts, only when no text input is shown
    fn handle_shortcut(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
    }

    /// Handle keys in notice popup
    fn handle_notice_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('o') | KeyCode::Enter | KeyCode::Esc => {
                self.popup = PopupState::None;
            }
            _ => {}
        }
        Ok(())
    }

    /// Deliver due ticks and expire stale feedback
    pub fn update_timer(&mut self) -> Result<()> {
        self.update_timer_at(Instant::now())
    }

    pub fn update_timer_at(&mut self, now: Instant) -> Result<()> {
        if let Some(notice) = self.session.advance(now) {
            self.show_notice(&notice);
        }
        self.expire_flash();
        Ok(())
    }

    // === HELPER METHODS ===

    fn start(&mut self) {
        if let Err(e) = self.session.start(Instant::now()) {
            self.show_notice(&Notice::Invalid(e));
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.show_flash("Timer reset", false);
    }

    fn toggle_theme(&mut self) {
        let mode = self.theme_ctx.toggle_theme();
        self.show_flash(&format!("Theme: {}", mode.label()), false);
    }

    /// Show a blocking notice
    fn show_notice(&mut self, notice: &Notice) {
        self.popup = PopupState::Notice {
            title: notice.title().into(),
            message: notice.message(),
            is_error: matches!(notice, Notice::Invalid(_)),
        };
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }

    fn expire_flash(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed() >= FLASH_TTL {
                self.flash_message = None;
            }
        }
    }
}

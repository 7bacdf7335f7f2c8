//! Countdown timer
//!
//! This module provides:
//! - The timer session state machine (idle → running → finished)
//! - The cancellable one-second ticker that drives it

pub mod session;
pub mod ticker;

pub use session::{Notice, TimerError, TimerSession};
pub use ticker::Ticker;

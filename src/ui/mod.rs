//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Light and dark palettes
//! - Reusable widgets
//! - The timer screen and its overlays

pub mod theme;
pub mod render;
pub mod widgets;

pub use theme::Theme;
pub use render::render;

//! Theme definitions for focustick
//!
//! Provides the light and dark palettes. Both share the orange accent;
//! only the base and surface colors differ.

use crate::types::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,
    pub accent_soft: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub input_bg: Color,
    pub gauge_track: Color,
}

impl Theme {
    /// Create a theme from the current mode
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            // Base
            bg: Color::Rgb(255, 255, 255),          // #ffffff
            fg: Color::Rgb(0, 0, 0),                // #000000
            fg_dim: Color::Rgb(107, 114, 128),      // #6b7280

            // Accent (orange)
            accent: Color::Rgb(249, 115, 22),       // #f97316
            accent_dim: Color::Rgb(234, 88, 12),    // #ea580c
            accent_soft: Color::Rgb(251, 146, 60),  // #fb923c

            // Status
            success: Color::Rgb(22, 163, 74),       // #16a34a
            error: Color::Rgb(220, 38, 38),         // #dc2626

            // UI elements
            border: Color::Rgb(254, 215, 170),      // #fed7aa
            border_focused: Color::Rgb(253, 186, 116), // #fdba74
            input_bg: Color::Rgb(255, 255, 255),    // #ffffff
            gauge_track: Color::Rgb(229, 231, 235), // #e5e7eb
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            // Base
            bg: Color::Rgb(17, 24, 39),             // #111827
            fg: Color::Rgb(255, 255, 255),          // #ffffff
            fg_dim: Color::Rgb(156, 163, 175),      // #9ca3af

            // Accent (orange)
            accent: Color::Rgb(249, 115, 22),       // #f97316
            accent_dim: Color::Rgb(234, 88, 12),    // #ea580c
            accent_soft: Color::Rgb(251, 146, 60),  // #fb923c

            // Status
            success: Color::Rgb(74, 222, 128),      // #4ade80
            error: Color::Rgb(248, 113, 113),       // #f87171

            // UI elements
            border: Color::Rgb(124, 45, 18),        // #7c2d12
            border_focused: Color::Rgb(253, 186, 116), // #fdba74
            input_bg: Color::Rgb(31, 41, 55),       // #1f2937
            gauge_track: Color::Rgb(55, 65, 81),    // #374151
        }
    }

    // Style helpers for common UI patterns

    /// Background for whole blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent_dim)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent text
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).bg(self.bg)
    }

    /// Emphasised accent text (finish message)
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Motivational phrase
    pub fn phrase(&self) -> Style {
        Style::default()
            .fg(self.accent_soft)
            .bg(self.bg)
            .add_modifier(Modifier::ITALIC)
    }

    /// Name input field
    pub fn input(&self) -> Style {
        Style::default().fg(self.fg).bg(self.input_bg)
    }

    /// Input placeholder
    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.input_bg)
    }

    /// Currently chosen option in a selector
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Progress gauge (filled part in fg, track in bg)
    pub fn gauge(&self) -> Style {
        Style::default().fg(self.accent).bg(self.gauge_track)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_mode() {
        let light = Theme::from_mode(ThemeMode::Light);
        assert_eq!(light.bg, Color::Rgb(255, 255, 255));

        let dark = Theme::from_mode(ThemeMode::Dark);
        assert_eq!(dark.bg, Color::Rgb(17, 24, 39));

        assert_eq!(light.accent, dark.accent);
    }
}

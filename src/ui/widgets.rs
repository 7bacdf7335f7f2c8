//! Reusable UI widgets
//!
//! Contains the building blocks of the timer screen:
//! - Popup dialogs (notices)
//! - Duration selector and progress gauge
//! - Flash message and status bar

use crate::types::TimerDuration;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup dialog
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    buttons: &[(&str, char)], // (label, key)
    theme: &Theme,
    area: Rect,
) {
    // Calculate popup size
    let popup_width = 44.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(2));

    let popup_area = centered_rect(popup_width, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());

    frame.render_widget(block, popup_area);

    // Inner area for content
    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(4),
        height: popup_area.height.saturating_sub(4),
    };

    let content_widget = Paragraph::new(content)
        .style(theme.text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(content_widget, inner);

    // Render buttons at bottom
    if !buttons.is_empty() && popup_area.height >= 3 {
        let button_area = Rect {
            x: popup_area.x + 2,
            y: popup_area.y + popup_area.height - 2,
            width: popup_area.width.saturating_sub(4),
            height: 1,
        };

        let button_spans: Vec<Span> = buttons
            .iter()
            .enumerate()
            .flat_map(|(i, (label, key))| {
                let mut spans = vec![
                    Span::styled("[", theme.text_dim()),
                    Span::styled(
                        key.to_string(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("] ", theme.text_dim()),
                    Span::styled(*label, theme.text()),
                ];
                if i < buttons.len() - 1 {
                    spans.push(Span::raw("    "));
                }
                spans
            })
            .collect();

        let buttons_widget = Paragraph::new(Line::from(button_spans))
            .alignment(Alignment::Center);
        frame.render_widget(buttons_widget, button_area);
    }
}

/// Render a notice that must be acknowledged
pub fn render_notice_popup(
    frame: &mut Frame,
    title: &str,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.highlight() };
    let content = vec![
        Line::raw(""),
        Line::styled(message, style),
        Line::raw(""),
    ];

    render_popup(frame, title, content, &[("OK", 'o')], theme, area);
}

/// Duration options as a single line, the chosen one highlighted
pub fn duration_selector(selected: TimerDuration, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("◀ ", theme.text_dim())];
    for (i, option) in TimerDuration::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.text()));
        }
        let style = if *option == selected {
            theme.selected()
        } else {
            theme.text_dim()
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
    }
    spans.push(Span::styled(" ▶", theme.text_dim()));
    Line::from(spans)
}

/// Render the countdown progress bar
pub fn render_progress(frame: &mut Frame, percent: f64, theme: &Theme, area: Rect) {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(theme.gauge())
        .ratio(ratio)
        .label(Span::styled(
            format!("{:.0}%", percent),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}

/// Render a success flash message (bottom of screen)
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let Some(flash_area) = bottom_row(area) else {
        return;
    };
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]));

    frame.render_widget(Clear, flash_area);
    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let Some(status_area) = bottom_row(area) else {
        return;
    };

    // Clear the line first
    frame.render_widget(Clear, status_area);

    // Left side
    let left_widget = Paragraph::new(left_content)
        .style(theme.text_dim());

    // Right side
    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content)
        .style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Last row of `area`, or `None` when the area has no rows to draw on
pub fn bottom_row(area: Rect) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }
    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Helper: Create vertical layout with given constraints
pub fn vertical_layout(area: Rect, constraints: Vec<Constraint>) -> Vec<Rect> {
    Layout::vertical(constraints).split(area).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect(40, 20, area);
        assert_eq!(popup, Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_bottom_row() {
        assert_eq!(bottom_row(Rect::new(2, 3, 40, 5)), Some(Rect::new(2, 7, 40, 1)));
        assert_eq!(bottom_row(Rect::new(0, 4, 10, 0)), None);
        assert_eq!(bottom_row(Rect::new(0, 0, 0, 3)), None);
    }

    #[test]
    fn test_vertical_layout() {
        let area = Rect::new(0, 0, 40, 10);
        let rows = vertical_layout(area, vec![Constraint::Length(3), Constraint::Min(0)]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].height, 3);
        assert_eq!(rows[1].height, 7);
    }

    #[test]
    fn test_duration_selector_lists_all_options() {
        let line = duration_selector(TimerDuration::Twenty, &Theme::light());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.contains("10 seconds"));
        assert!(text.contains("20 seconds"));
        assert!(text.contains("30 seconds"));

        let chosen = line
            .spans
            .iter()
            .find(|s| s.content.contains("20 seconds"))
            .unwrap();
        assert_eq!(chosen.style, Theme::light().selected());
    }
}

//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with the app name
//! - Timer card for the active phase
//! - Popups and overlays
//! - Status bar

use crate::app::{App, PopupState};
use crate::types::Phase;
use crate::ui::{theme::Theme, widgets};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the timer card
const CARD_WIDTH: u16 = 56;
/// Height of the timer card
const CARD_HEIGHT: u16 = 14;

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = app.palette();

    // Paint the whole screen in the theme background
    frame.render_widget(Block::default().style(theme.block_style()), area);

    // Main layout: header, content, status bar
    let layout = widgets::vertical_layout(
        area,
        vec![
            Constraint::Length(2), // Header
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1), // Status bar
        ],
    );

    render_header(frame, &theme, layout[0]);
    render_card(frame, app, &theme, layout[1]);
    render_status_bar(frame, app, &theme, layout[2]);
    render_popups(frame, app, &theme, area);
}

/// Render header with app name
fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let header_block = Block::default()
        .style(theme.block_style())
        .title(" focustick ")
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);
}

/// Render the timer card
fn render_card(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let card_area = widgets::centered_rect(CARD_WIDTH, CARD_HEIGHT, area);

    let toggle_label = format!(
        " [^T] Theme: {} ",
        app.theme_ctx.theme().label()
    );

    let card = Block::default()
        .title(" Timer 💻 ")
        .title_style(theme.title())
        .title_bottom(Line::styled(toggle_label, theme.text_dim()).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.text());

    let inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    let rows = widgets::vertical_layout(
        inner,
        vec![
            Constraint::Length(1), // Completions
            Constraint::Length(1),
            Constraint::Min(5),    // Phase body
            Constraint::Length(1), // Buttons
        ],
    );

    let completions = Paragraph::new(format!(
        "Timers completed: {}",
        app.session.completions()
    ))
    .style(theme.accent())
    .alignment(Alignment::Center);
    frame.render_widget(completions, rows[0]);

    match app.session.phase() {
        Phase::Idle => render_idle(frame, app, theme, rows[2]),
        Phase::Running => render_running(frame, app, theme, rows[2]),
        Phase::Finished => render_finished(frame, app, theme, rows[2]),
    }

    render_buttons(frame, app, theme, rows[3]);
}

/// Name input and duration selector
fn render_idle(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let rows = widgets::vertical_layout(
        area,
        vec![
            Constraint::Length(3), // Name input
            Constraint::Length(1),
            Constraint::Length(1), // Duration selector
            Constraint::Min(0),
        ],
    );

    let name = app.session.name();
    let input_line = if name.is_empty() {
        Line::styled("Enter your name", theme.placeholder())
    } else {
        Line::from(vec![
            Span::styled(name.to_string(), theme.input()),
            Span::styled("▏", theme.accent()),
        ])
    };

    let input = Paragraph::new(input_line)
        .alignment(Alignment::Center)
        .style(theme.input())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused())
                .style(theme.input()),
        );
    frame.render_widget(input, rows[0]);

    let selector = Paragraph::new(widgets::duration_selector(app.session.duration(), theme))
        .alignment(Alignment::Center);
    frame.render_widget(selector, rows[2]);
}

/// Remaining time and progress bar
fn render_running(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let rows = widgets::vertical_layout(
        area,
        vec![
            Constraint::Length(1),
            Constraint::Length(1), // Remaining
            Constraint::Length(1),
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ],
    );

    let name = match app.session.name() {
        "" => "Name",
        name => name,
    };
    let remaining = Paragraph::new(format!(
        "{}, {} s left",
        name,
        app.session.time_left()
    ))
    .style(theme.text())
    .alignment(Alignment::Center);
    frame.render_widget(remaining, rows[1]);

    widgets::render_progress(frame, app.session.progress_percent(), theme, rows[3]);
}

/// Congratulation and phrase
fn render_finished(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let content = vec![
        Line::raw(""),
        Line::styled(
            format!("You made it, {} 💪", app.session.name()),
            theme.highlight(),
        ),
        Line::raw(""),
        Line::styled(app.session.motivational_phrase().to_string(), theme.phrase()),
    ];

    let body = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(body, area);
}

/// Action hints for the current phase
fn render_buttons(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let primary = if app.session.is_finished() {
        Some("Try again")
    } else if app.session.is_running() {
        None
    } else {
        Some("Start timer")
    };

    let mut spans = Vec::new();
    if let Some(label) = primary {
        spans.push(Span::styled(format!(" [Enter] {} ", label), theme.selected()));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(" [^R] Reset ", theme.accent()));

    let buttons = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(buttons, area);
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let hints = match app.session.phase() {
        Phase::Idle => "[type] Name  [Tab/←→] Duration  [Enter] Start  [^T] Theme  [^R] Reset  [Esc] Quit",
        Phase::Running => "[t] Theme  [r] Reset  [q] Quit",
        Phase::Finished => "[Enter] Try again  [t] Theme  [r] Reset  [q] Quit",
    };

    widgets::render_status_bar(frame, hints, app.session.phase().label(), theme, area);
}

/// Render popups if active
fn render_popups(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    match &app.popup {
        PopupState::None => {}

        PopupState::Notice {
            title,
            message,
            is_error,
        } => {
            widgets::render_notice_popup(frame, title, message, *is_error, theme, area);
        }
    }

    // Flash message (success/error feedback)
    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
    }
}

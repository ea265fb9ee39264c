//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the slideshow, the grid
//! overlay and the slide editor using ratatui.

mod editor;
mod grid;
mod slideshow;

pub use editor::draw_editor;
pub use grid::draw_grid;
pub use slideshow::draw_slideshow;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::input::AppMode;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    match app.mode {
        AppMode::Slideshow => draw_slideshow(f, app, chunks[0]),
        AppMode::Grid => draw_grid(f, app, chunks[0]),
        AppMode::Editor => draw_editor(f, app, chunks[0]),
    }

    if app.store.is_generating() {
        draw_loading_indicator(f);
    }

    // Draw error message if present (blocking)
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    // Controls auto-hide in the slideshow, like the rest of its chrome.
    if app.mode != AppMode::Slideshow || app.navigator.controls_visible() {
        draw_command_bar(f, app, chunks[1]);
    }
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.prompt_active {
        format!("Prompt ({})", app.generator_name())
    } else {
        "Commands/Status".to_string()
    };
    let border_color = if app.prompt_active { Color::Cyan } else { Color::Yellow };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    if app.prompt_active {
        let prompt = Paragraph::new(format!(" :{}", app.prompt_buffer))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(prompt, inner_area);
        return;
    }

    let mut text = match app.mode {
        AppMode::Slideshow => create_help_text(&[
            ("←/→", "Prev/Next"),
            ("G", "Grid"),
            ("F", "Fullscreen"),
            ("e", "Editor"),
            ("q", "Quit"),
        ]),
        AppMode::Grid => create_help_text(&[
            ("ESC", "Close"),
            ("Enter", "Open"),
            ("s", "Sort"),
            ("o", "Order"),
        ]),
        AppMode::Editor => create_help_text(&[
            ("ESC", "Back"),
            ("Tab", "Select"),
            ("d", "Duplicate"),
            ("x", "Delete"),
            ("[/]", "Back/Fwd"),
            (":", "Generate"),
        ]),
    };

    if let Some(status) = &app.status_message {
        text.push(Span::styled(format!(" | {status}"), Style::default().fg(Color::Gray)));
    }

    f.render_widget(Paragraph::new(Line::from(text)).style(Style::default().fg(Color::Gray)), inner_area);
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));

        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let (title_style, border_style) = if is_focused {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (Style::default(), Style::default())
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Cut `text` to at most `max` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            out.pop();
            if max > 0 {
                out.push('…');
            }
            return out;
        }
        used += w;
        out.push(c);
    }
    out
}

fn draw_loading_indicator(f: &mut Frame) {
    let size = f.size();
    let width = 26;
    let height = 3;

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width: width.min(size.width),
        height: height.min(size.height),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new("Generating slide...")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    let inner_area = block.inner(area);
    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);
    f.render_widget(text, inner_area);
}

fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();
    let width = 50.min(size.width.saturating_sub(4));
    let height = 7.min(size.height);

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Space for a "Press Esc to dismiss" hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

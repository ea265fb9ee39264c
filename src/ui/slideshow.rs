use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::events::Difficulty;

const fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

/// Draw the current event, with the counter and dots when controls are visible.
pub fn draw_slideshow(f: &mut Frame, app: &App, area: Rect) {
    let event = app.current_event();
    let show_controls = app.navigator.controls_visible();

    let block = if app.navigator.is_fullscreen() {
        Block::default()
    } else {
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Events ", Style::default().add_modifier(Modifier::BOLD)))
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Image
            Constraint::Min(1),    // Body
            Constraint::Length(if show_controls { 2 } else { 0 }),
        ])
        .split(inner);

    let resolved = app.images.resolve(event.id);
    let image = match resolved.path() {
        Some(path) => Span::styled(
            format!("[image] {}", path.display()),
            Style::default().fg(Color::DarkGray),
        ),
        None => Span::styled(
            format!("[no image for event {} in {}]", event.id, app.images.dir().display()),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    };
    f.render_widget(Paragraph::new(Line::from(image)).alignment(Alignment::Center), chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("#{}", event.id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            event.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(event.description),
        Line::default(),
    ];
    lines.extend(event.details.iter().map(|detail| {
        Line::from(vec![Span::styled("  • ", Style::default().fg(Color::Cyan)), Span::raw(*detail)])
    }));
    lines.push(Line::default());

    let mut meta = vec![Span::styled(
        event.difficulty_label(),
        Style::default()
            .fg(difficulty_color(event.difficulty))
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(duration) = event.duration {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(format!("⏱ {duration}"), Style::default().fg(Color::Gray)));
    }
    lines.push(Line::from(meta));

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        chunks[1],
    );

    if show_controls {
        let len = app.navigator.len();
        let current = app.navigator.current_index();
        let dots: String = (0..len).map(|i| if i == current { '●' } else { '·' }).collect();
        let controls = vec![
            Line::from(Span::styled(
                format!("{} / {}", current + 1, len),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(dots, Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(controls).alignment(Alignment::Center), chunks[2]);
    }
}

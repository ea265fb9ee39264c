use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{create_titled_block, truncate_to_width};
use crate::app::App;
use crate::constants::viewer::GRID_COLUMNS;

/// Draw every event as a card, in the current sort order.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let order = app.grid_order();
    let title = format!(
        " All events | sort: {} {} ",
        app.sort_by.name(),
        app.sort_order.arrow()
    );
    let block = create_titled_block(&title, true);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if order.is_empty() {
        return;
    }

    let rows = order.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    let current = app.navigator.current_index();
    let events = app.grid.events();

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let position = row * GRID_COLUMNS + col;
            let Some(&index) = order.get(position) else {
                break;
            };
            let event = &events[index];

            let border_style = if position == app.grid_cursor {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if index == current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let card = Block::default().borders(Borders::ALL).border_style(border_style);
            let width = card.inner(*cell).width as usize;
            let text = vec![
                Line::from(Span::styled(
                    truncate_to_width(event.title, width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("#{} {}", event.id, event.difficulty_label()),
                    Style::default().fg(Color::Gray),
                )),
            ];
            f.render_widget(Paragraph::new(text).block(card), *cell);
        }
    }
}

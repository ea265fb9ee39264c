use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{create_titled_block, truncate_to_width};
use crate::app::App;
use crate::slide::{SlideData, SlideElement};

/// Draw the slide canvas, the element list and the selected element's properties.
pub fn draw_editor(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(slide) = app.store.slide_ref() else {
        let empty = Paragraph::new("No slide loaded. Press : to generate one.")
            .block(create_titled_block("Editor", true))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(empty, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let selected = app.store.selected_element_id();
    let canvas_title = format!(" {} ({}x{}) ", slide.name, slide.width, slide.height);
    let canvas_block = create_titled_block(&canvas_title, true);
    let canvas = canvas_block.inner(columns[0]);
    f.render_widget(canvas_block, columns[0]);

    // Later elements paint over earlier ones.
    for element in &slide.elements {
        let is_selected = selected == Some(&element.id);
        draw_element(f, slide, element, canvas, is_selected);
    }

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let items: Vec<ListItem> = slide
        .elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{i:>2} "), Style::default().fg(Color::DarkGray)),
                Span::raw(element.id.to_string()),
                Span::styled(
                    format!(" [{}]", element.element_type.name()),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(selected.and_then(|id| slide.index_of(id)));

    let list = List::new(items)
        .block(create_titled_block("Elements (paint order)", false))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, sidebar[0], &mut state);

    let properties = app
        .store
        .selected_element()
        .map_or_else(|| vec![Line::from("Tab to select an element")], property_lines);
    f.render_widget(
        Paragraph::new(properties)
            .block(create_titled_block("Properties", false))
            .wrap(Wrap { trim: true }),
        sidebar[1],
    );
}

/// Map an element's slide-space box into `canvas`, clipped to it.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn project(slide: &SlideData, element: &SlideElement, canvas: Rect) -> Option<Rect> {
    if slide.width == 0 || slide.height == 0 || canvas.width == 0 || canvas.height == 0 {
        return None;
    }
    let sx = f64::from(canvas.width) / f64::from(slide.width);
    let sy = f64::from(canvas.height) / f64::from(slide.height);

    let x = (element.position.x * sx).max(0.0) as u16;
    let y = (element.position.y * sy).max(0.0) as u16;
    if x >= canvas.width || y >= canvas.height {
        return None;
    }
    let width = ((element.size.width * sx).round().max(1.0) as u16).min(canvas.width - x);
    let height = ((element.size.height * sy).round().max(1.0) as u16).min(canvas.height - y);

    Some(Rect { x: canvas.x + x, y: canvas.y + y, width, height })
}

fn draw_element(f: &mut Frame, slide: &SlideData, element: &SlideElement, canvas: Rect, selected: bool) {
    let Some(rect) = project(slide, element, canvas) else {
        return;
    };

    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    f.render_widget(Clear, rect);
    if rect.width < 3 || rect.height < 3 {
        f.render_widget(Block::default().style(border_style.add_modifier(Modifier::REVERSED)), rect);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(element.id.to_string(), border_style));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    if let Some(content) = &element.content {
        let text = truncate_to_width(content, usize::from(inner.width) * usize::from(inner.height.max(1)));
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
    }
}

fn property_lines(element: &SlideElement) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("id", element.id.to_string()),
        field("type", element.element_type.name().to_string()),
        field("position", format!("{:.0}, {:.0}", element.position.x, element.position.y)),
        field("size", format!("{:.0} x {:.0}", element.size.width, element.size.height)),
        field("zIndex", element.z_index.to_string()),
    ];
    if let Some(rotation) = element.rotation {
        lines.push(field("rotation", format!("{rotation}°")));
    }
    if let Some(color) = &element.style.color {
        lines.push(field("color", color.clone()));
    }
    if let Some(background) = &element.style.background_color {
        lines.push(field("background", background.clone()));
    }
    if let Some(size) = element.style.font_size {
        lines.push(field("fontSize", format!("{size}")));
    }
    if let Some(content) = &element.content {
        lines.push(field("content", content.clone()));
    }
    lines
}

fn field(name: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name}: "), Style::default().fg(Color::Yellow)),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use crate::slide::default_slide;

    #[test]
    fn test_project_scales_into_canvas() {
        let slide = default_slide();
        let element = &slide.elements[0];
        let canvas = Rect { x: 1, y: 1, width: 192, height: 54 };

        let rect = project(&slide, element, canvas).unwrap();
        assert!(rect.x >= canvas.x && rect.right() <= canvas.right());
        assert!(rect.y >= canvas.y && rect.bottom() <= canvas.bottom());
    }

    #[test]
    fn test_project_skips_offscreen() {
        let mut slide = default_slide();
        slide.elements[0].position.x = 5000.0;
        let canvas = Rect { x: 0, y: 0, width: 80, height: 24 };
        assert!(project(&slide, &slide.elements[0], canvas).is_none());
    }
}

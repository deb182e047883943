mod constants;
mod detail;
mod help;
mod map_view;
mod picker;
mod status_line;
mod text;

use crate::app::{AppMode, AppState};
use detail::DetailRenderer;
use help::HelpRenderer;
use map_view::{MapRenderer, ToolbarRenderer};
use picker::PickerRenderer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use status_line::StatusLineRenderer;

pub fn render(frame: &mut Frame, app: &mut AppState) {
    // Update terminal size
    let size = frame.area();
    app.terminal_width = size.width;
    app.terminal_height = size.height;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    ToolbarRenderer::render(frame, app, chunks[0]);
    app.canvas_area = MapRenderer::render(frame, app, chunks[1]);
    StatusLineRenderer::render(frame, app, chunks[2]);

    // Overlays draw on top of the map
    match &app.mode {
        AppMode::Map => {}
        AppMode::Picker { .. } => PickerRenderer::render(frame, app, centered_rect(60, 70, size)),
        AppMode::Detail { name } => {
            DetailRenderer::render(frame, app, name, centered_rect(50, 50, size))
        }
        AppMode::Help => HelpRenderer::render(frame, centered_rect(60, 80, size)),
    }
}

/// Rectangle of the given percentage size centred in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
    }
}

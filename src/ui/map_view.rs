use crate::app::AppState;
use crate::catalog;
use crate::snapshot::{CursorStyle, MarkerStyle};
use crate::ui::constants::{
    DELETE_COLOR, NO_CHOICE, PLACED_COLOR, SELECTED_COLOR, SESSION_COLOR,
};
use crate::ui::text::fit_width;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker as SymbolMarker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Paragraph,
    },
    Frame,
};

pub fn style_color(style: MarkerStyle) -> Color {
    match style {
        MarkerStyle::Placed => PLACED_COLOR,
        MarkerStyle::Selected => SELECTED_COLOR,
        MarkerStyle::SessionAddition => SESSION_COLOR,
        MarkerStyle::MarkedForDeletion => DELETE_COLOR,
    }
}

fn cursor_label(cursor: CursorStyle) -> &'static str {
    match cursor {
        CursorStyle::Default => "pointer",
        CursorStyle::Crosshair => "crosshair",
        CursorStyle::Move => "move",
    }
}

pub struct MapRenderer;

impl MapRenderer {
    /// Draws the farm map and returns the inner area the canvas occupies.
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) -> Rect {
        let snapshot = app.controller.snapshot();
        let scale = *app.controller.scale();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Farm map [{}] ", snapshot.mode));
        let inner = block.inner(area);

        // Canvas y grows upward; map pixels grow downward.
        let height = scale.canvas_height;
        let canvas = Canvas::default()
            .block(block)
            .marker(SymbolMarker::Braille)
            .x_bounds([0.0, scale.canvas_width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for marker in &snapshot.markers {
                    ctx.draw(&Circle {
                        x: marker.x,
                        y: height - marker.y,
                        radius: marker.radius,
                        color: style_color(marker.style),
                    });
                }
                ctx.layer();
                for marker in &snapshot.markers {
                    let style = Style::default().fg(style_color(marker.style));
                    ctx.print(
                        marker.x,
                        height - marker.y,
                        Span::styled(marker.emoji.clone(), style),
                    );
                }
            });

        frame.render_widget(canvas, area);
        inner
    }
}

pub struct ToolbarRenderer;

impl ToolbarRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let controls = app.controller.controls();
        let key_style = Style::default().add_modifier(Modifier::BOLD);

        let spans = if controls.primary {
            let choice = match app.selected_catalog_entry() {
                Some(entry) => format!("{} {}", catalog::emoji_for(entry), entry.name),
                None => app.selected_entry.as_deref().unwrap_or(NO_CHOICE).to_string(),
            };
            let mut choice = fit_width(&choice, 24);
            if let Some(d) = app.diameter_override {
                choice.push_str(&format!(" ({} ft)", d));
            }
            vec![
                Span::styled("[p]", key_style),
                Span::raw(format!(" Plant: {}  ", choice)),
                Span::styled("[a]", key_style),
                Span::raw(" Add  "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit  "),
                Span::styled("[d]", key_style),
                Span::raw(" Delete  "),
                Span::styled("[?]", key_style),
                Span::raw(" Help  "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]
        } else {
            vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Confirm  "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel  "),
                Span::raw(format!("cursor: {}", cursor_label(app.controller.cursor()))),
            ]
        };

        let style = if controls.confirm_cancel {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray).bg(Color::Black)
        };
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_style_has_a_distinct_color() {
        let colors = [
            style_color(MarkerStyle::Placed),
            style_color(MarkerStyle::Selected),
            style_color(MarkerStyle::SessionAddition),
            style_color(MarkerStyle::MarkedForDeletion),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

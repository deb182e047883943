use crate::app::{AppMode, AppState, PickerField};
use crate::controller::MapMode;
use crate::ui::constants::{CURSOR_INDICATOR, STATUS_DIAMETER_PREFIX, STATUS_SEARCH_PREFIX};
use crate::ui::text::fit_width;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::get_content_and_style(app);
        let content = fit_width(&content, area.width as usize);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    fn get_content_and_style(app: &AppState) -> (String, Style) {
        match &app.mode {
            AppMode::Picker {
                query,
                diameter,
                field,
                ..
            } => Self::render_picker_mode(query, diameter, *field),
            AppMode::Help => Self::render_overlay_hint("Press ESC or q to close help"),
            AppMode::Detail { .. } => Self::render_overlay_hint("Press ESC or Enter to close"),
            AppMode::Map => Self::render_map_mode(app),
        }
    }

    fn render_map_mode(app: &AppState) -> (String, Style) {
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD);
            return (msg.clone(), style);
        }

        let controller = &app.controller;
        let stats = app.catalog.stats();
        let mut content = format!(
            "{} | {} plants placed",
            controller.mode().name(),
            controller.plants().len()
        );
        match controller.mode() {
            MapMode::Add(_) => content.push_str(&format!(
                " | {} added this session",
                controller.session_additions().len()
            )),
            MapMode::Delete { .. } => content.push_str(&format!(
                " | {} marked for deletion",
                controller.marked_count()
            )),
            _ => {}
        }
        if let Some(plant) = controller.selected_plant() {
            content.push_str(&format!(" | selected: {}", plant.name));
        }
        content.push_str(&format!(
            " | catalog: {} owned, {} wishlist",
            stats.owned, stats.wishlist
        ));

        (content, Style::default().fg(Color::Gray).bg(Color::Black))
    }

    fn render_picker_mode(query: &str, diameter: &str, field: PickerField) -> (String, Style) {
        let content = match field {
            PickerField::Search => {
                format!("{}{}{}", STATUS_SEARCH_PREFIX, query, CURSOR_INDICATOR)
            }
            PickerField::Diameter => {
                format!("{}{}{}", STATUS_DIAMETER_PREFIX, diameter, CURSOR_INDICATOR)
            }
        };
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        (content, style)
    }

    fn render_overlay_hint(hint: &str) -> (String, Style) {
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        (hint.to_string(), style)
    }
}

use crate::actions::filter_options;
use crate::app::{AppMode, AppState, PickerField};
use crate::catalog::{self, CategoryFilter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct PickerRenderer;

impl PickerRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let AppMode::Picker {
            query,
            index,
            filter,
            diameter,
            field,
        } = &app.mode
        else {
            return;
        };

        frame.render_widget(Clear, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(Block::default().borders(Borders::ALL).inner(area));
        frame.render_widget(
            Block::default().borders(Borders::ALL).title(" Choose a plant "),
            area,
        );

        frame.render_widget(Paragraph::new(Self::category_line(app, filter)), chunks[0]);

        let active = Style::default().add_modifier(Modifier::REVERSED);
        let field_style = |f: PickerField| {
            if f == *field {
                active
            } else {
                Style::default()
            }
        };
        let inputs = Line::from(vec![
            Span::raw("Search: "),
            Span::styled(format!(" {} ", query), field_style(PickerField::Search)),
            Span::raw("  Diameter: "),
            Span::styled(format!(" {} ", diameter), field_style(PickerField::Diameter)),
            Span::raw(" ft"),
        ]);
        frame.render_widget(Paragraph::new(inputs), chunks[1]);

        let entries = app.catalog.filtered(filter, query);
        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                let mut label = format!("{} {}", catalog::emoji_for(entry), entry.name);
                if !entry.botanical.is_empty() {
                    label.push_str(&format!(" ({})", entry.botanical));
                }
                ListItem::new(label)
            })
            .collect();

        let mut state = ListState::default();
        if !entries.is_empty() {
            state.select(Some((*index).min(entries.len() - 1)));
        }
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    fn category_line(app: &AppState, current: &CategoryFilter) -> Line<'static> {
        let mut spans = vec![Span::raw("◀ ")];
        for option in filter_options(&app.catalog) {
            let style = if &option == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(option.label().to_string(), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("▶"));
        Line::from(spans)
    }
}

use crate::app::AppState;
use crate::catalog;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct DetailRenderer;

impl DetailRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, name: &str, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = match app.catalog.find(name) {
            Some(entry) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("{} {}", catalog::emoji_for(entry), entry.name),
                        bold,
                    )),
                    Line::from(""),
                ];
                if !entry.botanical.is_empty() {
                    lines.push(Line::from(format!("Botanical: {}", entry.botanical)));
                }
                if !entry.category.is_empty() {
                    lines.push(Line::from(format!("Category:  {}", entry.category)));
                }
                lines.push(Line::from(format!(
                    "Diameter:  {} ft",
                    catalog::diameter_feet(entry)
                )));
                if let Some(height) = entry.height_feet() {
                    lines.push(Line::from(format!("Height:    {} ft", height)));
                }
                let placed = app
                    .controller
                    .plants()
                    .iter()
                    .filter(|p| p.name == entry.name)
                    .count();
                lines.push(Line::from(format!("On map:    {}", placed)));
                lines
            }
            None => vec![Line::from(format!("No catalog entry for {}", name))],
        };

        let block = Block::default().borders(Borders::ALL).title(" Plant ");
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

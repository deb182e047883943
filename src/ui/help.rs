use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Map:",
        items: &[
            ("p or /", "Choose a plant"),
            ("a     ", "Add mode: click empty ground to place"),
            ("e     ", "Edit mode: drag plants to move them"),
            ("d     ", "Delete mode: click plants to mark them"),
            ("i     ", "Details of the selected plant"),
            ("⏎ or y", "Confirm the current mode"),
            ("Esc/n ", "Cancel the current mode"),
            ("q     ", "Quit"),
        ],
    },
    HelpSection {
        title: "Mouse:",
        items: &[
            ("click ", "Select a plant, click again for details"),
            ("drag  ", "Move a plant (add and edit modes)"),
        ],
    },
    HelpSection {
        title: "Picker:",
        items: &[
            ("type  ", "Filter by name or botanical name"),
            ("←/→   ", "Change category"),
            ("↑/↓   ", "Move highlight"),
            ("Tab   ", "Switch to the diameter override"),
            ("⏎     ", "Choose the highlighted plant"),
            ("Del   ", "Clear the choice"),
        ],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_text = Self::build_help_text();
        let block = Block::default().borders(Borders::ALL).title(" Help ");
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                "Orchard map help",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(vec![Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )]));

            for (key, desc) in section.items {
                lines.push(Line::from(format!("  {}  {}", key, desc)));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}

use crate::catalog::{Catalog, CatalogEntry, CategoryFilter};
use crate::config::AppConfig;
use crate::controller::{MapEditController, Notice};
use log::warn;
use ratatui::layout::Rect;

/// Which picker input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerField {
    #[default]
    Search,
    Diameter,
}

/// Overlay shown on top of the map.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Map,
    Picker {
        query: String,
        index: usize,
        filter: CategoryFilter,
        diameter: String,
        field: PickerField,
    },
    Detail {
        name: String,
    },
    Help,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub controller: MapEditController,
    pub catalog: Catalog,
    pub config: AppConfig,

    // Plant chosen in the picker; add mode places this one.
    pub selected_entry: Option<String>,
    pub diameter_override: Option<f64>,

    // Message for status line
    pub message: Option<String>,

    // Inner area of the map widget from the last draw, used for mouse mapping
    pub canvas_area: Rect,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog, controller: MapEditController) -> Self {
        Self {
            running: true,
            mode: AppMode::Map,
            controller,
            catalog,
            config,
            selected_entry: None,
            diameter_override: None,
            message: None,
            canvas_area: Rect::default(),
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    pub fn selected_catalog_entry(&self) -> Option<&CatalogEntry> {
        self.selected_entry
            .as_deref()
            .and_then(|name| self.catalog.find(name))
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Presents whatever the controller asked the host to show.
    pub fn apply_notices(&mut self) {
        for notice in self.controller.drain_notices() {
            match notice {
                Notice::Alert(text) => self.set_message(text),
                Notice::ShowDetail { name } => {
                    if self.catalog.find(&name).is_some() {
                        self.mode = AppMode::Detail { name };
                    } else {
                        warn!("No catalog entry for placed plant {}", name);
                        self.set_message(format!("No catalog details for {}", name));
                    }
                }
            }
        }
    }
}

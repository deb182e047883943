use crate::app::{AppMode, AppState};

pub fn show_help(app: &mut AppState) {
    app.mode = AppMode::Help;
}

pub fn close_help(app: &mut AppState) {
    app.mode = AppMode::Map;
}

/// Opens the detail view for the selected plant, like clicking it a second time.
pub fn show_selected_detail(app: &mut AppState) {
    let Some(name) = app.controller.selected_plant().map(|p| p.name.clone()) else {
        app.set_message("No plant selected on the map");
        return;
    };
    if app.catalog.find(&name).is_some() {
        app.mode = AppMode::Detail { name };
    } else {
        app.set_message(format!("No catalog details for {}", name));
    }
}

pub fn close_detail(app: &mut AppState) {
    app.mode = AppMode::Map;
}

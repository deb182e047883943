use crate::app::AppState;
use log::debug;

pub fn enter_add_mode(app: &mut AppState) {
    let entered = app.controller.enter_add_mode_for(
        &app.catalog,
        app.selected_entry.as_deref(),
        app.diameter_override,
    );
    if entered {
        if let Some(name) = &app.selected_entry {
            app.set_message(format!(
                "Add: click the map to place {}, Enter to finish",
                name
            ));
        }
    } else if let Some(name) = app
        .selected_entry
        .as_deref()
        .filter(|n| app.catalog.find(n).is_none())
    {
        app.set_message(format!("{} is not in the catalog", name));
    }
}

pub fn enter_edit_mode(app: &mut AppState) {
    if app.controller.enter_edit_mode() {
        app.set_message("Edit: drag plants to move them, Enter to save");
    }
}

pub fn enter_delete_mode(app: &mut AppState) {
    if app.controller.enter_delete_mode() {
        app.set_message("Delete: click plants to mark them, Enter to delete");
    }
}

pub fn confirm(app: &mut AppState) {
    let mode = app.controller.mode().name();
    if app.controller.confirm() {
        app.set_message(format!("{} saved", capitalize(mode)));
    }
}

pub fn cancel(app: &mut AppState) {
    let mode = app.controller.mode().name();
    if app.controller.cancel() {
        app.set_message(format!("{} cancelled", capitalize(mode)));
    }
}

/// Leaving the map abandons any active mode, the same as cancel.
pub fn quit(app: &mut AppState) {
    if app.controller.cancel() {
        debug!("Active mode cancelled on quit");
    }
    app.running = false;
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

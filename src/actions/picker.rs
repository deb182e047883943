use crate::app::{AppMode, AppState, PickerField};
use crate::catalog::{Catalog, CategoryFilter};
use log::debug;

/// Filters the picker cycles through: every placeable plant, then each category.
pub fn filter_options(catalog: &Catalog) -> Vec<CategoryFilter> {
    let mut options = vec![CategoryFilter::All];
    options.extend(catalog.categories().into_iter().map(CategoryFilter::Category));
    options
}

pub fn open_picker(app: &mut AppState) {
    // The picker is part of the primary toolbar, hidden while a mode is active.
    if !app.controller.controls().primary {
        app.set_message("Finish or cancel the current mode first");
        return;
    }
    let diameter = app
        .diameter_override
        .map(|d| d.to_string())
        .unwrap_or_default();
    app.mode = AppMode::Picker {
        query: String::new(),
        index: 0,
        filter: CategoryFilter::All,
        diameter,
        field: PickerField::Search,
    };
}

pub fn close_picker(app: &mut AppState) {
    app.mode = AppMode::Map;
}

pub fn picker_type(app: &mut AppState, c: char) {
    if let AppMode::Picker {
        query,
        index,
        diameter,
        field,
        ..
    } = &mut app.mode
    {
        match field {
            PickerField::Search => {
                query.push(c);
                *index = 0;
            }
            PickerField::Diameter if c.is_ascii_digit() || c == '.' => diameter.push(c),
            PickerField::Diameter => {}
        }
    }
}

pub fn picker_backspace(app: &mut AppState) {
    if let AppMode::Picker {
        query,
        index,
        diameter,
        field,
        ..
    } = &mut app.mode
    {
        match field {
            PickerField::Search => {
                query.pop();
                *index = 0;
            }
            PickerField::Diameter => {
                diameter.pop();
            }
        }
    }
}

pub fn picker_move(app: &mut AppState, delta: isize) {
    let AppMode::Picker {
        query,
        index,
        filter,
        ..
    } = &mut app.mode
    else {
        return;
    };
    let count = app.catalog.filtered(&*filter, query.as_str()).len();
    if count == 0 {
        *index = 0;
        return;
    }
    *index = (*index as isize + delta).rem_euclid(count as isize) as usize;
}

pub fn cycle_category(app: &mut AppState, delta: isize) {
    let options = filter_options(&app.catalog);
    if let AppMode::Picker { index, filter, .. } = &mut app.mode {
        let current = options.iter().position(|f| *f == *filter).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(options.len() as isize) as usize;
        *filter = options[next].clone();
        *index = 0;
    }
}

pub fn toggle_field(app: &mut AppState) {
    if let AppMode::Picker { field, .. } = &mut app.mode {
        *field = match field {
            PickerField::Search => PickerField::Diameter,
            PickerField::Diameter => PickerField::Search,
        };
    }
}

/// Takes the highlighted plant as the current choice and returns to the map.
pub fn choose(app: &mut AppState) {
    let AppMode::Picker {
        query,
        index,
        filter,
        diameter,
        ..
    } = &app.mode
    else {
        return;
    };

    let chosen = {
        let entries = app.catalog.filtered(filter, query);
        entries
            .get((*index).min(entries.len().saturating_sub(1)))
            .map(|e| e.name.clone())
    };
    let diameter_override = diameter.trim().parse::<f64>().ok().filter(|d| *d > 0.0);

    let Some(name) = chosen else {
        app.set_message("No plants match");
        return;
    };

    debug!("Picked {} (diameter override {:?})", name, diameter_override);
    app.controller.select_by_name(&name);
    app.set_message(format!("Selected {}", name));
    app.selected_entry = Some(name);
    app.diameter_override = diameter_override;
    app.mode = AppMode::Map;
}

/// Empties the picker choice, which also clears the map selection.
pub fn clear_choice(app: &mut AppState) {
    app.selected_entry = None;
    app.diameter_override = None;
    app.controller.select_by_name("");
    app.mode = AppMode::Map;
    app.set_message("No plant selected");
}

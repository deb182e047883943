use crate::actions::Action;
use crate::app::{AppMode, AppState};
use crate::geometry::MapScale;
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;

pub fn handle_events(app: &mut AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(10))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(handle_key_event(app, key));
            }
            Event::Mouse(mouse) => return Ok(handle_mouse_event(app, mouse)),
            _ => {}
        }
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match &app.mode {
        AppMode::Map => handle_map_mode(key),
        AppMode::Picker { .. } => handle_picker_mode(key),
        AppMode::Detail { .. } => handle_detail_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_map_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        // Toolbar
        (Char('p'), KeyModifiers::NONE) | (Char('/'), KeyModifiers::NONE) => {
            Some(Action::OpenPicker)
        }
        (Char('a'), KeyModifiers::NONE) => Some(Action::EnterAddMode),
        (Char('e'), KeyModifiers::NONE) => Some(Action::EnterEditMode),
        (Char('d'), KeyModifiers::NONE) => Some(Action::EnterDeleteMode),
        (Char('i'), KeyModifiers::NONE) => Some(Action::ShowSelectedDetail),

        // Confirm / cancel
        (Enter, _) | (Char('y'), KeyModifiers::NONE) => Some(Action::Confirm),
        (Esc, _) | (Char('n'), KeyModifiers::NONE) => Some(Action::Cancel),

        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_picker_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Esc, _) => Some(Action::ClosePicker),
        (Enter, _) => Some(Action::PickerChoose),
        (Delete, _) => Some(Action::PickerClear),
        (Tab, _) | (BackTab, _) => Some(Action::PickerToggleField),
        (Up, _) => Some(Action::PickerUp),
        (Down, _) => Some(Action::PickerDown),
        (Left, _) => Some(Action::PickerPreviousCategory),
        (Right, _) => Some(Action::PickerNextCategory),
        (Backspace, _) => Some(Action::PickerBackspace),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Action::PickerType(c)),
        _ => None,
    }
}

fn handle_detail_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseDetail),
        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

pub fn handle_mouse_event(app: &AppState, mouse: MouseEvent) -> Option<Action> {
    // Overlays cover the map, so the mouse only drives the map itself.
    if app.mode != AppMode::Map {
        return None;
    }
    let scale = app.controller.scale();
    let area = app.canvas_area;
    let inside = area_contains(area, mouse.column, mouse.row);
    let (x, y) = cell_to_canvas(area, scale, mouse.column, mouse.row)?;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => Some(Action::PointerDown { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Action::PointerMove { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(Action::PointerUp {
            at: inside.then_some((x, y)),
        }),
        _ => None,
    }
}

fn area_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Canvas pixel under the centre of a terminal cell. Cells outside the area map
/// past the canvas edges so drags can leave the map.
pub fn cell_to_canvas(area: Rect, scale: &MapScale, column: u16, row: u16) -> Option<(f64, f64)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let dx = f64::from(column) - f64::from(area.x) + 0.5;
    let dy = f64::from(row) - f64::from(area.y) + 0.5;
    Some((
        dx * scale.canvas_width / f64::from(area.width),
        dy * scale.canvas_height / f64::from(area.height),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::create_test_app;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_map_keys() {
        let (app, _) = create_test_app();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('a'))),
            Some(Action::EnterAddMode)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Some(Action::Confirm)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Some(Action::Cancel)
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_picker_keys_type_text() {
        let (mut app, _) = create_test_app();
        app.mode = AppMode::Picker {
            query: String::new(),
            index: 0,
            filter: Default::default(),
            diameter: String::new(),
            field: Default::default(),
        };
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('q'))),
            Some(Action::PickerType('q'))
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Some(Action::ClosePicker)
        );
    }

    #[test]
    fn test_cell_to_canvas_maps_cell_centres() {
        let (app, _) = create_test_app();
        let area = Rect::new(1, 2, 91, 25);
        let scale = app.controller.scale();

        let (x, y) = cell_to_canvas(area, scale, 1, 2).unwrap();
        assert_eq!((x, y), (5.0, 5.0));

        let (x, y) = cell_to_canvas(area, scale, 91, 26).unwrap();
        assert_eq!((x, y), (905.0, 245.0));

        assert!(cell_to_canvas(Rect::default(), scale, 0, 0).is_none());
    }

    #[test]
    fn test_mouse_sequence() {
        let (mut app, _) = create_test_app();
        app.canvas_area = Rect::new(1, 2, 91, 25);

        let down = handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(down, Some(Action::PointerDown { x: 95.0, y: 35.0 }));

        let outside_down = handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(outside_down, None);

        let up = handle_mouse_event(&app, mouse(MouseEventKind::Up(MouseButton::Left), 0, 5));
        assert_eq!(up, Some(Action::PointerUp { at: None }));
    }

    #[test]
    fn test_mouse_ignored_under_overlay() {
        let (mut app, _) = create_test_app();
        app.canvas_area = Rect::new(1, 2, 91, 25);
        app.mode = AppMode::Help;

        let down = handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(down, None);
    }
}

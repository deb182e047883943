mod help;
mod mode;
mod picker;
mod pointer;

use crate::app::AppState;
use anyhow::Result;

pub use help::*;
pub use mode::*;
pub use picker::*;
pub use pointer::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Application control
    Quit,

    // Map editing modes
    EnterAddMode,
    EnterEditMode,
    EnterDeleteMode,
    Confirm,
    Cancel,

    // Pointer input, in canvas pixels
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    /// Release; a position inside the map also counts as a click there.
    PointerUp { at: Option<(f64, f64)> },

    // Plant picker
    OpenPicker,
    ClosePicker,
    PickerType(char),
    PickerBackspace,
    PickerUp,
    PickerDown,
    PickerNextCategory,
    PickerPreviousCategory,
    PickerToggleField,
    PickerChoose,
    PickerClear,

    // Overlays
    ShowSelectedDetail,
    CloseDetail,
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    match action {
        Action::Quit => mode::quit(app),

        Action::EnterAddMode => mode::enter_add_mode(app),
        Action::EnterEditMode => mode::enter_edit_mode(app),
        Action::EnterDeleteMode => mode::enter_delete_mode(app),
        Action::Confirm => mode::confirm(app),
        Action::Cancel => mode::cancel(app),

        Action::PointerDown { x, y } => pointer::pointer_down(app, x, y),
        Action::PointerMove { x, y } => pointer::pointer_move(app, x, y),
        Action::PointerUp { at } => pointer::pointer_up(app, at),

        Action::OpenPicker => picker::open_picker(app),
        Action::ClosePicker => picker::close_picker(app),
        Action::PickerType(c) => picker::picker_type(app, c),
        Action::PickerBackspace => picker::picker_backspace(app),
        Action::PickerUp => picker::picker_move(app, -1),
        Action::PickerDown => picker::picker_move(app, 1),
        Action::PickerNextCategory => picker::cycle_category(app, 1),
        Action::PickerPreviousCategory => picker::cycle_category(app, -1),
        Action::PickerToggleField => picker::toggle_field(app),
        Action::PickerChoose => picker::choose(app),
        Action::PickerClear => picker::clear_choice(app),

        Action::ShowSelectedDetail => help::show_selected_detail(app),
        Action::CloseDetail => help::close_detail(app),
        Action::ShowHelp => help::show_help(app),
        Action::CloseHelp => help::close_help(app),
    }

    app.apply_notices();
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::create_test_app;
    use super::*;
    use crate::app::AppMode;

    #[test]
    fn test_execute_action_surfaces_alerts() {
        let (mut app, _) = create_test_app();

        execute_action(Action::EnterAddMode, &mut app).unwrap();

        assert_eq!(
            app.message.as_deref(),
            Some(crate::controller::NO_PLANT_SELECTED)
        );
        assert!(app.controller.mode().is_normal());
    }

    #[test]
    fn test_place_and_confirm_through_actions() {
        let (mut app, store) = create_test_app();
        app.selected_entry = Some("Apple Banana".to_string());

        execute_action(Action::EnterAddMode, &mut app).unwrap();
        execute_action(Action::PointerDown { x: 100.0, y: 150.0 }, &mut app).unwrap();
        execute_action(
            Action::PointerUp {
                at: Some((100.0, 150.0)),
            },
            &mut app,
        )
        .unwrap();
        execute_action(Action::Confirm, &mut app).unwrap();

        assert!(matches!(app.mode, AppMode::Map));
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].radius, 8.0);
    }
}

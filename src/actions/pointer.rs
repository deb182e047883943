use crate::app::AppState;

pub fn pointer_down(app: &mut AppState, x: f64, y: f64) {
    app.controller.handle_pointer_down(x, y);
}

pub fn pointer_move(app: &mut AppState, x: f64, y: f64) {
    app.controller.handle_pointer_move(x, y);
}

// Mouse-up is followed by a click at the release point, as in a browser.
pub fn pointer_up(app: &mut AppState, at: Option<(f64, f64)>) {
    app.controller.handle_pointer_up();
    if let Some((x, y)) = at {
        app.controller.handle_canvas_click(x, y);
    }
}

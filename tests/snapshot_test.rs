use insta::assert_snapshot;
use orchard_map::app::{AppMode, AppState};
use orchard_map::config::AppConfig;
use orchard_map::{actions, ui, PlantId};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

mod common;
use common::*;

fn create_test_app() -> AppState {
    let (controller, _) = sample_orchard();
    AppState::new(AppConfig::default(), test_catalog(), controller)
}

fn draw(app: &mut AppState) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_persisted_json_after_edit() {
    let (mut controller, store) = controller_with(vec![placed(
        "plant_a", "Key Lime", 100.0, 100.0, 15.0,
    )]);

    controller.enter_edit_mode();
    drag(&mut controller, (100.0, 100.0), (120.0, 80.0));
    controller.confirm();

    let json = serde_json::to_string_pretty(&store.records()).unwrap();
    assert_snapshot!(json, @r#"
    [
      {
        "id": "plant_a",
        "name": "Key Lime",
        "botanical": "",
        "emoji": "🌱",
        "x": 120.0,
        "y": 80.0,
        "diameter": 15.0,
        "radius": 15.0
      }
    ]
    "#);
}

#[test]
fn test_render_snapshot_markers() {
    let (mut controller, _) = sample_orchard();
    controller.handle_canvas_click(300.0, 120.0);

    let lines: Vec<String> = controller
        .snapshot()
        .markers
        .iter()
        .map(|m| format!("{} {:?} r={}", m.id, m.style, m.radius))
        .collect();
    assert_snapshot!(lines.join("\n"), @r"
    plant_a Placed r=15
    plant_b Selected r=20
    plant_c Placed r=8
    ");
}

#[test]
fn test_render_map_view() {
    let mut app = create_test_app();

    let screen = draw(&mut app);

    assert!(screen.contains("Farm map [normal]"));
    assert!(screen.contains("[a] Add"));
    assert!(screen.contains("normal | 3 plants placed | catalog: 3 owned, 0 wishlist"));
    assert_eq!(app.canvas_area, Rect::new(1, 2, 98, 26));
    assert_eq!((app.terminal_width, app.terminal_height), (100, 30));
}

#[test]
fn test_render_edit_mode_toolbar() {
    let mut app = create_test_app();
    actions::execute_action(actions::Action::EnterEditMode, &mut app).unwrap();
    app.clear_message();

    let screen = draw(&mut app);

    assert!(screen.contains("[Enter] Confirm"));
    assert!(screen.contains("cursor: move"));
    assert!(screen.contains("Farm map [edit]"));
    assert!(!screen.contains("[a] Add"));
}

#[test]
fn test_render_message_in_status_line() {
    let mut app = create_test_app();
    app.set_message("Failed to save map: disk full");

    let screen = draw(&mut app);

    assert!(screen.contains("Failed to save map: disk full"));
}

#[test]
fn test_render_picker_overlay() {
    let mut app = create_test_app();
    actions::execute_action(actions::Action::OpenPicker, &mut app).unwrap();

    let screen = draw(&mut app);

    assert!(screen.contains("Choose a plant"));
    assert!(screen.contains("Key Lime"));
    assert!(screen.contains("Search: "));
}

#[test]
fn test_render_detail_overlay() {
    let mut app = create_test_app();
    app.mode = AppMode::Detail {
        name: "Key Lime".to_string(),
    };

    let screen = draw(&mut app);

    assert!(screen.contains("Botanical: Citrus aurantiifolia"));
    assert!(screen.contains("Height:    6 ft"));
    assert!(screen.contains("On map:    1"));
}

#[test]
fn test_render_help_overlay() {
    let mut app = create_test_app();
    app.mode = AppMode::Help;

    let screen = draw(&mut app);

    assert!(screen.contains("Orchard map help"));
    assert!(screen.contains("Press ESC or q to close help"));
}

#[test]
fn test_second_click_through_app_opens_detail() {
    let mut app = create_test_app();
    let click = |app: &mut AppState| {
        actions::execute_action(
            actions::Action::PointerUp {
                at: Some((100.0, 100.0)),
            },
            app,
        )
        .unwrap();
    };

    click(&mut app);
    assert_eq!(app.controller.selected(), Some(&PlantId::new("plant_a")));
    click(&mut app);

    assert_eq!(
        app.mode,
        AppMode::Detail {
            name: "Key Lime".to_string()
        }
    );
}

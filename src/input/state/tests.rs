use super::*;
use crate::config::{ColorSpec, Config};
use crate::draw::{BLACK, BLUE, BrushSize, RED, WHITE};

fn create_test_input_state() -> InputState {
    let mut state = InputState::new(StrokeCanvas::new(), Background::default(), 40, 30);
    state.palette = vec![BLACK, RED, BLUE];
    state.needs_redraw = false;
    state
}

fn draw(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    state.on_pointer(PointerEvent::Down {
        x: from.0,
        y: from.1,
    });
    state.on_pointer(PointerEvent::Move { x: to.0, y: to.1 });
    state.on_pointer(PointerEvent::Up);
}

#[test]
fn pointer_sequence_commits_stroke_with_current_brush() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectColor(RED));
    state.handle_action(Action::SelectBrushSize(BrushSize::Medium));

    draw(&mut state, (1.0, 1.0), (10.0, 10.0));

    assert!(state.needs_redraw);
    let strokes = state.canvas.strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].color(), RED);
    assert_eq!(strokes[0].width(), 20.0);
    assert_eq!(strokes[0].len(), 2);
}

#[test]
fn stray_move_and_up_do_not_request_redraw() {
    let mut state = create_test_input_state();
    state.on_pointer(PointerEvent::Move { x: 3.0, y: 3.0 });
    state.on_pointer(PointerEvent::Up);
    assert!(!state.needs_redraw);
    assert!(state.canvas.strokes().is_empty());
}

#[test]
fn undo_and_redo_actions_report_changes() {
    let mut state = create_test_input_state();
    assert!(!state.handle_action(Action::Undo));
    assert!(!state.needs_redraw);

    draw(&mut state, (1.0, 1.0), (5.0, 5.0));
    state.needs_redraw = false;

    assert!(state.handle_action(Action::Undo));
    assert!(state.needs_redraw);
    assert!(state.canvas.strokes().is_empty());

    assert!(state.handle_action(Action::Redo));
    assert_eq!(state.canvas.strokes().len(), 1);
    assert!(!state.handle_action(Action::Redo));
}

#[test]
fn clear_action_empties_canvas() {
    let mut state = create_test_input_state();
    assert!(!state.handle_action(Action::Clear));

    draw(&mut state, (1.0, 1.0), (5.0, 5.0));
    draw(&mut state, (2.0, 1.0), (5.0, 9.0));
    state.handle_action(Action::Undo);

    assert!(state.handle_action(Action::Clear));
    assert!(!state.canvas.can_undo());
    assert!(!state.canvas.can_redo());
}

#[test]
fn brush_actions_change_selection_only() {
    let mut state = create_test_input_state();
    draw(&mut state, (1.0, 1.0), (5.0, 5.0));

    assert!(state.handle_action(Action::SelectColor(BLUE)));
    assert!(!state.handle_action(Action::SelectColor(BLUE)));
    assert!(state.handle_action(Action::SetBrushWidth(12.5)));
    assert!(!state.handle_action(Action::SetBrushWidth(f64::NAN)));

    assert_eq!(state.canvas.brush().color, BLUE);
    assert_eq!(state.canvas.brush().width, 12.5);
    assert_eq!(state.canvas.strokes()[0].color(), BLACK);
    assert_eq!(state.canvas.strokes()[0].width(), 5.0);
}

#[test]
fn palette_selection_by_index() {
    let mut state = create_test_input_state();
    assert!(state.select_palette_color(1));
    assert_eq!(state.canvas.brush().color, RED);
    assert!(!state.select_palette_color(42));
    assert_eq!(state.canvas.brush().color, RED);
}

#[test]
fn from_config_applies_brush_canvas_and_limits() {
    let mut config = Config::default();
    config.drawing.default_color = ColorSpec::from("blue");
    config.drawing.default_brush_width = 10.0;
    config.drawing.max_brush_width = 40.0;
    config.canvas.width = 320;
    config.canvas.height = 200;
    config.canvas.max_strokes = 1;

    let mut state = InputState::from_config(&config);
    assert_eq!(state.canvas.brush().color, BLUE);
    assert_eq!(state.canvas.brush().width, 10.0);
    assert_eq!((state.width, state.height), (320, 200));
    assert_eq!(state.palette.len(), 8);

    state.handle_action(Action::SetBrushWidth(90.0));
    assert_eq!(state.canvas.brush().width, 40.0);

    draw(&mut state, (1.0, 1.0), (5.0, 5.0));
    draw(&mut state, (2.0, 2.0), (6.0, 6.0));
    assert_eq!(state.canvas.strokes().len(), 1);
    assert!(!state.canvas.is_drawing());
}

#[test]
fn refused_commit_still_requests_redraw() {
    let mut state = InputState::new(
        StrokeCanvas::with_history(StrokeHistory::with_limit(1)),
        Background::default(),
        40,
        30,
    );
    draw(&mut state, (1.0, 1.0), (5.0, 5.0));

    state.on_pointer(PointerEvent::Down { x: 2.0, y: 2.0 });
    state.on_pointer(PointerEvent::Move { x: 8.0, y: 8.0 });
    state.needs_redraw = false;
    state.on_pointer(PointerEvent::Up);

    assert!(state.needs_redraw);
    assert!(!state.canvas.is_drawing());
    assert_eq!(state.canvas.strokes().len(), 1);
}

#[test]
fn render_composes_background_and_clears_flag() {
    let mut state = create_test_input_state();
    state.set_background(Background::Solid(WHITE));
    assert!(state.needs_redraw);

    let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 40, 30).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();
    state.render(&ctx);
    drop(ctx);

    assert!(!state.needs_redraw);
    let data = surface.data().unwrap();
    assert_eq!(&data[0..4], &[255, 255, 255, 255]);
}

use knot_screensaver::{AppCommand, AppController, AppIntent, AppState};

fn add_points(controller: &mut AppController, state: &mut AppState, points: &[(f32, f32)]) {
    for &(x, y) in points {
        controller
            .handle_intent(
                state,
                AppIntent::AddPointRequested {
                    position: glam::Vec2::new(x, y),
                },
            )
            .expect("AddPointRequested sollte funktionieren");
    }
}

#[test]
fn test_add_point_logs_command_with_drawn_velocity() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    add_points(&mut controller, &mut state, &[(100.0, 200.0)]);

    assert_eq!(state.selected_point_count(), 1);
    let cp = state.paths.selected().points()[0];

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::AddPoint { position, velocity } => {
            assert_eq!(*position, glam::Vec2::new(100.0, 200.0));
            assert_eq!(*velocity, cp.velocity);
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_frame_recomputes_curve_even_when_paused() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(state.view.paused);

    add_points(
        &mut controller,
        &mut state,
        &[(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)],
    );
    let before: Vec<glam::Vec2> = state.paths.selected().control().positions().collect();

    controller.step_frame(&mut state);

    let path = state.paths.selected();
    assert!(path.is_curve_fresh());
    assert_eq!(path.curve_points().len(), 3 * 35);
    // Pausiert → keine Bewegung
    let after: Vec<glam::Vec2> = path.control().positions().collect();
    assert_eq!(before, after);
}

#[test]
fn test_frame_advances_points_when_running() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_command(
            &mut state,
            AppCommand::AddPoint {
                position: glam::Vec2::new(50.0, 50.0),
                velocity: glam::Vec2::new(1.0, 0.5),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TogglePauseRequested)
        .unwrap();
    assert!(!state.view.paused);

    controller.step_frame(&mut state);

    let cp = state.paths.selected().points()[0];
    assert_eq!(cp.position, glam::Vec2::new(51.0, 50.5));
}

#[test]
fn test_point_bounces_off_resized_canvas_edge() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasResized {
                size: [100.0, 100.0],
            },
        )
        .unwrap();
    controller
        .handle_command(
            &mut state,
            AppCommand::AddPoint {
                position: glam::Vec2::new(99.5, 50.0),
                velocity: glam::Vec2::new(1.5, 0.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TogglePauseRequested)
        .unwrap();

    controller.step_frame(&mut state);

    let cp = state.paths.selected().points()[0];
    assert_eq!(cp.position.x, 101.0);
    assert_eq!(cp.velocity.x, -1.5);
}

#[test]
fn test_curve_goes_stale_after_delete_below_three_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    add_points(
        &mut controller,
        &mut state,
        &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)],
    );
    controller.step_frame(&mut state);
    assert!(state.paths.selected().is_curve_fresh());

    controller
        .handle_intent(&mut state, AppIntent::DeletePointRequested)
        .unwrap();
    controller.step_frame(&mut state);

    let path = state.paths.selected();
    assert!(!path.is_curve_fresh());
    assert_eq!(path.curve_points().len(), 3 * 35);

    let scene = controller.build_render_scene(&state);
    assert!(scene.paths[0].curve.is_none());
}

#[test]
fn test_resolution_never_drops_below_one() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..50 {
        controller
            .handle_intent(&mut state, AppIntent::DecreaseResolutionRequested)
            .unwrap();
    }
    assert_eq!(state.resolution, 1);

    controller
        .handle_intent(&mut state, AppIntent::IncreaseResolutionRequested)
        .unwrap();
    assert_eq!(state.resolution, 2);
}

#[test]
fn test_speed_intents_only_affect_selected_path() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::NewPathRequested)
        .unwrap();
    for _ in 0..10 {
        controller
            .handle_intent(&mut state, AppIntent::AccelerateRequested)
            .unwrap();
    }

    let speeds: Vec<u8> = state.paths.iter().map(|p| p.speed_multiplier()).collect();
    assert_eq!(speeds, vec![2, 5]);

    controller
        .handle_intent(&mut state, AppIntent::SelectNextPathRequested)
        .unwrap();
    for _ in 0..10 {
        controller
            .handle_intent(&mut state, AppIntent::SlowDownRequested)
            .unwrap();
    }
    let speeds: Vec<u8> = state.paths.iter().map(|p| p.speed_multiplier()).collect();
    assert_eq!(speeds, vec![1, 5]);
}

#[test]
fn test_new_path_limit_and_reset() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..10 {
        controller
            .handle_intent(&mut state, AppIntent::NewPathRequested)
            .unwrap();
    }
    assert_eq!(state.paths.len(), 5);
    assert_eq!(state.paths.selected_index(), 4);

    add_points(&mut controller, &mut state, &[(1.0, 1.0)]);
    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .unwrap();

    assert_eq!(state.paths.len(), 1);
    assert_eq!(state.paths.selected_index(), 0);
    assert_eq!(state.selected_point_count(), 0);
}

#[test]
fn test_deleting_last_point_of_second_path_removes_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    add_points(&mut controller, &mut state, &[(10.0, 10.0)]);
    controller
        .handle_intent(&mut state, AppIntent::NewPathRequested)
        .unwrap();
    add_points(&mut controller, &mut state, &[(20.0, 20.0)]);
    assert_eq!(state.paths.len(), 2);

    controller
        .handle_intent(&mut state, AppIntent::DeletePointRequested)
        .unwrap();

    assert_eq!(state.paths.len(), 1);
    assert_eq!(state.paths.selected_index(), 0);
    assert_eq!(state.selected_point_count(), 1);
}

#[test]
fn test_toggle_help_and_exit() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ToggleHelpRequested)
        .unwrap();
    assert!(state.ui.show_help);
    assert!(!controller.build_render_scene(&state).help.is_empty());

    assert!(!state.should_exit);
    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .unwrap();
    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}

#[test]
fn test_invalid_canvas_size_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.view.canvas_size;

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CanvasResized {
            size: [f32::NAN, 100.0],
        },
    );

    assert!(result.is_err());
    assert_eq!(state.view.canvas_size, before);
}

#[test]
fn test_hue_advances_and_wraps() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.hue = 359.0;

    controller.step_frame(&mut state);
    assert_eq!(state.view.hue, 0.0);
    controller.step_frame(&mut state);
    assert_eq!(state.view.hue, 1.0);
}

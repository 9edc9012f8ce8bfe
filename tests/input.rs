use tundra::input::{Direction, InputTranslator, Intent, KeyBindings, KeyCode, RawEvent};

#[test]
fn wasd_maps_to_moves_in_order() {
    let mut t = InputTranslator::new(640, 640);
    let intents = t.translate([
        RawEvent::KeyDown(KeyCode::KeyW),
        RawEvent::KeyDown(KeyCode::KeyA),
        RawEvent::KeyDown(KeyCode::KeyS),
        RawEvent::KeyDown(KeyCode::KeyD),
    ]);
    assert_eq!(
        intents,
        vec![
            Intent::Move(Direction::Up),
            Intent::Move(Direction::Left),
            Intent::Move(Direction::Down),
            Intent::Move(Direction::Right),
        ]
    );
}

#[test]
fn action_keys_map_to_their_intents() {
    let mut t = InputTranslator::new(640, 640);
    let intents = t.translate([
        RawEvent::KeyDown(KeyCode::KeyX),
        RawEvent::KeyDown(KeyCode::KeyF),
        RawEvent::KeyDown(KeyCode::KeyE),
        RawEvent::KeyDown(KeyCode::KeyC),
        RawEvent::KeyDown(KeyCode::Escape),
    ]);
    assert_eq!(
        intents,
        vec![
            Intent::Interact,
            Intent::DropLumber,
            Intent::EatMeat,
            Intent::TradeOrAttack,
            Intent::Quit,
        ]
    );
}

#[test]
fn unbound_keys_produce_nothing() {
    let mut t = InputTranslator::new(640, 640);
    assert!(t.translate([RawEvent::KeyDown(KeyCode::KeyZ), RawEvent::KeyDown(KeyCode::Space)]).is_empty());
}

#[test]
fn repeated_key_yields_repeated_intent() {
    let mut t = InputTranslator::new(640, 640);
    let intents = t.translate([RawEvent::KeyDown(KeyCode::KeyW); 3]);
    assert_eq!(intents.len(), 3);
}

#[test]
fn quit_event_discards_the_rest_of_the_frame() {
    let mut t = InputTranslator::new(640, 640);
    let intents = t.translate([
        RawEvent::KeyDown(KeyCode::KeyX),
        RawEvent::Quit,
        RawEvent::KeyDown(KeyCode::KeyW),
    ]);
    assert_eq!(intents, vec![Intent::Interact, Intent::Quit]);
}

#[test]
fn mouse_corners_map_to_ndc_corners() {
    let mut t = InputTranslator::new(640, 480);
    t.translate([RawEvent::MouseMoved { x: -0.5, y: -0.5 }]);
    assert!((t.mouse_ndc() - glam::Vec2::new(-1.0, 1.0)).length() < 1e-6);

    t.translate([RawEvent::MouseMoved { x: 639.5, y: 479.5 }]);
    assert!((t.mouse_ndc() - glam::Vec2::new(1.0, -1.0)).length() < 1e-6);
}

#[test]
fn mouse_tracks_window_resizes() {
    let mut t = InputTranslator::new(640, 640);
    t.set_window_size(100, 100);
    t.translate([RawEvent::MouseMoved { x: 49.5, y: 49.5 }]);
    assert!(t.mouse_ndc().length() < 1e-6);
}

#[test]
fn custom_bindings_replace_the_standard_set() {
    let mut bindings = KeyBindings::new();
    bindings.bind(KeyCode::ArrowUp, Intent::Move(Direction::Up));
    let mut t = InputTranslator::with_bindings(bindings, 640, 640);

    let intents = t.translate([RawEvent::KeyDown(KeyCode::ArrowUp), RawEvent::KeyDown(KeyCode::KeyW)]);
    assert_eq!(intents, vec![Intent::Move(Direction::Up)]);
}

use std::collections::HashMap;

use glam::Vec2;
pub use winit::keyboard::KeyCode;

/// Raw device input for a single frame, as delivered by the window system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    /// A key went down (including OS auto-repeat).
    KeyDown(KeyCode),
    /// Cursor position in window pixels, origin top-left.
    MouseMoved { x: f32, y: f32 },
    /// The window was asked to close.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete player intent.
///
/// Keys with no binding produce no intent at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Quit,
    Move(Direction),
    /// Kill the colliding animal and/or chop the colliding tree.
    Interact,
    DropLumber,
    EatMeat,
    /// Harvest meat from a colliding animal, otherwise trade with the wizard.
    TradeOrAttack,
}

// ── Key bindings ─────────────────────────────────────────────────────────────

/// Maps physical keys to intents.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Intent>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Escape, WASD, X, F, E, C.
    pub fn standard() -> Self {
        let mut b = Self::new();
        b.bind(KeyCode::Escape, Intent::Quit);
        b.bind(KeyCode::KeyW, Intent::Move(Direction::Up));
        b.bind(KeyCode::KeyA, Intent::Move(Direction::Left));
        b.bind(KeyCode::KeyS, Intent::Move(Direction::Down));
        b.bind(KeyCode::KeyD, Intent::Move(Direction::Right));
        b.bind(KeyCode::KeyX, Intent::Interact);
        b.bind(KeyCode::KeyF, Intent::DropLumber);
        b.bind(KeyCode::KeyE, Intent::EatMeat);
        b.bind(KeyCode::KeyC, Intent::TradeOrAttack);
        b
    }

    /// Bind `key` to `intent`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyCode, intent: Intent) {
        self.bindings.insert(key, intent);
    }

    pub fn intent_for(&self, key: KeyCode) -> Option<Intent> {
        self.bindings.get(&key).copied()
    }
}

// ── Translator ───────────────────────────────────────────────────────────────

/// Turns one frame's raw events into intents and tracks the mouse.
///
/// Never touches game state.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    bindings: KeyBindings,
    window_size: [u32; 2],
    /// Mouse position in normalised device coordinates, y up.
    mouse: Vec2,
}

impl InputTranslator {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self::with_bindings(KeyBindings::standard(), window_width, window_height)
    }

    pub fn with_bindings(bindings: KeyBindings, window_width: u32, window_height: u32) -> Self {
        Self {
            bindings,
            window_size: [window_width.max(1), window_height.max(1)],
            mouse: Vec2::ZERO,
        }
    }

    pub fn mouse_ndc(&self) -> Vec2 {
        self.mouse
    }

    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = [width.max(1), height.max(1)];
    }

    /// Translate a frame's events, in order.
    ///
    /// A `Quit` event yields `Intent::Quit` and discards whatever follows it.
    pub fn translate(&mut self, events: impl IntoIterator<Item = RawEvent>) -> Vec<Intent> {
        let mut intents = Vec::new();
        for event in events {
            match event {
                RawEvent::KeyDown(key) => intents.extend(self.bindings.intent_for(key)),
                RawEvent::MouseMoved { x, y } => {
                    let [w, h] = self.window_size;
                    self.mouse = Vec2::new(
                        (x + 0.5) / w as f32 * 2.0 - 1.0,
                        (y + 0.5) / h as f32 * -2.0 + 1.0,
                    );
                }
                RawEvent::Quit => {
                    intents.push(Intent::Quit);
                    break;
                }
            }
        }
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bindings_cover_the_key_set() {
        let b = KeyBindings::standard();
        assert_eq!(b.intent_for(KeyCode::Escape), Some(Intent::Quit));
        assert_eq!(b.intent_for(KeyCode::KeyD), Some(Intent::Move(Direction::Right)));
        assert_eq!(b.intent_for(KeyCode::KeyC), Some(Intent::TradeOrAttack));
        assert_eq!(b.intent_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn rebinding_replaces_previous_intent() {
        let mut b = KeyBindings::standard();
        b.bind(KeyCode::KeyX, Intent::EatMeat);
        assert_eq!(b.intent_for(KeyCode::KeyX), Some(Intent::EatMeat));
    }

    #[test]
    fn mouse_center_pixel_maps_near_origin() {
        let mut t = InputTranslator::new(640, 640);
        t.translate([RawEvent::MouseMoved { x: 319.5, y: 319.5 }]);
        assert!(t.mouse_ndc().length() < 1e-6);
    }
}

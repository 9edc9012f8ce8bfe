// =============================================================================
// SIM: the per-frame simulation step
//
// - state.rs:     every piece of mutable game state, owned by `GameState`
// - collision.rs: the axis-aligned box predicate and the chase nudge
// - step.rs:      `GameState::step`, the ordered per-frame transition
// - scene.rs:     draw commands handed to the renderer each frame
// =============================================================================

pub mod collision;
pub mod scene;
pub mod state;
pub mod step;

pub use scene::{Color, DrawCommand, Scene, SpriteId};
pub use state::{
    Animal, AnimalKind, Collisions, GameState, Inventory, Player, Screen, Tree, Wizard, World,
};

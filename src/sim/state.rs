use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::camera::Camera;
use crate::config::GameConfig;

// ── Screen ───────────────────────────────────────────────────────────────────

/// The three disjoint play areas, linked West ↔ Middle ↔ East.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    West,
    Middle,
    East,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::West, Screen::Middle, Screen::East];

    pub fn index(self) -> usize {
        match self {
            Screen::West => 0,
            Screen::Middle => 1,
            Screen::East => 2,
        }
    }

    /// Neighbour to the east, if any.
    pub fn east(self) -> Option<Screen> {
        match self {
            Screen::West => Some(Screen::Middle),
            Screen::Middle => Some(Screen::East),
            Screen::East => None,
        }
    }

    /// Neighbour to the west, if any.
    pub fn west(self) -> Option<Screen> {
        match self {
            Screen::West => None,
            Screen::Middle => Some(Screen::West),
            Screen::East => Some(Screen::Middle),
        }
    }
}

// ── Animals ──────────────────────────────────────────────────────────────────

/// Listed in interaction priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    Wolf,
    Leopard,
    Lion,
}

impl AnimalKind {
    pub const ALL: [AnimalKind; 3] = [AnimalKind::Wolf, AnimalKind::Leopard, AnimalKind::Lion];

    pub fn index(self) -> usize {
        match self {
            AnimalKind::Wolf => 0,
            AnimalKind::Leopard => 1,
            AnimalKind::Lion => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Animal {
    pub kind: AnimalKind,
    pub pos: Vec2,
    pub speed: f32,
    pub alive: bool,
    /// `total_time` at the moment of the last kill.
    pub death_time: f32,
}

impl Animal {
    /// Half-width of the detection/contact box.
    pub fn radius(&self, box_size_multiplier: f32) -> f32 {
        self.speed * box_size_multiplier
    }
}

// ── Player, wizard, trees ────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    pub lumber: u32,
    pub meat: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Capped at 1 on every increase; decay may push it below 0.
    pub health: f32,
    pub temperature: f32,
    /// Forced to 0 once health runs out.
    pub speed: f32,
    pub inventory: Inventory,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    pub pos: Vec2,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub pos: Vec2,
    /// 1.0 = grown and choppable, below 1.0 = stump regrowing.
    pub height: f32,
}

impl Tree {
    pub fn is_grown(&self) -> bool {
        self.height >= 1.0
    }
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Overlaps found by the most recent step. Cleared and recomputed every frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collisions {
    /// Indexed by `AnimalKind::index`.
    pub animals: [bool; 3],
    pub wizard: bool,
    /// Index into the active screen's trees of the grown tree under the player.
    pub tree: Option<usize>,
}

impl Collisions {
    pub fn animal(&self, kind: AnimalKind) -> bool {
        self.animals[kind.index()]
    }

    /// Highest-priority colliding animal (wolf, then leopard, then lion).
    pub fn first_animal(&self) -> Option<AnimalKind> {
        AnimalKind::ALL.into_iter().find(|&k| self.animal(k))
    }
}

// ── World ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub screen: Screen,
    pub camera: Camera,
    /// Seconds since the game started. Never decreases.
    pub total_time: f32,
    /// Difficulty scalar. Grows on every respawn, scales every detection radius.
    pub box_size_multiplier: f32,
}

// ── GameState ────────────────────────────────────────────────────────────────

/// All mutable game state. Owned by the host loop and advanced by
/// [`GameState::step`].
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub world: World,
    pub player: Player,
    /// Indexed by `AnimalKind::index`.
    pub animals: [Animal; 3],
    pub wizard: Wizard,
    /// Indexed by `Screen::index`.
    pub trees: [Vec<Tree>; 3],
    pub collisions: Collisions,
    pub(crate) rng: ChaCha8Rng,
}

/// Uniform point in [-1, 1]².
pub(crate) fn random_position(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0))
}

impl GameState {
    /// Fresh game on the middle screen. `aspect` is the window's width / height.
    pub fn new(config: GameConfig, aspect: f32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let animals = AnimalKind::ALL.map(|kind| Animal {
            kind,
            pos: random_position(&mut rng),
            speed: config.profile(kind).speed,
            alive: true,
            death_time: 0.0,
        });

        let mut trees: [Vec<Tree>; 3] = Default::default();
        for _ in 0..config.trees_per_screen {
            for screen in trees.iter_mut() {
                screen.push(Tree { pos: random_position(&mut rng), height: 1.0 });
            }
        }

        Self {
            world: World {
                screen: Screen::Middle,
                camera: Camera::new(config.camera_half_extent, aspect),
                total_time: 0.0,
                box_size_multiplier: config.box_size_multiplier,
            },
            player: Player {
                pos: Vec2::ZERO,
                health: 1.0,
                temperature: 1.0,
                speed: config.player_speed,
                inventory: Inventory::default(),
            },
            animals,
            wizard: Wizard { pos: config.wizard_start, speed: config.wizard_speed },
            trees,
            collisions: Collisions::default(),
            rng,
            config,
        }
    }

    pub fn animal(&self, kind: AnimalKind) -> &Animal {
        &self.animals[kind.index()]
    }

    pub fn animal_mut(&mut self, kind: AnimalKind) -> &mut Animal {
        &mut self.animals[kind.index()]
    }

    pub fn active_trees(&self) -> &[Tree] {
        &self.trees[self.world.screen.index()]
    }

    pub fn active_trees_mut(&mut self) -> &mut [Tree] {
        &mut self.trees[self.world.screen.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_on_middle_screen_at_full_health() {
        let state = GameState::new(GameConfig::default(), 1.0, 7);
        assert_eq!(state.world.screen, Screen::Middle);
        assert_eq!(state.player.pos, Vec2::ZERO);
        assert_eq!(state.player.health, 1.0);
        assert_eq!(state.player.temperature, 1.0);
        assert_eq!(state.player.inventory, Inventory::default());
    }

    #[test]
    fn new_game_places_everything_inside_unit_square() {
        let state = GameState::new(GameConfig::default(), 1.0, 7);
        for animal in &state.animals {
            assert!(animal.alive);
            assert!(animal.pos.abs().max_element() <= 1.0);
        }
        for screen in &state.trees {
            assert_eq!(screen.len(), 8);
            for tree in screen {
                assert!(tree.is_grown());
                assert!(tree.pos.abs().max_element() <= 1.0);
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = GameState::new(GameConfig::default(), 1.0, 99);
        let b = GameState::new(GameConfig::default(), 1.0, 99);
        assert_eq!(a.animals, b.animals);
        assert_eq!(a.trees, b.trees);
    }

    #[test]
    fn screen_path_has_no_wraparound() {
        assert_eq!(Screen::West.west(), None);
        assert_eq!(Screen::East.east(), None);
        assert_eq!(Screen::West.east(), Some(Screen::Middle));
        assert_eq!(Screen::East.west(), Some(Screen::Middle));
    }

    #[test]
    fn first_animal_follows_priority() {
        let c = Collisions { animals: [false, true, true], ..Default::default() };
        assert_eq!(c.first_animal(), Some(AnimalKind::Leopard));
        assert_eq!(Collisions::default().first_animal(), None);
    }
}

use glam::Vec2;

use crate::input::{Direction, Intent};

use super::collision::{detect, overlaps};
use super::scene::{Color, Scene, SpriteId};
use super::state::{AnimalKind, Collisions, GameState, random_position};

/// Background quad, in view units.
const BACKGROUND_AT: Vec2 = Vec2::new(-10.0, 10.0);
const BACKGROUND_HALF_EXTENT: Vec2 = Vec2::splat(20.0);

impl GameState {
    /// Advance the game by one frame and return what to draw.
    ///
    /// `elapsed` is wall-clock seconds since the previous frame. It only feeds
    /// the game clock; decay, growth and movement are per frame.
    ///
    /// Order:
    /// 1. health / temperature decay
    /// 2. respawns
    /// 3. movement and screen transitions
    /// 4. tree regrowth and tree collision
    /// 5. animal / wizard detection (with chase)
    /// 6. contact damage
    /// 7. interactions (chop, kill, harvest, trade, eat, drop)
    /// 8. scene emission
    pub fn step(&mut self, elapsed: f32, intents: &[Intent]) -> Scene {
        self.world.total_time += elapsed;
        self.collisions = Collisions::default();

        self.decay();
        self.respawn_animals();
        for intent in intents {
            if let Intent::Move(dir) = intent {
                self.move_player(*dir);
            }
        }
        self.update_trees();
        self.detect_collisions();
        self.apply_contact_damage();
        for intent in intents {
            self.resolve(*intent);
        }
        self.emit_scene()
    }

    fn decay(&mut self) {
        let p = &mut self.player;
        p.health -= self.config.health_decay;
        p.temperature -= self.config.temp_decay;
        if p.health <= 0.0 {
            p.speed = 0.0;
        }
    }

    fn respawn_animals(&mut self) {
        let now = self.world.total_time;
        for kind in AnimalKind::ALL {
            let profile = self.config.profile(kind);
            let (interval, base_speed) = (profile.respawn_interval, profile.respawn_base_speed);
            let animal = &self.animals[kind.index()];
            if animal.alive || now - animal.death_time <= interval {
                continue;
            }

            let pos = random_position(&mut self.rng);
            let animal = &mut self.animals[kind.index()];
            animal.alive = true;
            animal.speed = base_speed * (now / 100.0);
            animal.pos = pos;
            self.world.box_size_multiplier *= self.config.respawn_difficulty_factor;
            tracing::info!(
                ?kind,
                speed = animal.speed,
                difficulty = self.world.box_size_multiplier,
                "animal respawned"
            );
        }
    }

    fn move_player(&mut self, dir: Direction) {
        let speed = self.player.speed;
        let pos = &mut self.player.pos;
        match dir {
            Direction::Up => {
                if pos.y <= 1.0 {
                    pos.y += speed;
                }
            }
            Direction::Down => {
                if pos.y >= -1.0 {
                    pos.y -= speed;
                }
            }
            Direction::Right => match self.world.screen.east() {
                Some(_) if pos.x >= 1.0 => {
                    pos.x = -pos.x.abs();
                    self.cross_to_screen(Direction::Right);
                }
                Some(_) => pos.x += speed,
                None => {
                    if pos.x < 1.0 {
                        pos.x += speed;
                    }
                }
            },
            Direction::Left => match self.world.screen.west() {
                Some(_) if pos.x <= -1.0 => {
                    pos.x = pos.x.abs();
                    self.cross_to_screen(Direction::Left);
                }
                Some(_) => pos.x -= speed,
                None => {
                    if pos.x > -1.0 {
                        pos.x -= speed;
                    }
                }
            },
        }
    }

    /// Switch to the neighbouring screen. Living animals are scattered and the
    /// wizard slides the opposite way so it stays anchored to its own screen.
    fn cross_to_screen(&mut self, dir: Direction) {
        let (next, shift) = match dir {
            Direction::Right => (self.world.screen.east(), -self.config.wizard_shift),
            Direction::Left => (self.world.screen.west(), self.config.wizard_shift),
            Direction::Up | Direction::Down => (None, 0.0),
        };
        let Some(next) = next else { return };

        tracing::info!(from = ?self.world.screen, to = ?next, "screen transition");
        self.world.screen = next;
        for animal in self.animals.iter_mut().filter(|a| a.alive) {
            animal.pos = random_position(&mut self.rng);
        }
        self.wizard.pos.x += shift;
    }

    /// Regrow stumps on the active screen and find the grown tree under the player.
    fn update_trees(&mut self) {
        let player = self.player.pos;
        let (rate, radius) = (self.config.tree_grow_rate, self.config.tree_box);
        let mut hit = None;
        for (i, tree) in self.active_trees_mut().iter_mut().enumerate() {
            if !tree.is_grown() {
                tree.height = (tree.height + rate).min(1.0);
            } else if hit.is_none() && overlaps(player, tree.pos, radius) {
                hit = Some(i);
            }
        }
        self.collisions.tree = hit;
    }

    fn detect_collisions(&mut self) {
        let player = self.player.pos;
        let multiplier = self.world.box_size_multiplier;
        for animal in self.animals.iter_mut().filter(|a| a.alive) {
            let radius = animal.radius(multiplier);
            self.collisions.animals[animal.kind.index()] =
                detect(player, &mut animal.pos, radius, animal.speed);
        }
        self.collisions.wizard =
            detect(player, &mut self.wizard.pos, self.config.wizard_box, self.wizard.speed);
    }

    fn apply_contact_damage(&mut self) {
        let player = self.player.pos;
        let multiplier = self.world.box_size_multiplier;
        for animal in self.animals.iter().filter(|a| a.alive) {
            if overlaps(player, animal.pos, animal.radius(multiplier)) {
                self.player.health -= self.config.profile(animal.kind).damage;
            }
        }
    }

    fn resolve(&mut self, intent: Intent) {
        match intent {
            Intent::Interact => {
                self.kill_colliding_animal();
                self.chop_colliding_tree();
            }
            Intent::EatMeat => {
                let inv = &mut self.player.inventory;
                if inv.meat > 0 {
                    inv.meat -= 1;
                    self.player.health = (self.player.health + self.config.meat_regen).min(1.0);
                    tracing::debug!(health = self.player.health, "ate meat");
                }
            }
            Intent::DropLumber => {
                let inv = &mut self.player.inventory;
                inv.lumber = inv.lumber.saturating_sub(1);
            }
            Intent::TradeOrAttack => {
                if let Some(kind) = self.collisions.first_animal() {
                    let gained = self.config.profile(kind).meat_yield;
                    self.player.inventory.meat += gained;
                    tracing::debug!(?kind, gained, "harvested meat");
                } else if self.collisions.wizard {
                    self.trade_with_wizard();
                }
            }
            // Movement was applied before the collision pass; quitting is the host's job.
            Intent::Move(_) | Intent::Quit => {}
        }
    }

    fn kill_colliding_animal(&mut self) {
        let Some(kind) = self.collisions.first_animal() else { return };
        let now = self.world.total_time;
        let sentinel = self.config.dead_sentinel;

        self.collisions.animals[kind.index()] = false;
        let animal = self.animal_mut(kind);
        animal.alive = false;
        animal.speed = 0.0;
        animal.pos = sentinel;
        animal.death_time = now;
        tracing::info!(?kind, at = now, "animal killed");
    }

    fn chop_colliding_tree(&mut self) {
        let Some(i) = self.collisions.tree else { return };
        let lumber = self.config.lumber_per_tree;
        let screen = self.world.screen.index();
        if let Some(tree) = self.trees[screen].get_mut(i) {
            if tree.is_grown() {
                tree.height = 0.0;
                self.player.inventory.lumber += lumber;
                tracing::debug!(tree = i, "tree chopped");
            }
        }
    }

    /// Meat and lumber are offered independently; each restores `wizard_regen`.
    fn trade_with_wizard(&mut self) {
        let regen = self.config.wizard_regen;
        let p = &mut self.player;
        if p.inventory.meat > 0 {
            p.inventory.meat -= 1;
            p.health = (p.health + regen).min(1.0);
        }
        if p.inventory.lumber > 0 {
            p.inventory.lumber -= 1;
            p.health = (p.health + regen).min(1.0);
        }
        tracing::debug!(health = p.health, "traded with wizard");
    }

    fn emit_scene(&self) -> Scene {
        let cam = &self.world.camera;
        let trees = self.active_trees();
        let mut scene = Scene::with_capacity(6 + trees.len());

        scene.quad(SpriteId::Background, BACKGROUND_AT, BACKGROUND_HALF_EXTENT, Color::WHITE);
        scene.sprite(SpriteId::Player, cam.world_to_view(self.player.pos));
        for animal in &self.animals {
            let sprite = match animal.kind {
                AnimalKind::Wolf => SpriteId::Wolf,
                AnimalKind::Leopard => SpriteId::Leopard,
                AnimalKind::Lion => SpriteId::Lion,
            };
            scene.sprite(sprite, cam.world_to_view(animal.pos));
        }
        scene.sprite(SpriteId::Wizard, cam.world_to_view(self.wizard.pos));
        for tree in trees {
            let sprite = if tree.is_grown() { SpriteId::Tree } else { SpriteId::Stump };
            scene.sprite(sprite, cam.world_to_view(tree.pos));
        }
        scene
    }
}

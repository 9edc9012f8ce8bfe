use glam::Vec2;

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
}

// ── SpriteId ───────────────────────────────────────────────────────────────

/// Symbolic sprite names. The asset catalog resolves each to an atlas region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Wolf,
    Leopard,
    Lion,
    Player,
    Meat,
    Tree,
    Stump,
    Wizard,
}

impl SpriteId {
    /// Every sprite the game needs, in atlas load order.
    pub const ALL: [SpriteId; 9] = [
        SpriteId::Background,
        SpriteId::Wolf,
        SpriteId::Leopard,
        SpriteId::Lion,
        SpriteId::Player,
        SpriteId::Meat,
        SpriteId::Tree,
        SpriteId::Stump,
        SpriteId::Wizard,
    ];

    /// File stem of the sprite inside the sprite folder.
    pub fn name(self) -> &'static str {
        match self {
            SpriteId::Background => "elements",
            SpriteId::Wolf => "wolf",
            SpriteId::Leopard => "leopard",
            SpriteId::Lion => "lion",
            SpriteId::Player => "player",
            SpriteId::Meat => "meat",
            SpriteId::Tree => "tree",
            SpriteId::Stump => "stump",
            SpriteId::Wizard => "wizard",
        }
    }
}

// ── Scene ──────────────────────────────────────────────────────────────────

/// One textured quad in view space.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    /// Quad centre in view units (`world * camera.radius + camera.at`).
    pub at: Vec2,
    /// Overrides the sprite's intrinsic half-extent when set.
    pub half_extent: Option<Vec2>,
    pub tint: Color,
}

/// Everything the renderer needs for one frame, back to front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn with_capacity(n: usize) -> Self {
        Self { commands: Vec::with_capacity(n) }
    }

    pub fn sprite(&mut self, sprite: SpriteId, at: Vec2) {
        self.commands.push(DrawCommand { sprite, at, half_extent: None, tint: Color::WHITE });
    }

    pub fn quad(&mut self, sprite: SpriteId, at: Vec2, half_extent: Vec2, tint: Color) {
        self.commands.push(DrawCommand { sprite, at, half_extent: Some(half_extent), tint });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn count(&self, sprite: SpriteId) -> usize {
        self.commands.iter().filter(|c| c.sprite == sprite).count()
    }
}

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use glam::Vec2;
use image::RgbaImage;

use crate::error::{GameError, Result};
use crate::sim::SpriteId;

/// Default source-pixel density: a 16 px sprite spans one view unit.
pub const PIXELS_PER_UNIT: f32 = 16.0;

/// Maximum row width of the packed atlas texture in pixels.
pub const ATLAS_WIDTH: u32 = 512;

/// Sprite folder looked up relative to the working directory when none is given.
pub const DEFAULT_SPRITE_DIR: &str = "resources/sprites";

macro_rules! builtin_sprite {
    ($name:literal) => {
        ($name, include_bytes!(concat!(env!("OUT_DIR"), "/sprites/", $name, ".png")) as &[u8])
    };
}

/// Placeholder sprites generated by `build.rs` and embedded at compile time.
const BUILTIN_SPRITES: [(&str, &[u8]); 9] = [
    builtin_sprite!("elements"),
    builtin_sprite!("wolf"),
    builtin_sprite!("leopard"),
    builtin_sprite!("lion"),
    builtin_sprite!("player"),
    builtin_sprite!("meat"),
    builtin_sprite!("tree"),
    builtin_sprite!("stump"),
    builtin_sprite!("wizard"),
];

// ── SpriteData ───────────────────────────────────────────────────────────────

/// UV rectangle and intrinsic size of a single named sprite.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteData {
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    /// Half-size of the sprite's quad in view units.
    pub half_extent: Vec2,
}

// ── Shelf packing (pure, GPU-free) ───────────────────────────────────────────

/// One sprite's position inside the packed atlas.
#[derive(Debug, PartialEq)]
pub struct PlacedSprite {
    pub name: String,
    /// Top-left pixel coordinate inside the atlas.
    pub atlas_x: u32,
    pub atlas_y: u32,
    pub pixel_w: u32,
    pub pixel_h: u32,
}

/// Shelf-pack `(name, pixel_w, pixel_h)` items into rows of at most
/// `max_width` pixels, tallest first.
///
/// Returns the placements and the atlas size, both dimensions rounded up to
/// the next power of two.
pub fn pack(items: &[(String, u32, u32)], max_width: u32) -> Result<(Vec<PlacedSprite>, u32, u32)> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].2.cmp(&items[a].2));

    let mut placements = Vec::with_capacity(items.len());
    let (mut cur_x, mut cur_y, mut row_h) = (0u32, 0u32, 0u32);

    for i in order {
        let (ref name, w, h) = items[i];
        if w > max_width {
            return Err(GameError::SpriteTooWide { name: name.clone(), width: w, max_width });
        }
        if cur_x + w > max_width {
            cur_y += row_h;
            cur_x = 0;
            row_h = 0;
        }
        placements.push(PlacedSprite {
            name: name.clone(),
            atlas_x: cur_x,
            atlas_y: cur_y,
            pixel_w: w,
            pixel_h: h,
        });
        cur_x += w;
        row_h = row_h.max(h);
    }

    let atlas_w = max_width.next_power_of_two();
    let atlas_h = (cur_y + row_h).next_power_of_two().max(1);
    Ok((placements, atlas_w, atlas_h))
}

// ── SpriteCatalog ────────────────────────────────────────────────────────────

/// Sprite name → atlas region.
#[derive(Clone, Debug, Default)]
pub struct SpriteCatalog {
    sprites: HashMap<String, SpriteData>,
}

impl SpriteCatalog {
    pub fn get(&self, sprite: SpriteId) -> Option<&SpriteData> {
        self.sprites.get(sprite.name())
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// A packed atlas image plus the catalog describing it, ready for upload.
pub struct BakedAtlas {
    pub catalog: SpriteCatalog,
    pub image: RgbaImage,
}

/// Pack decoded sprites into one atlas. Every `SpriteId` must be present.
pub fn bake(images: Vec<(String, RgbaImage)>, pixels_per_unit: f32) -> Result<BakedAtlas> {
    for id in SpriteId::ALL {
        if !images.iter().any(|(name, _)| name == id.name()) {
            return Err(GameError::MissingSprite(id.name().to_string()));
        }
    }

    let dims: Vec<(String, u32, u32)> = images
        .iter()
        .map(|(name, img)| (name.clone(), img.width(), img.height()))
        .collect();
    let (placements, atlas_w, atlas_h) = pack(&dims, ATLAS_WIDTH)?;

    let lookup: HashMap<&str, &RgbaImage> = images.iter().map(|(n, i)| (n.as_str(), i)).collect();
    let mut atlas = RgbaImage::new(atlas_w, atlas_h);
    let mut sprites = HashMap::with_capacity(placements.len());

    for p in &placements {
        let Some(img) = lookup.get(p.name.as_str()) else { continue };
        image::imageops::replace(&mut atlas, *img, p.atlas_x as i64, p.atlas_y as i64);

        let uv_min = [p.atlas_x as f32 / atlas_w as f32, p.atlas_y as f32 / atlas_h as f32];
        let uv_max = [
            (p.atlas_x + p.pixel_w) as f32 / atlas_w as f32,
            (p.atlas_y + p.pixel_h) as f32 / atlas_h as f32,
        ];
        let half_extent = Vec2::new(p.pixel_w as f32, p.pixel_h as f32) / (2.0 * pixels_per_unit);
        sprites.insert(p.name.clone(), SpriteData { uv_min, uv_max, half_extent });
    }

    tracing::info!(width = atlas_w, height = atlas_h, sprites = sprites.len(), "sprite atlas baked");
    Ok(BakedAtlas { catalog: SpriteCatalog { sprites }, image: atlas })
}

/// Scan `path` recursively for `.png` files and bake them into an atlas.
///
/// The first file seen for a given stem wins; later duplicates are skipped.
pub fn load_folder(path: impl AsRef<Path>, pixels_per_unit: f32) -> Result<BakedAtlas> {
    let mut loaded = Vec::new();
    let mut seen = HashSet::new();

    for entry in walkdir::WalkDir::new(path.as_ref())
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file = entry.path();
        if file.extension().and_then(|s| s.to_str()) != Some("png") {
            continue;
        }
        let Some(name) = file.file_stem().and_then(|s| s.to_str()).filter(|n| !n.is_empty()) else {
            continue;
        };
        if !seen.insert(name.to_string()) {
            tracing::warn!(?file, "duplicate sprite name '{name}'; skipping");
            continue;
        }
        let img = image::open(file).map_err(|source| GameError::Image {
            path: file.display().to_string(),
            source,
        })?;
        loaded.push((name.to_string(), img.to_rgba8()));
    }

    bake(loaded, pixels_per_unit)
}

/// Bake the embedded placeholder sprites.
pub fn load_builtin(pixels_per_unit: f32) -> Result<BakedAtlas> {
    let mut loaded = Vec::with_capacity(BUILTIN_SPRITES.len());
    for (name, bytes) in BUILTIN_SPRITES {
        let img = image::load_from_memory(bytes).map_err(|source| GameError::Image {
            path: format!("<builtin>/{name}.png"),
            source,
        })?;
        loaded.push((name.to_string(), img.to_rgba8()));
    }
    bake(loaded, pixels_per_unit)
}

// ── SpriteSource ─────────────────────────────────────────────────────────────

/// Where the atlas comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpriteSource {
    /// A folder of PNGs. Missing or incomplete folders fail at startup.
    Folder(PathBuf),
    /// The placeholder set compiled into the binary.
    Builtin,
}

impl SpriteSource {
    /// An explicit folder always wins. Otherwise use [`DEFAULT_SPRITE_DIR`]
    /// under `cwd` if it exists, else the built-in set.
    pub fn resolve(explicit: Option<PathBuf>, cwd: &Path) -> Self {
        match explicit {
            Some(dir) => SpriteSource::Folder(dir),
            None => {
                let dir = cwd.join(DEFAULT_SPRITE_DIR);
                if dir.is_dir() { SpriteSource::Folder(dir) } else { SpriteSource::Builtin }
            }
        }
    }

    pub fn load(&self, pixels_per_unit: f32) -> Result<BakedAtlas> {
        match self {
            SpriteSource::Folder(dir) => load_folder(dir, pixels_per_unit),
            SpriteSource::Builtin => load_builtin(pixels_per_unit),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, w: u32, h: u32) -> (String, u32, u32) {
        (name.to_string(), w, h)
    }

    fn full_set(size: u32) -> Vec<(String, RgbaImage)> {
        SpriteId::ALL
            .iter()
            .map(|id| (id.name().to_string(), RgbaImage::new(size, size)))
            .collect()
    }

    #[test]
    fn pack_wraps_to_next_shelf_when_row_full() {
        let items = [item("a", 200, 32), item("b", 200, 32), item("c", 200, 32)];
        let (pl, _, _) = pack(&items, 512).unwrap();
        assert_eq!(pl.iter().filter(|p| p.atlas_y == 0).count(), 2);
        assert_eq!(pl.iter().filter(|p| p.atlas_y == 32).count(), 1);
    }

    #[test]
    fn pack_rejects_sprite_wider_than_atlas() {
        let items = [item("giant", 600, 48)];
        assert!(matches!(pack(&items, 512), Err(GameError::SpriteTooWide { .. })));
    }

    #[test]
    fn pack_atlas_dimensions_are_powers_of_two() {
        let items = [item("a", 16, 24), item("b", 16, 24)];
        let (_, w, h) = pack(&items, 500).unwrap();
        assert!(w.is_power_of_two() && h.is_power_of_two());
    }

    #[test]
    fn bake_requires_every_sprite() {
        let mut images = full_set(16);
        images.retain(|(n, _)| n != "stump");
        match bake(images, PIXELS_PER_UNIT) {
            Err(GameError::MissingSprite(name)) => assert_eq!(name, "stump"),
            other => panic!("expected MissingSprite, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn bake_gives_16px_sprites_half_unit_extent() {
        let atlas = bake(full_set(16), PIXELS_PER_UNIT).unwrap();
        let wolf = atlas.catalog.get(SpriteId::Wolf).unwrap();
        assert_eq!(wolf.half_extent, Vec2::splat(0.5));
    }

    #[test]
    fn bake_uvs_are_disjoint_and_in_range() {
        let atlas = bake(full_set(16), PIXELS_PER_UNIT).unwrap();
        let rects: Vec<&SpriteData> = SpriteId::ALL.iter().filter_map(|&id| atlas.catalog.get(id)).collect();
        assert_eq!(rects.len(), SpriteId::ALL.len());
        for (i, a) in rects.iter().enumerate() {
            for v in a.uv_min.iter().chain(a.uv_max.iter()) {
                assert!((0.0..=1.0).contains(v));
            }
            for b in &rects[i + 1..] {
                let separate = a.uv_max[0] <= b.uv_min[0]
                    || b.uv_max[0] <= a.uv_min[0]
                    || a.uv_max[1] <= b.uv_min[1]
                    || b.uv_max[1] <= a.uv_min[1];
                assert!(separate, "sprite rects overlap");
            }
        }
    }

    #[test]
    fn builtin_set_has_every_sprite() {
        let atlas = load_builtin(PIXELS_PER_UNIT).unwrap();
        for id in SpriteId::ALL {
            let data = atlas.catalog.get(id).unwrap();
            assert_eq!(data.half_extent, Vec2::splat(0.5), "{id:?}");
        }
    }

    #[test]
    fn explicit_folder_wins_over_default() {
        let dir = PathBuf::from("/nowhere/sprites");
        let src = SpriteSource::resolve(Some(dir.clone()), Path::new("/"));
        assert_eq!(src, SpriteSource::Folder(dir));
    }

    #[test]
    fn missing_default_folder_falls_back_to_builtin() {
        let cwd = std::env::temp_dir().join(format!("tundra-no-sprites-{}", std::process::id()));
        assert_eq!(SpriteSource::resolve(None, &cwd), SpriteSource::Builtin);
    }

    #[test]
    fn bake_copies_pixels_into_place() {
        let mut images = full_set(16);
        for (name, img) in images.iter_mut() {
            if name == "player" {
                img.put_pixel(3, 5, image::Rgba([255, 0, 0, 255]));
            }
        }
        let atlas = bake(images, PIXELS_PER_UNIT).unwrap();
        let player = atlas.catalog.get(SpriteId::Player).unwrap();
        let x = (player.uv_min[0] * atlas.image.width() as f32).round() as u32 + 3;
        let y = (player.uv_min[1] * atlas.image.height() as f32).round() as u32 + 5;
        assert_eq!(*atlas.image.get_pixel(x, y), image::Rgba([255, 0, 0, 255]));
    }
}

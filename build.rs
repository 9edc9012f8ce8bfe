// Generates the placeholder sprite set into $OUT_DIR/sprites/. The library
// embeds these PNGs as its built-in sprites.

use image::{Rgba, RgbaImage};
use std::path::Path;

const SIZE: u32 = 16;

fn draw_bordered_rect(fill: [u8; 4], border: [u8; 4]) -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let on_border = x == 0 || x == SIZE - 1 || y == 0 || y == SIZE - 1;
            img.put_pixel(x, y, Rgba(if on_border { border } else { fill }));
        }
    }
    img
}

fn add_eyes(img: &mut RgbaImage, eye: [u8; 4]) {
    let ey = SIZE / 3;
    img.put_pixel(SIZE / 4, ey, Rgba(eye));
    img.put_pixel(3 * SIZE / 4, ey, Rgba(eye));
}

fn draw_animal(fill: [u8; 4], border: [u8; 4]) -> RgbaImage {
    let mut img = draw_bordered_rect(fill, border);
    add_eyes(&mut img, [0xFF, 0xAA, 0x00, 0xFF]);
    img
}

fn draw_player() -> RgbaImage {
    let mut img = draw_bordered_rect([0xF5, 0xD0, 0x30, 0xFF], [0x80, 0x60, 0x00, 0xFF]);
    add_eyes(&mut img, [0x10, 0x10, 0x10, 0xFF]);
    img
}

fn draw_wizard() -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    let robe = Rgba([0x40, 0x30, 0xC0, 0xFF]);
    // Triangular robe widening towards the bottom.
    for y in 0..SIZE {
        let half = y / 2;
        let lo = (SIZE / 2).saturating_sub(half + 1);
        let hi = (SIZE / 2 + half).min(SIZE - 1);
        for x in lo..=hi {
            img.put_pixel(x, y, robe);
        }
    }
    add_eyes(&mut img, [0xFF, 0xFF, 0xFF, 0xFF]);
    img
}

fn draw_tree() -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    let leaves = Rgba([0x1E, 0x70, 0x2A, 0xFF]);
    let trunk = Rgba([0x6B, 0x45, 0x20, 0xFF]);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as i32 - SIZE as i32 / 2;
            let dy = y as i32 - SIZE as i32 / 3;
            if dx * dx + dy * dy <= 25 {
                img.put_pixel(x, y, leaves);
            } else if y > SIZE / 2 && (SIZE / 2 - 1..=SIZE / 2).contains(&x) {
                img.put_pixel(x, y, trunk);
            }
        }
    }
    img
}

fn draw_stump() -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    let wood = Rgba([0x8A, 0x5A, 0x2B, 0xFF]);
    for y in SIZE - 5..SIZE {
        for x in SIZE / 2 - 3..SIZE / 2 + 3 {
            img.put_pixel(x, y, wood);
        }
    }
    img
}

fn draw_meat() -> RgbaImage {
    draw_bordered_rect([0xC0, 0x30, 0x40, 0xFF], [0xF0, 0xE0, 0xD0, 0xFF])
}

fn draw_snow() -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let speck = (x * 7 + y * 13) % 11 == 0;
            let c = if speck { [0xC8, 0xD8, 0xE8, 0xFF] } else { [0xEE, 0xF4, 0xFA, 0xFF] };
            img.put_pixel(x, y, Rgba(c));
        }
    }
    img
}

fn save(dir: &Path, name: &str, img: RgbaImage) {
    let path = dir.join(format!("{name}.png"));
    img.save(&path)
        .unwrap_or_else(|e| panic!("build: could not save {}: {e}", path.display()));
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out = std::env::var_os("OUT_DIR").expect("build: OUT_DIR not set");
    let dir = Path::new(&out).join("sprites");
    std::fs::create_dir_all(&dir).expect("build: failed to create sprite dir");

    save(&dir, "elements", draw_snow());
    save(&dir, "player", draw_player());
    save(&dir, "wolf", draw_animal([0x90, 0x90, 0x98, 0xFF], [0x40, 0x40, 0x48, 0xFF]));
    save(&dir, "leopard", draw_animal([0xE0, 0xB0, 0x40, 0xFF], [0x50, 0x30, 0x10, 0xFF]));
    save(&dir, "lion", draw_animal([0xC8, 0x88, 0x30, 0xFF], [0x70, 0x40, 0x10, 0xFF]));
    save(&dir, "wizard", draw_wizard());
    save(&dir, "tree", draw_tree());
    save(&dir, "stump", draw_stump());
    save(&dir, "meat", draw_meat());
}

use glam::Vec2;

/// Strict axis-aligned box test: is `point` inside the square of half-width
/// `radius` centred on `center`?
///
/// Points exactly on the box edge do not overlap, so a zero radius never
/// overlaps anything.
#[inline]
pub fn overlaps(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.x > center.x - radius
        && point.x < center.x + radius
        && point.y > center.y - radius
        && point.y < center.y + radius
}

/// Step `pos` by `speed` toward `target`, independently on each axis.
/// An axis whose coordinates are exactly equal is left alone.
#[inline]
pub fn chase(pos: &mut Vec2, target: Vec2, speed: f32) {
    let delta = target - *pos;
    if delta.x < 0.0 {
        pos.x -= speed;
    } else if delta.x > 0.0 {
        pos.x += speed;
    }
    if delta.y < 0.0 {
        pos.y -= speed;
    } else if delta.y > 0.0 {
        pos.y += speed;
    }
}

/// Detection test for a moving entity: on overlap the entity is nudged one
/// speed-step toward the player and `true` is returned.
pub fn detect(player: Vec2, pos: &mut Vec2, radius: f32, speed: f32) -> bool {
    if overlaps(player, *pos, radius) {
        chase(pos, player, speed);
        true
    } else {
        false
    }
}

use glam::Vec2;

/// Camera uniform uploaded to the GPU: the combined view-projection matrix.
///
/// Layout (column-major, matching WGSL `mat4x4<f32>`):
/// ```text
/// col0: [sx,  0,   0,  0]
/// col1: [0,   sy,  0,  0]
/// col2: [0,   0,   1,  0]
/// col3: [tx,  ty,  0,  1]
/// ```
/// where `sx = 1/rx`, `sy = 1/ry`, `tx = -sx*ax`, `ty = -sy*ay`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Column-major 4×4 view-projection matrix sent to the vertex shader.
    pub view_proj: [[f32; 4]; 4],
}

/// Fixed 2D orthographic camera.
///
/// World positions live in `[-1, 1]²` per screen; view positions are
/// `world * radius + at`, and the projection maps `at ± radius` onto the
/// edges of clip space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// View-space point at the centre of the window.
    pub at: Vec2,
    /// Half-extent of the visible region in view units.
    pub radius: Vec2,
}

impl Camera {
    /// Camera centred on the origin with vertical half-extent `half_extent`;
    /// the horizontal half-extent is corrected for `aspect` (width / height).
    pub fn new(half_extent: f32, aspect: f32) -> Self {
        Self {
            at: Vec2::ZERO,
            radius: Vec2::new(half_extent * aspect, half_extent),
        }
    }

    /// Map a world position to view space.
    #[inline]
    pub fn world_to_view(&self, world: Vec2) -> Vec2 {
        world * self.radius + self.at
    }

    /// Build the GPU-ready `CameraUniform`.
    ///
    /// Derivation (y-up view space → NDC):
    /// ```text
    /// x_ndc = sx * view_x + tx    (sx = 1/rx,  tx = -sx*ax)
    /// y_ndc = sy * view_y + ty    (sy = 1/ry,  ty = -sy*ay)
    /// ```
    /// At the camera centre: x_ndc = 0, y_ndc = 0.
    pub fn build_view_proj(&self) -> CameraUniform {
        let scale = Vec2::ONE / self.radius.max(Vec2::splat(f32::EPSILON));
        let offset = scale * -self.at;

        CameraUniform {
            view_proj: [
                [scale.x,  0.0,      0.0, 0.0], // col0
                [0.0,      scale.y,  0.0, 0.0], // col1
                [0.0,      0.0,      1.0, 0.0], // col2
                [offset.x, offset.y, 0.0, 1.0], // col3
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(u: &CameraUniform, p: Vec2) -> Vec2 {
        let m = u.view_proj;
        Vec2::new(m[0][0] * p.x + m[3][0], m[1][1] * p.y + m[3][1])
    }

    #[test]
    fn radius_is_corrected_for_aspect() {
        let cam = Camera::new(10.0, 2.0);
        assert_eq!(cam.radius, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn world_unit_square_fills_clip_space() {
        let cam = Camera::new(10.0, 1.0);
        let u = cam.build_view_proj();
        let corner = project(&u, cam.world_to_view(Vec2::new(1.0, -1.0)));
        assert!((corner - Vec2::new(1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn centre_maps_to_origin() {
        let cam = Camera { at: Vec2::new(3.0, -2.0), radius: Vec2::new(10.0, 10.0) };
        let u = cam.build_view_proj();
        assert!(project(&u, cam.at).length() < 1e-6);
    }
}

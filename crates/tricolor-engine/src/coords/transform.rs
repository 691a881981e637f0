use glam::{Mat4, Vec3, Vec4};

use super::Vec2;

/// Affine 4x4 transform from normalized device coordinates to window pixels.
///
/// NDC spans `[-1, 1]` on both axes with +Y up. Pixel space spans
/// `[0, w] x [0, h]` with the origin at the top-left and +Y down.
///
/// For a window of size `(w, h)`:
///
/// ```text
/// pixel_x = w/2 + x * (w/2)
/// pixel_y = h/2 - y * (h/2)
/// ```
///
/// Built as `translate(w/2, h/2, 0) * scale(w/2, -h/2, 1)`, so points are
/// scaled first and translated second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Computes the NDC -> pixel transform for a `width x height` window.
    pub fn ndc_to_pixels(width: u32, height: u32) -> Self {
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;

        let translate = Mat4::from_translation(Vec3::new(half_w, half_h, 0.0));
        // Negative Y scale flips the math-up axis into the screen-down axis.
        let scale = Mat4::from_scale(Vec3::new(half_w, -half_h, 1.0));

        Self { matrix: translate * scale }
    }

    /// Transforms a 2D point as `(x, y, 0, 1)`.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let out = self.matrix * Vec4::new(p.x, p.y, 0.0, 1.0);
        Vec2::new(out.x, out.y)
    }

    /// Column-major matrix elements, suitable for uniform upload.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.matrix.to_cols_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [(u32, u32); 5] = [(800, 600), (1024, 768), (1, 1), (333, 517), (3840, 2160)];

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── ndc_to_pixels ─────────────────────────────────────────────────────

    #[test]
    fn origin_maps_to_window_center() {
        for (w, h) in SIZES {
            let t = Transform::ndc_to_pixels(w, h);
            let p = t.apply(Vec2::zero());
            assert!(close(p, Vec2::new(w as f32 / 2.0, h as f32 / 2.0)), "{w}x{h}: {p:?}");
        }
    }

    #[test]
    fn top_right_corner_maps_to_width_and_zero() {
        for (w, h) in SIZES {
            let p = Transform::ndc_to_pixels(w, h).apply(Vec2::new(1.0, 1.0));
            assert!(close(p, Vec2::new(w as f32, 0.0)), "{w}x{h}: {p:?}");
        }
    }

    #[test]
    fn bottom_left_corner_maps_to_zero_and_height() {
        for (w, h) in SIZES {
            let p = Transform::ndc_to_pixels(w, h).apply(Vec2::new(-1.0, -1.0));
            assert!(close(p, Vec2::new(0.0, h as f32)), "{w}x{h}: {p:?}");
        }
    }

    #[test]
    fn y_axis_is_flipped() {
        let t = Transform::ndc_to_pixels(800, 600);
        let up = t.apply(Vec2::new(0.0, 0.5));
        let down = t.apply(Vec2::new(0.0, -0.5));
        assert!(up.y < down.y);
        assert!(close(up, Vec2::new(400.0, 150.0)));
        assert!(close(down, Vec2::new(400.0, 450.0)));
    }

    #[test]
    fn recompute_is_bit_identical() {
        let a = Transform::ndc_to_pixels(1024, 768).to_cols_array();
        let b = Transform::ndc_to_pixels(1024, 768).to_cols_array();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn translation_lives_in_last_column() {
        let cols = Transform::ndc_to_pixels(800, 600).to_cols_array();
        assert_eq!(cols[12], 400.0);
        assert_eq!(cols[13], 300.0);
        assert_eq!(cols[0], 400.0);
        assert_eq!(cols[5], -300.0);
    }
}

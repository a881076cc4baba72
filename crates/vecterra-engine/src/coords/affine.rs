use core::fmt;
use core::ops::Mul;

use super::{Rect, Vec2};

/// 2D affine matrix in the six-parameter SVG layout.
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
/// `A * B` applies `B` first, then `A`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `radians` in the surface frame (+Y down, so positive is clockwise on screen).
    #[inline]
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Horizontal shear: `x' = x + k·y`.
    #[inline]
    pub const fn shear_x(k: f64) -> Self {
        Self::new(1.0, 0.0, k, 1.0, 0.0, 0.0)
    }

    /// Vertical shear: `y' = k·x + y`.
    #[inline]
    pub const fn shear_y(k: f64) -> Self {
        Self::new(1.0, k, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Axis-aligned bounds of `rect` after transformation.
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        let corners = rect.corners().map(|p| self.apply(p));
        Rect::from_points(corners).unwrap_or(rect)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        Affine {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }
}

/// Formats as an SVG `transform` attribute value.
impl fmt::Display for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix({},{},{},{},{},{})", self.a, self.b, self.c, self.d, self.e, self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn identity_is_neutral() {
        let t = Affine::translate(3.0, 4.0) * Affine::scale(2.0, 2.0);
        assert_eq!(Affine::IDENTITY * t, t);
        assert_eq!(t * Affine::IDENTITY, t);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let m = Affine::translate(10.0, 0.0) * Affine::scale(2.0, 2.0);
        assert_eq!(m.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn quarter_turn_in_surface_frame() {
        let r = Affine::rotate(core::f64::consts::FRAC_PI_2);
        assert!(close(r.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn shears_move_the_expected_axis() {
        assert_eq!(Affine::shear_x(0.5).apply(Vec2::new(0.0, 2.0)), Vec2::new(1.0, 2.0));
        assert_eq!(Affine::shear_y(0.5).apply(Vec2::new(2.0, 0.0)), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn transform_rect_bounds_rotated_square() {
        let r = Affine::rotate(core::f64::consts::FRAC_PI_4);
        let b = r.transform_rect(Rect::new(-1.0, -1.0, 2.0, 2.0));
        let half = 2f64.sqrt();
        assert!((b.size.x - 2.0 * half).abs() < 1e-9);
        assert!((b.origin.y + half).abs() < 1e-9);
    }

    #[test]
    fn displays_as_svg_matrix() {
        assert_eq!(Affine::translate(5.0, -2.5).to_string(), "matrix(1,0,0,1,5,-2.5)");
    }
}

use super::Vec2;

/// Axis-aligned rectangle in surface units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest rectangle containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut lo, mut hi) = (first, first);
        for p in iter {
            lo = Vec2::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = Vec2::new(hi.x.max(p.x), hi.y.max(p.y));
        }
        Some(Rect::from_origin_size(lo, hi - lo))
    }

    /// Square of half-extent `radius` around `center`.
    #[inline]
    pub fn around(center: Vec2, radius: f64) -> Self {
        Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    /// The four corners, clockwise from the origin.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let (lo, hi) = (self.min(), self.max());
        [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)]
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Smallest rectangle covering both inputs.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        let x0 = a.origin.x.min(b.origin.x);
        let y0 = a.origin.y.min(b.origin.y);
        let x1 = a.max().x.max(b.max().x);
        let y1 = a.max().y.max(b.max().y);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn from_points_empty_is_none() {
        assert!(Rect::from_points(Vec::new()).is_none());
    }

    #[test]
    fn from_points_spans_extremes() {
        let pts = [Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0), Vec2::new(1.0, 1.0)];
        assert_eq!(Rect::from_points(pts).unwrap(), r(-2.0, -1.0, 5.0, 5.0));
    }

    #[test]
    fn single_point_has_zero_size() {
        let rect = Rect::from_points([Vec2::new(7.0, 8.0)]).unwrap();
        assert!(rect.is_empty());
        assert_eq!(rect.center(), Vec2::new(7.0, 8.0));
    }

    // ── union / center ────────────────────────────────────────────────────

    #[test]
    fn union_covers_both() {
        let u = r(0.0, 0.0, 10.0, 10.0).union(r(5.0, -5.0, 10.0, 10.0));
        assert_eq!(u, r(0.0, -5.0, 15.0, 15.0));
    }

    #[test]
    fn around_is_centred() {
        let sq = Rect::around(Vec2::new(10.0, 10.0), 3.0);
        assert_eq!(sq, r(7.0, 7.0, 6.0, 6.0));
        assert_eq!(sq.center(), Vec2::new(10.0, 10.0));
    }
}

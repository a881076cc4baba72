//! Pure path geometry. All points are in surface space unless stated otherwise.

use std::fmt::Write;

use vecterra_engine::coords::{Rect, Vec2};
use vecterra_script::{ArcSweep, PathKind};

use super::PathError;
use crate::pen::normalize_degrees;

fn needed(kind: PathKind) -> usize {
    match kind {
        PathKind::Linear => 1,
        PathKind::Cubic | PathKind::Quadratic => 2,
    }
}

/// Serializes control points as SVG path data for `kind`.
///
/// - linear: `M p0 L p1 L p2 ...`
/// - quadratic: `M p0 T p1 T p2 ...`
/// - cubic: `M p0 S p1, p2 S p3, p4 ...`; with an even point count the last segment
///   reuses the second-to-last point as its control point.
pub fn serialize(kind: PathKind, points: &[Vec2]) -> Result<String, PathError> {
    let n = points.len();
    if n < needed(kind) {
        return Err(PathError::TooFewPoints { kind, needed: needed(kind), got: n });
    }

    let mut d = format!("M {} {}", points[0].x, points[0].y);
    match kind {
        PathKind::Linear => {
            for p in &points[1..] {
                let _ = write!(d, " L {} {}", p.x, p.y);
            }
        }
        PathKind::Quadratic => {
            for p in &points[1..] {
                let _ = write!(d, " T {} {}", p.x, p.y);
            }
        }
        PathKind::Cubic => {
            for (c, p) in cubic_segments(points) {
                let _ = write!(d, " S {} {}, {} {}", c.x, c.y, p.x, p.y);
            }
        }
    }
    Ok(d)
}

/// The explicit `(control, end)` pair of every `S` segment.
fn cubic_segments(points: &[Vec2]) -> Vec<(Vec2, Vec2)> {
    let n = points.len();
    let mut segments: Vec<_> = points[1..].chunks_exact(2).map(|c| (c[0], c[1])).collect();
    if n % 2 == 0 {
        segments.push((points[n - 2], points[n - 1]));
    }
    segments
}

/// Bounds of the full control polygon of the curve [`serialize`] writes, including the
/// control points `S` and `T` reflect implicitly. The curve never leaves it.
pub fn control_bounds(kind: PathKind, points: &[Vec2]) -> Option<Rect> {
    let first = *points.first()?;
    let mut hull = points.to_vec();
    match kind {
        PathKind::Linear => {}
        PathKind::Quadratic => {
            // the first T after M uses the current point as its control
            let mut control = first;
            for &p in &points[1..] {
                hull.push(control);
                control = p * 2.0 - control;
            }
        }
        PathKind::Cubic => {
            let (mut end, mut second) = (first, first);
            for (c, p) in cubic_segments(points) {
                hull.push(end * 2.0 - second);
                (end, second) = (p, c);
            }
        }
    }
    Rect::from_points(hull)
}

/// Heading from the second-to-last to the last user-space point, normalized.
pub fn terminal_heading(user_points: &[Vec2]) -> Option<f64> {
    let [.., prev, last] = user_points else { return None };
    let d = *last - *prev;
    Some(normalize_degrees(d.y.atan2(d.x).to_degrees()))
}

/// Point at `radius` from `center` in direction `degrees` (anticlockwise, y-up).
pub fn project(center: Vec2, radius: f64, degrees: f64) -> Vec2 {
    let dir = Vec2::from_degrees(degrees);
    Vec2::new(center.x + radius * dir.x, center.y - radius * dir.y)
}

/// `0` when the anticlockwise span from `start` to `end` is at most a half turn.
pub fn large_arc_flag(start: f64, end: f64) -> u8 {
    if (end - start).rem_euclid(360.0) <= 180.0 { 0 } else { 1 }
}

/// Screen-anticlockwise (y-down) sweep matching [`project`]'s angle direction.
const ANTICLOCKWISE_SWEEP: u8 = 0;

fn arc_segment(d: &mut String, radius: f64, large: u8, sweep: u8, end: Vec2) {
    let _ = write!(d, " A {radius} {radius} 0 {large} {sweep} {} {}", end.x, end.y);
}

/// Arc of the circle around `center`, running anticlockwise from `start` to `end` degrees.
pub fn arc_data(center: Vec2, radius: f64, start: f64, end: f64) -> String {
    let (start, end) = (normalize_degrees(start), normalize_degrees(end));
    let (a, b) = (project(center, radius, start), project(center, radius, end));
    let mut d = format!("M {} {}", a.x, a.y);
    arc_segment(&mut d, radius, large_arc_flag(start, end), ANTICLOCKWISE_SWEEP, b);
    d
}

/// Arc closed into a pie slice through `center`.
pub fn wedge_data(center: Vec2, radius: f64, start: f64, end: f64) -> String {
    let (start, end) = (normalize_degrees(start), normalize_degrees(end));
    let (a, b) = (project(center, radius, start), project(center, radius, end));
    let mut d = format!("M {} {} L {} {}", center.x, center.y, a.x, a.y);
    arc_segment(&mut d, radius, large_arc_flag(start, end), ANTICLOCKWISE_SWEEP, b);
    let _ = write!(d, " L {} {}", center.x, center.y);
    d
}

/// Arc from `from` to `to` with fixed flags.
pub fn arc_to_data(from: Vec2, to: Vec2, radius: f64, sweep: ArcSweep) -> String {
    let mut d = format!("M {} {}", from.x, from.y);
    arc_segment(&mut d, radius, sweep.large as u8, sweep.clockwise as u8, to);
    d
}

/// Conservative bounds of an arc between two points.
pub fn arc_to_bounds(from: Vec2, to: Vec2, radius: f64) -> Rect {
    let mid = (from + to) / 2.0;
    let half = (to - from).length() / 2.0;
    Rect::around(mid, (2.0 * radius.abs()).max(half))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Vec2> {
        raw.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn linear_data() {
        let d = serialize(PathKind::Linear, &pts(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)])).unwrap();
        assert_eq!(d, "M 0 0 L 10 5 L 20 0");
    }

    #[test]
    fn linear_needs_a_point() {
        assert!(serialize(PathKind::Linear, &[]).is_err());
        assert_eq!(serialize(PathKind::Linear, &pts(&[(1.0, 2.0)])).unwrap(), "M 1 2");
    }

    #[test]
    fn quadratic_one_t_per_point() {
        let d = serialize(PathKind::Quadratic, &pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
        assert_eq!(d, "M 0 0 T 1 1");
        assert_eq!(d.matches('T').count(), 1);
        assert_eq!(
            serialize(PathKind::Quadratic, &pts(&[(0.0, 0.0)])),
            Err(PathError::TooFewPoints { kind: PathKind::Quadratic, needed: 2, got: 1 })
        );
    }

    #[test]
    fn cubic_odd_count_pairs_up() {
        let d = serialize(PathKind::Cubic, &pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)])).unwrap();
        assert_eq!(d, "M 0 0 S 1 1, 2 0 S 3 1, 4 0");
    }

    #[test]
    fn cubic_even_count_reuses_second_to_last() {
        let d = serialize(PathKind::Cubic, &pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)])).unwrap();
        assert_eq!(d, "M 0 0 S 1 1, 2 0 S 2 0, 3 1");
        let d = serialize(PathKind::Cubic, &pts(&[(0.0, 0.0), (5.0, 5.0)])).unwrap();
        assert_eq!(d, "M 0 0 S 0 0, 5 5");
    }

    fn quad_at(p0: Vec2, c: Vec2, p1: Vec2, t: f64) -> Vec2 {
        p0 * ((1.0 - t) * (1.0 - t)) + c * (2.0 * t * (1.0 - t)) + p1 * (t * t)
    }

    fn cubic_at(p0: Vec2, c1: Vec2, c2: Vec2, p1: Vec2, t: f64) -> Vec2 {
        let u = 1.0 - t;
        p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p1 * (t * t * t)
    }

    fn contains(r: Rect, p: Vec2) -> bool {
        let (lo, hi) = (r.min(), r.max());
        p.x >= lo.x - 1e-9 && p.x <= hi.x + 1e-9 && p.y >= lo.y - 1e-9 && p.y <= hi.y + 1e-9
    }

    #[test]
    fn quadratic_bounds_cover_reflected_control() {
        let p = pts(&[(400.0, 300.0), (410.0, 300.0), (410.0, 290.0)]);
        let bounds = control_bounds(PathKind::Quadratic, &p).unwrap();
        // second T reflects (400, 300) through (410, 300)
        assert_eq!(bounds, Rect::new(400.0, 290.0, 20.0, 10.0));
        let c = Vec2::new(420.0, 300.0);
        for i in 0..=20 {
            let point = quad_at(p[1], c, p[2], i as f64 / 20.0);
            assert!(contains(bounds, point), "{point:?} outside {bounds:?}");
        }
    }

    #[test]
    fn cubic_bounds_cover_reflected_controls() {
        let p = pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (20.0, 10.0), (20.0, 0.0)]);
        let bounds = control_bounds(PathKind::Cubic, &p).unwrap();
        // second S reflects (0, 10) through (10, 10)
        let c1 = Vec2::new(20.0, 10.0);
        assert!(contains(bounds, c1));
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let a = cubic_at(p[0], p[0], p[1], p[2], t);
            let b = cubic_at(p[2], c1, p[3], p[4], t);
            assert!(contains(bounds, a) && contains(bounds, b), "{a:?} {b:?} outside {bounds:?}");
        }
        assert_eq!(control_bounds(PathKind::Linear, &[]), None);
    }

    #[test]
    fn heading_between_last_two() {
        assert_eq!(terminal_heading(&pts(&[(0.0, 0.0)])), None);
        let h = terminal_heading(&pts(&[(9.0, 9.0), (0.0, 0.0), (0.0, -3.0)])).unwrap();
        assert!((h - 270.0).abs() < 1e-9);
    }

    #[test]
    fn large_flag_follows_span() {
        assert_eq!(large_arc_flag(0.0, 90.0), 0);
        assert_eq!(large_arc_flag(0.0, 270.0), 1);
        assert_eq!(large_arc_flag(0.0, 180.0), 0);
        assert_eq!(large_arc_flag(270.0, 90.0), 0);
        assert_eq!(large_arc_flag(90.0, 0.0), 1);
    }

    #[test]
    fn arc_and_wedge_data() {
        let c = Vec2::new(100.0, 100.0);
        assert_eq!(arc_data(c, 10.0, 0.0, 180.0), "M 110 100 A 10 10 0 0 0 90 100");
        assert_eq!(
            wedge_data(c, 10.0, 0.0, 180.0),
            "M 100 100 L 110 100 A 10 10 0 0 0 90 100 L 100 100"
        );
    }

    /// Centre of the circle an `A` segment is drawn on (endpoint-to-centre conversion,
    /// circular arcs with no rotation).
    fn arc_centre(data: &str) -> Vec2 {
        let nums: Vec<f64> = data
            .split(|c: char| c.is_ascii_alphabetic() || c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.parse().unwrap())
            .collect();
        let a = data.find('A').unwrap();
        let before = data[..a].split_whitespace().filter(|t| t.parse::<f64>().is_ok()).count();
        let from = Vec2::new(nums[before - 2], nums[before - 1]);
        let [r, _, _, large, sweep, x, y] = nums[before..before + 7] else { unreachable!() };
        let to = Vec2::new(x, y);

        let half = (from - to) / 2.0;
        let k = ((r * r - half.length() * half.length()).max(0.0) / (half.length() * half.length())).sqrt();
        let k = if large == sweep { -k } else { k };
        let offset = Vec2::new(k * half.y, -k * half.x);
        (from + to) / 2.0 + offset
    }

    #[test]
    fn arcs_are_centred_on_the_pen() {
        let c = Vec2::new(400.0, 300.0);
        for (start, end) in [(0.0, 90.0), (0.0, 270.0), (30.0, 100.0), (300.0, 10.0), (45.0, 315.0)] {
            for data in [arc_data(c, 10.0, start, end), wedge_data(c, 10.0, start, end)] {
                let centre = arc_centre(&data);
                assert!((centre - c).length() < 1e-6, "{start}->{end}: {data} centred at {centre:?}");
            }
        }
    }

    #[test]
    fn arc_to_flags() {
        let d = arc_to_data(Vec2::zero(), Vec2::new(4.0, 0.0), 2.0, ArcSweep::BIG_ANTICLOCKWISE);
        assert_eq!(d, "M 0 0 A 2 2 0 1 0 4 0");
    }
}

use vecterra_engine::coords::{Rect, Space, Vec2};
use vecterra_engine::paint::Color;
use vecterra_engine::scene::PathCmd;
use vecterra_script::{ArcSweep, PathKind, PathSource, PathSpec, Point};

use super::geometry;
use super::{PathError, PathFragment};
use crate::pen::Pen;

impl Pen {
    // ── splines ───────────────────────────────────────────────────────────

    /// Computes a spline without emitting it.
    ///
    /// Unless the path is pinned, the pen ends up on the last control point facing along
    /// the final segment, exactly as the emitting variant leaves it.
    pub fn path_fragment(&mut self, kind: PathKind, spec: &PathSpec) -> Result<PathFragment, PathError> {
        let opts = spec.options;
        let mut points = Vec::new();
        if !opts.detach {
            points.push(self.location());
        }
        match &spec.source {
            PathSource::Points(user) => {
                let space = self.coords();
                points.extend(user.iter().map(|&p| space.to_surface(p.into())));
            }
            PathSource::Actions(program) => {
                points.extend(self.generate_points(program, Space::Surface));
            }
        }
        if opts.close {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }

        let data = geometry::serialize(kind, &points)?;
        let heading = if opts.pin {
            None
        } else {
            let space = self.coords();
            let user: Vec<Vec2> = points.iter().map(|&p| space.to_user(p)).collect();
            geometry::terminal_heading(&user)
        };
        // serialize rejects empty point lists
        let end = points[points.len() - 1];

        if !opts.pin {
            self.set_location(end);
            if let Some(h) = heading {
                self.set_heading(h);
            }
        }
        let bounds = geometry::control_bounds(kind, &points);
        Ok(PathFragment { data, end, heading, bounds })
    }

    /// Emits a spline. Usage errors are logged and nothing is drawn.
    pub fn path(&mut self, kind: PathKind, spec: &PathSpec) -> Option<PathCmd> {
        match self.path_fragment(kind, spec) {
            Ok(fragment) => {
                let fill = if spec.options.fill { self.fill_color() } else { Color::transparent() };
                Some(self.emit_fragment(fragment, fill))
            }
            Err(e) => {
                log::warn!("{e}; nothing drawn");
                None
            }
        }
    }

    pub fn path_linear(&mut self, spec: &PathSpec) -> Option<PathCmd> {
        self.path(PathKind::Linear, spec)
    }

    pub fn path_cubic(&mut self, spec: &PathSpec) -> Option<PathCmd> {
        self.path(PathKind::Cubic, spec)
    }

    pub fn path_quadratic(&mut self, spec: &PathSpec) -> Option<PathCmd> {
        self.path(PathKind::Quadratic, spec)
    }

    // ── arcs ──────────────────────────────────────────────────────────────

    /// Arc around the pen. The pen does not move.
    pub fn arc_fragment(&self, radius: f64, start: f64, end: f64) -> PathFragment {
        PathFragment {
            data: geometry::arc_data(self.location(), radius, start, end),
            end: self.location(),
            heading: None,
            bounds: Some(Rect::around(self.location(), radius)),
        }
    }

    pub fn arc(&mut self, radius: f64, start: f64, end: f64) -> PathCmd {
        let fragment = self.arc_fragment(radius, start, end);
        self.emit_fragment(fragment, self.fill_color())
    }

    /// Pie slice around the pen. The pen does not move.
    pub fn wedge_fragment(&self, radius: f64, start: f64, end: f64) -> PathFragment {
        PathFragment {
            data: geometry::wedge_data(self.location(), radius, start, end),
            end: self.location(),
            heading: None,
            bounds: Some(Rect::around(self.location(), radius)),
        }
    }

    pub fn wedge(&mut self, radius: f64, start: f64, end: f64) -> PathCmd {
        let fragment = self.wedge_fragment(radius, start, end);
        self.emit_fragment(fragment, self.fill_color())
    }

    /// Arc from the pen to the user-space point `end`. The pen moves to `end`; its
    /// heading is unchanged.
    pub fn arc_to_fragment(&mut self, end: Point, radius: f64, sweep: ArcSweep) -> PathFragment {
        let from = self.location();
        let to = self.coords().to_surface(end.into());
        self.set_location(to);
        PathFragment {
            data: geometry::arc_to_data(from, to, radius, sweep),
            end: to,
            heading: None,
            bounds: Some(geometry::arc_to_bounds(from, to, radius)),
        }
    }

    pub fn arc_to(&mut self, end: Point, radius: f64, sweep: ArcSweep) -> PathCmd {
        let fragment = self.arc_to_fragment(end, radius, sweep);
        self.emit_fragment(fragment, self.fill_color())
    }

    pub fn arc_big_clockwise_to(&mut self, end: Point, radius: f64) -> PathCmd {
        self.arc_to(end, radius, ArcSweep::BIG_CLOCKWISE)
    }

    pub fn arc_big_anticlockwise_to(&mut self, end: Point, radius: f64) -> PathCmd {
        self.arc_to(end, radius, ArcSweep::BIG_ANTICLOCKWISE)
    }

    pub fn arc_small_clockwise_to(&mut self, end: Point, radius: f64) -> PathCmd {
        self.arc_to(end, radius, ArcSweep::SMALL_CLOCKWISE)
    }

    pub fn arc_small_anticlockwise_to(&mut self, end: Point, radius: f64) -> PathCmd {
        self.arc_to(end, radius, ArcSweep::SMALL_ANTICLOCKWISE)
    }

    /// Emits raw path data unchanged, filled with the fill color.
    pub fn path_external(&mut self, data: impl Into<String>) -> PathCmd {
        let cmd = PathCmd::new(data, self.style().line_stroke(), self.fill_color(), None);
        self.emit(cmd.clone());
        cmd
    }

    pub(crate) fn emit_fragment(&mut self, fragment: PathFragment, fill: Color) -> PathCmd {
        let cmd = PathCmd::new(fragment.data, self.style().line_stroke(), fill, fragment.bounds);
        self.emit(cmd.clone());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use vecterra_engine::coords::Vec2;
    use vecterra_engine::paint::Color;
    use vecterra_engine::surface::Placement;
    use vecterra_script::{parse_program, ArcSweep, PathKind, PathOptions, PathSpec};

    use crate::test_support::{approx, screen};

    #[test]
    fn linear_path_from_pen_with_heading() {
        let (screen, svg) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let cmd = pen.path_linear(&PathSpec::points([(10.0, 0.0), (10.0, 10.0)])).unwrap();
        assert_eq!(cmd.data, "M 400 300 L 410 300 L 410 290");
        assert_eq!(cmd.fill, Color::transparent());
        assert_eq!(pen.position(), Vec2::new(10.0, 10.0));
        assert!((pen.heading() - 90.0).abs() < 1e-9);
        assert_eq!(svg.borrow().primitive_count(), 1);
    }

    #[test]
    fn detach_skips_pen_position() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let spec = PathSpec::points([(0.0, 10.0), (10.0, 10.0)])
            .with_options(PathOptions { detach: true, ..PathOptions::default() });
        let cmd = pen.path_linear(&spec).unwrap();
        assert_eq!(cmd.data, "M 400 290 L 410 290");
    }

    #[test]
    fn pin_keeps_position_and_heading() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        pen.set_heading(45.0);
        let spec = PathSpec::points([(30.0, 40.0)])
            .with_options(PathOptions { pin: true, fill: true, ..PathOptions::default() });
        let cmd = pen.path_quadratic(&spec).unwrap();
        assert_eq!(cmd.fill, pen.fill_color());
        assert_eq!(pen.position(), Vec2::zero());
        assert_eq!(pen.heading(), 45.0);
    }

    #[test]
    fn close_returns_to_start() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let spec = PathSpec::points([(10.0, 0.0), (10.0, 10.0)])
            .with_options(PathOptions { close: true, ..PathOptions::default() });
        let cmd = pen.path_linear(&spec).unwrap();
        assert_eq!(cmd.data, "M 400 300 L 410 300 L 410 290 L 400 300");
        assert_eq!(pen.position(), Vec2::zero());
        // from (10, 10) back to (0, 0)
        assert!((pen.heading() - 225.0).abs() < 1e-9);
    }

    #[test]
    fn quadratic_with_one_point_is_a_no_op() {
        let (screen, svg) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let spec = PathSpec::points([(5.0, 5.0)])
            .with_options(PathOptions { detach: true, ..PathOptions::default() });
        assert!(pen.path_quadratic(&spec).is_none());
        assert_eq!(svg.borrow().primitive_count(), 0);
        assert_eq!(pen.position(), Vec2::zero());
    }

    #[test]
    fn quadratic_with_two_points_has_one_t() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let spec = PathSpec::points([(5.0, 5.0), (6.0, 6.0)])
            .with_options(PathOptions { detach: true, ..PathOptions::default() });
        let cmd = pen.path_quadratic(&spec).unwrap();
        assert_eq!(cmd.data.matches('T').count(), 1);
    }

    #[test]
    fn cubic_from_actions() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let spec = PathSpec::actions(parse_program("f 10 r 90 f 10").unwrap());
        let cmd = pen.path_cubic(&spec).unwrap();
        assert_eq!(cmd.data, "M 400 300 S 410 300, 410 310");
        assert!(approx(pen.position(), Vec2::new(10.0, -10.0)));
        assert!((pen.heading() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn data_only_fragment_commits_but_does_not_emit() {
        let (screen, svg) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let fragment = pen.path_fragment(PathKind::Linear, &PathSpec::points([(3.0, 4.0)])).unwrap();
        assert_eq!(fragment.end, Vec2::new(403.0, 296.0));
        assert_eq!(pen.position(), Vec2::new(3.0, 4.0));
        assert_eq!(svg.borrow().primitive_count(), 0);
    }

    #[test]
    fn arc_flags_and_fixed_pen() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let quarter = pen.arc(10.0, 0.0, 90.0);
        assert!(quarter.data.contains(" A 10 10 0 0 0 "), "{}", quarter.data);
        let three_quarters = pen.arc(10.0, 0.0, 270.0);
        assert!(three_quarters.data.contains(" A 10 10 0 1 0 "), "{}", three_quarters.data);
        assert_eq!(pen.position(), Vec2::zero());
        assert_eq!(quarter.fill, pen.fill_color());
    }

    #[test]
    fn negative_angles_normalize() {
        let (screen, _) = screen();
        let pen = screen.add_pen(Placement::Top);
        assert_eq!(pen.arc_fragment(5.0, -90.0, 0.0).data, pen.arc_fragment(5.0, 270.0, 360.0).data);
    }

    #[test]
    fn wedge_closes_through_pen() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let cmd = pen.wedge(10.0, 0.0, 180.0);
        assert!(cmd.data.starts_with("M 400 300 L 410 300 A"));
        assert!(cmd.data.ends_with("L 400 300"));
    }

    #[test]
    fn arc_to_moves_pen() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        pen.set_heading(10.0);
        let cmd = pen.arc_small_clockwise_to((20.0, 0.0), 10.0);
        assert_eq!(cmd.data, "M 400 300 A 10 10 0 0 1 420 300");
        assert_eq!(pen.position(), Vec2::new(20.0, 0.0));
        assert_eq!(pen.heading(), 10.0);
        let cmd = pen.arc_to((0.0, 0.0), 10.0, ArcSweep::BIG_ANTICLOCKWISE);
        assert!(cmd.data.contains(" 0 1 0 "));
    }

    #[test]
    fn external_data_passes_through() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let cmd = pen.path_external("M 0 0 L 1 1 Z");
        assert_eq!(cmd.data, "M 0 0 L 1 1 Z");
        assert_eq!(cmd.bounds, None);
    }
}

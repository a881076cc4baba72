use vecterra_engine::coords::Rect;
use vecterra_engine::paint::Color;
use vecterra_engine::scene::PathCmd;
use vecterra_script::MetaAction;

use super::{PathError, PathFragment};
use crate::pen::Pen;

impl Pen {
    /// Data for one meta-path step. Moves return `Ok(None)`.
    fn meta_fragment(&mut self, step: &MetaAction) -> Result<Option<PathFragment>, PathError> {
        let fragment = match step {
            MetaAction::Path(kind, spec) => self.path_fragment(*kind, spec)?,
            MetaAction::ArcTo { end, radius, sweep } => self.arc_to_fragment(*end, *radius, *sweep),
            MetaAction::Arc { radius, start, end } => self.arc_fragment(*radius, *start, *end),
            MetaAction::Wedge { radius, start, end } => self.wedge_fragment(*radius, *start, *end),
            MetaAction::External(data) => PathFragment {
                data: data.clone(),
                end: self.location(),
                heading: None,
                bounds: None,
            },
            MetaAction::Move(action) => {
                self.apply(action);
                return Ok(None);
            }
        };
        Ok(Some(fragment))
    }

    /// Stitches several steps into one transparent-fill path.
    ///
    /// The pen is lifted for the duration, so moves only reposition. Steps that fail are
    /// skipped with a warning. Position and heading are left where the last step put them;
    /// only the pen-down flag is restored.
    pub fn meta_path(&mut self, steps: &[MetaAction]) -> PathCmd {
        let was_down = self.is_pen_down();
        self.pen_up();

        let mut parts: Vec<String> = Vec::with_capacity(steps.len());
        let mut bounds: Option<Rect> = None;
        for step in steps {
            match self.meta_fragment(step) {
                Ok(Some(fragment)) => {
                    if let Some(b) = fragment.bounds {
                        bounds = Some(bounds.map_or(b, |acc| acc.union(b)));
                    }
                    parts.push(fragment.data);
                }
                Ok(None) => {}
                Err(e) => log::warn!("meta-path step skipped: {e}"),
            }
        }

        let cmd = self.emit_fragment(
            PathFragment { data: parts.join(" "), end: self.location(), heading: None, bounds },
            Color::transparent(),
        );
        if was_down {
            self.pen_down();
        }
        cmd
    }

    /// Runs one meta-path step on its own: paths, arcs and external data are emitted
    /// directly, moves are applied live.
    pub fn draw(&mut self, step: &MetaAction) -> Option<PathCmd> {
        match step {
            MetaAction::Path(kind, spec) => self.path(*kind, spec),
            MetaAction::ArcTo { end, radius, sweep } => Some(self.arc_to(*end, *radius, *sweep)),
            MetaAction::Arc { radius, start, end } => Some(self.arc(*radius, *start, *end)),
            MetaAction::Wedge { radius, start, end } => Some(self.wedge(*radius, *start, *end)),
            MetaAction::External(data) => Some(self.path_external(data.clone())),
            MetaAction::Move(action) => {
                self.apply(action);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vecterra_engine::coords::Vec2;
    use vecterra_engine::paint::Color;
    use vecterra_engine::surface::Placement;
    use vecterra_script::{parse_meta, Action, MetaAction, PathKind, PathSpec};

    use crate::test_support::screen;

    #[test]
    fn fragments_join_with_spaces() {
        let (screen, svg) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let steps = parse_meta(
            r#"pathLinear { points: (10, 0) }
               f 10
               pathExternal "Z""#,
        )
        .unwrap();
        let cmd = pen.meta_path(&steps);
        assert_eq!(cmd.data, "M 400 300 L 410 300 Z");
        assert_eq!(cmd.fill, Color::transparent());
        // moves reposition without drawing
        assert_eq!(pen.position(), Vec2::new(20.0, 0.0));
        assert_eq!(svg.borrow().primitive_count(), 1);
    }

    #[test]
    fn restores_pen_down() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        pen.meta_path(&[MetaAction::Move(Action::Forward(5.0))]);
        assert!(pen.is_pen_down());

        pen.pen_up();
        pen.meta_path(&[MetaAction::Arc { radius: 1.0, start: 0.0, end: 90.0 }]);
        assert!(!pen.is_pen_down());
    }

    #[test]
    fn failing_steps_are_skipped() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let bad = MetaAction::Path(
            PathKind::Cubic,
            PathSpec::points([(1.0, 1.0)]).with_options(vecterra_script::PathOptions {
                detach: true,
                ..Default::default()
            }),
        );
        let cmd = pen.meta_path(&[bad, MetaAction::Arc { radius: 10.0, start: 0.0, end: 180.0 }]);
        assert_eq!(cmd.data, "M 410 300 A 10 10 0 0 0 390 300");
    }

    #[test]
    fn arc_to_continues_from_previous_end() {
        let (screen, _) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        let steps = parse_meta("pathLinear { points: (10, 0) } arcSmallClockwiseTo (20, 0) 5").unwrap();
        let cmd = pen.meta_path(&steps);
        assert_eq!(cmd.data, "M 400 300 L 410 300 M 410 300 A 5 5 0 0 1 420 300");
        assert_eq!(pen.position(), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn draw_emits_single_steps() {
        let (screen, svg) = screen();
        let mut pen = screen.add_pen(Placement::Top);
        assert!(pen.draw(&MetaAction::Move(Action::Forward(1.0))).is_none());
        assert!(pen.draw(&MetaAction::Wedge { radius: 2.0, start: 0.0, end: 45.0 }).is_some());
        assert_eq!(svg.borrow().primitive_count(), 2);
    }
}

//! Pen-anchored affine transforms.
//!
//! Each operation builds a delta matrix `Δ` and composes it around the pen's rendered
//! location `p` (the pen location mapped through the current transform):
//! `T(p) · Δ · T(−p) · current`.

use vecterra_engine::coords::{Affine, Rect};
use vecterra_engine::surface::Surface;
use vecterra_script::TransformOp;

use crate::pen::Pen;

impl Pen {
    fn compose_anchored(&mut self, delta: Affine) {
        let current = self.transform();
        let p = current.apply(self.location());
        let next = Affine::translate(p.x, p.y) * delta * Affine::translate(-p.x, -p.y) * current;
        self.set_transform(next);
    }

    pub fn clear_transforms(&mut self) {
        self.set_transform(Affine::IDENTITY);
    }

    /// Shifts right by `dx` surface units.
    pub fn move_over(&mut self, dx: f64) {
        self.compose_anchored(Affine::translate(dx, 0.0));
    }

    /// Shifts up by `dy` surface units.
    pub fn move_up(&mut self, dy: f64) {
        self.compose_anchored(Affine::translate(0.0, -dy));
    }

    /// Rotates anticlockwise by `degrees` around the pen.
    pub fn rotate(&mut self, degrees: f64) {
        self.compose_anchored(Affine::rotate(-degrees.to_radians()));
    }

    /// Uniform scale by `1 + percent / 100`.
    pub fn zoom_in(&mut self, percent: f64) {
        let k = 1.0 + percent / 100.0;
        self.compose_anchored(Affine::scale(k, k));
    }

    pub fn stretch_x(&mut self, percent: f64) {
        self.compose_anchored(Affine::scale(1.0 + percent / 100.0, 1.0));
    }

    pub fn stretch_y(&mut self, percent: f64) {
        self.compose_anchored(Affine::scale(1.0, 1.0 + percent / 100.0));
    }

    /// Mirrors left-right through the pen.
    pub fn flip_x(&mut self) {
        self.compose_anchored(Affine::scale(-1.0, 1.0));
    }

    /// Mirrors top-bottom through the pen.
    pub fn flip_y(&mut self) {
        self.compose_anchored(Affine::scale(1.0, -1.0));
    }

    pub fn shear_x(&mut self, percent: f64) {
        self.compose_anchored(Affine::shear_x(percent / 100.0));
    }

    pub fn shear_y(&mut self, percent: f64) {
        self.compose_anchored(Affine::shear_y(percent / 100.0));
    }

    /// Bounds of everything this pen has drawn (committed and pending), after its
    /// transform. Surface space.
    pub fn rendered_bounds(&self) -> Option<Rect> {
        let committed = self.screen().surface().content_bounds(self.layer());
        let pending = self.pending_list().bounds();
        let raw = match (committed, pending) {
            (Some(a), Some(b)) => a.union(b),
            (a, b) => a.or(b)?,
        };
        Some(self.transform().transform_rect(raw))
    }

    /// Scales and then translates the pen's drawing so it fits centred inside `target`
    /// (surface space). The limiting dimension wins.
    pub fn fit_into(&mut self, target: Rect) {
        let Some(current) = self.rendered_bounds() else {
            log::warn!("fit_into: pen {:?} has drawn nothing", self.layer());
            return;
        };
        if current.size.x <= 0.0 && current.size.y <= 0.0 {
            log::warn!("fit_into: pen {:?} drawing has no extent", self.layer());
            return;
        }

        let ratio = (target.size.x / current.size.x).min(target.size.y / current.size.y);
        self.zoom_in(ratio * 100.0 - 100.0);

        let Some(current) = self.rendered_bounds() else { return };
        let (goal, now) = (target.center(), current.center());
        self.move_over(goal.x - now.x);
        self.move_up(now.y - goal.y);
    }

    /// Applies one scripted transform step.
    pub fn apply_transform(&mut self, op: TransformOp) {
        match op {
            TransformOp::Clear => self.clear_transforms(),
            TransformOp::MoveOver(dx) => self.move_over(dx),
            TransformOp::MoveUp(dy) => self.move_up(dy),
            TransformOp::Rotate(deg) => self.rotate(deg),
            TransformOp::ZoomIn(p) => self.zoom_in(p),
            TransformOp::StretchX(p) => self.stretch_x(p),
            TransformOp::StretchY(p) => self.stretch_y(p),
            TransformOp::FlipX => self.flip_x(),
            TransformOp::FlipY => self.flip_y(),
            TransformOp::ShearX(p) => self.shear_x(p),
            TransformOp::ShearY(p) => self.shear_y(p),
            TransformOp::FitInto { x, y, width, height } => self.fit_into(Rect::new(x, y, width, height)),
        }
    }
}

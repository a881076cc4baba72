//! The pen state machine.
//!
//! A [`Pen`] owns its position (surface space), heading, pen-up/down flag, render buffer,
//! style and layer transform. Every user-facing coordinate goes through the pen's
//! [`CoordSpace`]; nothing else flips the y axis.

mod emit;
mod interp;
mod style;

pub use style::PenStyle;

use vecterra_engine::coords::{Affine, CoordSpace, Space, Vec2};
use vecterra_engine::paint::Color;
use vecterra_engine::scene::{DrawList, LineCmd, Linecap, Primitive};
use vecterra_engine::surface::{LayerId, Placement, Surface};

use crate::screen::Screen;

/// Normalizes an angle in degrees into `[0, 360)`. NaN and infinities pass through as NaN.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let a = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// A stateful cursor drawing into one layer of a [`Screen`].
pub struct Pen {
    screen: Screen,
    layer: LayerId,
    space: CoordSpace,
    location: Vec2,
    heading: f64,
    pen_down: bool,
    render_on: bool,
    pending: DrawList,
    transform_staged: bool,
    transform: Affine,
    style: PenStyle,
}

impl Pen {
    pub(crate) fn attach(screen: Screen, placement: Placement) -> Self {
        let layer = screen.surface_mut().create_layer(placement);
        let space = CoordSpace::for_viewport(screen.viewport());
        Self {
            screen,
            layer,
            space,
            location: space.origin(),
            heading: 0.0,
            pen_down: true,
            render_on: true,
            pending: DrawList::new(),
            transform_staged: false,
            transform: Affine::IDENTITY,
            style: PenStyle::default(),
        }
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// The pen's layer id on its screen, e.g. `vecterra_group_1`.
    pub fn layer_name(&self) -> Option<String> {
        self.screen.surface().layer_name(self.layer).map(str::to_string)
    }

    #[inline]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_id(&self) -> String {
        self.screen.id()
    }

    // ── position queries ──────────────────────────────────────────────────

    #[inline]
    pub fn coords(&self) -> CoordSpace {
        self.space
    }

    /// Surface-space position of the user-space origin.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.space.origin()
    }

    /// Current position in user space.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.space.to_user(self.location)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position().x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position().y
    }

    /// Current position in surface space.
    #[inline]
    pub fn location(&self) -> Vec2 {
        self.location
    }

    #[inline]
    pub fn location_in(&self, space: Space) -> Vec2 {
        self.space.express(self.location, space)
    }

    /// Heading in degrees, `[0, 360)`, anticlockwise from +X.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub(crate) fn set_location(&mut self, surface: Vec2) {
        self.location = surface;
    }

    // ── pen up / down ─────────────────────────────────────────────────────

    #[inline]
    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    #[inline]
    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    #[inline]
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    // ── movement ──────────────────────────────────────────────────────────

    /// Moves to the user-space point `(x, y)`, drawing a line when the pen is down.
    pub fn goto(&mut self, x: f64, y: f64) -> Option<LineCmd> {
        self.goto_surface(self.space.to_surface(Vec2::new(x, y)))
    }

    fn goto_surface(&mut self, target: Vec2) -> Option<LineCmd> {
        if !self.pen_down {
            self.location = target;
            return None;
        }
        let line = LineCmd::new(self.location, target, self.style.line_stroke());
        self.emit(line.clone());
        self.location = target;
        Some(line)
    }

    pub fn set_x(&mut self, x: f64) -> Option<LineCmd> {
        self.goto(x, self.y())
    }

    pub fn set_y(&mut self, y: f64) -> Option<LineCmd> {
        self.goto(self.x(), y)
    }

    /// Back to the user-space origin, facing east.
    pub fn home(&mut self) -> Option<LineCmd> {
        let line = self.goto(0.0, 0.0);
        self.heading = 0.0;
        line
    }

    /// Moves `distance` along the heading. Negative distances move backwards.
    pub fn forward(&mut self, distance: f64) -> Option<LineCmd> {
        let dir = Vec2::from_degrees(self.heading);
        let end = Vec2::new(
            self.location.x + distance * dir.x,
            self.location.y - distance * dir.y,
        );
        self.goto_surface(end)
    }

    pub fn backward(&mut self, distance: f64) -> Option<LineCmd> {
        self.forward(-distance)
    }

    /// Turns to `angle`, then moves forward by `magnitude`.
    pub fn vector(&mut self, magnitude: f64, angle: f64) -> Option<LineCmd> {
        self.set_heading(angle);
        self.forward(magnitude)
    }

    /// Moves by a user-space displacement.
    pub fn vector_dx_dy(&mut self, dx: f64, dy: f64) -> Option<LineCmd> {
        let p = self.position();
        self.goto(p.x + dx, p.y + dy)
    }

    // ── heading ───────────────────────────────────────────────────────────

    /// Clockwise turn.
    pub fn right(&mut self, degrees: f64) {
        self.heading = normalize_degrees(self.heading - degrees);
    }

    /// Anticlockwise turn.
    pub fn left(&mut self, degrees: f64) {
        self.heading = normalize_degrees(self.heading + degrees);
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize_degrees(degrees);
    }

    /// Turns toward the user-space point `(x, y)`.
    ///
    /// Returns the raw `atan2` angle in `(-180, 180]`; the stored heading is normalized.
    pub fn face(&mut self, x: f64, y: f64) -> f64 {
        let p = self.position();
        let angle = (y - p.y).atan2(x - p.x).to_degrees();
        self.heading = normalize_degrees(angle);
        angle
    }

    // ── style ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &PenStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PenStyle) {
        self.style = style;
    }

    #[inline]
    pub fn pen_color(&self) -> Color {
        self.style.stroke
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.style.stroke = color;
    }

    #[inline]
    pub fn fill_color(&self) -> Color {
        self.style.fill
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.style.fill = color;
    }

    #[inline]
    pub fn pen_size(&self) -> f64 {
        self.style.width
    }

    pub fn set_pen_size(&mut self, size: f64) {
        self.style.width = size;
    }

    #[inline]
    pub fn text_size(&self) -> f64 {
        self.style.text_size
    }

    pub fn set_text_size(&mut self, size: f64) {
        self.style.text_size = size;
    }

    #[inline]
    pub fn font(&self) -> &str {
        &self.style.font
    }

    pub fn set_font(&mut self, family: impl Into<String>) {
        self.style.font = family.into();
    }

    #[inline]
    pub fn linecap(&self) -> Linecap {
        self.style.linecap
    }

    pub fn linecap_round(&mut self) {
        self.style.linecap = Linecap::Round;
    }

    pub fn linecap_square(&mut self) {
        self.style.linecap = Linecap::Square;
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Sends `primitive` to the layer, or to the pending buffer while rendering is off.
    pub(crate) fn emit(&mut self, primitive: impl Into<Primitive>) {
        let primitive = primitive.into();
        if self.render_on {
            self.screen.surface_mut().append(self.layer, primitive);
        } else {
            self.pending.push(primitive);
        }
    }

    #[inline]
    pub fn is_render_on(&self) -> bool {
        self.render_on
    }

    /// Primitives waiting for the next flush, in emission order.
    #[inline]
    pub fn pending(&self) -> &[Primitive] {
        self.pending.items()
    }

    pub(crate) fn pending_list(&self) -> &DrawList {
        &self.pending
    }

    /// Starts buffering primitives and transform changes.
    pub fn render_off(&mut self) {
        self.render_on = false;
    }

    /// Resumes direct rendering and flushes everything buffered so far.
    pub fn render_on(&mut self) {
        self.render_on = true;
        self.render_update();
    }

    /// Flushes the pending buffer and any staged transform without changing the render flag.
    pub fn render_update(&mut self) {
        let mut surface = self.screen.surface_mut();
        let count = self.pending.len();
        for primitive in self.pending.drain() {
            surface.append(self.layer, primitive);
        }
        if self.transform_staged {
            self.transform_staged = false;
            surface.set_layer_transform(self.layer, self.transform);
        }
        log::debug!("pen {:?}: flushed {count} primitives", self.layer);
    }

    /// Removes everything this pen has drawn on its layer.
    pub fn clear(&mut self) {
        self.screen.surface_mut().clear_layer(self.layer);
    }

    // ── transform state ───────────────────────────────────────────────────

    #[inline]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Replaces the layer transform. Staged until the next flush while rendering is off.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        if self.render_on {
            self.screen.surface_mut().set_layer_transform(self.layer, transform);
        } else {
            self.transform_staged = true;
        }
    }

    /// Runs `f` with the pen lifted, then restores position, heading and pen state.
    pub(crate) fn dry_run<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let (location, heading, pen_down) = (self.location, self.heading, self.pen_down);
        self.pen_down = false;
        let out = f(self);
        self.location = location;
        self.heading = heading;
        self.pen_down = pen_down;
        out
    }
}

impl std::fmt::Debug for Pen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pen")
            .field("layer", &self.layer)
            .field("location", &self.location)
            .field("heading", &self.heading)
            .field("pen_down", &self.pen_down)
            .field("render_on", &self.render_on)
            .finish()
    }
}

//! Typed program representation.
//!
//! Three nested levels:
//! - [`Action`]: movement opcodes understood by the action interpreter
//! - [`MetaAction`]: path-building steps of a composite (meta) path
//! - [`Command`]: one statement of a full drawing script

/// A user-space `(x, y)` pair.
pub type Point = (f64, f64);

// ── Action ────────────────────────────────────────────────────────────────

/// One movement opcode with its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Forward(f64),
    Right(f64),
    Left(f64),
    Goto { x: f64, y: f64 },
    /// Set the heading to `angle`, then move forward by `magnitude`.
    Vector { magnitude: f64, angle: f64 },
    /// Relative displacement in user space.
    VectorDxDy { dx: f64, dy: f64 },
    Face { x: f64, y: f64 },
    SetAngle(f64),
    Backward(f64),
    Home,
    SetX(f64),
    SetY(f64),
}

impl Action {
    pub fn opcode(&self) -> Opcode {
        match self {
            Action::Forward(_) => Opcode::Forward,
            Action::Right(_) => Opcode::Right,
            Action::Left(_) => Opcode::Left,
            Action::Goto { .. } => Opcode::Goto,
            Action::Vector { .. } => Opcode::Vector,
            Action::VectorDxDy { .. } => Opcode::VectorDxDy,
            Action::Face { .. } => Opcode::Face,
            Action::SetAngle(_) => Opcode::SetAngle,
            Action::Backward(_) => Opcode::Backward,
            Action::Home => Opcode::Home,
            Action::SetX(_) => Opcode::SetX,
            Action::SetY(_) => Opcode::SetY,
        }
    }

    /// `false` for the pure rotations, which leave the position untouched.
    pub fn records_point(&self) -> bool {
        !matches!(
            self,
            Action::Right(_) | Action::Left(_) | Action::Face { .. } | Action::SetAngle(_)
        )
    }
}

/// Opcode table: long name, short alias and operand count.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Opcode {
    Forward,
    Right,
    Left,
    Goto,
    Vector,
    VectorDxDy,
    Face,
    SetAngle,
    Backward,
    Home,
    SetX,
    SetY,
}

impl Opcode {
    pub const ALL: [Opcode; 12] = [
        Opcode::Forward,
        Opcode::Right,
        Opcode::Left,
        Opcode::Goto,
        Opcode::Vector,
        Opcode::VectorDxDy,
        Opcode::Face,
        Opcode::SetAngle,
        Opcode::Backward,
        Opcode::Home,
        Opcode::SetX,
        Opcode::SetY,
    ];

    pub fn long_name(self) -> &'static str {
        match self {
            Opcode::Forward => "forward",
            Opcode::Right => "right",
            Opcode::Left => "left",
            Opcode::Goto => "goto",
            Opcode::Vector => "vector",
            Opcode::VectorDxDy => "vectorDxDy",
            Opcode::Face => "face",
            Opcode::SetAngle => "setAngle",
            Opcode::Backward => "backward",
            Opcode::Home => "home",
            Opcode::SetX => "setX",
            Opcode::SetY => "setY",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Opcode::Forward => "f",
            Opcode::Right => "r",
            Opcode::Left => "l",
            Opcode::Goto => "g",
            Opcode::Vector => "v",
            Opcode::VectorDxDy => "dxdy",
            Opcode::Face => "fa",
            Opcode::SetAngle => "a",
            Opcode::Backward => "b",
            Opcode::Home => "h",
            Opcode::SetX => "x",
            Opcode::SetY => "y",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Opcode::Home => 0,
            Opcode::Goto | Opcode::Vector | Opcode::VectorDxDy | Opcode::Face => 2,
            _ => 1,
        }
    }

    /// Resolves either alias.
    pub fn from_token(token: &str) -> Option<Opcode> {
        Self::ALL
            .into_iter()
            .find(|op| op.long_name() == token || op.short_name() == token)
    }

    /// Builds the action from exactly [`arity`](Self::arity) operands.
    pub fn build(self, args: &[f64]) -> Option<Action> {
        if args.len() != self.arity() {
            return None;
        }
        let a = |i: usize| args[i];
        Some(match self {
            Opcode::Forward => Action::Forward(a(0)),
            Opcode::Right => Action::Right(a(0)),
            Opcode::Left => Action::Left(a(0)),
            Opcode::Goto => Action::Goto { x: a(0), y: a(1) },
            Opcode::Vector => Action::Vector { magnitude: a(0), angle: a(1) },
            Opcode::VectorDxDy => Action::VectorDxDy { dx: a(0), dy: a(1) },
            Opcode::Face => Action::Face { x: a(0), y: a(1) },
            Opcode::SetAngle => Action::SetAngle(a(0)),
            Opcode::Backward => Action::Backward(a(0)),
            Opcode::Home => Action::Home,
            Opcode::SetX => Action::SetX(a(0)),
            Opcode::SetY => Action::SetY(a(0)),
        })
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────

/// Spline flavour of a multi-point path.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PathKind {
    /// Straight segments (`L`).
    Linear,
    /// Smooth cubic segments (`S`).
    Cubic,
    /// Smooth quadratic segments (`T`).
    Quadratic,
}

impl PathKind {
    pub fn opcode(self) -> &'static str {
        match self {
            PathKind::Linear => "pathLinear",
            PathKind::Cubic => "pathCubic",
            PathKind::Quadratic => "pathQuadratic",
        }
    }

    pub fn from_token(token: &str) -> Option<PathKind> {
        [PathKind::Linear, PathKind::Cubic, PathKind::Quadratic]
            .into_iter()
            .find(|k| k.opcode() == token)
    }
}

/// Path option flags.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct PathOptions {
    /// Append the first control point again as a closing vertex.
    pub close: bool,
    /// Do not start at the pen's current position.
    pub detach: bool,
    /// Leave the pen's position and heading untouched.
    pub pin: bool,
    /// Fill with the pen's fill color instead of transparent.
    pub fill: bool,
}

impl PathOptions {
    /// Sets the flag called `name`. Returns `false` for an unknown name.
    pub fn set(&mut self, name: &str) -> bool {
        match name {
            "close" => self.close = true,
            "detach" => self.detach = true,
            "pin" => self.pin = true,
            "fill" => self.fill = true,
            _ => return false,
        }
        true
    }

    /// Builds options from flag names, ignoring unknown ones.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut opts = Self::default();
        for name in names {
            opts.set(name);
        }
        opts
    }
}

/// Where a path's control points come from.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSource {
    /// Explicit user-space points.
    Points(Vec<Point>),
    /// Points visited by running an action program.
    Actions(Vec<Action>),
}

/// Path descriptor: control-point source plus options.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    pub source: PathSource,
    pub options: PathOptions,
}

impl PathSpec {
    pub fn points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            source: PathSource::Points(points.into_iter().collect()),
            options: PathOptions::default(),
        }
    }

    pub fn actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            source: PathSource::Actions(actions.into_iter().collect()),
            options: PathOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PathOptions) -> Self {
        self.options = options;
        self
    }
}

/// Flag pair of an arc drawn to an explicit end point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ArcSweep {
    pub large: bool,
    pub clockwise: bool,
}

impl ArcSweep {
    pub const BIG_CLOCKWISE: ArcSweep = ArcSweep { large: true, clockwise: true };
    pub const BIG_ANTICLOCKWISE: ArcSweep = ArcSweep { large: true, clockwise: false };
    pub const SMALL_CLOCKWISE: ArcSweep = ArcSweep { large: false, clockwise: true };
    pub const SMALL_ANTICLOCKWISE: ArcSweep = ArcSweep { large: false, clockwise: false };

    pub fn opcode(self) -> &'static str {
        match (self.large, self.clockwise) {
            (true, true) => "arcBigClockwiseTo",
            (true, false) => "arcBigAnticlockwiseTo",
            (false, true) => "arcSmallClockwiseTo",
            (false, false) => "arcSmallAnticlockwiseTo",
        }
    }

    pub fn from_token(token: &str) -> Option<ArcSweep> {
        [
            Self::BIG_CLOCKWISE,
            Self::BIG_ANTICLOCKWISE,
            Self::SMALL_CLOCKWISE,
            Self::SMALL_ANTICLOCKWISE,
        ]
        .into_iter()
        .find(|s| s.opcode() == token)
    }
}

/// One step of a composite path.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaAction {
    Path(PathKind, PathSpec),
    ArcTo { end: Point, radius: f64, sweep: ArcSweep },
    Arc { radius: f64, start: f64, end: f64 },
    Wedge { radius: f64, start: f64, end: f64 },
    /// Raw path data spliced in unchanged.
    External(String),
    /// Non-drawing repositioning between fragments.
    Move(Action),
}

// ── Commands ──────────────────────────────────────────────────────────────

/// Anchor of a rectangle relative to the pen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum RectAlign {
    #[default]
    TopLeft,
    Center,
    TopRight,
}

impl RectAlign {
    pub fn from_token(token: &str) -> Option<RectAlign> {
        match token {
            "topLeft" => Some(RectAlign::TopLeft),
            "center" => Some(RectAlign::Center),
            "topRight" => Some(RectAlign::TopRight),
            _ => None,
        }
    }
}

/// Where the pen goes after placing an inline text block.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextJump {
    /// Right by the measured width.
    #[default]
    After,
    /// Down by the measured height.
    Under,
}

impl TextJump {
    pub fn from_token(token: &str) -> Option<TextJump> {
        match token {
            "after" => Some(TextJump::After),
            "under" => Some(TextJump::Under),
            _ => None,
        }
    }
}

/// Pen-anchored transform step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformOp {
    Clear,
    MoveOver(f64),
    MoveUp(f64),
    /// Degrees, anticlockwise.
    Rotate(f64),
    /// Percent.
    ZoomIn(f64),
    StretchX(f64),
    StretchY(f64),
    FlipX,
    FlipY,
    ShearX(f64),
    ShearY(f64),
    /// Bounds in surface units.
    FitInto { x: f64, y: f64, width: f64, height: f64 },
}

/// One statement of a drawing script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Movement; draws a line when the pen is down.
    Move(Action),
    PenUp,
    PenDown,
    PenColor(String),
    FillColor(String),
    PenSize(f64),
    TextSize(f64),
    Font(String),
    LinecapRound,
    LinecapSquare,
    Dot(f64),
    SquareDot(f64),
    Circle(f64),
    Rect { width: f64, height: f64, align: RectAlign },
    Text { text: String, jump: TextJump },
    TextBox { width: f64, text: String },
    Image { width: f64, height: f64, href: String },
    /// A single path, arc, wedge or external fragment, emitted on its own.
    Draw(MetaAction),
    MetaPath(Vec<MetaAction>),
    RenderOff,
    RenderOn,
    RenderUpdate,
    Transform(TransformOp),
    Clear,
    Background(String),
}

use vecterra_engine::coords::{Space, Vec2};
use vecterra_engine::scene::LineCmd;
use vecterra_script::Action;

use super::Pen;

impl Pen {
    /// Executes one action live. Draws when the pen is down.
    pub fn apply(&mut self, action: &Action) -> Option<LineCmd> {
        match *action {
            Action::Forward(d) => self.forward(d),
            Action::Backward(d) => self.backward(d),
            Action::Right(a) => {
                self.right(a);
                None
            }
            Action::Left(a) => {
                self.left(a);
                None
            }
            Action::Goto { x, y } => self.goto(x, y),
            Action::Vector { magnitude, angle } => self.vector(magnitude, angle),
            Action::VectorDxDy { dx, dy } => self.vector_dx_dy(dx, dy),
            Action::Face { x, y } => {
                self.face(x, y);
                None
            }
            Action::SetAngle(a) => {
                self.set_heading(a);
                None
            }
            Action::Home => self.home(),
            Action::SetX(x) => self.set_x(x),
            Action::SetY(y) => self.set_y(y),
        }
    }

    /// Executes a whole program live.
    pub fn run_program(&mut self, program: &[Action]) {
        for action in program {
            self.apply(action);
        }
    }

    /// Where `program` would leave the pen. Nothing is drawn and the pen state is restored.
    pub fn generate_endpoint(&mut self, program: &[Action], space: Space) -> Vec2 {
        self.dry_run(|pen| {
            pen.run_program(program);
            pen.location_in(space)
        })
    }

    /// Every position `program` visits, one per movement opcode. Pure rotations record
    /// nothing. Nothing is drawn and the pen state is restored.
    pub fn generate_points(&mut self, program: &[Action], space: Space) -> Vec<Vec2> {
        self.dry_run(|pen| {
            let mut points = Vec::with_capacity(program.len());
            for action in program {
                pen.apply(action);
                if action.records_point() {
                    points.push(pen.location_in(space));
                }
            }
            points
        })
    }
}

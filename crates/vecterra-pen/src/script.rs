//! Running parsed scripts against a pen.

use vecterra_engine::paint::Color;
use vecterra_script::Command;

use crate::pen::Pen;

fn color(what: &str, src: &str) -> Option<Color> {
    match src.parse::<Color>() {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("{what}: {e}; keeping previous color");
            None
        }
    }
}

impl Pen {
    /// Executes every command in order.
    pub fn run(&mut self, script: &[Command]) {
        for command in script {
            self.run_command(command);
        }
    }

    pub fn run_command(&mut self, command: &Command) {
        match command {
            Command::Move(action) => {
                self.apply(action);
            }
            Command::PenUp => self.pen_up(),
            Command::PenDown => self.pen_down(),
            Command::PenColor(src) => {
                if let Some(c) = color("penColor", src) {
                    self.set_pen_color(c);
                }
            }
            Command::FillColor(src) => {
                if let Some(c) = color("fillColor", src) {
                    self.set_fill_color(c);
                }
            }
            Command::PenSize(size) => self.set_pen_size(*size),
            Command::TextSize(size) => self.set_text_size(*size),
            Command::Font(family) => self.set_font(family.clone()),
            Command::LinecapRound => self.linecap_round(),
            Command::LinecapSquare => self.linecap_square(),
            Command::Dot(size) => {
                self.dot(*size);
            }
            Command::SquareDot(size) => {
                self.square_dot(*size);
            }
            Command::Circle(size) => {
                self.circle(*size);
            }
            Command::Rect { width, height, align } => {
                self.rect(*width, *height, *align);
            }
            Command::Text { text, jump } => {
                self.text(text.clone(), *jump);
            }
            Command::TextBox { width, text } => {
                self.text_box(*width, text.clone());
            }
            Command::Image { width, height, href } => {
                self.image(*width, *height, href.clone());
            }
            Command::Draw(step) => {
                self.draw(step);
            }
            Command::MetaPath(steps) => {
                self.meta_path(steps);
            }
            Command::RenderOff => self.render_off(),
            Command::RenderOn => self.render_on(),
            Command::RenderUpdate => self.render_update(),
            Command::Transform(op) => self.apply_transform(*op),
            Command::Clear => self.clear(),
            Command::Background(src) => {
                if let Some(c) = color("background", src) {
                    self.screen().set_background(c);
                }
            }
        }
    }
}

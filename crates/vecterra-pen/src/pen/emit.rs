use vecterra_engine::coords::{Rect, Vec2};
use vecterra_engine::scene::{CircleCmd, ImageCmd, RectCmd, Stroke, TextCmd};
use vecterra_engine::surface::Surface;
use vecterra_script::{RectAlign, TextJump};

use super::Pen;

impl Pen {
    /// Filled circle of radius `size` in the pen color.
    pub fn dot(&mut self, size: f64) -> CircleCmd {
        let color = self.style.stroke;
        let cmd = CircleCmd::new(self.location, size, Stroke::color(color), color);
        self.emit(cmd.clone());
        cmd
    }

    /// Filled square of side `2 * size` centred on the pen.
    pub fn square_dot(&mut self, size: f64) -> RectCmd {
        let color = self.style.stroke;
        let rect = Rect::new(self.location.x - size, self.location.y - size, size * 2.0, size * 2.0);
        let cmd = RectCmd::new(rect, Stroke::color(color), color);
        self.emit(cmd.clone());
        cmd
    }

    pub fn rect(&mut self, width: f64, height: f64, align: RectAlign) -> RectCmd {
        let Vec2 { x, y } = self.location;
        let (x, y) = match align {
            RectAlign::TopLeft => (x, y),
            RectAlign::Center => (x - width / 2.0, y - height / 2.0),
            RectAlign::TopRight => (x - width, y),
        };
        let cmd = RectCmd::new(
            Rect::new(x, y, width, height),
            Stroke::color(self.style.stroke),
            self.style.fill,
        );
        self.emit(cmd.clone());
        cmd
    }

    /// Outlined circle of radius `size`, filled with the fill color.
    pub fn circle(&mut self, size: f64) -> CircleCmd {
        let stroke = Stroke {
            color: self.style.stroke,
            width: Some(self.style.width),
            linecap: None,
        };
        let cmd = CircleCmd::new(self.location, size, stroke, self.style.fill);
        self.emit(cmd.clone());
        cmd
    }

    /// Inline text block at the pen. Afterwards the pen jumps past the measured block
    /// without drawing.
    pub fn text(&mut self, text: impl Into<String>, jump: TextJump) -> TextCmd {
        let cmd = self.measured_text(text.into(), None);
        self.emit(cmd.clone());

        let was_down = self.pen_down;
        self.pen_up();
        match jump {
            TextJump::After => self.set_x(self.x() + cmd.extent.x),
            TextJump::Under => self.set_y(self.y() - cmd.extent.y),
        };
        self.pen_down = was_down;
        cmd
    }

    /// Text wrapped to `width`. The pen does not move.
    pub fn text_box(&mut self, width: f64, text: impl Into<String>) -> TextCmd {
        let cmd = self.measured_text(text.into(), Some(width));
        self.emit(cmd.clone());
        cmd
    }

    pub fn image(&mut self, width: f64, height: f64, href: impl Into<String>) -> ImageCmd {
        let cmd = ImageCmd::new(self.location, width, height, href);
        self.emit(cmd.clone());
        cmd
    }

    fn measured_text(&self, text: String, max_width: Option<f64>) -> TextCmd {
        let mut cmd = TextCmd::new(
            text,
            self.style.font.clone(),
            self.style.text_size,
            self.style.stroke,
            self.location,
            max_width,
        );
        cmd.extent = self.screen.surface().measure_text(&cmd);
        cmd
    }
}

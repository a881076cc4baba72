//! SVG element serialization for [`Primitive`].
//!
//! Attribute names and inline styles match what an SVG user agent expects; numbers are
//! written with `f64`'s shortest round-trip formatting.

use std::fmt;

use super::{Primitive, Stroke};
use crate::scene::{CircleCmd, ImageCmd, LineCmd, PathCmd, RectCmd, TextCmd};

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Escapes `&`, `<`, `>`, `"` and `'` for attribute values and text nodes.
pub fn escape_xml(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for ch in src.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn write_stroke(f: &mut fmt::Formatter<'_>, stroke: &Stroke) -> fmt::Result {
    write!(f, r#" stroke="{}""#, stroke.color)?;
    if let Some(width) = stroke.width {
        write!(f, r#" stroke-width="{}""#, width)?;
    }
    Ok(())
}

fn write_linecap(f: &mut fmt::Formatter<'_>, stroke: &Stroke) -> fmt::Result {
    if let Some(cap) = stroke.linecap {
        write!(f, r#" stroke-linecap="{}""#, cap)?;
    }
    Ok(())
}

impl fmt::Display for LineCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            self.from.x, self.from.y, self.to.x, self.to.y
        )?;
        write_stroke(f, &self.stroke)?;
        write_linecap(f, &self.stroke)?;
        f.write_str("/>")
    }
}

impl fmt::Display for CircleCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<circle cx="{}" cy="{}" r="{}""#, self.center.x, self.center.y, self.radius)?;
        write_stroke(f, &self.stroke)?;
        write!(f, r#" fill="{}"/>"#, self.fill)
    }
}

impl fmt::Display for RectCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            self.rect.origin.x, self.rect.origin.y, self.rect.size.x, self.rect.size.y
        )?;
        write_stroke(f, &self.stroke)?;
        write!(f, r#" fill="{}"/>"#, self.fill)
    }
}

impl fmt::Display for TextCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let font = escape_xml(&self.font);
        match self.max_width {
            None => {
                write!(
                    f,
                    r#"<foreignObject x="{}" y="{}" width="{}" height="{}">"#,
                    self.origin.x, self.origin.y, self.extent.x, self.extent.y
                )?;
                write!(
                    f,
                    r#"<p xmlns="{XHTML_NS}" style="position:relative;display:inline;font-family:{};color:{};font-size:{}px;height:100%;white-space:pre;background-color:rgba(0,0,0,0)">"#,
                    font, self.color, self.size
                )?;
            }
            Some(width) => {
                write!(
                    f,
                    r#"<foreignObject x="{}" y="{}" width="{}" height="100000">"#,
                    self.origin.x, self.origin.y, width
                )?;
                write!(
                    f,
                    r#"<p xmlns="{XHTML_NS}" style="font-family:{};color:{};font-size:{}px;height:100%;white-space:pre-wrap;margin-top:0px;background-color:rgba(0,0,0,0)">"#,
                    font, self.color, self.size
                )?;
            }
        }
        write!(f, "{}</p></foreignObject>", escape_xml(&self.text))
    }
}

impl fmt::Display for ImageCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<image x="{}" y="{}" height="{}" width="{}" href="{}"/>"#,
            self.origin.x,
            self.origin.y,
            self.height,
            self.width,
            escape_xml(&self.href)
        )
    }
}

impl fmt::Display for PathCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<path d="{}""#, escape_xml(&self.data))?;
        write_stroke(f, &self.stroke)?;
        write!(f, r#" fill="{}""#, self.fill)?;
        write_linecap(f, &self.stroke)?;
        f.write_str("/>")
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Line(c) => fmt::Display::fmt(c, f),
            Primitive::Circle(c) => fmt::Display::fmt(c, f),
            Primitive::Rect(c) => fmt::Display::fmt(c, f),
            Primitive::Text(c) => fmt::Display::fmt(c, f),
            Primitive::Image(c) => fmt::Display::fmt(c, f),
            Primitive::Path(c) => fmt::Display::fmt(c, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::Linecap;

    #[test]
    fn line_element() {
        let line = LineCmd::new(
            Vec2::new(400.0, 300.0),
            Vec2::new(500.0, 300.0),
            Stroke::new(Color::white(), 2.0, Linecap::Square),
        );
        assert_eq!(
            line.to_string(),
            r#"<line x1="400" y1="300" x2="500" y2="300" stroke="rgba(255,255,255,1)" stroke-width="2" stroke-linecap="square"/>"#
        );
    }

    #[test]
    fn dot_has_no_stroke_width() {
        let dot = CircleCmd::new(Vec2::new(1.0, 2.0), 3.0, Stroke::color(Color::black()), Color::black());
        assert_eq!(
            dot.to_string(),
            r#"<circle cx="1" cy="2" r="3" stroke="rgba(0,0,0,1)" fill="rgba(0,0,0,1)"/>"#
        );
    }

    #[test]
    fn rect_element() {
        let rect = RectCmd::new(Rect::new(0.0, 1.5, 10.0, 20.0), Stroke::color(Color::white()), Color::black());
        assert!(rect.to_string().starts_with(r#"<rect x="0" y="1.5" width="10" height="20""#));
    }

    #[test]
    fn path_escapes_data() {
        let path = PathCmd::new("M 0 0 L 1 1", Stroke::new(Color::white(), 1.0, Linecap::Round), Color::transparent(), None);
        assert_eq!(
            path.to_string(),
            r#"<path d="M 0 0 L 1 1" stroke="rgba(255,255,255,1)" stroke-width="1" fill="rgba(1,1,1,0)" stroke-linecap="round"/>"#
        );
    }

    #[test]
    fn text_is_escaped() {
        let mut text = TextCmd::new("a < b & c", "monospace", 30.0, Color::white(), Vec2::zero(), None);
        text.extent = Vec2::new(10.0, 36.0);
        let svg = text.to_string();
        assert!(svg.contains("a &lt; b &amp; c</p>"));
        assert!(svg.contains(r#"width="10" height="36""#));
        assert!(svg.contains("white-space:pre;"));
    }

    #[test]
    fn wrapped_text_uses_fixed_width() {
        let text = TextCmd::new("hello", "serif", 12.0, Color::white(), Vec2::zero(), Some(80.0));
        let svg = text.to_string();
        assert!(svg.contains(r#"width="80" height="100000""#));
        assert!(svg.contains("white-space:pre-wrap"));
    }

    #[test]
    fn escape_handles_quotes() {
        assert_eq!(escape_xml(r#"say "hi" 'x'"#), "say &quot;hi&quot; &apos;x&apos;");
    }
}

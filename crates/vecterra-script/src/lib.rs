//! Lexer, parser, and AST for **Vecterra** action programs and drawing scripts.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! editors and linters without pulling in the engine.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Action`, `Opcode`, `PathSpec`, `MetaAction`, `Command` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_program`, `parse_meta`, `parse_script` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use vecterra_script::{parse_program, parse_script, Action, Command};
//!
//! let program = parse_program("f 10 r 90 forward 10").unwrap();
//! assert_eq!(program[1], Action::Right(90.0));
//!
//! let script = parse_script(r#"
//!     penColor "red"
//!     pathCubic { points: (0, 0) (10, 10) (20, 0)  options: close fill }
//! "#).unwrap();
//! assert_eq!(script[0], Command::PenColor("red".into()));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{
    Action, ArcSweep, Command, MetaAction, Opcode, PathKind, PathOptions, PathSource, PathSpec,
    Point, RectAlign, TextJump, TransformOp,
};
pub use error::ParseError;
pub use parser::{parse_meta, parse_program, parse_script};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Vec<Command> { parse_script(src).unwrap() }
    fn err(src: &str) { parse_script(src).unwrap_err(); }

    #[test] fn short_and_long_opcodes() {
        assert_eq!(
            parse_program("f 10 r 90 forward 10 dxdy 1 -2 h").unwrap(),
            vec![
                Action::Forward(10.0),
                Action::Right(90.0),
                Action::Forward(10.0),
                Action::VectorDxDy { dx: 1.0, dy: -2.0 },
                Action::Home,
            ]
        );
    }
    #[test] fn empty_program() { assert!(parse_program("  # nothing\n").unwrap().is_empty()); }
    #[test] fn unknown_opcode_is_rejected() {
        let e = parse_program("f 10 jump 3").unwrap_err();
        assert_eq!((e.line, e.col), (1, 6));
        assert!(e.message.contains("jump"));
    }
    #[test] fn missing_operand() { parse_program("goto 1").unwrap_err(); }

    #[test] fn path_with_points_and_options() {
        let cmds = ok("pathQuadratic { points: (0,0) (10 10)  options: pin detach }");
        let Command::Draw(MetaAction::Path(kind, spec)) = &cmds[0] else { panic!("{cmds:?}") };
        assert_eq!(*kind, PathKind::Quadratic);
        assert_eq!(spec.source, PathSource::Points(vec![(0.0, 0.0), (10.0, 10.0)]));
        assert!(spec.options.pin && spec.options.detach && !spec.options.close);
    }
    #[test] fn path_with_actions() {
        let cmds = ok("pathLinear { actions: f 10 r 90 f 10  options: close }");
        let Command::Draw(MetaAction::Path(_, spec)) = &cmds[0] else { panic!("{cmds:?}") };
        assert_eq!(
            spec.source,
            PathSource::Actions(vec![Action::Forward(10.0), Action::Right(90.0), Action::Forward(10.0)])
        );
        assert!(spec.options.close);
    }
    #[test] fn path_needs_a_source() { err("pathCubic { options: fill }"); }
    #[test] fn path_rejects_both_sources() { err("pathCubic { points: (0,0) actions: f 1 }"); }
    #[test] fn path_rejects_unknown_option() { err("pathCubic { points: (0,0) options: wobble }"); }
    #[test] fn unterminated_path_block() { err("pathLinear { points: (0,0)"); }

    #[test] fn arcs_and_wedges() {
        assert_eq!(
            ok("arc 10 0 90 wedge 5 90 180 arcSmallClockwiseTo (3, 4) 5"),
            vec![
                Command::Draw(MetaAction::Arc { radius: 10.0, start: 0.0, end: 90.0 }),
                Command::Draw(MetaAction::Wedge { radius: 5.0, start: 90.0, end: 180.0 }),
                Command::Draw(MetaAction::ArcTo {
                    end: (3.0, 4.0),
                    radius: 5.0,
                    sweep: ArcSweep::SMALL_CLOCKWISE,
                }),
            ]
        );
    }

    #[test] fn meta_path_block() {
        let cmds = ok(r#"metaPath {
            pathLinear { points: (0,0) (10,0) }
            f 20
            arc 5 0 180
            pathExternal "M 0 0 L 1 1"
        }"#);
        let Command::MetaPath(steps) = &cmds[0] else { panic!("{cmds:?}") };
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1], MetaAction::Move(Action::Forward(20.0)));
        assert_eq!(steps[3], MetaAction::External("M 0 0 L 1 1".into()));
    }
    #[test] fn parse_meta_entry_point() {
        let steps = parse_meta("g 1 2 wedge 3 0 45").unwrap();
        assert_eq!(steps[0], MetaAction::Move(Action::Goto { x: 1.0, y: 2.0 }));
        parse_meta("f 1 }").unwrap_err();
    }

    #[test] fn primitives_with_optional_modifiers() {
        assert_eq!(
            ok(r#"rect 10 20 center rect 1 2 text "hi" under textBox 50 "wrapped""#),
            vec![
                Command::Rect { width: 10.0, height: 20.0, align: RectAlign::Center },
                Command::Rect { width: 1.0, height: 2.0, align: RectAlign::TopLeft },
                Command::Text { text: "hi".into(), jump: TextJump::Under },
                Command::TextBox { width: 50.0, text: "wrapped".into() },
            ]
        );
    }
    #[test] fn style_and_render_commands() {
        assert_eq!(
            ok(r##"pu penSize 3 fillColor "#ff000080" linecapSquare renderOff f 1 renderOn pd"##),
            vec![
                Command::PenUp,
                Command::PenSize(3.0),
                Command::FillColor("#ff000080".into()),
                Command::LinecapSquare,
                Command::RenderOff,
                Command::Move(Action::Forward(1.0)),
                Command::RenderOn,
                Command::PenDown,
            ]
        );
    }
    #[test] fn transforms() {
        assert_eq!(
            ok("rotate 45 zoomIn -50 flipX fitInto 0 0 100 50 clearTransforms"),
            vec![
                Command::Transform(TransformOp::Rotate(45.0)),
                Command::Transform(TransformOp::ZoomIn(-50.0)),
                Command::Transform(TransformOp::FlipX),
                Command::Transform(TransformOp::FitInto { x: 0.0, y: 0.0, width: 100.0, height: 50.0 }),
                Command::Transform(TransformOp::Clear),
            ]
        );
    }
    #[test] fn unknown_command() { err("wobble 3"); }
    #[test] fn unclosed_string() { err(r#"text "oops"#); }
}

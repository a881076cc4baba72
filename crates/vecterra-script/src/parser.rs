use crate::ast::{
    Action, ArcSweep, Command, MetaAction, Opcode, PathKind, PathOptions, PathSource, PathSpec,
    Point, RectAlign, TextJump, TransformOp,
};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    /// Error positioned at the token just consumed.
    fn err_prev(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self
            .tokens
            .get(self.pos.saturating_sub(1))
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1));
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.advance() {
            Token::Ident(s) => Ok(s),
            tok => Err(self.err_prev(format!("expected identifier, got {:?}", tok))),
        }
    }

    fn expect_str(&mut self) -> Result<String, ParseError> {
        match self.advance() {
            Token::Str(s) => Ok(s),
            tok => Err(self.err_prev(format!("expected string, got {:?}", tok))),
        }
    }

    fn expect_number(&mut self) -> Result<f64, ParseError> {
        match self.advance() {
            Token::Number(n) => Ok(n),
            tok => Err(self.err_prev(format!("expected number, got {:?}", tok))),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        let got = self.advance();
        if &got == expected {
            Ok(())
        } else {
            Err(self.err_prev(format!("expected {:?}, got {:?}", expected, got)))
        }
    }

    fn numbers<const N: usize>(&mut self) -> Result<[f64; N], ParseError> {
        let mut out = [0.0; N];
        for slot in &mut out {
            *slot = self.expect_number()?;
        }
        Ok(out)
    }

    /// `(x, y)`; the comma is optional.
    fn point(&mut self) -> Result<Point, ParseError> {
        self.expect_token(&Token::LParen)?;
        let x = self.expect_number()?;
        if self.peek() == &Token::Comma {
            self.advance();
        }
        let y = self.expect_number()?;
        self.expect_token(&Token::RParen)?;
        Ok((x, y))
    }

    /// Consumes the next identifier if `lookup` accepts it.
    fn optional_ident<T>(&mut self, lookup: impl Fn(&str) -> Option<T>) -> Option<T> {
        let found = match self.peek() {
            Token::Ident(s) => lookup(s),
            _ => None,
        };
        if found.is_some() {
            self.advance();
        }
        found
    }

    // ── Actions ───────────────────────────────────────────────────────────

    pub fn parse_program(&mut self) -> Result<Vec<Action>, ParseError> {
        let mut actions = Vec::new();
        while self.peek() != &Token::Eof {
            let name = self.expect_ident()?;
            match Opcode::from_token(&name) {
                Some(op) => actions.push(self.action(op)?),
                None => return Err(self.err_prev(format!("unknown opcode `{}`", name))),
            }
        }
        Ok(actions)
    }

    fn action(&mut self, op: Opcode) -> Result<Action, ParseError> {
        let mut args = Vec::with_capacity(op.arity());
        for _ in 0..op.arity() {
            args.push(self.expect_number()?);
        }
        op.build(&args)
            .ok_or_else(|| self.err_prev(format!("wrong operand count for `{}`", op.long_name())))
    }

    /// Movement opcodes up to the next non-opcode token.
    fn action_run(&mut self) -> Result<Vec<Action>, ParseError> {
        let mut actions = Vec::new();
        while let Token::Ident(s) = self.peek() {
            let Some(op) = Opcode::from_token(s) else { break };
            self.advance();
            actions.push(self.action(op)?);
        }
        Ok(actions)
    }

    // ── Paths ─────────────────────────────────────────────────────────────

    /// `{ points: (x, y)* | actions: op*  [options: flag*] }`
    fn path_block(&mut self) -> Result<PathSpec, ParseError> {
        self.expect_token(&Token::LBrace)?;
        let mut source: Option<PathSource> = None;
        let mut options = PathOptions::default();

        while self.peek() != &Token::RBrace {
            if self.peek() == &Token::Eof {
                return Err(self.err("unterminated path block"));
            }
            let key = self.expect_ident()?;
            self.expect_token(&Token::Colon)?;
            match key.as_str() {
                "points" | "actions" if source.is_some() => {
                    return Err(self.err_prev("path block takes either `points` or `actions`, not both"));
                }
                "points" => {
                    let mut points = Vec::new();
                    while self.peek() == &Token::LParen {
                        points.push(self.point()?);
                    }
                    source = Some(PathSource::Points(points));
                }
                "actions" => source = Some(PathSource::Actions(self.action_run()?)),
                "options" => {
                    while let Token::Ident(name) = self.peek() {
                        if self.peek_ahead(1) == &Token::Colon {
                            break;
                        }
                        let name = name.clone();
                        self.advance();
                        if !options.set(&name) {
                            return Err(self.err_prev(format!("unknown path option `{}`", name)));
                        }
                    }
                }
                other => return Err(self.err_prev(format!("unknown path key `{}`", other))),
            }
        }
        self.advance(); // `}`

        let source = source.ok_or_else(|| self.err_prev("path block needs `points:` or `actions:`"))?;
        Ok(PathSpec { source, options })
    }

    /// Parses a meta-path step whose leading identifier was already consumed.
    fn meta_action(&mut self, name: &str) -> Result<Option<MetaAction>, ParseError> {
        if let Some(kind) = PathKind::from_token(name) {
            return Ok(Some(MetaAction::Path(kind, self.path_block()?)));
        }
        if let Some(sweep) = ArcSweep::from_token(name) {
            let end = self.point()?;
            let radius = self.expect_number()?;
            return Ok(Some(MetaAction::ArcTo { end, radius, sweep }));
        }
        let step = match name {
            "arc" => {
                let [radius, start, end] = self.numbers::<3>()?;
                MetaAction::Arc { radius, start, end }
            }
            "wedge" => {
                let [radius, start, end] = self.numbers::<3>()?;
                MetaAction::Wedge { radius, start, end }
            }
            "pathExternal" => MetaAction::External(self.expect_str()?),
            _ => match Opcode::from_token(name) {
                Some(op) => MetaAction::Move(self.action(op)?),
                None => return Ok(None),
            },
        };
        Ok(Some(step))
    }

    pub fn parse_meta(&mut self) -> Result<Vec<MetaAction>, ParseError> {
        let mut steps = Vec::new();
        while !matches!(self.peek(), Token::Eof | Token::RBrace) {
            let name = self.expect_ident()?;
            match self.meta_action(&name)? {
                Some(step) => steps.push(step),
                None => return Err(self.err_prev(format!("unknown meta-path step `{}`", name))),
            }
        }
        Ok(steps)
    }

    // ── Scripts ───────────────────────────────────────────────────────────

    pub fn parse_script(&mut self) -> Result<Vec<Command>, ParseError> {
        let mut commands = Vec::new();
        while self.peek() != &Token::Eof {
            commands.push(self.command()?);
        }
        Ok(commands)
    }

    fn command(&mut self) -> Result<Command, ParseError> {
        let name = self.expect_ident()?;
        let cmd = match name.as_str() {
            "penUp" | "pu" => Command::PenUp,
            "penDown" | "pd" => Command::PenDown,
            "penColor" => Command::PenColor(self.expect_str()?),
            "fillColor" => Command::FillColor(self.expect_str()?),
            "penSize" => Command::PenSize(self.expect_number()?),
            "textSize" => Command::TextSize(self.expect_number()?),
            "font" => Command::Font(self.expect_str()?),
            "linecapRound" => Command::LinecapRound,
            "linecapSquare" => Command::LinecapSquare,

            "dot" => Command::Dot(self.expect_number()?),
            "squareDot" => Command::SquareDot(self.expect_number()?),
            "circle" => Command::Circle(self.expect_number()?),
            "rect" => {
                let [width, height] = self.numbers::<2>()?;
                let align = self.optional_ident(RectAlign::from_token).unwrap_or_default();
                Command::Rect { width, height, align }
            }
            "text" => {
                let text = self.expect_str()?;
                let jump = self.optional_ident(TextJump::from_token).unwrap_or_default();
                Command::Text { text, jump }
            }
            "textBox" => {
                let width = self.expect_number()?;
                Command::TextBox { width, text: self.expect_str()? }
            }
            "image" => {
                let [width, height] = self.numbers::<2>()?;
                Command::Image { width, height, href: self.expect_str()? }
            }

            "metaPath" => {
                self.expect_token(&Token::LBrace)?;
                let steps = self.parse_meta()?;
                self.expect_token(&Token::RBrace)?;
                Command::MetaPath(steps)
            }

            "renderOff" => Command::RenderOff,
            "renderOn" => Command::RenderOn,
            "renderUpdate" => Command::RenderUpdate,

            "clearTransforms" => Command::Transform(TransformOp::Clear),
            "moveOver" => Command::Transform(TransformOp::MoveOver(self.expect_number()?)),
            "moveUp" => Command::Transform(TransformOp::MoveUp(self.expect_number()?)),
            "rotate" => Command::Transform(TransformOp::Rotate(self.expect_number()?)),
            "zoomIn" => Command::Transform(TransformOp::ZoomIn(self.expect_number()?)),
            "stretchX" => Command::Transform(TransformOp::StretchX(self.expect_number()?)),
            "stretchY" => Command::Transform(TransformOp::StretchY(self.expect_number()?)),
            "flipX" => Command::Transform(TransformOp::FlipX),
            "flipY" => Command::Transform(TransformOp::FlipY),
            "shearX" => Command::Transform(TransformOp::ShearX(self.expect_number()?)),
            "shearY" => Command::Transform(TransformOp::ShearY(self.expect_number()?)),
            "fitInto" => {
                let [x, y, width, height] = self.numbers::<4>()?;
                Command::Transform(TransformOp::FitInto { x, y, width, height })
            }

            "clear" => Command::Clear,
            "background" => Command::Background(self.expect_str()?),

            other => match self.meta_action(other)? {
                Some(MetaAction::Move(action)) => Command::Move(action),
                Some(step) => Command::Draw(step),
                None => return Err(self.err_prev(format!("unknown command `{}`", other))),
            },
        };
        Ok(cmd)
    }
}

// ── Entry points ──────────────────────────────────────────────────────────

fn parser_for(src: &str) -> Result<Parser, ParseError> {
    Ok(Parser::new(Lexer::new(src).tokenize()?))
}

/// Parses a whitespace-separated action program such as `f 10 r 90 f 10`.
pub fn parse_program(src: &str) -> Result<Vec<Action>, ParseError> {
    parser_for(src)?.parse_program()
}

/// Parses the body of a meta-path: path blocks, arcs, wedges, external data and moves.
pub fn parse_meta(src: &str) -> Result<Vec<MetaAction>, ParseError> {
    let mut parser = parser_for(src)?;
    let steps = parser.parse_meta()?;
    if parser.peek() != &Token::Eof {
        return Err(parser.err("unexpected `}`"));
    }
    Ok(steps)
}

/// Parses a full drawing script.
pub fn parse_script(src: &str) -> Result<Vec<Command>, ParseError> {
    parser_for(src)?.parse_script()
}

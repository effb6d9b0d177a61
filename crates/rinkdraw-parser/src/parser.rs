//! Notation parser.
//!
//! Turns drill notation into an ordered list of [`Instruction`]s. The
//! notation is line oriented: statements end at a newline or `;`, and every
//! statement is parsed on its own, so one bad line never hides the rest.
//!
//! ```text
//! P1 20,50                      player 1 at (20,50)
//! X3 60,30                      opponent 3
//! PK 20,50 -> 100,50 :pass      a pass, the `PK` head is only a tag
//! P1 -> 120,40 -> 150,50        P1 skates; the head is the first endpoint
//! 150,50 -> 185,50 :shot        anonymous path
//! R 150,30 -> 185,70 :slot      shaded rectangle
//! A 170,50 -> 180,50            shaded circle (center, rim point)
//! @zone offensive               shade a whole zone
//! # anything else is a comment
//! ```
//!
//! The public entry point is [`parse_instructions`].

use std::str::FromStr;

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::float,
    combinator::{alt, eof, opt, peek, preceded, repeat, separated_pair},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, take_till, take_while},
};

use rinkdraw_core::{
    geometry::Point,
    rink::Zone,
    scene::{EntityKind, PathStyle},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    instruction::{Endpoint, Instruction, RegionKind},
    span::{Span, Spanned},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Characters that end a statement.
const TERMINATORS: [char; 2] = ['\n', ';'];

const POSITION_HELP: &str = "write positions as two numbers separated by a comma, e.g. `P1 20,50`";

/// What a leading sigil introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sigil {
    Entity(EntityKind),
    Region(RegionKind),
}

/// A recognized statement head such as `P7` or `PK`.
#[derive(Debug, Clone, Copy)]
struct Head<'a> {
    sigil: Sigil,
    /// The whole head as written, e.g. `P7`.
    token: &'a str,
    /// Digits after the sigil, possibly empty.
    digits: &'a str,
}

/// Everything after a head: optional first endpoint, arrow-separated
/// endpoints and an optional style suffix.
#[derive(Debug)]
struct Body<'a> {
    first: Option<Spanned<Endpoint>>,
    arrows: Vec<Spanned<Endpoint>>,
    style: Option<Spanned<&'a str>>,
    span: Span,
}

/// A statement before semantic checks.
#[derive(Debug)]
enum Statement<'a> {
    Sigil {
        head: Spanned<Head<'a>>,
        body: Body<'a>,
    },
    /// A path that starts with a coordinate pair instead of a head.
    Anonymous {
        first: Spanned<Endpoint>,
        body: Body<'a>,
    },
    /// A statement that started like an instruction but did not finish as one.
    Malformed {
        subject: Spanned<&'a str>,
        rest: Span,
        expected: &'static str,
    },
    Directive {
        keyword: Spanned<&'a str>,
        argument: Spanned<&'a str>,
    },
    Comment(&'a str),
}

/// Parse spaces and tabs (and stray carriage returns)
fn ws0<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(0.., [' ', '\t', '\r']).parse_next(input)
}

fn ws1<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., [' ', '\t', '\r']).parse_next(input)
}

/// Succeeds without consuming at the end of a statement
fn end_of_statement(input: &mut Input<'_>) -> IResult<()> {
    peek(alt((eof.void(), one_of(TERMINATORS).void()))).parse_next(input)
}

/// Consume the rest of the current statement
fn rest_of_statement<'a>(input: &mut Input<'a>) -> IResult<Spanned<&'a str>> {
    take_till(0.., TERMINATORS)
        .with_span()
        .map(|(text, range)| Spanned::new(text, Span::new(range)))
        .parse_next(input)
}

fn arrow(input: &mut Input<'_>) -> IResult<()> {
    (ws0, "->", ws0).void().parse_next(input)
}

/// A coordinate value written with digits
///
/// Literals too large for `f32` read as infinite and are clamped later.
/// The spelled-out `inf` and `nan` forms are refused.
fn number(input: &mut Input<'_>) -> IResult<f32> {
    float
        .with_taken()
        .verify(|(value, text): &(f32, &str)| {
            let digits = text.trim_start_matches(['+', '-']);
            !value.is_nan() && !digits.starts_with(|c: char| c.is_ascii_alphabetic())
        })
        .map(|(value, _)| value)
        .parse_next(input)
}

/// `x,y` with optional spaces around the comma
fn point(input: &mut Input<'_>) -> IResult<Point> {
    separated_pair(number, (ws0, ',', ws0), number)
        .map(|(x, y)| Point::new(x, y))
        .parse_next(input)
}

/// An entity name used as a path endpoint
fn reference<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

fn endpoint(input: &mut Input<'_>) -> IResult<Spanned<Endpoint>> {
    alt((
        point.map(Endpoint::Point),
        reference.map(|name: &str| Endpoint::Ref(name.to_string())),
    ))
    .with_span()
    .map(|(endpoint, range)| Spanned::new(endpoint, Span::new(range)))
    .parse_next(input)
}

/// `:word` suffix
fn style<'a>(input: &mut Input<'a>) -> IResult<Spanned<&'a str>> {
    preceded(
        (ws0, ':', ws0),
        take_while(1.., |c: char| c.is_alphanumeric() || c == '_' || c == '-')
            .with_span()
            .map(|(word, range)| Spanned::new(word, Span::new(range))),
    )
    .parse_next(input)
}

fn sigil(input: &mut Input<'_>) -> IResult<Sigil> {
    alt((
        "PK".value(Sigil::Entity(EntityKind::Puck)),
        'P'.value(Sigil::Entity(EntityKind::Player)),
        'X'.value(Sigil::Entity(EntityKind::Opponent)),
        'G'.value(Sigil::Entity(EntityKind::Goalie)),
        'C'.value(Sigil::Entity(EntityKind::Cone)),
        'R'.value(Sigil::Region(RegionKind::Rectangle)),
        'A'.value(Sigil::Region(RegionKind::Circle)),
    ))
    .parse_next(input)
}

/// A sigil with optional digits, standing alone as a word
fn head<'a>(input: &mut Input<'a>) -> IResult<Spanned<Head<'a>>> {
    let (((sigil, digits), token), range) = (sigil, take_while(0.., |c: char| c.is_ascii_digit()))
        .with_taken()
        .with_span()
        .parse_next(input)?;

    peek(alt((ws1.void(), "->".void(), eof.void(), one_of(TERMINATORS).void())))
        .parse_next(input)?;

    // A bare sigil only counts when a position or arrow follows, so prose
    // such as `A quick drill` stays a comment
    if digits.is_empty() {
        peek((
            ws0,
            alt((
                "->".void(),
                one_of(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.')).void(),
            )),
        ))
        .parse_next(input)?;
    }

    Ok(Spanned::new(
        Head {
            sigil,
            token,
            digits,
        },
        Span::new(range),
    ))
}

/// Arrow-separated endpoints, style and the end of the statement
fn tail<'a>(input: &mut Input<'a>) -> IResult<(Vec<Spanned<Endpoint>>, Option<Spanned<&'a str>>)> {
    let arrows: Vec<Spanned<Endpoint>> = repeat(0.., preceded(arrow, endpoint)).parse_next(input)?;
    let style = opt(style).parse_next(input)?;
    ws0.parse_next(input)?;
    end_of_statement.parse_next(input)?;
    Ok((arrows, style))
}

fn body<'a>(input: &mut Input<'a>) -> IResult<Body<'a>> {
    let ((first, (arrows, style)), range) = (opt(preceded(ws1, endpoint)), tail)
        .with_span()
        .parse_next(input)?;
    Ok(Body {
        first,
        arrows,
        style,
        span: Span::new(range),
    })
}

/// Rewind to `checkpoint` and swallow the statement as malformed.
fn recover<'a>(
    input: &mut Input<'a>,
    checkpoint: &<Input<'a> as Stream>::Checkpoint,
    subject: Spanned<&'a str>,
    expected: &'static str,
) -> IResult<Statement<'a>> {
    input.reset(checkpoint);
    let rest = rest_of_statement.parse_next(input)?;
    let text = rest.inner();
    let lead = text.len() - text.trim_start().len();
    let start = rest.span().start() + lead;
    let rest = Span::new(start..start + text.trim().len());
    Ok(Statement::Malformed {
        subject,
        rest,
        expected,
    })
}

fn sigil_statement<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    let head = head.parse_next(input)?;
    let checkpoint = input.checkpoint();
    match body.parse_next(input) {
        Ok(body) => Ok(Statement::Sigil { head, body }),
        Err(ErrMode::Backtrack(_)) => {
            let subject = Spanned::new(head.token, head.span());
            recover(input, &checkpoint, subject, "expected `x,y`")
        }
        Err(e) => Err(e),
    }
}

fn anonymous_path<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    let ((first, text), range) = point.with_taken().with_span().parse_next(input)?;
    let first = Spanned::new(Endpoint::Point(first), Span::new(range.clone()));
    let checkpoint = input.checkpoint();
    match tail.with_span().parse_next(input) {
        Ok(((arrows, style), tail_range)) if !arrows.is_empty() => {
            let body = Body {
                first: None,
                arrows,
                style,
                span: Span::new(tail_range),
            };
            Ok(Statement::Anonymous { first, body })
        }
        Ok(_) | Err(ErrMode::Backtrack(_)) => {
            let subject = Spanned::new(text, Span::new(range));
            recover(input, &checkpoint, subject, "expected `-> x,y`")
        }
        Err(e) => Err(e),
    }
}

fn directive<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    let keyword = preceded(
        '@',
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
    .with_span()
    .map(|(word, range)| Spanned::new(word, Span::new(range)))
    .parse_next(input)?;
    ws0.parse_next(input)?;
    let argument = rest_of_statement.parse_next(input)?;
    let trimmed = argument.trim_end();
    let start = argument.span().start();
    let argument = Spanned::new(trimmed, Span::new(start..start + trimmed.len()));
    Ok(Statement::Directive { keyword, argument })
}

fn comment<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    take_till(0.., TERMINATORS)
        .map(Statement::Comment)
        .parse_next(input)
}

fn statement<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    preceded(ws0, alt((directive, sigil_statement, anonymous_path, comment))).parse_next(input)
}

/// Resolve a style suffix for a path. Unknown styles fall back to skating.
fn path_style(style: Option<&Spanned<&str>>) -> PathStyle {
    let Some(style) = style else {
        return PathStyle::default();
    };
    PathStyle::from_str(style.inner()).unwrap_or_else(|_| {
        debug!(style = *style.inner(); "Unknown path style, falling back to skate");
        PathStyle::default()
    })
}

/// Accumulates instructions and diagnostics over a whole source.
struct NotationParser {
    instructions: Vec<Spanned<Instruction>>,
    diagnostics: DiagnosticCollector,
}

impl NotationParser {
    fn new() -> Self {
        Self {
            instructions: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn parse(&mut self, mut input: Input<'_>) {
        loop {
            let start = input.current_token_start();
            match statement.parse_next(&mut input) {
                Ok(statement) => {
                    let end = input.current_token_start();
                    self.lower(statement, Span::new(start..end));
                }
                Err(_) => {
                    // `comment` accepts anything, so this only guards against
                    // a parser bug looping forever
                    debug!(offset = start; "Unparseable statement skipped");
                    let _ = rest_of_statement.parse_next(&mut input);
                }
            }

            if input.is_empty() {
                break;
            }
            // Terminator
            input.next_token();
        }
    }

    fn push(&mut self, instruction: Instruction, span: Span) {
        trace!(kind = instruction.kind_name(), start = span.start(); "Instruction parsed");
        self.instructions.push(Spanned::new(instruction, span));
    }

    fn lower(&mut self, statement: Statement<'_>, span: Span) {
        match statement {
            Statement::Sigil { head, body } => self.lower_sigil(head, body, span),
            Statement::Anonymous { first, body } => {
                let style = path_style(body.style.as_ref());
                let mut endpoints = vec![first];
                endpoints.extend(body.arrows);
                self.push(Instruction::Path { style, endpoints }, span);
            }
            Statement::Malformed {
                subject,
                rest,
                expected,
            } => {
                let mut diag = Diagnostic::for_code(
                    ErrorCode::E100,
                    format!("malformed coordinates after `{}`", subject.inner()),
                );
                if rest.is_empty() {
                    diag = diag.with_label(subject.span(), expected);
                } else {
                    diag = diag
                        .with_label(rest, expected)
                        .with_secondary_label(subject.span(), "statement starts here");
                }
                self.diagnostics.emit(diag.with_help(POSITION_HELP));
            }
            Statement::Directive { keyword, argument } => {
                self.lower_directive(keyword, argument, span)
            }
            Statement::Comment(text) => {
                if !text.trim().is_empty() {
                    debug!(start = span.start(); "Comment skipped");
                }
            }
        }
    }

    fn lower_sigil(&mut self, head: Spanned<Head<'_>>, body: Body<'_>, span: Span) {
        let Head {
            sigil,
            token,
            digits,
        } = *head.inner();

        match sigil {
            Sigil::Region(kind) => {
                let points: Vec<Point> = body
                    .first
                    .iter()
                    .chain(body.arrows.iter())
                    .filter_map(|endpoint| match endpoint.inner() {
                        Endpoint::Point(point) => Some(*point),
                        Endpoint::Ref(_) => None,
                    })
                    .collect();
                let endpoint_count = body.arrows.len() + usize::from(body.first.is_some());

                match points.as_slice() {
                    [from, to] if endpoint_count == 2 => {
                        let tag = body.style.map(|style| style.inner().to_string());
                        self.push(
                            Instruction::Region {
                                kind,
                                from: *from,
                                to: *to,
                                tag,
                            },
                            span,
                        );
                    }
                    _ => {
                        let label_span = if body.span.is_empty() {
                            head.span()
                        } else {
                            body.span
                        };
                        self.diagnostics.emit(
                            Diagnostic::for_code(
                                ErrorCode::E100,
                                format!("malformed coordinates after `{token}`"),
                            )
                            .with_label(label_span, "expected `x,y -> x,y`")
                            .with_help("regions take exactly two coordinate pairs, e.g. `R 150,30 -> 185,70`"),
                        );
                    }
                }
            }
            Sigil::Entity(kind) if !body.arrows.is_empty() => {
                let style = path_style(body.style.as_ref());
                let mut endpoints = Vec::with_capacity(body.arrows.len() + 1);
                match body.first {
                    // The head only tags the path
                    Some(first) => endpoints.push(first),
                    // The head is the path's first endpoint
                    None => endpoints.push(Spanned::new(
                        Endpoint::Ref(token.to_string()),
                        head.span(),
                    )),
                }
                endpoints.extend(body.arrows);
                debug!(kind:? = kind, head = token, points = endpoints.len(); "Path statement");
                self.push(Instruction::Path { style, endpoints }, span);
            }
            Sigil::Entity(kind) => match body.first {
                Some(first) => match first.inner() {
                    Endpoint::Point(position) => {
                        if let Some(style) = &body.style {
                            debug!(style = *style.inner(); "Style suffix on entity ignored");
                        }
                        let label = (!digits.is_empty()).then(|| digits.to_string());
                        self.push(
                            Instruction::Entity {
                                kind,
                                name: token.to_string(),
                                label,
                                position: *position,
                            },
                            span,
                        );
                    }
                    Endpoint::Ref(name) => {
                        self.diagnostics.emit(
                            Diagnostic::for_code(
                                ErrorCode::E101,
                                format!("`{token}` is placed at `{name}`, which is not a position"),
                            )
                            .with_label(first.span(), "expected `x,y`")
                            .with_help(
                                "only path endpoints may name another entity, e.g. `P1 -> X3`",
                            ),
                        );
                    }
                },
                None => {
                    self.diagnostics.emit(
                        Diagnostic::for_code(
                            ErrorCode::E100,
                            format!("malformed coordinates after `{token}`"),
                        )
                        .with_label(head.span(), "missing position")
                        .with_help(POSITION_HELP),
                    );
                }
            },
        }
    }

    fn lower_directive(&mut self, keyword: Spanned<&str>, argument: Spanned<&str>, span: Span) {
        match *keyword.inner() {
            "zone" => match Zone::from_str(argument.inner()) {
                Ok(zone) => self.push(Instruction::Zone(zone), span),
                Err(err) => {
                    let label_span = if argument.span().is_empty() {
                        keyword.span()
                    } else {
                        argument.span()
                    };
                    self.diagnostics.emit(
                        Diagnostic::for_code(
                            ErrorCode::E102,
                            format!("unknown zone `{}`", argument.inner()),
                        )
                        .with_label(label_span, "not a rink zone")
                        .with_help(err),
                    );
                }
            },
            other => {
                self.diagnostics.emit(
                    Diagnostic::for_code(ErrorCode::E103, format!("unknown directive `@{other}`"))
                        .with_label(keyword.span(), "unknown directive")
                        .with_help("the only directive is `@zone <defensive|neutral|offensive>`"),
                );
            }
        }
    }

    fn finish(self) -> (Vec<Spanned<Instruction>>, Vec<Diagnostic>) {
        (self.instructions, self.diagnostics.finish())
    }
}

/// Parse notation into instructions, collecting diagnostics for bad lines.
///
/// Never fails: malformed statements are skipped and reported, and lines
/// without a recognized sigil are comments. Instructions keep source order.
pub fn parse_instructions(source: &str) -> (Vec<Spanned<Instruction>>, Vec<Diagnostic>) {
    let mut parser = NotationParser::new();
    parser.parse(LocatingSlice::new(source));
    parser.finish()
}

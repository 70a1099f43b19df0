//! Parse pest pairs into path commands

use glam::dvec2;
use miette::SourceSpan;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::errors::{ParseError, path_source};
use crate::log::trace;
use crate::path::{ArcParams, Command, Mode, Path};
use crate::{PathParser, Rule};

/// Command kinds, before operands are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Move,
    Line,
    Horizontal,
    Vertical,
    Arc,
    Close,
}

impl Kind {
    fn from_letter(letter: char) -> Option<(Kind, Mode)> {
        let mode = if letter.is_ascii_lowercase() {
            Mode::Relative
        } else {
            Mode::Absolute
        };
        let kind = match letter.to_ascii_uppercase() {
            'M' => Kind::Move,
            'L' => Kind::Line,
            'H' => Kind::Horizontal,
            'V' => Kind::Vertical,
            'A' => Kind::Arc,
            'Z' => Kind::Close,
            _ => return None,
        };
        Some((kind, mode))
    }

    fn arity(self) -> usize {
        match self {
            Kind::Close => 0,
            Kind::Horizontal | Kind::Vertical => 1,
            Kind::Move | Kind::Line => 2,
            Kind::Arc => 7,
        }
    }
}

/// Parse path text into commands
pub fn parse(source: &str) -> Result<Path, ParseError> {
    let pairs = PathParser::parse(Rule::path, source).map_err(|e| {
        let span = match e.location {
            InputLocation::Pos(pos) => SourceSpan::from((pos, 0)),
            InputLocation::Span((start, end)) => SourceSpan::from((start, end - start)),
        };
        ParseError::Syntax {
            message: e.variant.message().into_owned(),
            src: path_source(source),
            span,
        }
    })?;

    let mut path = Path::new();
    for pair in pairs {
        if pair.as_rule() == Rule::path {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::command {
                    path.push(parse_command(source, inner)?);
                }
            }
        }
    }

    trace!(commands = path.len(), "parsed path");
    Ok(path)
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    SourceSpan::from((span.start(), span.end() - span.start()))
}

fn parse_command(source: &str, pair: Pair<Rule>) -> Result<Command, ParseError> {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();

    let letter_pair = inner.next().ok_or_else(|| ParseError::Syntax {
        message: "expected a command letter".to_string(),
        src: path_source(source),
        span,
    })?;
    let letter = letter_pair.as_str().chars().next().unwrap_or('?');
    let (kind, mode) = Kind::from_letter(letter).ok_or_else(|| ParseError::UnknownCommand {
        letter,
        src: path_source(source),
        span: span_of(&letter_pair),
    })?;

    let mut operands = Vec::with_capacity(kind.arity());
    let mut operand_spans = Vec::with_capacity(kind.arity());
    for number in inner {
        operand_spans.push(span_of(&number));
        operands.push(parse_number(source, &number)?);
    }

    if operands.len() != kind.arity() {
        return Err(ParseError::Arity {
            letter,
            expected: kind.arity(),
            found: operands.len(),
            src: path_source(source),
            span,
        });
    }

    let command = match kind {
        Kind::Move => Command::MoveTo(mode, dvec2(operands[0], operands[1])),
        Kind::Line => Command::LineTo(mode, dvec2(operands[0], operands[1])),
        Kind::Horizontal => Command::Horizontal(mode, operands[0]),
        Kind::Vertical => Command::Vertical(mode, operands[0]),
        Kind::Arc => Command::Arc(
            mode,
            ArcParams {
                radii: dvec2(operands[0], operands[1]),
                x_axis_rotation: operands[2],
                large_arc: parse_flag(source, operands[3], operand_spans[3])?,
                sweep: parse_flag(source, operands[4], operand_spans[4])?,
                end: dvec2(operands[5], operands[6]),
            },
        ),
        Kind::Close => Command::Close,
    };
    Ok(command)
}

fn parse_number(source: &str, pair: &Pair<Rule>) -> Result<f64, ParseError> {
    pair.as_str()
        .parse::<f64>()
        .map_err(|e| ParseError::InvalidNumber {
            message: e.to_string(),
            src: path_source(source),
            span: span_of(pair),
        })
}

fn parse_flag(source: &str, value: f64, span: SourceSpan) -> Result<bool, ParseError> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(ParseError::InvalidFlag {
            value,
            src: path_source(source),
            span,
        })
    }
}

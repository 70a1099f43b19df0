//! Structured path model for marker outlines
//!
//! - `Command`: one drawing command with its operands
//! - `Path`: ordered commands, serialized to text only at the boundary
//! - `builder`: fluent construction used by the symbol generators
//!
//! A path has two textual forms. The source form (`Display`) is what the
//! generators emit, e.g. `M10,0A10,10 0 1,1 0,-10Z`. The compact form
//! (`Path::to_compact_string`) is what the aligner emits: each letter
//! followed by its operands joined with commas.

pub mod builder;

pub use builder::PathBuilder;

use std::fmt::{self, Write};
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::ParseError;
use crate::format::fmt_num;

/// Whether a command's operands are absolute or relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Absolute,
    Relative,
}

impl Mode {
    fn letter(self, upper: char) -> char {
        match self {
            Mode::Absolute => upper,
            Mode::Relative => upper.to_ascii_lowercase(),
        }
    }
}

/// Operands of an elliptical arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub radii: DVec2,
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: DVec2,
}

/// A single path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo(Mode, DVec2),
    LineTo(Mode, DVec2),
    Horizontal(Mode, f64),
    Vertical(Mode, f64),
    Arc(Mode, ArcParams),
    Close,
}

impl Command {
    /// The command letter as it appears in path text
    pub fn letter(&self) -> char {
        match self {
            Command::MoveTo(mode, _) => mode.letter('M'),
            Command::LineTo(mode, _) => mode.letter('L'),
            Command::Horizontal(mode, _) => mode.letter('H'),
            Command::Vertical(mode, _) => mode.letter('V'),
            Command::Arc(mode, _) => mode.letter('A'),
            Command::Close => 'Z',
        }
    }

    /// Absolute point the cursor lands on after this command.
    ///
    /// `Close` leaves the cursor where it is; returning to the sub-path start
    /// is the caller's business since it needs sub-path tracking.
    pub fn endpoint(&self, cursor: DVec2) -> DVec2 {
        match *self {
            Command::MoveTo(Mode::Absolute, p) | Command::LineTo(Mode::Absolute, p) => p,
            Command::MoveTo(Mode::Relative, d) | Command::LineTo(Mode::Relative, d) => cursor + d,
            Command::Horizontal(Mode::Absolute, x) => dvec2(x, cursor.y),
            Command::Horizontal(Mode::Relative, dx) => dvec2(cursor.x + dx, cursor.y),
            Command::Vertical(Mode::Absolute, y) => dvec2(cursor.x, y),
            Command::Vertical(Mode::Relative, dy) => dvec2(cursor.x, cursor.y + dy),
            Command::Arc(Mode::Absolute, arc) => arc.end,
            Command::Arc(Mode::Relative, arc) => cursor + arc.end,
            Command::Close => cursor,
        }
    }

    /// True for the axis-aligned commands (H, h, V, v)
    pub fn is_axis_aligned(&self) -> bool {
        matches!(self, Command::Horizontal(..) | Command::Vertical(..))
    }

    fn write_source(&self, out: &mut impl Write) -> fmt::Result {
        out.write_char(self.letter())?;
        match self {
            Command::MoveTo(_, p) | Command::LineTo(_, p) => {
                write!(out, "{},{}", fmt_num(p.x), fmt_num(p.y))
            }
            Command::Horizontal(_, v) | Command::Vertical(_, v) => out.write_str(&fmt_num(*v)),
            Command::Arc(_, arc) => write!(
                out,
                "{},{} {} {},{} {},{}",
                fmt_num(arc.radii.x),
                fmt_num(arc.radii.y),
                fmt_num(arc.x_axis_rotation),
                flag(arc.large_arc),
                flag(arc.sweep),
                fmt_num(arc.end.x),
                fmt_num(arc.end.y),
            ),
            Command::Close => Ok(()),
        }
    }

    fn write_compact(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Command::Arc(_, arc) => write!(
                out,
                "{}{},{},{},{},{},{},{}",
                self.letter(),
                fmt_num(arc.radii.x),
                fmt_num(arc.radii.y),
                fmt_num(arc.x_axis_rotation),
                flag(arc.large_arc),
                flag(arc.sweep),
                fmt_num(arc.end.x),
                fmt_num(arc.end.y),
            ),
            // Non-arc operands are already comma-joined in the source form
            _ => self.write_source(out),
        }
    }
}

fn flag(value: bool) -> char {
    if value { '1' } else { '0' }
}

/// An ordered sequence of path commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize with every operand comma-joined and no whitespace
    pub fn to_compact_string(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 12);
        for command in &self.commands {
            // Writing into a String cannot fail
            let _ = command.write_compact(&mut out);
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            command.write_source(f)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl FromIterator<Command> for Path {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

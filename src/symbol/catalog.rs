//! The symbol catalog: names, codes and rendering hints
//!
//! Codes equal table positions. They are stable: new symbols are appended,
//! nothing is ever renumbered.

use super::shapes::*;
use crate::defaults::SYMBOL_COUNT;

/// Rendering hints attached to a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolFlags {
    value: u8,
}

impl SymbolFlags {
    const NO_DOT: u8 = 1;
    const NO_FILL: u8 = 2;
    const NEED_LINE: u8 = 4;

    pub const NONE: SymbolFlags = SymbolFlags { value: 0 };

    const fn with(self, bit: u8) -> Self {
        Self {
            value: self.value | bit,
        }
    }

    pub const fn with_no_dot(self) -> Self {
        self.with(Self::NO_DOT)
    }

    pub const fn with_no_fill(self) -> Self {
        self.with(Self::NO_FILL)
    }

    pub const fn with_need_line(self) -> Self {
        self.with(Self::NEED_LINE)
    }

    /// A center dot must not be overlaid on this symbol
    pub fn no_dot(self) -> bool {
        self.value & Self::NO_DOT != 0
    }

    /// The symbol is stroke-only and must never be filled
    pub fn no_fill(self) -> bool {
        self.value & Self::NO_FILL != 0
    }

    /// The symbol needs a visible stroke even when line width is zero
    pub fn need_line(self) -> bool {
        self.value & Self::NEED_LINE != 0
    }
}

const DOT: SymbolFlags = SymbolFlags::NONE.with_no_dot();
const LINE_DOT: SymbolFlags = DOT.with_need_line();
const STROKE: SymbolFlags = LINE_DOT.with_no_fill();

/// Catalog entry for one base symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptor {
    pub code: u32,
    pub name: &'static str,
    pub symbol: Symbol,
    pub flags: SymbolFlags,
    /// Fraction of the marker size by which an attached line stops short
    pub backoff: Option<f64>,
}

impl Descriptor {
    const fn new(code: u32, name: &'static str, symbol: Symbol) -> Self {
        Self {
            code,
            name,
            symbol,
            flags: SymbolFlags::NONE,
            backoff: None,
        }
    }

    const fn flags(mut self, flags: SymbolFlags) -> Self {
        self.flags = flags;
        self
    }

    const fn backoff(mut self, backoff: f64) -> Self {
        self.backoff = Some(backoff);
        self
    }
}

#[rustfmt::skip]
pub static CATALOG: [Descriptor; SYMBOL_COUNT] = [
    Descriptor::new(0, "circle", Symbol::Circle(Circle)),
    Descriptor::new(1, "square", Symbol::Square(Square)),
    Descriptor::new(2, "diamond", Symbol::Diamond(Diamond)),
    Descriptor::new(3, "cross", Symbol::Cross(Cross)),
    Descriptor::new(4, "x", Symbol::X(X)),
    Descriptor::new(5, "triangle-up", Symbol::TriangleUp(TriangleUp)),
    Descriptor::new(6, "triangle-down", Symbol::TriangleDown(TriangleDown)),
    Descriptor::new(7, "triangle-left", Symbol::TriangleLeft(TriangleLeft)),
    Descriptor::new(8, "triangle-right", Symbol::TriangleRight(TriangleRight)),
    Descriptor::new(9, "triangle-ne", Symbol::TriangleNe(TriangleNe)),
    Descriptor::new(10, "triangle-se", Symbol::TriangleSe(TriangleSe)),
    Descriptor::new(11, "triangle-sw", Symbol::TriangleSw(TriangleSw)),
    Descriptor::new(12, "triangle-nw", Symbol::TriangleNw(TriangleNw)),
    Descriptor::new(13, "pentagon", Symbol::Pentagon(Pentagon)),
    Descriptor::new(14, "hexagon", Symbol::Hexagon(Hexagon)),
    Descriptor::new(15, "hexagon2", Symbol::Hexagon2(Hexagon2)),
    Descriptor::new(16, "octagon", Symbol::Octagon(Octagon)),
    Descriptor::new(17, "star", Symbol::Star(Star)),
    Descriptor::new(18, "hexagram", Symbol::Hexagram(Hexagram)),
    Descriptor::new(19, "star-triangle-up", Symbol::StarTriangleUp(StarTriangleUp)),
    Descriptor::new(20, "star-triangle-down", Symbol::StarTriangleDown(StarTriangleDown)),
    Descriptor::new(21, "star-square", Symbol::StarSquare(StarSquare)),
    Descriptor::new(22, "star-diamond", Symbol::StarDiamond(StarDiamond)),
    Descriptor::new(23, "diamond-tall", Symbol::DiamondTall(DiamondTall)),
    Descriptor::new(24, "diamond-wide", Symbol::DiamondWide(DiamondWide)),
    Descriptor::new(25, "hourglass", Symbol::Hourglass(Hourglass)).flags(DOT),
    Descriptor::new(26, "bowtie", Symbol::Bowtie(Bowtie)).flags(DOT),
    Descriptor::new(27, "circle-cross", Symbol::CircleCross(CircleCross)).flags(LINE_DOT),
    Descriptor::new(28, "circle-x", Symbol::CircleX(CircleX)).flags(LINE_DOT),
    Descriptor::new(29, "square-cross", Symbol::SquareCross(SquareCross)).flags(LINE_DOT),
    Descriptor::new(30, "square-x", Symbol::SquareX(SquareX)).flags(LINE_DOT),
    Descriptor::new(31, "diamond-cross", Symbol::DiamondCross(DiamondCross)).flags(LINE_DOT),
    Descriptor::new(32, "diamond-x", Symbol::DiamondX(DiamondX)).flags(LINE_DOT),
    Descriptor::new(33, "cross-thin", Symbol::CrossThin(CrossThin)).flags(STROKE),
    Descriptor::new(34, "x-thin", Symbol::XThin(XThin)).flags(STROKE),
    Descriptor::new(35, "asterisk", Symbol::Asterisk(Asterisk)).flags(STROKE),
    Descriptor::new(36, "hash", Symbol::Hash(Hash)).flags(SymbolFlags::NONE.with_need_line().with_no_fill()),
    Descriptor::new(37, "y-up", Symbol::YUp(YUp)).flags(STROKE),
    Descriptor::new(38, "y-down", Symbol::YDown(YDown)).flags(STROKE),
    Descriptor::new(39, "y-left", Symbol::YLeft(YLeft)).flags(STROKE),
    Descriptor::new(40, "y-right", Symbol::YRight(YRight)).flags(STROKE),
    Descriptor::new(41, "line-ew", Symbol::LineEw(LineEw)).flags(STROKE),
    Descriptor::new(42, "line-ns", Symbol::LineNs(LineNs)).flags(STROKE),
    Descriptor::new(43, "line-ne", Symbol::LineNe(LineNe)).flags(STROKE),
    Descriptor::new(44, "line-nw", Symbol::LineNw(LineNw)).flags(STROKE),
    Descriptor::new(45, "arrow-up", Symbol::ArrowUp(ArrowUp)).flags(DOT).backoff(1.0),
    Descriptor::new(46, "arrow-down", Symbol::ArrowDown(ArrowDown)).flags(DOT),
    Descriptor::new(47, "arrow-left", Symbol::ArrowLeft(ArrowLeft)).flags(DOT),
    Descriptor::new(48, "arrow-right", Symbol::ArrowRight(ArrowRight)).flags(DOT),
    Descriptor::new(49, "arrow-bar-up", Symbol::ArrowBarUp(ArrowBarUp)).flags(LINE_DOT).backoff(1.0),
    Descriptor::new(50, "arrow-bar-down", Symbol::ArrowBarDown(ArrowBarDown)).flags(LINE_DOT),
    Descriptor::new(51, "arrow-bar-left", Symbol::ArrowBarLeft(ArrowBarLeft)).flags(LINE_DOT),
    Descriptor::new(52, "arrow-bar-right", Symbol::ArrowBarRight(ArrowBarRight)).flags(LINE_DOT),
    Descriptor::new(53, "arrow", Symbol::Arrow(Arrow)).flags(DOT).backoff(0.9),
    Descriptor::new(54, "arrow-wide", Symbol::ArrowWide(ArrowWide)).flags(DOT).backoff(0.4),
];

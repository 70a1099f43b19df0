//! Symbol types for marker rendering
//!
//! Each symbol is its own unit type that knows how to draw its outline for a
//! given radius, centered on the origin with +y pointing down. Outlines are
//! un-oriented; rotation and standoff are applied afterwards by the aligner.

use std::f64::consts::{PI, SQRT_2};

use enum_dispatch::enum_dispatch;

use crate::format::round_coord as rc;
use crate::path::{Path, PathBuilder};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Common behavior for all symbols
#[enum_dispatch]
pub trait Outline {
    /// Local outline for radius `r`, every coordinate already rounded.
    fn outline(&self, r: f64) -> Path;

    /// Rotation leaves the outline unchanged, so only a standoff needs aligning.
    fn is_rotationally_symmetric(&self) -> bool {
        false
    }
}

/// Position of a symbol in the catalog
#[enum_dispatch]
pub trait Catalogued {
    fn code(&self) -> u32;
}

macro_rules! symbol_types {
    ($($ty:ident = $code:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $ty;

            impl Catalogued for $ty {
                fn code(&self) -> u32 {
                    $code
                }
            }
        )*
    };
}

symbol_types! {
    Circle = 0,
    Square = 1,
    Diamond = 2,
    Cross = 3,
    X = 4,
    TriangleUp = 5,
    TriangleDown = 6,
    TriangleLeft = 7,
    TriangleRight = 8,
    TriangleNe = 9,
    TriangleSe = 10,
    TriangleSw = 11,
    TriangleNw = 12,
    Pentagon = 13,
    Hexagon = 14,
    Hexagon2 = 15,
    Octagon = 16,
    Star = 17,
    Hexagram = 18,
    StarTriangleUp = 19,
    StarTriangleDown = 20,
    StarSquare = 21,
    StarDiamond = 22,
    DiamondTall = 23,
    DiamondWide = 24,
    Hourglass = 25,
    Bowtie = 26,
    CircleCross = 27,
    CircleX = 28,
    SquareCross = 29,
    SquareX = 30,
    DiamondCross = 31,
    DiamondX = 32,
    CrossThin = 33,
    XThin = 34,
    Asterisk = 35,
    Hash = 36,
    YUp = 37,
    YDown = 38,
    YLeft = 39,
    YRight = 40,
    LineEw = 41,
    LineNs = 42,
    LineNe = 43,
    LineNw = 44,
    ArrowUp = 45,
    ArrowDown = 46,
    ArrowLeft = 47,
    ArrowRight = 48,
    ArrowBarUp = 49,
    ArrowBarDown = 50,
    ArrowBarLeft = 51,
    ArrowBarRight = 52,
    Arrow = 53,
    ArrowWide = 54,
}

/// A marker symbol: one variant per catalog entry
#[enum_dispatch(Outline, Catalogued)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Circle,
    Square,
    Diamond,
    Cross,
    X,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    TriangleNe,
    TriangleSe,
    TriangleSw,
    TriangleNw,
    Pentagon,
    Hexagon,
    Hexagon2,
    Octagon,
    Star,
    Hexagram,
    StarTriangleUp,
    StarTriangleDown,
    StarSquare,
    StarDiamond,
    DiamondTall,
    DiamondWide,
    Hourglass,
    Bowtie,
    CircleCross,
    CircleX,
    SquareCross,
    SquareX,
    DiamondCross,
    DiamondX,
    CrossThin,
    XThin,
    Asterisk,
    Hash,
    YUp,
    YDown,
    YLeft,
    YRight,
    LineEw,
    LineNs,
    LineNe,
    LineNw,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowBarUp,
    ArrowBarDown,
    ArrowBarLeft,
    ArrowBarRight,
    Arrow,
    ArrowWide,
}

// ============================================================================
// Shared outlines
// ============================================================================

/// Full circle as two half arcs, starting and ending at (r, 0)
fn circle_arcs(b: PathBuilder, rs: f64) -> PathBuilder {
    b.m(rs, 0.0)
        .a(rs, rs, 0.0, true, true, 0.0, -rs)
        .a(rs, rs, 0.0, false, true, rs, 0.0)
        .z()
}

fn square_outline(b: PathBuilder, rs: f64) -> PathBuilder {
    b.m(rs, rs).h(-rs).v(-rs).h(rs).z()
}

fn diamond_outline(b: PathBuilder, rd: f64) -> PathBuilder {
    b.m(rd, 0.0).l(0.0, rd).l(-rd, 0.0).l(0.0, -rd).z()
}

/// Rhombus with half-width `x` and half-height `y`
fn rhombus(x: f64, y: f64) -> Path {
    PathBuilder::new().m(0.0, y).l(x, 0.0).l(0.0, -y).l(-x, 0.0).z().build()
}

/// Three spokes meeting at the origin
fn spokes(tips: [(f64, f64); 3]) -> Path {
    tips.iter()
        .fold(PathBuilder::new(), |b, &(x, y)| b.m(x, y).l(0.0, 0.0))
        .build()
}

/// Closed curved polygon whose edges are arcs of radius `radius` bulging inward
fn curved_polygon(radius: f64, vertices: &[(f64, f64)]) -> Path {
    let Some(&start) = vertices.first() else {
        return Path::new();
    };
    vertices[1..]
        .iter()
        .copied()
        .chain(std::iter::once(start))
        .fold(PathBuilder::new().m(start.0, start.1), |b, (x, y)| {
            b.a(radius, radius, 0.0, false, true, x, y)
        })
        .z()
        .build()
}

/// Arrowhead with its tip at the origin and the open end toward +y
fn arrowhead(b: PathBuilder, half_width: f64, length: f64) -> PathBuilder {
    b.m(0.0, 0.0).l(-half_width, length).h(half_width).z()
}

/// Arrowhead with its tip at the origin and the open end toward +x
fn arrowhead_sideways(b: PathBuilder, length: f64, half_width: f64) -> PathBuilder {
    b.m(0.0, 0.0).l(length, -half_width).v(half_width).z()
}

// ============================================================================
// Basic shapes
// ============================================================================

impl Outline for Circle {
    fn outline(&self, r: f64) -> Path {
        circle_arcs(PathBuilder::new(), rc(r)).build()
    }

    fn is_rotationally_symmetric(&self) -> bool {
        true
    }
}

impl Outline for Square {
    fn outline(&self, r: f64) -> Path {
        square_outline(PathBuilder::new(), rc(r)).build()
    }
}

impl Outline for Diamond {
    fn outline(&self, r: f64) -> Path {
        diamond_outline(PathBuilder::new(), rc(r * 1.3)).build()
    }
}

impl Outline for Cross {
    fn outline(&self, r: f64) -> Path {
        let a = rc(r * 0.4);
        let b = rc(r * 1.2);
        PathBuilder::new()
            .m(b, a)
            .h(a)
            .v(b)
            .h(-a)
            .v(a)
            .h(-b)
            .v(-a)
            .h(-a)
            .v(-b)
            .h(a)
            .v(-a)
            .h(b)
            .z()
            .build()
    }
}

impl Outline for X {
    fn outline(&self, r: f64) -> Path {
        let rx = rc(r * 0.8 / SQRT_2);
        let ne = (rx, rx);
        let se = (rx, -rx);
        let sw = (-rx, -rx);
        let nw = (-rx, rx);
        [ne, se, sw, se, sw, nw, sw, nw, ne, nw, ne]
            .iter()
            .fold(PathBuilder::new().m(0.0, rx), |b, &(dx, dy)| b.l_by(dx, dy))
            .z()
            .build()
    }
}

// ============================================================================
// Triangles
// ============================================================================

/// Dimensions shared by the four axis-aligned triangles
fn triangle_dims(r: f64) -> (f64, f64, f64) {
    (rc(r * 2.0 / SQRT_3), rc(r / 2.0), rc(r))
}

impl Outline for TriangleUp {
    fn outline(&self, r: f64) -> Path {
        let (rt, r2, rs) = triangle_dims(r);
        PathBuilder::new().m(-rt, r2).h(rt).l(0.0, -rs).z().build()
    }
}

impl Outline for TriangleDown {
    fn outline(&self, r: f64) -> Path {
        let (rt, r2, rs) = triangle_dims(r);
        PathBuilder::new().m(-rt, -r2).h(rt).l(0.0, rs).z().build()
    }
}

impl Outline for TriangleLeft {
    fn outline(&self, r: f64) -> Path {
        let (rt, r2, rs) = triangle_dims(r);
        PathBuilder::new().m(r2, -rt).v(rt).l(-rs, 0.0).z().build()
    }
}

impl Outline for TriangleRight {
    fn outline(&self, r: f64) -> Path {
        let (rt, r2, rs) = triangle_dims(r);
        PathBuilder::new().m(-r2, -rt).v(rt).l(rs, 0.0).z().build()
    }
}

/// Legs of the right-angled corner triangles
fn corner_dims(r: f64) -> (f64, f64) {
    (rc(r * 0.6), rc(r * 1.2))
}

impl Outline for TriangleNe {
    fn outline(&self, r: f64) -> Path {
        let (r1, r2) = corner_dims(r);
        PathBuilder::new().m(-r2, -r1).h(r1).v(r2).z().build()
    }
}

impl Outline for TriangleSe {
    fn outline(&self, r: f64) -> Path {
        let (r1, r2) = corner_dims(r);
        PathBuilder::new().m(r1, -r2).v(r1).h(-r2).z().build()
    }
}

impl Outline for TriangleSw {
    fn outline(&self, r: f64) -> Path {
        let (r1, r2) = corner_dims(r);
        PathBuilder::new().m(r2, r1).h(-r1).v(-r2).z().build()
    }
}

impl Outline for TriangleNw {
    fn outline(&self, r: f64) -> Path {
        let (r1, r2) = corner_dims(r);
        PathBuilder::new().m(-r1, r2).v(-r1).h(r2).z().build()
    }
}

// ============================================================================
// Polygons and stars
// ============================================================================

impl Outline for Pentagon {
    fn outline(&self, r: f64) -> Path {
        let x1 = rc(r * 0.951);
        let x2 = rc(r * 0.588);
        let y0 = rc(-r);
        let y1 = rc(r * -0.309);
        let y2 = rc(r * 0.809);
        PathBuilder::new()
            .m(x1, y1)
            .l(x2, y2)
            .h(-x2)
            .l(-x1, y1)
            .l(0.0, y0)
            .z()
            .build()
    }
}

impl Outline for Hexagon {
    fn outline(&self, r: f64) -> Path {
        let y0 = rc(r);
        let y1 = rc(r / 2.0);
        let x = rc(r * SQRT_3 / 2.0);
        PathBuilder::new()
            .m(x, -y1)
            .v(y1)
            .l(0.0, y0)
            .l(-x, y1)
            .v(-y1)
            .l(0.0, -y0)
            .z()
            .build()
    }
}

impl Outline for Hexagon2 {
    fn outline(&self, r: f64) -> Path {
        let x0 = rc(r);
        let x1 = rc(r / 2.0);
        let y = rc(r * SQRT_3 / 2.0);
        PathBuilder::new()
            .m(-x1, y)
            .h(x1)
            .l(x0, 0.0)
            .l(x1, -y)
            .h(-x1)
            .l(-x0, 0.0)
            .z()
            .build()
    }
}

impl Outline for Octagon {
    fn outline(&self, r: f64) -> Path {
        let a = rc(r * 0.924);
        let b = rc(r * 0.383);
        PathBuilder::new()
            .m(-b, -a)
            .h(b)
            .l(a, -b)
            .v(b)
            .l(b, a)
            .h(-b)
            .l(-a, b)
            .v(-b)
            .z()
            .build()
    }
}

impl Outline for Star {
    fn outline(&self, r: f64) -> Path {
        let rs = r * 1.4;
        let x1 = rc(rs * 0.225);
        let x2 = rc(rs * 0.951);
        let x3 = rc(rs * 0.363);
        let x4 = rc(rs * 0.588);
        let y0 = rc(-rs);
        let y1 = rc(rs * -0.309);
        let y3 = rc(rs * 0.118);
        let y4 = rc(rs * 0.809);
        let y5 = rc(rs * 0.382);
        PathBuilder::new()
            .m(x1, y1)
            .h(x2)
            .l(x3, y3)
            .l(x4, y4)
            .l(0.0, y5)
            .l(-x4, y4)
            .l(-x3, y3)
            .l(-x2, y1)
            .h(-x1)
            .l(0.0, y0)
            .z()
            .build()
    }
}

impl Outline for Hexagram {
    fn outline(&self, r: f64) -> Path {
        let y = rc(r * 0.66);
        let x1 = rc(r * 0.38);
        let x2 = rc(r * 0.76);
        PathBuilder::new()
            .m(-x2, 0.0)
            .l_by(-x1, -y)
            .h_by(x2)
            .l_by(x1, -y)
            .l_by(x1, y)
            .h_by(x2)
            .l_by(-x1, y)
            .l_by(x1, y)
            .h_by(-x2)
            .l_by(-x1, y)
            .l_by(-x1, -y)
            .h_by(-x2)
            .z()
            .build()
    }
}

impl Outline for StarTriangleUp {
    fn outline(&self, r: f64) -> Path {
        let x = rc(r * SQRT_3 * 0.8);
        let y1 = rc(r * 0.8);
        let y2 = rc(r * 1.6);
        curved_polygon(rc(r * 4.0), &[(-x, y1), (x, y1), (0.0, -y2)])
    }
}

impl Outline for StarTriangleDown {
    fn outline(&self, r: f64) -> Path {
        let x = rc(r * SQRT_3 * 0.8);
        let y1 = rc(r * 0.8);
        let y2 = rc(r * 1.6);
        curved_polygon(rc(r * 4.0), &[(x, -y1), (-x, -y1), (0.0, y2)])
    }
}

impl Outline for StarSquare {
    fn outline(&self, r: f64) -> Path {
        let rp = rc(r * 1.1);
        curved_polygon(rc(r * 2.0), &[(-rp, -rp), (-rp, rp), (rp, rp), (rp, -rp)])
    }
}

impl Outline for StarDiamond {
    fn outline(&self, r: f64) -> Path {
        let rp = rc(r * 1.4);
        curved_polygon(rc(r * 1.9), &[(-rp, 0.0), (0.0, rp), (rp, 0.0), (0.0, -rp)])
    }
}

impl Outline for DiamondTall {
    fn outline(&self, r: f64) -> Path {
        rhombus(rc(r * 0.7), rc(r * 1.4))
    }
}

impl Outline for DiamondWide {
    fn outline(&self, r: f64) -> Path {
        rhombus(rc(r * 1.4), rc(r * 0.7))
    }
}

impl Outline for Hourglass {
    fn outline(&self, r: f64) -> Path {
        let rs = rc(r);
        PathBuilder::new().m(rs, rs).h(-rs).l(rs, -rs).h(-rs).z().build()
    }
}

impl Outline for Bowtie {
    fn outline(&self, r: f64) -> Path {
        let rs = rc(r);
        PathBuilder::new().m(rs, rs).v(-rs).l(-rs, rs).v(-rs).z().build()
    }
}

// ============================================================================
// Shapes with interior strokes
// ============================================================================

impl Outline for CircleCross {
    fn outline(&self, r: f64) -> Path {
        let rs = rc(r);
        let b = PathBuilder::new().m(0.0, rs).v(-rs).m(rs, 0.0).h(-rs);
        circle_arcs(b, rs).build()
    }
}

impl Outline for CircleX {
    fn outline(&self, r: f64) -> Path {
        let rs = rc(r);
        let d = rc(r / SQRT_2);
        let b = PathBuilder::new().m(d, d).l(-d, -d).m(d, -d).l(-d, d);
        circle_arcs(b, rs).build()
    }
}

impl Outline for SquareCross {
    fn outline(&self, r: f64) -> Path {
        let rs = rc(r);
        let b = PathBuilder::new().m(0.0, rs).v(-rs).m(rs, 0.0).h(-rs);
        square_outline(b, rs).build()
    }
}

impl Outline for SquareX {
    fn outline(&self, r: f64) -> Path {
        let rs = rc(r);
        let b = PathBuilder::new().m(rs, rs).l(-rs, -rs).m(rs, -rs).l(-rs, rs);
        square_outline(b, rs).build()
    }
}

impl Outline for DiamondCross {
    fn outline(&self, r: f64) -> Path {
        let rd = rc(r * 1.3);
        diamond_outline(PathBuilder::new(), rd)
            .m(0.0, -rd)
            .v(rd)
            .m(-rd, 0.0)
            .h(rd)
            .build()
    }
}

impl Outline for DiamondX {
    fn outline(&self, r: f64) -> Path {
        let rd = rc(r * 1.3);
        let r2 = rc(r * 0.65);
        diamond_outline(PathBuilder::new(), rd)
            .m(-r2, -r2)
            .l(r2, r2)
            .m(-r2, r2)
            .l(r2, -r2)
            .build()
    }
}

// ============================================================================
// Pure strokes
// ============================================================================

impl Outline for CrossThin {
    fn outline(&self, r: f64) -> Path {
        let c = rc(r * 1.4);
        PathBuilder::new().m(0.0, c).v(-c).m(c, 0.0).h(-c).build()
    }
}

impl Outline for XThin {
    fn outline(&self, r: f64) -> Path {
        let x = rc(r);
        PathBuilder::new().m(x, x).l(-x, -x).m(x, -x).l(-x, x).build()
    }
}

impl Outline for Asterisk {
    fn outline(&self, r: f64) -> Path {
        let c = rc(r * 1.2);
        let s = rc(r * 0.85);
        PathBuilder::new()
            .m(0.0, c)
            .v(-c)
            .m(c, 0.0)
            .h(-c)
            .m(s, s)
            .l(-s, -s)
            .m(s, -s)
            .l(-s, s)
            .build()
    }
}

impl Outline for Hash {
    fn outline(&self, r: f64) -> Path {
        let r1 = rc(r / 2.0);
        let r2 = rc(r);
        let inner = rc(r1 - r2);
        PathBuilder::new()
            .m(r1, r2)
            .v(-r2)
            .m(inner, -r2)
            .v(r2)
            .m(r2, r1)
            .h(-r2)
            .m(-r2, inner)
            .h(r2)
            .build()
    }
}

impl Outline for YUp {
    fn outline(&self, r: f64) -> Path {
        let x = rc(r * 1.2);
        let y0 = rc(r * 1.6);
        let y1 = rc(r * 0.8);
        spokes([(-x, y1), (x, y1), (0.0, -y0)])
    }
}

impl Outline for YDown {
    fn outline(&self, r: f64) -> Path {
        let x = rc(r * 1.2);
        let y0 = rc(r * 1.6);
        let y1 = rc(r * 0.8);
        spokes([(-x, -y1), (x, -y1), (0.0, y0)])
    }
}

impl Outline for YLeft {
    fn outline(&self, r: f64) -> Path {
        let y = rc(r * 1.2);
        let x0 = rc(r * 1.6);
        let x1 = rc(r * 0.8);
        spokes([(x1, y), (x1, -y), (-x0, 0.0)])
    }
}

impl Outline for YRight {
    fn outline(&self, r: f64) -> Path {
        let y = rc(r * 1.2);
        let x0 = rc(r * 1.6);
        let x1 = rc(r * 0.8);
        spokes([(-x1, y), (-x1, -y), (x0, 0.0)])
    }
}

impl Outline for LineEw {
    fn outline(&self, r: f64) -> Path {
        let c = rc(r * 1.4);
        PathBuilder::new().m(c, 0.0).h(-c).build()
    }
}

impl Outline for LineNs {
    fn outline(&self, r: f64) -> Path {
        let c = rc(r * 1.4);
        PathBuilder::new().m(0.0, c).v(-c).build()
    }
}

impl Outline for LineNe {
    fn outline(&self, r: f64) -> Path {
        let x = rc(r);
        PathBuilder::new().m(x, -x).l(-x, x).build()
    }
}

impl Outline for LineNw {
    fn outline(&self, r: f64) -> Path {
        let x = rc(r);
        PathBuilder::new().m(x, x).l(-x, -x).build()
    }
}

// ============================================================================
// Arrowheads
// ============================================================================

impl Outline for ArrowUp {
    fn outline(&self, r: f64) -> Path {
        arrowhead(PathBuilder::new(), rc(r), rc(r * 2.0)).build()
    }
}

impl Outline for ArrowDown {
    fn outline(&self, r: f64) -> Path {
        arrowhead(PathBuilder::new(), rc(r), -rc(r * 2.0)).build()
    }
}

impl Outline for ArrowLeft {
    fn outline(&self, r: f64) -> Path {
        arrowhead_sideways(PathBuilder::new(), rc(r * 2.0), rc(r)).build()
    }
}

impl Outline for ArrowRight {
    fn outline(&self, r: f64) -> Path {
        arrowhead_sideways(PathBuilder::new(), -rc(r * 2.0), rc(r)).build()
    }
}

impl Outline for ArrowBarUp {
    fn outline(&self, r: f64) -> Path {
        let rx = rc(r);
        let b = PathBuilder::new().m(-rx, 0.0).h(rx);
        arrowhead(b, rx, rc(r * 2.0)).build()
    }
}

impl Outline for ArrowBarDown {
    fn outline(&self, r: f64) -> Path {
        let rx = rc(r);
        let b = PathBuilder::new().m(-rx, 0.0).h(rx);
        arrowhead(b, rx, -rc(r * 2.0)).build()
    }
}

impl Outline for ArrowBarLeft {
    fn outline(&self, r: f64) -> Path {
        let ry = rc(r);
        let b = PathBuilder::new().m(0.0, -ry).v(ry);
        arrowhead_sideways(b, rc(r * 2.0), ry).build()
    }
}

impl Outline for ArrowBarRight {
    fn outline(&self, r: f64) -> Path {
        let ry = rc(r);
        let b = PathBuilder::new().m(0.0, -ry).v(ry);
        arrowhead_sideways(b, -rc(r * 2.0), ry).build()
    }
}

impl Outline for Arrow {
    fn outline(&self, r: f64) -> Path {
        let head = PI / 2.5;
        let x = rc(2.0 * r * head.cos());
        let y = rc(2.0 * r * head.sin());
        PathBuilder::new().m(0.0, 0.0).l(-x, y).l(x, y).z().build()
    }
}

impl Outline for ArrowWide {
    fn outline(&self, r: f64) -> Path {
        let head = PI / 4.0;
        let x = rc(2.0 * r * head.cos());
        let y = rc(2.0 * r * head.sin());
        let rr = rc(2.0 * r);
        PathBuilder::new()
            .m(0.0, 0.0)
            .l(-x, y)
            .a(rr, rr, 0.0, false, true, x, y)
            .z()
            .build()
    }
}

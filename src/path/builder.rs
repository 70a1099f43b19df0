//! Fluent builder for marker outlines.
//!
//! Method names follow the path letters: `m`, `l`, `h`, `v`, `a`, `z` take
//! absolute operands, the `_by` variants take displacements from the cursor.
//!
//! # Example
//!
//! ```
//! use plotmark::path::PathBuilder;
//!
//! let square = PathBuilder::new().m(5.0, 5.0).h(-5.0).v(-5.0).h(5.0).z().build();
//! assert_eq!(square.to_string(), "M5,5H-5V-5H5Z");
//! ```

use glam::dvec2;

use super::{ArcParams, Command, Mode, Path};

#[derive(Debug, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, command: Command) -> Self {
        self.path.push(command);
        self
    }

    pub fn m(self, x: f64, y: f64) -> Self {
        self.push(Command::MoveTo(Mode::Absolute, dvec2(x, y)))
    }

    pub fn m_by(self, dx: f64, dy: f64) -> Self {
        self.push(Command::MoveTo(Mode::Relative, dvec2(dx, dy)))
    }

    pub fn l(self, x: f64, y: f64) -> Self {
        self.push(Command::LineTo(Mode::Absolute, dvec2(x, y)))
    }

    pub fn l_by(self, dx: f64, dy: f64) -> Self {
        self.push(Command::LineTo(Mode::Relative, dvec2(dx, dy)))
    }

    pub fn h(self, x: f64) -> Self {
        self.push(Command::Horizontal(Mode::Absolute, x))
    }

    pub fn h_by(self, dx: f64) -> Self {
        self.push(Command::Horizontal(Mode::Relative, dx))
    }

    pub fn v(self, y: f64) -> Self {
        self.push(Command::Vertical(Mode::Absolute, y))
    }

    pub fn v_by(self, dy: f64) -> Self {
        self.push(Command::Vertical(Mode::Relative, dy))
    }

    /// Elliptical arc to an absolute endpoint
    #[allow(clippy::too_many_arguments)]
    pub fn a(self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> Self {
        self.push(Command::Arc(
            Mode::Absolute,
            ArcParams {
                radii: dvec2(rx, ry),
                x_axis_rotation: rotation,
                large_arc,
                sweep,
                end: dvec2(x, y),
            },
        ))
    }

    /// Elliptical arc to an endpoint relative to the cursor
    #[allow(clippy::too_many_arguments)]
    pub fn a_by(self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, dx: f64, dy: f64) -> Self {
        self.push(Command::Arc(
            Mode::Relative,
            ArcParams {
                radii: dvec2(rx, ry),
                x_axis_rotation: rotation,
                large_arc,
                sweep,
                end: dvec2(dx, dy),
            },
        ))
    }

    pub fn z(self) -> Self {
        self.push(Command::Close)
    }

    pub fn build(self) -> Path {
        self.path
    }
}

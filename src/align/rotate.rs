//! Rotation and standoff on structured paths

use glam::{DVec2, dvec2};

use crate::format::round;
use crate::path::{ArcParams, Command, Mode, Path};
use crate::types::Angle;

/// Rotation about the origin, turning +x toward +y
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    sin: f64,
    cos: f64,
}

impl Rotation {
    pub fn new(angle: Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self { sin, cos }
    }

    pub fn apply(&self, p: DVec2) -> DVec2 {
        dvec2(p.x * self.cos - p.y * self.sin, p.x * self.sin + p.y * self.cos)
    }
}

/// Rotate `path` by `angle` after pushing every point `standoff` along +y.
///
/// Axis-aligned commands become lines of the same mode. Every endpoint is
/// placed and rounded to `digits` first; relative operands are the difference
/// of consecutive rounded points, so no rounding error builds up along a run
/// of relative commands. The pen starts on the unshifted anchor, which means
/// a leading relative move still carries the standoff. Arc radii and flags
/// are kept; the arc's x-axis rotation gains `angle` in degrees.
pub fn orient(path: &Path, angle: Angle, standoff: f64, digits: u32) -> Path {
    let rotation = Rotation::new(angle);
    let offset = dvec2(0.0, standoff);
    let snap = |p: DVec2| dvec2(round(p.x, digits), round(p.y, digits));
    let place = |p: DVec2| snap(rotation.apply(p + offset));

    // Source-frame and output-frame pens
    let mut cursor = DVec2::ZERO;
    let mut pen = DVec2::ZERO;
    let mut subpath_start = (DVec2::ZERO, DVec2::ZERO);
    let mut out = Path::with_capacity(path.len());

    for command in path {
        let end = command.endpoint(cursor);
        let placed = place(end);
        let operand = |mode: Mode| match mode {
            Mode::Absolute => placed,
            // Both points sit on the rounding grid; snap again to drop float noise
            Mode::Relative => snap(placed - pen),
        };

        let oriented = match *command {
            Command::MoveTo(mode, _) => {
                subpath_start = (end, placed);
                Command::MoveTo(mode, operand(mode))
            }
            Command::LineTo(mode, _) | Command::Horizontal(mode, _) | Command::Vertical(mode, _) => {
                Command::LineTo(mode, operand(mode))
            }
            Command::Arc(mode, arc) => Command::Arc(
                mode,
                ArcParams {
                    x_axis_rotation: arc.x_axis_rotation + angle.raw(),
                    end: operand(mode),
                    ..arc
                },
            ),
            Command::Close => Command::Close,
        };
        out.push(oriented);

        (cursor, pen) = if *command == Command::Close {
            subpath_start
        } else {
            (end, placed)
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathBuilder;

    fn oriented(path: &Path, angle: f64, standoff: f64) -> String {
        orient(path, Angle::degrees(angle), standoff, 2).to_compact_string()
    }

    #[test]
    fn quarter_turn_maps_x_onto_y() {
        let r = Rotation::new(Angle::degrees(90.0));
        let p = r.apply(dvec2(1.0, 0.0));
        assert!((p.x).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn axis_commands_become_lines() {
        let square = PathBuilder::new().m(5.0, 5.0).h(-5.0).v(-5.0).h(5.0).z().build();
        assert_eq!(oriented(&square, 90.0, 0.0), "M-5,5L-5,-5L5,-5L5,5Z");
    }

    #[test]
    fn relative_axis_commands_stay_relative() {
        let path = PathBuilder::new().m(0.0, 0.0).h_by(2.0).v_by(3.0).build();
        assert_eq!(oriented(&path, 90.0, 0.0), "M0,0l0,2l-3,0");
    }

    #[test]
    fn standoff_is_applied_before_rotation() {
        let path = PathBuilder::new().m(0.0, 0.0).l(1.0, 0.0).build();
        assert_eq!(oriented(&path, 90.0, 2.0), "M-2,0L-2,1");
    }

    #[test]
    fn relative_moves_ignore_standoff() {
        let path = PathBuilder::new().m(1.0, 1.0).l_by(1.0, 0.0).build();
        assert_eq!(oriented(&path, 180.0, 4.0), "M-1,-5l-1,0");
    }

    #[test]
    fn arcs_rotate_endpoint_and_axis() {
        let path = PathBuilder::new()
            .m(10.0, 0.0)
            .a(10.0, 5.0, 15.0, true, false, 0.0, -10.0)
            .build();
        assert_eq!(oriented(&path, 90.0, 0.0), "M0,10A10,5,105,1,0,10,0");
    }

    #[test]
    fn leading_relative_move_carries_standoff() {
        let path = PathBuilder::new().m_by(1.0, 1.0).l_by(1.0, 0.0).build();
        assert_eq!(oriented(&path, 90.0, 2.0), "m-3,1l0,1");

        let path = PathBuilder::new().m_by(0.0, 5.0).build();
        assert_eq!(oriented(&path, 0.0, 3.0), "m0,8");
    }

    #[test]
    fn relative_arcs_rotate_their_displacement() {
        let path = PathBuilder::new()
            .m(10.0, 0.0)
            .a_by(10.0, 10.0, 0.0, false, true, -10.0, -10.0)
            .build();
        assert_eq!(oriented(&path, 90.0, 0.0), "M0,10a10,10,90,0,1,10,-10");
        assert_eq!(oriented(&path, 0.0, 2.0), "M10,2a10,10,0,0,1,-10,-10");
    }

    #[test]
    fn relative_runs_stay_within_one_rounding_step() {
        use crate::symbol::shapes::{Outline, X};

        let outline = X.outline(10.0);
        for degrees in [17.0, 90.0, 160.0, 233.0] {
            let rotation = Rotation::new(Angle::degrees(degrees));
            let oriented = orient(&outline, Angle::degrees(degrees), 0.0, 2);

            let (mut src, mut dst) = (DVec2::ZERO, DVec2::ZERO);
            for (input, output) in outline.iter().zip(oriented.iter()) {
                if *input == Command::Close {
                    continue;
                }
                src = input.endpoint(src);
                dst = output.endpoint(dst);
                let exact = rotation.apply(src);
                let error = (dst - exact).abs().max_element();
                assert!(error <= 0.005 + 1e-9, "{degrees} deg: {dst} vs {exact}");
            }
        }
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let path = PathBuilder::new()
            .m(1.0, 0.0)
            .l(2.0, 0.0)
            .z()
            .m_by(0.0, 1.0)
            .build();
        // After Z the cursor is back at (1, 0), so m0,1 lands on (1, 1)
        assert_eq!(oriented(&path, 90.0, 0.0), "M0,1L0,2Zm-1,0");
    }

    #[test]
    fn coordinates_use_requested_precision() {
        let path = PathBuilder::new().m(1.0, 0.0).build();
        assert_eq!(orient(&path, Angle::degrees(30.0), 0.0, 3).to_compact_string(), "M0.866,0.5");
        assert_eq!(orient(&path, Angle::degrees(30.0), 0.0, 1).to_compact_string(), "M0.9,0.5");
    }
}

//! Strongly-typed numeric primitives (zero-cost newtypes).

/// Angle in degrees, as marker rotations are given:
/// positive values turn +x toward +y.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn degrees(val: f64) -> Angle {
        Angle(val)
    }

    /// Get the raw value in degrees
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// True for 0 and every whole multiple of 360 degrees.
    #[inline]
    pub fn is_full_turn(self) -> bool {
        self.0 % 360.0 == 0.0
    }
}

//! Discretized angles.
//!
//! Direction buckets are too coarse to detect curvature changes or nearly
//! collinear points, so those tests use angles quantized to 512 steps per
//! turn.

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Number of angle units in a half turn.
pub const ANGLE_PI: i32 = 256;

/// Number of angle units in a full turn.
pub const ANGLE_2PI: i32 = ANGLE_PI * 2;

/// An angle in the range `(-ANGLE_PI, ANGLE_PI]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
pub struct Angle(i32);

impl Angle {
    /// Computes the angle of the vector `(dx, dy)`.
    ///
    /// The zero vector has an angle of zero. Callers that need to tell
    /// it apart should check for coincident points first.
    pub fn from_vector(dx: i32, dy: i32) -> Self {
        if dx == 0 && dy == 0 {
            return Self(0);
        }
        let radians = (dy as f64).atan2(dx as f64);
        let units = (radians * ANGLE_PI as f64 / core::f64::consts::PI).round() as i32;
        // atan2 covers [-pi, pi]; fold the lower bound so that equal
        // directions always compare equal
        if units <= -ANGLE_PI {
            Self(ANGLE_PI)
        } else {
            Self(units)
        }
    }

    pub fn to_units(self) -> i32 {
        self.0
    }

    /// Returns the signed difference `other - self` normalized to
    /// `(-ANGLE_PI, ANGLE_PI]`.
    pub fn diff(self, other: Self) -> i32 {
        let mut delta = (other.0 - self.0) % ANGLE_2PI;
        if delta < 0 {
            delta += ANGLE_2PI;
        }
        if delta > ANGLE_PI {
            delta -= ANGLE_2PI;
        }
        delta
    }
}

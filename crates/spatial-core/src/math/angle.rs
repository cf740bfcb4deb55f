// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f64::consts::PI;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::trig;

/// A geometric angle stored canonically in radians.
///
/// Degrees are a derived view (`radians · 180/π`). Every trig call routes
/// through [`trig`], so results do not depend on the platform libm.
///
/// # Examples
/// ```
/// use spatial_core::Angle;
/// let right = Angle::from_degrees(90.0);
/// assert!((right.radians() - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// assert!((right.sin() - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self::from_radians(0.0);

    /// Creates an angle from radians.
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees * PI / 180.0)
    }

    /// The angle in radians.
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// The angle in degrees.
    pub fn degrees(self) -> f64 {
        self.radians * 180.0 / PI
    }

    /// Returns the equivalent angle in (−π, π]; non-finite angles become zero.
    pub fn normalized(self) -> Self {
        Self::from_radians(trig::normalize(self.radians))
    }

    /// `true` if the radian value is finite.
    pub fn is_finite(self) -> bool {
        self.radians.is_finite()
    }

    /// `true` if the radian value is `NaN` (the domain-error sentinel).
    pub fn is_nan(self) -> bool {
        self.radians.is_nan()
    }

    /// Sine of the angle.
    pub fn sin(self) -> f64 {
        trig::sin(self.radians)
    }

    /// Cosine of the angle.
    pub fn cos(self) -> f64 {
        trig::cos(self.radians)
    }

    /// `(sin, cos)` of the angle.
    pub fn sin_cos(self) -> (f64, f64) {
        trig::sin_cos(self.radians)
    }

    /// Tangent of the angle.
    pub fn tan(self) -> f64 {
        trig::tan(self.radians)
    }

    /// Inverse sine; `NaN` angle when `|x| > 1`.
    pub fn asin(x: f64) -> Self {
        Self::from_radians(trig::asin(x))
    }

    /// Inverse cosine; `NaN` angle when `|x| > 1`.
    pub fn acos(x: f64) -> Self {
        Self::from_radians(trig::acos(x))
    }

    /// Inverse tangent.
    pub fn atan(x: f64) -> Self {
        Self::from_radians(trig::atan(x))
    }

    /// Four-quadrant inverse tangent of `y / x`.
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_radians(trig::atan2(y, x))
    }

    /// Inverse hyperbolic sine.
    pub fn asinh(x: f64) -> Self {
        Self::from_radians(trig::asinh(x))
    }

    /// Inverse hyperbolic cosine; `NaN` angle when `x < 1`.
    pub fn acosh(x: f64) -> Self {
        Self::from_radians(trig::acosh(x))
    }

    /// Inverse hyperbolic tangent; `NaN` angle when `|x| ≥ 1`.
    pub fn atanh(x: f64) -> Self {
        Self::from_radians(trig::atanh(x))
    }
}

/// Interprets the value as radians.
impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Self::from_radians(radians)
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.radians * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.radians / rhs)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::constants::EPSILON;
use crate::error::{checked_component, Result};
use crate::math::{trig, AffineTransform, Quat, Size3};
use crate::traits::{Primitive, Rotatable, Scalable, Transformable, Translatable};

/// Direction / displacement vector in 3D.
///
/// * Transforms ignore translation (homogeneous `w = 0`); use
///   [`crate::Point3`] for positions.
/// * Lengths go through [`trig::sqrt`], never the platform `sqrt`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along +Y.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along −Y.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Unit vector pointing along −X.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// Unit vector pointing along +X.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along +Z.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Unit vector pointing along −Z.
    pub const BACKWARD: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Component at `index` (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    /// [`crate::SpatialError::IndexOutOfRange`] for `index >= 3`.
    pub fn component(&self, index: usize) -> Result<f64> {
        checked_component(&self.data, index)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(&self) -> f64 {
        trig::sqrt(self.length_squared())
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        *self / len
    }

    /// Projection of `self` onto `other`; zero when `other` has zero length.
    pub fn projected(&self, other: &Self) -> Self {
        let denom = other.length_squared();
        if denom == 0.0 {
            return Self::ZERO;
        }
        *other * (self.dot(other) / denom)
    }

    /// Reflection of `self` about a plane with the given unit `normal`.
    pub fn reflected(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// `true` when every component is within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// [`Self::approx_eq`] at the crate default tolerance, [`EPSILON`].
    pub fn near(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:?}, y: {:?}, z: {:?})", self.x(), self.y(), self.z())
    }
}

/// Converts a 3-element `[f64; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use spatial_core::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x() / rhs, self.y() / rhs, self.z() / rhs)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl Primitive for Vec3 {
    fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    fn is_nan(&self) -> bool {
        self.data.iter().any(|c| c.is_nan())
    }

    fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    fn zero() -> Self {
        Self::ZERO
    }

    fn infinity() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY, f64::INFINITY)
    }
}

/// Direction semantics: the translation column does not contribute.
impl Transformable for Vec3 {
    fn applying(&self, transform: &AffineTransform) -> Self {
        transform.transform_direction(self)
    }
}

impl Scalable for Vec3 {
    fn scaled(&self, size: Size3) -> Self {
        Self::new(
            self.x() * size.width(),
            self.y() * size.height(),
            self.z() * size.depth(),
        )
    }

    fn uniformly_scaled(&self, factor: f64) -> Self {
        *self * factor
    }
}

impl Translatable for Vec3 {
    fn translated(&self, offset: Vec3) -> Self {
        *self + offset
    }
}

impl Rotatable for Vec3 {
    fn rotated(&self, rotation: &Quat) -> Self {
        rotation.rotate_vector(self)
    }
}

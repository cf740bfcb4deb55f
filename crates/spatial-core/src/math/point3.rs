// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::constants::EPSILON;
use crate::error::{checked_component, Result};
use crate::math::{AffineTransform, Quat, Size3, Vec3};
use crate::traits::{Primitive, Rotatable, Scalable, Transformable, Translatable};

/// Position in 3D space.
///
/// Transforms apply the full homogeneous product (`w = 1`), so translation
/// contributes; rotations pivot about the origin.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3 {
    data: [f64; 3],
}

impl Point3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a point from coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// X coordinate.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y coordinate.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z coordinate.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the coordinates as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Coordinate at `index` (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    /// [`crate::SpatialError::IndexOutOfRange`] for `index >= 3`.
    pub fn component(&self, index: usize) -> Result<f64> {
        checked_component(&self.data, index)
    }

    /// Squared distance from the origin.
    pub fn magnitude_squared(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y() + self.z() * self.z()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    /// `true` when every coordinate is within `tolerance` of `other`'s.
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

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        )
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:?}, y: {:?}, z: {:?})", self.x(), self.y(), self.z())
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for Point3 {
    fn from(value: Vec3) -> Self {
        Self::from(value.to_array())
    }
}

impl From<Size3> for Point3 {
    fn from(value: Size3) -> Self {
        Self::new(value.width(), value.height(), value.depth())
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;
    fn add(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl AddAssign<Vec3> for Point3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Add<Size3> for Point3 {
    type Output = Self;
    fn add(self, rhs: Size3) -> Self::Output {
        Self::new(
            self.x() + rhs.width(),
            self.y() + rhs.height(),
            self.z() + rhs.depth(),
        )
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Self;
    fn sub(self, rhs: Vec3) -> Self::Output {
        self + (-rhs)
    }
}

impl SubAssign<Vec3> for Point3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Sub<Size3> for Point3 {
    type Output = Self;
    fn sub(self, rhs: Size3) -> Self::Output {
        Self::new(
            self.x() - rhs.width(),
            self.y() - rhs.height(),
            self.z() - rhs.depth(),
        )
    }
}

/// Displacement from `rhs` to `self`.
impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Mul<f64> for Point3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl MulAssign<f64> for Point3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Point3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x() / rhs, self.y() / rhs, self.z() / rhs)
    }
}

impl DivAssign<f64> for Point3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Primitive for Point3 {
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

impl Transformable for Point3 {
    fn applying(&self, transform: &AffineTransform) -> Self {
        transform.transform_point(self)
    }
}

impl Scalable for Point3 {
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

impl Translatable for Point3 {
    fn translated(&self, offset: Vec3) -> Self {
        *self + offset
    }
}

impl Rotatable for Point3 {
    fn rotated(&self, rotation: &Quat) -> Self {
        Self::from(rotation.rotate_vector(&Vec3::from(self.data)))
    }
}

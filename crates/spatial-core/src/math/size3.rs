// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{checked_component, Result};
use crate::math::Vec3;
use crate::traits::{Primitive, Scalable};

/// Extent along each axis (width = x, height = y, depth = z).
///
/// A size has neither orientation nor position, so it deliberately does not
/// implement [`crate::Transformable`] or [`crate::Rotatable`]: applying an
/// affine transform to a size is rejected at compile time.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size3 {
    data: [f64; 3],
}

impl Size3 {
    /// Zero extent.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit extent on every axis.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a size from its extents.
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            data: [width, height, depth],
        }
    }

    /// Same extent on every axis.
    pub const fn uniform(extent: f64) -> Self {
        Self::new(extent, extent, extent)
    }

    /// Extent along x.
    pub const fn width(&self) -> f64 {
        self.data[0]
    }

    /// Extent along y.
    pub const fn height(&self) -> f64 {
        self.data[1]
    }

    /// Extent along z.
    pub const fn depth(&self) -> f64 {
        self.data[2]
    }

    /// Returns the extents as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Extent at `index` (0 = width, 1 = height, 2 = depth).
    ///
    /// # Errors
    /// [`crate::SpatialError::IndexOutOfRange`] for `index >= 3`.
    pub fn component(&self, index: usize) -> Result<f64> {
        checked_component(&self.data, index)
    }

    /// Component-wise minimum, or `None` if any resulting extent is negative.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let out = Self::new(
            self.width().min(other.width()),
            self.height().min(other.height()),
            self.depth().min(other.depth()),
        );
        out.data.iter().all(|c| *c >= 0.0).then_some(out)
    }
}

impl fmt::Display for Size3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(width: {:?}, height: {:?}, depth: {:?})",
            self.width(),
            self.height(),
            self.depth()
        )
    }
}

impl From<[f64; 3]> for Size3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for Size3 {
    fn from(value: Vec3) -> Self {
        Self::from(value.to_array())
    }
}

impl Add for Size3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.width() + rhs.width(),
            self.height() + rhs.height(),
            self.depth() + rhs.depth(),
        )
    }
}

impl AddAssign for Size3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Size3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.width() - rhs.width(),
            self.height() - rhs.height(),
            self.depth() - rhs.depth(),
        )
    }
}

impl SubAssign for Size3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Size3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.width() * rhs, self.height() * rhs, self.depth() * rhs)
    }
}

impl MulAssign<f64> for Size3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Size3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.width() / rhs, self.height() / rhs, self.depth() / rhs)
    }
}

impl DivAssign<f64> for Size3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Primitive for Size3 {
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
        Self::uniform(f64::INFINITY)
    }
}

impl Scalable for Size3 {
    fn scaled(&self, size: Size3) -> Self {
        Self::new(
            self.width() * size.width(),
            self.height() * size.height(),
            self.depth() * size.depth(),
        )
    }

    fn uniformly_scaled(&self, factor: f64) -> Self {
        *self * factor
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use crate::constants::EPSILON;
use crate::error::{Result, SpatialError};
use crate::math::{trig, Angle, Point3, Quat, Size3, Vec3};
use crate::traits::{Rotatable, Scalable, Translatable};

/// Row‑major 4×4 affine transform over `f64`.
///
/// - Column‑vector convention: a point maps as `M · (x, y, z, 1)` and the
///   translation occupies the last column.
/// - `a * b` applies `b` first, then `a`.
/// - No perspective divide is ever performed.
///
/// # Examples
/// ```
/// use spatial_core::{AffineTransform, Point3};
/// let a = AffineTransform::translation(1.0, 0.0, 0.0);
/// let b = AffineTransform::uniform_scale(2.0);
/// let p = Point3::new(1.0, 0.0, 0.0);
/// assert_eq!((a * b).transform_point(&p), Point3::new(3.0, 0.0, 0.0));
/// assert_eq!((b * a).transform_point(&p), Point3::new(4.0, 0.0, 0.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform {
    data: [f64; 16],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ])
    }

    /// Creates a transform from 16 row‑major values.
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Creates a transform from four rows.
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new([
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3],
        ])
    }

    /// Returns the four rows.
    pub fn to_rows(self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (row, out) in rows.iter_mut().enumerate() {
            out.copy_from_slice(&self.data[row * 4..row * 4 + 4]);
        }
        rows
    }

    /// Returns the 16 row‑major values.
    pub const fn to_array(self) -> [f64; 16] {
        self.data
    }

    /// Builds a translation; the offset lands in the last column.
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new([
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a non‑uniform scale.
    pub const fn scaling(x: f64, y: f64, z: f64) -> Self {
        Self::new([
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a uniform scale.
    pub const fn uniform_scale(factor: f64) -> Self {
        Self::scaling(factor, factor, factor)
    }

    /// Builds the rotation represented by `q` (normalised first).
    pub fn rotation(q: &Quat) -> Self {
        let [r0, r1, r2] = q.rotation_rows();
        Self::from_rows([
            [r0[0], r0[1], r0[2], 0.0],
            [r1[0], r1[1], r1[2], 0.0],
            [r2[0], r2[1], r2[2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Same as [`AffineTransform::rotation`].
    pub fn from_quat(q: &Quat) -> Self {
        Self::rotation(q)
    }

    /// Rotation about +X.
    pub fn rotation_x(angle: Angle) -> Self {
        let (s, c) = trig::sin_cos(angle.radians());
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Y.
    pub fn rotation_y(angle: Angle) -> Self {
        let (s, c) = trig::sin_cos(angle.radians());
        Self::new([
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Z.
    pub fn rotation_z(angle: Angle) -> Self {
        let (s, c) = trig::sin_cos(angle.radians());
        Self::new([
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * 4 + col]
    }

    fn checked_offset(row: usize, col: usize) -> Result<usize> {
        for index in [row, col] {
            if index >= 4 {
                return Err(SpatialError::IndexOutOfRange { index, len: 4 });
            }
        }
        Ok(row * 4 + col)
    }

    /// Element at `(row, col)`.
    ///
    /// # Errors
    /// [`SpatialError::IndexOutOfRange`] when `row` or `col` is 4 or more.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self.data[Self::checked_offset(row, col)?])
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Errors
    /// [`SpatialError::IndexOutOfRange`] when `row` or `col` is 4 or more;
    /// the transform is left untouched.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let offset = Self::checked_offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// `true` when every element equals the identity exactly.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Matrix product `self * rhs`; `rhs` is applied first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        Self::new(out)
    }

    /// Applies the transform to a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let [x, y, z] = self.apply_homogeneous(point.to_array(), 1.0);
        Point3::new(x, y, z)
    }

    /// Applies the transform to a direction (`w = 0`): translation is ignored.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        Vec3::from(self.apply_homogeneous(direction.to_array(), 0.0))
    }

    fn apply_homogeneous(&self, [x, y, z]: [f64; 3], w: f64) -> [f64; 3] {
        let row = |r: usize| {
            self.at(r, 0) * x + self.at(r, 1) * y + self.at(r, 2) * z + self.at(r, 3) * w
        };
        [row(0), row(1), row(2)]
    }

    /// `true` when every element is within `tolerance` of `other`'s.
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

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for col in 0..4 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let v = self.at(row, col);
                if v.is_sign_negative() {
                    write!(f, "{v:.4}")?;
                } else {
                    write!(f, " {v:.4}")?;
                }
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl From<[[f64; 4]; 4]> for AffineTransform {
    fn from(value: [[f64; 4]; 4]) -> Self {
        Self::from_rows(value)
    }
}

impl From<[f64; 16]> for AffineTransform {
    fn from(value: [f64; 16]) -> Self {
        Self::new(value)
    }
}

impl From<Quat> for AffineTransform {
    fn from(value: Quat) -> Self {
        Self::rotation(&value)
    }
}

impl Mul for AffineTransform {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&AffineTransform> for AffineTransform {
    type Output = Self;
    fn mul(self, rhs: &AffineTransform) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for AffineTransform {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// `m * p` is [`AffineTransform::transform_point`] (translation applies).
impl Mul<Point3> for AffineTransform {
    type Output = Point3;
    fn mul(self, rhs: Point3) -> Self::Output {
        self.transform_point(&rhs)
    }
}

/// `m * v` is [`AffineTransform::transform_direction`] (translation ignored).
impl Mul<Vec3> for AffineTransform {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform_direction(&rhs)
    }
}

impl Scalable for AffineTransform {
    fn scaled(&self, size: Size3) -> Self {
        Self::scaling(size.width(), size.height(), size.depth()) * *self
    }

    fn uniformly_scaled(&self, factor: f64) -> Self {
        Self::uniform_scale(factor) * *self
    }
}

impl Translatable for AffineTransform {
    fn translated(&self, offset: Vec3) -> Self {
        Self::translation(offset.x(), offset.y(), offset.z()) * *self
    }
}

impl Rotatable for AffineTransform {
    fn rotated(&self, rotation: &Quat) -> Self {
        Self::rotation(rotation) * *self
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f64::consts::FRAC_PI_2;
use core::fmt;
use core::ops::{Add, Mul, MulAssign, Neg, Sub};

use tracing::trace;

use crate::constants::{EPSILON, SLERP_LINEAR_THRESHOLD};
use crate::error::{checked_component, Result};
use crate::math::{trig, AffineTransform, Angle, EulerAngles, EulerOrder, Vec3};
use crate::traits::{Primitive, Transformable};

/// Above this |sin| of the middle angle, order-aware extraction treats the
/// rotation as gimbal-locked.
const GIMBAL_LOCK_THRESHOLD: f64 = 0.999_999_9;

/// Quaternion stored as `(x, y, z, w)`; `w` is the scalar part.
///
/// * All angles are radians and every trig call goes through [`trig`].
/// * Rotation helpers normalise their input, so callers may pass
///   non-unit quaternions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f64; 4],
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// All-zero quaternion (not a rotation).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
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

    /// Scalar component.
    pub const fn w(&self) -> f64 {
        self.data[3]
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [f64; 4] {
        self.data
    }

    /// Component at `index` (0 = x, 1 = y, 2 = z, 3 = w).
    ///
    /// # Errors
    /// [`crate::SpatialError::IndexOutOfRange`] for `index >= 4`.
    pub fn component(&self, index: usize) -> Result<f64> {
        checked_component(&self.data, index)
    }

    /// Constructs a quaternion from a rotation axis and angle.
    ///
    /// `axis` is usually a [`RotationAxis`](crate::RotationAxis); any
    /// `Into<Vec3>` works. The axis is normalised first; a zero axis yields
    /// the identity.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use spatial_core::{Angle, Quat, RotationAxis, Vec3};
    /// let q = Quat::from_axis_angle(Angle::from_radians(FRAC_PI_2), RotationAxis::Y);
    /// let v = q.rotate_vector(&Vec3::RIGHT);
    /// assert!(v.approx_eq(&Vec3::new(0.0, 0.0, -1.0), 1e-12));
    ///
    /// // A bare direction vector names the same axis.
    /// let same = Quat::from_axis_angle(Angle::from_radians(FRAC_PI_2), Vec3::UP);
    /// assert_eq!(q, same);
    /// ```
    pub fn from_axis_angle(angle: Angle, axis: impl Into<Vec3>) -> Self {
        let axis = axis.into().normalized();
        if axis.length_squared() == 0.0 {
            trace!(?angle, "zero rotation axis; returning identity");
            return Self::identity();
        }
        let (s, c) = trig::sin_cos(angle.radians() * 0.5);
        Self::new(axis.x() * s, axis.y() * s, axis.z() * s, c)
    }

    /// Converts Euler angles using half-angle sines/cosines.
    ///
    /// `Xyz` composes `qx · qy · qz`, `Zxy` composes `qz · qx · qy`; the two
    /// produce different sign arrangements for the same angle values.
    pub fn from_euler(angles: &EulerAngles) -> Self {
        let (sx, cx) = trig::sin_cos(angles.x().radians() * 0.5);
        let (sy, cy) = trig::sin_cos(angles.y().radians() * 0.5);
        let (sz, cz) = trig::sin_cos(angles.z().radians() * 0.5);
        match angles.order() {
            EulerOrder::Xyz => Self::new(
                sx * cy * cz + cx * sy * sz,
                cx * sy * cz - sx * cy * sz,
                cx * cy * sz + sx * sy * cz,
                cx * cy * cz - sx * sy * sz,
            ),
            EulerOrder::Zxy => Self::new(
                sx * cy * cz - cx * sy * sz,
                cx * sy * cz + sx * cy * sz,
                cx * cy * sz + sx * sy * cz,
                cx * cy * cz - sx * sy * sz,
            ),
        }
    }

    /// Dot product of the four components.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f64 {
        trig::sqrt(self.length_squared())
    }

    /// Negates the vector part. Equals the inverse only for unit quaternions.
    pub const fn conjugated(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], self.data[3])
    }

    /// Multiplicative inverse, `conjugated() / length²`.
    ///
    /// A zero quaternion is returned unchanged.
    pub fn inverted(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            trace!("inverting a zero quaternion; returning it unchanged");
            return *self;
        }
        self.conjugated() * (1.0 / len_sq)
    }

    /// Unit quaternion in the same direction; a zero quaternion is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            trace!("normalizing a zero quaternion; returning it unchanged");
            return *self;
        }
        *self * (1.0 / len)
    }

    /// Hamilton product (`self * other`).
    ///
    /// Operand order matters: the result applies `other` first, then `self`.
    /// Quaternion multiplication is non‑commutative.
    ///
    /// # Examples
    /// ```
    /// use spatial_core::Quat;
    /// let a = Quat::new(1.0, 2.0, 3.0, 4.0);
    /// let b = Quat::new(5.0, 6.0, 7.0, 8.0);
    /// assert_eq!(a.multiply(&b).to_array(), [24.0, 48.0, 48.0, -6.0]);
    /// assert_ne!(a.multiply(&b), b.multiply(&a));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `v` by this quaternion (normalised first).
    pub fn rotate_vector(&self, v: &Vec3) -> Vec3 {
        let q = self.normalized();
        let u = Vec3::new(q.x(), q.y(), q.z());
        let uv = u.cross(v);
        let uuv = u.cross(&uv);
        *v + uv * (2.0 * q.w()) + uuv * 2.0
    }

    /// Extracts pitch/yaw/roll (returned with [`EulerOrder::Xyz`]).
    ///
    /// Normalises first. Pitch is `atan2(2(wx+yz), 1−2(x²+y²))`, yaw is
    /// `asin(2(wy−zx))` clamped to ±π/2 once the argument reaches ±1 (gimbal
    /// lock), roll is `atan2(2(wz+xy), 1−2(y²+z²))`. Use
    /// [`Quat::euler_angles_in`] for the exact inverse of [`Quat::from_euler`].
    pub fn euler_angles(&self) -> EulerAngles {
        let [x, y, z, w] = self.normalized().data;
        let pitch = trig::atan2(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y));
        let sin_yaw = 2.0 * (w * y - z * x);
        let yaw = if sin_yaw.abs() >= 1.0 {
            trace!(sin_yaw, "gimbal lock; clamping yaw");
            FRAC_PI_2.copysign(sin_yaw)
        } else {
            trig::asin(sin_yaw)
        };
        let roll = trig::atan2(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z));
        EulerAngles::from_radians(pitch, yaw, roll, EulerOrder::Xyz)
    }

    /// Extracts Euler angles for `order` such that
    /// `Quat::from_euler(&q.euler_angles_in(order))` reproduces the rotation.
    ///
    /// When the middle rotation sits at ±90° the last angle is pinned to zero
    /// and its freedom folded into the first.
    pub fn euler_angles_in(&self, order: EulerOrder) -> EulerAngles {
        let m = self.rotation_rows();
        let (ax, ay, az) = match order {
            EulerOrder::Xyz => {
                let s = m[0][2].clamp(-1.0, 1.0);
                let y = trig::asin(s);
                if s.abs() < GIMBAL_LOCK_THRESHOLD {
                    (
                        trig::atan2(-m[1][2], m[2][2]),
                        y,
                        trig::atan2(-m[0][1], m[0][0]),
                    )
                } else {
                    trace!(?order, "gimbal lock; pinning z to zero");
                    (trig::atan2(m[2][1], m[1][1]), y, 0.0)
                }
            }
            EulerOrder::Zxy => {
                let s = m[2][1].clamp(-1.0, 1.0);
                let x = trig::asin(s);
                if s.abs() < GIMBAL_LOCK_THRESHOLD {
                    (
                        x,
                        trig::atan2(-m[2][0], m[2][2]),
                        trig::atan2(-m[0][1], m[1][1]),
                    )
                } else {
                    trace!(?order, "gimbal lock; pinning y to zero");
                    (x, 0.0, trig::atan2(m[1][0], m[0][0]))
                }
            }
        };
        EulerAngles::from_radians(ax, ay, az, order)
    }

    /// 3×3 rotation block (row-major, column-vector convention) of the
    /// normalised quaternion.
    pub(crate) fn rotation_rows(&self) -> [[f64; 3]; 3] {
        let [x, y, z, w] = self.normalized().data;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        [
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ]
    }

    /// The rotation as a 4×4 affine transform.
    pub fn to_transform(&self) -> AffineTransform {
        AffineTransform::rotation(self)
    }

    /// Spherical linear interpolation from `a` (t = 0) to `b` (t = 1) along
    /// the shorter arc.
    ///
    /// Both inputs are normalised. Nearly parallel inputs (cosine above
    /// [`SLERP_LINEAR_THRESHOLD`]) fall back to a normalised linear blend so
    /// the general branch never divides by a vanishing sine. The result is
    /// renormalised.
    pub fn slerp(a: &Self, b: &Self, t: f64) -> Self {
        let a = a.normalized();
        let mut b = b.normalized();
        let mut dot = a.dot(&b);
        if dot < 0.0 {
            b = -b;
            dot = -dot;
        }
        if dot > SLERP_LINEAR_THRESHOLD {
            trace!(dot, t, "slerp inputs nearly parallel; using lerp");
            return (a + (b - a) * t).normalized();
        }
        let theta0 = trig::acos(dot);
        let theta = theta0 * t;
        let (sin_theta, cos_theta) = trig::sin_cos(theta);
        let sin_theta0 = trig::sin(theta0);
        let s0 = cos_theta - dot * sin_theta / sin_theta0;
        let s1 = sin_theta / sin_theta0;
        (a * s0 + b * s1).normalized()
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

    /// `true` when both represent the same rotation (`q` and `−q` included).
    pub fn same_rotation(&self, other: &Self, tolerance: f64) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.approx_eq(&b, tolerance) || a.approx_eq(&-b, tolerance)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:?}, y: {:?}, z: {:?}, w: {:?})",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

/// Converts a 4‑element `[f64; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

impl From<EulerAngles> for Quat {
    fn from(value: EulerAngles) -> Self {
        Self::from_euler(&value)
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl Mul<f64> for Quat {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        let [x, y, z, w] = self.data;
        Self::new(x * rhs, y * rhs, z * rhs, w * rhs)
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = rhs.data;
        Self::new(ax + bx, ay + by, az + bz, aw + bw)
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, -w)
    }
}

impl Primitive for Quat {
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
        Self::new(f64::INFINITY, f64::INFINITY, f64::INFINITY, f64::INFINITY)
    }
}

/// Derives a quaternion from the transform's diagonal; `self` does not
/// participate.
///
/// `w = ½√(1+m00+m11+m22)`, `x = ½√(1+m00−m11−m22)`,
/// `y = ½√(1−m00+m11−m22)`, `z = ½√(1−m00−m11+m22)`.
///
/// Known limitation: the diagonal only fixes magnitudes, so the signs of
/// x/y/z are always non-negative. This is not a polar decomposition; use
/// [`Quat::euler_angles_in`] on a quaternion you already hold, or keep the
/// rotation as a quaternion, when signs matter.
impl Transformable for Quat {
    fn applying(&self, transform: &AffineTransform) -> Self {
        let m00 = transform.at(0, 0);
        let m11 = transform.at(1, 1);
        let m22 = transform.at(2, 2);
        let half_root = |radicand: f64| {
            if radicand < 0.0 {
                trace!(radicand, "negative radicand in transform diagonal; clamping");
            }
            0.5 * trig::sqrt(radicand.max(0.0))
        };
        Self::new(
            half_root(1.0 + m00 - m11 - m22),
            half_root(1.0 - m00 + m11 - m22),
            half_root(1.0 - m00 - m11 + m22),
            half_root(1.0 + m00 + m11 + m22),
        )
    }
}

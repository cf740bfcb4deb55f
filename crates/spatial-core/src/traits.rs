// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Capability contracts shared by every spatial value.
//!
//! Each trait has one required "return a new value" method; the mutating
//! counterparts are provided and all funnel through [`apply_in_place`], so
//! `x.op(args)` is always equivalent to `x = x.op_ed(args)`.

use crate::math::{AffineTransform, Point3, Quat, Size3, Vec3};

/// Replaces `value` with `f(value)`.
///
/// # Examples
/// ```
/// use spatial_core::traits::apply_in_place;
/// let mut n = 3.0_f64;
/// apply_in_place(&mut n, |v| v * 2.0);
/// assert_eq!(n, 6.0);
/// ```
pub fn apply_in_place<T: Copy>(value: &mut T, f: impl FnOnce(T) -> T) {
    *value = f(*value);
}

/// Basic numeric facts about a value.
pub trait Primitive: Copy + PartialEq {
    /// `true` when every component is finite.
    fn is_finite(&self) -> bool;
    /// `true` when any component is NaN.
    fn is_nan(&self) -> bool;
    /// `true` when every component is exactly zero.
    fn is_zero(&self) -> bool;
    /// The all-zero value.
    fn zero() -> Self;
    /// The all-infinite value.
    fn infinity() -> Self;
}

/// Values that can be carried through an [`AffineTransform`].
pub trait Transformable: Copy {
    /// Returns `self` with `transform` applied.
    fn applying(&self, transform: &AffineTransform) -> Self;

    /// Applies `transform` in place.
    fn apply(&mut self, transform: &AffineTransform) {
        apply_in_place(self, |v| v.applying(transform));
    }
}

/// Values that can be scaled per axis.
pub trait Scalable: Copy {
    /// Returns `self` scaled by `size` (width → x, height → y, depth → z).
    fn scaled(&self, size: Size3) -> Self;

    /// Returns `self` scaled by `factor` on every axis.
    fn uniformly_scaled(&self, factor: f64) -> Self;

    /// Scales in place by `size`.
    fn scale(&mut self, size: Size3) {
        apply_in_place(self, |v| v.scaled(size));
    }

    /// Scales in place by individual factors.
    fn scale_by(&mut self, x: f64, y: f64, z: f64) {
        self.scale(Size3::new(x, y, z));
    }

    /// Scales in place by `factor` on every axis.
    fn uniformly_scale(&mut self, factor: f64) {
        apply_in_place(self, |v| v.uniformly_scaled(factor));
    }
}

/// Values that can be moved by an offset.
pub trait Translatable: Copy {
    /// Returns `self` moved by `offset`.
    fn translated(&self, offset: Vec3) -> Self;

    /// Moves in place.
    fn translate(&mut self, offset: Vec3) {
        apply_in_place(self, |v| v.translated(offset));
    }
}

/// Values that can be rotated by a quaternion.
pub trait Rotatable: Copy {
    /// Returns `self` rotated by `rotation`.
    fn rotated(&self, rotation: &Quat) -> Self;

    /// Rotates in place.
    fn rotate(&mut self, rotation: &Quat) {
        apply_in_place(self, |v| v.rotated(rotation));
    }
}

/// Axis-aligned volumes: containment, intersection and union.
pub trait Volumetric: Copy {
    /// Extent of the volume.
    fn size(&self) -> Size3;

    /// `true` when `other` lies entirely inside `self`.
    fn contains(&self, other: &Self) -> bool;

    /// `true` when `point` lies inside `self` (boundaries inclusive).
    fn contains_point(&self, point: Point3) -> bool;

    /// `true` when any of `points` lies inside `self`; `false` for an empty slice.
    fn contains_any_of(&self, points: &[Point3]) -> bool {
        points.iter().any(|p| self.contains_point(*p))
    }

    /// Overlap of the two volumes, or `None` when they are disjoint.
    fn intersection(&self, other: &Self) -> Option<Self>;

    /// Smallest volume enclosing both.
    fn union(&self, other: &Self) -> Self;

    /// Replaces `self` with its intersection with `other`.
    ///
    /// Returns `false` and leaves `self` unchanged when they do not intersect.
    fn form_intersection(&mut self, other: &Self) -> bool {
        match self.intersection(other) {
            Some(overlap) => {
                *self = overlap;
                true
            }
            None => false,
        }
    }

    /// Replaces `self` with its union with `other`.
    fn form_union(&mut self, other: &Self) {
        apply_in_place(self, |v| v.union(other));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_in_place_replaces_value() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        apply_in_place(&mut v, |v| v * 2.0);
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn provided_transform_matches_applying() {
        let m = AffineTransform::translation(1.0, 2.0, 3.0);
        let mut p = Point3::new(1.0, 1.0, 1.0);
        let expected = p.applying(&m);
        p.apply(&m);
        assert_eq!(p, expected);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use spatial_core::{
    AffineTransform, Point3, Primitive, Quat, Rotatable, Scalable, Size3, Transformable,
    Translatable, Vec3, Volumetric,
};

/// Axis-aligned box described by its minimum corner and its extent.
///
/// Invariants:
/// - `min()` is `origin`, `max()` is `origin + size`.
/// - Extents may be negative; [`Rect3::standardized`] flips them.
/// - Containment and overlap tests are inclusive on faces.
///
/// # Examples
/// ```
/// use spatial_core::{Point3, Size3, Volumetric};
/// use spatial_geom::Rect3;
/// let a = Rect3::new(Point3::new(1.0, 2.0, 3.0), Size3::new(4.0, 5.0, 6.0));
/// let b = Rect3::new(Point3::new(2.0, 3.0, 4.0), Size3::new(3.0, 4.0, 5.0));
/// assert!(a.contains(&b));
/// assert_eq!(a.intersection(&b), Some(b));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect3 {
    origin: Point3,
    size: Size3,
}

impl Rect3 {
    /// Constructs a box from its minimum corner and extent.
    pub const fn new(origin: Point3, size: Size3) -> Self {
        Self { origin, size }
    }

    /// Builds a box of `size` centered at `center`.
    pub fn from_center(center: Point3, size: Size3) -> Self {
        Self::new(center - size / 2.0, size)
    }

    /// Smallest box enclosing all `points`; `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self::from_corners(min, max))
    }

    fn from_corners(min: Point3, max: Point3) -> Self {
        Self::new(min, Size3::from(max - min))
    }

    /// The minimum corner.
    pub const fn origin(&self) -> Point3 {
        self.origin
    }

    /// The extent along each axis.
    pub const fn size(&self) -> Size3 {
        self.size
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point3 {
        self.origin + self.size / 2.0
    }

    /// Corner with the smallest coordinates (the origin).
    pub const fn min(&self) -> Point3 {
        self.origin
    }

    /// Corner with the largest coordinates (`origin + size`).
    pub fn max(&self) -> Point3 {
        self.origin + self.size
    }

    /// The eight corners: the four at `min.z` counter-clockwise from the
    /// origin, then the same four at `max.z`.
    pub fn corner_points(&self) -> [Point3; 8] {
        let [x0, y0, z0] = self.min().to_array();
        let [x1, y1, z1] = self.max().to_array();
        [
            Point3::new(x0, y0, z0),
            Point3::new(x0, y1, z0),
            Point3::new(x1, y1, z0),
            Point3::new(x1, y0, z0),
            Point3::new(x0, y0, z1),
            Point3::new(x0, y1, z1),
            Point3::new(x1, y1, z1),
            Point3::new(x1, y0, z1),
        ]
    }

    /// Returns `true` if the boxes overlap (inclusive on faces).
    pub fn intersects(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min().to_array(), self.max().to_array());
        let (b_min, b_max) = (other.min().to_array(), other.max().to_array());
        (0..3).all(|i| b_min[i] <= a_max[i] && b_max[i] >= a_min[i])
    }

    /// `true` when any extent is zero.
    pub fn is_empty(&self) -> bool {
        self.size.to_array().iter().any(|c| *c == 0.0)
    }

    /// Origin floored and extents ceiled to whole numbers.
    pub fn integral(&self) -> Self {
        let [x, y, z] = self.origin.to_array();
        let [w, h, d] = self.size.to_array();
        Self::new(
            Point3::new(x.floor(), y.floor(), z.floor()),
            Size3::new(w.ceil(), h.ceil(), d.ceil()),
        )
    }

    /// Equivalent box with every extent non-negative.
    pub fn standardized(&self) -> Self {
        let mut origin = self.origin.to_array();
        let mut size = self.size.to_array();
        for (o, s) in origin.iter_mut().zip(size.iter_mut()) {
            if *s < 0.0 {
                *o += *s;
                *s = -*s;
            }
        }
        Self::new(Point3::from(origin), Size3::from(size))
    }

    /// Bounds of the corners after `map`.
    fn bounds_of_mapped_corners(&self, map: impl Fn(Point3) -> Point3) -> Self {
        let corners = self.corner_points();
        let first = map(corners[0]);
        let (min, max) = corners[1..].iter().fold((first, first), |(lo, hi), c| {
            let p = map(*c);
            (lo.min(&p), hi.max(&p))
        });
        Self::from_corners(min, max)
    }
}

impl fmt::Display for Rect3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(origin: {}, size: {})", self.origin, self.size)
    }
}

impl Primitive for Rect3 {
    fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    fn is_nan(&self) -> bool {
        self.origin.is_nan() || self.size.is_nan()
    }

    fn is_zero(&self) -> bool {
        self.origin.is_zero() && self.size.is_zero()
    }

    fn zero() -> Self {
        Self::default()
    }

    fn infinity() -> Self {
        Self::new(Point3::infinity(), Size3::infinity())
    }
}

/// Returns the axis-aligned bounds of the eight transformed corners.
impl Transformable for Rect3 {
    fn applying(&self, transform: &AffineTransform) -> Self {
        self.bounds_of_mapped_corners(|p| transform.transform_point(&p))
    }
}

impl Scalable for Rect3 {
    fn scaled(&self, size: Size3) -> Self {
        Self::new(self.origin.scaled(size), self.size.scaled(size))
    }

    fn uniformly_scaled(&self, factor: f64) -> Self {
        Self::new(
            self.origin.uniformly_scaled(factor),
            self.size.uniformly_scaled(factor),
        )
    }
}

impl Translatable for Rect3 {
    fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.origin.translated(offset), self.size)
    }
}

/// Rotates about the world origin and returns the axis-aligned bounds.
impl Rotatable for Rect3 {
    fn rotated(&self, rotation: &Quat) -> Self {
        self.bounds_of_mapped_corners(|p| p.rotated(rotation))
    }
}

impl Volumetric for Rect3 {
    fn size(&self) -> Size3 {
        self.size
    }

    fn contains(&self, other: &Self) -> bool {
        self.contains_point(other.min()) && self.contains_point(other.max())
    }

    fn contains_point(&self, point: Point3) -> bool {
        let (lo, hi) = (self.min().to_array(), self.max().to_array());
        let p = point.to_array();
        (0..3).all(|i| lo[i] <= p[i] && p[i] <= hi[i])
    }

    fn intersection(&self, other: &Self) -> Option<Self> {
        let min = self.min().max(&other.min());
        let max = self.max().min(&other.max());
        let disjoint = (0..3).any(|i| max.to_array()[i] < min.to_array()[i]);
        (!disjoint).then(|| Self::from_corners(min, max))
    }

    fn union(&self, other: &Self) -> Self {
        Self::from_corners(self.min().min(&other.min()), self.max().max(&other.max()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero_sized_at_origin() {
        let r = Rect3::default();
        assert_eq!(r.origin(), Point3::ZERO);
        assert_eq!(r.max(), Point3::ZERO);
        assert_eq!(r.center(), Point3::ZERO);
        assert!(r.is_empty());
        assert!(r.is_zero());
    }

    #[test]
    fn from_points_requires_input() {
        assert_eq!(Rect3::from_points(&[]), None);
        let r = Rect3::from_points(&[
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(-2.0, 3.0, 0.5),
        ]);
        assert_eq!(
            r,
            Some(Rect3::new(
                Point3::new(-2.0, -1.0, 0.0),
                Size3::new(3.0, 4.0, 0.5)
            ))
        );
    }

    #[test]
    fn display_shows_origin_and_size() {
        let r = Rect3::new(Point3::new(1.0, 2.0, 3.0), Size3::ONE);
        assert_eq!(
            r.to_string(),
            "(origin: (x: 1.0, y: 2.0, z: 3.0), size: (width: 1.0, height: 1.0, depth: 1.0))"
        );
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::error::{checked_component, Result};
use crate::math::Vec3;

/// Axis of rotation.
///
/// Not required to be unit length; [`crate::Quat::from_axis_angle`] and
/// other consumers normalise before use.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RotationAxis {
    data: [f64; 3],
}

impl RotationAxis {
    /// Degenerate zero axis.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// +X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// +Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// +Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    /// Diagonal of the XY plane.
    pub const XY: Self = Self::new(1.0, 1.0, 0.0);
    /// Diagonal of the YZ plane.
    pub const YZ: Self = Self::new(0.0, 1.0, 1.0);
    /// Diagonal of the XZ plane.
    pub const XZ: Self = Self::new(1.0, 0.0, 1.0);
    /// Space diagonal.
    pub const XYZ: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates an axis from components.
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

    /// Component at `index` (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    /// [`crate::SpatialError::IndexOutOfRange`] for `index >= 3`.
    pub fn component(&self, index: usize) -> Result<f64> {
        checked_component(&self.data, index)
    }

    /// `true` when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    /// The axis as a direction vector.
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Unit-length copy; the zero axis stays zero.
    pub fn normalized(&self) -> Self {
        Self::from(self.to_vec3().normalized())
    }
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:?}, y: {:?}, z: {:?})", self.x(), self.y(), self.z())
    }
}

impl From<Vec3> for RotationAxis {
    fn from(value: Vec3) -> Self {
        Self {
            data: value.to_array(),
        }
    }
}

impl From<RotationAxis> for Vec3 {
    fn from(value: RotationAxis) -> Self {
        value.to_vec3()
    }
}

impl From<[f64; 3]> for RotationAxis {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_diagonals() {
        let n = RotationAxis::XYZ.normalized();
        let expected = 1.0 / 3.0_f64.sqrt();
        assert!((n.x() - expected).abs() < 1e-12);
        assert!(RotationAxis::ZERO.normalized().is_zero());
    }

    #[test]
    fn index_past_z_fails() {
        assert_eq!(RotationAxis::Y.component(1), Ok(1.0));
        assert!(RotationAxis::Y.component(3).is_err());
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::math::{Angle, Quat};

/// Intrinsic composition order for [`EulerAngles`].
///
/// The order changes the sign pattern of the derived quaternion; the two
/// variants are not interchangeable.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    /// Rotate about X, then the new Y, then the new Z (`q = qx · qy · qz`).
    #[default]
    Xyz,
    /// Rotate about Z, then the new X, then the new Y (`q = qz · qx · qy`).
    Zxy,
}

impl EulerOrder {
    /// Every supported order.
    pub const ALL: [Self; 2] = [Self::Xyz, Self::Zxy];

    /// Lower-case label (`"xyz"`, `"zxy"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Zxy => "zxy",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three per-axis angles plus the order they are composed in.
///
/// * `x` is pitch, `y` is yaw, `z` is roll.
/// * Convert with [`Quat::from_euler`] / [`Quat::euler_angles_in`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EulerAngles {
    x: Angle,
    y: Angle,
    z: Angle,
    order: EulerOrder,
}

impl EulerAngles {
    /// Creates Euler angles from per-axis angles and an order.
    pub const fn new(x: Angle, y: Angle, z: Angle, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Creates Euler angles from per-axis radian values.
    pub const fn from_radians(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self::new(
            Angle::from_radians(x),
            Angle::from_radians(y),
            Angle::from_radians(z),
            order,
        )
    }

    /// Angle about the x-axis (pitch).
    pub const fn x(&self) -> Angle {
        self.x
    }

    /// Angle about the y-axis (yaw).
    pub const fn y(&self) -> Angle {
        self.y
    }

    /// Angle about the z-axis (roll).
    pub const fn z(&self) -> Angle {
        self.z
    }

    /// Composition order.
    pub const fn order(&self) -> EulerOrder {
        self.order
    }

    /// The three angles as `[x, y, z]`.
    pub const fn angles(&self) -> [Angle; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to a quaternion; shorthand for [`Quat::from_euler`].
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(self)
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:?}, y: {:?}, z: {:?}, order: {})",
            self.x.radians(),
            self.y.radians(),
            self.z.radians(),
            self.order
        )
    }
}

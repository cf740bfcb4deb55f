// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic math: series-based transcendental functions, angles,
//! quaternions, affine transforms and the 3D value types they act on.
//!
//! All values are `f64`. Degenerate inputs (zero axes, zero quaternions,
//! zero-length vectors) return a documented fallback instead of failing.

pub mod trig;

mod affine;
mod angle;
mod axis;
mod euler;
mod point3;
mod quat;
mod size3;
mod vec3;

pub use affine::AffineTransform;
pub use angle::Angle;
pub use axis::RotationAxis;
pub use euler::{EulerAngles, EulerOrder};
pub use point3::Point3;
pub use quat::Quat;
pub use size3::Size3;
pub use vec3::Vec3;

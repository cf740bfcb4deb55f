// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Series evaluators stop once the magnitude of the latest term drops below this.
pub const SERIES_EPSILON: f64 = 1e-15;

/// Upper bound on terms summed by any series evaluator.
///
/// Range reduction keeps every series well inside its radius of convergence,
/// so the early exit fires long before this cap.
pub const MAX_SERIES_TERMS: u32 = 50;

/// Upper bound on Newton iterations in [`crate::math::trig::sqrt`].
pub const SQRT_MAX_ITERATIONS: u32 = 20;

/// Above this cosine, `slerp` falls back to a normalised linear blend.
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

/// Tolerance behind the `near` helpers (`approx_eq` at a fixed tolerance) on
/// `Vec3`, `Point3`, `Quat` and `AffineTransform`.
pub const EPSILON: f64 = 1e-9;

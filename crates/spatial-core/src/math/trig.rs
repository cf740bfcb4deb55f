// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic trigonometric, inverse-trigonometric and hyperbolic backends
//! for `f64`.
//!
//! Nothing here calls platform transcendentals (`f64::{sin, cos, sqrt, ln}`),
//! whose last bits can vary across hardware/libm. Every function is a short
//! series or Newton iteration with a fixed term cap and an early exit once the
//! latest term falls below [`SERIES_EPSILON`].
//!
//! Strategy:
//! - `sin`/`cos`: reduce to (−π, π] with [`normalize`], then sum the Maclaurin
//!   series until it converges.
//! - `asin`/`acos`: Maclaurin series on |x| ≤ ½; larger inputs go through the
//!   half-angle identity so the series argument never exceeds ½.
//! - `atan`: reciprocal identity for |x| > 1, then two argument halvings so the
//!   alternating series sees |x| ≤ tan(π/16).
//! - `ln`: halve/double into [√½, √2), then `2·atanh((x−1)/(x+1))` as a series.
//! - inverse hyperbolics: the odd `atanh` series near zero, closed forms over
//!   `ln` and `sqrt` elsewhere.
//!
//! Domain violations return `NaN`; they never panic.

use core::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, LN_2, PI, SQRT_2, TAU};

use crate::constants::{MAX_SERIES_TERMS, SERIES_EPSILON, SQRT_MAX_ITERATIONS};

/// Argument halvings applied before the `atan` series.
const ATAN_HALVINGS: u32 = 2;

/// Above this magnitude `x² ± 1` is indistinguishable from `x²`; the inverse
/// hyperbolics switch to `ln(2x)` so the square does not overflow.
const HYPERBOLIC_LARGE: f64 = 1e150;

/// At or below this magnitude `asinh`/`atanh` use the odd series directly.
const HYPERBOLIC_SMALL: f64 = 0.5;

/// `2^54`, used to lift subnormals into the normal range for `sqrt`.
const TWO_POW_54: f64 = 18_014_398_509_481_984.0;

/// Canonicalizes signed zero (`-0.0`) to `+0.0` without affecting non-zero values.
#[inline]
pub(crate) fn canonicalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Reduces `value` radians into the half-open interval (−π, π].
///
/// Uses the truncated remainder by 2π followed by a single ±2π correction.
/// Non-finite input maps to `0.0`. The function is idempotent.
///
/// `TAU` is 2π rounded to `f64`; the remainder absorbs that rounding error once
/// per period, so for very large `|value|` (around `1e15` and beyond) the reduced
/// angle drifts away from the true one.
///
/// # Examples
/// ```
/// use core::f64::consts::PI;
/// use spatial_core::math::trig::normalize;
/// assert_eq!(normalize(0.5), 0.5);
/// assert_eq!(normalize(-PI), PI);
/// assert_eq!(normalize(f64::NAN), 0.0);
/// ```
pub fn normalize(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let mut r = value % TAU;
    if r > PI {
        r -= TAU;
    } else if r <= -PI {
        r += TAU;
    }
    canonicalize_zero(r)
}

fn sin_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..=MAX_SERIES_TERMS {
        let n = f64::from(n);
        term *= -x2 / ((2.0 * n) * (2.0 * n + 1.0));
        sum += term;
        if term.abs() < SERIES_EPSILON {
            break;
        }
    }
    sum
}

fn cos_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    for n in 1..=MAX_SERIES_TERMS {
        let n = f64::from(n);
        term *= -x2 / ((2.0 * n - 1.0) * (2.0 * n));
        sum += term;
        if term.abs() < SERIES_EPSILON {
            break;
        }
    }
    sum
}

/// Deterministic sine of `x` radians.
///
/// Non-finite input is treated as `0.0` (see [`normalize`]). Reduction divides
/// by the rounded `f64` value of 2π, so accuracy is only guaranteed for
/// moderate magnitudes (roughly `|x| < 1e6`); the error grows with `|x|`.
pub fn sin(x: f64) -> f64 {
    canonicalize_zero(sin_series(normalize(x)))
}

/// Deterministic cosine of `x` radians.
///
/// Non-finite input is treated as `0.0` (see [`normalize`]). Same accuracy
/// envelope as [`sin`]: reliable for moderate magnitudes only.
pub fn cos(x: f64) -> f64 {
    canonicalize_zero(cos_series(normalize(x)))
}

/// Deterministic `(sin, cos)` pair sharing one range reduction.
pub fn sin_cos(x: f64) -> (f64, f64) {
    let r = normalize(x);
    (
        canonicalize_zero(sin_series(r)),
        canonicalize_zero(cos_series(r)),
    )
}

/// Deterministic tangent, `sin(x) / cos(x)`.
///
/// Exact zeros of the cosine series produce ±∞ as IEEE division dictates.
pub fn tan(x: f64) -> f64 {
    let (s, c) = sin_cos(x);
    s / c
}

/// Maclaurin series for `asin` on `0 ≤ x ≤ ½`.
fn asin_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..=MAX_SERIES_TERMS {
        let n = f64::from(n);
        let odd = 2.0 * n - 1.0;
        term *= x2 * odd * odd / ((2.0 * n) * (2.0 * n + 1.0));
        sum += term;
        if term.abs() < SERIES_EPSILON {
            break;
        }
    }
    sum
}

/// Inverse sine in radians, range [−π/2, π/2].
///
/// Returns `NaN` when `|x| > 1` or `x` is `NaN`.
pub fn asin(x: f64) -> f64 {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return FRAC_PI_2;
    }
    if x == -1.0 {
        return -FRAC_PI_2;
    }
    let a = x.abs();
    let r = if a <= 0.5 {
        asin_series(a)
    } else {
        FRAC_PI_2 - 2.0 * asin_series(sqrt((1.0 - a) * 0.5))
    };
    if x < 0.0 {
        -r
    } else {
        r
    }
}

/// Inverse cosine in radians, range [0, π].
///
/// Returns `NaN` when `|x| > 1` or `x` is `NaN`.
pub fn acos(x: f64) -> f64 {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    if x == 1.0 {
        return 0.0;
    }
    if x == -1.0 {
        return PI;
    }
    if x == 0.0 {
        return FRAC_PI_2;
    }
    // Near ±1 the complement `π/2 − asin(x)` cancels; use the half-angle form.
    if x > 0.5 {
        2.0 * asin_series(sqrt((1.0 - x) * 0.5))
    } else if x < -0.5 {
        PI - 2.0 * asin_series(sqrt((1.0 + x) * 0.5))
    } else {
        FRAC_PI_2 - asin_series(x.abs()).copysign(x)
    }
}

/// Alternating Maclaurin series for `atan` on small non-negative input.
fn atan_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut power = x;
    let mut sum = x;
    for n in 1..=MAX_SERIES_TERMS {
        power *= -x2;
        let term = power / f64::from(2 * n + 1);
        sum += term;
        if term.abs() < SERIES_EPSILON {
            break;
        }
    }
    sum
}

/// `atan` on `0 ≤ x ≤ 1` via argument halving.
fn atan_unit(x: f64) -> f64 {
    let mut t = x;
    let mut scale = 1.0;
    for _ in 0..ATAN_HALVINGS {
        t /= 1.0 + sqrt(1.0 + t * t);
        scale *= 2.0;
    }
    scale * atan_series(t)
}

/// Inverse tangent in radians, range (−π/2, π/2).
///
/// ±∞ map to ±π/2; `NaN` propagates.
pub fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return FRAC_PI_4;
    }
    if x == -1.0 {
        return -FRAC_PI_4;
    }
    if x.is_infinite() {
        return FRAC_PI_2.copysign(x);
    }
    let a = x.abs();
    let r = if a > 1.0 {
        FRAC_PI_2 - atan_unit(1.0 / a)
    } else {
        atan_unit(a)
    };
    if x < 0.0 {
        -r
    } else {
        r
    }
}

/// Four-quadrant inverse tangent of `y / x` in radians, range (−π, π].
///
/// - `x = 0, y = 0` → `0`
/// - `x = 0` → `±π/2` following the sign of `y`
/// - `y = 0` → `0` for `x > 0`, `π` for `x < 0`
/// - otherwise `atan(y / x)` with a ±π quadrant correction when `x < 0`.
pub fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    if x == 0.0 {
        return if y > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }
    if y == 0.0 {
        return if x > 0.0 { 0.0 } else { PI };
    }
    let base = atan(y / x);
    if x > 0.0 {
        base
    } else if y >= 0.0 {
        base + PI
    } else {
        base - PI
    }
}

/// First Newton guess: halve the biased exponent so the estimate is within a
/// few percent of the root.
#[inline]
fn sqrt_estimate(x: f64) -> f64 {
    f64::from_bits((x.to_bits() >> 1) + (1023_u64 << 51))
}

/// Square root by Newton's method.
///
/// Returns `NaN` for negative or `NaN` input, `0.0` for ±0 and `+∞` for `+∞`.
///
/// # Examples
/// ```
/// use spatial_core::math::trig::sqrt;
/// assert_eq!(sqrt(4.0), 2.0);
/// assert!(sqrt(-1.0).is_nan());
/// ```
pub fn sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 || x.is_infinite() {
        return x;
    }
    let (value, rescale) = if x < f64::MIN_POSITIVE {
        // sqrt(x · 2^54) = sqrt(x) · 2^27
        (x * TWO_POW_54, 1.0 / 134_217_728.0)
    } else {
        (x, 1.0)
    };
    let mut guess = sqrt_estimate(value);
    for _ in 0..SQRT_MAX_ITERATIONS {
        let next = 0.5 * (guess + value / guess);
        let settled = (next - guess).abs() <= SERIES_EPSILON * next;
        guess = next;
        if settled {
            break;
        }
    }
    guess * rescale
}

/// Natural logarithm.
///
/// `x` is brought into [√½, √2) by repeated halving or doubling (bounded by the
/// `f64` exponent range), then `ln(m) = 2·Σ z^(2n+1)/(2n+1)` with
/// `z = (m − 1)/(m + 1)`, plus `k·ln 2`.
///
/// Returns `NaN` for `x ≤ 0` or `NaN`, `+∞` for `+∞`.
pub fn ln(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    if x == 1.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return x;
    }
    let mut m = x;
    let mut k: i32 = 0;
    while m >= SQRT_2 {
        m *= 0.5;
        k += 1;
    }
    while m < FRAC_1_SQRT_2 {
        m *= 2.0;
        k -= 1;
    }
    2.0 * atanh_series((m - 1.0) / (m + 1.0)) + f64::from(k) * LN_2
}

/// `Σ z^(2n+1)/(2n+1)`, i.e. `atanh(z)`, for `|z| ≤ ½`.
///
/// The stop test is relative to the running sum so tiny arguments keep full
/// precision.
fn atanh_series(z: f64) -> f64 {
    let z2 = z * z;
    let mut power = z;
    let mut sum = z;
    for n in 1..=MAX_SERIES_TERMS {
        power *= z2;
        let term = power / f64::from(2 * n + 1);
        sum += term;
        if term.abs() <= SERIES_EPSILON * sum.abs() {
            break;
        }
    }
    sum
}

/// Inverse hyperbolic sine, `sign(x)·ln(|x| + √(x² + 1))`.
///
/// For `|x| ≤ ½` the logarithm would cancel, so the odd `atanh` series is
/// summed instead.
pub fn asinh(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return x;
    }
    let a = x.abs();
    let r = if a <= HYPERBOLIC_SMALL {
        // asinh(a) = atanh(a / √(a² + 1)); the quotient stays below ½.
        atanh_series(a / sqrt(a * a + 1.0))
    } else if a > HYPERBOLIC_LARGE {
        ln(a) + LN_2
    } else {
        ln(a + sqrt(a * a + 1.0))
    };
    if x < 0.0 {
        -r
    } else {
        r
    }
}

/// Inverse hyperbolic cosine, `ln(x + √(x² − 1))`.
///
/// Returns `NaN` for `x < 1` or `NaN`.
pub fn acosh(x: f64) -> f64 {
    if x.is_nan() || x < 1.0 {
        return f64::NAN;
    }
    if x == 1.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return x;
    }
    if x > HYPERBOLIC_LARGE {
        return ln(x) + LN_2;
    }
    ln(x + sqrt(x * x - 1.0))
}

/// Inverse hyperbolic tangent, `½·ln((1 + x)/(1 − x))`.
///
/// Small arguments (`|x| ≤ ½`) sum `Σ x^(2n+1)/(2n+1)` directly.
/// Returns `NaN` for `|x| ≥ 1` or `NaN`; the boundary is excluded.
pub fn atanh(x: f64) -> f64 {
    if x.is_nan() || x <= -1.0 || x >= 1.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x.abs() <= HYPERBOLIC_SMALL {
        return atanh_series(x);
    }
    0.5 * ln((1.0 + x) / (1.0 - x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lands_in_half_open_interval() {
        for i in -400..=400 {
            let v = f64::from(i) * 0.173;
            let r = normalize(v);
            assert!(r > -PI && r <= PI, "normalize({v}) = {r}");
        }
        assert_eq!(normalize(PI), PI);
        assert_eq!(normalize(-PI), PI);
        assert_eq!(normalize(f64::INFINITY), 0.0);
    }

    #[test]
    fn canonical_zero_survives_negative_inputs() {
        assert_eq!(sin(-0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(normalize(-0.0).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn sqrt_handles_subnormal_and_large_inputs() {
        let tiny = f64::MIN_POSITIVE / 1024.0;
        let root = sqrt(tiny);
        assert!((root * root - tiny).abs() <= tiny * 1e-12);
        let big = 1e300;
        assert!((sqrt(big) - 1e150).abs() <= 1e150 * 1e-15);
    }

    #[test]
    fn ln_special_values() {
        assert_eq!(ln(1.0), 0.0);
        assert!(ln(0.0).is_nan());
        assert!(ln(-2.0).is_nan());
        assert_eq!(ln(f64::INFINITY), f64::INFINITY);
        assert!((ln(2.0) - LN_2).abs() < 1e-15);
    }

    #[test]
    fn atan2_axis_cases() {
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert_eq!(atan2(1.0, 0.0), FRAC_PI_2);
        assert_eq!(atan2(-1.0, 0.0), -FRAC_PI_2);
        assert_eq!(atan2(0.0, 2.0), 0.0);
        assert_eq!(atan2(0.0, -2.0), PI);
    }
}

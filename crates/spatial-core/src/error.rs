// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Checked failures raised by the kernel.
///
/// Out-of-domain numeric input is *not* an error: those paths return `NaN`
/// and callers test with `is_nan`/`is_finite`. The only recoverable failure
/// is indexing past the arity of a fixed-size value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpatialError {
    /// A component or matrix index was outside `0..len`.
    #[error("index {index} out of range; valid indices are 0..{len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of addressable slots.
        len: usize,
    },
}

/// Convenience alias for kernel results.
pub type Result<T> = core::result::Result<T, SpatialError>;

/// Looks up `data[index]`, mapping a miss to [`SpatialError::IndexOutOfRange`].
pub(crate) fn checked_component<const N: usize>(data: &[f64; N], index: usize) -> Result<f64> {
    data.get(index)
        .copied()
        .ok_or(SpatialError::IndexOutOfRange { index, len: N })
}

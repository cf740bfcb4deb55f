// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::must_use_candidate, clippy::float_cmp)]
#![doc = r"Volumetric primitives over `spatial-core`.

This crate provides:
- Axis-aligned boxes stored as origin + size (`Rect3`).
- The full capability set from `spatial_core::traits`, including
  `Volumetric` (containment, intersection, union).

Design notes:
- Transforms and rotations return the axis-aligned bounds of the eight
  transformed corners, so the result always encloses the input.
- Negative extents are allowed; call `standardized` before comparing.
"]

mod rect;

pub use rect::Rect3;

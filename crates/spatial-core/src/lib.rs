// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! spatial-core: deterministic geometric-algebra kernel for 3D spatial work.
//!
//! Every transcendental in this crate is evaluated by the series backends in
//! [`math::trig`]; nothing calls the platform `sin`/`cos`/`sqrt`, so results
//! are bit-identical across targets. The public surface is a set of `Copy`
//! value types ([`Angle`], [`Quat`], [`AffineTransform`], [`Vec3`],
//! [`Point3`], [`Size3`], [`RotationAxis`]) and the capability traits in
//! [`traits`] that every primitive implements the same way.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::float_cmp,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::doc_markdown,
    clippy::trivially_copy_pass_by_ref,
    clippy::imprecise_flops
)]

/// Compile-time tuning knobs for the series evaluators and comparisons.
pub mod constants;
/// Checked failures and the crate `Result` alias.
pub mod error;
pub mod math;
pub mod traits;

pub use error::{Result, SpatialError};
pub use math::{
    AffineTransform, Angle, EulerAngles, EulerOrder, Point3, Quat, RotationAxis, Size3, Vec3,
};
pub use traits::{
    apply_in_place, Primitive, Rotatable, Scalable, Transformable, Translatable, Volumetric,
};

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::FRAC_PI_2;

use spatial_core::{
    apply_in_place, AffineTransform, Angle, Point3, Primitive, Quat, Rotatable, RotationAxis,
    Scalable, Size3, SpatialError, Transformable, Translatable, Vec3,
};

fn quarter_turn_about_up() -> Quat {
    Quat::from_axis_angle(Angle::from_radians(FRAC_PI_2), Vec3::UP)
}

fn assert_primitive_basics<T: Primitive + core::fmt::Debug>() {
    assert!(T::zero().is_zero());
    assert!(T::zero().is_finite());
    assert!(!T::zero().is_nan());
    assert!(!T::infinity().is_finite());
    assert!(!T::infinity().is_zero());
}

#[test]
fn every_primitive_reports_zero_and_infinity() {
    assert_primitive_basics::<Vec3>();
    assert_primitive_basics::<Point3>();
    assert_primitive_basics::<Size3>();
    assert_primitive_basics::<Quat>();
}

#[test]
fn nan_components_are_detected() {
    let v = Vec3::new(1.0, f64::NAN, 0.0);
    assert!(v.is_nan());
    assert!(!v.is_finite());
    assert!(Quat::new(0.0, 0.0, 0.0, f64::NAN).is_nan());
}

#[test]
fn mutating_forms_equal_returning_forms() {
    let m = AffineTransform::translation(1.0, -1.0, 2.0) * AffineTransform::uniform_scale(3.0);
    let q = quarter_turn_about_up();
    let size = Size3::new(2.0, 0.5, 1.0);
    let offset = Vec3::new(0.5, 0.5, 0.5);
    let start = Point3::new(1.0, 2.0, 3.0);

    let mut p = start;
    p.apply(&m);
    assert_eq!(p, start.applying(&m));

    let mut p = start;
    p.scale(size);
    assert_eq!(p, start.scaled(size));

    let mut p = start;
    p.uniformly_scale(4.0);
    assert_eq!(p, start.uniformly_scaled(4.0));

    let mut p = start;
    p.translate(offset);
    assert_eq!(p, start.translated(offset));

    let mut p = start;
    p.rotate(&q);
    assert_eq!(p, start.rotated(&q));

    let mut p = start;
    apply_in_place(&mut p, |v| v.translated(offset).uniformly_scaled(2.0));
    assert_eq!(p, Point3::new(3.0, 5.0, 7.0));
}

#[test]
fn vectors_ignore_translation_but_points_do_not() {
    let m = AffineTransform::translation(10.0, 0.0, 0.0);
    assert_eq!(Vec3::RIGHT.applying(&m), Vec3::RIGHT);
    assert_eq!(Point3::new(1.0, 0.0, 0.0).applying(&m), Point3::new(11.0, 0.0, 0.0));
}

#[test]
fn rotation_agrees_between_quaternion_and_transform() {
    let q = quarter_turn_about_up();
    let m = AffineTransform::rotation(&q);
    let p = Point3::new(1.0, 0.0, 0.0);
    let by_quat = p.rotated(&q);
    let by_matrix = p.applying(&m);
    assert!(by_quat.approx_eq(&by_matrix, 1e-12), "{by_quat} vs {by_matrix}");
    assert!(by_quat.approx_eq(&Point3::new(0.0, 0.0, -1.0), 1e-12));
}

#[test]
fn scaling_is_component_wise() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v.scale_by(2.0, 0.5, -1.0);
    assert_eq!(v, Vec3::new(2.0, 1.0, -3.0));
    let s = Size3::new(1.0, 2.0, 3.0).scaled(Size3::new(3.0, 2.0, 1.0));
    assert_eq!(s, Size3::new(3.0, 4.0, 3.0));
}

#[test]
fn index_past_last_component_errors() {
    let expected = Err(SpatialError::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(Vec3::UP.component(3), expected);
    assert_eq!(Point3::ZERO.component(3), expected);
    assert_eq!(Size3::ONE.component(3), expected);
    assert_eq!(RotationAxis::X.component(3), expected);
    assert_eq!(
        Vec3::UP.component(4),
        Err(SpatialError::IndexOutOfRange { index: 4, len: 3 })
    );
    assert_eq!(Size3::new(4.0, 5.0, 6.0).component(2), Ok(6.0));
}

#[test]
fn error_message_names_the_valid_range() {
    let err = Point3::ZERO.component(7).unwrap_err();
    assert_eq!(err.to_string(), "index 7 out of range; valid indices are 0..3");
}

#[test]
fn point_arithmetic_mixes_vectors_and_sizes() {
    let p = Point3::new(1.0, 1.0, 1.0);
    assert_eq!(p + Size3::new(1.0, 2.0, 3.0), Point3::new(2.0, 3.0, 4.0));
    assert_eq!(p - Vec3::UP, Point3::new(1.0, 0.0, 1.0));
    assert_eq!(Point3::new(4.0, 5.0, 6.0) - p, Vec3::new(3.0, 4.0, 5.0));
    assert_eq!(Point3::from(Size3::ONE), p);
    assert_eq!(p * 2.0 / 4.0, Point3::new(0.5, 0.5, 0.5));
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::FRAC_PI_2;

use proptest::prelude::*;
use spatial_core::{
    AffineTransform, Angle, Point3, Primitive, Quat, Rotatable, Scalable, Size3, Transformable,
    Translatable, Vec3, Volumetric,
};
use spatial_geom::Rect3;

fn sample() -> Rect3 {
    Rect3::new(Point3::new(1.0, 2.0, 3.0), Size3::new(4.0, 5.0, 6.0))
}

fn inner() -> Rect3 {
    Rect3::new(Point3::new(2.0, 3.0, 4.0), Size3::new(3.0, 4.0, 5.0))
}

/// `r` padded by `pad` on every face, absorbing rounding in `origin + size`.
fn grown(r: &Rect3, pad: f64) -> Rect3 {
    Rect3::new(
        r.min() - Vec3::new(pad, pad, pad),
        r.size() + Size3::uniform(2.0 * pad),
    )
}

#[test]
fn origin_and_size_define_the_corners() {
    let r = Rect3::new(Point3::new(-1.0, -1.0, -1.0), Size3::new(2.0, 2.0, 2.0));
    assert_eq!(r.min(), Point3::new(-1.0, -1.0, -1.0));
    assert_eq!(r.max(), Point3::new(1.0, 1.0, 1.0));
    assert_eq!(r.center(), Point3::ZERO);
}

#[test]
fn from_center_offsets_by_half_extent() {
    let r = Rect3::from_center(Point3::new(3.0, -2.0, 9.0), Size3::new(2.5, 3.71, 1.44));
    assert!(r.origin().approx_eq(&Point3::new(1.75, -3.855, 8.28), 1e-12));
    assert!(r.center().approx_eq(&Point3::new(3.0, -2.0, 9.0), 1e-12));
    let corners = r.corner_points();
    assert_eq!(corners[0], r.min());
    assert_eq!(corners[6], r.max());
    assert_eq!(corners[3], Point3::new(r.max().x(), r.min().y(), r.min().z()));
}

#[test]
fn applying_a_translation_moves_the_origin() {
    let m = AffineTransform::translation(2.0, 4.0, 6.0);
    assert_eq!(
        sample().applying(&m),
        Rect3::new(Point3::new(3.0, 6.0, 9.0), Size3::new(4.0, 5.0, 6.0))
    );
}

#[test]
fn applying_a_rotation_returns_enclosing_bounds() {
    let r = Rect3::new(Point3::ZERO, Size3::new(2.0, 1.0, 1.0));
    let m = AffineTransform::rotation_z(Angle::from_radians(FRAC_PI_2));
    let rotated = r.applying(&m);
    assert!(rotated.min().approx_eq(&Point3::new(-1.0, 0.0, 0.0), 1e-12));
    assert!(rotated.max().approx_eq(&Point3::new(0.0, 2.0, 1.0), 1e-12));

    let q = Quat::from_axis_angle(Angle::from_radians(FRAC_PI_2), Vec3::FORWARD);
    let by_quat = r.rotated(&q);
    assert!(by_quat.min().approx_eq(&rotated.min(), 1e-12));
    assert!(by_quat.max().approx_eq(&rotated.max(), 1e-12));
}

#[test]
fn scaling_scales_origin_and_extent() {
    assert_eq!(
        sample().scaled(Size3::new(2.0, 3.0, 4.0)),
        Rect3::new(Point3::new(2.0, 6.0, 12.0), Size3::new(8.0, 15.0, 24.0))
    );
    assert_eq!(
        sample().uniformly_scaled(2.0),
        Rect3::new(Point3::new(2.0, 4.0, 6.0), Size3::new(8.0, 10.0, 12.0))
    );
}

#[test]
fn translating_keeps_the_extent() {
    let mut r = sample();
    r.translate(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(
        r,
        Rect3::new(Point3::new(2.0, 4.0, 6.0), Size3::new(4.0, 5.0, 6.0))
    );
}

#[test]
fn containment() {
    let r = sample();
    assert!(r.contains_point(Point3::new(2.0, 3.0, 4.0)));
    assert!(r.contains_point(r.max()));
    assert!(!r.contains_point(Point3::new(0.0, 3.0, 4.0)));
    assert!(r.contains(&inner()));
    assert!(!inner().contains(&r));
    assert!(r.contains_any_of(&[Point3::new(2.0, 3.0, 4.0), Point3::new(50.0, 6.0, 7.0)]));
    assert!(!r.contains_any_of(&[]));
    assert_eq!(Volumetric::size(&r), Size3::new(4.0, 5.0, 6.0));
}

#[test]
fn intersection_and_union_of_nested_boxes() {
    let r = sample();
    assert_eq!(r.intersection(&inner()), Some(inner()));
    assert_eq!(r.union(&inner()), r);

    let mut a = r;
    assert!(a.form_intersection(&inner()));
    assert_eq!(a, inner());

    let mut b = r;
    b.form_union(&inner());
    assert_eq!(b, r);
}

#[test]
fn disjoint_boxes_leave_form_intersection_untouched() {
    let r = sample();
    let far = Rect3::new(Point3::new(100.0, 100.0, 100.0), Size3::ONE);
    assert!(!r.intersects(&far));
    assert_eq!(r.intersection(&far), None);
    let mut a = r;
    assert!(!a.form_intersection(&far));
    assert_eq!(a, r);
    let u = r.union(&far);
    assert_eq!(u.min(), r.min());
    assert_eq!(u.max(), far.max());
}

#[test]
fn touching_faces_intersect_with_zero_extent() {
    let a = Rect3::new(Point3::ZERO, Size3::ONE);
    let b = Rect3::new(Point3::new(1.0, 0.0, 0.0), Size3::ONE);
    assert!(a.intersects(&b));
    let overlap = a.intersection(&b);
    assert!(overlap.is_some_and(|o| o.is_empty()));
}

#[test]
fn integral_and_standardized() {
    let r = Rect3::new(Point3::new(1.5, -0.5, 2.0), Size3::new(2.2, 0.1, 3.0));
    assert_eq!(
        r.integral(),
        Rect3::new(Point3::new(1.0, -1.0, 2.0), Size3::new(3.0, 1.0, 3.0))
    );
    let flipped = Rect3::new(Point3::new(5.0, 5.0, 5.0), Size3::new(-2.0, 3.0, -1.0));
    assert_eq!(
        flipped.standardized(),
        Rect3::new(Point3::new(3.0, 5.0, 4.0), Size3::new(2.0, 3.0, 1.0))
    );
    assert_eq!(r.standardized(), r);
}

#[test]
fn primitive_queries() {
    assert!(Rect3::zero().is_zero());
    assert!(!Rect3::infinity().is_finite());
    let nan = Rect3::new(Point3::new(f64::NAN, 0.0, 0.0), Size3::ONE);
    assert!(nan.is_nan());
}

proptest! {
    #[test]
    fn union_contains_both_and_intersection_is_inside_both(
        ax in -50.0f64..50.0, ay in -50.0f64..50.0, az in -50.0f64..50.0,
        aw in 0.0f64..20.0, ah in 0.0f64..20.0, ad in 0.0f64..20.0,
        bx in -50.0f64..50.0, by in -50.0f64..50.0, bz in -50.0f64..50.0,
        bw in 0.0f64..20.0, bh in 0.0f64..20.0, bd in 0.0f64..20.0,
    ) {
        let a = Rect3::new(Point3::new(ax, ay, az), Size3::new(aw, ah, ad));
        let b = Rect3::new(Point3::new(bx, by, bz), Size3::new(bw, bh, bd));
        let u = grown(&a.union(&b), 1e-9);
        prop_assert!(u.contains_point(a.min()) && u.contains_point(a.max()));
        prop_assert!(u.contains_point(b.min()) && u.contains_point(b.max()));
        prop_assert_eq!(a.intersects(&b), a.intersection(&b).is_some());
        if let Some(i) = a.intersection(&b) {
            prop_assert!(a.contains_point(i.min()) && b.contains_point(i.min()));
        }
    }

    #[test]
    fn transformed_bounds_enclose_every_corner(
        angle in -3.0f64..3.0,
        tx in -10.0f64..10.0,
    ) {
        let r = Rect3::new(Point3::new(-1.0, 0.5, 2.0), Size3::new(3.0, 2.0, 1.0));
        let m = AffineTransform::translation(tx, 0.0, 0.0)
            * AffineTransform::rotation_y(Angle::from_radians(angle));
        let bounds = r.applying(&m);
        let padded = grown(&bounds, 1e-9);
        for corner in r.corner_points() {
            prop_assert!(padded.contains_point(m.transform_point(&corner)));
        }
    }
}

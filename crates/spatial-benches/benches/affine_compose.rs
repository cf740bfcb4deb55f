// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Transform composition and application, including box-to-bounds transforms.
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use spatial_core::{AffineTransform, Angle, Point3, Quat, Size3, Transformable, Vec3};
use spatial_geom::Rect3;

fn chain() -> [AffineTransform; 4] {
    [
        AffineTransform::translation(1.0, -2.0, 0.5),
        AffineTransform::rotation_y(Angle::from_radians(0.8)),
        AffineTransform::scaling(2.0, 1.0, 0.5),
        AffineTransform::rotation(&Quat::from_axis_angle(
            Angle::from_radians(-0.3),
            Vec3::new(1.0, 0.0, 1.0),
        )),
    ]
}

fn bench_multiply(c: &mut Criterion) {
    let [a, b, ..] = chain();
    c.bench_function("affine_multiply", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });
    c.bench_function("affine_multiply_chain4", |bench| {
        bench.iter_batched(
            chain,
            |ms| ms.iter().fold(AffineTransform::identity(), |acc, m| acc * m),
            BatchSize::SmallInput,
        );
    });
}

fn bench_apply(c: &mut Criterion) {
    let m = chain().iter().fold(AffineTransform::identity(), |acc, m| acc * m);
    let p = Point3::new(0.25, 4.0, -3.0);
    let r = Rect3::new(Point3::new(-1.0, -1.0, -1.0), Size3::new(2.0, 3.0, 4.0));
    c.bench_function("affine_transform_point", |bench| {
        bench.iter(|| black_box(&m).transform_point(black_box(&p)));
    });
    c.bench_function("rect3_applying", |bench| {
        bench.iter(|| black_box(&r).applying(black_box(&m)));
    });
}

criterion_group!(benches, bench_multiply, bench_apply);
criterion_main!(benches);

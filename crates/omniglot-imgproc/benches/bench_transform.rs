use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use omniglot_image::{GenericImage, Image, ImageSize};
use omniglot_imgproc::{tensor::image_to_tensor, warp::transform};

fn bench_tensor(c: &mut Criterion) {
    let mut group = c.benchmark_group("ImageToTensor");

    for side in [28, 105, 256].iter() {
        group.throughput(criterion::Throughput::Elements((*side * *side) as u64));

        let image: GenericImage =
            Image::<u8, 1>::new(ImageSize::square(*side), vec![0u8; side * side])
                .unwrap()
                .into();

        group.bench_with_input(BenchmarkId::new("gray8", side), &image, |b, i| {
            b.iter(|| image_to_tensor(black_box(i)))
        });
    }
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transform");

    let src = Image::<f32, 1>::from_size_val(ImageSize::square(105), 0.0).unwrap();

    for out_size in [20, 28, 105].iter() {
        group.throughput(criterion::Throughput::Elements((*out_size * *out_size) as u64));

        group.bench_with_input(
            BenchmarkId::new("rotate_translate", out_size),
            out_size,
            |b, &out_size| {
                b.iter(|| {
                    transform(
                        black_box(&src),
                        black_box(out_size),
                        black_box(0.5),
                        black_box(-2.0),
                        black_box(2.0),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tensor, bench_transform);
criterion_main!(benches);

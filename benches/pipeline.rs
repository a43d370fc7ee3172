use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wireview::bench::{clip_segment, ClipVolume};
use wireview::prelude::*;

fn segment_cases() -> [(&'static str, Vec4, Vec4); 4] {
    [
        (
            "inside",
            Vec4::point(-0.5, -0.25, -0.75),
            Vec4::point(0.5, 0.25, -0.25),
        ),
        (
            "rejected",
            Vec4::point(1.5, -0.5, -0.5),
            Vec4::point(2.5, 0.5, -0.75),
        ),
        (
            "one_endpoint_out",
            Vec4::point(-2.0, 0.5, -0.5),
            Vec4::point(0.0, -0.5, -0.5),
        ),
        (
            "crossing",
            Vec4::point(-2.0, 1.5, -0.5),
            Vec4::point(2.0, -1.5, -0.5),
        ),
    ]
}

fn benchmark_clip_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_segment");

    for volume in [
        ClipVolume::Parallel,
        ClipVolume::Perspective { zmin: -0.12 },
    ] {
        let volume_name = match volume {
            ClipVolume::Parallel => "parallel",
            ClipVolume::Perspective { .. } => "perspective",
        };
        for (name, p0, p1) in segment_cases() {
            group.bench_with_input(
                BenchmarkId::new(volume_name, name),
                &(p0, p1),
                |b, &(p0, p1)| {
                    b.iter(|| clip_segment(black_box(p0), black_box(p1), volume));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    let parallel = Scene::sample();
    let mut perspective = Scene::sample();
    perspective.view.kind = ProjectionKind::Perspective;
    let pipeline = Pipeline::new(800, 600);

    group.bench_function("parallel_prism", |b| {
        b.iter(|| pipeline.render_frame(black_box(&parallel)).unwrap());
    });
    group.bench_function("perspective_prism", |b| {
        b.iter(|| pipeline.render_frame(black_box(&perspective)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_clip_segment, benchmark_render_frame);
criterion_main!(benches);

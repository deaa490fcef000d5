use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ai_framegen::synthetic::GradientSource;
use ai_framegen::{
    generate_frame, install, BlendModel, CollectingSink, FramegenConfig, InterpolationModel,
    ModelLoader, PipeContext,
};

/// Loader that hands out an in-memory blend model
struct InMemoryLoader;

impl ModelLoader for InMemoryLoader {
    fn load(&self, _path: &std::path::Path) -> ai_framegen::Result<Box<dyn InterpolationModel>> {
        Ok(Box::new(BlendModel::new("bench", 0.5, 1.0)))
    }
}

/// Benchmark: raw model inference at common resolutions
fn bench_blend_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend_infer");
    for &(w, h) in &[(320u32, 180u32), (1280, 720), (1920, 1080)] {
        let mut source = GradientSource::new(w, h, 60.0);
        let (a, b) = (source.next().unwrap(), source.next().unwrap());
        let mut model = BlendModel::new("bench", 0.5, 1.0);

        let id = BenchmarkId::from_parameter(format!("{}x{}", w, h));
        group.bench_with_input(id, &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(model.infer(black_box(a), black_box(b))))
        });
    }
    group.finish();
}

/// Benchmark: full hook path including context lookup and hand-off
fn bench_generate_hook(c: &mut Criterion) {
    let sink = CollectingSink::new();
    let mut ctx = PipeContext::with_sink(sink.clone());
    install(&mut ctx, &FramegenConfig::default(), &InMemoryLoader).unwrap();

    let mut source = GradientSource::new(1280, 720, 60.0);
    let (a, b) = (source.next().unwrap(), source.next().unwrap());

    c.bench_function("generate_hook_720p", |bench| {
        bench.iter(|| {
            let outcome = generate_frame(&mut ctx, Some(black_box(&a)), Some(black_box(&b)));
            sink.drain();
            black_box(outcome)
        })
    });
}

criterion_group!(benches, bench_blend_infer, bench_generate_hook);
criterion_main!(benches);

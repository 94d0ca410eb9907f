// Criterion benchmarks for Avatar ML

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use avatar_ml::core::{
    background::remove_backgrounds,
    classifier::BodyTypeClassifier,
    measurements::extract_measurements,
    pose::detect_pose,
    random::{FixedRandom, ThreadRandom},
};
use avatar_ml::models::{MeasurementUnit, PhotoRef};

fn create_photos(count: usize) -> Vec<PhotoRef> {
    (0..count)
        .map(|i| PhotoRef {
            url: format!("https://cdn.example.com/user/{}/photo_{}.jpg", i % 7, i),
            photo_type: if i % 2 == 0 { "front" } else { "side" }.to_string(),
        })
        .collect()
}

fn bench_pose_detection(c: &mut Criterion) {
    c.bench_function("pose_detection_thread_rng", |b| {
        b.iter(|| detect_pose(black_box(&ThreadRandom)));
    });
    c.bench_function("pose_detection_fixed", |b| {
        let rng = FixedRandom::midpoint();
        b.iter(|| detect_pose(black_box(&rng)));
    });
}

fn bench_measurement_extraction(c: &mut Criterion) {
    c.bench_function("measurement_extraction_imperial", |b| {
        b.iter(|| extract_measurements(black_box(&ThreadRandom), black_box(MeasurementUnit::Imperial)));
    });
}

fn bench_classification(c: &mut Criterion) {
    let classifier = BodyTypeClassifier::default();
    c.bench_function("body_type_classification", |b| {
        b.iter(|| classifier.classify_values(black_box(80.0), black_box(100.0), black_box(40.0)));
    });
}

fn bench_background_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("background_removal");

    for size in [1, 10, 100].iter() {
        let photos = create_photos(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &photos, |b, photos| {
            b.iter(|| remove_backgrounds(black_box(photos)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pose_detection,
    bench_measurement_extraction,
    bench_classification,
    bench_background_removal
);
criterion_main!(benches);

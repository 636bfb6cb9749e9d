use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primate_journeys::core::config::GeneratorConfig;
use primate_journeys::{
    GeoLocation, JourneyGenerator, JourneyRequest, JourneyService, SpeciesCatalog,
    StaticDirectory,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_single_journey(c: &mut Criterion) {
    let catalog = SpeciesCatalog::builtin().unwrap();
    let config = GeneratorConfig::default();
    let generator = JourneyGenerator::new(catalog, &config);
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let home = GeoLocation::new(-1.2921, 36.8219);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("build_journey", |b| {
        b.iter(|| generator.build_journey(black_box("Olive Baboon"), home, now, &mut rng))
    });
}

fn bench_batch(c: &mut Criterion) {
    let service = JourneyService::new(StaticDirectory::default()).unwrap().with_seed(42);
    let batch: Vec<JourneyRequest> = (0..1000)
        .map(|i| {
            let (lat, lon) = ((i % 90) as f64, (i % 180) as f64);
            JourneyRequest::new(format!("Mandrill {}", i), lat, lon)
        })
        .collect();

    c.bench_function("generate_journeys_1000", |b| {
        b.iter(|| service.generate_journeys(black_box(&batch)).unwrap())
    });
}

criterion_group!(benches, bench_single_journey, bench_batch);
criterion_main!(benches);

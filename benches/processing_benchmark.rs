use air_quality_db::{Dataset, Reading, Statistic};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const TIME_BUCKETS: [&str; 4] = ["Morning", "Midday", "Evening", "Night"];

// Create test data for benchmarking
fn create_test_readings(zip_count: usize, readings_per_bucket: usize) -> Vec<Reading> {
    let mut readings = Vec::with_capacity(zip_count * TIME_BUCKETS.len() * readings_per_bucket);

    for zip in 0..zip_count {
        let zip_code = format!("{:05}", 90000 + zip);
        for (bucket_index, time_bucket) in TIME_BUCKETS.iter().enumerate() {
            for i in 0..readings_per_bucket {
                let concentration = 1.0 + (zip as f64) * 0.1 + (bucket_index as f64) + (i as f64) * 0.01;
                readings.push(Reading::new(zip_code.clone(), *time_bucket, concentration));
            }
        }
    }

    readings
}

fn benchmark_load(c: &mut Criterion) {
    let readings = create_test_readings(50, 20);

    c.bench_function("dataset_load", |b| {
        b.iter(|| {
            let mut dataset = Dataset::new();
            black_box(dataset.load(readings.clone()))
        })
    });
}

fn benchmark_cross_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_table");

    for zip_count in [10, 50, 100] {
        let mut dataset = Dataset::new();
        dataset.load(create_test_readings(zip_count, 10));

        group.bench_with_input(BenchmarkId::new("average", zip_count), &dataset, |b, dataset| {
            b.iter(|| black_box(dataset.cross_table(Statistic::Average)))
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut dataset = Dataset::new();
    dataset.load(create_test_readings(50, 10));

    c.bench_function("render_cross_table", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            dataset.render_cross_table(Statistic::Max, &mut out).unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, benchmark_load, benchmark_cross_table, benchmark_render);
criterion_main!(benches);

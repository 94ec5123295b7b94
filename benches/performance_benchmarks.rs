use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitcalc::models::Package;
use fitcalc::{dispatch, import, CoefficientConfig, WorkoutCalculator};

/// Performance benchmarks for package dispatch and report building

fn create_package_dataset(size: usize) -> Vec<Package> {
    Package::demo_packages().into_iter().cycle().take(size).collect()
}

fn bench_build_reports(c: &mut Criterion) {
    let config = CoefficientConfig::default();
    let mut group = c.benchmark_group("Report Building");

    for &size in &[1, 10, 100, 1000] {
        let packages = create_package_dataset(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("read_and_report", size),
            &packages,
            |b, packages| {
                b.iter(|| {
                    for package in packages {
                        let _ = package
                            .read(&config)
                            .and_then(|training| training.build_report());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    c.bench_function("read_package_swimming", |b| {
        b.iter(|| dispatch::read_package(black_box("SWM"), black_box(&[720.0, 1.0, 80.0, 25.0, 40.0])))
    });
}

fn bench_csv_import(c: &mut Criterion) {
    let csv: String = create_package_dataset(1000)
        .iter()
        .map(|p| {
            let values: Vec<String> = p.data.iter().map(|v| v.to_string()).collect();
            format!("{},{}\n", p.code, values.join(","))
        })
        .collect();

    c.bench_function("read_packages_1000", |b| {
        b.iter(|| import::read_packages(black_box(csv.as_bytes())))
    });
}

criterion_group!(benches, bench_build_reports, bench_dispatch, bench_csv_import);
criterion_main!(benches);

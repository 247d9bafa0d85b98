//! Benchmarks for distance ranking and link generation.

use chapashop_geo::nearby::{rank_by_distance, BusinessLocation};
use chapashop_geo::{generate_maps_link, haversine_distance, Coordinate, GeoPoint, LocationInfo};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_businesses(count: usize) -> Vec<BusinessLocation> {
    (0..count)
        .map(|i| {
            // Grid around Mexico City
            let lat = 19.2 + (i as f64 * 0.001) % 0.5;
            let lng = -99.3 + (i as f64 * 0.001) % 0.5;
            BusinessLocation {
                id: format!("shop-{i}"),
                location: LocationInfo::from_point(GeoPoint::new(lat, lng)),
            }
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let cdmx = Coordinate::new(19.4326, -99.1332);
    let monterrey = Coordinate::new(25.6866, -100.3161);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&cdmx), black_box(&monterrey)))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_distance");
    let user = GeoPoint::new(19.4326, -99.1332);

    for size in [10, 100, 1000, 10000].iter() {
        let businesses = create_businesses(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| rank_by_distance(black_box(user), black_box(&businesses), Some(20)))
        });
    }

    group.finish();
}

fn bench_maps_link(c: &mut Criterion) {
    let address =
        LocationInfo::default().with_address("Av. Insurgentes Sur 1602, Crédito Constructor");

    c.bench_function("maps_link_address", |b| {
        b.iter(|| generate_maps_link(black_box(&address)))
    });
}

criterion_group!(benches, bench_single_distance, bench_rank, bench_maps_link);
criterion_main!(benches);

use std::{
    fs::File,
    io::{BufRead, BufReader},
    time::Duration,
};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sliding_median::{BoxedMedianFilter, MedianFilter};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut data = Vec::with_capacity(500);
    let f = BufReader::new(File::open("./test_data/adc_readings.txt").unwrap());

    for line in f.lines() {
        let v: u16 = line.unwrap().parse().unwrap();
        data.push(v);
    }

    let mut group = c.benchmark_group("benches");
    group
        .measurement_time(Duration::from_secs_f32(10.))
        .sample_size(1000);

    group.bench_function("median 5", |b| {
        b.iter(|| {
            let mut filter = MedianFilter::<u16, 5>::default();

            for v in data.iter() {
                black_box(filter.filter(*v));
            }
        })
    });

    group.bench_function("median 15", |b| {
        b.iter(|| {
            let mut filter = MedianFilter::<u16, 15>::default();

            for v in data.iter() {
                black_box(filter.filter(*v));
            }
        })
    });

    group.bench_function("boxed median 15", |b| {
        b.iter(|| {
            let mut filter = BoxedMedianFilter::<u16>::filled_with(15, 0);

            for v in data.iter() {
                black_box(filter.filter(*v));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

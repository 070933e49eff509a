use criterion::{Criterion, black_box, criterion_group, criterion_main};

use coligny_moon::{MeanLunation, classify_range, phase_from_age};
use coligny_time::CalendarDate;

fn bench_phase_from_age(c: &mut Criterion) {
    c.bench_function("phase_from_age sweep", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            let mut age = 0.0;
            while age < 29.53 {
                acc += phase_from_age(black_box(age)) as usize;
                age += 0.05;
            }
            acc
        })
    });
}

fn bench_classify_year(c: &mut Criterion) {
    let start = CalendarDate::new(2024, 1, 1).unwrap();
    let end = CalendarDate::new(2024, 12, 31).unwrap();
    c.bench_function("classify_range full year", |b| {
        b.iter(|| classify_range(&MeanLunation, black_box(start), black_box(end)).unwrap())
    });
}

criterion_group!(benches, bench_phase_from_age, bench_classify_year);
criterion_main!(benches);

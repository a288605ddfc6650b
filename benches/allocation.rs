use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cinema_seating::{allocate_default, allocate_from_position, Movie, SeatId, SeatMap};

fn empty_hall() -> SeatMap {
    SeatMap::new(&Movie::new("Bench", 26, 50).unwrap())
}

// Зал, в котором занято каждое третье место - худший случай для
// поиска непрерывных блоков
fn fragmented_hall() -> SeatMap {
    let mut map = empty_hall();
    let occupied: Vec<SeatId> = (0..26u8)
        .flat_map(|row| {
            (1..=50u32)
                .filter(|number| number % 3 == 0)
                .map(move |number| SeatId::new((b'A' + row) as char, number))
        })
        .collect();
    map.apply(&occupied).unwrap();
    map
}

fn bench_allocation(c: &mut Criterion) {
    let empty = empty_hall();
    let fragmented = fragmented_hall();

    c.bench_function("default_empty_hall", |b| {
        b.iter(|| allocate_default(black_box(&empty), black_box(4)))
    });

    c.bench_function("default_fragmented_hall", |b| {
        b.iter(|| allocate_default(black_box(&fragmented), black_box(4)))
    });

    c.bench_function("default_overflowing_three_rows", |b| {
        b.iter(|| allocate_default(black_box(&fragmented), black_box(80)))
    });

    let start = SeatId::new('M', 25);
    c.bench_function("positional_fragmented_hall", |b| {
        b.iter(|| allocate_from_position(black_box(&fragmented), black_box(start), black_box(6)))
    });
}

criterion_group!(benches, bench_allocation);
criterion_main!(benches);

use std::collections::BTreeSet;
use std::convert::TryInto;
use std::iter::FromIterator;

use collectix::OrderedSet;
use criterion::{criterion_group, criterion_main, Criterion};

mod test_data;
use test_data::{RAND_10_000, SEQ_10_000};

// Benches -------------------------------------------------------------------------------------------------------------

fn bench_from_rand(c: &mut Criterion) {
    let rand_10k: [usize; 10_000] = RAND_10_000.keys.clone().try_into().unwrap();

    c.bench_function("cx_from_10_000_rand", |b| {
        b.iter(|| {
            let _: OrderedSet<usize> = OrderedSet::from_iter(rand_10k);
        })
    });

    c.bench_function("std_from_10_000_rand", |b| {
        b.iter(|| {
            let _ = BTreeSet::from(rand_10k);
        })
    });
}

fn bench_from_seq(c: &mut Criterion) {
    let seq_10k: [usize; 10_000] = SEQ_10_000.keys.clone().try_into().unwrap();

    c.bench_function("cx_from_10_000_seq", |b| {
        b.iter(|| {
            let _: OrderedSet<usize> = OrderedSet::from_iter(seq_10k);
        })
    });

    c.bench_function("std_from_10_000_seq", |b| {
        b.iter(|| {
            let _ = BTreeSet::from(seq_10k);
        })
    });
}

criterion_group!(benches, bench_from_rand, bench_from_seq);
criterion_main!(benches);

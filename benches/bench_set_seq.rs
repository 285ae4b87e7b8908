use std::collections::BTreeSet;
use std::iter::FromIterator;

use collectix::OrderedSet;
use criterion::{criterion_group, criterion_main, Criterion};

mod test_data;
use test_data::{
    CX_100_SEQ, CX_10_000_SEQ, CX_1_000_SEQ, SEQ_100, SEQ_10_000, SEQ_1_000, STD_100_SEQ,
    STD_10_000_SEQ, STD_1_000_SEQ,
};

// Benches -------------------------------------------------------------------------------------------------------------

fn bench_insert(c: &mut Criterion) {
    // Collectix vs STD 100 ----------------------------------------------------------------------------------------

    c.bench_function("cx_insert_100_seq", |b| {
        b.iter(|| {
            let mut cx: OrderedSet<usize> = OrderedSet::new();
            for k in &SEQ_100.keys {
                cx.insert(*k);
            }
        })
    });

    c.bench_function("std_insert_100_seq", |b| {
        b.iter(|| {
            let mut std = BTreeSet::new();
            for k in &SEQ_100.keys {
                std.insert(*k);
            }
        })
    });

    // Collectix vs STD 1_000 --------------------------------------------------------------------------------------

    c.bench_function("cx_insert_1_000_seq", |b| {
        b.iter(|| {
            let mut cx: OrderedSet<usize> = OrderedSet::new();
            for k in &SEQ_1_000.keys {
                cx.insert(*k);
            }
        })
    });

    c.bench_function("std_insert_1_000_seq", |b| {
        b.iter(|| {
            let mut std = BTreeSet::new();
            for k in &SEQ_1_000.keys {
                std.insert(*k);
            }
        })
    });

    // Collectix vs STD 10_000 -------------------------------------------------------------------------------------

    c.bench_function("cx_insert_10_000_seq", |b| {
        b.iter(|| {
            let mut cx: OrderedSet<usize> = OrderedSet::new();
            for k in &SEQ_10_000.keys {
                cx.insert(*k);
            }
        })
    });

    c.bench_function("std_insert_10_000_seq", |b| {
        b.iter(|| {
            let mut std = BTreeSet::new();
            for k in &SEQ_10_000.keys {
                std.insert(*k);
            }
        })
    });
}

fn bench_get(c: &mut Criterion) {
    // Collectix vs STD 100 ----------------------------------------------------------------------------------------

    c.bench_function("cx_get_100_seq", |b| {
        b.iter(|| {
            for k in &SEQ_100.get_idxs {
                let _ = CX_100_SEQ.contains(k);
            }
        })
    });

    c.bench_function("std_get_100_seq", |b| {
        b.iter(|| {
            for k in &SEQ_100.get_idxs {
                let _ = STD_100_SEQ.get(k);
            }
        })
    });

    // Collectix vs STD 1_000 --------------------------------------------------------------------------------------

    c.bench_function("cx_get_1_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_1_000.get_idxs {
                let _ = CX_1_000_SEQ.contains(k);
            }
        })
    });

    c.bench_function("std_get_1_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_1_000.get_idxs {
                let _ = STD_1_000_SEQ.get(k);
            }
        })
    });

    // Collectix vs STD 10_000 -------------------------------------------------------------------------------------

    c.bench_function("cx_get_10_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_10_000.get_idxs {
                let _ = CX_10_000_SEQ.contains(k);
            }
        })
    });

    c.bench_function("std_get_10_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_10_000.get_idxs {
                let _ = STD_10_000_SEQ.get(k);
            }
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let mut cx_100: OrderedSet<usize> = OrderedSet::from_iter(SEQ_100.keys.clone());
    let mut cx_1_000: OrderedSet<usize> = OrderedSet::from_iter(SEQ_1_000.keys.clone());
    let mut cx_10_000: OrderedSet<usize> = OrderedSet::from_iter(SEQ_10_000.keys.clone());

    let mut std_100: BTreeSet<usize> = BTreeSet::from_iter(SEQ_100.keys.clone());
    let mut std_1_000: BTreeSet<usize> = BTreeSet::from_iter(SEQ_1_000.keys.clone());
    let mut std_10_000: BTreeSet<usize> = BTreeSet::from_iter(SEQ_10_000.keys.clone());

    // Collectix vs STD 100 ----------------------------------------------------------------------------------------

    c.bench_function("cx_remove_100_seq", |b| {
        b.iter(|| {
            for k in &SEQ_100.remove_idxs {
                cx_100.remove(k);
            }
        })
    });

    c.bench_function("std_remove_100_seq", |b| {
        b.iter(|| {
            for k in &SEQ_100.remove_idxs {
                std_100.remove(k);
            }
        })
    });

    // Collectix vs STD 1_000 --------------------------------------------------------------------------------------

    c.bench_function("cx_remove_1_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_1_000.remove_idxs {
                cx_1_000.remove(k);
            }
        })
    });

    c.bench_function("std_remove_1_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_1_000.remove_idxs {
                std_1_000.remove(k);
            }
        })
    });

    // Collectix vs STD 10_000 -------------------------------------------------------------------------------------

    c.bench_function("cx_remove_10_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_10_000.remove_idxs {
                cx_10_000.remove(k);
            }
        })
    });

    c.bench_function("std_remove_10_000_seq", |b| {
        b.iter(|| {
            for k in &SEQ_10_000.remove_idxs {
                std_10_000.remove(k);
            }
        })
    });
}

// Runner --------------------------------------------------------------------------------------------------------------

criterion_group!(benches, bench_insert, bench_get, bench_remove);
criterion_main!(benches);

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use generic_collections::tree::AvlTree;

fn criterion_benchmark(criterion: &mut Criterion) {
    let small: Vec<i32> = std::iter::repeat_with(rand::random).take(100).collect();
    let large: Vec<i32> = std::iter::repeat_with(rand::random).take(10_000).collect();

    let mut bench = criterion.benchmark_group("insert-small");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            let mut set = BTreeSet::new();
            for &n in &small {
                let n = black_box(n);
                black_box(set.insert(n));
            }
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            let mut tree = AvlTree::ordered();
            for &n in &small {
                let n = black_box(n);
                black_box(tree.insert(n).is_ok());
            }
        })
    });
    drop(bench);

    let mut bench = criterion.benchmark_group("insert-remove-small");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            let mut set = BTreeSet::new();
            for &n in &small {
                let n = black_box(n);
                black_box(set.insert(n));
            }
            for &n in &small {
                black_box(set.remove(&n));
            }
            assert!(set.is_empty());
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            let mut tree = AvlTree::ordered();
            for &n in &small {
                let n = black_box(n);
                black_box(tree.insert(n).is_ok());
            }
            for &n in &small {
                black_box(tree.remove(&n));
            }
            assert!(tree.is_empty());
        })
    });
    drop(bench);

    let mut std_set = BTreeSet::new();
    let mut custom_tree = AvlTree::ordered();

    for &n in &large {
        std_set.insert(n);
        let _ = custom_tree.insert(n);
    }

    let mut bench = criterion.benchmark_group("contains");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            for &n in &large {
                let n = black_box(n);
                black_box(std_set.contains(&n));
                black_box(std_set.contains(&n.wrapping_add(1)));
            }
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            for &n in &large {
                let n = black_box(n);
                black_box(custom_tree.contains(&n));
                black_box(custom_tree.contains(&n.wrapping_add(1)));
            }
        })
    });
    drop(bench);

    let mut bench = criterion.benchmark_group("iterate");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            for n in &std_set {
                black_box(n);
            }
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            for n in &custom_tree {
                black_box(n);
            }
        })
    });
    drop(bench);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

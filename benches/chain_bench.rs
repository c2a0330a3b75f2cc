use criterion::{criterion_group, criterion_main, Criterion};
use fastrand::Rng;
use pennant::chain::Chain;
use pennant::optimizer::{mutation, run_branch_and_bound};
use pennant::pile::Pile;
use std::hint::black_box;

fn bench_chain(c: &mut Criterion) {
    let pile: Pile = "a=8,b=7,c=6,d=5,e=4".parse().unwrap();
    let colors = mutation::expand_pile(&pile);

    c.bench_function("append_full_chain", |b| {
        b.iter(|| {
            let mut chain = Chain::new(colors.len());
            for color in &colors {
                chain.push(color.clone()).unwrap();
            }
            black_box(chain.quality())
        })
    });

    let mut rng = Rng::with_seed(42);
    let base = mutation::generate_random_chain(&pile, &mut rng).unwrap();
    let n = base.len();
    c.bench_function("swap_random_pair", |b| {
        let mut chain = base.clone();
        b.iter(|| {
            chain.swap(rng.usize(0..n), rng.usize(0..n)).unwrap();
            black_box(chain.quality())
        })
    });

    c.bench_function("quality_index", |b| b.iter(|| black_box(base.quality_index())));

    let demo = Pile::demo();
    c.bench_function("branch_and_bound_demo", |b| {
        b.iter(|| black_box(run_branch_and_bound(&demo).unwrap().len()))
    });
}

criterion_group!(benches, bench_chain);
criterion_main!(benches);

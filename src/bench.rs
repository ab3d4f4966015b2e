use std::hint::black_box;

use test::Bencher;

use crate::{Enumerable, filter, quick_sort, sort};

const N: usize = 2 << 12;

/// Deterministic permutation-like input so every run sorts the same data
fn scrambled(n: usize) -> Vec<u64> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

#[bench]
fn bench_sort(bencher: &mut Bencher) {
    let input = scrambled(N);
    bencher.iter(|| {
        let mut seq = input.clone();
        sort(&mut seq, |a, b| a <= b);
        black_box(seq);
    });
}

#[bench]
fn bench_quick_sort(bencher: &mut Bencher) {
    let input = scrambled(N);
    bencher.iter(|| {
        let mut seq = input.clone();
        quick_sort(&mut seq, |a, b| a <= b);
        black_box(seq);
    });
}

#[bench]
fn bench_std_sort_unstable(bencher: &mut Bencher) {
    let input = scrambled(N);
    bencher.iter(|| {
        let mut seq = input.clone();
        seq.sort_unstable();
        black_box(seq);
    });
}

#[bench]
fn bench_enumerable_chain(bencher: &mut Bencher) {
    let seq = Enumerable::new(scrambled(N));
    bencher.iter(|| {
        let res = seq.filter(|x| x % 3 != 0).map(|x| x >> 1).sort(|a, b| a >= b);
        black_box(res);
    });
}

#[bench]
fn bench_filter(bencher: &mut Bencher) {
    let input = scrambled(N);
    bencher.iter(|| {
        let res = filter(black_box(&input), |x| x % 2 == 0);
        black_box(res);
    });
}

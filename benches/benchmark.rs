use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mimalloc::MiMalloc;
use natural_deduction_rs::run;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const EXAMPLES: [&str; 3] = [
    "goal (a => b => a)\nimplI\nimplI\nassm 1",
    "goal ((a & b) => (b & a))\nimplI\nandI\n- andE1 (a & b)\nassm 1\n- andE2 (a & b)\nassm 1",
    "goal (p or q) => (q or p)\nimplI\norE (p or q)\n- assm 1\n- orI2\nassm 2\n- orI1\nassm 3",
];

/// `goal (c & ... & c) => (c & ... & c)` over `n` distinct variables, closed by one assumption.
fn conjunction_script(n: usize) -> String {
    let conj = (1..=n)
        .map(|i| format!("a{}", "x".repeat(i)))
        .collect::<Vec<_>>()
        .join(" & ");
    let mut s = format!("goal ({conj}) => ({conj})\nimplI\nassm 1");
    s.push('\n');
    s
}

fn from_examples(c: &mut Criterion) {
    let mut group = c.benchmark_group("examples");
    for (i, s) in EXAMPLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), s, |b, s| {
            b.iter(|| run(s).unwrap());
        });
    }
    group.finish();
}

fn from_long_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_formula");
    group.sample_size(10);
    for n in [10, 100, 1000] {
        let s = conjunction_script(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &s, |b, s| {
            b.iter(|| run(s).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, from_examples, from_long_formula);
criterion_main!(benches);

//! Benchmarks for validation chains.
//!
//! Measures single checks on both outcomes and small realistic chains;
//! failure paths pay for one `format!` and the error construction.

use std::hint::black_box;

use argus::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_single_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_check");

    group.bench_function("is_between_pass", |b| {
        b.iter(|| ensure!(black_box(50)).is_between(0, 100));
    });

    group.bench_function("is_between_fail", |b| {
        b.iter(|| ensure!(black_box(500)).is_between(0, 100));
    });

    group.bench_function("is_not_whitespace_pass", |b| {
        b.iter(|| ensure!(black_box("lorem ipsum")).is_not_whitespace());
    });

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    group.bench_function("three_numeric_checks_pass", |b| {
        b.iter(|| -> Result<i32, ValidationError> {
            Ok(ensure!(black_box(50))
                .is_greater_than(0)?
                .is_less_than(100)?
                .is_not_equal_to(13)?
                .into_value())
        });
    });

    group.bench_function("string_checks_pass", |b| {
        b.iter(|| -> Result<&str, ValidationError> {
            Ok(ensure!(black_box("hello"))
                .is_not_empty()?
                .is_not_whitespace()?
                .into_value())
        });
    });

    group.bench_function("fail_on_first_of_three", |b| {
        b.iter(|| -> Result<i32, ValidationError> {
            Ok(ensure!(black_box(-1))
                .is_greater_than(0)?
                .is_less_than(100)?
                .is_not_equal_to(13)?
                .into_value())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_single_check, bench_chain);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlforge::{SelectBuilder, UpdateBuilder};

/// Build a SELECT with `n` columns and `n` conditional filters:
/// SELECT col0, col1, ... FROM t WHERE col0 = 0 AND col1 = 1 ...
fn build_select(n: usize) -> SelectBuilder {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();

    let mut builder = SelectBuilder::new()
        .columns(&column_refs)
        .from("t")
        .where_clause("col0 = 0");
    for i in 1..n {
        builder = builder.and(&format!("col{i} = {i}"));
    }
    builder
}

/// Build an UPDATE with `n` SET assignments.
fn build_update(n: usize) -> UpdateBuilder {
    UpdateBuilder::new()
        .table("t")
        .set((0..n).map(|i| (format!("col{i}"), i.to_string())))
        .where_clause("id = 1")
}

fn bench_select_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble/select");

    for n in [1, 5, 10, 50, 100] {
        let builder = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &builder, |b, builder| {
            b.iter(|| black_box(builder.assemble()));
        });
    }

    group.finish();
}

fn bench_select_build_and_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble/select_build_and_assemble");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let builder = build_select(n);
                black_box(builder.assemble())
            });
        });
    }

    group.finish();
}

fn bench_update_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble/update");

    for n in [1, 5, 20, 100] {
        let builder = build_update(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &builder, |b, builder| {
            b.iter(|| black_box(builder.assemble()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select_assemble,
    bench_select_build_and_assemble,
    bench_update_assemble
);
criterion_main!(benches);

use clausekit::{
    Map, SelectQuery, Statement, Value, parse_insert_values, parse_update_values, parse_where,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// `{col0: 0, col1: ">= 1", col2: "IN (2)", ...}` cycling through the
/// condition templates.
fn condition_map(n: usize) -> Value {
    let map: Map = (0..n)
        .map(|i| {
            let condition: Value = match i % 4 {
                0 => Value::Int(i as i64),
                1 => format!(">= {i}").into(),
                2 => format!("IN ({i})").into(),
                _ => format!("LIKE \"%{i}\"").into(),
            };
            (format!("col{i}"), condition)
        })
        .collect();
    Value::Map(map)
}

fn pair_text(n: usize) -> String {
    (0..n)
        .map(|i| format!("col{i} = value{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bench_where_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("clause/where_map");

    for n in [1, 5, 10, 50] {
        let condition = condition_map(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &condition, |b, cond| {
            b.iter(|| black_box(parse_where(cond)));
        });
    }

    group.finish();
}

fn bench_pair_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("clause/pair_text");

    for n in [1, 5, 20, 100] {
        let values = Value::from(pair_text(n));
        group.bench_with_input(BenchmarkId::new("insert", n), &values, |b, values| {
            b.iter(|| black_box(parse_insert_values(values)));
        });
        group.bench_with_input(BenchmarkId::new("update", n), &values, |b, values| {
            b.iter(|| black_box(parse_update_values(values)));
        });
    }

    group.finish();
}

fn bench_select_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/select_build");

    for n in [1, 10, 50] {
        let condition = condition_map(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &condition, |b, cond| {
            b.iter(|| {
                let sql = SelectQuery::new("t")
                    .columns(["id", "name"])
                    .join("INNER", "u", "t.uid = u.id")
                    .filter(cond.clone())
                    .order_by("id DESC")
                    .limit(100)
                    .build_sql();
                black_box(sql)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_where_map, bench_pair_text, bench_select_build);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use matins::matins_data::{ColumnKind, Value};
use matins::{
    Column, CompareConfig, Dataset, Schema, build_heatmap_matrix, build_parallel_coordinates,
    build_radar_series, filter_by_formula, min_max_scale,
};

const PROPS: [&str; 6] = [
    "nsites",
    "volume",
    "density",
    "formation_energy_per_atom",
    "energy_above_hull",
    "band_gap",
];

fn synthetic_dataset(rows: usize) -> Dataset {
    let mut columns = vec![
        Column::new("material_id", ColumnKind::Text),
        Column::new("formula_pretty", ColumnKind::Text),
    ];
    columns.extend(PROPS.iter().map(|p| Column::new(*p, ColumnKind::Float)));
    let schema = Schema::new(columns).unwrap();

    let data = (0..rows)
        .map(|i| {
            let mut row = vec![
                Value::Text(format!("mp-{i}")),
                Value::Text(format!("Fe{}O{}", i % 7 + 1, i % 5 + 1)),
            ];
            row.extend((0..PROPS.len()).map(|j| {
                if (i + j) % 11 == 0 {
                    Value::Null
                } else {
                    Value::Float(((i * 31 + j * 17) % 97) as f64 / 7.0)
                }
            }));
            row
        })
        .collect();
    Dataset::new(schema, data).unwrap()
}

fn bench_filter(c: &mut Criterion) {
    let ds = synthetic_dataset(500);
    c.bench_function("filter_by_formula_500", |b| {
        b.iter(|| black_box(filter_by_formula(black_box(&ds), black_box("fe3o"))));
    });
}

fn bench_min_max(c: &mut Criterion) {
    let col: Vec<Option<f64>> = (0..500)
        .map(|i| if i % 13 == 0 { None } else { Some(i as f64 * 0.37) })
        .collect();
    c.bench_function("min_max_scale_500", |b| {
        b.iter(|| black_box(min_max_scale(black_box(&col), 1e-12)));
    });
}

fn bench_charts(c: &mut Criterion) {
    let ds = synthetic_dataset(500);
    let config = CompareConfig::default();
    let entities = ["Fe1O1", "Fe2O2", "Fe3O3", "Fe4O4", "Fe5O5"];

    c.bench_function("radar_5x6", |b| {
        b.iter(|| black_box(build_radar_series(&ds, &entities, &PROPS, &config).unwrap()));
    });

    c.bench_function("heatmap_5x6", |b| {
        b.iter(|| black_box(build_heatmap_matrix(&ds, &entities, &PROPS, &config).unwrap()));
    });

    c.bench_function("parallel_5x6", |b| {
        b.iter(|| {
            black_box(build_parallel_coordinates(&ds, &entities, &PROPS, &config).unwrap())
        });
    });
}

criterion_group!(benches, bench_filter, bench_min_max, bench_charts);
criterion_main!(benches);

use criterion::*;
use fincard_core::cards::{clean_cards, LabelRules};
use fincard_core::coerce;
use fincard_core::pipeline::{run_asset, ScrapedAssets};
use fincard_core::sites::investidor_10;
use std::fs::File;
use std::io::Read;

// read a json file to a string
#[inline]
fn read_file_to_string(path: &str) -> String {
    let mut file = File::open(path)
        .map_err(|err| {
            println!("Unable to open file: {:?}", err);
            err
        })
        .unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .expect("Unable to read file");
    contents
}

#[inline]
fn de_assets(to_de: &str) -> ScrapedAssets {
    serde_json::from_str(to_de).expect("Unable to deserialize")
}

// deserialize scraped cards
// ----------------------------------------------------------
fn benchmark_deserialization(c: &mut Criterion) {
    let file_contents = read_file_to_string("./benches/files/assets.json");

    c.bench_function("deserialize cards", |b| {
        b.iter(|| {
            let _assets = de_assets(black_box(&file_contents));
        })
    });
}

// clean cards
// ----------------------------------------------------------
fn benchmark_cleaning(c: &mut Criterion) {
    let assets = de_assets(&read_file_to_string("./benches/files/assets.json"));
    let sections = assets.assets[0].views["kpi"].clone();
    let rules = LabelRules::portuguese();

    c.bench_function("clean kpi cards", |b| {
        b.iter(|| {
            for section in sections.iter().cloned() {
                let _cleaned = clean_cards(black_box(section), &rules);
            }
        })
    });
}

// coerce values
// ----------------------------------------------------------
fn benchmark_coercion(c: &mut Criterion) {
    let values = [
        Some("R$ 1.234.567,89"),
        Some("12,34"),
        Some("-"),
        Some("0,00"),
        None,
        Some("abc"),
    ];

    c.bench_function("coerce numeric column", |b| {
        b.iter(|| coerce::coerce_numeric_column(black_box(&values)))
    });

    c.bench_function("parse word scaled", |b| {
        b.iter(|| coerce::parse_word_scaled_number(black_box(Some("1.5 BILHÕES"))))
    });
}

// whole asset
// ----------------------------------------------------------
fn benchmark_pipeline(c: &mut Criterion) {
    let assets = de_assets(&read_file_to_string("./benches/files/assets.json"));
    let site = investidor_10::stocks();

    c.bench_function("run asset", |b| {
        b.iter(|| run_asset(&site, black_box(&assets.assets[0])).expect("asset runs"))
    });
}

criterion_group!(
    benches,
    benchmark_deserialization,
    benchmark_cleaning,
    benchmark_coercion,
    benchmark_pipeline,
);
criterion_main!(benches);

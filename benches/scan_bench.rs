//! Benchmarks for the daybook scan and reshape
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use daybook::collect::{DateBounds, Scanner};
use daybook::config::ScanConfig;
use daybook::dataset::DatasetCollection;
use daybook::document::{Document, MemorySource};
use daybook::extract::{tag, text};
use daybook::query::{Query, QueryKind, QueryOptions, QuerySet};

fn create_corpus(days: usize) -> (Vec<Document>, MemorySource) {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut source = MemorySource::new();

    let documents = (0..days)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            let path = format!("daily/{}.md", date.format("%Y-%m-%d"));
            source.insert(
                path.clone(),
                format!(
                    "# {}\n#mood:{}\n#bp:{}/{}\nwalked {}km, had coffee\n- [x] journal",
                    date,
                    i % 10,
                    110 + i % 20,
                    70 + i % 10,
                    i % 7
                ),
            );
            Document::new(path, date)
                .tag("exercise/running")
                .link("Gym")
                .field("weight", 70.0 + (i % 5) as f64)
        })
        .collect();

    (documents, source)
}

fn create_queries() -> QuerySet {
    QuerySet::new()
        .with(QueryKind::Tag, "mood", QueryOptions::default())
        .with(QueryKind::Tag, "bp[0]", QueryOptions::default())
        .with(QueryKind::Tag, "exercise", QueryOptions::new().accumulate(true))
        .with(QueryKind::Frontmatter, "weight", QueryOptions::default())
        .with(QueryKind::WikiLink, "Gym", QueryOptions::default())
        .with(QueryKind::Text, r"walked (?<value>\d+)km", QueryOptions::new().gap_value(0.0))
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let content = "#mood:7 #sleep:8\n".repeat(200);

    let query = Query::new(0, QueryKind::Tag, "mood");
    let pattern = tag::content_pattern(&query).unwrap();
    group.bench_function("tag_content", |b| {
        b.iter(|| {
            tag::extract(
                &query,
                &QueryOptions::default(),
                &[],
                Some(black_box(content.as_str())),
                Some(&pattern),
            )
        })
    });

    let text_pattern = text::compile(r"#sleep:(?<value>\d+)").unwrap();
    group.bench_function("text_value_group", |b| {
        b.iter(|| text::extract(&text_pattern, &QueryOptions::default(), black_box(content.as_str()), 10_000))
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let queries = create_queries();
    let config = ScanConfig::default();

    let mut group = c.benchmark_group("scan");

    for days in [30, 365, 3650] {
        let (documents, source) = create_corpus(days);
        group.throughput(Throughput::Elements(days as u64));

        group.bench_function(format!("scan_{}", days), |b| {
            b.iter(|| {
                rt.block_on(async {
                    let mut scanner = Scanner::new(&queries, &config);
                    scanner.scan_all(black_box(&documents), &source).await;
                    scanner.finish()
                })
            })
        });

        let mut scanner = Scanner::new(&queries, &config);
        rt.block_on(scanner.scan_all(&documents, &source));
        let (collector, range, _) = scanner.finish();

        group.bench_function(format!("reshape_{}", days), |b| {
            b.iter(|| {
                let axis = range.resolve(&DateBounds::new()).unwrap();
                let mut collection = DatasetCollection::reshape(axis, black_box(&queries), &collector);
                collection.apply_options(&queries);
                collection
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_scan);
criterion_main!(benches);

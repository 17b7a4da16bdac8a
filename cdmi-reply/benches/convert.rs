use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cdmi_reply::{parse_metadata, parse_value, Listing, ReplyContext};
use serde_json::json;

fn create_metadata_reply(entries: usize) -> Vec<u8> {
    let mut metadata = serde_json::Map::new();
    metadata.insert("cdmi_size".to_string(), json!("1048576"));
    metadata.insert("cdmi_mtime".to_string(), json!("2012-01-12T14:33:12Z"));
    for i in 0..entries {
        metadata.insert(
            format!("user_{}", i),
            json!({
                "count": i,
                "enabled": i % 2 == 0,
                "tags": ["a", "b", i.to_string()],
            }),
        );
    }

    serde_json::to_vec(&json!({
        "objectType": "application/cdmi-object",
        "objectID": "00007E7F0010EB9092B29F6CD6AD6824",
        "metadata": metadata,
    }))
    .unwrap()
}

fn create_listing_reply(children: usize) -> Vec<u8> {
    let names: Vec<String> = (0..children)
        .map(|i| {
            if i % 4 == 0 {
                format!("dir_{}/", i)
            } else {
                format!("file_{}.dat", i)
            }
        })
        .collect();
    serde_json::to_vec(&json!({ "children": names })).unwrap()
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let ctx = ReplyContext::default();

    for entries in [10, 100, 1000] {
        let reply = create_metadata_reply(entries);

        group.bench_with_input(
            BenchmarkId::new("parse_value", entries),
            &reply,
            |b, reply| {
                b.iter(|| black_box(parse_value(&ctx, black_box(reply)).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parse_metadata", entries),
            &reply,
            |b, reply| {
                b.iter(|| black_box(parse_metadata(&ctx, black_box(reply)).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");
    let ctx = ReplyContext::default();

    for children in [100, 10_000] {
        let reply = create_listing_reply(children);

        group.bench_with_input(
            BenchmarkId::from_parameter(children),
            &reply,
            |b, reply| {
                b.iter(|| black_box(Listing::parse(&ctx, black_box(reply), Some("bucket/")).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_listing);
criterion_main!(benches);

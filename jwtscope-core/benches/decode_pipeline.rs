use criterion::{Criterion, criterion_group, criterion_main};
use jwtscope_core::{base64_url_decode, format_timestamp, safe_json_parse};
use std::hint::black_box;

const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
const PAYLOAD: &str =
    "eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";

fn bench_decode_pipeline(c: &mut Criterion) {
    c.bench_function("base64url_decode_payload", |b| {
        b.iter(|| base64_url_decode(black_box(PAYLOAD)))
    });

    c.bench_function("decode_and_parse_header", |b| {
        b.iter(|| {
            base64_url_decode(black_box(HEADER))
                .ok()
                .and_then(safe_json_parse)
        })
    });

    c.bench_function("format_timestamp", |b| {
        b.iter(|| format_timestamp(black_box(1_516_239_022)))
    });
}

criterion_group!(benches, bench_decode_pipeline);
criterion_main!(benches);

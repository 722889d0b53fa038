//! Performance benchmarks for stream decoding
//!
//! Measures end-to-end decode throughput over in-memory SSE streams.
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eventfeed::sse::SseFrameSource;
use eventfeed::FrameDecoder;

/// Build an SSE stream of `events` log events followed by the end frame.
fn generate_stream(events: usize) -> Vec<u8> {
    let mut stream = String::from(": connected\n\n");
    for i in 0..events {
        stream.push_str("event: event\n");
        stream.push_str(&format!(
            "data: {{\"event\": {{\"type\": \"log\", \"origin\": \"stdout\", \"payload\": \"line {} of build output\\n\"}}}}\n\n",
            i
        ));
    }
    stream.push_str("event: end\n\n");
    stream.into_bytes()
}

/// Benchmark draining a full stream through the decoder.
fn bench_decode_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_stream");

    for size in [100, 1_000, 10_000].iter() {
        let stream = generate_stream(*size);
        group.throughput(Throughput::Bytes(stream.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &stream, |b, stream| {
            b.iter(|| {
                let source = SseFrameSource::new(Cursor::new(stream.clone()));
                let mut decoder = FrameDecoder::<_, serde_json::Value>::new(source);

                let mut count = 0usize;
                while let Some(event) = decoder.next_event().unwrap() {
                    black_box(event);
                    count += 1;
                }
                count
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode_stream);
criterion_main!(benches);

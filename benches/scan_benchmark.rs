//! Scan benchmark: Measure line scanning and clipping throughput.
//!
//! Target: scanning a typical colorized access-log line well under the
//! per-event budget of the display loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lognowrap::render::{clip_line, OutputBuffer};
use lognowrap::scan::Line;

const PLAIN: &str = r#"203.0.113.7 - - [23/Dec/2025:11:17:05 -0600] "GET /index.html HTTP/1.1" 200 1532 "https://example.com/" "Mozilla/5.0""#;

fn colored_line() -> String {
    format!(
        "\x1b[90m[23/Dec/2025:11:17:05 -0600]\x1b[0m \x1b[96m203.0.113.7\x1b[0m \
         GET    \x1b[92m200\x1b[0m \x1b[32m[H]\x1b[0m /index.html \
         \x1b[90mRef: \"https://example.com/\" UA: \"Mozilla/5.0\"\x1b[0m"
    )
}

fn scan_plain(c: &mut Criterion) {
    c.bench_function("scan_plain_ascii", |b| {
        b.iter(|| Line::scan(black_box(PLAIN)))
    });
}

fn scan_colored(c: &mut Criterion) {
    let line = colored_line();
    c.bench_function("scan_colored", |b| b.iter(|| Line::scan(black_box(&line))));
}

fn scan_cjk(c: &mut Criterion) {
    let line = "リクエスト ログ 日本語".repeat(8);
    c.bench_function("scan_cjk", |b| b.iter(|| Line::scan(black_box(&line))));
}

fn clip_mid_window(c: &mut Criterion) {
    let line = Line::scan(&colored_line());
    let mut out = OutputBuffer::new();
    c.bench_function("clip_mid_window", |b| {
        b.iter(|| {
            out.clear();
            clip_line(black_box(&line), 40, 80, &mut out);
        });
    });
}

criterion_group!(benches, scan_plain, scan_colored, scan_cjk, clip_mid_window);
criterion_main!(benches);

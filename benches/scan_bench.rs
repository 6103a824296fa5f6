use criterion::{Criterion, criterion_group, criterion_main};
use mdextract::helpers::split_lines;
use mdextract::render::heading_items;
use mdextract::{build_link_index, scan_links, scan_list_headings, segments};
use std::hint::black_box;

fn generate_note() -> String {
    let mut content = String::with_capacity(40_000);
    content.push_str("# Large Note\n\n");
    for i in 0..200 {
        content.push_str(&format!("- ## Section {} with [[Page {}|alias {}]]\n", i, i, i));
        for j in 0..5 {
            content.push_str(&format!(
                "  - item {} of {} linking [[Other {}]] and [[Third]] plus text\n",
                j, i, j
            ));
        }
        if i % 10 == 0 {
            content.push_str("\n```\n- ## not scanned by the index [[Code]]\n```\n\n");
        }
    }
    content
}

fn bench_scan_headings(c: &mut Criterion) {
    let content = generate_note();
    c.bench_function("scan_list_headings", |b| {
        b.iter(|| black_box(scan_list_headings(split_lines(&content)).count()))
    });
}

fn bench_scan_links(c: &mut Criterion) {
    let content = generate_note();
    c.bench_function("scan_links", |b| {
        b.iter(|| black_box(scan_links(&content).count()))
    });
}

fn bench_segments(c: &mut Criterion) {
    let line = "Intro [[A]] then [[B|bee]] and an [[unterminated tail ".repeat(20);
    c.bench_function("segments", |b| b.iter(|| black_box(segments(&line).count())));
}

fn bench_heading_view(c: &mut Criterion) {
    let content = generate_note();
    c.bench_function("heading_items", |b| {
        b.iter(|| black_box(heading_items(&content, true)))
    });
}

fn bench_link_index(c: &mut Criterion) {
    let content = generate_note();
    c.bench_function("build_link_index", |b| {
        b.iter(|| black_box(build_link_index(&content)))
    });
}

criterion_group!(
    benches,
    bench_scan_headings,
    bench_scan_links,
    bench_segments,
    bench_heading_view,
    bench_link_index
);
criterion_main!(benches);

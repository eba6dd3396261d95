use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use dom::Document;
use urls::DocumentUrls;

const SMALL_LINKS: usize = 64;
const LARGE_LINKS: usize = 5_000;

fn make_page(links: usize) -> String {
    let mut body = String::with_capacity(links * 96 + 128);
    body.push_str(r#"<html><head><base href="/assets/v2/"></head><body>"#);
    for i in 0..links {
        body.push_str(&format!(
            r#"<a href="../p/{i}.html">l</a><img src="{i}.png" srcset="{i}.png 1x, {i}@2x.png 2x">"#
        ));
    }
    body.push_str("</body></html>");
    body
}

fn bench_resolve_single(c: &mut Criterion) {
    let doc = Document::parse_with_url(&make_page(1), "https://bench.example/dir/page.html");
    c.bench_function("bench_resolve_single", |b| {
        b.iter(|| black_box(doc.resolve_relative_url(black_box("../images/photo.png"))));
    });
}

fn bench_sweep_small(c: &mut Criterion) {
    let input = make_page(SMALL_LINKS);
    c.bench_function("bench_sweep_small", |b| {
        b.iter_batched(
            || Document::parse_with_url(&input, "https://bench.example/dir/page.html"),
            |doc| {
                doc.resolve_all_relative_urls();
                black_box(doc);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_sweep_large(c: &mut Criterion) {
    let input = make_page(LARGE_LINKS);
    c.bench_function("bench_sweep_large", |b| {
        b.iter_batched(
            || Document::parse_with_url(&input, "https://bench.example/dir/page.html"),
            |doc| {
                doc.resolve_all_relative_urls();
                black_box(doc);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_resolve_single,
    bench_sweep_small,
    bench_sweep_large
);
criterion_main!(benches);

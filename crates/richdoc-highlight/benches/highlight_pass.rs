use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use richdoc_core::Node;
use richdoc_highlight::{
    Grammar, GrammarRegistry, HighlightEngine, HighlightOptions, RegexTokenizer,
};
use richdoc_lang::Language;

fn region_source(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 48);
    for i in 0..lines {
        out.push_str(&format!(
            "let value_{i} = {i} + 42; // running total line\n"
        ));
    }
    out
}

fn large_doc(regions: usize) -> Node {
    let source = region_source(40);
    let mut children = Vec::with_capacity(regions * 2);
    for _ in 0..regions {
        children.push(Node::new(
            "paragraph",
            vec![Node::text("Some prose between the code regions.")],
        ));
        children.push(
            Node::new("code_block", vec![Node::text(source.clone())]).with_attr("language", "rust"),
        );
    }
    Node::new("doc", children)
}

fn engine() -> HighlightEngine {
    let mut registry = GrammarRegistry::new();
    registry.register(Grammar::new(
        Language::Rust,
        RegexTokenizer::rust_default().unwrap(),
    ));
    HighlightEngine::new(HighlightOptions::default(), registry)
}

fn bench_cold_pass(c: &mut Criterion) {
    let doc = large_doc(50);
    c.bench_function("highlight_pass/cold_50_regions", |b| {
        b.iter_batched(
            engine,
            |mut engine| {
                black_box(engine.run_pass(black_box(&doc)).len());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_warm_pass(c: &mut Criterion) {
    let doc = large_doc(50);
    let mut engine = engine();
    engine.run_pass(&doc);
    c.bench_function("highlight_pass/warm_50_regions", |b| {
        b.iter(|| {
            black_box(engine.run_pass(black_box(&doc)).len());
        })
    });
}

criterion_group!(benches, bench_cold_pass, bench_warm_pass);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use doc_similarity::{
    inverse_document_frequency, most_frequent_words, similarity_score, tfidf, tokenize,
    word_frequencies, MemorySource,
};

const WORDS: &[&str] = &[
    "rust", "memory", "safety", "borrow", "checker", "thread", "async", "trait", "generic",
    "lifetime", "crate", "module", "macro", "cargo", "iterator", "closure",
];

/// deterministic pseudo text, no rng dependency needed
fn synthetic_text(seed: usize, len: usize) -> String {
    let mut x = seed.wrapping_mul(2654435761) | 1;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        out.push(WORDS[x % WORDS.len()]);
    }
    out.join(" ")
}

fn overlap_benchmark(c: &mut Criterion) {
    let a = synthetic_text(1, 20_000);
    let b = synthetic_text(2, 20_000);

    c.bench_function("word_frequencies", |bench| {
        bench.iter(|| word_frequencies(&tokenize(&a)))
    });

    let fa = word_frequencies(&tokenize(&a));
    let fb = word_frequencies(&tokenize(&b));
    c.bench_function("similarity_score", |bench| bench.iter(|| similarity_score(&fa, &fb)));
    c.bench_function("most_frequent_words", |bench| bench.iter(|| most_frequent_words(&fa, &fb)));
}

fn tfidf_benchmark(c: &mut Criterion) {
    let ids: Vec<String> = (0..64).map(|i| format!("doc{}", i)).collect();
    let source: MemorySource = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), synthetic_text(i + 10, 5_000)))
        .collect();

    c.bench_function("inverse_document_frequency", |bench| {
        bench.iter(|| inverse_document_frequency(&source, &ids))
    });
    c.bench_function("tfidf", |bench| bench.iter(|| tfidf(&source, "doc0", &ids)));
}

criterion_group!(benches, overlap_benchmark, tfidf_benchmark);
criterion_main!(benches);

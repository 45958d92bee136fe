use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use reelrank_pipeline::{build_matrix, TfidfVectorizer};

/// Synthetic tag-text corpus: `n_docs` documents of `doc_len` words drawn
/// from a fixed fake vocabulary.
fn synthetic_corpus(n_docs: usize, doc_len: usize, vocab: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n_docs)
        .map(|_| {
            (0..doc_len)
                .map(|_| format!("tag{}", rng.random_range(0..vocab)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_vectorize(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000, 40, 2_000);

    c.bench_function("tfidf_fit_transform_1k_docs", |b| {
        b.iter(|| {
            let mut vectorizer = TfidfVectorizer::new().with_min_df(2);
            black_box(vectorizer.fit_transform(black_box(&corpus)).unwrap())
        })
    });
}

fn bench_similarity(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000, 40, 2_000);
    let mut vectorizer = TfidfVectorizer::new().with_min_df(2);
    let vectors = vectorizer.fit_transform(&corpus).unwrap();

    c.bench_function("similarity_matrix_1k_items", |b| {
        b.iter(|| black_box(build_matrix(black_box(&vectors)).unwrap()))
    });
}

criterion_group!(benches, bench_vectorize, bench_similarity);
criterion_main!(benches);

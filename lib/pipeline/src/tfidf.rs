use crate::stopwords::StopWords;
use ahash::{AHashMap, AHashSet};
use reelrank_core::{Error, Result, SparseVector};
use tracing::info;

/// TF-IDF vectorizer over the tag-text corpus.
///
/// Fits a term-weighting model on the full corpus and transforms every
/// document into an L2-normalized sparse vector in a shared vocabulary
/// space, so cosine similarity reduces to a plain dot product.
///
/// Weighting: `tf(t, d) * idf(t)` with smoothed IDF
/// `ln((1 + n) / (1 + df(t))) + 1`, which never produces a zero or negative
/// term weight.
///
/// There are no randomized components: identical corpus and identical
/// parameters always yield identical vectors. Vocabulary columns are
/// assigned in lexicographic term order.
///
/// # Examples
///
/// ```rust
/// use reelrank_pipeline::TfidfVectorizer;
///
/// let docs = vec!["space alien horror", "space marine war"];
/// let mut vectorizer = TfidfVectorizer::new();
/// let vectors = vectorizer.fit_transform(&docs).unwrap();
/// assert_eq!(vectors.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    min_df: usize,
    max_features: Option<usize>,
    ngram_range: (usize, usize),
    stop_words: StopWords,
    /// term -> column index
    vocabulary: AHashMap<String, u32>,
    /// per-column inverse document frequency
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the default parameters: `min_df = 1`,
    /// no feature cap, unigrams only, English stopword list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_df: 1,
            max_features: None,
            ngram_range: (1, 1),
            stop_words: StopWords::english(),
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Set the minimum document frequency threshold.
    ///
    /// Terms appearing in fewer than `min_df` documents are dropped.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    /// Cap the vocabulary at the `max_features` most frequent terms across
    /// the corpus. Ties are broken lexicographically.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Set the n-gram range. N-grams above unigrams are joined with `_`.
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.ngram_range = (min_n, max_n.max(min_n));
        self
    }

    /// Replace the stopword policy.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Terms of one document after stopword filtering and n-gram expansion.
    ///
    /// Documents are expected to be normalized tag text (lowercase,
    /// whitespace-delimited); no further normalization happens here.
    fn terms(&self, doc: &str) -> Vec<String> {
        let tokens: Vec<&str> = doc
            .split_whitespace()
            .filter(|t| !self.stop_words.is_stop_word(t))
            .collect();

        let mut terms = Vec::with_capacity(tokens.len());
        for n in self.ngram_range.0..=self.ngram_range.1 {
            for ngram in tokens.windows(n) {
                terms.push(ngram.join("_"));
            }
        }
        terms
    }

    /// Learn the vocabulary and IDF weights from the full corpus.
    pub fn fit<S: AsRef<str>>(&mut self, docs: &[S]) -> Result<()> {
        if docs.is_empty() {
            return Err(Error::Build("cannot fit on an empty corpus".to_string()));
        }

        let n_docs = docs.len();
        let mut doc_freq: AHashMap<String, usize> = AHashMap::new();
        let mut term_freq: AHashMap<String, usize> = AHashMap::new();

        for doc in docs {
            let mut doc_terms: AHashSet<String> = AHashSet::new();
            for term in self.terms(doc.as_ref()) {
                *term_freq.entry(term.clone()).or_insert(0) += 1;
                doc_terms.insert(term);
            }
            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut retained: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df)
            .collect();

        if let Some(max_features) = self.max_features {
            retained.sort_by(|a, b| {
                let freq_a = term_freq.get(&a.0).copied().unwrap_or(0);
                let freq_b = term_freq.get(&b.0).copied().unwrap_or(0);
                freq_b.cmp(&freq_a).then_with(|| a.0.cmp(&b.0))
            });
            retained.truncate(max_features);
        }

        // Column assignment in lexicographic term order keeps the vector
        // space identical across rebuilds.
        retained.sort_by(|a, b| a.0.cmp(&b.0));

        if retained.is_empty() {
            return Err(Error::Build(
                "vocabulary is empty after document-frequency filtering".to_string(),
            ));
        }

        self.idf = retained
            .iter()
            .map(|(_, df)| ((1.0 + n_docs as f32) / (1.0 + *df as f32)).ln() + 1.0)
            .collect();
        self.vocabulary = retained
            .into_iter()
            .enumerate()
            .map(|(column, (term, _))| (term, column as u32))
            .collect();

        info!(
            terms = self.vocabulary.len(),
            docs = n_docs,
            min_df = self.min_df,
            "fitted tf-idf vocabulary"
        );
        Ok(())
    }

    /// Transform documents into L2-normalized TF-IDF vectors using the
    /// fitted vocabulary.
    pub fn transform<S: AsRef<str>>(&self, docs: &[S]) -> Result<Vec<SparseVector>> {
        if self.vocabulary.is_empty() {
            return Err(Error::Build(
                "vocabulary is empty; fit the vectorizer first".to_string(),
            ));
        }

        let mut vectors = Vec::with_capacity(docs.len());
        for doc in docs {
            let mut counts: AHashMap<u32, f32> = AHashMap::new();
            for term in self.terms(doc.as_ref()) {
                if let Some(&column) = self.vocabulary.get(&term) {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }

            let mut weighted: Vec<(u32, f32)> = counts
                .into_iter()
                .map(|(column, tf)| (column, tf * self.idf[column as usize]))
                .collect();
            weighted.sort_by_key(|(column, _)| *column);

            let (indices, values) = weighted.into_iter().unzip();
            let mut vector = SparseVector::new(indices, values);
            vector.normalize();
            vectors.push(vector);
        }
        Ok(vectors)
    }

    /// Fit on the corpus, then transform it.
    pub fn fit_transform<S: AsRef<str>>(&mut self, docs: &[S]) -> Result<Vec<SparseVector>> {
        self.fit(docs)?;
        self.transform(docs)
    }

    /// The fitted vocabulary (term -> column index).
    #[must_use]
    pub fn vocabulary(&self) -> &AHashMap<String, u32> {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

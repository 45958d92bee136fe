//! Fixed English stopword list applied before TF-IDF weighting.
//!
//! Stopwords are common words ("the", "is", "at") that carry little signal
//! for content similarity; removing them shrinks the vocabulary and keeps
//! distinctive terms dominant. The list is fixed for a given build so that
//! rebuilds from the same input stay reproducible.

use ahash::AHashSet;

/// Common English stop words (the usual NLTK/sklearn set).
const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Stopword exclusion set with O(1) lookup.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: AHashSet<&'static str>,
}

impl StopWords {
    /// The fixed English stopword list.
    #[must_use]
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().copied().collect(),
        }
    }

    /// An empty exclusion set (stopword filtering disabled).
    #[must_use]
    pub fn none() -> Self {
        Self {
            words: AHashSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

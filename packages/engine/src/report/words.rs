//! Word-frequency report over fake articles of one subject.
//!
//! Counting uses a [`Vocabulary`] with a fixed capacity. Once it is full, words that
//! have not been seen yet are dropped rather than evicting anything; the result is a
//! bounded approximation, not an error.

use std::collections::HashMap;

use serde::Serialize;

use crate::store::ArticleStore;

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Size-capped word counter that remembers first-encounter order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    capacity: usize,
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
    dropped: usize,
}

impl Vocabulary {
    /// Create an empty vocabulary holding at most `capacity` distinct words.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::new(),
            entries: Vec::new(),
            dropped: 0,
        }
    }

    /// Count one occurrence of `word`.
    ///
    /// Returns `false` when the word is new and the vocabulary is full; the
    /// occurrence is then dropped.
    pub fn record(&mut self, word: &str) -> bool {
        if let Some(&idx) = self.index.get(word) {
            self.entries[idx].count += 1;
            return true;
        }
        if self.entries.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.index.insert(word.to_string(), self.entries.len());
        self.entries.push(WordCount {
            word: word.to_string(),
            count: 1,
        });
        true
    }

    /// Current count for a word, 0 if it is not tracked.
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&idx| self.entries[idx].count)
            .unwrap_or(0)
    }

    /// Number of distinct words tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word has been tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of distinct words.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occurrences dropped because the vocabulary was full.
    #[must_use]
    pub fn dropped_tokens(&self) -> usize {
        self.dropped
    }

    /// Consume the vocabulary into entries ordered by descending count.
    ///
    /// Words with equal counts keep their first-encounter order.
    #[must_use]
    pub fn into_ranked(self) -> Vec<WordCount> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

/// Lowercase a token and strip everything but ASCII letters.
///
/// Returns `None` if nothing is left.
///
/// # Examples
/// ```
/// use newsdesk_engine::report::normalize_token;
///
/// assert_eq!(normalize_token("Trump's"), Some("trumps".to_string()));
/// assert_eq!(normalize_token("2016,"), None);
/// ```
#[must_use]
pub fn normalize_token(token: &str) -> Option<String> {
    let word: String = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Ranked word counts for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequencyReport {
    /// Subject that was analysed.
    pub subject: String,

    /// Vocabulary capacity used.
    pub capacity: usize,

    /// Number of articles whose bodies were counted.
    pub articles_scanned: usize,

    /// Word occurrences not counted because the vocabulary was full.
    pub dropped_tokens: usize,

    /// Words by descending count.
    pub words: Vec<WordCount>,
}

/// Count words in the bodies of fake articles whose subject equals `subject`.
#[must_use]
pub fn word_frequency(store: &ArticleStore, subject: &str, capacity: usize) -> WordFrequencyReport {
    let mut vocabulary = Vocabulary::with_capacity(capacity);
    let mut articles_scanned = 0;

    for article in store
        .iter()
        .filter(|a| a.is_fake() && a.subject == subject)
    {
        articles_scanned += 1;
        for word in article.text.split_whitespace().filter_map(normalize_token) {
            vocabulary.record(&word);
        }
    }

    let dropped_tokens = vocabulary.dropped_tokens();
    if dropped_tokens > 0 {
        tracing::debug!(
            subject,
            capacity,
            dropped_tokens,
            "Vocabulary full, some words were not counted"
        );
    }

    WordFrequencyReport {
        subject: subject.to_string(),
        capacity,
        articles_scanned,
        dropped_tokens,
        words: vocabulary.into_ranked(),
    }
}

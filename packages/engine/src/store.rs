//! Ordered in-memory article collection.
//!
//! The store owns every [`Article`] for the lifetime of the process. It only grows
//! through [`ArticleStore::append`] and only reorders through
//! [`ArticleStore::sort`](crate::sort); there is no removal.

use crate::article::{Article, Label};

/// Ordered collection of articles with label counters and a sortedness flag.
///
/// Invariants:
/// - `count() == count_true() + count_fake()`
/// - `is_sorted()` is true only while the sequence is non-decreasing by
///   [`Article::date_key`]; every append clears it.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    pub(crate) articles: Vec<Article>,
    true_count: usize,
    fake_count: usize,
    pub(crate) sorted: bool,
}

impl ArticleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an article and update the counters.
    ///
    /// Always clears the sorted flag, even when the article would land in order.
    pub fn append(&mut self, article: Article) {
        match article.label {
            Label::True => self.true_count += 1,
            Label::Fake => self.fake_count += 1,
        }
        self.articles.push(article);
        self.sorted = false;
    }

    /// Total number of stored articles.
    #[must_use]
    pub fn count(&self) -> usize {
        self.articles.len()
    }

    /// Number of articles labeled true.
    #[must_use]
    pub fn count_true(&self) -> usize {
        self.true_count
    }

    /// Number of articles labeled fake.
    #[must_use]
    pub fn count_fake(&self) -> usize {
        self.fake_count
    }

    /// Check if the store holds no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Whether the articles are currently in chronological order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Article at a position, in store order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Article> {
        self.articles.get(position)
    }

    /// Iterate over the articles in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }
}

impl Extend<Article> for ArticleStore {
    fn extend<I: IntoIterator<Item = Article>>(&mut self, iter: I) {
        for article in iter {
            self.append(article);
        }
    }
}

impl FromIterator<Article> for ArticleStore {
    fn from_iter<I: IntoIterator<Item = Article>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<'a> IntoIterator for &'a ArticleStore {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

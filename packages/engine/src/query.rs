//! Lookups over the article store.
//!
//! Year lookups rely on chronological order: once sorted, all articles of one year
//! sit in a single contiguous run, so the search stops at the end of that run.
//! They refuse to run on an unsorted store instead of returning partial results.
//! Category lookups scan everything and work in any order.

use crate::article::Article;
use crate::error::{EngineError, Result};
use crate::store::ArticleStore;

impl ArticleStore {
    /// Position of the first article published in `year`.
    ///
    /// Returns `Ok(None)` when no article matches. Year `0` ("unknown") never matches.
    ///
    /// # Errors
    /// [`EngineError::Unsorted`] if the store is not sorted; no scan is attempted.
    pub fn find_first_by_year(&self, year: i32) -> Result<Option<usize>> {
        if !self.sorted {
            return Err(EngineError::Unsorted);
        }
        if year == 0 {
            return Ok(None);
        }
        Ok(self.articles.iter().position(|a| a.year() == year))
    }

    /// All articles published in `year`, in store order.
    ///
    /// An empty result means no article matched.
    ///
    /// # Errors
    /// [`EngineError::Unsorted`] if the store is not sorted.
    pub fn list_by_year(&self, year: i32) -> Result<Vec<&Article>> {
        let Some(first) = self.find_first_by_year(year)? else {
            return Ok(Vec::new());
        };

        let matches: Vec<&Article> = self.articles[first..]
            .iter()
            .take_while(|a| a.year() == year)
            .collect();

        tracing::debug!(year, first, matches = matches.len(), "Listed articles by year");
        Ok(matches)
    }

    /// All articles whose subject equals `category` exactly, in store order.
    ///
    /// Matching is case-sensitive. An empty result means no article matched.
    #[must_use]
    pub fn list_by_category(&self, category: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.subject == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Label;
    use pretty_assertions::assert_eq;

    fn article(title: &str, subject: &str, date: &str) -> Article {
        Article::new(title, "Body", subject, date, Label::True)
    }

    fn sample_store() -> ArticleStore {
        [
            article("P17", "politics", "03-Feb-17"),
            article("W16", "worldnews", "11-Mar-16"),
            article("P15", "politics", "20-Jun-15"),
            article("G16", "Government News", "02-Jan-16"),
            article("Bad", "politics", "??"),
        ]
        .into_iter()
        .collect()
    }

    fn titles(articles: &[&Article]) -> Vec<String> {
        articles.iter().map(|a| a.title.clone()).collect()
    }

    #[test]
    fn test_year_queries_refused_when_unsorted() {
        let store = sample_store();
        assert_eq!(store.find_first_by_year(2016), Err(EngineError::Unsorted));
        assert_eq!(store.list_by_year(2016), Err(EngineError::Unsorted));
    }

    #[test]
    fn test_find_first_by_year() {
        let mut store = sample_store();
        store.sort();
        // Sorted: Bad, P15, G16, W16, P17
        assert_eq!(store.find_first_by_year(2016), Ok(Some(2)));
        assert_eq!(store.find_first_by_year(2015), Ok(Some(1)));
        assert_eq!(store.find_first_by_year(1999), Ok(None));
    }

    #[test]
    fn test_unknown_year_never_matches() {
        let mut store = sample_store();
        store.sort();
        assert_eq!(store.find_first_by_year(0), Ok(None));
        assert!(store.list_by_year(0).unwrap().is_empty());
    }

    #[test]
    fn test_list_by_year_returns_contiguous_run() {
        let mut store = sample_store();
        store.sort();

        let found = store.list_by_year(2016).unwrap();
        assert_eq!(titles(&found), vec!["G16", "W16"]);
    }

    #[test]
    fn test_list_by_year_no_results() {
        let mut store = sample_store();
        store.sort();
        assert!(store.list_by_year(2020).unwrap().is_empty());
    }

    #[test]
    fn test_list_by_category_exact_match() {
        let store = sample_store();
        let found = store.list_by_category("politics");
        assert_eq!(titles(&found), vec!["P17", "P15", "Bad"]);

        assert!(store.list_by_category("Politics").is_empty());
        assert!(store.list_by_category("polit").is_empty());
    }

    #[test]
    fn test_list_by_category_works_unsorted_and_sorted() {
        let mut store = sample_store();
        assert_eq!(store.list_by_category("worldnews").len(), 1);
        store.sort();
        assert_eq!(store.list_by_category("worldnews").len(), 1);
    }
}

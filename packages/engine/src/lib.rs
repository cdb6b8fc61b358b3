//! Newsdesk Engine
//!
//! In-memory store and analytics for labeled (true/fake) news articles.
//! This library provides:
//! - An [`Article`] record with year, month and day derived from its `DD-Mon-YY` date
//! - An append-only [`ArticleStore`] with label counters and a sortedness flag
//! - A stable chronological merge sort
//! - Year and category lookups, with year lookups gated on sort order
//! - Monthly fake-percentage and word-frequency reports
//!
//! # Example
//!
//! ```
//! use newsdesk_engine::{political_fake_percentage, Article, ArticleStore, Label};
//!
//! let mut store = ArticleStore::new();
//! store.append(Article::new("T2", "...", "politics", "15-Jan-16", Label::Fake));
//! store.append(Article::new("T1", "...", "politics", "01-Jan-16", Label::True));
//!
//! assert!(store.list_by_year(2016).is_err()); // not sorted yet
//! store.sort();
//!
//! let titles: Vec<_> = store.list_by_year(2016)?.iter().map(|a| a.title.as_str()).collect();
//! assert_eq!(titles, ["T1", "T2"]);
//!
//! let report = political_fake_percentage(&store, 2016);
//! assert_eq!(report.months[0].percentage, 50);
//! # Ok::<(), newsdesk_engine::EngineError>(())
//! ```

pub mod article;
pub mod config;
pub mod error;
pub mod query;
pub mod report;
pub mod sort;
pub mod store;

// Re-export commonly used items
pub use article::{month_name, Article, DateKey, Label};
pub use error::{EngineError, Result};
pub use report::{
    monthly_fake_percentage, political_fake_percentage, word_frequency, MonthlyFakeReport,
    MonthlyFakeShare, Vocabulary, WordCount, WordFrequencyReport,
};
pub use sort::SortOutcome;
pub use store::ArticleStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

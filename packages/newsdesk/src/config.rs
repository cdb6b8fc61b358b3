//! Configuration constants and runtime settings for the command-line front end.

use std::path::PathBuf;

use newsdesk_engine::config::{
    DEFAULT_REPORT_YEAR, DEFAULT_VOCABULARY_CAPACITY, DEFAULT_WORD_SUBJECT,
};

use crate::error::{NewsdeskError, Result};

/// CSV file holding the true-news articles.
pub const DEFAULT_TRUE_CSV: &str = "true.csv";

/// CSV file holding the fake-news articles.
pub const DEFAULT_FAKE_CSV: &str = "fake_cleaned.csv";

/// Maximum number of articles kept in the store across all sources.
///
/// Sized for the combined true/fake dataset (44 850 rows after cleaning).
pub const DEFAULT_MAX_ARTICLES: usize = 44_850;

/// Text wrap width for article titles.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Column width of the month name in the monthly report.
pub const MONTH_COLUMN_WIDTH: usize = 12;

/// Column width of the word in the word-frequency report.
pub const WORD_COLUMN_WIDTH: usize = 15;

/// Separator printed after each article.
pub const ARTICLE_SEPARATOR: &str = "---------------------------------";

/// Where to read articles from and how many to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub true_csv: PathBuf,
    pub fake_csv: PathBuf,
    pub max_articles: usize,
}

impl AppConfig {
    /// Create a config with the default article cap.
    pub fn new(true_csv: impl Into<PathBuf>, fake_csv: impl Into<PathBuf>) -> Self {
        Self {
            true_csv: true_csv.into(),
            fake_csv: fake_csv.into(),
            max_articles: DEFAULT_MAX_ARTICLES,
        }
    }

    pub fn with_max_articles(mut self, max_articles: usize) -> Self {
        self.max_articles = max_articles;
        self
    }

    /// Reject settings that would make loading meaningless.
    ///
    /// # Errors
    /// [`NewsdeskError::Config`] if `max_articles` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.max_articles == 0 {
            return Err(NewsdeskError::Config(
                "max articles must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRUE_CSV, DEFAULT_FAKE_CSV)
    }
}

/// Parameters of the two reports offered by the interactive menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Year analysed by the monthly fake-politics report.
    pub year: i32,

    /// Subject analysed by the word-frequency report.
    pub word_subject: String,

    /// Vocabulary capacity of the word-frequency report.
    pub vocabulary_capacity: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            year: DEFAULT_REPORT_YEAR,
            word_subject: DEFAULT_WORD_SUBJECT.to_string(),
            vocabulary_capacity: DEFAULT_VOCABULARY_CAPACITY,
        }
    }
}

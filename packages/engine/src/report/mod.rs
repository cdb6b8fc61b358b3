//! Read-only aggregate reports over the article store.
//!
//! - [`monthly`]: share of fake political articles per month of one year
//! - [`words`]: most frequent words in fake articles of one subject

pub mod monthly;
pub mod words;

pub use monthly::{
    monthly_fake_percentage, political_fake_percentage, MonthlyFakeReport, MonthlyFakeShare,
};
pub use words::{normalize_token, word_frequency, Vocabulary, WordCount, WordFrequencyReport};

//! Configuration constants for the Newsdesk engine
//!
//! Centralized values used by the record model and the reports:
//! - Date interpretation (two-digit year pivot, month abbreviations)
//! - Default report parameters (target year, subject filters)
//! - Resource bounds (word-frequency vocabulary capacity)

/// Two-digit years below this pivot belong to the 2000s, the rest to the 1900s.
///
/// `"16"` resolves to 2016 and `"97"` resolves to 1997.
pub const YEAR_PIVOT: i32 = 50;

/// Minimum length of a well-formed `DD-Mon-YY` date string.
pub const DATE_MIN_LEN: usize = 9;

/// Three-letter month abbreviations, indexed by month number minus one.
///
/// Matching is case-sensitive: `"jan"` does not resolve.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Year analysed by the monthly fake-percentage report when none is given.
pub const DEFAULT_REPORT_YEAR: i32 = 2016;

/// Subject labels treated as political by the monthly report.
///
/// The true-news and fake-news datasets spell the political category differently.
pub const POLITICAL_SUBJECTS: [&str; 2] = ["politics", "politicsNews"];

/// Subject analysed by the word-frequency report when none is given.
pub const DEFAULT_WORD_SUBJECT: &str = "Government News";

/// Maximum number of distinct words tracked by one word-frequency report.
///
/// Words first seen after the vocabulary is full are not counted.
pub const DEFAULT_VOCABULARY_CAPACITY: usize = 1_000;

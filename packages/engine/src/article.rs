//! Article record model
//!
//! An [`Article`] keeps the four textual fields exactly as they were ingested plus
//! its fake/true [`Label`]. The calendar fields (year, month, day) are never stored;
//! they are derived from the raw `DD-Mon-YY` date string every time they are asked for.
//!
//! A derived value of `0` means "unknown": the date string was too short or one of
//! its tokens did not parse. Callers must not treat `0` as a calendar value.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::config::{DATE_MIN_LEN, MONTH_ABBREVIATIONS, YEAR_PIVOT};

/// Whether an article comes from the true-news or the fake-news source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Article from the true-news source.
    True,
    /// Article from the fake-news source.
    Fake,
}

impl Label {
    /// Get the lowercase display name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::Fake => "fake",
        }
    }

    /// Check if this is the fake-news label.
    #[must_use]
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake)
    }
}

/// Chronological sort key: `(year, month, day)`.
pub type DateKey = (i32, u32, u32);

/// A single labeled news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline.
    pub title: String,

    /// Body text.
    pub text: String,

    /// Subject/category, compared by exact match.
    pub subject: String,

    /// Raw publication date in `DD-Mon-YY` form (e.g. "22-Jul-16").
    pub date: String,

    /// True or fake.
    pub label: Label,
}

impl Article {
    /// Create a new article.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        subject: impl Into<String>,
        date: impl Into<String>,
        label: Label,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            subject: subject.into(),
            date: date.into(),
            label,
        }
    }

    /// Check that every required text field is non-empty.
    ///
    /// The input adapter only forwards complete articles to the store.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.text.is_empty()
            && !self.subject.is_empty()
            && !self.date.is_empty()
    }

    /// Check if the article carries the fake-news label.
    #[must_use]
    pub fn is_fake(&self) -> bool {
        self.label.is_fake()
    }

    /// Four-digit year resolved from the two-digit year token, or 0 if unknown.
    ///
    /// # Examples
    /// ```
    /// use newsdesk_engine::{Article, Label};
    ///
    /// let article = Article::new("t", "b", "politics", "22-Jul-16", Label::True);
    /// assert_eq!(article.year(), 2016);
    ///
    /// let article = Article::new("t", "b", "politics", "22-Jul-97", Label::True);
    /// assert_eq!(article.year(), 1997);
    /// ```
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date_token(7..9)
            .and_then(leading_number)
            .map(|yy| {
                let yy = yy as i32;
                if yy < YEAR_PIVOT {
                    2000 + yy
                } else {
                    1900 + yy
                }
            })
            .unwrap_or(0)
    }

    /// Month number (1-12) resolved from the three-letter abbreviation, or 0 if unknown.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date_token(3..6)
            .and_then(|abbr| MONTH_ABBREVIATIONS.iter().position(|m| *m == abbr))
            .map(|idx| idx as u32 + 1)
            .unwrap_or(0)
    }

    /// Day of month taken from the first two characters, or 0 if unknown.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date_token(0..2).and_then(leading_number).unwrap_or(0)
    }

    /// Key used for chronological ordering.
    #[must_use]
    pub fn date_key(&self) -> DateKey {
        (self.year(), self.month(), self.day())
    }

    /// Slice a fixed position out of the date string.
    ///
    /// Returns `None` for dates shorter than `DD-Mon-YY` or when the range does not
    /// fall on character boundaries.
    fn date_token(&self, range: std::ops::Range<usize>) -> Option<&str> {
        if self.date.len() < DATE_MIN_LEN {
            return None;
        }
        self.date.get(range)
    }
}

/// Parse the leading decimal digits of a token, skipping leading whitespace.
///
/// `"7-"` parses as 7, `" 5"` as 5; a token with no leading digit yields `None`.
fn leading_number(token: &str) -> Option<u32> {
    let digits: String = token
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Full English month name for a month number, or `None` outside 1-12.
///
/// # Examples
/// ```
/// use newsdesk_engine::article::month_name;
///
/// assert_eq!(month_name(1), Some("January"));
/// assert_eq!(month_name(0), None);
/// ```
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dated(date: &str) -> Article {
        Article::new("Title", "Body", "politics", date, Label::True)
    }

    #[test]
    fn test_derived_fields_well_formed() {
        let article = dated("22-Jul-16");
        assert_eq!(article.day(), 22);
        assert_eq!(article.month(), 7);
        assert_eq!(article.year(), 2016);
        assert_eq!(article.date_key(), (2016, 7, 22));
    }

    #[test]
    fn test_year_pivot() {
        assert_eq!(dated("01-Jan-00").year(), 2000);
        assert_eq!(dated("01-Jan-49").year(), 2049);
        assert_eq!(dated("01-Jan-50").year(), 1950);
        assert_eq!(dated("01-Jan-99").year(), 1999);
    }

    #[test]
    fn test_all_month_abbreviations_resolve() {
        for (idx, abbr) in MONTH_ABBREVIATIONS.iter().enumerate() {
            let article = dated(&format!("10-{abbr}-17"));
            assert_eq!(article.month(), idx as u32 + 1);
        }
    }

    #[test]
    fn test_month_is_case_sensitive() {
        assert_eq!(dated("10-jan-17").month(), 0);
        assert_eq!(dated("10-JAN-17").month(), 0);
    }

    #[test]
    fn test_short_date_is_unknown() {
        let article = dated("1-Jan-16");
        assert_eq!(article.date_key(), (0, 0, 0));
    }

    #[test]
    fn test_malformed_tokens_are_unknown() {
        let article = dated("xx-Foo-zz");
        assert_eq!(article.day(), 0);
        assert_eq!(article.month(), 0);
        assert_eq!(article.year(), 0);
    }

    #[test]
    fn test_single_digit_day_with_trailing_separator() {
        // "7--Jan-16" still has the year token in place
        let article = dated("7--Jan-16");
        assert_eq!(article.day(), 7);
        assert_eq!(article.year(), 2016);
    }

    #[test]
    fn test_long_date_string_uses_fixed_positions() {
        let article = dated("31-Dec-17 extra");
        assert_eq!(article.date_key(), (2017, 12, 31));
    }

    #[test]
    fn test_non_ascii_date_does_not_panic() {
        let article = dated("éé-Jan-16");
        assert_eq!(article.day(), 0);
    }

    #[test]
    fn test_is_complete() {
        assert!(dated("01-Jan-16").is_complete());
        let mut article = dated("01-Jan-16");
        article.subject.clear();
        assert!(!article.is_complete());
    }

    #[test]
    fn test_label() {
        assert!(Label::Fake.is_fake());
        assert!(!Label::True.is_fake());
        assert_eq!(Label::Fake.as_str(), "fake");
        assert_eq!(serde_json::to_string(&Label::True).unwrap(), "\"true\"");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(13), None);
    }
}

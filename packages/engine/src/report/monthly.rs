//! Monthly fake-percentage report.

use serde::Serialize;

use crate::article::month_name;
use crate::config::POLITICAL_SUBJECTS;
use crate::store::ArticleStore;

/// Fake/total counts for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFakeShare {
    /// Month number, 1-12.
    pub month: u32,

    /// Full English month name.
    pub name: &'static str,

    /// Matching articles published in the month.
    pub total: usize,

    /// Matching articles in the month labeled fake.
    pub fake: usize,

    /// `floor(fake * 100 / total)`, or 0 when `total` is 0.
    pub percentage: u32,
}

/// Per-month share of fake articles for a year and a set of subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFakeReport {
    /// Year the report covers.
    pub year: i32,

    /// Subjects that were counted.
    pub subjects: Vec<String>,

    /// Exactly twelve entries, January first.
    pub months: Vec<MonthlyFakeShare>,
}

impl MonthlyFakeReport {
    /// Entry for a month number, if it is in 1-12.
    #[must_use]
    pub fn month(&self, month: u32) -> Option<&MonthlyFakeShare> {
        self.months.iter().find(|m| m.month == month)
    }
}

/// Count fake and total articles per month of `year` whose subject is in `subjects`.
///
/// Articles whose month cannot be derived are not attributed to any month.
#[must_use]
pub fn monthly_fake_percentage(
    store: &ArticleStore,
    year: i32,
    subjects: &[&str],
) -> MonthlyFakeReport {
    // Index 0 collects unknown months and is never reported.
    let mut totals = [0usize; 13];
    let mut fakes = [0usize; 13];

    if year != 0 {
        for article in store
            .iter()
            .filter(|a| subjects.contains(&a.subject.as_str()) && a.year() == year)
        {
            let month = article.month() as usize;
            totals[month] += 1;
            if article.is_fake() {
                fakes[month] += 1;
            }
        }
    }

    tracing::debug!(
        year,
        unknown_month = totals[0],
        "Computed monthly fake percentages"
    );

    let months = (1..=12u32)
        .map(|month| {
            let idx = month as usize;
            let (total, fake) = (totals[idx], fakes[idx]);
            let percentage = if total > 0 {
                (fake * 100 / total) as u32
            } else {
                0
            };
            MonthlyFakeShare {
                month,
                name: month_name(month).unwrap_or("Unknown"),
                total,
                fake,
                percentage,
            }
        })
        .collect();

    MonthlyFakeReport {
        year,
        subjects: subjects.iter().map(|s| (*s).to_string()).collect(),
        months,
    }
}

/// [`monthly_fake_percentage`] restricted to the political subjects.
#[must_use]
pub fn political_fake_percentage(store: &ArticleStore, year: i32) -> MonthlyFakeReport {
    monthly_fake_percentage(store, year, &POLITICAL_SUBJECTS)
}

//! End-to-end scenarios for the article store.
//!
//! Drives the public API the way the command-line front end does: append,
//! sort, then query and report.

use newsdesk_engine::{
    political_fake_percentage, word_frequency, Article, ArticleStore, EngineError, Label,
    SortOutcome,
};
use pretty_assertions::assert_eq;

fn article(title: &str, subject: &str, date: &str, label: Label) -> Article {
    Article::new(title, "...", subject, date, label)
}

/// A small mixed dataset spanning three years and several subjects.
fn mixed_store() -> ArticleStore {
    [
        article("F1", "politics", "14-Feb-16", Label::Fake),
        article("R1", "politicsNews", "03-Feb-16", Label::True),
        article("R2", "worldnews", "28-Dec-17", Label::True),
        article("F2", "Government News", "07-Jul-15", Label::Fake),
        article("F3", "politics", "14-Feb-16", Label::Fake),
        article("R3", "politicsNews", "30-Nov-16", Label::True),
        article("F4", "left-news", "not a date", Label::Fake),
    ]
    .into_iter()
    .collect()
}

fn titles(articles: &[&Article]) -> Vec<String> {
    articles.iter().map(|a| a.title.clone()).collect()
}

#[test]
fn test_two_record_scenario() {
    let mut store = ArticleStore::new();
    store.append(article("T1", "politics", "01-Jan-16", Label::True));
    store.append(article("T2", "politics", "15-Jan-16", Label::Fake));

    assert_eq!(store.sort(), SortOutcome::Sorted { count: 2 });

    let found = store.list_by_year(2016).unwrap();
    assert_eq!(titles(&found), vec!["T1", "T2"]);

    let report = political_fake_percentage(&store, 2016);
    let january = report.month(1).unwrap();
    assert_eq!(january.name, "January");
    assert_eq!((january.total, january.fake, january.percentage), (2, 1, 50));
}

#[test]
fn test_year_search_before_sort_is_refused() {
    let store = mixed_store();
    assert_eq!(store.find_first_by_year(2016), Err(EngineError::Unsorted));
}

#[test]
fn test_year_search_after_append_requires_new_sort() {
    let mut store = mixed_store();
    store.sort();
    assert!(store.find_first_by_year(2016).is_ok());

    store.append(article("R4", "politics", "01-Jan-16", Label::True));
    assert_eq!(store.list_by_year(2016), Err(EngineError::Unsorted));

    store.sort();
    let found = store.list_by_year(2016).unwrap();
    assert_eq!(titles(&found), vec!["R4", "R1", "F1", "F3", "R3"]);
}

#[test]
fn test_sorted_contiguity() {
    let mut store = mixed_store();
    store.sort();

    for year in [2015, 2016, 2017] {
        let run = store.list_by_year(year).unwrap();
        let total = store.iter().filter(|a| a.year() == year).count();
        assert_eq!(run.len(), total, "year {year} should form one run");
    }
}

#[test]
fn test_sort_is_stable_for_equal_dates() {
    let mut store = mixed_store();
    store.sort();

    let same_day: Vec<&str> = store
        .iter()
        .filter(|a| a.date == "14-Feb-16")
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(same_day, vec!["F1", "F3"]);
}

#[test]
fn test_category_completeness() {
    let store = mixed_store();
    let found = store.list_by_category("politicsNews");
    assert_eq!(titles(&found), vec!["R1", "R3"]);
    assert!(store.list_by_category("sports").is_empty());
}

#[test]
fn test_counts_survive_sort() {
    let mut store = mixed_store();
    let (total, real, fake) = (store.count(), store.count_true(), store.count_fake());
    store.sort();
    assert_eq!((store.count(), store.count_true(), store.count_fake()), (total, real, fake));
    assert_eq!(total, real + fake);
}

#[test]
fn test_monthly_report_bounds() {
    let store = mixed_store();
    let report = political_fake_percentage(&store, 2016);

    assert_eq!(report.months.len(), 12);
    for month in &report.months {
        assert!(month.percentage <= 100);
        if month.total == 0 {
            assert_eq!(month.percentage, 0);
        }
    }
    let february = report.month(2).unwrap();
    assert_eq!((february.total, february.fake, february.percentage), (3, 2, 66));
}

#[test]
fn test_word_frequency_on_store() {
    let mut store = ArticleStore::new();
    store.append(Article::new(
        "G",
        "The budget, the BUDGET and the deficit.",
        "Government News",
        "01-Jan-16",
        Label::Fake,
    ));

    let report = word_frequency(&store, "Government News", 1_000);
    let top: Vec<(&str, usize)> = report
        .words
        .iter()
        .map(|w| (w.word.as_str(), w.count))
        .collect();
    assert_eq!(
        top,
        vec![("the", 3), ("budget", 2), ("and", 1), ("deficit", 1)]
    );
}

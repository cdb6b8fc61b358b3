//! Text rendering of articles, counts and reports.
//!
//! Every function writes to a caller-supplied [`Write`] so the same output can go
//! to stdout or be captured in tests.

use std::io::{self, Write};

use console::style;
use newsdesk_engine::{Article, ArticleStore, MonthlyFakeReport, WordFrequencyReport};
use textwrap::{fill, Options};

use crate::config::{ARTICLE_SEPARATOR, MONTH_COLUMN_WIDTH, TEXT_WRAP_WIDTH, WORD_COLUMN_WIDTH};
use crate::loader::LoadSummary;

/// Write one article as a title/category/date block.
pub fn write_article(out: &mut impl Write, article: &Article) -> io::Result<()> {
    let options = Options::new(TEXT_WRAP_WIDTH)
        .initial_indent("Title: ")
        .subsequent_indent("       ");
    writeln!(out, "{}", fill(&article.title, options))?;
    writeln!(out, "Category: {}", article.subject)?;
    writeln!(out, "Date: {}", article.date)?;
    writeln!(out, "{ARTICLE_SEPARATOR}")
}

/// Write a sequence of articles.
pub fn write_articles<'a>(
    out: &mut impl Write,
    articles: impl IntoIterator<Item = &'a Article>,
) -> io::Result<()> {
    for article in articles {
        writeln!(out)?;
        write_article(out, article)?;
    }
    Ok(())
}

/// Write every article in the store, or a notice when it is empty.
pub fn write_store(out: &mut impl Write, store: &ArticleStore) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "No articles available.");
    }
    write_articles(out, store)
}

/// Write the true/fake/total counters.
pub fn write_counts(out: &mut impl Write, store: &ArticleStore) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total True News Articles: {}", store.count_true())?;
    writeln!(out, "Total Fake News Articles: {}", store.count_fake())?;
    writeln!(out, "Total Combined Articles: {}", store.count())
}

/// Write the articles found for a year.
pub fn write_year_matches(out: &mut impl Write, year: i32, found: &[&Article]) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "No articles found for the year {year}");
    }
    writeln!(out)?;
    writeln!(out, "{}", style(format!("Articles from year {year}")).bold())?;
    write_articles(out, found.iter().copied())
}

/// Write the articles found for a category.
pub fn write_category_matches(
    out: &mut impl Write,
    category: &str,
    found: &[&Article],
) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "No articles found in category: {category}");
    }
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!("Articles under category: {category}")).bold()
    )?;
    write_articles(out, found.iter().copied())
}

/// Write the monthly report as a bar chart, one `*` per percent.
pub fn write_monthly_report(out: &mut impl Write, report: &MonthlyFakeReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!(
            "Percentage of Fake Political Articles in {}",
            report.year
        ))
        .bold()
    )?;
    writeln!(out)?;
    for month in &report.months {
        let bar = "*".repeat(month.percentage as usize);
        writeln!(
            out,
            "{:<width$} | {bar} {}%",
            month.name,
            month.percentage,
            width = MONTH_COLUMN_WIDTH
        )?;
    }
    Ok(())
}

/// Write the word-frequency report, optionally limited to the top entries.
pub fn write_word_report(
    out: &mut impl Write,
    report: &WordFrequencyReport,
    top: Option<usize>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!(
            "Most frequent words in fake {} articles:",
            report.subject
        ))
        .bold()
    )?;
    if report.words.is_empty() {
        return writeln!(out, "No words found.");
    }
    let limit = top.unwrap_or(report.words.len());
    for entry in report.words.iter().take(limit) {
        writeln!(
            out,
            "{:<width$} : {}",
            entry.word,
            entry.count,
            width = WORD_COLUMN_WIDTH
        )?;
    }
    if report.dropped_tokens > 0 {
        writeln!(
            out,
            "{}",
            style(format!(
                "({} occurrences not counted: vocabulary limited to {} words)",
                report.dropped_tokens, report.capacity
            ))
            .dim()
        )?;
    }
    Ok(())
}

/// Write the outcome of loading one source.
pub fn write_load_summary(out: &mut impl Write, summary: &LoadSummary) -> io::Result<()> {
    writeln!(
        out,
        "Loaded {} articles from {}",
        summary.loaded,
        summary.source.display()
    )?;
    if summary.truncated {
        writeln!(
            out,
            "{}",
            style("  Article limit reached; remaining rows were not loaded").yellow()
        )?;
    }
    Ok(())
}

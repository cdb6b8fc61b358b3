//! CSV input adapter.
//!
//! Each source file carries one label for all of its rows. Only the first four
//! columns are read (title, text, subject, date); rows with any of them empty are
//! skipped, and loading stops once the store reaches the configured cap.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use newsdesk_engine::{Article, ArticleStore, Label};

use crate::config::AppConfig;
use crate::error::{NewsdeskError, Result};

/// Outcome of loading one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// File the articles came from.
    pub source: PathBuf,

    /// Label applied to every article of the source.
    pub label: Label,

    /// Articles appended to the store.
    pub loaded: usize,

    /// Rows dropped because a required field was empty or unreadable.
    pub skipped: usize,

    /// Whether rows were left unread because the store was full.
    pub truncated: bool,
}

/// Row counters produced by [`load_from_reader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadCounts {
    pub loaded: usize,
    pub skipped: usize,
    pub truncated: bool,
}

/// Append the articles of a CSV stream to `store`.
///
/// The first row is treated as a header. Rows may have any number of columns;
/// missing columns count as empty fields.
///
/// # Errors
/// Returns an error only if the underlying reader fails. Malformed rows are skipped.
pub fn load_from_reader<R: Read>(
    reader: R,
    label: Label,
    store: &mut ArticleStore,
    max_articles: usize,
) -> Result<LoadCounts> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut counts = LoadCounts::default();

    for record in csv_reader.records() {
        if store.count() >= max_articles {
            counts.truncated = true;
            break;
        }

        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(NewsdeskError::Csv(e)),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable row");
                counts.skipped += 1;
                continue;
            }
        };

        let field = |idx: usize| record.get(idx).unwrap_or_default();
        let article = Article::new(field(0), field(1), field(2), field(3), label);

        if article.is_complete() {
            store.append(article);
            counts.loaded += 1;
        } else {
            counts.skipped += 1;
        }
    }

    Ok(counts)
}

/// Load one CSV file into `store` with the given label.
///
/// # Errors
/// [`NewsdeskError::SourceUnavailable`] if the file cannot be opened.
pub fn load_csv(
    path: &Path,
    label: Label,
    store: &mut ArticleStore,
    max_articles: usize,
) -> Result<LoadSummary> {
    let file = File::open(path).map_err(|source| NewsdeskError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let counts = load_from_reader(file, label, store, max_articles)?;

    tracing::info!(
        source = %path.display(),
        label = label.as_str(),
        loaded = counts.loaded,
        skipped = counts.skipped,
        truncated = counts.truncated,
        "Loaded articles"
    );

    Ok(LoadSummary {
        source: path.to_path_buf(),
        label,
        loaded: counts.loaded,
        skipped: counts.skipped,
        truncated: counts.truncated,
    })
}

/// Load the true-news source, then the fake-news source.
///
/// A source that fails to load contributes no articles; its error is returned in
/// place of a summary and the other source is still loaded.
pub fn load_sources(config: &AppConfig, store: &mut ArticleStore) -> Vec<Result<LoadSummary>> {
    [(&config.true_csv, Label::True), (&config.fake_csv, Label::Fake)]
        .into_iter()
        .map(|(path, label)| {
            let result = load_csv(path, label, store, config.max_articles);
            if let Err(e) = &result {
                tracing::warn!(source = %path.display(), error = %e, "Source not loaded");
            }
            result
        })
        .collect()
}

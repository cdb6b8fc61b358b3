//! Command-line interface for newsdesk.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use newsdesk_engine::config::{
    DEFAULT_REPORT_YEAR, DEFAULT_VOCABULARY_CAPACITY, DEFAULT_WORD_SUBJECT,
};
use newsdesk_engine::{political_fake_percentage, word_frequency, ArticleStore};

use crate::config::{
    AppConfig, ReportSettings, DEFAULT_FAKE_CSV, DEFAULT_MAX_ARTICLES, DEFAULT_TRUE_CSV,
};
use crate::error::Result;
use crate::loader::load_sources;
use crate::menu::Menu;
use crate::render;

/// Newsdesk - Explore labeled true/fake news articles.
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file with true-news articles
    #[arg(long, global = true, env = "NEWSDESK_TRUE_CSV", default_value = DEFAULT_TRUE_CSV)]
    pub true_csv: PathBuf,

    /// CSV file with fake-news articles
    #[arg(long, global = true, env = "NEWSDESK_FAKE_CSV", default_value = DEFAULT_FAKE_CSV)]
    pub fake_csv: PathBuf,

    /// Maximum number of articles to load across both files
    #[arg(long, global = true, env = "NEWSDESK_MAX_ARTICLES", default_value_t = DEFAULT_MAX_ARTICLES)]
    pub max_articles: usize,

    /// Command to run (default: interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive numbered menu.
    Menu,

    /// Display all articles in load order.
    List,

    /// Sort articles by date and display them with counts.
    Sort,

    /// Display the articles published in a year.
    Year {
        /// Four-digit year (e.g., 2016)
        year: i32,
    },

    /// Display the articles with exactly this subject.
    Category {
        /// Subject to match, case-sensitive (e.g., "politicsNews")
        name: String,
    },

    /// Monthly percentage of fake political articles.
    Politics {
        /// Year to report on
        #[arg(short, long, default_value_t = DEFAULT_REPORT_YEAR)]
        year: i32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Most frequent words in fake articles of one subject.
    Words {
        /// Subject whose fake articles are analysed
        #[arg(short, long, default_value = DEFAULT_WORD_SUBJECT)]
        subject: String,

        /// Maximum number of distinct words to track
        #[arg(short, long, default_value_t = DEFAULT_VOCABULARY_CAPACITY)]
        capacity: usize,

        /// Only show this many words
        #[arg(short, long)]
        top: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Input settings from the parsed arguments.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig::new(&self.true_csv, &self.fake_csv).with_max_articles(self.max_articles)
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Load the sources named by `cli` and run its command.
pub fn execute(cli: Cli) -> Result<()> {
    let config = cli.app_config();
    config.validate()?;

    let mut store = ArticleStore::new();
    load_with_progress(&config, &mut store)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(stdin.lock(), &mut out, &mut store, ReportSettings::default()).run()?;
        }
        Commands::List => render::write_store(&mut out, &store)?,
        Commands::Sort => {
            store.sort();
            render::write_store(&mut out, &store)?;
            render::write_counts(&mut out, &store)?;
        }
        Commands::Year { year } => {
            store.sort();
            let found = store.list_by_year(year)?;
            render::write_year_matches(&mut out, year, &found)?;
        }
        Commands::Category { name } => {
            let found = store.list_by_category(&name);
            render::write_category_matches(&mut out, &name, &found)?;
        }
        Commands::Politics { year, json } => {
            let report = political_fake_percentage(&store, year);
            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                render::write_monthly_report(&mut out, &report)?;
            }
        }
        Commands::Words {
            subject,
            capacity,
            top,
            json,
        } => {
            let mut report = word_frequency(&store, &subject, capacity);
            if json {
                if let Some(n) = top {
                    report.words.truncate(n);
                }
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                render::write_word_report(&mut out, &report, top)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Load both sources behind a spinner and report each outcome on stderr.
fn load_with_progress(config: &AppConfig, store: &mut ArticleStore) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Loading articles...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let results = load_sources(config, store);
    pb.finish_and_clear();

    let stderr = io::stderr();
    let mut err = stderr.lock();
    for result in results {
        match result {
            Ok(summary) => render::write_load_summary(&mut err, &summary)?,
            Err(e) => writeln!(err, "{} {e}", style("Error:").red().bold())?,
        }
    }
    Ok(())
}

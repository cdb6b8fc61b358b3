//! Interactive numbered menu.
//!
//! Reads one choice per line from the input and writes results to the output.
//! End of input behaves like choosing "Exit".

use std::io::{BufRead, Write};

use newsdesk_engine::{political_fake_percentage, word_frequency, ArticleStore, SortOutcome};

use crate::config::ReportSettings;
use crate::error::Result;
use crate::render;

/// Advisory printed when a year search is attempted before sorting.
pub const SORT_FIRST_MESSAGE: &str = "Required to sort articles first.";

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Sort,
    SearchYear,
    SearchCategory,
    FakePolitics,
    FrequentWords,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed by the user.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Display),
            "2" => Some(Self::Sort),
            "3" => Some(Self::SearchYear),
            "4" => Some(Self::SearchCategory),
            "5" => Some(Self::FakePolitics),
            "6" => Some(Self::FrequentWords),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session over a loaded store.
pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    store: &'a mut ArticleStore,
    settings: ReportSettings,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a session reading choices from `input`.
    pub fn new(input: R, output: W, store: &'a mut ArticleStore, settings: ReportSettings) -> Self {
        Self {
            input,
            output,
            store,
            settings,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program...")?;
                    break;
                }
                Some(choice) => self.handle(choice)?,
                None => writeln!(self.output, "Invalid choice, try again!")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Display => render::write_store(&mut self.output, self.store)?,
            MenuChoice::Sort => self.sort()?,
            MenuChoice::SearchYear => self.search_year()?,
            MenuChoice::SearchCategory => self.search_category()?,
            MenuChoice::FakePolitics => {
                let report = political_fake_percentage(self.store, self.settings.year);
                render::write_monthly_report(&mut self.output, &report)?;
            }
            MenuChoice::FrequentWords => {
                let report = word_frequency(
                    self.store,
                    &self.settings.word_subject,
                    self.settings.vocabulary_capacity,
                );
                render::write_word_report(&mut self.output, &report, None)?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn sort(&mut self) -> Result<()> {
        match self.store.sort() {
            SortOutcome::AlreadySorted => writeln!(self.output, "Articles are already sorted.")?,
            SortOutcome::Sorted { .. } => writeln!(
                self.output,
                "\nArticles sorted by year, month and day in ascending order."
            )?,
        }
        render::write_counts(&mut self.output, self.store)?;
        Ok(())
    }

    fn search_year(&mut self) -> Result<()> {
        if !self.store.is_sorted() {
            return self.write_sort_first();
        }

        write!(self.output, "Enter the year to search: ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let Ok(year) = line.trim().parse::<i32>() else {
            writeln!(self.output, "Invalid year: {}", line.trim())?;
            return Ok(());
        };

        let found = self.store.list_by_year(year)?;
        render::write_year_matches(&mut self.output, year, &found)?;
        Ok(())
    }

    fn search_category(&mut self) -> Result<()> {
        write!(self.output, "Enter the category to search: ")?;
        self.output.flush()?;
        let Some(category) = self.read_line()? else {
            return Ok(());
        };
        let found = self.store.list_by_category(&category);
        render::write_category_matches(&mut self.output, &category, &found)?;
        Ok(())
    }

    fn write_sort_first(&mut self) -> Result<()> {
        writeln!(self.output, "\n{SORT_FIRST_MESSAGE}")?;
        writeln!(self.output, "------------------------------------")?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "News Articles Management System")?;
        writeln!(self.output, "1. Display articles")?;
        writeln!(self.output, "2. Sort articles by date")?;
        writeln!(self.output, "3. Search articles by year")?;
        writeln!(self.output, "4. Search articles by category")?;
        writeln!(
            self.output,
            "5. View percentage of fake political news articles in {}",
            self.settings.year
        )?;
        writeln!(
            self.output,
            "6. Most frequent words in fake {} articles",
            self.settings.word_subject
        )?;
        writeln!(self.output, "7. Exit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its line terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_engine::{Article, Label};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn store() -> ArticleStore {
        [
            Article::new("Later", "Tax tax", "Government News", "15-Jan-16", Label::Fake),
            Article::new("Earlier", "Body", "politics", "01-Jan-16", Label::True),
            Article::new("Old", "Body", "politicsNews", "20-Jun-15", Label::True),
        ]
        .into_iter()
        .collect()
    }

    fn run_session(input: &str, store: &mut ArticleStore) -> String {
        let mut output = Vec::new();
        Menu::new(Cursor::new(input), &mut output, store, ReportSettings::default())
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Display));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
    }

    #[test]
    fn test_exit() {
        let mut store = store();
        let out = run_session("7\n", &mut store);
        assert!(out.contains("News Articles Management System"));
        assert!(out.contains("Exiting program..."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut store = store();
        let out = run_session("", &mut store);
        assert!(!out.contains("Exiting program..."));
    }

    #[test]
    fn test_invalid_choice() {
        let mut store = store();
        let out = run_session("9\n7\n", &mut store);
        assert!(out.contains("Invalid choice, try again!"));
    }

    #[test]
    fn test_year_search_refused_before_sort() {
        let mut store = store();
        let out = run_session("3\n7\n", &mut store);
        assert!(out.contains(SORT_FIRST_MESSAGE));
        assert!(!out.contains("Enter the year to search"));
    }

    #[test]
    fn test_sort_then_search_year() {
        let mut store = store();
        let out = run_session("2\n3\n2016\n7\n", &mut store);

        assert!(out.contains("Articles sorted by year, month and day in ascending order."));
        assert!(out.contains("Total Combined Articles: 3"));
        assert!(out.contains("Articles from year 2016"));
        let earlier = out.find("Title: Earlier").unwrap();
        let later = out.find("Title: Later").unwrap();
        assert!(earlier < later);
        assert!(!out.contains("Title: Old"));
    }

    #[test]
    fn test_sort_twice_reports_already_sorted() {
        let mut store = store();
        let out = run_session("2\n2\n7\n", &mut store);
        assert!(out.contains("Articles are already sorted."));
    }

    #[test]
    fn test_year_with_no_results() {
        let mut store = store();
        let out = run_session("2\n3\n1990\n7\n", &mut store);
        assert!(out.contains("No articles found for the year 1990"));
    }

    #[test]
    fn test_invalid_year_input() {
        let mut store = store();
        let out = run_session("2\n3\nnext year\n7\n", &mut store);
        assert!(out.contains("Invalid year: next year"));
    }

    #[test]
    fn test_search_category_keeps_spaces() {
        let mut store = store();
        let out = run_session("4\nGovernment News\n7\n", &mut store);
        assert!(out.contains("Articles under category: Government News"));
        assert!(out.contains("Title: Later"));
    }

    #[test]
    fn test_reports() {
        let mut store = store();
        let out = run_session("5\n6\n7\n", &mut store);
        assert!(out.contains("Percentage of Fake Political Articles in 2016"));
        assert!(out.contains("Most frequent words in fake Government News articles:"));
        assert!(out.contains("tax             : 2"));
    }
}

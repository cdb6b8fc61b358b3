//! Newsdesk - Load labeled news CSVs and explore them from the command line.
//!
//! This crate is the front end around [`newsdesk_engine`]: it reads the
//! true-news and fake-news CSV files into an article store and exposes the
//! store's queries and reports as subcommands and as an interactive menu.
//!
//! # Example
//!
//! ```
//! use newsdesk::loader::load_from_reader;
//! use newsdesk_engine::{ArticleStore, Label};
//!
//! let csv = "title,text,subject,date\nHeadline,Body,politics,01-Jan-16\n";
//! let mut store = ArticleStore::new();
//! let counts = load_from_reader(csv.as_bytes(), Label::True, &mut store, 100)?;
//! assert_eq!(counts.loaded, 1);
//! # Ok::<(), newsdesk::NewsdeskError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Defaults, input settings and report settings
//! - [`error`]: Error types and Result alias
//! - [`loader`]: CSV input adapter
//! - [`render`]: Text output of articles and reports
//! - [`menu`]: Interactive numbered menu
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod menu;
pub mod render;

// Re-export commonly used items
pub use config::{AppConfig, ReportSettings};
pub use error::{NewsdeskError, Result};
pub use loader::{load_csv, load_sources, LoadSummary};

//! # Summary
//!
//! `summary` walks a directory tree and writes one plain-text report listing every
//! directory and the content of every text file in it. Images, tool caches and
//! version-control metadata are skipped; font files are listed by name only.
//!
//! The report is deterministic: directories are visited in pre-order and entries
//! within a directory are sorted by name. Files that cannot be read keep their entry
//! with an error line instead of content, so one bad file never stops a run.
//!
//! # Features
//!
//! - `logging` (default): emits debug events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use summary::{FilterConfig, Silent, generate};
//!
//! let config = FilterConfig::extended("summary.txt");
//! let report = generate("my-project", "summary.txt", &config, &mut Silent)
//!     .expect("Failed to write summary");
//!
//! println!("{} directories, {} files", report.stats.directories, report.stats.files);
//! ```

mod engine;
mod error;
mod options;
mod output;
mod progress;
mod types;

pub use engine::{generate, summarize};
pub use error::SummaryError;
pub use options::{DEFAULT_OUTPUT_NAME, FileDisposition, FilterBuilder, FilterConfig, TOOL_NAME};
pub use progress::{Progress, Silent};
pub use types::{SummaryReport, SummaryStats, SummaryStatus};

use std::path::PathBuf;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStatus {
    /// The tree was walked and every entry written.
    Completed,
    /// The root was not a directory; the report holds only the header and
    /// an error line.
    InvalidRoot,
}

/// Counters gathered while writing a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    /// Directories that received a `Dossier :` entry.
    pub directories: usize,
    /// Files written with their content section.
    pub files: usize,
    /// Files listed by name only.
    pub name_only: usize,
    /// Files left out by name or extension.
    pub skipped: usize,
    /// Files whose content section holds a read error instead.
    pub unreadable_files: usize,
    /// Directories whose listing failed and were left out.
    pub unreadable_directories: usize,
}

/// The result of a [`generate`](crate::generate) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// Where the report was written.
    pub output: PathBuf,
    pub status: SummaryStatus,
    pub stats: SummaryStats,
}

impl SummaryReport {
    pub fn is_complete(&self) -> bool {
        self.status == SummaryStatus::Completed
    }
}

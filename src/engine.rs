use crate::error::SummaryError;
use crate::options::{FileDisposition, FilterConfig};
use crate::output;
use crate::progress::Progress;
use crate::types::{SummaryReport, SummaryStats, SummaryStatus};
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

/// Immediate children of one directory, already filtered and sorted.
#[derive(Debug, Default)]
struct Listing {
    files: Vec<OsString>,
    subdirs: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    DirLink,
}

fn entry_kind(entry: &fs::DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;
    Ok(if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_symlink() && entry.path().is_dir() {
        EntryKind::DirLink
    } else {
        EntryKind::File
    })
}

impl Listing {
    /// An entry whose type cannot be determined is kept as a file, so its
    /// read failure shows up in the report.
    fn push(&mut self, name: OsString, kind: io::Result<EntryKind>, config: &FilterConfig) {
        match kind {
            Ok(EntryKind::Dir) => {
                if !config.is_ignored_directory(&name.to_string_lossy()) {
                    self.subdirs.push(name);
                }
            }
            // Links to directories are neither reported nor followed.
            Ok(EntryKind::DirLink) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Not following directory link {}", name.to_string_lossy());
            }
            Ok(EntryKind::File) => self.files.push(name),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Unknown type for {}: {}", name.to_string_lossy(), _e);
                self.files.push(name);
            }
        }
    }
}

fn list_directory(dir: &Path, config: &FilterConfig) -> io::Result<Listing> {
    let mut listing = Listing::default();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        listing.push(entry.file_name(), entry_kind(&entry), config);
    }
    listing.files.sort();
    listing.subdirs.sort();
    Ok(listing)
}

fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Base name shown in the root's `Dossier :` line. `.` and `..` are kept as
/// written.
fn root_name(root: &Path) -> String {
    match root.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    }
}

struct Walker<'a, W: Write, P: Progress + ?Sized> {
    config: &'a FilterConfig,
    out: W,
    progress: &'a mut P,
    stats: SummaryStats,
}

impl<W: Write, P: Progress + ?Sized> Walker<'_, W, P> {
    fn walk_dir(&mut self, dir: &Path, name: &str, depth: usize) -> Result<(), SummaryError> {
        let listing = match list_directory(dir, self.config) {
            Ok(listing) => listing,
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Cannot list {}: {}", dir.display(), e);
                self.progress.unreadable_directory(dir, &e);
                self.stats.unreadable_directories += 1;
                return Ok(());
            }
        };
        output::write_directory(&mut self.out, name, depth).map_err(SummaryError::Write)?;
        self.progress.entered_directory(name, depth);
        self.stats.directories += 1;
        for file_name in &listing.files {
            self.write_file(dir, file_name, depth)?;
        }
        for subdir in &listing.subdirs {
            self.walk_dir(&dir.join(subdir), &subdir.to_string_lossy(), depth + 1)?;
        }
        Ok(())
    }

    fn write_file(
        &mut self,
        dir: &Path,
        file_name: &OsStr,
        depth: usize,
    ) -> Result<(), SummaryError> {
        let name = file_name.to_string_lossy();
        let name = name.as_ref();
        match self.config.classify(name) {
            FileDisposition::Skip => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping {}", name);
                self.stats.skipped += 1;
            }
            FileDisposition::NameOnly => {
                output::write_name_only(&mut self.out, name, depth)
                    .map_err(SummaryError::Write)?;
                self.stats.name_only += 1;
            }
            FileDisposition::Content => {
                let path = dir.join(file_name);
                let content = read_lossy(&path);
                if let Err(e) = &content {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Cannot read {}: {}", path.display(), e);
                    self.progress.unreadable_file(&path, e);
                    self.stats.unreadable_files += 1;
                } else {
                    self.stats.files += 1;
                }
                output::write_file_entry(&mut self.out, name, depth, content.as_deref())
                    .map_err(SummaryError::Write)?;
            }
        }
        Ok(())
    }
}

/// Writes the report for `root` into `out`.
///
/// The root is walked in pre-order: each directory's line, then its own
/// files, then its subdirectories, both sorted by name. Directories named in
/// the config are never opened. Files that cannot be read keep their entry
/// with an error line in place of the content.
///
/// Only write failures on `out` are returned as errors. A root that is not a
/// directory yields [`SummaryStatus::InvalidRoot`] with the error recorded in
/// the report.
pub fn summarize<W, P>(
    root: &Path,
    config: &FilterConfig,
    out: W,
    progress: &mut P,
) -> Result<(SummaryStatus, SummaryStats), SummaryError>
where
    W: Write,
    P: Progress + ?Sized,
{
    #[cfg(feature = "logging")]
    tracing::debug!("Starting summary of root: {}", root.display());
    let root_text = root.display().to_string();
    let mut walker = Walker {
        config,
        out,
        progress,
        stats: SummaryStats::default(),
    };
    walker.progress.started(root);
    output::write_header(&mut walker.out, &root_text).map_err(SummaryError::Write)?;

    let status = if root.is_dir() {
        walker.walk_dir(root, &root_name(root), 0)?;
        SummaryStatus::Completed
    } else {
        let message = output::invalid_root_message(&root_text);
        walker.progress.invalid_root(&message);
        output::write_invalid_root(&mut walker.out, &message).map_err(SummaryError::Write)?;
        SummaryStatus::InvalidRoot
    };
    walker.out.flush().map_err(SummaryError::Write)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Finished summary: {:?}", walker.stats);
    Ok((status, walker.stats))
}

/// Creates (or truncates) `output` and writes the report for `root` into it.
///
/// # Errors
///
/// Returns [`SummaryError::InvalidPath`] if `output` has no file name, and
/// [`SummaryError::Io`] if the report cannot be created or written.
pub fn generate<P>(
    root: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &FilterConfig,
    progress: &mut P,
) -> Result<SummaryReport, SummaryError>
where
    P: Progress + ?Sized,
{
    let output = output.as_ref();
    if output.file_name().is_none() {
        return Err(SummaryError::InvalidPath(output.display().to_string()));
    }
    let file = File::create(output).map_err(|e| SummaryError::io(output, e))?;
    let (status, stats) = summarize(root.as_ref(), config, BufWriter::new(file), progress)
        .map_err(|e| match e {
            SummaryError::Write(source) => SummaryError::io(output, source),
            other => other,
        })?;
    Ok(SummaryReport {
        output: PathBuf::from(output),
        status,
        stats,
    })
}

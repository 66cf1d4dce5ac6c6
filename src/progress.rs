//! Run narration.
//!
//! The report itself is the contract; everything passed to a [`Progress`]
//! is informational. The command-line tool prints it, library callers can
//! ignore it with [`Silent`].

use std::io;
use std::path::Path;

/// Observer notified as the reporter moves through the tree.
///
/// Every method has an empty default so implementors pick what they need.
pub trait Progress {
    /// Called once, before the root is checked.
    fn started(&mut self, _root: &Path) {}
    /// Called once per directory that gets an entry, before its files.
    fn entered_directory(&mut self, _name: &str, _depth: usize) {}
    /// Called when the root is not a directory. `message` is the line
    /// written into the report.
    fn invalid_root(&mut self, _message: &str) {}
    fn unreadable_file(&mut self, _path: &Path, _error: &io::Error) {}
    fn unreadable_directory(&mut self, _path: &Path, _error: &io::Error) {}
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {}

//! Report layout.
//!
//! Every line of the report is produced here. The engine decides what to
//! write and in which order; these functions only know how each entry looks.

use std::io::{self, Write};

const INDENT_UNIT: usize = 4;
const HEADER_RULE_EXTRA: usize = 20;
const FILE_RULE_EXTRA: usize = 10;

/// Writes the report title and its `=` underline.
pub(crate) fn write_header(out: &mut impl Write, root: &str) -> io::Result<()> {
    writeln!(out, "Résumé du projet : {}", root)?;
    writeln!(out, "{}\n", "=".repeat(char_len(root) + HEADER_RULE_EXTRA))
}

/// The line written in place of the tree when the root is not a directory.
pub(crate) fn invalid_root_message(root: &str) -> String {
    format!("ERREUR : Le chemin '{}' n'est pas un répertoire valide.", root)
}

pub(crate) fn write_invalid_root(out: &mut impl Write, message: &str) -> io::Result<()> {
    write!(out, "{}", message)
}

pub(crate) fn write_directory(out: &mut impl Write, name: &str, depth: usize) -> io::Result<()> {
    writeln!(out, "{}Dossier : {}/", indent(depth), name)
}

/// Writes a full file entry. `content` is either the decoded text or the
/// reason it could not be read.
pub(crate) fn write_file_entry(
    out: &mut impl Write,
    name: &str,
    depth: usize,
    content: Result<&str, &io::Error>,
) -> io::Result<()> {
    let pad = indent(depth + 1);
    let rule = "-".repeat(char_len(name) + FILE_RULE_EXTRA);
    writeln!(out, "\n{}Fichier : {}", pad, name)?;
    writeln!(out, "{}{}", pad, rule)?;
    match content {
        Ok(text) => {
            for line in split_lines(text) {
                writeln!(out, "{}  {}", pad, line)?;
            }
        }
        Err(e) => writeln!(
            out,
            "{}  --> ERREUR : Impossible de lire le contenu. Raison : {}",
            pad, e
        )?,
    }
    writeln!(out, "{}{}\n", pad, rule)
}

pub(crate) fn write_name_only(out: &mut impl Write, name: &str, depth: usize) -> io::Result<()> {
    writeln!(out, "\n{}Fichier (police) : {}", indent(depth + 1), name)
}

fn indent(depth: usize) -> String {
    " ".repeat(INDENT_UNIT * depth)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Line terminators: `\n`, `\r`, `\r\n` (one terminator), vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits on every `LINE_BREAKS` terminator. A trailing terminator does not
/// produce an empty last line.
pub(crate) fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

pub(crate) struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(LINE_BREAKS) {
            Some(i) => {
                let line = &self.rest[..i];
                let tail = &self.rest[i..];
                let skip = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                self.rest = &self.rest[i + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        split_lines(text).collect()
    }

    #[test]
    fn split_handles_every_terminator() {
        assert_eq!(collect("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(
            collect("a\x0cb\x0bc\u{2028}d\u{85}e\u{2029}f\x1cg\x1dh\x1ei"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );
    }

    #[test]
    fn split_keeps_crlf_as_one_break() {
        assert_eq!(collect("a\r\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(collect("a\n\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_drops_trailing_terminator_only() {
        assert_eq!(collect("a\n"), vec!["a"]);
        assert_eq!(collect("a\n\n"), vec!["a", ""]);
        assert_eq!(collect("\n"), vec![""]);
        assert!(collect("").is_empty());
    }

    #[test]
    fn file_rule_follows_name_length() {
        let mut out = Vec::new();
        write_file_entry(&mut out, "été.md", 0, Ok("x")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\n    Fichier : été.md\n    ----------------\n      x\n    ----------------\n\n"
        );
    }

    #[test]
    fn header_rule_follows_root_length() {
        let mut out = Vec::new();
        write_header(&mut out, "src").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("Résumé du projet : src\n{}\n\n", "=".repeat(23)));
    }
}

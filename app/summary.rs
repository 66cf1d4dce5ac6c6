//! Command-line interface for summary.
//!
//! Writes the report for one directory into `summary.txt` in the working
//! directory and narrates progress on stdout.

use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use summary::{DEFAULT_OUTPUT_NAME, FilterConfig, Progress, generate};

/// summary — dump a project's tree and text files into one report
#[derive(Parser)]
#[command(name = "summary", version, about, long_about = None)]
struct Cli {
    /// Directory to analyse. Extra words are joined with spaces, so an
    /// unquoted path containing spaces works.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, value_name = "PATH")]
    path: Vec<String>,

    /// Report file to write (must come before PATH)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    output: PathBuf,
}

impl Cli {
    fn root(&self) -> PathBuf {
        PathBuf::from(join_path_words(&self.path))
    }
}

/// Joins shell words back into one path and strips surrounding quotes.
fn join_path_words(words: &[String]) -> String {
    words
        .join(" ")
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

/// Prints the run narration on stdout.
struct Narrator;

impl Progress for Narrator {
    fn started(&mut self, root: &Path) {
        println!("Analyse du répertoire : {}", root.display());
    }

    fn entered_directory(&mut self, name: &str, _depth: usize) {
        println!("  -> Dans le dossier : {}/", name);
    }

    fn invalid_root(&mut self, message: &str) {
        println!("{}", message);
    }

    fn unreadable_directory(&mut self, path: &Path, error: &io::Error) {
        eprintln!("Dossier ignoré : {} ({})", path.display(), error);
    }
}

fn main() {
    let cli = Cli::parse();
    let root = cli.root();
    let config = FilterConfig::extended(output_name(&cli.output));

    match generate(&root, &cli.output, &config, &mut Narrator) {
        // An invalid root is reported inside the file; the run still counts
        // as finished.
        Ok(report) => println!(
            "\nRésumé terminé ! Le fichier '{}' a été créé avec succès.",
            report.output.display()
        ),
        Err(e) => println!("Une erreur inattendue est survenue : {}", e),
    }
}

fn output_name(output: &Path) -> String {
    output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string())
}

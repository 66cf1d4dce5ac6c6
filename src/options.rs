use std::collections::BTreeSet;
use std::env::consts::EXE_SUFFIX;

/// Name of the report written by the command-line tool.
pub const DEFAULT_OUTPUT_NAME: &str = "summary.txt";
/// Name of the command-line tool itself, without platform suffix.
pub const TOOL_NAME: &str = "summary";

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".svg", ".ico", ".webp"];
const FONT_EXTENSIONS: &[&str] = &[".woff", ".woff2", ".ttf", ".otf", ".eot"];
const TOOLING_DIRECTORIES: &[&str] = &[".git", "__pycache__", "node_modules", "venv", ".vscode"];
const DEPLOY_CACHE_DIRECTORY: &str = ".wrangler";

/// What the reporter does with a single file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDisposition {
    /// No entry at all.
    Skip,
    /// Listed by name, never opened.
    NameOnly,
    /// Listed with its full text content.
    Content,
}

/// Immutable filtering rules for one run.
///
/// Extensions are stored lowercased and compared against the lowercased
/// file name with a plain suffix check, so `.PNG` and `.png` behave the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    ignored_file_names: BTreeSet<String>,
    ignored_extensions: Vec<String>,
    ignored_directory_names: BTreeSet<String>,
    special_extensions: Vec<String>,
}

impl FilterConfig {
    /// Images and tooling directories are skipped; no name-only class.
    pub fn basic(output_name: impl Into<String>) -> Self {
        FilterBuilder::new(output_name).basic_rules().build()
    }

    /// The basic rules plus font files listed by name and the deployment
    /// tool cache directory.
    pub fn extended(output_name: impl Into<String>) -> Self {
        FilterBuilder::new(output_name)
            .basic_rules()
            .ignore_directory(DEPLOY_CACHE_DIRECTORY)
            .name_only_extensions(FONT_EXTENSIONS.iter().copied())
            .build()
    }

    pub fn classify(&self, file_name: &str) -> FileDisposition {
        if self.ignored_file_names.contains(file_name) {
            return FileDisposition::Skip;
        }
        let lowered = file_name.to_lowercase();
        if ends_with_any(&lowered, &self.ignored_extensions) {
            FileDisposition::Skip
        } else if ends_with_any(&lowered, &self.special_extensions) {
            FileDisposition::NameOnly
        } else {
            FileDisposition::Content
        }
    }

    pub fn is_ignored_directory(&self, dir_name: &str) -> bool {
        self.ignored_directory_names.contains(dir_name)
    }

    pub fn ignored_file_names(&self) -> impl Iterator<Item = &str> {
        self.ignored_file_names.iter().map(String::as_str)
    }

    pub fn ignored_extensions(&self) -> &[String] {
        &self.ignored_extensions
    }

    pub fn ignored_directory_names(&self) -> impl Iterator<Item = &str> {
        self.ignored_directory_names.iter().map(String::as_str)
    }

    pub fn special_extensions(&self) -> &[String] {
        &self.special_extensions
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::extended(DEFAULT_OUTPUT_NAME)
    }
}

fn ends_with_any(name: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}

/// Builder for [`FilterConfig`].
///
/// Always seeded with the report's own file name so a previous report is
/// never read back into a new one.
#[derive(Debug)]
pub struct FilterBuilder {
    config: FilterConfig,
}

impl FilterBuilder {
    pub fn new(output_name: impl Into<String>) -> Self {
        let mut ignored_file_names = BTreeSet::new();
        ignored_file_names.insert(output_name.into());
        Self {
            config: FilterConfig {
                ignored_file_names,
                ignored_extensions: Vec::new(),
                ignored_directory_names: BTreeSet::new(),
                special_extensions: Vec::new(),
            },
        }
    }
    /// The tool's executable, image formats and tooling directories.
    pub fn basic_rules(self) -> Self {
        self.ignore_file(format!("{TOOL_NAME}{EXE_SUFFIX}"))
            .ignore_extensions(IMAGE_EXTENSIONS.iter().copied())
            .ignore_directories(TOOLING_DIRECTORIES.iter().copied())
    }
    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.config.ignored_file_names.insert(name.into());
        self
    }
    pub fn ignore_extension(mut self, suffix: impl AsRef<str>) -> Self {
        push_suffix(&mut self.config.ignored_extensions, suffix.as_ref());
        self
    }
    pub fn ignore_extensions<I, S>(self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        suffixes
            .into_iter()
            .fold(self, |builder, suffix| builder.ignore_extension(suffix))
    }
    pub fn ignore_directory(mut self, name: impl Into<String>) -> Self {
        self.config.ignored_directory_names.insert(name.into());
        self
    }
    pub fn ignore_directories<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.ignore_directory(name))
    }
    pub fn name_only_extension(mut self, suffix: impl AsRef<str>) -> Self {
        push_suffix(&mut self.config.special_extensions, suffix.as_ref());
        self
    }
    pub fn name_only_extensions<I, S>(self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        suffixes
            .into_iter()
            .fold(self, |builder, suffix| builder.name_only_extension(suffix))
    }
    pub fn build(self) -> FilterConfig {
        self.config
    }
}

fn push_suffix(suffixes: &mut Vec<String>, suffix: &str) {
    let lowered = suffix.to_lowercase();
    if !lowered.is_empty() && !suffixes.contains(&lowered) {
        suffixes.push(lowered);
    }
}

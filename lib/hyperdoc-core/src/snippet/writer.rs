use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::{DocumentationConfig, DocumentationError};

/// Destination of rendered snippets.
pub trait SnippetWriter {
    /// Persists `content` as the snippet `snippet` of the documented `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::IoError`] when the snippet cannot be stored.
    fn write_snippet(
        &mut self,
        operation: &str,
        snippet: &str,
        content: &str,
    ) -> Result<(), DocumentationError>;
}

/// Writes each snippet to `<output_dir>/<operation>/<snippet>.<extension>`.
///
/// The operation name is slugified, so `Notes List Example` lands in `notes-list-example/`.
/// Names differing only by case or punctuation share a directory, and a later snippet
/// overwrites an earlier one of the same name.
#[derive(Debug, Clone)]
pub struct FileSnippetWriter {
    output_dir: PathBuf,
    extension: String,
}

impl FileSnippetWriter {
    /// Creates a writer using the configured output directory and extension.
    pub fn new(config: &DocumentationConfig) -> Self {
        Self {
            output_dir: config.output_dir().to_path_buf(),
            extension: config.snippet_extension().to_string(),
        }
    }

    /// The file a snippet is written to: `<output_dir>/<slug(operation)>/<snippet>.<extension>`.
    pub fn snippet_path(&self, operation: &str, snippet: &str) -> PathBuf {
        self.output_dir
            .join(slug::slugify(operation))
            .join(format!("{snippet}.{}", self.extension))
    }

    /// The root directory of written snippets.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl SnippetWriter for FileSnippetWriter {
    fn write_snippet(
        &mut self,
        operation: &str,
        snippet: &str,
        content: &str,
    ) -> Result<(), DocumentationError> {
        let path = self.snippet_path(operation, snippet);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        debug!(path = %path.display(), "snippet written");
        Ok(())
    }
}

/// Keeps snippets in memory, in write order.
#[derive(Debug, Clone, Default)]
pub struct MemorySnippetWriter {
    snippets: IndexMap<(String, String), String>,
}

impl MemorySnippetWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The content of a written snippet.
    pub fn get(&self, operation: &str, snippet: &str) -> Option<&str> {
        self.snippets
            .get(&(operation.to_string(), snippet.to_string()))
            .map(String::as_str)
    }

    /// Names of the snippets written for `operation`, in write order.
    pub fn snippet_names(&self, operation: &str) -> Vec<&str> {
        self.snippets
            .keys()
            .filter(|(op, _)| op == operation)
            .map(|(_, snippet)| snippet.as_str())
            .collect()
    }

    /// Returns `true` if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl SnippetWriter for MemorySnippetWriter {
    fn write_snippet(
        &mut self,
        operation: &str,
        snippet: &str,
        content: &str,
    ) -> Result<(), DocumentationError> {
        self.snippets.insert(
            (operation.to_string(), snippet.to_string()),
            content.to_string(),
        );
        Ok(())
    }
}

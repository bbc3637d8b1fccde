use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default snippet output directory.
pub const OUTPUT_DIR_ENV: &str = "HYPERDOC_OUTPUT_DIR";

const DEFAULT_OUTPUT_DIR: &str = "target/generated-snippets";
const DEFAULT_EXTENSION: &str = "adoc";
const DEFAULT_BASE_URI: &str = "http://localhost:8080";

/// Where and how snippets are written.
///
/// # Default Configuration
///
/// - **Output directory**: `$HYPERDOC_OUTPUT_DIR`, or `target/generated-snippets`
/// - **Snippet extension**: `adoc`
/// - **Base URI**: `http://localhost:8080`, used for relative request URIs in curl snippets
///
/// ```rust
/// use hyperdoc_core::DocumentationConfig;
///
/// let config = DocumentationConfig::default()
///     .with_output_dir("build/snippets")
///     .with_snippet_extension("asciidoc");
///
/// assert_eq!(config.snippet_extension(), "asciidoc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationConfig {
    output_dir: PathBuf,
    snippet_extension: String,
    default_base_uri: String,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        let output_dir = env::var_os(OUTPUT_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);
        Self {
            output_dir,
            snippet_extension: DEFAULT_EXTENSION.to_string(),
            default_base_uri: DEFAULT_BASE_URI.to_string(),
        }
    }
}

impl DocumentationConfig {
    /// Sets the root directory of written snippets.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the file extension of written snippets, without the dot.
    #[must_use]
    pub fn with_snippet_extension(mut self, extension: impl Into<String>) -> Self {
        self.snippet_extension = extension.into();
        self
    }

    /// Sets the scheme and authority prepended to relative request URIs.
    #[must_use]
    pub fn with_default_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        let base_uri: String = base_uri.into();
        self.default_base_uri = base_uri.trim_end_matches('/').to_string();
        self
    }

    /// The root directory of written snippets.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The file extension of written snippets.
    pub fn snippet_extension(&self) -> &str {
        &self.snippet_extension
    }

    /// The scheme and authority prepended to relative request URIs.
    pub fn default_base_uri(&self) -> &str {
        &self.default_base_uri
    }
}

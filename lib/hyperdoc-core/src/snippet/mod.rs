//! Snippets rendered from a captured exchange, and where they are written.
//!
//! A [`Snippet`] turns an exchange into text; a [`SnippetWriter`] stores that text under
//! the documented operation name and the snippet name:
//!
//! | Snippet                     | Content                                   |
//! |-----------------------------|-------------------------------------------|
//! | `curl-request`              | the request as a `curl` command           |
//! | `http-response`             | the raw HTTP response                     |
//! | `curl-request-and-response` | both of the above                         |
//! | `links`                     | table of documented link relations        |
//! | `schema`                    | description and table of schema properties |

use std::fmt::Debug;

use crate::{CapturedExchange, DocumentationConfig, DocumentationError, Extractors};

mod table;
pub use self::table::{LINK_COLUMNS, SCHEMA_COLUMNS, render_links, render_schema};

mod curl;
pub use self::curl::{CurlRequestAndResponseSnippet, CurlRequestSnippet, HttpResponseSnippet};

mod hypermedia;
pub use self::hypermedia::{LinksSnippet, SchemaSnippet};

mod writer;
pub use self::writer::{FileSnippetWriter, MemorySnippetWriter, SnippetWriter};

/// Everything a snippet may read while rendering.
#[derive(Debug, Clone, Copy)]
pub struct SnippetContext<'a> {
    /// The documented exchange.
    pub exchange: &'a CapturedExchange,
    /// The documentation settings.
    pub config: &'a DocumentationConfig,
    /// Extractors available by content type.
    pub extractors: &'a Extractors,
}

/// One documented aspect of an exchange.
pub trait Snippet: Debug + Send + Sync {
    /// The snippet name, used as file name.
    fn name(&self) -> &str;

    /// Renders the snippet.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentationError`] when the exchange cannot be documented.
    fn render(&self, context: &SnippetContext<'_>) -> Result<String, DocumentationError>;
}

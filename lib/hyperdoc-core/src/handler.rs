use tracing::info;

use crate::hypermedia::{LinkDescriptor, LinkExtractor, SchemaDescriptor, SchemaExtractor};
use crate::snippet::{
    CurlRequestAndResponseSnippet, CurlRequestSnippet, FileSnippetWriter, HttpResponseSnippet,
    LinksSnippet, SchemaSnippet, Snippet, SnippetContext, SnippetWriter,
};
use crate::{CapturedExchange, DocumentationConfig, DocumentationError, Extractors};

/// Starts documenting an exchange under the operation name `name`.
///
/// The handler always writes the `curl-request`, `http-response` and
/// `curl-request-and-response` snippets; links and schema are added on demand.
///
/// Snippet writers receive `name` verbatim. [`FileSnippetWriter`] slugifies it into a
/// directory name, so `notes_list.Example` and `Notes List Example` share
/// `notes-list-example/`: pick names that stay distinct once slugified.
///
/// ```rust
/// use bytes::Bytes;
/// use hyperdoc_core::{CapturedExchange, MemorySnippetWriter, document, link_with_relation};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = http::Response::builder()
///     .header("Content-Type", "application/hal+json")
///     .body(Bytes::from_static(
///         br#"{"_links": {"notes": {"href": "http://localhost:8080/notes"}}}"#,
///     ))?;
/// let exchange = CapturedExchange::new(http::Request::get("/").body(Bytes::new())?, response);
///
/// let mut writer = MemorySnippetWriter::new();
/// document("index-example")
///     .with_links([link_with_relation("notes").with_description("The notes resource")])?
///     .handle(&exchange, &mut writer)?;
///
/// assert!(writer.get("index-example", "links").is_some());
/// # Ok(())
/// # }
/// ```
pub fn document(name: impl Into<String>) -> DocumentationHandler {
    DocumentationHandler::new(name)
}

/// Documents one captured exchange: renders every snippet, then writes them all.
#[derive(Debug)]
pub struct DocumentationHandler {
    name: String,
    config: DocumentationConfig,
    extractors: Extractors,
    snippets: Vec<Box<dyn Snippet>>,
}

impl DocumentationHandler {
    /// Creates a handler with the request and response snippets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: DocumentationConfig::default(),
            extractors: Extractors::standard().clone(),
            snippets: vec![
                Box::new(CurlRequestSnippet),
                Box::new(HttpResponseSnippet),
                Box::new(CurlRequestAndResponseSnippet),
            ],
        }
    }

    /// Replaces the documentation settings.
    #[must_use]
    pub fn with_config(mut self, config: DocumentationConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the extractor registry.
    #[must_use]
    pub fn with_extractors(mut self, extractors: Extractors) -> Self {
        self.extractors = extractors;
        self
    }

    /// Documents the links of the response, extracted according to its content type.
    ///
    /// A link present in the response but not described, or described, required and
    /// absent, fails the documentation.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::PreconditionError`] when a descriptor has no relation
    /// or no description, or when a relation is described twice.
    pub fn with_links(
        self,
        descriptors: impl IntoIterator<Item = LinkDescriptor>,
    ) -> Result<Self, DocumentationError> {
        let snippet = LinksSnippet::new(None, descriptors)?;
        Ok(self.with_snippet(snippet))
    }

    /// Documents the links of the response, extracted with `extractor`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::PreconditionError`] when a descriptor has no relation
    /// or no description, or when a relation is described twice.
    pub fn with_links_using(
        self,
        extractor: LinkExtractor,
        descriptors: impl IntoIterator<Item = LinkDescriptor>,
    ) -> Result<Self, DocumentationError> {
        let snippet = LinksSnippet::new(Some(extractor), descriptors)?;
        Ok(self.with_snippet(snippet))
    }

    /// Documents the resource schema held by the response, which must be
    /// `application/schema+json` unless a custom extractor is registered.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::PreconditionError`] when the descriptor has no
    /// resource name.
    pub fn with_schema(self, descriptor: SchemaDescriptor) -> Result<Self, DocumentationError> {
        let snippet = SchemaSnippet::new(None, descriptor)?;
        Ok(self.with_snippet(snippet))
    }

    /// Documents the resource schema held by the response, extracted with `extractor`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::PreconditionError`] when the descriptor has no
    /// resource name.
    pub fn with_schema_using(
        self,
        extractor: SchemaExtractor,
        descriptor: SchemaDescriptor,
    ) -> Result<Self, DocumentationError> {
        let snippet = SchemaSnippet::new(Some(extractor), descriptor)?;
        Ok(self.with_snippet(snippet))
    }

    /// Adds a snippet rendered after the existing ones.
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Snippet + 'static) -> Self {
        self.snippets.push(Box::new(snippet));
        self
    }

    /// The operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The names of the snippets, in rendering order.
    pub fn snippet_names(&self) -> Vec<&str> {
        self.snippets.iter().map(|it| it.name()).collect()
    }

    /// Renders every snippet for `exchange`, then hands them to `writer`.
    ///
    /// Nothing is written when any snippet fails to render.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentationError`] raised by a snippet or by the writer.
    pub fn handle(
        &self,
        exchange: &CapturedExchange,
        writer: &mut impl SnippetWriter,
    ) -> Result<(), DocumentationError> {
        let context = SnippetContext {
            exchange,
            config: &self.config,
            extractors: &self.extractors,
        };
        let rendered = self
            .snippets
            .iter()
            .map(|snippet| {
                let content = snippet.render(&context)?;
                Ok::<_, DocumentationError>((snippet.name(), content))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (snippet, content) in &rendered {
            writer.write_snippet(&self.name, snippet, content)?;
        }
        info!(operation = %self.name, snippets = rendered.len(), "exchange documented");
        Ok(())
    }

    /// Renders every snippet for `exchange` and writes them under the configured
    /// output directory, in the slugified operation directory
    /// (see [`FileSnippetWriter::snippet_path`]).
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentationError`] raised by a snippet or by the file system.
    pub fn handle_to_files(&self, exchange: &CapturedExchange) -> Result<(), DocumentationError> {
        let mut writer = FileSnippetWriter::new(&self.config);
        self.handle(exchange, &mut writer)
    }
}

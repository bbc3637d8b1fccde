use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::warn;

use crate::hypermedia::{LinkExtractor, SchemaExtractor};

/// Content type of HAL documents.
pub const HAL_JSON: &str = "application/hal+json";
/// Content type of plain JSON documents, read with Atom-style links.
pub const APPLICATION_JSON: &str = "application/json";
/// Content type of JSON schema documents.
pub const SCHEMA_JSON: &str = "application/schema+json";

static STANDARD: LazyLock<Extractors> = LazyLock::new(Extractors::default);

/// Registry of extractors keyed by exact content type.
///
/// Lookups compare the full content-type string, case-sensitively, without parsing
/// parameters: `application/hal+json;charset=UTF-8` does not match `application/hal+json`.
/// At most one extractor is registered per content type and aspect.
///
/// ```rust
/// use hyperdoc_core::{Extractors, LinkExtractor};
///
/// let extractors = Extractors::default()
///     .with_link_extractor("application/vnd.siren+json", LinkExtractor::Atom);
///
/// assert!(extractors.link_extractor_for("application/vnd.siren+json").is_some());
/// assert!(extractors.link_extractor_for("text/html").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Extractors {
    links: IndexMap<String, LinkExtractor>,
    schemas: IndexMap<String, SchemaExtractor>,
}

impl Default for Extractors {
    /// Registers HAL and Atom-style link extraction, and resource schema extraction.
    fn default() -> Self {
        Self::empty()
            .with_link_extractor(HAL_JSON, LinkExtractor::Hal)
            .with_link_extractor(APPLICATION_JSON, LinkExtractor::Atom)
            .with_schema_extractor(SCHEMA_JSON, SchemaExtractor::Resource)
    }
}

impl Extractors {
    /// A registry without any extractor.
    pub fn empty() -> Self {
        Self {
            links: IndexMap::new(),
            schemas: IndexMap::new(),
        }
    }

    /// The shared registry holding the built-in extractors.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Registers the link extractor for `content_type`, replacing any previous one.
    #[must_use]
    pub fn with_link_extractor(
        mut self,
        content_type: impl Into<String>,
        extractor: LinkExtractor,
    ) -> Self {
        let content_type = content_type.into();
        if let Some(previous) = self.links.insert(content_type.clone(), extractor) {
            warn!(%content_type, ?previous, ?extractor, "link extractor replaced");
        }
        self
    }

    /// Registers the schema extractor for `content_type`, replacing any previous one.
    #[must_use]
    pub fn with_schema_extractor(
        mut self,
        content_type: impl Into<String>,
        extractor: SchemaExtractor,
    ) -> Self {
        let content_type = content_type.into();
        if let Some(previous) = self.schemas.insert(content_type.clone(), extractor) {
            warn!(%content_type, ?previous, ?extractor, "schema extractor replaced");
        }
        self
    }

    /// The link extractor registered for exactly `content_type`.
    pub fn link_extractor_for(&self, content_type: &str) -> Option<LinkExtractor> {
        self.links.get(content_type).copied()
    }

    /// The schema extractor registered for exactly `content_type`.
    pub fn schema_extractor_for(&self, content_type: &str) -> Option<SchemaExtractor> {
        self.schemas.get(content_type).copied()
    }
}

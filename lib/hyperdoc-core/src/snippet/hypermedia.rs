use indexmap::IndexSet;
use tracing::debug;

use super::table::{render_links, render_schema};
use super::{Snippet, SnippetContext};
use crate::DocumentationError;
use crate::hypermedia::{
    LinkDescriptor, LinkExtractor, SchemaDescriptor, SchemaExtractor, reconcile_links,
    reconcile_schema,
};

/// Documents the links of the response against their descriptors.
#[derive(Debug, Clone)]
pub struct LinksSnippet {
    extractor: Option<LinkExtractor>,
    descriptors: Vec<LinkDescriptor>,
}

impl LinksSnippet {
    /// Creates the snippet; without an explicit extractor one is looked up by content type.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::PreconditionError`] when a descriptor has no
    /// relation or no description, or when a relation is described twice.
    pub fn new(
        extractor: Option<LinkExtractor>,
        descriptors: impl IntoIterator<Item = LinkDescriptor>,
    ) -> Result<Self, DocumentationError> {
        let descriptors = descriptors.into_iter().collect::<Vec<_>>();
        let mut relations = IndexSet::new();
        for descriptor in &descriptors {
            if descriptor.relation().is_empty() {
                return Err(DocumentationError::precondition(
                    "a link descriptor needs a relation",
                ));
            }
            if descriptor.description().is_none_or(str::is_empty) {
                return Err(DocumentationError::precondition(format!(
                    "the link '{}' needs a description",
                    descriptor.relation()
                )));
            }
            if !relations.insert(descriptor.relation()) {
                return Err(DocumentationError::precondition(format!(
                    "the link '{}' is described more than once",
                    descriptor.relation()
                )));
            }
        }
        Ok(Self {
            extractor,
            descriptors,
        })
    }

    fn extractor(&self, context: &SnippetContext<'_>) -> Result<LinkExtractor, DocumentationError> {
        if let Some(extractor) = self.extractor {
            return Ok(extractor);
        }
        let content_type = context.exchange.response_content_type();
        content_type
            .and_then(|it| context.extractors.link_extractor_for(it))
            .ok_or_else(|| DocumentationError::UnsupportedContentType {
                aspect: "links",
                content_type: content_type.map(ToString::to_string),
            })
    }
}

impl Snippet for LinksSnippet {
    fn name(&self) -> &str {
        "links"
    }

    fn render(&self, context: &SnippetContext<'_>) -> Result<String, DocumentationError> {
        let extractor = self.extractor(context)?;
        let actual = extractor.extract_links(context.exchange.response_body())?;
        let reconciled = reconcile_links(&self.descriptors, &actual)?;
        debug!(documented = reconciled.entries().len(), "links reconciled");
        Ok(render_links(&reconciled))
    }
}

/// Documents the schema of a resource described by the response.
#[derive(Debug, Clone)]
pub struct SchemaSnippet {
    extractor: Option<SchemaExtractor>,
    descriptor: SchemaDescriptor,
}

impl SchemaSnippet {
    /// Creates the snippet; without an explicit extractor one is looked up by content type.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::PreconditionError`] when the descriptor has no
    /// resource name.
    pub fn new(
        extractor: Option<SchemaExtractor>,
        descriptor: SchemaDescriptor,
    ) -> Result<Self, DocumentationError> {
        if descriptor.resource_name().is_empty() {
            return Err(DocumentationError::precondition(
                "a schema needs a resource name",
            ));
        }
        Ok(Self {
            extractor,
            descriptor,
        })
    }

    fn extractor(
        &self,
        context: &SnippetContext<'_>,
    ) -> Result<SchemaExtractor, DocumentationError> {
        if let Some(extractor) = self.extractor {
            return Ok(extractor);
        }
        let content_type = context.exchange.response_content_type();
        content_type
            .and_then(|it| context.extractors.schema_extractor_for(it))
            .ok_or_else(|| DocumentationError::UnsupportedContentType {
                aspect: "schema",
                content_type: content_type.map(ToString::to_string),
            })
    }
}

impl Snippet for SchemaSnippet {
    fn name(&self) -> &str {
        "schema"
    }

    fn render(&self, context: &SnippetContext<'_>) -> Result<String, DocumentationError> {
        let extractor = self.extractor(context)?;
        let actual = extractor.extract_schema(context.exchange.response_body())?;
        let schema = reconcile_schema(&self.descriptor, actual);
        render_schema(&schema)
    }
}

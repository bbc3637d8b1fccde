//! Hypermedia links and resource schemas: models, extraction and reconciliation.

mod link;
pub use self::link::{Link, LinkDescriptor, LinkMap, link_with_relation};

mod schema;
pub use self::schema::{SchemaDescriptor, SchemaProperty, schema_for_resource};

mod link_extractor;
pub use self::link_extractor::{ExtractLinksFn, LinkExtractor};

mod schema_extractor;
pub use self::schema_extractor::{ExtractSchemaFn, SchemaExtractor};

mod reconcile;
pub use self::reconcile::{DocumentedLink, ReconciledLinks, reconcile_links, reconcile_schema};

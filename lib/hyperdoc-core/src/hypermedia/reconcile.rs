use indexmap::IndexSet;
use serde::Serialize;
use tracing::warn;

use super::{Link, LinkDescriptor, LinkMap, SchemaDescriptor};
use crate::{DocumentationError, ReconciliationError};

/// A documented relation with every link of the response carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentedLink {
    /// The author's descriptor.
    pub descriptor: LinkDescriptor,
    /// The concrete links found for the relation.
    pub links: Vec<Link>,
}

/// Links of a response matched against their descriptors, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciledLinks {
    entries: Vec<DocumentedLink>,
}

impl ReconciledLinks {
    /// The documented relations in declaration order.
    pub fn entries(&self) -> &[DocumentedLink] {
        &self.entries
    }

    /// Returns `true` if no relation was documented.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Matches declared link descriptors against the links actually present.
///
/// Every present relation must be documented, and every required descriptor must be
/// present. Optional descriptors without a matching relation are dropped.
///
/// Descriptors are keyed by relation: only the first descriptor of a relation counts.
///
/// # Errors
///
/// Returns [`DocumentationError::ReconciliationError`] listing every undocumented and
/// every missing relation; nothing is reconciled in that case.
pub fn reconcile_links(
    declared: &[LinkDescriptor],
    actual: &LinkMap,
) -> Result<ReconciledLinks, DocumentationError> {
    let mut remaining = actual.clone();
    let mut entries = Vec::with_capacity(declared.len());
    let mut missing = Vec::new();
    let mut seen = IndexSet::new();

    for descriptor in declared {
        let relation = descriptor.relation();
        if !seen.insert(relation) {
            continue;
        }
        let found = if relation.is_empty() {
            None
        } else {
            remaining.shift_remove(relation)
        };
        match found {
            Some(links) => entries.push(DocumentedLink {
                descriptor: descriptor.clone(),
                links,
            }),
            None if descriptor.is_optional() => {}
            None => missing.push(relation.to_string()),
        }
    }

    let undocumented = remaining.into_keys().collect::<Vec<_>>();
    if !undocumented.is_empty() || !missing.is_empty() {
        warn!(?undocumented, ?missing, "links do not match their descriptors");
        return Err(ReconciliationError {
            undocumented,
            missing,
        }
        .into());
    }

    Ok(ReconciledLinks { entries })
}

/// Applies the author's schema declaration to an extracted schema.
///
/// The declared resource name is kept; a declared description supersedes the extracted
/// one. Extracted properties pass through unchanged.
pub fn reconcile_schema(declared: &SchemaDescriptor, actual: SchemaDescriptor) -> SchemaDescriptor {
    let (extracted_name, extracted_description, properties) = actual.into_parts();
    let resource_name = if declared.resource_name().is_empty() {
        extracted_name
    } else {
        Some(declared.resource_name().to_string())
    };
    let description = if declared.has_description() {
        Some(declared.description().to_string())
    } else {
        extracted_description
    };
    SchemaDescriptor::new(resource_name, description, properties)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{SchemaProperty, link_with_relation, schema_for_resource};

    fn actual_links(relations: &[&str]) -> LinkMap {
        relations
            .iter()
            .map(|relation| {
                let link = Link::new(*relation, format!("http://localhost:8080/{relation}"));
                (relation.to_string(), vec![link])
            })
            .collect()
    }

    fn reconciliation_error(result: Result<ReconciledLinks, DocumentationError>) -> ReconciliationError {
        match result {
            Err(DocumentationError::ReconciliationError(error)) => error,
            other => panic!("expected a reconciliation error, got {other:?}"),
        }
    }

    #[test]
    fn should_reconcile_in_declaration_order() {
        let declared = [
            link_with_relation("tags").with_description("The tags"),
            link_with_relation("notes").with_description("The notes"),
        ];

        let reconciled =
            reconcile_links(&declared, &actual_links(&["notes", "tags"])).expect("should match");

        let relations = reconciled
            .entries()
            .iter()
            .map(|it| it.descriptor.relation())
            .collect::<Vec<_>>();
        assert_eq!(relations, ["tags", "notes"]);
    }

    #[test]
    fn should_keep_every_link_of_a_relation() {
        let mut actual = actual_links(&["self"]);
        actual.insert(
            "tags".to_string(),
            vec![Link::new("tags", "/notes/1/tags"), Link::new("tags", "/tags")],
        );
        let declared = [
            link_with_relation("self").with_description("This note"),
            link_with_relation("tags").with_description("Its tags"),
        ];

        let reconciled = reconcile_links(&declared, &actual).expect("should match");

        assert_eq!(reconciled.entries()[1].links.len(), 2);
    }

    #[test]
    fn should_fail_on_missing_required_link() {
        let declared = [
            link_with_relation("self").with_description("This note"),
            link_with_relation("tags").with_description("Its tags"),
        ];

        let error = reconciliation_error(reconcile_links(&declared, &actual_links(&["self"])));

        assert_eq!(error.missing, ["tags"]);
        assert!(error.undocumented.is_empty());
    }

    #[test]
    fn should_fail_on_undocumented_link() {
        let declared = [link_with_relation("self").with_description("This note")];

        let error =
            reconciliation_error(reconcile_links(&declared, &actual_links(&["self", "curies"])));

        assert_eq!(error.undocumented, ["curies"]);
        assert!(error.missing.is_empty());
    }

    #[test]
    fn should_report_every_offending_relation() {
        let declared = [
            link_with_relation("alpha").with_description("a"),
            link_with_relation("beta").with_description("b"),
            link_with_relation("self").with_description("s"),
        ];

        let error = reconciliation_error(reconcile_links(
            &declared,
            &actual_links(&["self", "gamma", "delta"]),
        ));

        assert_eq!(error.missing, ["alpha", "beta"]);
        assert_eq!(error.undocumented, ["gamma", "delta"]);
    }

    #[test]
    fn should_tolerate_missing_optional_link() {
        let declared = [
            link_with_relation("self").with_description("This note"),
            link_with_relation("profile")
                .with_description("The profile")
                .optional(),
        ];

        let reconciled =
            reconcile_links(&declared, &actual_links(&["self"])).expect("optional link");

        assert_eq!(reconciled.entries().len(), 1);
        assert_eq!(reconciled.entries()[0].descriptor.relation(), "self");
    }

    #[test]
    fn should_document_present_optional_link() {
        let declared = [link_with_relation("profile")
            .with_description("The profile")
            .optional()];

        let reconciled =
            reconcile_links(&declared, &actual_links(&["profile"])).expect("optional link");

        assert_eq!(reconciled.entries().len(), 1);
    }

    #[test]
    fn should_key_descriptors_by_relation() {
        let declared = [
            link_with_relation("self").with_description("This note"),
            link_with_relation("self").with_description("Again"),
            link_with_relation("tags").with_description("Its tags"),
            link_with_relation("tags").with_description("Its tags, again"),
        ];

        let error = reconciliation_error(reconcile_links(&declared, &actual_links(&["self"])));

        assert_eq!(error.missing, ["tags"]);
        assert!(error.undocumented.is_empty());
    }

    #[test]
    fn should_document_repeated_relation_once() {
        let declared = [
            link_with_relation("self").with_description("This note"),
            link_with_relation("self").with_description("Again"),
        ];

        let reconciled =
            reconcile_links(&declared, &actual_links(&["self"])).expect("should match");

        assert_eq!(reconciled.entries().len(), 1);
        assert_eq!(
            reconciled.entries()[0].descriptor.description(),
            Some("This note")
        );
    }

    #[test]
    fn should_never_match_empty_relation() {
        let declared = [link_with_relation("").with_description("nothing")];

        let error = reconciliation_error(reconcile_links(&declared, &actual_links(&[""])));

        assert_eq!(error.missing, [""]);
        assert_eq!(error.undocumented, [""]);
    }

    #[rstest]
    #[case::nothing_declared_nothing_present(&[], &[])]
    #[case::all_optional_absent(&["profile"], &[])]
    fn should_reconcile_to_nothing(#[case] optional: &[&str], #[case] present: &[&str]) {
        let declared = optional
            .iter()
            .map(|relation| link_with_relation(*relation).with_description("d").optional())
            .collect::<Vec<_>>();

        let reconciled = reconcile_links(&declared, &actual_links(present)).expect("nothing to do");

        assert!(reconciled.is_empty());
    }

    #[test]
    fn should_override_extracted_schema_description() {
        let extracted = SchemaDescriptor::new(
            Some("com.example.notes.Note".to_string()),
            Some("rest.description.note".to_string()),
            vec![SchemaProperty::new("id", "long", None, false)],
        );
        let declared = schema_for_resource("notes").with_description("The Notes resource");

        let reconciled = reconcile_schema(&declared, extracted);

        assert_eq!(reconciled.resource_name(), "notes");
        assert_eq!(reconciled.description(), "The Notes resource");
        assert_eq!(reconciled.properties().len(), 1);
    }

    #[test]
    fn should_keep_extracted_schema_description() {
        let extracted = SchemaDescriptor::new(None, Some("rest.description.note".to_string()), vec![]);

        let reconciled = reconcile_schema(&schema_for_resource("notes"), extracted);

        assert_eq!(reconciled.resource_name(), "notes");
        assert_eq!(reconciled.description(), "rest.description.note");
    }
}

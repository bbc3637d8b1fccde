use std::fmt::{self, Display};

/// Errors that can occur while documenting a captured exchange.
///
/// Every variant is fatal for the documentation step that raised it: nothing is
/// retried and no partial snippet is written.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum DocumentationError {
    /// No extractor is registered for the response content type and none was supplied.
    #[display(
        "No {aspect} extractor has been provided and one is not available for the content type {}",
        content_type.as_deref().unwrap_or("<none>")
    )]
    #[from(skip)]
    UnsupportedContentType {
        /// The documented aspect, `links` or `schema`.
        aspect: &'static str,
        /// The declared `Content-Type` of the response, if any.
        content_type: Option<String>,
    },

    /// The response body is not well-formed for the expected format.
    #[display("Failed to parse response body: {_0}")]
    ParseError(serde_json::Error),

    /// Declared link descriptors do not match the links found in the response.
    #[display("{_0}")]
    ReconciliationError(ReconciliationError),

    /// A descriptor cannot be rendered.
    ///
    /// Occurs when a link descriptor has no relation or description, or a schema
    /// descriptor has no resource name or description.
    #[display("Invalid descriptor: {message}")]
    #[from(skip)]
    PreconditionError {
        /// What is missing.
        message: String,
    },

    /// Writing a snippet failed.
    #[display("Failed to write snippet: {_0}")]
    IoError(std::io::Error),
}

impl DocumentationError {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionError {
            message: message.into(),
        }
    }
}

/// Mismatch between declared link descriptors and the links of a response.
///
/// Both lists are complete, so every descriptor can be fixed in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct ReconciliationError {
    /// Relations present in the response but not documented, in body order.
    pub undocumented: Vec<String>,
    /// Required relations documented but absent from the response, in declaration order.
    pub missing: Vec<String>,
}

impl Display for ReconciliationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.undocumented.is_empty() {
            write!(
                f,
                "Links with the following relations were not documented: {:?}",
                self.undocumented
            )?;
        }
        if !self.missing.is_empty() {
            if !self.undocumented.is_empty() {
                write!(f, ". ")?;
            }
            write!(
                f,
                "Links with the following relations were not found in the response: {:?}",
                self.missing
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<DocumentationError>();
        assert_sync::<DocumentationError>();
    }

    #[test]
    fn should_list_every_offending_relation() {
        let error = ReconciliationError {
            undocumented: vec!["curies".to_string(), "profile".to_string()],
            missing: vec!["tags".to_string()],
        };

        insta::assert_snapshot!(error, @r#"Links with the following relations were not documented: ["curies", "profile"]. Links with the following relations were not found in the response: ["tags"]"#);
    }

    #[test]
    fn should_only_mention_missing_relations() {
        let error = ReconciliationError {
            undocumented: vec![],
            missing: vec!["self".to_string()],
        };

        insta::assert_snapshot!(error, @r#"Links with the following relations were not found in the response: ["self"]"#);
    }

    #[test]
    fn should_describe_unsupported_content_type() {
        let error = DocumentationError::UnsupportedContentType {
            aspect: "links",
            content_type: Some("text/plain".to_string()),
        };
        insta::assert_snapshot!(error, @"No links extractor has been provided and one is not available for the content type text/plain");

        let error = DocumentationError::UnsupportedContentType {
            aspect: "schema",
            content_type: None,
        };
        insta::assert_snapshot!(error, @"No schema extractor has been provided and one is not available for the content type <none>");
    }
}

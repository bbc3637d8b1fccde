use std::fmt::{self, Debug};

use serde_json::{Map, Value};
use tracing::debug;

use super::{Link, LinkMap};
use crate::DocumentationError;

/// Function extracting links from a raw response body.
pub type ExtractLinksFn = fn(&[u8]) -> Result<LinkMap, DocumentationError>;

/// Strategy turning a response body into the links it contains.
///
/// The built-in variants are registered by content type in
/// [`Extractors`](crate::Extractors); [`LinkExtractor::Custom`] lets a caller bring
/// its own hypermedia convention.
#[derive(Clone, Copy)]
pub enum LinkExtractor {
    /// HAL: links live in the top-level `_links` object, one link object or an
    /// array of link objects per relation.
    Hal,
    /// Atom-style JSON: links live in the top-level `links` array as `{rel, href}` objects.
    Atom,
    /// A caller-supplied extraction function.
    Custom(ExtractLinksFn),
}

impl Debug for LinkExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hal => f.write_str("Hal"),
            Self::Atom => f.write_str("Atom"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl LinkExtractor {
    /// Extracts the links of `body`, grouped by relation.
    ///
    /// A body without the reserved links key yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::ParseError`] when the body is not a JSON object.
    pub fn extract_links(&self, body: &[u8]) -> Result<LinkMap, DocumentationError> {
        let links = match self {
            Self::Hal => hal_links(&parse_object(body)?),
            Self::Atom => atom_links(&parse_object(body)?),
            Self::Custom(extract) => extract(body)?,
        };
        debug!(extractor = ?self, relations = links.len(), "links extracted");
        Ok(links)
    }
}

pub(crate) fn parse_object(body: &[u8]) -> Result<Map<String, Value>, DocumentationError> {
    let json = serde_json::from_slice(body)?;
    Ok(json)
}

fn hal_links(json: &Map<String, Value>) -> LinkMap {
    let mut result = LinkMap::new();
    let Some(Value::Object(links)) = json.get("_links") else {
        return result;
    };

    for (relation, value) in links {
        let converted: Vec<Link> = match value {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| hal_link(relation, item))
                .collect(),
            single => hal_link(relation, single).into_iter().collect(),
        };
        result.insert(relation.clone(), converted);
    }
    result
}

fn hal_link(relation: &str, value: &Value) -> Option<Link> {
    let Value::Object(object) = value else {
        return None;
    };
    let Some(Value::String(href)) = object.get("href") else {
        return None;
    };
    let templated = matches!(object.get("templated"), Some(Value::Bool(true)));
    Some(Link::new(relation, href.as_str()).templated(templated))
}

fn atom_links(json: &Map<String, Value>) -> LinkMap {
    let mut result = LinkMap::new();
    let Some(Value::Array(links)) = json.get("links") else {
        return result;
    };

    for item in links {
        let Value::Object(object) = item else {
            continue;
        };
        if let (Some(Value::String(relation)), Some(Value::String(href))) =
            (object.get("rel"), object.get("href"))
        {
            result
                .entry(relation.clone())
                .or_default()
                .push(Link::new(relation.as_str(), href.as_str()));
        }
    }
    result
}

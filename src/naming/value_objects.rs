use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use oxrdf::{BlankNode, NamedNode};
use thiserror::Error;

/// Value object ensuring that supplied text is a usable resource identifier.
///
/// Accepts absolute IRIs and blank node identifiers (`_:label`). Blank nodes
/// are admitted because RDF parsers mint them for unnamed resources and those
/// resources still need a page title downstream.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uri {
    value: String,
}

impl Uri {
    /// Validates and constructs a new [`Uri`] value object.
    ///
    /// The constructor rejects malformed identifiers so that every page
    /// record carries canonical equivalent URIs.
    pub fn new(value: impl Into<String>) -> Result<Self, UriError> {
        let value = value.into();
        if let Some(label) = value.strip_prefix("_:") {
            BlankNode::new(label).map_err(|_| UriError::Invalid {
                value: value.clone(),
            })?;
        } else {
            NamedNode::new(value.as_str()).map_err(|_| UriError::Invalid {
                value: value.clone(),
            })?;
        }
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns whether this identifier names a parser-minted blank node.
    #[must_use]
    pub fn is_blank_node(&self) -> bool {
        self.value.starts_with("_:")
    }
}

impl Display for Uri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Uri {
    type Error = UriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Errors produced when validating a [`Uri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UriError {
    /// The provided text is neither an absolute IRI nor a blank node id.
    #[error("invalid URI: {value}")]
    Invalid { value: String },
}

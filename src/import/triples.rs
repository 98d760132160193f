use std::collections::BTreeMap;

use crate::naming::Uri;

/// Object position of a triple: either another resource or a literal value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TripleObject {
    /// The object names a resource that gets a page of its own.
    Resource(Uri),
    /// The object is a literal carried into the page record unchanged.
    Literal(String),
}

impl TripleObject {
    /// Returns the textual form of the object value.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Resource(uri) => uri.as_str(),
            Self::Literal(text) => text,
        }
    }
}

/// One subject-predicate-object statement from the upstream parser.
///
/// Triples are assumed well formed; validation happens before the stream
/// reaches this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    pub subject: Uri,
    pub predicate: Uri,
    pub object: TripleObject,
}

impl Triple {
    /// Creates a new triple.
    #[must_use]
    pub fn new(subject: Uri, predicate: Uri, object: TripleObject) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// Read-only snapshot of the triple stream indexed by subject and predicate.
///
/// Built once per import batch, before resolution begins; the naming-property
/// strategy is its only consumer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceIndex {
    subjects: BTreeMap<Uri, BTreeMap<Uri, Vec<String>>>,
}

impl ResourceIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a triple stream, preserving object order per
    /// subject and predicate.
    #[must_use]
    pub fn from_triples(triples: &[Triple]) -> Self {
        let mut index = Self::new();
        for triple in triples {
            index.insert(
                triple.subject.clone(),
                triple.predicate.clone(),
                triple.object.as_text().to_owned(),
            );
        }
        index
    }

    /// Appends an object value under the given subject and predicate.
    pub fn insert(&mut self, subject: Uri, predicate: Uri, value: impl Into<String>) {
        self.subjects
            .entry(subject)
            .or_default()
            .entry(predicate)
            .or_default()
            .push(value.into());
    }

    /// Returns the first object value recorded for `subject` under the
    /// predicate with the given URI text, if any.
    #[must_use]
    pub fn first_value(&self, subject: &Uri, predicate: &str) -> Option<&str> {
        let predicates = self.subjects.get(subject)?;
        predicates
            .iter()
            .find(|(candidate, _)| candidate.as_str() == predicate)
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }
}

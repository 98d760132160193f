use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ImportSettings;
use crate::naming::{
    LookupHandle, PrefixTable, PropertyTitleResolver, ResolveError, TitleResolver, Uri,
};

use super::triples::{Triple, TripleObject};
use super::ResourceIndex;

/// Namespace marker the external writer files property pages under.
pub const PROPERTY_NAMESPACE: &str = "Property:";

/// One outgoing statement of a page, with both ends already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    /// Resolved title of the predicate, without the property namespace.
    pub predicate_title: String,
    /// Resolved title of a resource object, or the literal value verbatim.
    pub object_title: String,
}

/// Aggregated per-title bundle handed to the external writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRecord {
    /// The page title the record is keyed by.
    pub title: String,
    /// Every URI observed to denote this page, in insertion order.
    /// Duplicates are kept; deduplication belongs to the writer.
    pub equivalent_uris: Vec<Uri>,
    /// Outgoing facts in stream order, duplicates kept.
    pub facts: Vec<Fact>,
}

impl PageRecord {
    fn new(title: String) -> Self {
        Self {
            title,
            equivalent_uris: Vec::new(),
            facts: Vec::new(),
        }
    }
}

/// Output of one aggregation run; only valid once the whole input stream has
/// been processed, since later triples may still extend earlier records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregatedPages {
    /// Regular pages keyed by resolved title.
    pub pages: BTreeMap<String, PageRecord>,
    /// Property pages keyed by their `Property:`-prefixed title.
    pub property_pages: BTreeMap<String, PageRecord>,
}

/// Merges a triple stream into page records keyed by resolved title.
pub struct PageAggregator<'a> {
    resolver: TitleResolver<'a>,
    property_resolver: PropertyTitleResolver<'a>,
}

impl<'a> PageAggregator<'a> {
    /// Wires an aggregator for one import batch.
    pub fn new(
        settings: &'a ImportSettings,
        lookup: &'a LookupHandle,
        index: &'a ResourceIndex,
        source_prefixes: &PrefixTable,
    ) -> Self {
        Self {
            resolver: TitleResolver::new(settings, lookup, index, source_prefixes),
            property_resolver: PropertyTitleResolver::new(settings, lookup, index, source_prefixes),
        }
    }

    /// Resolves a subject or object URI to a page title.
    pub fn resolve_title(&self, uri: &Uri) -> Result<String, ResolveError> {
        self.resolver.resolve(uri)
    }

    /// Resolves a predicate URI to a property title.
    pub fn resolve_property_title(&self, uri: &Uri) -> Result<String, ResolveError> {
        self.property_resolver.resolve(uri)
    }

    /// Groups the triple stream into page and property-page records.
    ///
    /// For every triple the subject record collects the subject URI and one
    /// fact, the predicate gets a property page, and a resource object gets
    /// a page of its own even when it never appears as a subject. A
    /// [`ResolveError`] for any URI aborts the run; skipping or substituting
    /// placeholders is the caller's policy decision.
    pub fn aggregate(&self, triples: &[Triple]) -> Result<AggregatedPages, ResolveError> {
        let mut result = AggregatedPages::default();

        for triple in triples {
            let subject_title = self.resolver.resolve(&triple.subject)?;
            let property_title = self.property_resolver.resolve(&triple.predicate)?;
            let property_page_title = format!("{PROPERTY_NAMESPACE}{property_title}");
            let object_title = match &triple.object {
                TripleObject::Resource(object) => self.resolver.resolve(object)?,
                TripleObject::Literal(text) => text.clone(),
            };

            merge_into(
                &mut result.pages,
                subject_title,
                triple.subject.clone(),
                Some(Fact {
                    predicate_title: property_title,
                    object_title: object_title.clone(),
                }),
            );
            merge_into(
                &mut result.property_pages,
                property_page_title,
                triple.predicate.clone(),
                None,
            );
            if let TripleObject::Resource(object) = &triple.object {
                merge_into(&mut result.pages, object_title, object.clone(), None);
            }
        }

        debug!(
            pages = result.pages.len(),
            property_pages = result.property_pages.len(),
            triples = triples.len(),
            "aggregated triple stream"
        );
        Ok(result)
    }
}

fn merge_into(
    records: &mut BTreeMap<String, PageRecord>,
    title: String,
    equivalent_uri: Uri,
    fact: Option<Fact>,
) {
    let record = records
        .entry(title)
        .or_insert_with_key(|title| PageRecord::new(title.clone()));
    record.equivalent_uris.push(equivalent_uri);
    if let Some(fact) = fact {
        record.facts.push(fact);
    }
}

#[cfg(test)]
mod tests {
    use super::{PageAggregator, PROPERTY_NAMESPACE};
    use crate::config::ImportSettings;
    use crate::import::{ResourceIndex, Triple, TripleObject};
    use crate::naming::{InMemoryTitleLookup, PrefixTable, Uri};

    fn uri(text: &str) -> Uri {
        Uri::new(text).expect("valid uri")
    }

    fn foaf_prefixes() -> PrefixTable {
        PrefixTable::from_iter([
            ("http://xmlns.com/foaf/0.1/", "foaf"),
            ("http://example.org/people/", "people"),
        ])
    }

    #[test]
    fn groups_triples_into_subject_property_and_object_pages() {
        let settings = ImportSettings::default();
        let lookup = InMemoryTitleLookup::new();
        let triples = vec![Triple::new(
            uri("http://example.org/people/alice"),
            uri("http://xmlns.com/foaf/0.1/knows"),
            TripleObject::Resource(uri("http://example.org/people/bob")),
        )];
        let index = ResourceIndex::from_triples(&triples);
        let prefixes = foaf_prefixes();
        let aggregator = PageAggregator::new(&settings, &lookup, &index, &prefixes);

        let result = aggregator.aggregate(&triples).expect("aggregation");

        let alice = result.pages.get("people:alice").expect("subject page");
        assert_eq!(alice.equivalent_uris, vec![uri("http://example.org/people/alice")]);
        assert_eq!(alice.facts.len(), 1);
        assert_eq!(alice.facts[0].predicate_title, "foaf:knows");
        assert_eq!(alice.facts[0].object_title, "people:bob");

        let bob = result.pages.get("people:bob").expect("object page");
        assert_eq!(bob.equivalent_uris, vec![uri("http://example.org/people/bob")]);
        assert!(bob.facts.is_empty());

        let knows = result
            .property_pages
            .get(&format!("{PROPERTY_NAMESPACE}foaf:knows"))
            .expect("property page");
        assert_eq!(knows.equivalent_uris, vec![uri("http://xmlns.com/foaf/0.1/knows")]);
        assert!(knows.facts.is_empty());
    }

    #[test]
    fn literal_objects_pass_through_without_a_page() {
        let settings = ImportSettings::default();
        let lookup = InMemoryTitleLookup::new();
        let triples = vec![Triple::new(
            uri("http://example.org/people/alice"),
            uri("http://xmlns.com/foaf/0.1/age"),
            TripleObject::Literal("42".into()),
        )];
        let index = ResourceIndex::new();
        let prefixes = foaf_prefixes();
        let aggregator = PageAggregator::new(&settings, &lookup, &index, &prefixes);

        let result = aggregator.aggregate(&triples).expect("aggregation");

        let alice = result.pages.get("people:alice").expect("subject page");
        assert_eq!(alice.facts[0].object_title, "42");
        // The literal gets no page of its own.
        assert_eq!(result.pages.len(), 1);
    }

    #[test]
    fn duplicate_triples_accumulate_without_deduplication() {
        let settings = ImportSettings::default();
        let lookup = InMemoryTitleLookup::new();
        let triple = Triple::new(
            uri("http://example.org/people/alice"),
            uri("http://xmlns.com/foaf/0.1/knows"),
            TripleObject::Resource(uri("http://example.org/people/bob")),
        );
        let triples = vec![triple.clone(), triple];
        let index = ResourceIndex::new();
        let prefixes = foaf_prefixes();
        let aggregator = PageAggregator::new(&settings, &lookup, &index, &prefixes);

        let result = aggregator.aggregate(&triples).expect("aggregation");

        let alice = result.pages.get("people:alice").expect("subject page");
        assert_eq!(alice.equivalent_uris.len(), 2);
        assert_eq!(alice.equivalent_uris[0], alice.equivalent_uris[1]);
        assert_eq!(alice.facts.len(), 2);
        assert_eq!(alice.facts[0], alice.facts[1]);

        let bob = result.pages.get("people:bob").expect("object page");
        assert_eq!(bob.equivalent_uris.len(), 2);
    }

    #[test]
    fn every_resource_uri_keys_exactly_one_record() {
        let settings = ImportSettings::default();
        let lookup = InMemoryTitleLookup::new();
        let triples = vec![
            Triple::new(
                uri("http://example.org/people/alice"),
                uri("http://xmlns.com/foaf/0.1/knows"),
                TripleObject::Resource(uri("http://example.org/people/bob")),
            ),
            Triple::new(
                uri("http://example.org/people/bob"),
                uri("http://xmlns.com/foaf/0.1/knows"),
                TripleObject::Resource(uri("http://example.org/people/carol")),
            ),
        ];
        let index = ResourceIndex::new();
        let prefixes = foaf_prefixes();
        let aggregator = PageAggregator::new(&settings, &lookup, &index, &prefixes);

        let result = aggregator.aggregate(&triples).expect("aggregation");

        assert_eq!(result.pages.len(), 3);
        // Bob was both an object and a subject: one record, merged data.
        let bob = result.pages.get("people:bob").expect("merged page");
        assert_eq!(bob.equivalent_uris.len(), 2);
        assert_eq!(bob.facts.len(), 1);
    }
}

//! Resolves RDF URIs into stable, human-readable wiki page titles and groups
//! triple streams into per-page records ready for a document writer.
//!
//! URIs make poor page identifiers: they are long, full of reserved
//! characters, and unreadable. This crate derives a title for every URI in
//! an import batch through a chain of increasingly mechanical strategies —
//! previously committed titles first, then naming properties such as
//! `rdfs:label`, then namespace abbreviation, then the raw local part — and
//! merges triples sharing a subject into one [`import::PageRecord`] carrying
//! all equivalent URIs and outgoing facts.
//!
//! Parsing RDF serializations, talking to the wiki backend and writing the
//! records back are external collaborators; the only seam into stored state
//! is the [`naming::TitleLookup`] trait.
//!
//! ```
//! use wikimill::config::ImportSettings;
//! use wikimill::import::{PageAggregator, ResourceIndex, Triple, TripleObject};
//! use wikimill::naming::{InMemoryTitleLookup, PrefixTable, Uri};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ImportSettings::default();
//! let lookup = InMemoryTitleLookup::new();
//! let triples = vec![Triple::new(
//!     Uri::new("http://example.org/people/alice")?,
//!     Uri::new("http://xmlns.com/foaf/0.1/name")?,
//!     TripleObject::Literal("Alice".into()),
//! )];
//! let index = ResourceIndex::from_triples(&triples);
//! let prefixes = PrefixTable::from_iter([("http://example.org/people/", "people")]);
//!
//! let aggregator = PageAggregator::new(&settings, &lookup, &index, &prefixes);
//! let result = aggregator.aggregate(&triples)?;
//! // The foaf:name value names the subject's page.
//! assert!(result.pages.contains_key("Alice"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod import;
pub mod naming;

pub use config::{ImportSettings, SettingsError};
pub use import::{AggregatedPages, Fact, PageAggregator, PageRecord};
pub use naming::{ResolveError, TitleLookup, Uri};

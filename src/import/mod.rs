//! Triple-stream aggregation into per-page records.
//!
//! Consumes the parsed triple stream together with the resolvers from
//! [`crate::naming`] and produces the page and property-page maps handed to
//! the external writer.

pub mod aggregate;
pub mod triples;

pub use aggregate::{AggregatedPages, Fact, PageAggregator, PageRecord, PROPERTY_NAMESPACE};
pub use triples::{ResourceIndex, Triple, TripleObject};

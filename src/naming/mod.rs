//! URI-to-page-title resolution.
//!
//! The module owns the pure naming primitives (splitting a URI into base and
//! local part, shortening it against a namespace-prefix table) and the
//! strategy chain that combines them with the [`TitleLookup`] collaborator
//! into one stable title per URI.

pub mod abbreviate;
pub mod lookup;
pub mod resolver;
pub mod split;
pub mod value_objects;

pub use abbreviate::PrefixTable;
pub use lookup::{InMemoryTitleLookup, TitleLookup};
pub use resolver::{LookupHandle, PropertyTitleResolver, ResolveError, TitleResolver};
pub use split::{SplitUri, UriSplitter};
pub use value_objects::{Uri, UriError};

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::ImportSettings;
use crate::import::ResourceIndex;

use super::abbreviate::PrefixTable;
use super::lookup::TitleLookup;
use super::split::UriSplitter;
use super::value_objects::Uri;

/// Type alias simplifying lookup trait object usage inside the resolvers.
pub type LookupHandle = dyn TitleLookup + Send + Sync;

/// Errors raised when a URI cannot be given a page title.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Every resolution strategy failed for this URI.
    ///
    /// Terminal for this one URI only; the caller decides whether to abort
    /// the batch, skip the triple or substitute a placeholder.
    #[error("no page title could be derived for `{uri}`")]
    TitleNotFound { uri: Uri },
}

/// Characters MediaWiki rejects in page titles.
fn strip_invalid_chars(text: &str) -> String {
    text.replace(['[', ']'], "")
}

/// Derives a stable, human-readable page title for a URI.
///
/// Strategies are tried in a fixed order, first success wins:
/// 1. a title committed by an earlier import batch (overrides everything);
/// 2. the value of a configured naming property attached to the URI;
/// 3. namespace abbreviation against the merged prefix table;
/// 4. the local part of the URI.
///
/// Strategy-internal misses are not errors; only exhausting the whole chain
/// surfaces as [`ResolveError::TitleNotFound`].
pub struct TitleResolver<'a> {
    lookup: &'a LookupHandle,
    index: &'a ResourceIndex,
    naming_properties: &'a [String],
    prefixes: PrefixTable,
    splitter: UriSplitter,
}

impl<'a> TitleResolver<'a> {
    /// Wires a resolver for one import batch.
    ///
    /// The source document's prefix declarations are merged with the
    /// configured aliases (configured entries win), and the splitter picks up
    /// any extra unsplittable namespaces from the settings.
    pub fn new(
        settings: &'a ImportSettings,
        lookup: &'a LookupHandle,
        index: &'a ResourceIndex,
        source_prefixes: &PrefixTable,
    ) -> Self {
        let mut prefixes = source_prefixes.clone();
        prefixes.merge(&settings.extra_base_uris);
        let splitter =
            UriSplitter::with_extra_namespaces(settings.unsplittable_namespaces.iter().cloned());
        Self {
            lookup,
            index,
            naming_properties: &settings.naming_properties,
            prefixes,
            splitter,
        }
    }

    /// Resolves `uri` to a page title.
    pub fn resolve(&self, uri: &Uri) -> Result<String, ResolveError> {
        // Strategies in priority order; each returns `Some(title)` on
        // success and `None` when it does not apply.
        let strategies: [(&str, fn(&Self, &Uri) -> Option<String>); 4] = [
            ("existing_title", Self::existing_title),
            ("naming_property", Self::naming_property),
            ("namespace_abbreviation", Self::namespace_abbreviation),
            ("local_part", Self::local_part),
        ];
        for (name, strategy) in strategies {
            if let Some(title) = strategy(self, uri) {
                debug!(uri = %uri, strategy = name, title = %title, "resolved page title");
                return Ok(title);
            }
            trace!(uri = %uri, strategy = name, "strategy not applicable");
        }
        Err(ResolveError::TitleNotFound { uri: uri.clone() })
    }

    fn existing_title(&self, uri: &Uri) -> Option<String> {
        self.lookup
            .existing_title(uri, false)
            .filter(|title| !title.is_empty())
    }

    fn naming_property(&self, uri: &Uri) -> Option<String> {
        let value = self
            .naming_properties
            .iter()
            .find_map(|predicate| self.index.first_value(uri, predicate))?;
        let title = strip_invalid_chars(value);
        (!title.is_empty()).then_some(title)
    }

    fn namespace_abbreviation(&self, uri: &Uri) -> Option<String> {
        let shortened = self.prefixes.abbreviate(uri.as_str(), &self.splitter);
        // An "abbreviation" that reproduces the URI unchanged has not
        // shortened anything and cannot serve as a page title.
        (!shortened.is_empty() && shortened != uri.as_str()).then_some(shortened)
    }

    fn local_part(&self, uri: &Uri) -> Option<String> {
        let parts = self.splitter.split(uri.as_str());
        (!parts.local.is_empty()).then_some(parts.local)
    }
}

/// Specialization of [`TitleResolver`] for predicate URIs.
///
/// Predicates get their own existing-title lookup because the external
/// writer files property titles under a separate namespace; everything past
/// that delegates to the full strategy chain. Returned titles always have
/// invalid characters stripped.
pub struct PropertyTitleResolver<'a> {
    lookup: &'a LookupHandle,
    inner: TitleResolver<'a>,
}

impl<'a> PropertyTitleResolver<'a> {
    /// Wires a property resolver for one import batch.
    pub fn new(
        settings: &'a ImportSettings,
        lookup: &'a LookupHandle,
        index: &'a ResourceIndex,
        source_prefixes: &PrefixTable,
    ) -> Self {
        Self {
            lookup,
            inner: TitleResolver::new(settings, lookup, index, source_prefixes),
        }
    }

    /// Resolves a predicate URI to a property title.
    pub fn resolve(&self, uri: &Uri) -> Result<String, ResolveError> {
        let title = match self
            .lookup
            .existing_title(uri, true)
            .filter(|title| !title.is_empty())
        {
            Some(existing) => {
                debug!(uri = %uri, title = %existing, "resolved property title from lookup");
                existing
            }
            None => self.inner.resolve(uri)?,
        };
        Ok(strip_invalid_chars(&title))
    }
}

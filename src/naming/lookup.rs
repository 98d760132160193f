use std::collections::BTreeMap;

use super::value_objects::Uri;

/// Contract for the store of titles committed by earlier import batches.
///
/// This is the only source of cross-import stability: once a URI has been
/// recorded here it must resolve to the same title forever, overriding every
/// other resolution strategy. Regular pages and property pages are looked up
/// independently because the external writer conventionally files property
/// titles under their own namespace.
///
/// Implementations may perform I/O but are called synchronously; the lookup
/// state must stay frozen for the duration of one aggregation run.
pub trait TitleLookup {
    /// Returns the previously assigned title for `uri`, if any.
    fn existing_title(&self, uri: &Uri, is_property: bool) -> Option<String>;
}

/// In-memory [`TitleLookup`] adapter, also the stub of choice in tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryTitleLookup {
    pages: BTreeMap<Uri, String>,
    properties: BTreeMap<Uri, String>,
}

impl InMemoryTitleLookup {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed page title for `uri`.
    pub fn record(&mut self, uri: Uri, title: impl Into<String>) {
        self.pages.insert(uri, title.into());
    }

    /// Records a committed property title for `uri`.
    pub fn record_property(&mut self, uri: Uri, title: impl Into<String>) {
        self.properties.insert(uri, title.into());
    }
}

impl TitleLookup for InMemoryTitleLookup {
    fn existing_title(&self, uri: &Uri, is_property: bool) -> Option<String> {
        let titles = if is_property {
            &self.properties
        } else {
            &self.pages
        };
        titles.get(uri).cloned()
    }
}

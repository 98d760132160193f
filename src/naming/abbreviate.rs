use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::split::UriSplitter;

/// Namespace-to-alias table used to shorten URIs into `alias:local` form.
///
/// Tables arrive from two places: the prefix declarations of the source RDF
/// document, and operator-configured aliases merged on top (configured
/// entries override same-namespace keys).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixTable {
    entries: BTreeMap<String, String>,
}

impl PrefixTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an alias for a namespace, replacing any previous entry.
    pub fn insert(&mut self, namespace: impl Into<String>, alias: impl Into<String>) {
        self.entries.insert(namespace.into(), alias.into());
    }

    /// Merges `other` into this table; entries of `other` win on conflict.
    pub fn merge(&mut self, other: &PrefixTable) {
        for (namespace, alias) in &other.entries {
            self.entries.insert(namespace.clone(), alias.clone());
        }
    }

    /// Returns whether no namespace is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shortens `uri` into a readable identifier fragment.
    ///
    /// When several registered namespaces prefix the URI, the longest one
    /// wins. The original ARC2-era behavior let map iteration order decide;
    /// longest-prefix-wins is the deterministic replacement.
    ///
    /// Without a matching namespace the URI is split into `(base, local)`
    /// and composed back with a fixed branch order encoding fallback
    /// precedence: generated blank-node placeholders are renamed, raw
    /// `http(s)` bases are dropped in favor of the local part, and a base
    /// already ending in `:` is not given a second one.
    #[must_use]
    pub fn abbreviate(&self, uri: &str, splitter: &UriSplitter) -> String {
        let mut base = String::new();
        let mut local = String::new();

        let matched = self
            .entries
            .iter()
            .filter(|(namespace, _)| uri.starts_with(namespace.as_str()))
            .max_by_key(|(namespace, _)| namespace.len());
        if let Some((namespace, alias)) = matched {
            base = alias.clone();
            local = uri[namespace.len()..].to_owned();
        }

        if base.is_empty() && local.is_empty() {
            let parts = splitter.split(uri);
            base = parts.base;
            local = parts.local;
        }

        if local.is_empty() {
            base
        } else if base.starts_with('_') {
            // Rename the parser's generated placeholder so the page title
            // signals that the resource arrived without a real name.
            local.replace("arc", "untitled")
        } else if base.starts_with("http://") || base.starts_with("https://") {
            local
        } else if base.ends_with(':') {
            format!("{base}{local}")
        } else if base.is_empty() {
            local
        } else {
            format!("{base}:{local}")
        }
    }
}

impl<N, A> FromIterator<(N, A)> for PrefixTable
where
    N: Into<String>,
    A: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, A)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(namespace, alias)| (namespace.into(), alias.into()))
                .collect(),
        }
    }
}

/// Namespaces that must never be split mechanically: their local parts would
/// otherwise swallow a `/` or `#` that belongs to the namespace itself.
const UNSPLITTABLE_NAMESPACES: [&str; 3] = [
    "http://www.w3.org/XML/1998/namespace",
    "http://www.w3.org/2005/Atom",
    "http://www.w3.org/1999/xhtml",
];

/// Outcome of splitting a URI into its namespace and local fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitUri {
    /// Namespace part, including a trailing `#`, `:` or `/` when the split
    /// happened on one of those characters.
    pub base: String,
    /// Local fragment; empty when no split point exists.
    pub local: String,
}

/// Splits URIs into a `(base, local)` pair using a fixed rule set.
///
/// A pure function of its input and the configured special-case table; two
/// splitters built from the same namespaces always agree.
#[derive(Clone, Debug, Default)]
pub struct UriSplitter {
    extra_namespaces: Vec<String>,
}

impl UriSplitter {
    /// Creates a splitter with the built-in special-case table only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the special-case table with caller-supplied namespaces.
    #[must_use]
    pub fn with_extra_namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra_namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `uri` into its base and local part.
    ///
    /// Rules are tried in order, first match wins:
    /// 1. special-case namespaces, kept verbatim when the remainder is
    ///    non-empty and does not start with `/` or `#`;
    /// 2. the last `#`;
    /// 3. the last `:` whose remainder contains no `/`, covering `urn:`-style
    ///    identifiers;
    /// 4. the last `/`;
    /// 5. no split point: the whole URI is the base, the local part is empty.
    #[must_use]
    pub fn split(&self, uri: &str) -> SplitUri {
        for namespace in self.special_namespaces() {
            if let Some(local) = uri.strip_prefix(namespace) {
                if !local.is_empty() && !local.starts_with('/') && !local.starts_with('#') {
                    return SplitUri {
                        base: namespace.to_owned(),
                        local: local.to_owned(),
                    };
                }
            }
        }

        if let Some(at) = uri.rfind('#') {
            let local = &uri[at + 1..];
            if !local.is_empty() {
                return SplitUri {
                    base: uri[..=at].to_owned(),
                    local: local.to_owned(),
                };
            }
        }

        if let Some(at) = uri.rfind(':') {
            let local = &uri[at + 1..];
            if !local.is_empty() && !local.contains('/') {
                return SplitUri {
                    base: uri[..=at].to_owned(),
                    local: local.to_owned(),
                };
            }
        }

        if let Some(at) = uri.rfind('/') {
            let local = &uri[at + 1..];
            if !local.is_empty() {
                return SplitUri {
                    base: uri[..=at].to_owned(),
                    local: local.to_owned(),
                };
            }
        }

        SplitUri {
            base: uri.to_owned(),
            local: String::new(),
        }
    }

    fn special_namespaces(&self) -> impl Iterator<Item = &str> {
        UNSPLITTABLE_NAMESPACES
            .iter()
            .copied()
            .chain(self.extra_namespaces.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::UriSplitter;

    #[rstest]
    #[case("http://example.org/ns#Thing", "http://example.org/ns#", "Thing")]
    #[case("http://example.org/people/alice", "http://example.org/people/", "alice")]
    #[case("urn:isbn:0451450523", "urn:isbn:", "0451450523")]
    #[case("_:arc42b1", "_:", "arc42b1")]
    #[case("http://example.org/a#b#c", "http://example.org/a#b#", "c")]
    fn splits_on_last_separator(#[case] uri: &str, #[case] base: &str, #[case] local: &str) {
        let parts = UriSplitter::new().split(uri);
        assert_eq!(parts.base, base);
        assert_eq!(parts.local, local);
    }

    #[test]
    fn special_namespace_is_kept_verbatim() {
        let parts = UriSplitter::new().split("http://www.w3.org/XML/1998/namespacebase");
        assert_eq!(parts.base, "http://www.w3.org/XML/1998/namespace");
        assert_eq!(parts.local, "base");
    }

    #[test]
    fn special_namespace_guard_rejects_empty_local_part() {
        // The bare XHTML namespace matches the special-case table but the
        // remainder is empty, so the guard rejects it and the generic rules
        // split on the last slash instead.
        let parts = UriSplitter::new().split("http://www.w3.org/1999/xhtml");
        assert_eq!(parts.base, "http://www.w3.org/1999/");
        assert_eq!(parts.local, "xhtml");
    }

    #[test]
    fn special_namespace_guard_falls_through_on_slash() {
        let parts = UriSplitter::new().split("http://www.w3.org/1999/xhtml/strict");
        assert_eq!(parts.base, "http://www.w3.org/1999/xhtml/");
        assert_eq!(parts.local, "strict");
    }

    #[test]
    fn caller_supplied_namespaces_join_the_special_table() {
        let splitter = UriSplitter::with_extra_namespaces(["http://example.org/onto/v1.0"]);
        let parts = splitter.split("http://example.org/onto/v1.0-draft");
        assert_eq!(parts.base, "http://example.org/onto/v1.0");
        assert_eq!(parts.local, "-draft");
    }

    #[test]
    fn trailing_hash_falls_through_to_slash_rule() {
        let parts = UriSplitter::new().split("http://example.org/ns#");
        assert_eq!(parts.base, "http://example.org/");
        assert_eq!(parts.local, "ns#");
    }

    #[test]
    fn colon_rule_skips_remainders_containing_slashes() {
        let parts = UriSplitter::new().split("http://example.org/a/b");
        assert_eq!(parts.base, "http://example.org/a/");
        assert_eq!(parts.local, "b");
    }

    #[test]
    fn bare_namespace_has_no_split_point() {
        let parts = UriSplitter::new().split("http://example.org/");
        assert_eq!(parts.base, "http://example.org/");
        assert_eq!(parts.local, "");
    }
}

//! Operator-facing import settings.
//!
//! Everything the resolution engine can be tuned with lives in
//! [`ImportSettings`]; the defaults reproduce the stock behavior without any
//! configuration file. Settings are passed by reference into the resolver
//! constructors, so concurrent batches with different settings cannot
//! interfere.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::naming::PrefixTable;

/// Configuration consumed by the title resolution engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Predicates whose object value names its subject, in priority order.
    pub naming_properties: Vec<String>,
    /// Namespace aliases merged on top of the source document's prefix
    /// declarations; these win on conflict.
    pub extra_base_uris: PrefixTable,
    /// Additional namespaces the splitter must never split mechanically.
    pub unsplittable_namespaces: Vec<String>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            naming_properties: vec![
                "http://semantic-mediawiki.org/swivt/1.0#page".to_owned(),
                "http://www.w3.org/2000/01/rdf-schema#label".to_owned(),
                "http://purl.org/dc/elements/1.1/title".to_owned(),
                "http://www.w3.org/2004/02/skos/core#preferredLabel".to_owned(),
                "http://xmlns.com/foaf/0.1/name".to_owned(),
            ],
            extra_base_uris: PrefixTable::new(),
            unsplittable_namespaces: Vec::new(),
        }
    }
}

impl ImportSettings {
    /// Parses settings from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Loads settings from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

/// Errors raised while loading [`ImportSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading the settings file failed.
    #[error("failed to read settings file `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings document was not valid YAML for this schema.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}

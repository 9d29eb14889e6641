// src/domain/sites.rs

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

const RENTAL_SEGMENT: &str = "/rental";

const DEFAULT_SITES: &[(&str, &str)] = &[
    ("https://ygl.is/leigha-emery-1", "Leigha"),
    ("https://ygl.is/99334", "Denis"),
    ("https://ygl.is/99333", "Nick"),
    ("https://ygl.is/99331", "Orysya"),
    ("https://ygl.is/listch", "Litsch"),
    ("https://ygl.is/chris-liu", "Chris"),
    ("https://ygl.is/keith-rose", "Keith"),
    ("https://ygl.is/92567", "Michael"),
    ("https://ygl.is/Alexis-Velez-1", "Alexis"),
];

#[derive(Debug, thiserror::Error)]
pub enum SitesError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sites document must be an object")]
    NotAnObject,
    #[error("site '{0}' must map to a string")]
    NameNotString(String),
}

/// Maps a source URL prefix (the part of a listing URL before `/rental`)
/// to the display name shown on its link.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDirectory {
    sites: Vec<(String, String)>,
}

impl Default for SiteDirectory {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_SITES.iter().copied())
    }
}

impl SiteDirectory {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            sites: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a `sites.json` document: an object of prefix -> name.
    pub fn from_json(text: &str) -> Result<Self, SitesError> {
        let value: Value = serde_json::from_str(text)?;
        let object = value.as_object().ok_or(SitesError::NotAnObject)?;

        let mut sites = Vec::with_capacity(object.len());
        for (prefix, name) in object {
            let name = name
                .as_str()
                .ok_or_else(|| SitesError::NameNotString(prefix.clone()))?;
            sites.push((prefix.clone(), name.to_string()));
        }

        Ok(Self { sites })
    }

    /// Everything before the first `/rental`, or the whole URL.
    pub fn lookup_key(url: &str) -> &str {
        url.split(RENTAL_SEGMENT).next().unwrap_or(url)
    }

    /// Display name for a listing URL; empty when the site is unknown.
    pub fn resolve(&self, url: &str) -> &str {
        let key = Self::lookup_key(url);
        self.sites
            .iter()
            .find(|(prefix, _)| prefix == key)
            .map(|(_, name)| name.as_str())
            .unwrap_or("")
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|(prefix, _)| prefix.as_str())
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }
}

impl Serialize for SiteDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sites.len()))?;
        for (prefix, name) in &self.sites {
            map.serialize_entry(prefix, name)?;
        }
        map.end()
    }
}

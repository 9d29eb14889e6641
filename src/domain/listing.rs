// src/domain/listing.rs

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Price or bed/bath count as the document gave it. Numbers are the norm;
/// anything else (`"1,200"`, `"Studio"`) is kept as text and shown verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => Amount::Number(f),
                None => Amount::Text(n.to_string()),
            },
            Value::String(s) => Amount::Text(s.clone()),
            Value::Null => Amount::default(),
            other => Amount::Text(other.to_string()),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Text(String::new())
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Number(n)
    }
}

/// Whole numbers without a fraction (`2`), everything else as written (`1.5`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => f.write_str(&format_number(*n)),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Number(n) => serializer.serialize_f64(*n),
            Amount::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|v| Amount::from_value(&v))
    }
}

/// One rental listing as it appears in the listings document.
///
/// Every field defaults when absent; the rest mirror what the scrape store
/// keeps.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default)]
    pub refs: Vec<String>,
    #[serde(default)]
    pub price: Amount,
    #[serde(default)]
    pub beds: Amount,
    #[serde(default)]
    pub baths: Amount,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_dismissed: bool,
}

impl Listing {
    pub fn new(price: f64, beds: f64, baths: f64, refs: Vec<String>) -> Self {
        Self {
            refs,
            price: price.into(),
            beds: beds.into(),
            baths: baths.into(),
            date: None,
            notes: String::new(),
            is_favorite: false,
            is_dismissed: false,
        }
    }

    /// Field-by-field read of an entry that did not deserialize as a whole.
    /// Whatever is recognisable is kept; the rest defaults.
    pub fn from_loose(entry: &Value) -> Self {
        static NULL: Value = Value::Null;
        let field = |name: &str| entry.get(name).unwrap_or(&NULL);

        let refs = match field("refs") {
            Value::Array(items) => items
                .iter()
                .filter_map(|r| r.as_str().map(str::to_string))
                .collect(),
            Value::String(s) => vec![s.clone()],
            _ => Vec::new(),
        };

        Self {
            refs,
            price: Amount::from_value(field("price")),
            beds: Amount::from_value(field("beds")),
            baths: Amount::from_value(field("baths")),
            date: field("date").as_str().map(str::to_string),
            notes: field("notes").as_str().unwrap_or_default().to_string(),
            is_favorite: field("isFavorite").as_bool().unwrap_or(false),
            is_dismissed: field("isDismissed").as_bool().unwrap_or(false),
        }
    }
}

/// Listings keyed by identifier (usually the street address), in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingSet {
    entries: Vec<(String, Listing)>,
}

impl ListingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: impl Into<String>, listing: Listing) {
        self.entries.push((id.into(), listing));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Listing)> {
        self.entries.iter().map(|(id, l)| (id.as_str(), l))
    }

    /// Parse a listings document. Key order of the top-level object is kept
    /// (serde_json is built with `preserve_order`). Only the document as a
    /// whole can fail; each entry yields a listing.
    pub fn from_json(text: &str) -> Result<Self, ListingParseError> {
        let value: Value = serde_json::from_str(text)?;

        let object = match value {
            Value::Object(map) => map,
            other => return Err(ListingParseError::Shape(json_kind(&other))),
        };

        let mut set = ListingSet::new();
        for (id, entry) in object {
            let listing = match Listing::deserialize(&entry) {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::warn!("⚠️ listing '{id}' is malformed ({e}), showing what it has");
                    Listing::from_loose(&entry)
                }
            };
            set.push(id, listing);
        }

        Ok(set)
    }
}

impl Serialize for ListingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, listing) in &self.entries {
            map.serialize_entry(id, listing)?;
        }
        map.end()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unexpected data shape: expected an object of listings, found {0}")]
    Shape(&'static str),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

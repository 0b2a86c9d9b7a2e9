//! Shared newtypes and records used across all domain modules.
//!
//! These types are serialization-transparent where the upstream sends a bare
//! value, so they can be used directly in wire types without conversion.

pub mod page;
pub mod serde_util;

pub use page::{
    Envelope, Page, PageQuery, DEFAULT_CHARACTER_LIMIT, DEFAULT_COMIC_LIMIT, DEFAULT_EVENT_LIMIT,
    MAX_PAGE_LIMIT,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── ResourceId ──────────────────────────────────────────────────────────────

/// Opaque identifier of a catalog entity (e.g. `"1009368"`).
///
/// The upstream sends ids as JSON numbers; callers usually hold them as path
/// strings. Both deserialize into the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reject ids that cannot be used as a single URL path segment.
    pub fn validate(&self) -> Result<(), String> {
        if self.0.is_empty() {
            return Err("id cannot be empty".to_string());
        }
        if self.0.contains('/') || self.0.chars().any(char::is_whitespace) {
            return Err(format!("id '{}' is not a single path segment", self.0));
        }
        Ok(())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for ResourceId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl FromStr for ResourceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResourceId(s.to_string()))
    }
}

impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Str(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => ResourceId(n.to_string()),
            Raw::Str(s) => ResourceId(s),
        })
    }
}

// ─── ResourceKind ────────────────────────────────────────────────────────────

/// The three catalog resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Character,
    Comic,
    Event,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Comic => "comic",
            Self::Event => "event",
        }
    }

    /// Collection path segment under the base URL.
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Comic => "comics",
            Self::Event => "events",
        }
    }

    /// Query key used for prefix search, if the listing supports one.
    pub fn prefix_filter_key(&self) -> Option<&'static str> {
        match self {
            Self::Character => Some("nameStartsWith"),
            Self::Comic => Some("titleStartsWith"),
            Self::Event => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Thumbnail ───────────────────────────────────────────────────────────────

/// Image reference split into path and extension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

impl Thumbnail {
    /// Full image URL: `path + "." + extension`.
    pub fn url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}

// ─── Cross references ────────────────────────────────────────────────────────

/// A named link to another catalog entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
}

impl ResourceRef {
    /// Trailing id of the referenced entity's URI, if present.
    pub fn id(&self) -> Option<ResourceId> {
        self.resource_uri
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .map(ResourceId::from)
    }
}

/// A (possibly truncated) collection of cross references.
///
/// `available` is the upstream's total; `items` holds at most the first page
/// of references it chose to inline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub items: Vec<ResourceRef>,
}

impl ResourceList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|r| r.name.as_str())
    }
}

/// An outbound link (e.g. the public detail page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_accepts_number_or_string() {
        let a: ResourceId = serde_json::from_str("1009368").unwrap();
        let b: ResourceId = serde_json::from_str(r#""1009368""#).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), r#""1009368""#);
    }

    #[test]
    fn test_resource_id_validation() {
        assert!(ResourceId::from("1009368").validate().is_ok());
        assert!(ResourceId::from("").validate().is_err());
        assert!(ResourceId::from("12/34").validate().is_err());
        assert!(ResourceId::from("12 34").validate().is_err());
    }

    #[test]
    fn test_thumbnail_url() {
        let thumb = Thumbnail {
            path: "http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55".to_string(),
            extension: "jpg".to_string(),
        };
        assert_eq!(
            thumb.url(),
            "http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55.jpg"
        );
    }

    #[test]
    fn test_resource_ref_id() {
        let r = ResourceRef {
            name: "Avengers (1963) #1".to_string(),
            resource_uri: "http://gateway.marvel.com/v1/public/comics/7212".to_string(),
        };
        assert_eq!(r.id(), Some(ResourceId::from("7212")));
    }

    #[test]
    fn test_prefix_filter_keys() {
        assert_eq!(
            ResourceKind::Character.prefix_filter_key(),
            Some("nameStartsWith")
        );
        assert_eq!(ResourceKind::Comic.prefix_filter_key(), Some("titleStartsWith"));
        assert_eq!(ResourceKind::Event.prefix_filter_key(), None);
    }
}

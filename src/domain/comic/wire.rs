//! Wire types for comic records (REST).

use crate::shared::{Link, ResourceId, ResourceList, ResourceRef, Thumbnail};
use serde::{Deserialize, Serialize};

/// A dated milestone (`onsaleDate`, `focDate`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComicDateResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

/// A cover price (`printPrice`, `digitalPurchasePrice`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComicPriceResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}

/// A creator credit; unlike other cross references it carries a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatorRefResponse {
    pub name: String,
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreatorListResponse {
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub items: Vec<CreatorRefResponse>,
}

/// Raw comic record as returned by `/comics` and `/comics/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComicResponse {
    pub id: ResourceId,
    #[serde(default)]
    pub digital_id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issue_number: Option<f64>,
    #[serde(default)]
    pub variant_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(rename = "resourceURI", default)]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<Link>,
    #[serde(default)]
    pub series: Option<ResourceRef>,
    #[serde(default)]
    pub dates: Vec<ComicDateResponse>,
    #[serde(default)]
    pub prices: Vec<ComicPriceResponse>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub images: Vec<Thumbnail>,
    #[serde(default)]
    pub creators: CreatorListResponse,
    #[serde(default)]
    pub characters: ResourceList,
    #[serde(default)]
    pub stories: ResourceList,
    #[serde(default)]
    pub events: ResourceList,
}

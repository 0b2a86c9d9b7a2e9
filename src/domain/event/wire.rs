//! Wire types for event records (REST).

use crate::domain::comic::wire::CreatorListResponse;
use crate::shared::{Link, ResourceId, ResourceList, ResourceRef, Thumbnail};
use serde::{Deserialize, Serialize};

/// Raw event record as returned by `/events` and `/events/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: ResourceId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "resourceURI", default)]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<Link>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub creators: CreatorListResponse,
    #[serde(default)]
    pub characters: ResourceList,
    #[serde(default)]
    pub stories: ResourceList,
    #[serde(default)]
    pub comics: ResourceList,
    #[serde(default)]
    pub series: ResourceList,
    #[serde(default)]
    pub next: Option<ResourceRef>,
    #[serde(default)]
    pub previous: Option<ResourceRef>,
}

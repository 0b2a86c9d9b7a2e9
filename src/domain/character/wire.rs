//! Wire types for character records (REST).

use crate::shared::{Link, ResourceId, ResourceList, Thumbnail};
use serde::{Deserialize, Serialize};

/// Raw character record as returned by `/characters` and `/characters/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: ResourceId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(rename = "resourceURI", default)]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub comics: ResourceList,
    #[serde(default)]
    pub series: ResourceList,
    #[serde(default)]
    pub stories: ResourceList,
    #[serde(default)]
    pub events: ResourceList,
    #[serde(default)]
    pub urls: Vec<Link>,
}

//! Character domain — listing summaries and detail records.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Link, ResourceId, ResourceList, Thumbnail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A character as shown on a listing card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: ResourceId,
    pub name: String,
    pub description: Option<String>,
    pub thumbnail: Thumbnail,
}

/// A character with its cross references, as shown on a detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub id: ResourceId,
    pub name: String,
    pub description: Option<String>,
    pub thumbnail: Thumbnail,
    pub modified: Option<DateTime<Utc>>,
    pub comics: ResourceList,
    pub series: ResourceList,
    pub stories: ResourceList,
    pub events: ResourceList,
    pub urls: Vec<Link>,
}

impl CharacterDetail {
    /// The first public link (the "more info" button on the detail page).
    pub fn outbound_link(&self) -> Option<&str> {
        self.urls.first().map(|l| l.url.as_str())
    }

    /// Reduce to the listing view.
    pub fn summary(&self) -> CharacterSummary {
        CharacterSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

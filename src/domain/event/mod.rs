//! Event domain — crossover events and their participants.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::comic::Creator;
use crate::shared::{Link, ResourceId, ResourceList, ResourceRef, Thumbnail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: ResourceId,
    pub title: String,
    pub description: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub thumbnail: Thumbnail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: ResourceId,
    pub title: String,
    pub description: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub thumbnail: Thumbnail,
    pub modified: Option<DateTime<Utc>>,
    pub creators: Vec<Creator>,
    pub comics: ResourceList,
    pub characters: ResourceList,
    pub stories: ResourceList,
    pub series: ResourceList,
    /// The event that follows this one, if any.
    pub next: Option<ResourceRef>,
    pub previous: Option<ResourceRef>,
    pub urls: Vec<Link>,
}

impl EventDetail {
    pub fn outbound_link(&self) -> Option<&str> {
        self.urls.first().map(|l| l.url.as_str())
    }

    pub fn summary(&self) -> EventSummary {
        EventSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            start: self.start,
            end: self.end,
            thumbnail: self.thumbnail.clone(),
        }
    }
}

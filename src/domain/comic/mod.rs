//! Comic domain — listing summaries and detail records.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Link, ResourceId, ResourceList, ResourceRef, Thumbnail};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date kind carrying the on-sale date.
pub const ON_SALE_DATE: &str = "onsaleDate";

/// Price kind for the printed cover price.
pub const PRINT_PRICE: &str = "printPrice";

/// A comic as shown on a listing card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicSummary {
    pub id: ResourceId,
    pub title: String,
    pub description: Option<String>,
    pub issue_number: Option<Decimal>,
    pub format: Option<String>,
    pub thumbnail: Thumbnail,
}

/// A dated milestone. `date` is `None` when the upstream has no real date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicDate {
    pub kind: String,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicPrice {
    pub kind: String,
    pub price: Decimal,
}

/// A credited creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub role: Option<String>,
    pub resource_uri: String,
}

/// A comic with credits and cross references, as shown on a detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicDetail {
    pub id: ResourceId,
    pub title: String,
    pub description: Option<String>,
    pub issue_number: Option<Decimal>,
    pub format: Option<String>,
    pub thumbnail: Thumbnail,
    pub page_count: Option<u32>,
    pub modified: Option<DateTime<Utc>>,
    pub series: Option<ResourceRef>,
    pub dates: Vec<ComicDate>,
    pub prices: Vec<ComicPrice>,
    pub images: Vec<Thumbnail>,
    pub creators: Vec<Creator>,
    pub characters: ResourceList,
    pub stories: ResourceList,
    pub events: ResourceList,
    pub urls: Vec<Link>,
}

impl ComicDetail {
    pub fn outbound_link(&self) -> Option<&str> {
        self.urls.first().map(|l| l.url.as_str())
    }

    pub fn on_sale_date(&self) -> Option<DateTime<Utc>> {
        self.dates
            .iter()
            .find(|d| d.kind == ON_SALE_DATE)
            .and_then(|d| d.date)
    }

    pub fn print_price(&self) -> Option<Decimal> {
        self.prices
            .iter()
            .find(|p| p.kind == PRINT_PRICE)
            .map(|p| p.price)
    }

    /// Creator names grouped by role, in credit order. Uncredited roles are
    /// grouped under `"other"`.
    pub fn creators_by_role(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for creator in &self.creators {
            let role = creator.role.clone().unwrap_or_else(|| "other".to_string());
            grouped.entry(role).or_default().push(creator.name.clone());
        }
        grouped
    }

    pub fn summary(&self) -> ComicSummary {
        ComicSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            issue_number: self.issue_number,
            format: self.format.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

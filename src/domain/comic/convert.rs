//! Conversion: ComicResponse → ComicSummary / ComicDetail.

use super::wire::{ComicDateResponse, ComicPriceResponse, ComicResponse, CreatorRefResponse};
use super::{ComicDate, ComicDetail, ComicPrice, ComicSummary, Creator};
use crate::domain::{finish, ValidationError};
use crate::shared::serde_util::{non_blank, parse_catalog_date};
use rust_decimal::Decimal;
use std::str::FromStr;

/// `f64` → `Decimal` through the shortest round-trip representation, so
/// `3.99` stays `3.99`.
fn to_decimal(field: &'static str, value: f64) -> Result<Decimal, ValidationError> {
    let raw = value.to_string();
    Decimal::from_str(&raw).map_err(|_| ValidationError::InvalidNumber(field, raw))
}

impl From<ComicDateResponse> for ComicDate {
    fn from(d: ComicDateResponse) -> Self {
        Self {
            date: parse_catalog_date(&d.date),
            kind: d.kind,
        }
    }
}

impl TryFrom<ComicPriceResponse> for ComicPrice {
    type Error = ValidationError;

    fn try_from(p: ComicPriceResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            price: to_decimal("price", p.price)?,
            kind: p.kind,
        })
    }
}

impl From<CreatorRefResponse> for Creator {
    fn from(c: CreatorRefResponse) -> Self {
        Self {
            name: c.name,
            role: non_blank(c.role),
            resource_uri: c.resource_uri,
        }
    }
}

impl TryFrom<ComicResponse> for ComicDetail {
    type Error = ValidationError;

    fn try_from(source: ComicResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let title = non_blank(source.title).unwrap_or_else(|| {
            errors.push(ValidationError::MissingTitle);
            String::new()
        });
        let thumbnail = source.thumbnail.unwrap_or_else(|| {
            errors.push(ValidationError::MissingThumbnail);
            Default::default()
        });
        let issue_number = match source.issue_number.map(|n| to_decimal("issueNumber", n)) {
            Some(Ok(n)) => Some(n),
            Some(Err(err)) => {
                errors.push(err);
                None
            }
            None => None,
        };
        let mut prices = Vec::with_capacity(source.prices.len());
        for p in source.prices {
            match ComicPrice::try_from(p) {
                Ok(price) => prices.push(price),
                Err(err) => errors.push(err),
            }
        }
        finish(&source.id, errors)?;

        Ok(Self {
            id: source.id,
            title,
            description: non_blank(source.description),
            issue_number,
            format: non_blank(source.format),
            thumbnail,
            page_count: source.page_count.filter(|n| *n > 0),
            modified: source.modified.as_deref().and_then(parse_catalog_date),
            series: source.series,
            dates: source.dates.into_iter().map(ComicDate::from).collect(),
            prices,
            images: source.images,
            creators: source.creators.items.into_iter().map(Creator::from).collect(),
            characters: source.characters,
            stories: source.stories,
            events: source.events,
            urls: source.urls,
        })
    }
}

impl TryFrom<ComicResponse> for ComicSummary {
    type Error = ValidationError;

    fn try_from(source: ComicResponse) -> Result<Self, Self::Error> {
        ComicDetail::try_from(source).map(|detail| detail.summary())
    }
}

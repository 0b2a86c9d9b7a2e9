//! Conversion: EventResponse → EventSummary / EventDetail.

use super::wire::EventResponse;
use super::{EventDetail, EventSummary};
use crate::domain::comic::Creator;
use crate::domain::{finish, ValidationError};
use crate::shared::serde_util::{non_blank, parse_catalog_date, parse_catalog_datetime};

impl TryFrom<EventResponse> for EventDetail {
    type Error = ValidationError;

    fn try_from(source: EventResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let title = non_blank(source.title).unwrap_or_else(|| {
            errors.push(ValidationError::MissingTitle);
            String::new()
        });
        let thumbnail = source.thumbnail.unwrap_or_else(|| {
            errors.push(ValidationError::MissingThumbnail);
            Default::default()
        });
        finish(&source.id, errors)?;

        Ok(Self {
            id: source.id,
            title,
            description: non_blank(source.description),
            start: source.start.as_deref().and_then(parse_catalog_datetime),
            end: source.end.as_deref().and_then(parse_catalog_datetime),
            thumbnail,
            modified: source.modified.as_deref().and_then(parse_catalog_date),
            creators: source.creators.items.into_iter().map(Creator::from).collect(),
            comics: source.comics,
            characters: source.characters,
            stories: source.stories,
            series: source.series,
            next: source.next,
            previous: source.previous,
            urls: source.urls,
        })
    }
}

impl TryFrom<EventResponse> for EventSummary {
    type Error = ValidationError;

    fn try_from(source: EventResponse) -> Result<Self, Self::Error> {
        EventDetail::try_from(source).map(|detail| detail.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn sample() -> EventResponse {
        serde_json::from_value(serde_json::json!({
            "id": 116,
            "title": "Acts of Vengeance!",
            "description": "Loki sets about convincing the super-villains of Earth to attack heroes other than those they normally fight.",
            "resourceURI": "http://gateway.marvel.com/v1/public/events/116",
            "urls": [{"type": "detail", "url": "http://marvel.com/comics/events/116/acts_of_vengeance"}],
            "modified": "2013-06-28T16:31:24-0400",
            "start": "1989-12-10 00:00:00",
            "end": "2008-01-04 00:00:00",
            "thumbnail": {"path": "http://i.annihil.us/u/prod/marvel/i/mg/9/40/51ca10d996b8b", "extension": "jpg"},
            "creators": {"available": 1, "items": [
                {"resourceURI": "http://gateway.marvel.com/v1/public/creators/2707", "name": "Kurt Busiek", "role": "writer"}
            ]},
            "characters": {"available": 1, "items": [
                {"resourceURI": "http://gateway.marvel.com/v1/public/characters/1009165", "name": "Avengers"}
            ]},
            "stories": {"available": 0, "items": []},
            "comics": {"available": 0, "items": []},
            "series": {"available": 0, "items": []},
            "next": {"resourceURI": "http://gateway.marvel.com/v1/public/events/233", "name": "Atlantis Attacks"},
            "previous": null
        }))
        .unwrap()
    }

    #[test]
    fn test_detail_conversion() {
        let detail = EventDetail::try_from(sample()).unwrap();
        assert_eq!(detail.title, "Acts of Vengeance!");
        assert_eq!(detail.start.unwrap().year(), 1989);
        assert_eq!(detail.end.unwrap().year(), 2008);
        assert_eq!(detail.creators[0].role.as_deref(), Some("writer"));
        assert_eq!(detail.characters.names().collect::<Vec<_>>(), vec!["Avengers"]);
        assert_eq!(detail.next.as_ref().unwrap().name, "Atlantis Attacks");
        assert!(detail.previous.is_none());
        assert_eq!(
            detail.outbound_link(),
            Some("http://marvel.com/comics/events/116/acts_of_vengeance")
        );
    }

    #[test]
    fn test_summary_conversion() {
        let summary = EventSummary::try_from(sample()).unwrap();
        assert_eq!(summary.id.as_str(), "116");
        assert!(summary.description.is_some());
    }

    #[test]
    fn test_missing_thumbnail_fails() {
        let mut raw = sample();
        raw.thumbnail = None;
        assert!(EventSummary::try_from(raw).is_err());
    }
}

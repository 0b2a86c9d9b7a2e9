//! Conversion: CharacterResponse → CharacterSummary / CharacterDetail.

use super::wire::CharacterResponse;
use super::{CharacterDetail, CharacterSummary};
use crate::domain::{finish, ValidationError};
use crate::shared::serde_util::{non_blank, parse_catalog_date};

impl TryFrom<CharacterResponse> for CharacterDetail {
    type Error = ValidationError;

    fn try_from(source: CharacterResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = non_blank(source.name).unwrap_or_else(|| {
            errors.push(ValidationError::MissingName);
            String::new()
        });
        let thumbnail = source.thumbnail.unwrap_or_else(|| {
            errors.push(ValidationError::MissingThumbnail);
            Default::default()
        });
        finish(&source.id, errors)?;

        Ok(Self {
            id: source.id,
            name,
            description: non_blank(source.description),
            thumbnail,
            modified: source.modified.as_deref().and_then(parse_catalog_date),
            comics: source.comics,
            series: source.series,
            stories: source.stories,
            events: source.events,
            urls: source.urls,
        })
    }
}

impl TryFrom<CharacterResponse> for CharacterSummary {
    type Error = ValidationError;

    fn try_from(source: CharacterResponse) -> Result<Self, Self::Error> {
        CharacterDetail::try_from(source).map(|detail| CharacterSummary {
            id: detail.id,
            name: detail.name,
            description: detail.description,
            thumbnail: detail.thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ResourceId;

    fn sample() -> CharacterResponse {
        serde_json::from_value(serde_json::json!({
            "id": 1009368,
            "name": "Iron Man",
            "description": "Wounded, captured and forced to build a weapon...",
            "modified": "2016-09-28T12:08:19-0400",
            "thumbnail": {
                "path": "http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bbb219c96d",
                "extension": "jpg"
            },
            "resourceURI": "http://gateway.marvel.com/v1/public/characters/1009368",
            "comics": {
                "available": 2,
                "collectionURI": "http://gateway.marvel.com/v1/public/characters/1009368/comics",
                "items": [
                    {"resourceURI": "http://gateway.marvel.com/v1/public/comics/43495", "name": "A+X (2012) #2"},
                    {"resourceURI": "http://gateway.marvel.com/v1/public/comics/43506", "name": "A+X (2012) #7"}
                ],
                "returned": 2
            },
            "stories": {
                "available": 1,
                "items": [
                    {"resourceURI": "http://gateway.marvel.com/v1/public/stories/670", "name": "X-MEN (2004) #186", "type": "cover"}
                ]
            },
            "urls": [
                {"type": "detail", "url": "http://marvel.com/characters/29/iron_man"},
                {"type": "wiki", "url": "http://marvel.com/universe/Iron_Man_(Anthony_Stark)"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_detail_conversion() {
        let detail = CharacterDetail::try_from(sample()).unwrap();
        assert_eq!(detail.id, ResourceId::from("1009368"));
        assert_eq!(detail.name, "Iron Man");
        assert_eq!(detail.comics.len(), 2);
        assert_eq!(detail.comics.available, 2);
        assert_eq!(detail.stories.names().collect::<Vec<_>>(), vec!["X-MEN (2004) #186"]);
        assert!(detail.series.is_empty());
        assert!(detail.events.is_empty());
        assert!(detail.modified.is_some());
        assert_eq!(
            detail.outbound_link(),
            Some("http://marvel.com/characters/29/iron_man")
        );
        assert_eq!(detail.summary().name, "Iron Man");
    }

    #[test]
    fn test_blank_description_becomes_none() {
        let mut raw = sample();
        raw.description = Some("  ".to_string());
        let summary = CharacterSummary::try_from(raw).unwrap();
        assert!(summary.description.is_none());
    }

    #[test]
    fn test_missing_name_and_thumbnail_are_reported_together() {
        let mut raw = sample();
        raw.name = None;
        raw.thumbnail = None;
        let err = CharacterSummary::try_from(raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Multiple(
                ResourceId::from("1009368"),
                vec![ValidationError::MissingName, ValidationError::MissingThumbnail]
            )
        );
    }
}

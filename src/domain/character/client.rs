//! Characters sub-client — listing, detail lookup, page stream.

use crate::client::{paginate, CatalogClient};
use crate::domain::character::{CharacterDetail, CharacterSummary};
use crate::error::SdkError;
use crate::shared::{Page, PageQuery, ResourceId, ResourceKind};
use futures_util::Stream;

/// Sub-client for character operations.
pub struct Characters<'a> {
    pub(crate) client: &'a CatalogClient,
}

impl<'a> Characters<'a> {
    /// One page of characters, optionally filtered by `nameStartsWith`.
    pub async fn list(&self, query: &PageQuery) -> Result<Page<CharacterSummary>, SdkError> {
        let resp = self.client.http.get_characters(query).await?;
        resp.data.check_invariants()?;
        Ok(resp.data.try_map(CharacterSummary::try_from)?)
    }

    /// A single character by id. Empty results fail with `NotFound`.
    pub async fn get(&self, id: impl Into<ResourceId>) -> Result<CharacterDetail, SdkError> {
        let id = id.into();
        let resp = self.client.http.get_character(&id).await?;
        let record = resp
            .data
            .results
            .into_iter()
            .next()
            .ok_or(SdkError::NotFound {
                kind: ResourceKind::Character,
                id,
            })?;
        Ok(CharacterDetail::try_from(record)?)
    }

    /// Every page from `query.offset` onward, one request per page.
    pub fn pages(
        &self,
        query: PageQuery,
    ) -> impl Stream<Item = Result<Page<CharacterSummary>, SdkError>> + 'a {
        let client = self.client;
        paginate(query, move |q| async move { client.characters().list(&q).await })
    }
}

//! Comics sub-client — listing, detail lookup, page stream.

use crate::client::{paginate, CatalogClient};
use crate::domain::comic::{ComicDetail, ComicSummary};
use crate::error::SdkError;
use crate::shared::{Page, PageQuery, ResourceId, ResourceKind};
use futures_util::Stream;

/// Sub-client for comic operations.
pub struct Comics<'a> {
    pub(crate) client: &'a CatalogClient,
}

impl<'a> Comics<'a> {
    /// One page of comics ordered by on-sale date, optionally filtered by
    /// `titleStartsWith`.
    pub async fn list(&self, query: &PageQuery) -> Result<Page<ComicSummary>, SdkError> {
        let resp = self.client.http.get_comics(query).await?;
        resp.data.check_invariants()?;
        Ok(resp.data.try_map(ComicSummary::try_from)?)
    }

    /// A single comic by id. Empty results fail with `NotFound`.
    pub async fn get(&self, id: impl Into<ResourceId>) -> Result<ComicDetail, SdkError> {
        let id = id.into();
        let resp = self.client.http.get_comic(&id).await?;
        let record = resp
            .data
            .results
            .into_iter()
            .next()
            .ok_or(SdkError::NotFound {
                kind: ResourceKind::Comic,
                id,
            })?;
        Ok(ComicDetail::try_from(record)?)
    }

    /// Every page from `query.offset` onward, one request per page.
    pub fn pages(
        &self,
        query: PageQuery,
    ) -> impl Stream<Item = Result<Page<ComicSummary>, SdkError>> + 'a {
        let client = self.client;
        paginate(query, move |q| async move { client.comics().list(&q).await })
    }
}

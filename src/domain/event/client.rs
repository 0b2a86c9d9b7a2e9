//! Events sub-client — listing, detail lookup, page stream.

use crate::client::{paginate, CatalogClient};
use crate::domain::event::{EventDetail, EventSummary};
use crate::error::SdkError;
use crate::shared::{Page, PageQuery, ResourceId, ResourceKind};
use futures_util::Stream;

/// Sub-client for event operations.
pub struct Events<'a> {
    pub(crate) client: &'a CatalogClient,
}

impl<'a> Events<'a> {
    /// One page of events. Prefix search is not supported.
    pub async fn list(&self, query: &PageQuery) -> Result<Page<EventSummary>, SdkError> {
        let resp = self.client.http.get_events(query).await?;
        resp.data.check_invariants()?;
        Ok(resp.data.try_map(EventSummary::try_from)?)
    }

    /// A single event by id.
    pub async fn get(&self, id: impl Into<ResourceId>) -> Result<EventDetail, SdkError> {
        let id = id.into();
        let resp = self.client.http.get_event(&id).await?;
        let record = resp
            .data
            .results
            .into_iter()
            .next()
            .ok_or(SdkError::NotFound {
                kind: ResourceKind::Event,
                id,
            })?;
        Ok(EventDetail::try_from(record)?)
    }

    /// Stream of pages until the listing is exhausted.
    pub fn pages(
        &self,
        query: PageQuery,
    ) -> impl Stream<Item = Result<Page<EventSummary>, SdkError>> + 'a {
        let client = self.client;
        paginate(query, move |q| async move { client.events().list(&q).await })
    }
}

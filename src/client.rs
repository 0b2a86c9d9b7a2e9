//! High-level client — `CatalogClient` with nested sub-client accessors.
//!
//! Each resource kind has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the flat entry points and page streaming.

use crate::auth::Credentials;
use crate::domain::character::client::Characters;
use crate::domain::character::{CharacterDetail, CharacterSummary};
use crate::domain::comic::client::Comics;
use crate::domain::comic::{ComicDetail, ComicSummary};
use crate::domain::event::client::Events;
use crate::domain::event::{EventDetail, EventSummary};
use crate::error::{AuthError, SdkError};
use crate::http::CatalogHttp;
use crate::network::{API_URL_ENV, DEFAULT_API_URL};
use crate::shared::{Page, PageQuery, ResourceId};

use futures_util::Stream;
use std::future::Future;

// Re-export sub-client types for convenience.
pub use crate::domain::character::client::Characters as CharactersClient;
pub use crate::domain::comic::client::Comics as ComicsClient;
pub use crate::domain::event::client::Events as EventsClient;

/// The primary entry point for the catalog SDK.
///
/// Holds only immutable state (base URL, credentials, connection pool), so it
/// is cheap to clone and safe to share across tasks. Concurrent calls never
/// coordinate; each signs and sends its own request.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) http: CatalogHttp,
}

impl CatalogClient {
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    /// Client for the default upstream.
    pub fn new(credentials: Credentials) -> Result<Self, SdkError> {
        Self::builder().credentials(credentials).build()
    }

    /// Low-level access to the raw endpoints and wire types.
    pub fn http(&self) -> &CatalogHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn characters(&self) -> Characters<'_> {
        Characters { client: self }
    }

    pub fn comics(&self) -> Comics<'_> {
        Comics { client: self }
    }

    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }

    // ── Flat entry points ────────────────────────────────────────────────
    //
    // Callers wanting the default window pass `""`, `0` and the kind's
    // default limit (`DEFAULT_CHARACTER_LIMIT` etc.), or build a `PageQuery`.

    /// Characters whose name starts with `search_prefix` (all when empty).
    pub async fn list_characters(
        &self,
        search_prefix: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Page<CharacterSummary>, SdkError> {
        let query = PageQuery::characters()
            .search(search_prefix)
            .offset(offset)
            .limit(limit);
        self.characters().list(&query).await
    }

    /// Comics ordered by on-sale date, title-prefix filtered when non-empty.
    pub async fn list_comics(
        &self,
        search_prefix: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Page<ComicSummary>, SdkError> {
        let query = PageQuery::comics()
            .search(search_prefix)
            .offset(offset)
            .limit(limit);
        self.comics().list(&query).await
    }

    pub async fn list_events(&self, offset: u32, limit: u32) -> Result<Page<EventSummary>, SdkError> {
        let query = PageQuery::events().offset(offset).limit(limit);
        self.events().list(&query).await
    }

    pub async fn get_character_detail(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<CharacterDetail, SdkError> {
        self.characters().get(id).await
    }

    pub async fn get_comic_detail(&self, id: impl Into<ResourceId>) -> Result<ComicDetail, SdkError> {
        self.comics().get(id).await
    }

    pub async fn get_event_detail(&self, id: impl Into<ResourceId>) -> Result<EventDetail, SdkError> {
        self.events().get(id).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Page streaming
// ═════════════════════════════════════════════════════════════════════════════

/// Walk a listing page by page, following `next_offset()` until the upstream
/// total is reached. The first error ends the stream.
pub(crate) fn paginate<'a, T, F, Fut>(
    query: PageQuery,
    fetch: F,
) -> impl Stream<Item = Result<Page<T>, SdkError>> + 'a
where
    T: 'a,
    F: Fn(PageQuery) -> Fut + 'a,
    Fut: Future<Output = Result<Page<T>, SdkError>> + 'a,
{
    async_stream::try_stream! {
        let mut query = query;
        loop {
            let page = fetch(query.clone()).await?;
            let next = page.next_offset();
            yield page;
            match next {
                Some(offset) => query = query.offset(offset),
                None => break,
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CatalogClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    http_client: Option<reqwest::Client>,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            credentials: None,
            http_client: None,
        }
    }
}

impl CatalogClientBuilder {
    /// Credentials from `MARVEL_PUBLIC_KEY`/`MARVEL_PRIVATE_KEY`, base URL from
    /// `MARVEL_API_URL` when set.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default().credentials(Credentials::from_env()?);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                builder = builder.base_url(url.trim());
            }
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<CatalogClient, SdkError> {
        let credentials = self
            .credentials
            .ok_or(AuthError::NoCredentials)?;
        let http = match self.http_client {
            Some(client) => CatalogHttp::with_client(&self.base_url, credentials, client),
            None => CatalogHttp::new(&self.base_url, credentials)?,
        };
        Ok(CatalogClient { http })
    }
}

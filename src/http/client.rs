//! Low-level HTTP client — `CatalogHttp`.
//!
//! One method per upstream endpoint. Returns wire envelopes (conversion to
//! domain types happens in the sub-clients). Every call signs itself afresh,
//! issues exactly one GET and never retries.

use crate::auth::{Credentials, RequestSignature};
use crate::domain::character::wire::CharacterResponse;
use crate::domain::comic::wire::ComicResponse;
use crate::domain::event::wire::EventResponse;
use crate::error::{HttpError, SdkError};
use crate::shared::{Envelope, PageQuery, ResourceId, ResourceKind};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Low-level HTTP client for the catalog REST API.
#[derive(Clone)]
pub struct CatalogHttp {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl CatalogHttp {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, SdkError> {
        let client = Client::builder().build().map_err(HttpError::Transport)?;
        Ok(Self::with_client(base_url, credentials, client))
    }

    /// Use a caller-configured `reqwest::Client` (proxies, custom TLS, ...).
    pub fn with_client(base_url: &str, credentials: Credentials, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Characters ───────────────────────────────────────────────────────

    pub async fn get_characters(
        &self,
        query: &PageQuery,
    ) -> Result<Envelope<CharacterResponse>, SdkError> {
        self.list(ResourceKind::Character, query).await
    }

    pub async fn get_character(
        &self,
        id: &ResourceId,
    ) -> Result<Envelope<CharacterResponse>, SdkError> {
        self.detail(ResourceKind::Character, id).await
    }

    // ── Comics ───────────────────────────────────────────────────────────

    pub async fn get_comics(&self, query: &PageQuery) -> Result<Envelope<ComicResponse>, SdkError> {
        self.list(ResourceKind::Comic, query).await
    }

    pub async fn get_comic(&self, id: &ResourceId) -> Result<Envelope<ComicResponse>, SdkError> {
        self.detail(ResourceKind::Comic, id).await
    }

    // ── Events ───────────────────────────────────────────────────────────

    pub async fn get_events(&self, query: &PageQuery) -> Result<Envelope<EventResponse>, SdkError> {
        self.list(ResourceKind::Event, query).await
    }

    pub async fn get_event(&self, id: &ResourceId) -> Result<Envelope<EventResponse>, SdkError> {
        self.detail(ResourceKind::Event, id).await
    }

    // ── URL construction ─────────────────────────────────────────────────

    /// Signed listing URL for `query`.
    pub fn list_url(
        &self,
        query: &PageQuery,
        signature: &RequestSignature,
    ) -> Result<String, SdkError> {
        query.validate()?;
        self.signed_url(query.kind.segment(), signature, &query.query_params())
    }

    /// Signed detail URL for `kind`/`id`. Only `ts`, `apikey` and `hash` are sent.
    pub fn detail_url(
        &self,
        kind: ResourceKind,
        id: &ResourceId,
        signature: &RequestSignature,
    ) -> Result<String, SdkError> {
        id.validate().map_err(SdkError::Validation)?;
        let path = format!("{}/{}", kind.segment(), urlencoding::encode(id.as_str()));
        self.signed_url(&path, signature, &[])
    }

    fn signed_url(
        &self,
        path: &str,
        signature: &RequestSignature,
        extra: &[(&'static str, String)],
    ) -> Result<String, SdkError> {
        let mut params: Vec<(&str, &str)> = vec![
            ("ts", signature.timestamp.as_str()),
            ("apikey", self.credentials.public_key()),
            ("hash", signature.digest.as_str()),
        ];
        params.extend(extra.iter().map(|(k, v)| (*k, v.as_str())));
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| SdkError::Validation(format!("Unencodable query: {}", e)))?;
        Ok(format!("{}/{}?{}", self.base_url, path, query))
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn list<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        query: &PageQuery,
    ) -> Result<Envelope<T>, SdkError> {
        if query.kind != kind {
            return Err(SdkError::Validation(format!(
                "{} query sent to the {} endpoint",
                query.kind, kind
            )));
        }
        let url = self.list_url(query, &RequestSignature::fresh(&self.credentials))?;
        tracing::debug!(
            kind = %kind,
            offset = query.offset,
            limit = query.limit,
            search = query.search_prefix.as_deref().unwrap_or(""),
            "Listing catalog resources"
        );
        self.get(&url, kind.segment()).await
    }

    async fn detail<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        id: &ResourceId,
    ) -> Result<Envelope<T>, SdkError> {
        let url = self.detail_url(kind, id, &RequestSignature::fresh(&self.credentials))?;
        tracing::debug!(kind = %kind, id = %id, "Fetching catalog resource");
        self.get(&url, kind.segment()).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, resource: &str) -> Result<T, SdkError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(HttpError::Transport)?;
        let status = resp.status();
        tracing::debug!(resource, status = status.as_u16(), "Catalog response");

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            }
            .into());
        }

        // Invalid UTF-8 must fail the parse, not be replaced.
        let body = resp.bytes().await.map_err(HttpError::Transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl std::fmt::Debug for CatalogHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogHttp")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

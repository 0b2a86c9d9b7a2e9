//! # Marvel Catalog SDK
//!
//! Typed, signed access to the public comics catalog API: characters, comics
//! and events, paginated listings and single-entity detail lookups.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, pagination, domain + wire types (no I/O)
//! 2. **Auth** — Credentials and per-request signing (`ts`/`apikey`/`hash`)
//! 3. **HTTP API** — `CatalogHttp`, one signed GET per endpoint, no retries
//! 4. **High-Level Client** — `CatalogClient` with per-kind sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marvel_catalog::prelude::*;
//!
//! let client = CatalogClient::builder()
//!     .credentials(Credentials::from_env()?)
//!     .build()?;
//!
//! let comics = client.list_comics("avengers", 0, 10).await?;
//! println!("{} of {} comics", comics.count, comics.total);
//!
//! match client.get_character_detail("1009368").await {
//!     Ok(iron_man) => println!("{}", iron_man.name),
//!     Err(e) if e.is_not_found() => println!("no such character"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, cross references and pagination.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and environment keys.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and request signing.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CatalogClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{
        Link, Page, PageQuery, ResourceId, ResourceKind, ResourceList, ResourceRef, Thumbnail,
        DEFAULT_CHARACTER_LIMIT, DEFAULT_COMIC_LIMIT, DEFAULT_EVENT_LIMIT, MAX_PAGE_LIMIT,
    };

    // Domain types
    pub use crate::domain::character::{CharacterDetail, CharacterSummary};
    pub use crate::domain::comic::{ComicDate, ComicDetail, ComicPrice, ComicSummary, Creator};
    pub use crate::domain::event::{EventDetail, EventSummary};
    pub use crate::domain::ValidationError;

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{Credentials, RequestSignature};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CatalogClient, CatalogClientBuilder, CharactersClient, ComicsClient, EventsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::CatalogHttp;
}

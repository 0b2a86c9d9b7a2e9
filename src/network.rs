//! Network URL constants and environment keys for the catalog SDK.

/// Default REST API base URL (the public catalog gateway).
pub const DEFAULT_API_URL: &str = "https://gateway.marvel.com/v1/public";

/// Environment variable holding the public API key.
pub const PUBLIC_KEY_ENV: &str = "MARVEL_PUBLIC_KEY";

/// Environment variable holding the private API key.
pub const PRIVATE_KEY_ENV: &str = "MARVEL_PRIVATE_KEY";

/// Optional environment override for the base URL.
pub const API_URL_ENV: &str = "MARVEL_API_URL";

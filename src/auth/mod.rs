//! Authentication — API credentials and per-request signing.
//!
//! ## Security Model
//!
//! - The catalog authenticates every request with three query parameters:
//!   `ts`, `apikey` and `hash`. The private key is only ever used as input to
//!   the digest; it never appears in a URL, a log line or `Debug` output.
//! - Credentials are injected at construction (builder or environment). There
//!   is no process-wide credential state.
//! - A fresh [`RequestSignature`] is derived for every request. Signatures are
//!   never cached, since the upstream may reject a stale timestamp as a replay.

pub mod signature;

pub use signature::RequestSignature;

use std::fmt;

use crate::error::AuthError;
use crate::network::{PRIVATE_KEY_ENV, PUBLIC_KEY_ENV};

/// Public/private key pair issued by the catalog developer portal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    /// NEVER exposed publicly.
    private_key: String,
}

impl Credentials {
    /// Build credentials from explicit values. Both keys must be non-empty.
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let public_key = public_key.into().trim().to_string();
        let private_key = private_key.into().trim().to_string();
        if public_key.is_empty() {
            return Err(AuthError::EmptyCredential(PUBLIC_KEY_ENV));
        }
        if private_key.is_empty() {
            return Err(AuthError::EmptyCredential(PRIVATE_KEY_ENV));
        }
        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Read `MARVEL_PUBLIC_KEY` and `MARVEL_PRIVATE_KEY` from the environment.
    pub fn from_env() -> Result<Self, AuthError> {
        let public_key = std::env::var(PUBLIC_KEY_ENV)
            .map_err(|_| AuthError::MissingCredential(PUBLIC_KEY_ENV))?;
        let private_key = std::env::var(PRIVATE_KEY_ENV)
            .map_err(|_| AuthError::MissingCredential(PRIVATE_KEY_ENV))?;
        Self::new(public_key, private_key)
    }

    /// The public key, sent as `apikey`.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub(crate) fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_empty_keys() {
        assert_eq!(
            Credentials::new("", "secret").unwrap_err(),
            AuthError::EmptyCredential(PUBLIC_KEY_ENV)
        );
        assert_eq!(
            Credentials::new("public", "   ").unwrap_err(),
            AuthError::EmptyCredential(PRIVATE_KEY_ENV)
        );
    }

    #[test]
    fn test_credentials_debug_redacts_private_key() {
        let creds = Credentials::new("public", "top-secret").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("public"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn test_credentials_trim_whitespace() {
        let creds = Credentials::new(" public\n", " secret ").unwrap();
        assert_eq!(creds.public_key(), "public");
        assert_eq!(creds.private_key(), "secret");
    }
}

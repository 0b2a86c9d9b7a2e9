//! Request signing — `hash = md5(ts + private_key + public_key)`.

use chrono::Utc;

use crate::auth::Credentials;

/// Per-request authentication material: the timestamp and its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Unix time in milliseconds, as a decimal string (`ts`).
    pub timestamp: String,
    /// Lowercase hex md5 digest (`hash`).
    pub digest: String,
}

impl RequestSignature {
    /// Sign with the current wall-clock time.
    pub fn fresh(credentials: &Credentials) -> Self {
        Self::at(credentials, Utc::now().timestamp_millis())
    }

    /// Sign with an explicit millisecond timestamp.
    pub fn at(credentials: &Credentials, timestamp_ms: i64) -> Self {
        let timestamp = timestamp_ms.to_string();
        let digest = digest(
            &timestamp,
            credentials.private_key(),
            credentials.public_key(),
        );
        Self { timestamp, digest }
    }
}

fn digest(timestamp: &str, private_key: &str, public_key: &str) -> String {
    let mut input = String::with_capacity(timestamp.len() + private_key.len() + public_key.len());
    input.push_str(timestamp);
    input.push_str(private_key);
    input.push_str(public_key);
    hex::encode(md5::compute(input.as_bytes()).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("1234", "abcd").unwrap()
    }

    #[test]
    fn test_digest_matches_documented_example() {
        // ts=1, private=abcd, public=1234 → md5("1abcd1234")
        let sig = RequestSignature::at(&creds(), 1);
        assert_eq!(sig.timestamp, "1");
        assert_eq!(sig.digest, "ffd275c5130566a2916217b101f26150");
    }

    #[test]
    fn test_digest_is_deterministic() {
        let a = RequestSignature::at(&creds(), 1_700_000_000_000);
        let b = RequestSignature::at(&creds(), 1_700_000_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_changes_with_timestamp() {
        let a = RequestSignature::at(&creds(), 1_700_000_000_000);
        let b = RequestSignature::at(&creds(), 1_700_000_000_001);
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let sig = RequestSignature::at(&creds(), 42);
        assert_eq!(sig.digest.len(), 32);
        assert!(sig
            .digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_digest_depends_on_key_order() {
        let swapped = Credentials::new("abcd", "1234").unwrap();
        let a = RequestSignature::at(&creds(), 7);
        let b = RequestSignature::at(&swapped, 7);
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn test_fresh_uses_millisecond_timestamp() {
        let sig = RequestSignature::fresh(&creds());
        let ts: i64 = sig.timestamp.parse().unwrap();
        assert!(ts > 1_600_000_000_000);
        assert!(!sig.digest.contains("abcd"));
    }
}

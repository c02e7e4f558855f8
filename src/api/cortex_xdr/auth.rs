//! Advanced authentication headers for Cortex XDR API requests.
//!
//! Every signed request carries a fresh nonce and a millisecond timestamp;
//! the `Authorization` value is the SHA-256 digest of
//! `api_key || nonce || timestamp`. Headers are generated per request and
//! never reused.

use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

pub const NONCE_LENGTH: usize = 64;

/// Generate a single-use random token from `[A-Za-z0-9]`.
///
/// `thread_rng` is a CSPRNG, so nonce collisions across requests are not a
/// practical concern.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Millisecond timestamp with the sub-second component zeroed, as the
/// vendor scheme expects.
pub fn timestamp_ms() -> String {
    (Utc::now().timestamp() * 1000).to_string()
}

/// Lowercase hex SHA-256 over the UTF-8 bytes of `api_key || nonce || timestamp`.
///
/// Deterministic for a fixed input triple; the request payload is not part
/// of the signed material.
pub fn signature_for(api_key: &str, nonce: &str, timestamp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.update(nonce.as_bytes());
    hasher.update(timestamp.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build the four authentication headers for a Cortex XDR request.
///
/// `extra` entries are merged into the returned map for call-site
/// convenience; they are not incorporated into the signature.
pub fn advanced_authentication(
    api_key: &str,
    api_key_id: &str,
    extra: Option<&BTreeMap<String, String>>,
) -> BTreeMap<String, String> {
    let nonce = generate_nonce();
    let timestamp = timestamp_ms();
    let auth_key = signature_for(api_key, &nonce, &timestamp);

    let mut headers = BTreeMap::new();
    headers.insert("Authorization".to_string(), auth_key);
    headers.insert("x-xdr-nonce".to_string(), nonce);
    headers.insert("x-xdr-timestamp".to_string(), timestamp);
    headers.insert("x-xdr-auth-id".to_string(), api_key_id.to_string());

    if let Some(extra) = extra {
        headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_contain_exactly_the_documented_keys() {
        let headers = advanced_authentication("test_api_key", "1234", None);

        assert_eq!(headers.len(), 4);
        assert!(headers.contains_key("Authorization"));
        assert!(headers.contains_key("x-xdr-nonce"));
        assert!(headers.contains_key("x-xdr-timestamp"));
        assert_eq!(headers["x-xdr-auth-id"], "1234");
    }

    #[test]
    fn nonce_is_64_alphanumeric_chars() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), NONCE_LENGTH);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn timestamp_is_whole_seconds_in_millis() {
        let headers = advanced_authentication("K1", "ID1", None);
        let ts: i64 = headers["x-xdr-timestamp"].parse().unwrap();
        assert_eq!(ts % 1000, 0);
    }

    #[test]
    fn repeated_calls_produce_fresh_nonces_and_signatures() {
        // Both calls land within the same second; the nonce alone must
        // make the signatures differ.
        let a = advanced_authentication("K1", "ID1", None);
        let b = advanced_authentication("K1", "ID1", None);

        assert_ne!(a["x-xdr-nonce"], b["x-xdr-nonce"]);
        assert_ne!(a["Authorization"], b["Authorization"]);
    }

    #[test]
    fn signature_is_reproducible_for_fixed_inputs() {
        let first = signature_for("K1", "abc123", "1700000000000");
        let second = signature_for("K1", "abc123", "1700000000000");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn signature_matches_header_value() {
        let headers = advanced_authentication("K1", "ID1", None);
        let expected = signature_for("K1", &headers["x-xdr-nonce"], &headers["x-xdr-timestamp"]);
        assert_eq!(headers["Authorization"], expected);
    }

    #[test]
    fn extra_entries_are_merged_without_touching_the_signature() {
        let mut extra = BTreeMap::new();
        extra.insert("Content-Type".to_string(), "application/json".to_string());
        let headers = advanced_authentication("K1", "ID1", Some(&extra));

        assert_eq!(headers.len(), 5);
        assert_eq!(headers["Content-Type"], "application/json");
        let expected = signature_for("K1", &headers["x-xdr-nonce"], &headers["x-xdr-timestamp"]);
        assert_eq!(headers["Authorization"], expected);
    }
}

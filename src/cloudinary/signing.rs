//! Admin API request signing
//!
//! The remote contract: sort parameters lexicographically by key, join as
//! `key=value` pairs with `&`, append the shared secret, and take the SHA-1
//! hex digest. SHA-1 is the provider's documented requirement, not a locally
//! chosen strength. The digest travels as the `signature` parameter and must
//! cover exactly the parameter set sent, minus `signature` itself.

use sha1::{Digest, Sha1};
use std::collections::BTreeMap;

/// Canonical `key=value&...` string over the sorted parameter set
fn canonical_params(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Compute the hex signature for a parameter set
///
/// Pure function of its inputs: identical parameters and secret always
/// produce the same digest.
pub fn api_signature(params: &BTreeMap<String, String>, api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(canonical_params(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

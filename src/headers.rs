// src/headers.rs
//! Auth header builder
//!
//! Reads the session token fresh on every call and formats the
//! `Authorization` header the API expects.

use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use tracing::warn;

use crate::consts::{MISSING_TOKEN_PLACEHOLDER, TOKEN_STORE_KEY};
use crate::store::TokenStore;

/// `Bearer <token>`, or the literal `Bearer null` when no token is stored
///
/// Sessionless clients have always sent exactly `Bearer null`; the backend
/// answers 401 to it. No presence check here — see DESIGN.md.
pub fn bearer_value(store: &impl TokenStore) -> String {
    match store.get(TOKEN_STORE_KEY) {
        Some(token) => format!("Bearer {token}"),
        None => format!("Bearer {MISSING_TOKEN_PLACEHOLDER}"),
    }
}

/// Single-entry header map: `Authorization: Bearer <token>`
pub fn auth_headers(store: &impl TokenStore) -> HeaderMap {
    // A token the header grammar rejects degrades to the placeholder, same
    // as a missing one
    let value = match HeaderValue::from_str(&bearer_value(store)) {
        Ok(value) => value,
        Err(_) => {
            warn!("stored token contains bytes not allowed in a header, sending placeholder");
            HeaderValue::from_static("Bearer null")
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    headers
}

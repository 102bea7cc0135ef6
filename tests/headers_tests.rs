// tests/headers_tests.rs
use credential_armor::consts::TOKEN_STORE_KEY;
use credential_armor::headers::{auth_headers, bearer_value};
use credential_armor::store::{JsonFileStore, MemoryStore, TokenStore};
use http::header::AUTHORIZATION;

#[test]
fn test_bearer_value_uses_stored_token() {
    let store = MemoryStore::new();
    store.set(TOKEN_STORE_KEY, "abc123");

    assert_eq!(bearer_value(&store), "Bearer abc123");
}

#[test]
fn test_bearer_value_without_token_is_the_null_literal() {
    let store = MemoryStore::new();

    assert_eq!(bearer_value(&store), "Bearer null");
}

#[test]
fn test_auth_headers_single_entry() {
    let store = MemoryStore::new();
    store.set(TOKEN_STORE_KEY, "abc123");

    let headers = auth_headers(&store);
    assert_eq!(headers.len(), 1);
    assert_eq!(
        headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
        "Bearer abc123"
    );
}

#[test]
fn test_header_reads_store_fresh_on_every_call() {
    let store = MemoryStore::new();

    store.set(TOKEN_STORE_KEY, "first");
    assert_eq!(bearer_value(&store), "Bearer first");

    store.set(TOKEN_STORE_KEY, "second");
    assert_eq!(bearer_value(&store), "Bearer second");

    store.remove(TOKEN_STORE_KEY);
    assert_eq!(bearer_value(&store), "Bearer null");
}

#[test]
fn test_invalid_header_bytes_degrade_to_placeholder() {
    let store = MemoryStore::new();
    store.set(TOKEN_STORE_KEY, "tok\nen");

    let headers = auth_headers(&store);
    assert_eq!(
        headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
        "Bearer null"
    );
}

#[test]
fn test_other_store_keys_are_ignored() {
    let store = MemoryStore::new();
    store.set("some_other_key", "abc123");

    assert_eq!(bearer_value(&store), "Bearer null");
}

#[test]
fn test_json_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json"));

    assert_eq!(store.get(TOKEN_STORE_KEY), None);
    store.set(TOKEN_STORE_KEY, "abc123").unwrap();
    assert_eq!(store.get(TOKEN_STORE_KEY).as_deref(), Some("abc123"));
    assert_eq!(bearer_value(&store), "Bearer abc123");

    // a second handle sees the same file
    let other = JsonFileStore::open(dir.path().join("store.json"));
    assert_eq!(other.get(TOKEN_STORE_KEY).as_deref(), Some("abc123"));

    store.remove(TOKEN_STORE_KEY).unwrap();
    assert_eq!(store.get(TOKEN_STORE_KEY), None);
}

#[test]
fn test_json_file_store_preserves_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json"));

    store.set("theme", "dark").unwrap();
    store.set(TOKEN_STORE_KEY, "abc123").unwrap();
    store.remove(TOKEN_STORE_KEY).unwrap();

    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn test_json_file_store_treats_corrupt_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(TOKEN_STORE_KEY), None);
    assert_eq!(bearer_value(&store), "Bearer null");
}

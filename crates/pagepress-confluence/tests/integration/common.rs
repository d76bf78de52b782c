//! Shared test helpers for Confluence adapter integration tests
//!
//! Provides wiremock-based mock server setup for the Confluence `content`
//! REST resource. Each helper mounts the necessary mock endpoints; tests
//! get a client (or full store) pointing at the mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pagepress_confluence::client::{AuthCredentials, ConfluenceClient};
use pagepress_confluence::store::ConfluencePageStore;
use pagepress_core::domain::newtypes::SpaceKey;

/// The space all tests publish into
pub const TEST_SPACE: &str = "DOCS";

/// Starts a mock server and returns a client pointing at it
pub async fn setup_client() -> (MockServer, ConfluenceClient) {
    let server = MockServer::start().await;
    let client = ConfluenceClient::new(server.uri(), AuthCredentials::Open);
    (server, client)
}

/// Starts a mock server and returns a full store adapter pointing at it
pub async fn setup_store() -> (MockServer, ConfluencePageStore) {
    let server = MockServer::start().await;
    let client = ConfluenceClient::new(server.uri(), AuthCredentials::Open);
    let store = ConfluencePageStore::new(client, SpaceKey::new(TEST_SPACE).unwrap());
    (server, store)
}

/// A full `content` resource response body for the given page
pub fn content_body(
    id: &str,
    title: &str,
    version: u32,
    ancestor: Option<&str>,
) -> serde_json::Value {
    let mut body = serde_json::json!({
        "id": id,
        "type": "page",
        "title": title,
        "space": {"key": TEST_SPACE},
        "body": {"storage": {"value": "<p>body</p>", "representation": "storage"}},
        "version": {"number": version}
    });
    if let Some(ancestor) = ancestor {
        body["ancestors"] = serde_json::json!([{"id": ancestor}]);
    }
    body
}

/// Mounts a title/label search endpoint returning the given results
pub async fn mount_search(server: &MockServer, endpoint: &str, results: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "size": results.len(),
            "results": results
        })))
        .mount(server)
        .await;
}

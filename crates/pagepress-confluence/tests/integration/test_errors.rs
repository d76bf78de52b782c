//! Status-code-to-error mapping tests

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use pagepress_confluence::client::{AuthCredentials, ConfluenceClient};
use pagepress_confluence::ConfluenceError;
use pagepress_core::domain::newtypes::{PageId, SpaceKey};
use pagepress_core::ports::page_store::RemotePageStore;

use crate::common::{setup_client, setup_store, TEST_SPACE};

#[tokio::test]
async fn json_error_messages_are_surfaced() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/content"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errorMessages": ["space does not exist"]
        })))
        .mount(&server)
        .await;

    let err = client
        .search_by_title(&SpaceKey::new(TEST_SPACE).unwrap(), "a")
        .await
        .unwrap_err();

    match err {
        ConfluenceError::Status { status, messages } => {
            assert_eq!(status, 400);
            assert_eq!(messages, vec!["space does not exist"]);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn single_message_body_is_surfaced() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path("/content"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "statusCode": 409,
            "message": "A page with this title already exists"
        })))
        .mount(&server)
        .await;

    let page = crate::common::content_body("x", "a", 1, None);
    let dto: pagepress_confluence::wire::ContentDto = serde_json::from_value(page).unwrap();
    let err = client.create_page(&dto).await.unwrap_err();

    match err {
        ConfluenceError::Status { status, messages } => {
            assert_eq!(status, 409);
            assert_eq!(messages, vec!["A page with this title already exists"]);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_yields_empty_messages() {
    let (server, client) = setup_client().await;

    Mock::given(method("DELETE"))
        .and(path("/content/42"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client
        .delete_page(&PageId::new("42").unwrap())
        .await
        .unwrap_err();

    match err {
        ConfluenceError::Status { status, messages } => {
            assert_eq!(status, 502);
            assert!(messages.is_empty());
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Point at a server that is already shut down. Dropping a pooled
    // wiremock `MockServer` keeps its listener alive for reuse, so bind
    // and release a port directly to get a dead endpoint.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = ConfluenceClient::new(uri, AuthCredentials::Open);
    let err = client
        .delete_page(&PageId::new("42").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ConfluenceError::Transport(_)));
}

#[tokio::test]
async fn store_propagates_status_errors_opaquely() {
    let (server, store) = setup_store().await;

    Mock::given(method("GET"))
        .and(path("/content/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "unauthorized"
        })))
        .mount(&server)
        .await;

    let err = store.search_by_label("pagepress").await.unwrap_err();
    // The typed adapter error travels inside the anyhow chain.
    let confluence_err = err
        .downcast_ref::<ConfluenceError>()
        .expect("ConfluenceError in chain");
    assert_eq!(confluence_err.status(), Some(401));
}

//! Search endpoint tests: title lookup and CQL label lookup

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pagepress_core::domain::newtypes::SpaceKey;
use pagepress_core::ports::page_store::RemotePageStore;

use crate::common::{content_body, mount_search, setup_client, setup_store, TEST_SPACE};

fn space() -> SpaceKey {
    SpaceKey::new(TEST_SPACE).unwrap()
}

#[tokio::test]
async fn title_search_sends_space_title_and_expand() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/content"))
        .and(query_param("spaceKey", TEST_SPACE))
        .and(query_param("title", "my note"))
        .and(query_param("expand", "body.storage,version,ancestors,space"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "size": 1,
            "results": [content_body("42", "my note", 3, None)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.search_by_title(&space(), "my note").await.unwrap();
    assert_eq!(response.size, 1);
    assert_eq!(response.results[0].id.as_deref(), Some("42"));
}

#[tokio::test]
async fn title_search_with_no_match_returns_empty() {
    let (server, store) = setup_store().await;
    mount_search(&server, "/content", vec![]).await;

    let results = store.search_by_title(&space(), "absent").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn label_search_uses_cql() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/content/search"))
        .and(query_param("cql", "label=\"pagepress\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "size": 2,
            "results": [
                content_body("1", "a", 1, None),
                content_body("2", "b", 1, None)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.search_by_label("pagepress").await.unwrap();
    assert_eq!(response.size, 2);
}

#[tokio::test]
async fn store_maps_search_results_to_pages() {
    let (server, store) = setup_store().await;
    mount_search(
        &server,
        "/content",
        vec![content_body("42", "a", 3, Some("1000"))],
    )
    .await;

    let results = store.search_by_title(&space(), "a").await.unwrap();
    let page = results.into_first().unwrap();
    assert_eq!(page.id.unwrap().as_str(), "42");
    assert_eq!(page.version, 3);
    assert_eq!(page.ancestor.unwrap().as_str(), "1000");
    assert_eq!(page.space.as_str(), TEST_SPACE);
}

#[tokio::test]
async fn sparse_search_results_fall_back_to_store_space() {
    let (server, store) = setup_store().await;
    // No space/body/version expands in the response.
    mount_search(
        &server,
        "/content/search",
        vec![serde_json::json!({"id": "7", "type": "page", "title": "bare"})],
    )
    .await;

    let results = store.search_by_label("pagepress").await.unwrap();
    let page = results.into_first().unwrap();
    assert_eq!(page.space.as_str(), TEST_SPACE);
    assert_eq!(page.version, 1);
}

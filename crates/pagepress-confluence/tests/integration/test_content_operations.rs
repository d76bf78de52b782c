//! Create / update / delete / label endpoint tests

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pagepress_confluence::client::{AuthCredentials, ConfluenceClient};
use pagepress_core::domain::newtypes::{PageId, SpaceKey};
use pagepress_core::domain::page::{PageBody, RemotePage};
use pagepress_core::ports::page_store::RemotePageStore;

use crate::common::{content_body, setup_client, setup_store, TEST_SPACE};

fn new_page(title: &str, ancestor: Option<&str>) -> RemotePage {
    RemotePage {
        id: None,
        title: title.to_string(),
        space: SpaceKey::new(TEST_SPACE).unwrap(),
        ancestor: ancestor.map(|id| PageId::new(id).unwrap()),
        body: PageBody::storage("<p>hello</p>"),
        version: 1,
        labels: vec![],
    }
}

#[tokio::test]
async fn create_page_posts_storage_representation() {
    let (server, store) = setup_store().await;

    Mock::given(method("POST"))
        .and(path("/content"))
        .and(body_partial_json(serde_json::json!({
            "type": "page",
            "title": "a",
            "space": {"key": TEST_SPACE},
            "ancestors": [{"id": "1000"}],
            "body": {"storage": {"representation": "storage"}}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(content_body("42", "a", 1, Some("1000"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = store.create_page(&new_page("a", Some("1000"))).await.unwrap();
    assert_eq!(created.id.unwrap().as_str(), "42");
    assert_eq!(created.version, 1);
}

#[tokio::test]
async fn update_page_puts_editor_representation_and_version() {
    let (server, store) = setup_store().await;

    let mut page = new_page("a", None);
    page.id = Some(PageId::new("42").unwrap());
    page.body = PageBody::editor("changed");
    page.version = 4;

    Mock::given(method("PUT"))
        .and(path("/content/42"))
        .and(body_partial_json(serde_json::json!({
            "id": "42",
            "body": {"storage": {"value": "changed", "representation": "editor"}},
            "version": {"number": 4}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_body("42", "a", 4, None)))
        .expect(1)
        .mount(&server)
        .await;

    let updated = store.update_page(&page).await.unwrap();
    assert_eq!(updated.version, 4);
}

#[tokio::test]
async fn update_without_id_fails_before_any_request() {
    let (_server, store) = setup_store().await;
    let err = store.update_page(&new_page("a", None)).await.unwrap_err();
    assert!(err.to_string().contains("without id"));
}

#[tokio::test]
async fn delete_page_issues_delete() {
    let (server, store) = setup_store().await;

    Mock::given(method("DELETE"))
        .and(path("/content/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    store
        .delete_page(&PageId::new("42").unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn attach_label_posts_global_prefix() {
    let (server, store) = setup_store().await;

    Mock::given(method("POST"))
        .and(path("/content/42/label"))
        .and(body_partial_json(serde_json::json!([
            {"prefix": "global", "name": "pagepress"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"prefix": "global", "name": "pagepress"}],
            "size": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    store
        .attach_label(&PageId::new("42").unwrap(), "pagepress")
        .await
        .unwrap();
}

#[tokio::test]
async fn basic_auth_header_is_applied() {
    let server = MockServer::start().await;
    // "alice:secret" base64-encoded
    Mock::given(method("DELETE"))
        .and(path("/content/1"))
        .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ConfluenceClient::new(
        server.uri(),
        AuthCredentials::Basic {
            username: "alice".to_string(),
            password: "secret".to_string(),
        },
    );
    client.delete_page(&PageId::new("1").unwrap()).await.unwrap();
}

#[tokio::test]
async fn bearer_auth_header_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/content/1"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ConfluenceClient::new(
        server.uri(),
        AuthCredentials::Bearer {
            token: "tok-123".to_string(),
        },
    );
    client.delete_page(&PageId::new("1").unwrap()).await.unwrap();
}

#[tokio::test]
async fn open_auth_sends_no_authorization_header() {
    let (server, client) = setup_client().await;

    Mock::given(method("DELETE"))
        .and(path("/content/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_page(&PageId::new("1").unwrap()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

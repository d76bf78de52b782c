//! Confluence REST API client
//!
//! Provides a typed HTTP client for the Confluence `content` REST
//! resource. Handles authentication headers, JSON (de)serialization,
//! endpoint construction, and status-code-to-error mapping.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagepress_confluence::client::{AuthCredentials, ConfluenceClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ConfluenceClient::new(
//!     "https://wiki.example.com/rest/api",
//!     AuthCredentials::Bearer { token: "token".into() },
//! );
//! let results = client.search_by_label("pagepress").await?;
//! println!("{} pages", results.size);
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

use pagepress_core::config::{AuthType, ConnectionConfig};
use pagepress_core::domain::newtypes::{PageId, SpaceKey};

use crate::wire::{ContentDto, LabelDto, SearchResponseDto};
use crate::ConfluenceError;

/// Maximum number of labelled pages fetched in one cleanup query
const LABEL_SEARCH_LIMIT: u32 = 500;

/// Credentials applied to every request
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// No authentication header
    Open,
    /// HTTP basic authentication
    Basic {
        /// Account username
        username: String,
        /// Password or API token
        password: String,
    },
    /// OAuth2 bearer token
    Bearer {
        /// The token value
        token: String,
    },
}

/// HTTP client for Confluence REST API calls
///
/// Wraps `reqwest::Client` with authentication and base URL construction.
/// All methods surface failures as [`ConfluenceError`]: transport errors
/// for requests that never produced a response, status errors (carrying
/// server-reported messages when available) otherwise. No internal retry.
pub struct ConfluenceClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL including the API base path, without trailing slash
    base_url: String,
    /// Credentials applied to each request
    credentials: AuthCredentials,
}

impl ConfluenceClient {
    /// Creates a new client for the given API base URL.
    ///
    /// # Arguments
    /// * `base_url` - Host plus API base path,
    ///   e.g. `https://company.atlassian.net/wiki/rest/api`
    /// * `credentials` - Authentication to apply to every request
    pub fn new(base_url: impl Into<String>, credentials: AuthCredentials) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            credentials,
        }
    }

    /// Builds a client from the connection section of the config file.
    ///
    /// # Errors
    /// Fails when the configured auth type requires credentials that are
    /// missing (basic without username/password, bearer without a token).
    pub fn from_config(conn: &ConnectionConfig) -> anyhow::Result<Self> {
        let credentials = match conn.auth_type {
            AuthType::Open => AuthCredentials::Open,
            AuthType::Basic => AuthCredentials::Basic {
                username: conn
                    .username
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("basic auth requires connection.username"))?,
                password: conn
                    .password
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("basic auth requires connection.password"))?,
            },
            AuthType::Bearer => AuthCredentials::Bearer {
                token: conn.bearer_token.clone().ok_or_else(|| {
                    anyhow::anyhow!("bearer auth requires connection.bearer_token")
                })?,
            },
        };
        Ok(Self::new(
            format!("{}{}", conn.host.trim_end_matches('/'), conn.api_base_path),
            credentials,
        ))
    }

    /// Returns the base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an authenticated request builder for the given method and path
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, &url);
        match &self.credentials {
            AuthCredentials::Open => builder,
            AuthCredentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            AuthCredentials::Bearer { token } => builder.bearer_auth(token),
        }
    }

    /// Sends a request and maps non-success statuses to [`ConfluenceError::Status`],
    /// extracting server-reported messages from JSON error bodies.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ConfluenceError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let messages = extract_error_messages(&body);
        Err(ConfluenceError::Status {
            status: status.as_u16(),
            messages,
        })
    }

    /// Searches a space for pages with an exact title match.
    ///
    /// Expands body, version, and ancestors so the result can be fed back
    /// into an update without further round trips.
    pub async fn search_by_title(
        &self,
        space: &SpaceKey,
        title: &str,
    ) -> Result<SearchResponseDto, ConfluenceError> {
        debug!(space = %space, title, "Searching content by title");
        let response = self
            .send(self.request(Method::GET, "/content").query(&[
                ("spaceKey", space.as_str()),
                ("title", title),
                ("expand", "body.storage,version,ancestors,space"),
            ]))
            .await?;
        Ok(response.json().await?)
    }

    /// Searches for all pages carrying the given label, via CQL.
    pub async fn search_by_label(
        &self,
        label: &str,
    ) -> Result<SearchResponseDto, ConfluenceError> {
        debug!(label, "Searching content by label");
        let cql = format!("label=\"{label}\"");
        let limit = LABEL_SEARCH_LIMIT.to_string();
        let response = self
            .send(
                self.request(Method::GET, "/content/search")
                    .query(&[("cql", cql.as_str()), ("limit", limit.as_str())]),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Creates a new page and returns it with its store-assigned id.
    pub async fn create_page(&self, page: &ContentDto) -> Result<ContentDto, ConfluenceError> {
        debug!(title = %page.title, "Creating page");
        let response = self
            .send(self.request(Method::POST, "/content").json(page))
            .await?;
        Ok(response.json().await?)
    }

    /// Updates an existing page in place.
    pub async fn update_page(
        &self,
        id: &PageId,
        page: &ContentDto,
    ) -> Result<ContentDto, ConfluenceError> {
        debug!(id = %id, title = %page.title, "Updating page");
        let response = self
            .send(
                self.request(Method::PUT, &format!("/content/{}", id.as_str()))
                    .json(page),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Deletes a page by id.
    pub async fn delete_page(&self, id: &PageId) -> Result<(), ConfluenceError> {
        debug!(id = %id, "Deleting page");
        self.send(self.request(Method::DELETE, &format!("/content/{}", id.as_str())))
            .await?;
        Ok(())
    }

    /// Attaches a global-prefix label to an existing page.
    pub async fn attach_label(&self, id: &PageId, label: &str) -> Result<(), ConfluenceError> {
        debug!(id = %id, label, "Attaching label");
        self.send(
            self.request(Method::POST, &format!("/content/{}/label", id.as_str()))
                .json(&vec![LabelDto::global(label)]),
        )
        .await?;
        Ok(())
    }
}

/// Pulls server-reported messages out of a JSON error body.
///
/// Confluence deployments answer with either an `errorMessages` array or a
/// single `message` string depending on the failing layer; both are read.
fn extract_error_messages(body: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };

    if let Some(messages) = value.get("errorMessages").and_then(|m| m.as_array()) {
        return messages
            .iter()
            .filter_map(|m| m.as_str().map(str::to_string))
            .collect();
    }

    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| vec![m.to_string()])
        .unwrap_or_default()
}

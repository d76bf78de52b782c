//! Configuration module for pagepress.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation, and defaults. The configuration is an
//! immutable value: loaded once, then passed explicitly (behind `Arc`) to
//! every component for the duration of a run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::newtypes::{FolderPath, PageId, SpaceKey};

/// Top-level configuration for pagepress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub publish: PublishConfig,
    pub logging: LoggingConfig,
}

/// How the client authenticates against the page store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    /// No authentication header
    Open,
    /// HTTP basic authentication with username and password/API token
    Basic,
    /// OAuth2 bearer token
    Bearer,
}

impl Default for AuthType {
    fn default() -> Self {
        AuthType::Open
    }
}

/// Connection settings for the remote page store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the page store, e.g. `https://company.atlassian.net/wiki`.
    pub host: String,
    /// REST API base path appended to the host.
    pub api_base_path: String,
    /// Authentication scheme to use.
    pub auth_type: AuthType,
    /// Username for basic authentication.
    pub username: Option<String>,
    /// Password or API token for basic authentication.
    pub password: Option<String>,
    /// Token for bearer authentication.
    pub bearer_token: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "https://my-company.atlassian.net/wiki".to_string(),
            api_base_path: "/rest/api".to_string(),
            auth_type: AuthType::Open,
            username: None,
            password: None,
            bearer_token: None,
        }
    }
}

/// Publishing settings: where pages go and how they are marked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Key of the space notes are published into.
    pub space: String,
    /// Optional top-level parent page id; root documents and folders are
    /// created under it. `None` means the space root.
    pub root_ancestor_id: Option<String>,
    /// Optional folder path restricting which documents sync,
    /// e.g. `"work/projects"`. `None` publishes the whole vault.
    pub scope_filter: Option<String>,
    /// Label attached to every page this tool creates; identifies its own
    /// output for later bulk deletion.
    pub marker_label: String,
    /// Text prepended to every published note body.
    pub note_header_text: String,
    /// Body used for synthetic folder pages.
    pub folder_placeholder_body: String,
    /// When true, delete all previously created pages before publishing.
    pub delete_before_publish: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            space: String::new(),
            root_ancestor_id: None,
            scope_filter: None,
            marker_label: "pagepress".to_string(),
            note_header_text: String::new(),
            folder_placeholder_body: "This is a folder".to_string(),
            delete_before_publish: false,
        }
    }
}

impl PublishConfig {
    /// Returns the validated space key.
    pub fn space_key(&self) -> Result<SpaceKey, DomainError> {
        SpaceKey::new(self.space.clone())
    }

    /// Returns the validated root ancestor id, if configured.
    pub fn root_ancestor(&self) -> Result<Option<PageId>, DomainError> {
        self.root_ancestor_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PageId::new)
            .transpose()
    }

    /// Returns the validated scope filter path, if configured.
    pub fn scope(&self) -> Result<Option<FolderPath>, DomainError> {
        self.scope_filter
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(FolderPath::parse)
            .transpose()
    }
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/pagepress/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("pagepress")
            .join("config.yaml")
    }
}

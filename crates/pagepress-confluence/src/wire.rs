//! Confluence JSON wire types
//!
//! Serde DTOs matching the Confluence `content` REST resource, plus the
//! mapping to and from the port-level [`RemotePage`]. Responses are parsed
//! leniently (most sub-objects optional) because the store omits fields
//! unless the matching `expand` parameter was sent.

use serde::{Deserialize, Serialize};

use pagepress_core::domain::newtypes::{PageId, SpaceKey};
use pagepress_core::domain::page::{BodyRepresentation, PageBody, RemotePage, SearchResults};

use crate::ConfluenceError;

/// Content type tag for ordinary pages
const CONTENT_TYPE_PAGE: &str = "page";

/// One `content` resource on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<SpaceDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestors: Option<Vec<AncestorDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataDto>,
}

/// Space reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceDto {
    pub key: String,
}

/// Single entry of the ancestors array; only the direct parent is sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AncestorDto {
    pub id: String,
}

/// Body container; content always travels under the `storage` key, with
/// the representation tag switching between `storage` and `editor`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDto {
    pub storage: BodyContentDto,
}

/// Body value plus representation tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyContentDto {
    pub value: String,
    pub representation: String,
}

/// Version counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionDto {
    pub number: u32,
}

/// Content metadata; only labels are read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelsDto>,
}

/// Paged label container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsDto {
    #[serde(default)]
    pub results: Vec<LabelDto>,
}

/// A single label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDto {
    pub prefix: String,
    pub name: String,
}

impl LabelDto {
    /// A label in the global prefix, the only kind this tool attaches
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            prefix: "global".to_string(),
            name: name.into(),
        }
    }
}

/// Search / list response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponseDto {
    pub size: usize,
    #[serde(default)]
    pub results: Vec<ContentDto>,
}

// ============================================================================
// Mapping
// ============================================================================

/// Builds the wire payload for a port-level page
pub fn content_from_page(page: &RemotePage) -> ContentDto {
    ContentDto {
        id: page.id.as_ref().map(|id| id.as_str().to_string()),
        content_type: CONTENT_TYPE_PAGE.to_string(),
        title: page.title.clone(),
        space: Some(SpaceDto {
            key: page.space.as_str().to_string(),
        }),
        ancestors: page.ancestor.as_ref().map(|id| {
            vec![AncestorDto {
                id: id.as_str().to_string(),
            }]
        }),
        body: Some(BodyDto {
            storage: BodyContentDto {
                value: page.body.value.clone(),
                representation: page.body.representation.as_str().to_string(),
            },
        }),
        version: Some(VersionDto {
            number: page.version,
        }),
        metadata: None,
    }
}

/// Maps a wire `content` resource to a port-level page.
///
/// `default_space` fills in when the response omits the space object
/// (searches without a space expand do).
pub fn page_from_content(
    dto: ContentDto,
    default_space: &SpaceKey,
) -> Result<RemotePage, ConfluenceError> {
    let id = dto
        .id
        .ok_or_else(|| ConfluenceError::Unexpected("content without id".to_string()))?;
    let id = PageId::new(id)
        .map_err(|e| ConfluenceError::Unexpected(format!("bad content id: {e}")))?;

    let space = match dto.space {
        Some(space) => SpaceKey::new(space.key)
            .map_err(|e| ConfluenceError::Unexpected(format!("bad space key: {e}")))?,
        None => default_space.clone(),
    };

    let ancestor = dto
        .ancestors
        .as_ref()
        .and_then(|a| a.last())
        .map(|a| PageId::new(a.id.clone()))
        .transpose()
        .map_err(|e| ConfluenceError::Unexpected(format!("bad ancestor id: {e}")))?;

    let body = match dto.body {
        Some(body) => PageBody {
            representation: parse_representation(&body.storage.representation)?,
            value: body.storage.value,
        },
        None => PageBody::storage(""),
    };

    let labels = dto
        .metadata
        .and_then(|m| m.labels)
        .map(|l| l.results.into_iter().map(|label| label.name).collect())
        .unwrap_or_default();

    Ok(RemotePage {
        id: Some(id),
        title: dto.title,
        space,
        ancestor,
        body,
        version: dto.version.map(|v| v.number).unwrap_or(1),
        labels,
    })
}

/// Maps a search envelope to port-level results
pub fn results_from_response(
    response: SearchResponseDto,
    default_space: &SpaceKey,
) -> Result<SearchResults, ConfluenceError> {
    let results = response
        .results
        .into_iter()
        .map(|dto| page_from_content(dto, default_space))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SearchResults {
        size: response.size,
        results,
    })
}

fn parse_representation(tag: &str) -> Result<BodyRepresentation, ConfluenceError> {
    match tag {
        "storage" => Ok(BodyRepresentation::Storage),
        "editor" => Ok(BodyRepresentation::Editor),
        other => Err(ConfluenceError::Unexpected(format!(
            "unknown body representation {other:?}"
        ))),
    }
}

//! # Directory API
//!
//! - **GET `/v1/resources`**: Support organizations, optionally filtered by
//!   `?category=` and searched with `?q=`
//! - **GET `/v1/citations`**: Statutes and rules referenced elsewhere
//! - **GET `/v1/citations/{code}`**: One citation by its display code

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dvn_directory::{citations, find_citation, search, LegalCitation, Resource, ResourceCategory};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for `/v1/resources`.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    /// One of `legal_aid`, `domestic_violence`, `counseling`, `courts`,
    /// `parenting`, `financial`.
    pub category: Option<String>,
    /// Case-insensitive text matched against name and description.
    pub q: Option<String>,
}

/// A support organization.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResourceResponse {
    pub name: String,
    pub category: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
}

impl From<&Resource> for ResourceResponse {
    fn from(r: &Resource) -> Self {
        Self {
            name: r.name.to_string(),
            category: r.category.as_str().to_string(),
            description: r.description.to_string(),
            url: r.url.to_string(),
            phone: r.phone.map(str::to_string),
        }
    }
}

/// A statute or court rule.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CitationResponse {
    pub code: String,
    pub title: String,
    pub summary: String,
    pub url: String,
}

impl From<&LegalCitation> for CitationResponse {
    fn from(c: &LegalCitation) -> Self {
        Self {
            code: c.code.to_string(),
            title: c.title.to_string(),
            summary: c.summary.to_string(),
            url: c.url.to_string(),
        }
    }
}

/// Build the directory router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/resources", get(list_resources))
        .route("/v1/citations", get(list_citations))
        .route("/v1/citations/{code}", get(get_citation))
}

/// GET /v1/resources: List support organizations.
#[utoipa::path(
    get,
    path = "/v1/resources",
    params(
        ("category" = Option<String>, Query, description = "Resource category, e.g. `legal_aid`"),
        ("q" = Option<String>, Query, description = "Text to match in name or description"),
    ),
    responses(
        (status = 200, description = "Matching resources", body = Vec<ResourceResponse>),
        (status = 422, description = "Unknown category or malformed query", body = crate::error::ErrorBody),
    ),
    tag = "directory"
)]
pub async fn list_resources(
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Json<Vec<ResourceResponse>>, AppError> {
    let Query(query) = query?;
    // Blank means unfiltered, the same as `q`.
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::parse::<ResourceCategory>)
        .transpose()?;

    let matches = search(query.q.as_deref().unwrap_or(""))
        .into_iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .map(ResourceResponse::from)
        .collect();
    Ok(Json(matches))
}

/// GET /v1/citations: List every citation.
#[utoipa::path(
    get,
    path = "/v1/citations",
    responses((status = 200, description = "Citation table", body = Vec<CitationResponse>)),
    tag = "directory"
)]
pub async fn list_citations() -> Json<Vec<CitationResponse>> {
    Json(citations().iter().map(CitationResponse::from).collect())
}

/// GET /v1/citations/{code}: Look up one citation.
#[utoipa::path(
    get,
    path = "/v1/citations/{code}",
    params(("code" = String, Path, description = "Citation as displayed, e.g. `Ohio Rev. Code 3105.61`")),
    responses(
        (status = 200, description = "Citation found", body = CitationResponse),
        (status = 404, description = "No such citation", body = crate::error::ErrorBody),
    ),
    tag = "directory"
)]
pub async fn get_citation(Path(code): Path<String>) -> Result<Json<CitationResponse>, AppError> {
    find_citation(&code)
        .map(|c| Json(CitationResponse::from(c)))
        .ok_or_else(|| AppError::NotFound(format!("citation {code}")))
}

//! # OpenAPI Specification Assembly
//!
//! Assembles every utoipa-documented route into one OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Divorce Navigator API",
        version = "0.1.0",
        description = "Guidance tools for people separating in Ohio.\n\nProvides:\n- **Complexity scoring** over a fixed table of weighted factors\n- **Legal path recommendation** between dissolution and divorce, with safety overrides\n- **Deadline projection** from a filing or separation date\n- **Document checklist** progress\n- **Support directory** and the statutes cited by the other tools\n\nThe service is informational and does not give legal advice.",
        license(name = "AGPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // ── Advisor ─────────────────────────────────────────────────────
        crate::routes::advisor::list_factors,
        crate::routes::advisor::score_complexity,
        crate::routes::advisor::recommend,
        crate::routes::advisor::list_checklist,
        crate::routes::advisor::checklist_progress_handler,
        // ── Deadlines ───────────────────────────────────────────────────
        crate::routes::deadlines::project_deadlines,
        // ── Directory ───────────────────────────────────────────────────
        crate::routes::directory::list_resources,
        crate::routes::directory::list_citations,
        crate::routes::directory::get_citation,
    ),
    components(
        schemas(
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
            crate::routes::advisor::FactorResponse,
            crate::routes::advisor::ComplexityRequest,
            crate::routes::advisor::ComplexityResponse,
            crate::routes::advisor::RecommendationRequest,
            crate::routes::advisor::RecommendationBody,
            crate::routes::advisor::RecommendationResponse,
            crate::routes::advisor::ChecklistItemResponse,
            crate::routes::advisor::ChecklistProgressRequest,
            crate::routes::advisor::ChecklistProgressResponse,
            crate::routes::deadlines::DeadlinesRequest,
            crate::routes::deadlines::DeadlineResponse,
            crate::routes::deadlines::DeadlinesResponse,
            crate::routes::directory::ResourceResponse,
            crate::routes::directory::CitationResponse,
        )
    ),
    tags(
        (name = "advisor", description = "Complexity scoring, recommendation and the document checklist"),
        (name = "deadlines", description = "Procedural calendar projection"),
        (name = "directory", description = "Support organizations and legal citations"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON document at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates_successfully() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Divorce Navigator API");
        assert_eq!(spec.info.version, "0.1.0");
    }

    #[test]
    fn test_openapi_spec_has_every_route() {
        let spec = ApiDoc::openapi();
        for path in [
            "/v1/factors",
            "/v1/complexity",
            "/v1/recommendation",
            "/v1/checklist",
            "/v1/checklist/progress",
            "/v1/deadlines",
            "/v1/resources",
            "/v1/citations",
            "/v1/citations/{code}",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_openapi_spec_has_tags() {
        let spec = ApiDoc::openapi();
        let tags = spec.tags.expect("tags present");
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["advisor", "deadlines", "directory"]);
    }
}

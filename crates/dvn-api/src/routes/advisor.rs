//! # Advisor API
//!
//! HTTP surface for the recommendation engine:
//!
//! - **GET `/v1/factors`**: The complexity factor table
//! - **POST `/v1/complexity`**: Score a factor selection
//! - **POST `/v1/recommendation`**: Assess the full questionnaire
//! - **GET `/v1/checklist`**: Documents to gather
//! - **POST `/v1/checklist/progress`**: Progress over ticked documents
//!
//! Handlers only translate between JSON and `dvn-advisor` values.

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dvn_advisor::{
    applicable_items, calculate_complexity, checklist_progress, complexity_factors,
    FactorSelection, LegalRecommendation, OverrideReason, Questionnaire,
};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, validate_id_list, Validate};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// One complexity factor.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FactorResponse {
    pub id: String,
    pub question: String,
    pub description: String,
    pub weight: u32,
}

/// Request to score a factor selection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ComplexityRequest {
    /// Selected factor ids. Duplicates are collapsed; unknown ids score zero.
    #[serde(default)]
    pub factors: Vec<String>,
}

impl Validate for ComplexityRequest {
    fn validate(&self) -> Result<(), String> {
        validate_id_list("factors", &self.factors)
    }
}

/// Complexity score for a selection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComplexityResponse {
    pub complexity_score: u32,
    /// Distinct selected ids, sorted.
    pub factors: Vec<String>,
    /// Selected ids that are not in the factor table.
    pub unknown_factors: Vec<String>,
}

/// Questionnaire answers. `null` or a missing field means unanswered; an
/// unrecognised key is rejected so a misspelt question is not dropped.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub has_children: Option<bool>,
    #[serde(default)]
    pub agree_on_terms: Option<bool>,
    #[serde(default)]
    pub factors: Vec<String>,
}

impl Validate for RecommendationRequest {
    fn validate(&self) -> Result<(), String> {
        validate_id_list("factors", &self.factors)
    }
}

/// A recommendation record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationBody {
    /// One of `dissolution`, `divorce`, `consult_attorney`, `incomplete`.
    pub kind: String,
    pub title: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub citation: String,
    pub link: String,
}

impl From<&LegalRecommendation> for RecommendationBody {
    fn from(rec: &LegalRecommendation) -> Self {
        Self {
            kind: rec.kind.as_str().to_string(),
            title: rec.title.to_string(),
            description: rec.description.to_string(),
            pros: rec.pros.iter().map(|s| s.to_string()).collect(),
            cons: rec.cons.iter().map(|s| s.to_string()).collect(),
            citation: rec.citation.to_string(),
            link: rec.link.to_string(),
        }
    }
}

/// Full questionnaire assessment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    pub complexity_score: u32,
    pub recommendation: RecommendationBody,
    /// `score_threshold`, `domestic_violence` and/or `hidden_assets`.
    pub override_reasons: Vec<String>,
    pub unknown_factors: Vec<String>,
}

/// One document to gather.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItemResponse {
    pub id: String,
    pub label: String,
    pub category: String,
    pub description: String,
    pub children_only: bool,
}

/// Ticked documents.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ChecklistProgressRequest {
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub has_children: bool,
}

impl Validate for ChecklistProgressRequest {
    fn validate(&self) -> Result<(), String> {
        validate_id_list("completed", &self.completed)
    }
}

/// Progress over the applicable checklist.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChecklistProgressResponse {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub remaining: Vec<String>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the advisor router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/factors", get(list_factors))
        .route("/v1/complexity", post(score_complexity))
        .route("/v1/recommendation", post(recommend))
        .route("/v1/checklist", get(list_checklist))
        .route("/v1/checklist/progress", post(checklist_progress_handler))
}

fn override_reason_str(reason: &OverrideReason) -> &'static str {
    match reason {
        OverrideReason::ScoreThreshold { .. } => "score_threshold",
        OverrideReason::DomesticViolence => "domestic_violence",
        OverrideReason::HiddenAssets => "hidden_assets",
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /v1/factors: List the complexity factors.
#[utoipa::path(
    get,
    path = "/v1/factors",
    responses((status = 200, description = "Complexity factor table", body = Vec<FactorResponse>)),
    tag = "advisor"
)]
pub async fn list_factors() -> Json<Vec<FactorResponse>> {
    Json(
        complexity_factors()
            .iter()
            .map(|f| FactorResponse {
                id: f.id.to_string(),
                question: f.question.to_string(),
                description: f.description.to_string(),
                weight: f.weight,
            })
            .collect(),
    )
}

/// POST /v1/complexity: Score a factor selection.
#[utoipa::path(
    post,
    path = "/v1/complexity",
    request_body = ComplexityRequest,
    responses(
        (status = 200, description = "Complexity score", body = ComplexityResponse),
        (status = 422, description = "Malformed request", body = crate::error::ErrorBody),
    ),
    tag = "advisor"
)]
pub async fn score_complexity(
    body: Result<Json<ComplexityRequest>, JsonRejection>,
) -> Result<Json<ComplexityResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let selection: FactorSelection = req.factors.into_iter().collect();
    let complexity_score = calculate_complexity(&selection);

    Ok(Json(ComplexityResponse {
        complexity_score,
        unknown_factors: selection.unknown_ids().into_iter().map(str::to_string).collect(),
        factors: selection.iter().map(str::to_string).collect(),
    }))
}

/// POST /v1/recommendation: Assess the questionnaire and recommend a path.
#[utoipa::path(
    post,
    path = "/v1/recommendation",
    request_body = RecommendationRequest,
    responses(
        (status = 200, description = "Assessment", body = RecommendationResponse),
        (status = 422, description = "Malformed request", body = crate::error::ErrorBody),
    ),
    tag = "advisor"
)]
pub async fn recommend(
    body: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let questionnaire = Questionnaire {
        has_children: req.has_children.into(),
        agree_on_terms: req.agree_on_terms.into(),
        factors: req.factors.into_iter().collect(),
    };
    let assessment = questionnaire.assess();

    tracing::info!(
        kind = %assessment.recommendation.kind,
        score = assessment.complexity_score,
        "recommendation resolved"
    );

    Ok(Json(RecommendationResponse {
        complexity_score: assessment.complexity_score,
        recommendation: RecommendationBody::from(assessment.recommendation),
        override_reasons: assessment
            .override_reasons
            .iter()
            .map(|r| override_reason_str(r).to_string())
            .collect(),
        unknown_factors: assessment.unknown_factors,
    }))
}

/// GET /v1/checklist: List every document on the checklist.
#[utoipa::path(
    get,
    path = "/v1/checklist",
    responses((status = 200, description = "Document checklist", body = Vec<ChecklistItemResponse>)),
    tag = "advisor"
)]
pub async fn list_checklist() -> Json<Vec<ChecklistItemResponse>> {
    Json(
        applicable_items(true)
            .map(|item| ChecklistItemResponse {
                id: item.id.to_string(),
                label: item.label.to_string(),
                category: item.category.to_string(),
                description: item.description.to_string(),
                children_only: item.children_only,
            })
            .collect(),
    )
}

/// POST /v1/checklist/progress: Summarise ticked documents.
#[utoipa::path(
    post,
    path = "/v1/checklist/progress",
    request_body = ChecklistProgressRequest,
    responses(
        (status = 200, description = "Checklist progress", body = ChecklistProgressResponse),
        (status = 422, description = "Malformed request", body = crate::error::ErrorBody),
    ),
    tag = "advisor"
)]
pub async fn checklist_progress_handler(
    body: Result<Json<ChecklistProgressRequest>, JsonRejection>,
) -> Result<Json<ChecklistProgressResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let progress = checklist_progress(&req.completed, req.has_children);

    Ok(Json(ChecklistProgressResponse {
        completed: progress.completed,
        total: progress.total,
        percent: progress.percent,
        remaining: progress.remaining.into_iter().map(str::to_string).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router<()> {
        router().with_state(AppState::new())
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> axum::response::Response {
        test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_complexity_dedups_and_reports_unknown() {
        let resp = post_json(
            "/v1/complexity",
            serde_json::json!({"factors": ["real-estate", "real-estate", "yacht"]}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: ComplexityResponse = body_json(resp).await;
        assert_eq!(body.complexity_score, 1);
        assert_eq!(body.factors, vec!["real-estate", "yacht"]);
        assert_eq!(body.unknown_factors, vec!["yacht"]);
    }

    #[tokio::test]
    async fn test_recommendation_override_reasons() {
        let resp = post_json(
            "/v1/recommendation",
            serde_json::json!({
                "has_children": true,
                "agree_on_terms": true,
                "factors": ["hidden-assets", "business-ownership"]
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: RecommendationResponse = body_json(resp).await;
        assert_eq!(body.complexity_score, 7);
        assert_eq!(body.recommendation.kind, "consult_attorney");
        assert_eq!(body.override_reasons, vec!["score_threshold", "hidden_assets"]);
    }

    #[tokio::test]
    async fn test_checklist_progress() {
        let resp = post_json(
            "/v1/checklist/progress",
            serde_json::json!({"completed": ["tax-returns", "pay-stubs"], "has_children": false}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: ChecklistProgressResponse = body_json(resp).await;
        assert_eq!(body.completed, 2);
        assert_eq!(body.total, 8);
        assert_eq!(body.percent, 25);
    }

    #[tokio::test]
    async fn test_malformed_body_is_422() {
        let resp = post_json("/v1/complexity", serde_json::json!({"factors": "real-estate"})).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

//! # Deadline API
//!
//! - **POST `/v1/deadlines`**: Project the procedural calendar for a case
//!   and label each deadline against a reference date.
//!
//! Dates travel as `YYYY-MM-DD` strings so a bad date surfaces as a
//! validation error naming the input rather than a generic JSON rejection.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dvn_core::{CalendarDate, CaseType};
use dvn_deadline::{calculate_deadlines, label_deadlines};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request to project deadlines.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DeadlinesRequest {
    /// Filing or separation date, `YYYY-MM-DD`.
    pub start_date: String,
    /// `divorce` or `dissolution`.
    pub case_type: String,
    #[serde(default)]
    pub has_children: bool,
    /// Reference date for urgency labels. Defaults to the current UTC date.
    #[serde(default)]
    pub today: Option<String>,
}

impl Validate for DeadlinesRequest {
    fn validate(&self) -> Result<(), String> {
        if self.start_date.trim().is_empty() {
            return Err("start_date must not be empty".to_string());
        }
        if self.case_type.trim().is_empty() {
            return Err("case_type must not be empty".to_string());
        }
        Ok(())
    }
}

/// One projected deadline.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeadlineResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub citation: Option<String>,
    pub days_from_start: u32,
    /// `YYYY-MM-DD`.
    pub due_date: String,
    /// Negative once the due date has passed.
    pub days_remaining: i64,
    /// `overdue`, `urgent`, `upcoming` or `future`.
    pub urgency: String,
}

/// The projected calendar.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeadlinesResponse {
    pub case_type: String,
    pub start_date: String,
    pub today: String,
    pub deadlines: Vec<DeadlineResponse>,
}

/// Build the deadline router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/deadlines", post(project_deadlines))
}

/// POST /v1/deadlines: Project and label the deadlines for a case.
#[utoipa::path(
    post,
    path = "/v1/deadlines",
    request_body = DeadlinesRequest,
    responses(
        (status = 200, description = "Deadlines sorted by due date", body = DeadlinesResponse),
        (status = 422, description = "Unparseable date or unknown case type", body = crate::error::ErrorBody),
    ),
    tag = "deadlines"
)]
pub async fn project_deadlines(
    body: Result<Json<DeadlinesRequest>, JsonRejection>,
) -> Result<Json<DeadlinesResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let start = CalendarDate::parse(&req.start_date)?;
    let case_type: CaseType = req.case_type.parse()?;
    let today = match req.today.as_deref() {
        Some(s) => CalendarDate::parse(s)?,
        None => CalendarDate::today_utc(),
    };

    let deadlines = calculate_deadlines(start, case_type, req.has_children)?;
    tracing::debug!(
        case_type = %case_type,
        count = deadlines.len(),
        "deadlines projected"
    );

    let deadlines = label_deadlines(&deadlines, today)
        .into_iter()
        .map(|labeled| DeadlineResponse {
            id: labeled.deadline.id.to_string(),
            title: labeled.deadline.title.to_string(),
            description: labeled.deadline.description.to_string(),
            citation: labeled.deadline.citation.map(str::to_string),
            days_from_start: labeled.deadline.days_from_start,
            due_date: labeled.deadline.due_date.to_string(),
            days_remaining: labeled.days_remaining,
            urgency: labeled.urgency.as_str().to_string(),
        })
        .collect();

    Ok(Json(DeadlinesResponse {
        case_type: case_type.as_str().to_string(),
        start_date: start.to_string(),
        today: today.to_string(),
        deadlines,
    }))
}

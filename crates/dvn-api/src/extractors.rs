//! # Request Validation
//!
//! Handlers take `Result<Json<T>, JsonRejection>` so a malformed body turns
//! into an [`AppError`] with the JSON envelope instead of axum's plain-text
//! rejection. DTOs with rules beyond their shape implement [`Validate`].

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Checks a request DTO cannot express through serde alone.
pub trait Validate {
    /// `Err` carries the message returned to the client.
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap a JSON body or convert the rejection.
pub fn extract_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(value) = body?;
    Ok(value)
}

/// [`extract_json`] followed by [`Validate::validate`].
pub fn extract_validated_json<T: Validate>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(body)?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}

/// Longest list accepted for `factors` or `completed`.
pub const MAX_IDS_PER_REQUEST: usize = 64;

/// Longest single id accepted in those lists.
pub const MAX_ID_LEN: usize = 100;

/// Bound the size of an id list field.
pub fn validate_id_list(field: &str, ids: &[String]) -> Result<(), String> {
    if ids.len() > MAX_IDS_PER_REQUEST {
        return Err(format!(
            "{field}: {} ids given, at most {MAX_IDS_PER_REQUEST} allowed",
            ids.len()
        ));
    }
    match ids.iter().find(|id| id.len() > MAX_ID_LEN) {
        Some(id) => Err(format!(
            "{field}: id starting {:?} is longer than {MAX_ID_LEN} bytes",
            id.chars().take(16).collect::<String>()
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_list_within_bounds() {
        assert!(validate_id_list("factors", &[]).is_ok());
        let ids: Vec<String> = (0..MAX_IDS_PER_REQUEST).map(|i| format!("id-{i}")).collect();
        assert!(validate_id_list("factors", &ids).is_ok());
    }

    #[test]
    fn id_list_too_long() {
        let ids: Vec<String> = (0..=MAX_IDS_PER_REQUEST).map(|i| i.to_string()).collect();
        let err = validate_id_list("completed", &ids).unwrap_err();
        assert!(err.starts_with("completed: 65 ids"));
    }

    #[test]
    fn id_too_long() {
        let err = validate_id_list("factors", &["x".repeat(MAX_ID_LEN + 1)]).unwrap_err();
        assert!(err.contains("longer than 100"));
    }
}

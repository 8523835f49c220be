//! Request body validation: presence and non-null checks ahead of typed decoding.

use crate::error::AppError;
use serde_json::{Map, Value};

/// Attributes a client may send for a plant. `id` is never accepted from a body.
pub const PLANT_FIELDS: &[&str] = &["name", "image", "price", "is_in_stock"];

pub struct RequestValidator;

impl RequestValidator {
    /// Every field must be present and non-null (POST).
    pub fn validate(body: &Map<String, Value>, fields: &[&str]) -> Result<(), AppError> {
        for field in fields {
            match body.get(*field) {
                None | Some(Value::Null) => {
                    return Err(AppError::Validation(format!("{} is required", field)));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Only fields present in the body are checked; they may not be null (PATCH).
    pub fn validate_partial(body: &Map<String, Value>, fields: &[&str]) -> Result<(), AppError> {
        for field in fields {
            if let Some(Value::Null) = body.get(*field) {
                return Err(AppError::Validation(format!("{} cannot be null", field)));
            }
        }
        Ok(())
    }
}

/// Unwrap a JSON object body; arrays and scalars are rejected.
pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        body_to_map(v).unwrap()
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let body = map(json!({ "name": "Fern", "image": "fern.jpg", "price": 1.0 }));
        let err = RequestValidator::validate(&body, PLANT_FIELDS).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "is_in_stock is required"));
    }

    #[test]
    fn null_counts_as_missing_on_create() {
        let body = map(json!({ "name": null, "image": "a", "price": 1, "is_in_stock": false }));
        assert!(RequestValidator::validate(&body, PLANT_FIELDS).is_err());
    }

    #[test]
    fn partial_accepts_subset_and_empty() {
        assert!(RequestValidator::validate_partial(&map(json!({ "price": 3.5 })), PLANT_FIELDS).is_ok());
        assert!(RequestValidator::validate_partial(&map(json!({})), PLANT_FIELDS).is_ok());
    }

    #[test]
    fn partial_rejects_explicit_null() {
        let err = RequestValidator::validate_partial(&map(json!({ "image": null })), PLANT_FIELDS).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn non_object_body_is_bad_request() {
        assert!(matches!(body_to_map(json!([1, 2])), Err(AppError::BadRequest(_))));
    }
}

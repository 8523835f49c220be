//! Typed JSON body extractor: decode, validate presence, then deserialize.

use crate::error::AppError;
use crate::plant::{NewPlant, PlantChanges};
use crate::validation::{body_to_map, RequestValidator, PLANT_FIELDS};
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A request payload that knows which checks run before deserialization.
pub trait RequestPayload: DeserializeOwned {
    fn validate(body: &Map<String, Value>) -> Result<(), AppError>;
}

impl RequestPayload for NewPlant {
    fn validate(body: &Map<String, Value>) -> Result<(), AppError> {
        RequestValidator::validate(body, PLANT_FIELDS)
    }
}

impl RequestPayload for PlantChanges {
    fn validate(body: &Map<String, Value>) -> Result<(), AppError> {
        RequestValidator::validate_partial(body, PLANT_FIELDS)
    }
}

/// Extractor for a validated payload. Rejects with a JSON `AppError` body instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestPayload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;
        let body = body_to_map(value)?;
        T::validate(&body)?;
        let payload = serde_json::from_value(Value::Object(body)).map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(ValidatedJson(payload))
    }
}

//! Plant id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Path ids are unsigned decimal integers; anything else names no plant and rejects with 404.
/// Runs as a parts extractor, so it is decided before any body extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlantId(pub i64);

impl PlantId {
    pub fn parse(id_str: &str) -> Result<Self, AppError> {
        if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::plant_not_found());
        }
        id_str.parse().map(PlantId).map_err(|_| AppError::plant_not_found())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PlantId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::plant_not_found())?;
        PlantId::parse(&id_str)
    }
}

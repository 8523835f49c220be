//! Plant CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::{PlantId, ValidatedJson};
use crate::plant::{NewPlant, PlantChanges};
use crate::response;
use crate::state::AppState;
use crate::store::DeleteOutcome;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// GET /plants
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plants = state.store.list_all().await?;
    Ok(response::ok_many(plants))
}

/// POST /plants
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(new_plant): ValidatedJson<NewPlant>,
) -> Result<impl IntoResponse, AppError> {
    let plant = state.store.create(&new_plant).await?;
    tracing::info!(id = plant.id, name = %plant.name, "plant created");
    Ok(response::created(plant))
}

/// GET /plants/:id
pub async fn read(State(state): State<AppState>, PlantId(id): PlantId) -> Result<impl IntoResponse, AppError> {
    let plant = state.store.get_by_id(id).await?.ok_or_else(AppError::plant_not_found)?;
    Ok(response::ok(plant))
}

/// PATCH /plants/:id. An absent plant is reported as 404 even when the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    PlantId(id): PlantId,
    payload: Result<ValidatedJson<PlantChanges>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let changes = match payload {
        Ok(ValidatedJson(changes)) => changes,
        Err(err) => {
            state.store.get_by_id(id).await?.ok_or_else(AppError::plant_not_found)?;
            return Err(err);
        }
    };
    let plant = state
        .store
        .update_by_id(id, &changes)
        .await?
        .ok_or_else(AppError::plant_not_found)?;
    tracing::info!(id, "plant updated");
    Ok(response::ok(plant))
}

/// DELETE /plants/:id. A missing plant is still 204; only get and patch report absence.
pub async fn delete(State(state): State<AppState>, PlantId(id): PlantId) -> Result<StatusCode, AppError> {
    match state.store.delete_by_id(id).await? {
        DeleteOutcome::Deleted => tracing::info!(id, "plant deleted"),
        DeleteOutcome::NotFound => tracing::debug!(id, "delete of missing plant"),
    }
    Ok(StatusCode::NO_CONTENT)
}


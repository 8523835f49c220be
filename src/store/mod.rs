//! Plant persistence: the `PlantStore` trait and its PostgreSQL and in-process implementations.

mod bootstrap;
mod memory;
mod postgres;

pub use bootstrap::{ensure_database_exists, ensure_plants_table};
pub use memory::MemoryPlantStore;
pub use postgres::PgPlantStore;

use crate::error::AppError;
use crate::plant::{NewPlant, Plant, PlantChanges};
use async_trait::async_trait;

/// Result of a delete. Both variants are a success for callers; a missing row is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Single-row operations on plants. Each call is one atomic statement against the backing store.
#[async_trait]
pub trait PlantStore: Send + Sync {
    /// Insert and return the full record with its assigned id.
    async fn create(&self, plant: &NewPlant) -> Result<Plant, AppError>;

    /// Every stored plant, ordered by id.
    async fn list_all(&self) -> Result<Vec<Plant>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Plant>, AppError>;

    /// Apply only the fields present in `changes`. `None` when no row has this id.
    async fn update_by_id(&self, id: i64, changes: &PlantChanges) -> Result<Option<Plant>, AppError>;

    async fn delete_by_id(&self, id: i64) -> Result<DeleteOutcome, AppError>;

    /// Cheap liveness check used by the readiness endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

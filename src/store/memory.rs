//! In-process plant store. Used by the HTTP tests and for embedding without a database.

use super::{DeleteOutcome, PlantStore};
use crate::error::AppError;
use crate::plant::{NewPlant, Plant, PlantChanges};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug)]
struct Rows {
    by_id: BTreeMap<i64, Plant>,
    /// Ids are never reused, matching a BIGSERIAL column.
    next_id: i64,
}

#[derive(Debug)]
pub struct MemoryPlantStore {
    rows: RwLock<Rows>,
}

impl MemoryPlantStore {
    pub fn new() -> Self {
        MemoryPlantStore {
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryPlantStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantStore for MemoryPlantStore {
    async fn create(&self, plant: &NewPlant) -> Result<Plant, AppError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        let id = rows.next_id;
        rows.next_id += 1;
        let created = plant.clone().into_plant(id);
        rows.by_id.insert(id, created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Plant>, AppError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.by_id.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Plant>, AppError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.by_id.get(&id).cloned())
    }

    async fn update_by_id(&self, id: i64, changes: &PlantChanges) -> Result<Option<Plant>, AppError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.by_id.get_mut(&id).map(|plant| {
            plant.apply(changes);
            plant.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<DeleteOutcome, AppError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        Ok(match rows.by_id.remove(&id) {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::NotFound,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

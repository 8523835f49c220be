//! PostgreSQL-backed plant store.

use super::{DeleteOutcome, PlantStore};
use crate::error::AppError;
use crate::plant::{NewPlant, Plant, PlantChanges};
use crate::sql::PlantSql;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgPlantStore {
    pool: PgPool,
    sql: PlantSql,
}

impl PgPlantStore {
    /// Store over `<schema>.plants`. The table must exist (see [`super::ensure_plants_table`]).
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgPlantStore {
            pool,
            sql: PlantSql::new(schema),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PlantStore for PgPlantStore {
    async fn create(&self, plant: &NewPlant) -> Result<Plant, AppError> {
        let sql = self.sql.insert();
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Plant>(&sql)
            .bind(&plant.name)
            .bind(&plant.image)
            .bind(plant.price)
            .bind(plant.is_in_stock)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Plant>, AppError> {
        let sql = self.sql.select_all();
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Plant>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Plant>, AppError> {
        let sql = self.sql.select_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Plant>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_by_id(&self, id: i64, changes: &PlantChanges) -> Result<Option<Plant>, AppError> {
        let Some(mut qb) = self.sql.update(id, changes) else {
            return self.get_by_id(id).await;
        };
        tracing::debug!(sql = %qb.sql(), id, "query");
        let row = qb.build_query_as::<Plant>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<DeleteOutcome, AppError> {
        let sql = self.sql.delete_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i64,)> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(match deleted {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::NotFound,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

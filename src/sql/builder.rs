//! Builds the SELECT, INSERT, UPDATE and DELETE statements for the plants table.

use crate::plant::PlantChanges;
use sqlx::{Postgres, QueryBuilder};

pub const PLANTS_TABLE: &str = "plants";

/// Column list shared by every SELECT and RETURNING clause.
const PLANT_COLUMNS: &str = r#""id", "name", "image", "price", "is_in_stock""#;

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

/// Statement text for one schema-qualified plants table. Values are always bound, never inlined.
#[derive(Clone, Debug)]
pub struct PlantSql {
    table: String,
}

impl PlantSql {
    pub fn new(schema: &str) -> Self {
        PlantSql {
            table: qualified_table(schema, PLANTS_TABLE),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// DDL for the plants table; idempotent.
    pub fn create_table(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                "id" BIGSERIAL PRIMARY KEY,
                "name" TEXT NOT NULL,
                "image" TEXT NOT NULL,
                "price" DOUBLE PRECISION NOT NULL,
                "is_in_stock" BOOLEAN NOT NULL
            )
            "#,
            self.table
        )
    }

    pub fn select_all(&self) -> String {
        format!("SELECT {} FROM {} ORDER BY \"id\"", PLANT_COLUMNS, self.table)
    }

    /// SELECT by primary key. Caller binds the id as $1.
    pub fn select_by_id(&self) -> String {
        format!("SELECT {} FROM {} WHERE \"id\" = $1", PLANT_COLUMNS, self.table)
    }

    /// INSERT of all four attributes; caller binds name, image, price, is_in_stock in that order.
    pub fn insert(&self) -> String {
        format!(
            "INSERT INTO {} (\"name\", \"image\", \"price\", \"is_in_stock\") VALUES ($1, $2, $3, $4) RETURNING {}",
            self.table, PLANT_COLUMNS
        )
    }

    /// UPDATE by id: SET only the fields present in `changes`.
    /// Returns `None` when there is nothing to set; callers fall back to [`PlantSql::select_by_id`].
    pub fn update(&self, id: i64, changes: &PlantChanges) -> Option<QueryBuilder<'static, Postgres>> {
        if changes.is_empty() {
            return None;
        }
        let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", self.table));
        let mut sets = qb.separated(", ");
        if let Some(name) = &changes.name {
            sets.push("\"name\" = ").push_bind_unseparated(name.clone());
        }
        if let Some(image) = &changes.image {
            sets.push("\"image\" = ").push_bind_unseparated(image.clone());
        }
        if let Some(price) = changes.price {
            sets.push("\"price\" = ").push_bind_unseparated(price);
        }
        if let Some(is_in_stock) = changes.is_in_stock {
            sets.push("\"is_in_stock\" = ").push_bind_unseparated(is_in_stock);
        }
        qb.push(" WHERE \"id\" = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {}", PLANT_COLUMNS));
        Some(qb)
    }

    /// DELETE by id. Caller binds the id as $1.
    pub fn delete_by_id(&self) -> String {
        format!("DELETE FROM {} WHERE \"id\" = $1 RETURNING \"id\"", self.table)
    }
}

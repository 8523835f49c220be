//! Startup DDL: create the database and the plants table when they are missing.

use crate::error::AppError;
use crate::sql::{quoted, PlantSql};
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Create the schema (unless `public`) and `<schema>.plants` if they do not exist.
pub async fn ensure_plants_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    if schema != "public" {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
            .execute(pool)
            .await?;
    }
    let sql = PlantSql::new(schema);
    sqlx::query(&sql.create_table()).execute(pool).await?;
    tracing::info!(table = %sql.table(), "plants table ready");
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database if it is absent.
/// URLs without a database name (the server then picks one) are left alone.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_connect_options(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Options for the maintenance `postgres` database on the same server, plus the target database name.
/// `None` when the URL names no database or names `postgres` itself.
fn admin_connect_options(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(url: &str) -> Option<(Option<String>, String)> {
        admin_connect_options(url)
            .unwrap()
            .map(|(opts, db)| (opts.get_database().map(str::to_string), db))
    }

    #[test]
    fn targets_named_database_via_postgres() {
        assert_eq!(
            admin("postgres://u:p@localhost:5432/plants"),
            Some((Some("postgres".to_string()), "plants".to_string()))
        );
    }

    #[test]
    fn query_string_does_not_leak_into_database_name() {
        assert_eq!(
            admin("postgres://localhost/plants?sslmode=disable"),
            Some((Some("postgres".to_string()), "plants".to_string()))
        );
        assert_eq!(
            admin("postgres:///plants?host=/var/run/postgresql"),
            Some((Some("postgres".to_string()), "plants".to_string()))
        );
    }

    #[test]
    fn url_without_database_is_left_alone() {
        assert_eq!(admin("postgres://localhost"), None);
        assert_eq!(admin("postgres://localhost/postgres"), None);
    }

    #[test]
    fn unparsable_url_is_an_error() {
        assert!(admin_connect_options("not a url").is_err());
    }
}

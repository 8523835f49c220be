// Requires a running PostgreSQL reachable via DATABASE_URL.
// To run these tests: cargo test --features postgres_tests
#![cfg(feature = "postgres_tests")]

//! PgPlantStore against a real database. Each test works in its own throwaway schema,
//! which is dropped whether the test body passes or panics.

use plant_catalog::{ensure_plants_table, DeleteOutcome, NewPlant, PgPlantStore, PlantChanges, PlantStore};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::future::Future;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres_tests");
    PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database")
}

fn unique_schema() -> String {
    format!("plants_test_{}", uuid::Uuid::new_v4().simple())
}

/// Run `test` against a fresh `plants_test_*` schema.
async fn with_test_schema<F, Fut>(test: F)
where
    F: FnOnce(PgPlantStore) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    with_named_schema(unique_schema(), test).await
}

/// Create `schema`, run `test` in its own task, drop the schema, then re-raise any panic.
async fn with_named_schema<F, Fut>(schema: String, test: F)
where
    F: FnOnce(PgPlantStore) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let pool = test_pool().await;
    ensure_plants_table(&pool, &schema).await.expect("create plants table");

    let outcome = tokio::spawn(test(PgPlantStore::new(pool.clone(), &schema))).await;

    sqlx::query(&format!("DROP SCHEMA \"{}\" CASCADE", schema))
        .execute(&pool)
        .await
        .expect("drop test schema");

    if let Err(err) = outcome {
        if err.is_panic() {
            std::panic::resume_unwind(err.into_panic());
        }
        panic!("test task failed: {err}");
    }
}

fn fern() -> NewPlant {
    NewPlant {
        name: "Fern".into(),
        image: "fern.jpg".into(),
        price: 12.5,
        is_in_stock: true,
    }
}

#[tokio::test]
async fn create_get_update_delete() {
    with_test_schema(|store| async move {
        let created = store.create(&fern()).await.unwrap();
        assert_eq!(store.get_by_id(created.id).await.unwrap(), Some(created.clone()));

        let changes = PlantChanges {
            price: Some(15.0),
            ..Default::default()
        };
        let updated = store.update_by_id(created.id, &changes).await.unwrap().unwrap();
        assert_eq!(updated.price, 15.0);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.image, created.image);
        assert_eq!(updated.is_in_stock, created.is_in_stock);

        let unchanged = store.update_by_id(created.id, &PlantChanges::default()).await.unwrap();
        assert_eq!(unchanged, Some(updated));

        assert_eq!(store.delete_by_id(created.id).await.unwrap(), DeleteOutcome::Deleted);
        assert_eq!(store.delete_by_id(created.id).await.unwrap(), DeleteOutcome::NotFound);
        assert_eq!(store.get_by_id(created.id).await.unwrap(), None);
    })
    .await;
}

#[tokio::test]
async fn list_and_missing_rows() {
    with_test_schema(|store| async move {
        assert!(store.list_all().await.unwrap().is_empty());
        let a = store.create(&fern()).await.unwrap();
        let b = store
            .create(&NewPlant {
                name: "Aloe".into(),
                image: "aloe.png".into(),
                price: 8.0,
                is_in_stock: false,
            })
            .await
            .unwrap();
        assert_eq!(store.list_all().await.unwrap(), vec![a, b]);

        let changes = PlantChanges {
            name: Some("Ghost".into()),
            ..Default::default()
        };
        assert_eq!(store.update_by_id(i64::MAX, &changes).await.unwrap(), None);
        store.ping().await.unwrap();
    })
    .await;
}

#[tokio::test]
async fn failing_body_still_drops_its_schema() {
    let schema = unique_schema();
    let result = tokio::spawn(with_named_schema(schema.clone(), |store| async move {
        store.create(&fern()).await.unwrap();
        panic!("deliberate failure");
    }))
    .await;
    assert!(result.unwrap_err().is_panic());

    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM information_schema.schemata WHERE schema_name = $1)")
            .bind(&schema)
            .fetch_one(&test_pool().await)
            .await
            .unwrap();
    assert!(!exists);
}

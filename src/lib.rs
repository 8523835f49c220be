//! Plant catalog: REST CRUD over a single `plants` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod plant;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use plant::{NewPlant, Plant, PlantChanges};
pub use response::PlantView;
pub use routes::{app, common_routes, common_routes_with_ready, plant_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_plants_table, DeleteOutcome, MemoryPlantStore, PgPlantStore, PlantStore};

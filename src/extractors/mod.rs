//! Request extractors.

pub mod json;
pub mod plant_id;

pub use json::{RequestPayload, ValidatedJson};
pub use plant_id::PlantId;

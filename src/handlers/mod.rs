//! HTTP handlers for plant CRUD.

pub mod plants;
pub use plants::*;

//! Safe SQL builder: identifiers are quoted, values are bound as parameters.

mod builder;
pub use builder::*;

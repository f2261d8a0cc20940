//! Domain model structs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct returned to API clients
//! - The document struct persisted in the collection, with conversions

pub mod movie;

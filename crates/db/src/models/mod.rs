//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for merges, where the entity
//!   supports updates

pub mod camp;
pub mod speaker;
pub mod talk;

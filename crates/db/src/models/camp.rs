//! Camp entity model and DTOs.

use codecamp_core::types::{DbId, EventDate, Timestamp};
use sqlx::FromRow;

/// A row from the `camps` table. The venue/location is stored flattened
/// on the camp row.
#[derive(Debug, Clone, FromRow)]
pub struct Camp {
    pub id: DbId,
    pub moniker: String,
    pub name: String,
    pub event_date: EventDate,
    pub length: i32,
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new camp.
///
/// `event_date` defaults to `0001-01-01` and `length` to 1 when omitted.
#[derive(Debug, Clone)]
pub struct CreateCamp {
    pub moniker: String,
    pub name: String,
    pub event_date: Option<EventDate>,
    pub length: Option<i32>,
    pub venue_name: Option<String>,
}

/// DTO for merging changes onto an existing camp. `None` fields keep their
/// stored values. The moniker is immutable and never part of an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateCamp {
    pub name: Option<String>,
    pub event_date: Option<EventDate>,
    pub length: Option<i32>,
    pub venue_name: Option<String>,
}

//! Speaker entity model and DTOs.

use codecamp_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `speakers` table.
#[derive(Debug, Clone, FromRow)]
pub struct Speaker {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new speaker.
#[derive(Debug, Clone)]
pub struct CreateSpeaker {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}

//! Talk entity model and DTOs.

use codecamp_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::speaker::Speaker;

/// A row from the `talks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Talk {
    pub id: DbId,
    pub camp_id: DbId,
    pub speaker_id: Option<DbId>,
    pub title: String,
    #[sqlx(rename = "abstract")]
    pub abstract_text: String,
    pub level: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A talk joined with its speaker, the shape the read surface serves.
#[derive(Debug, Clone)]
pub struct TalkWithSpeaker {
    pub talk: Talk,
    pub speaker: Option<Speaker>,
}

/// DTO for inserting a new talk.
#[derive(Debug, Clone)]
pub struct CreateTalk {
    pub camp_id: DbId,
    pub speaker_id: Option<DbId>,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

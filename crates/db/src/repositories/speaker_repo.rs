//! Repository for the `speakers` table.

use codecamp_core::types::DbId;
use sqlx::PgPool;

use crate::models::speaker::{CreateSpeaker, Speaker};

const COLUMNS: &str = "id, first_name, last_name, middle_name, company, \
    company_url, blog_url, twitter, git_hub, created_at, updated_at";

/// Provides operations for speakers.
pub struct SpeakerRepo;

impl SpeakerRepo {
    /// Insert a new speaker, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSpeaker) -> Result<Speaker, sqlx::Error> {
        let query = format!(
            "INSERT INTO speakers
                (first_name, last_name, middle_name, company, company_url,
                 blog_url, twitter, git_hub)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Speaker>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.middle_name)
            .bind(&input.company)
            .bind(&input.company_url)
            .bind(&input.blog_url)
            .bind(&input.twitter)
            .bind(&input.git_hub)
            .fetch_one(pool)
            .await
    }

    /// Fetch the speakers with the given ids, in no particular order.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Speaker>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM speakers WHERE id = ANY($1)");
        sqlx::query_as::<_, Speaker>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}

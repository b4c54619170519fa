//! Repository for the `camps` table.

use codecamp_core::types::EventDate;
use sqlx::PgPool;

use crate::models::camp::{Camp, CreateCamp, UpdateCamp};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, moniker, name, event_date, length, venue_name, \
    address1, address2, address3, city_town, state_province, postal_code, \
    country, created_at, updated_at";

/// Provides CRUD operations for camps, keyed by moniker.
pub struct CampRepo;

impl CampRepo {
    /// Insert a new camp, returning the created row.
    ///
    /// If `event_date` is `None`, defaults to `0001-01-01`.
    /// If `length` is `None`, defaults to 1.
    pub async fn create(pool: &PgPool, input: &CreateCamp) -> Result<Camp, sqlx::Error> {
        let query = format!(
            "INSERT INTO camps (moniker, name, event_date, length, venue_name)
             VALUES ($1, $2, COALESCE($3, DATE '0001-01-01'), COALESCE($4, 1), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camp>(&query)
            .bind(&input.moniker)
            .bind(&input.name)
            .bind(input.event_date)
            .bind(input.length)
            .bind(&input.venue_name)
            .fetch_one(pool)
            .await
    }

    /// Find a camp by its moniker.
    pub async fn find_by_moniker(
        pool: &PgPool,
        moniker: &str,
    ) -> Result<Option<Camp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM camps WHERE moniker = $1");
        sqlx::query_as::<_, Camp>(&query)
            .bind(moniker)
            .fetch_optional(pool)
            .await
    }

    /// List all camps, most recent event first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Camp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM camps ORDER BY event_date DESC, moniker");
        sqlx::query_as::<_, Camp>(&query).fetch_all(pool).await
    }

    /// List camps taking place on the given date.
    pub async fn list_by_event_date(
        pool: &PgPool,
        date: EventDate,
    ) -> Result<Vec<Camp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM camps WHERE event_date = $1 ORDER BY moniker");
        sqlx::query_as::<_, Camp>(&query)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// Merge an update onto the camp with the given moniker. Only non-`None`
    /// fields in `input` are applied; the moniker itself never changes.
    ///
    /// Returns `None` if no row with the given moniker exists.
    pub async fn update(
        pool: &PgPool,
        moniker: &str,
        input: &UpdateCamp,
    ) -> Result<Option<Camp>, sqlx::Error> {
        let query = format!(
            "UPDATE camps SET
                name = COALESCE($2, name),
                event_date = COALESCE($3, event_date),
                length = COALESCE($4, length),
                venue_name = COALESCE($5, venue_name),
                updated_at = NOW()
             WHERE moniker = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camp>(&query)
            .bind(moniker)
            .bind(&input.name)
            .bind(input.event_date)
            .bind(input.length)
            .bind(&input.venue_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a camp by moniker. Talks cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, moniker: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM camps WHERE moniker = $1")
            .bind(moniker)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `talks` table.

use std::collections::HashMap;

use codecamp_core::types::DbId;
use sqlx::PgPool;

use crate::models::speaker::Speaker;
use crate::models::talk::{CreateTalk, Talk, TalkWithSpeaker};
use crate::repositories::SpeakerRepo;

const COLUMNS: &str =
    "id, camp_id, speaker_id, title, abstract, level, created_at, updated_at";

/// Provides operations for talks.
pub struct TalkRepo;

impl TalkRepo {
    /// Insert a new talk, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTalk) -> Result<Talk, sqlx::Error> {
        let query = format!(
            "INSERT INTO talks (camp_id, speaker_id, title, abstract, level)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Talk>(&query)
            .bind(input.camp_id)
            .bind(input.speaker_id)
            .bind(&input.title)
            .bind(&input.abstract_text)
            .bind(input.level)
            .fetch_one(pool)
            .await
    }

    /// List a camp's talks with their speakers, oldest first.
    pub async fn list_with_speakers_by_camp(
        pool: &PgPool,
        camp_id: DbId,
    ) -> Result<Vec<TalkWithSpeaker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talks WHERE camp_id = $1 ORDER BY id");
        let talks = sqlx::query_as::<_, Talk>(&query)
            .bind(camp_id)
            .fetch_all(pool)
            .await?;
        join_speakers(pool, talks).await
    }

    /// List talks (with speakers) for a set of camps in one round trip,
    /// grouped by camp id.
    pub async fn list_with_speakers_by_camp_ids(
        pool: &PgPool,
        camp_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<TalkWithSpeaker>>, sqlx::Error> {
        if camp_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!("SELECT {COLUMNS} FROM talks WHERE camp_id = ANY($1) ORDER BY id");
        let talks = sqlx::query_as::<_, Talk>(&query)
            .bind(camp_ids)
            .fetch_all(pool)
            .await?;

        let mut grouped: HashMap<DbId, Vec<TalkWithSpeaker>> = HashMap::new();
        for entry in join_speakers(pool, talks).await? {
            grouped.entry(entry.talk.camp_id).or_default().push(entry);
        }
        Ok(grouped)
    }

    /// Find one talk (with speaker) by id, scoped to a camp.
    pub async fn find_with_speaker(
        pool: &PgPool,
        camp_id: DbId,
        talk_id: DbId,
    ) -> Result<Option<TalkWithSpeaker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talks WHERE camp_id = $1 AND id = $2");
        let talk = sqlx::query_as::<_, Talk>(&query)
            .bind(camp_id)
            .bind(talk_id)
            .fetch_optional(pool)
            .await?;
        match talk {
            Some(talk) => Ok(join_speakers(pool, vec![talk]).await?.pop()),
            None => Ok(None),
        }
    }
}

/// Attach speakers to talks with a single speaker lookup.
async fn join_speakers(
    pool: &PgPool,
    talks: Vec<Talk>,
) -> Result<Vec<TalkWithSpeaker>, sqlx::Error> {
    let speaker_ids: Vec<DbId> = talks.iter().filter_map(|t| t.speaker_id).collect();
    let speakers: HashMap<DbId, Speaker> = SpeakerRepo::find_by_ids(pool, &speaker_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    Ok(talks
        .into_iter()
        .map(|talk| {
            let speaker = talk.speaker_id.and_then(|id| speakers.get(&id).cloned());
            TalkWithSpeaker { talk, speaker }
        })
        .collect())
}

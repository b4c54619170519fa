//! Handlers for the `/camps/{moniker}/talks` resource (read-only).
//!
//! These routes are the targets of the `get_talks_from_camp` link. They
//! carry no hypermedia links of their own and are identical on both
//! API versions.

use axum::extract::{Path, State};
use axum::Json;
use codecamp_core::error::CoreError;
use codecamp_core::types::DbId;
use codecamp_db::models::camp::Camp;
use codecamp_db::repositories::{CampRepo, TalkRepo};

use crate::error::{AppError, AppResult};
use crate::models::TalkModel;
use crate::state::AppState;

async fn resolve_camp(state: &AppState, moniker: &str) -> AppResult<Camp> {
    CampRepo::find_by_moniker(&state.pool, moniker)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "camp",
                key: moniker.to_string(),
            })
        })
}

/// GET /api/v{1,2}/camps/{moniker}/talks
pub async fn list_talks(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> AppResult<Json<Vec<TalkModel>>> {
    let camp = resolve_camp(&state, &moniker).await?;
    let talks = TalkRepo::list_with_speakers_by_camp(&state.pool, camp.id).await?;
    Ok(Json(talks.iter().map(TalkModel::from_entity).collect()))
}

/// GET /api/v{1,2}/camps/{moniker}/talks/{id}
pub async fn get_talk(
    State(state): State<AppState>,
    Path((moniker, talk_id)): Path<(String, DbId)>,
) -> AppResult<Json<TalkModel>> {
    let camp = resolve_camp(&state, &moniker).await?;
    let talk = TalkRepo::find_with_speaker(&state.pool, camp.id, talk_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "talk",
                key: talk_id.to_string(),
            })
        })?;
    Ok(Json(TalkModel::from_entity(&talk)))
}

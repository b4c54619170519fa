//! Handlers for the `/camps` resource.
//!
//! v1 and v2 share the same policy; the version only changes the URL
//! segment links are built against, the list response shape, and which
//! media types are advertised. Each public handler is a thin
//! version-binding wrapper around a shared inner function.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use codecamp_core::error::CoreError;
use codecamp_core::links::camp_location;
use codecamp_core::media::{self, CreatePayload, Representation};
use codecamp_core::types::{ApiVersion, DbId, EventDate};
use codecamp_db::models::camp::{Camp, CreateCamp};
use codecamp_db::repositories::{CampRepo, TalkRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::{accept_header, content_type_header, link_builder};
use crate::models::{CampFriendlyModel, CampModel, CampModelForSimpleCreation, TalkModel, UpdateCampModel};
use crate::response::CollectionResponse;
use crate::state::AppState;

/// Query parameters for camp listings (`?includeTalks=`).
#[derive(Debug, Deserialize)]
pub struct CampsListParams {
    #[serde(default, rename = "includeTalks")]
    pub include_talks: bool,
}

/// Query parameters for the date search (`?theDate=&includeTalks=`).
#[derive(Debug, Deserialize)]
pub struct CampSearchParams {
    #[serde(rename = "theDate")]
    pub the_date: EventDate,
    #[serde(default, rename = "includeTalks")]
    pub include_talks: bool,
}

fn camp_not_found(moniker: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "camp",
        key: moniker.to_string(),
    })
}

// ---------------------------------------------------------------------------
// v1 handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/camps
pub async fn list_camps_v1(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CampsListParams>,
) -> AppResult<Json<Vec<CampModel>>> {
    let camps = list_inner(&state, &headers, ApiVersion::V1, params.include_talks).await?;
    Ok(Json(camps))
}

/// GET /api/v1/camps/{moniker}
pub async fn get_camp_v1(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(moniker): Path<String>,
) -> AppResult<Response> {
    get_inner(&state, &headers, ApiVersion::V1, &moniker).await
}

/// GET /api/v1/camps/search
pub async fn search_camps_v1(
    State(state): State<AppState>,
    Query(params): Query<CampSearchParams>,
) -> AppResult<Json<Vec<CampModel>>> {
    search_inner(&state, params).await
}

/// POST /api/v1/camps
pub async fn create_camp_v1(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    create_inner(&state, &headers, ApiVersion::V1, &body).await
}

/// PUT /api/v1/camps/{moniker}
pub async fn update_camp_v1(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Json(payload): Json<UpdateCampModel>,
) -> AppResult<Json<CampModel>> {
    update_inner(&state, &moniker, payload).await
}

/// DELETE /api/v1/camps/{moniker}
pub async fn delete_camp_v1(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> AppResult<StatusCode> {
    delete_inner(&state, &moniker).await
}

// ---------------------------------------------------------------------------
// v2 handlers
// ---------------------------------------------------------------------------

/// GET /api/v2/camps
///
/// Unlike v1, the v2 listing is wrapped in a `{ count, results }` envelope.
pub async fn list_camps_v2(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CampsListParams>,
) -> AppResult<Json<CollectionResponse<CampModel>>> {
    let camps = list_inner(&state, &headers, ApiVersion::V2, params.include_talks).await?;
    Ok(Json(CollectionResponse {
        count: camps.len(),
        results: camps,
    }))
}

/// GET /api/v2/camps/{moniker}
pub async fn get_camp_v2(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(moniker): Path<String>,
) -> AppResult<Response> {
    get_inner(&state, &headers, ApiVersion::V2, &moniker).await
}

/// GET /api/v2/camps/search
pub async fn search_camps_v2(
    State(state): State<AppState>,
    Query(params): Query<CampSearchParams>,
) -> AppResult<Json<Vec<CampModel>>> {
    search_inner(&state, params).await
}

/// POST /api/v2/camps
pub async fn create_camp_v2(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    create_inner(&state, &headers, ApiVersion::V2, &body).await
}

/// PUT /api/v2/camps/{moniker}
pub async fn update_camp_v2(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Json(payload): Json<UpdateCampModel>,
) -> AppResult<Json<CampModel>> {
    update_inner(&state, &moniker, payload).await
}

/// DELETE /api/v2/camps/{moniker}
pub async fn delete_camp_v2(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> AppResult<StatusCode> {
    delete_inner(&state, &moniker).await
}

/// OPTIONS /api/v{1,2}/camps
pub async fn camps_options() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::ALLOW, "GET,OPTIONS,PUT,DELETE,POST")],
    )
}

// ---------------------------------------------------------------------------
// Shared inner functions
// ---------------------------------------------------------------------------

async fn list_inner(
    state: &AppState,
    headers: &HeaderMap,
    version: ApiVersion,
    include_talks: bool,
) -> AppResult<Vec<CampModel>> {
    let camps = CampRepo::list(&state.pool).await?;

    let talks_by_camp = if include_talks {
        Some(load_talks(state, &camps).await?)
    } else {
        None
    };

    let links = link_builder(headers, version);
    let models = camps
        .iter()
        .map(|camp| {
            let talks = talks_by_camp
                .as_ref()
                .map(|grouped| grouped.get(&camp.id).cloned().unwrap_or_default());
            let mut model = CampModel::from_entity(camp, talks);
            // Every listed camp carries its own five links.
            model.links = links.links_for_camp(&camp.moniker);
            model
        })
        .collect();
    Ok(models)
}

async fn get_inner(
    state: &AppState,
    headers: &HeaderMap,
    version: ApiVersion,
    moniker: &str,
) -> AppResult<Response> {
    let representation = media::negotiate_read(version, accept_header(headers))?;

    let camp = CampRepo::find_by_moniker(&state.pool, moniker)
        .await?
        .ok_or_else(|| camp_not_found(moniker))?;

    let response = match representation {
        Representation::Plain => Json(CampModel::from_entity(&camp, None)).into_response(),
        Representation::Hateoas => {
            let mut model = CampModel::from_entity(&camp, None);
            model.links = link_builder(headers, version).links_for_camp(&camp.moniker);
            Json(model).into_response()
        }
        Representation::FriendlyHateoas => {
            let mut model = CampFriendlyModel::from_entity(&camp, None);
            model.links = link_builder(headers, version).links_for_camp(&camp.moniker);
            Json(model).into_response()
        }
    };
    Ok(response)
}

async fn search_inner(
    state: &AppState,
    params: CampSearchParams,
) -> AppResult<Json<Vec<CampModel>>> {
    let camps = CampRepo::list_by_event_date(&state.pool, params.the_date).await?;

    // An empty result set is a 404, not an empty list.
    if camps.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "camps",
            key: params.the_date.to_string(),
        }));
    }

    let talks_by_camp = if params.include_talks {
        Some(load_talks(state, &camps).await?)
    } else {
        None
    };

    let models = camps
        .iter()
        .map(|camp| {
            let talks = talks_by_camp
                .as_ref()
                .map(|grouped| grouped.get(&camp.id).cloned().unwrap_or_default());
            CampModel::from_entity(camp, talks)
        })
        .collect();
    Ok(Json(models))
}

async fn create_inner(
    state: &AppState,
    headers: &HeaderMap,
    version: ApiVersion,
    body: &[u8],
) -> AppResult<Response> {
    let payload = parse_create_payload(version, content_type_header(headers), body)?;

    if CampRepo::find_by_moniker(&state.pool, &payload.moniker)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict("Moniker is in Use".into())));
    }

    let location = camp_location(version, &payload.moniker)
        .ok_or_else(|| AppError::BadRequest("Could not use current moniker".into()))?;

    let camp = CampRepo::create(&state.pool, &payload).await?;
    let model = CampModel::from_entity(&camp, None);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(model),
    )
        .into_response())
}

/// Deserialize and validate the create payload according to the schema the
/// declared `Content-Type` selects.
fn parse_create_payload(
    version: ApiVersion,
    content_type: Option<&str>,
    body: &[u8],
) -> AppResult<CreateCamp> {
    let create = match media::negotiate_create(version, content_type)? {
        CreatePayload::Full => {
            let model: CampModel = serde_json::from_slice(body)
                .map_err(|err| AppError::BadRequest(err.to_string()))?;
            model
                .validate()
                .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;
            model.into_create()
        }
        CreatePayload::Simple => {
            let model: CampModelForSimpleCreation = serde_json::from_slice(body)
                .map_err(|err| AppError::BadRequest(err.to_string()))?;
            model
                .validate()
                .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;
            model.into_create()
        }
    };
    Ok(create)
}

async fn update_inner(
    state: &AppState,
    moniker: &str,
    payload: UpdateCampModel,
) -> AppResult<Json<CampModel>> {
    payload
        .validate()
        .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;

    let existing = CampRepo::find_by_moniker(&state.pool, moniker)
        .await?
        .ok_or_else(|| camp_not_found(moniker))?;

    let camp = CampRepo::update(&state.pool, &existing.moniker, &payload.into_update())
        .await?
        .ok_or_else(|| AppError::BadRequest(String::new()))?;

    Ok(Json(CampModel::from_entity(&camp, None)))
}

async fn delete_inner(state: &AppState, moniker: &str) -> AppResult<StatusCode> {
    CampRepo::find_by_moniker(&state.pool, moniker)
        .await?
        .ok_or_else(|| camp_not_found(moniker))?;

    let deleted = CampRepo::delete(&state.pool, moniker).await?;
    if deleted {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::BadRequest(String::new()))
    }
}

async fn load_talks(
    state: &AppState,
    camps: &[Camp],
) -> AppResult<HashMap<DbId, Vec<TalkModel>>> {
    let camp_ids: Vec<DbId> = camps.iter().map(|c| c.id).collect();
    let grouped = TalkRepo::list_with_speakers_by_camp_ids(&state.pool, &camp_ids).await?;
    Ok(grouped
        .into_iter()
        .map(|(camp_id, talks)| {
            (
                camp_id,
                talks.iter().map(TalkModel::from_entity).collect(),
            )
        })
        .collect())
}

//! HTTP-level integration tests for the v2 camps endpoints: the enveloped
//! listing, the friendly and simple-creation media types, and the nested
//! talks routes.

mod common;

use axum::http::StatusCode;
use codecamp_db::models::speaker::CreateSpeaker;
use codecamp_db::models::talk::CreateTalk;
use codecamp_db::repositories::{CampRepo, SpeakerRepo, TalkRepo};
use common::{body_json, body_text, get, get_with_accept, post_json, post_with_content_type};
use sqlx::PgPool;

const FRIENDLY: &str = "application/vnd.marvin.camp.friendly.hateoas+json";
const HATEOAS: &str = "application/vnd.marvin.hateoas+json";
const SIMPLE_CAMP: &str = "application/vnd.marvin.simplecamp+json";

fn dwx_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "DWX",
        "moniker": "DWX2020",
        "venue": "NCC Ost",
        "eventDate": "2020-06-23",
        "length": 3
    })
}

/// Insert a speaker and a talk for the given camp, returning the talk id.
async fn seed_talk(pool: &PgPool, moniker: &str) -> i64 {
    let camp = CampRepo::find_by_moniker(pool, moniker)
        .await
        .unwrap()
        .expect("camp must exist");
    let speaker = SpeakerRepo::create(
        pool,
        &CreateSpeaker {
            first_name: "Gregor".to_string(),
            last_name: "Biswanger".to_string(),
            middle_name: None,
            company: None,
            company_url: None,
            blog_url: None,
            twitter: None,
            git_hub: None,
        },
    )
    .await
    .unwrap();
    TalkRepo::create(
        pool,
        &CreateTalk {
            camp_id: camp.id,
            speaker_id: Some(speaker.id),
            title: "REST in practice".to_string(),
            abstract_text: "A walk through pragmatic REST API design.".to_string(),
            level: 200,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Listing envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_v2_wraps_results_in_envelope(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v2/camps").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["moniker"], "DWX2020");
    assert_eq!(results[0]["links"].as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_v2_includes_talks_when_requested(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;
    seed_talk(&pool, "DWX2020").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v2/camps?includeTalks=true").await).await;
    let talks = json["results"][0]["talks"].as_array().unwrap();
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0]["title"], "REST in practice");
    assert_eq!(talks[0]["level"], 200);
    assert_eq!(talks[0]["speaker"]["firstName"], "Gregor");

    // Without the flag, talks are not loaded.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v2/camps").await).await;
    assert!(json["results"][0]["talks"].is_null());
}

// ---------------------------------------------------------------------------
// Representation negotiation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_v2_hateoas_matches_contract(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;

    let app = common::build_test_app(pool);
    let response = get_with_accept(app, "/api/v2/camps/DWX2020", HATEOAS).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["links"][0],
        serde_json::json!({
            "href": "http://localhost/api/v2/camps/DWX2020",
            "rel": "self",
            "method": "GET"
        })
    );
    assert_eq!(json["links"].as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_v2_friendly_carries_derived_name_and_links(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;

    let app = common::build_test_app(pool);
    let response = get_with_accept(app, "/api/v2/camps/DWX2020", FRIENDLY).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["nameWithMoniker"], "DWX (DWX2020)");
    // The friendly shape replaces the separate name field.
    assert!(json.get("name").is_none());
    assert_eq!(json["links"].as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn friendly_accept_on_v1_falls_back_to_plain(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/camps", dwx_payload()).await;

    let app = common::build_test_app(pool);
    let response = get_with_accept(app, "/api/v1/camps/DWX2020", FRIENDLY).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "DWX");
    assert!(json.get("nameWithMoniker").is_none());
    assert_eq!(json["links"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_v2_invalid_accept_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;

    let app = common::build_test_app(pool);
    let response = get_with_accept(app, "/api/v2/camps/DWX2020", "not a media type").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Wrong media-type");
}

// ---------------------------------------------------------------------------
// Simple creation media type
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_v2_simplecamp_payload(pool: PgPool) {
    let app = common::build_test_app(pool);
    let payload = serde_json::json!({
        "name": "Simple Camp",
        "moniker": "SIMPLE",
        "eventDate": "2020-10-01"
    });
    let response = post_with_content_type(app, "/api/v2/camps", SIMPLE_CAMP, payload).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["moniker"], "SIMPLE");
    assert_eq!(json["venue"], serde_json::Value::Null);
    // The simple schema has no length field in the payload: default 1.
    assert_eq!(json["length"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn simplecamp_content_type_on_v1_is_treated_as_full(pool: PgPool) {
    // v1 does not advertise the simple schema; the body happens to satisfy
    // the full schema and is accepted as such.
    let app = common::build_test_app(pool);
    let payload = serde_json::json!({
        "name": "Simple Camp",
        "moniker": "SIMPLE"
    });
    let response = post_with_content_type(app, "/api/v1/camps", SIMPLE_CAMP, payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_v2_simplecamp_duplicate_moniker_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;

    let app = common::build_test_app(pool);
    let payload = serde_json::json!({"name": "Again", "moniker": "DWX2020"});
    let response = post_with_content_type(app, "/api/v2/camps", SIMPLE_CAMP, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Moniker is in Use");
}

// ---------------------------------------------------------------------------
// Nested talks routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_talks_for_camp(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;
    seed_talk(&pool, "DWX2020").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v2/camps/DWX2020/talks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let talks = json.as_array().unwrap();
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0]["abstract"], "A walk through pragmatic REST API design.");
    assert_eq!(talks[0]["speaker"]["lastName"], "Biswanger");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_single_talk(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v2/camps", dwx_payload()).await;
    let talk_id = seed_talk(&pool, "DWX2020").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v2/camps/DWX2020/talks/{talk_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "REST in practice");

    // Unknown talk id under a known camp.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v2/camps/DWX2020/talks/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Talks of an unknown camp.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v2/camps/NOPE/talks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// API root directory
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn api_root_lists_camps_resource(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v2/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Camps");
    assert_eq!(entries[0]["description"], "Dev Conferences");
    assert_eq!(entries[0]["links"][0]["rel"], "get_camps");
    assert_eq!(
        entries[0]["links"][0]["href"],
        "http://localhost/api/v2/camps"
    );
}

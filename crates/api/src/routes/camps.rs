//! Route definitions for camps and their nested talks.

use axum::routing::get;
use axum::Router;

use crate::handlers::{camps, talks};
use crate::state::AppState;

/// Camps routes bound to the v1 handlers.
pub fn router_v1() -> Router<AppState> {
    Router::new()
        .route(
            "/camps",
            get(camps::list_camps_v1)
                .post(camps::create_camp_v1)
                .options(camps::camps_options),
        )
        .route("/camps/search", get(camps::search_camps_v1))
        .route(
            "/camps/{moniker}",
            get(camps::get_camp_v1)
                .put(camps::update_camp_v1)
                .delete(camps::delete_camp_v1),
        )
        .route("/camps/{moniker}/talks", get(talks::list_talks))
        .route("/camps/{moniker}/talks/{id}", get(talks::get_talk))
}

/// Camps routes bound to the v2 handlers.
pub fn router_v2() -> Router<AppState> {
    Router::new()
        .route(
            "/camps",
            get(camps::list_camps_v2)
                .post(camps::create_camp_v2)
                .options(camps::camps_options),
        )
        .route("/camps/search", get(camps::search_camps_v2))
        .route(
            "/camps/{moniker}",
            get(camps::get_camp_v2)
                .put(camps::update_camp_v2)
                .delete(camps::delete_camp_v2),
        )
        .route("/camps/{moniker}/talks", get(talks::list_talks))
        .route("/camps/{moniker}/talks/{id}", get(talks::get_talk))
}

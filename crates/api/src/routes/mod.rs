//! Route tree definitions.

pub mod camps;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::api_root;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET     /                          -> api_root::get_api_root_v1
/// GET     /camps                     -> camps::list_camps_v1
/// POST    /camps                     -> camps::create_camp_v1
/// OPTIONS /camps                     -> camps::camps_options
/// GET     /camps/search              -> camps::search_camps_v1
/// GET     /camps/{moniker}           -> camps::get_camp_v1
/// PUT     /camps/{moniker}           -> camps::update_camp_v1
/// DELETE  /camps/{moniker}           -> camps::delete_camp_v1
/// GET     /camps/{moniker}/talks     -> talks::list_talks
/// GET     /camps/{moniker}/talks/{id}-> talks::get_talk
/// ```
pub fn api_routes_v1() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root::get_api_root_v1))
        .merge(camps::router_v1())
}

/// Build the `/api/v2` route tree. Same layout as v1 with the v2 handler
/// bindings (enveloped list, friendly and simple-creation media types).
pub fn api_routes_v2() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root::get_api_root_v2))
        .merge(camps::router_v2())
}

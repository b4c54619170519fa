//! API root resource directory.
//!
//! Lists the resources available under a version root, each with an entry
//! link. Currently the only resource is the camps collection.

use axum::http::HeaderMap;
use axum::Json;
use codecamp_core::types::ApiVersion;

use crate::handlers::link_builder;
use crate::models::ApiModel;

/// GET /api/v1/
pub async fn get_api_root_v1(headers: HeaderMap) -> Json<Vec<ApiModel>> {
    directory(&headers, ApiVersion::V1)
}

/// GET /api/v2/
pub async fn get_api_root_v2(headers: HeaderMap) -> Json<Vec<ApiModel>> {
    directory(&headers, ApiVersion::V2)
}

fn directory(headers: &HeaderMap, version: ApiVersion) -> Json<Vec<ApiModel>> {
    let links = link_builder(headers, version);
    Json(vec![ApiModel {
        name: "Camps".to_string(),
        description: "Dev Conferences".to_string(),
        links: vec![links.camps_link()],
    }])
}

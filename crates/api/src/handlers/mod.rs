//! Request handlers, one module per resource.

pub mod api_root;
pub mod camps;
pub mod talks;

use axum::http::{header, HeaderMap};
use codecamp_core::links::LinkBuilder;
use codecamp_core::types::ApiVersion;

/// Build a [`LinkBuilder`] for the current request.
///
/// Hypermedia hrefs are absolute URIs rooted at the request's `Host`
/// header (falling back to `localhost` when absent).
pub(crate) fn link_builder(headers: &HeaderMap, version: ApiVersion) -> LinkBuilder {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    LinkBuilder::new(format!("http://{host}"), version)
}

/// The raw `Accept` header value, if present.
pub(crate) fn accept_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ACCEPT).and_then(|v| v.to_str().ok())
}

/// The raw `Content-Type` header value, if present.
pub(crate) fn content_type_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Envelope for v2 collection responses: `{ "count": N, "results": [...] }`.
#[derive(Debug, Serialize)]
pub struct CollectionResponse<T: Serialize> {
    pub count: usize,
    pub results: Vec<T>,
}

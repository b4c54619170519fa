/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All row timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Camp event dates carry no time component.
pub type EventDate = chrono::NaiveDate;

/// The API surface a request is bound to.
///
/// v1 and v2 share one policy; they differ only in the URL version segment
/// and in which media types each surface advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// URL path segment for this version (`v1` / `v2`).
    pub fn segment(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

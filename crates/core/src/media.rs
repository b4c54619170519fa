//! Media-type negotiation for camp representations.
//!
//! The read surface serves three response shapes selected from the `Accept`
//! header; the create surface selects its payload schema from
//! `Content-Type`. Dispatch happens over the normalized media-type essence
//! (type/subtype with parameters stripped), except for the friendly
//! representation, which is matched against the raw header string before
//! any parsing takes place.

use crate::error::CoreError;
use crate::types::ApiVersion;

/// Default representation: plain JSON, no hypermedia links.
pub const APPLICATION_JSON: &str = "application/json";

/// HATEOAS representation: camp body plus five navigational links.
pub const HATEOAS_JSON: &str = "application/vnd.marvin.hateoas+json";

/// Friendly HATEOAS representation: derived display name plus links.
/// Only the v2 surface advertises this type.
pub const FRIENDLY_HATEOAS_JSON: &str = "application/vnd.marvin.camp.friendly.hateoas+json";

/// Reduced create payload schema. Only the v2 surface accepts this type.
pub const SIMPLE_CAMP_JSON: &str = "application/vnd.marvin.simplecamp+json";

/// Response shape selected for a read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Base shape, empty link sequence.
    Plain,
    /// Base shape plus the five-link sequence.
    Hateoas,
    /// Alternate shape with the derived display name, plus the five links.
    FriendlyHateoas,
}

/// Request payload schema selected for a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePayload {
    Full,
    Simple,
}

/// Select the response shape for a read request from its `Accept` header.
///
/// A missing header selects the plain shape. The header is treated as a
/// single media type: a value that does not parse as one (including a
/// multi-entry accept list) is rejected with [`CoreError::InvalidMediaType`].
/// Any parseable type that is not one of the advertised vendor types falls
/// back to the plain shape.
pub fn negotiate_read(version: ApiVersion, accept: Option<&str>) -> Result<Representation, CoreError> {
    let Some(raw) = accept else {
        return Ok(Representation::Plain);
    };

    // The friendly representation is selected on the raw header string,
    // before parsing.
    if version == ApiVersion::V2 && raw.trim() == FRIENDLY_HATEOAS_JSON {
        return Ok(Representation::FriendlyHateoas);
    }

    let parsed: mime::Mime = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidMediaType)?;

    match parsed.essence_str() {
        HATEOAS_JSON => Ok(Representation::Hateoas),
        _ => Ok(Representation::Plain),
    }
}

/// Select the payload schema for a create request from its `Content-Type`.
///
/// The simple schema is only reachable on v2; everything else (including a
/// missing header) selects the full schema.
pub fn negotiate_create(
    version: ApiVersion,
    content_type: Option<&str>,
) -> Result<CreatePayload, CoreError> {
    let Some(raw) = content_type else {
        return Ok(CreatePayload::Full);
    };

    let parsed: mime::Mime = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidMediaType)?;

    if version == ApiVersion::V2 && parsed.essence_str() == SIMPLE_CAMP_JSON {
        return Ok(CreatePayload::Simple);
    }

    Ok(CreatePayload::Full)
}

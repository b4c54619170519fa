//! Hypermedia link assembly for camp resources.
//!
//! Every HATEOAS representation of a camp carries the same five links in a
//! fixed order: self, get_talks_from_camp, delete_camp, edit_camp,
//! create_camp. Links are absolute URIs built from the request's
//! scheme-and-authority; the `Location` header for a created camp uses the
//! path-only form.

use serde::Serialize;

use crate::types::ApiVersion;

/// One hypermedia affordance attached to a resource representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDto {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl LinkDto {
    pub fn new(href: impl Into<String>, rel: &str, method: &str) -> Self {
        Self {
            href: href.into(),
            rel: rel.to_string(),
            method: method.to_string(),
        }
    }
}

/// Builds camp-scoped links for one request.
///
/// `base` is the request's scheme-and-authority, e.g. `http://localhost:3000`.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
    version: ApiVersion,
}

impl LinkBuilder {
    pub fn new(base: impl Into<String>, version: ApiVersion) -> Self {
        Self {
            base: base.into(),
            version,
        }
    }

    fn camps_root(&self) -> String {
        format!("{}/api/{}/camps", self.base, self.version.segment())
    }

    /// The canonical five-link sequence for one camp.
    ///
    /// Order is significant: self, get_talks_from_camp, delete_camp,
    /// edit_camp, create_camp.
    pub fn links_for_camp(&self, moniker: &str) -> Vec<LinkDto> {
        let self_href = format!("{}/{moniker}", self.camps_root());
        vec![
            LinkDto::new(self_href.clone(), "self", "GET"),
            LinkDto::new(format!("{self_href}/talks"), "get_talks_from_camp", "GET"),
            LinkDto::new(self_href.clone(), "delete_camp", "DELETE"),
            LinkDto::new(self_href, "edit_camp", "PUT"),
            LinkDto::new(self.camps_root(), "create_camp", "POST"),
        ]
    }

    /// Link to the camps collection, used by the API root directory.
    pub fn camps_link(&self) -> LinkDto {
        LinkDto::new(self.camps_root(), "get_camps", "GET")
    }
}

/// Resolve the path-only `Location` for a newly created camp.
///
/// Returns `None` when the moniker cannot form a single path segment
/// (empty, all whitespace, or containing a path or query delimiter); the
/// create handler rejects such monikers.
pub fn camp_location(version: ApiVersion, moniker: &str) -> Option<String> {
    if moniker.trim().is_empty() || moniker.contains(['/', '?', '#']) {
        return None;
    }
    Some(format!("/api/{}/camps/{moniker}", version.segment()))
}

//! Wire models for the HTTP surface and their entity conversions.
//!
//! Field names follow the public JSON contract (camelCase). Conversions
//! are explicit functions per (entity, model) pair rather than a generic
//! mapping layer.

use codecamp_core::links::LinkDto;
use codecamp_core::types::EventDate;
use codecamp_db::models::camp::{Camp, CreateCamp, UpdateCamp};
use codecamp_db::models::speaker::Speaker;
use codecamp_db::models::talk::TalkWithSpeaker;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_event_date() -> EventDate {
    EventDate::from_ymd_opt(1, 1, 1).expect("valid date")
}

fn default_length() -> i32 {
    1
}

/// Full camp representation; also the default create payload.
///
/// `links` is always serialized: an empty array for plain representations,
/// the five-link sequence for HATEOAS ones. It is never read from input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CampModel {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub moniker: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default = "default_event_date")]
    pub event_date: EventDate,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_length")]
    pub length: i32,
    #[serde(default, skip_deserializing)]
    pub talks: Option<Vec<TalkModel>>,
    #[serde(default, skip_deserializing)]
    pub links: Vec<LinkDto>,
}

impl CampModel {
    /// Map a camp row (and optionally its talks) to the wire shape.
    /// The link sequence starts empty.
    pub fn from_entity(camp: &Camp, talks: Option<Vec<TalkModel>>) -> Self {
        Self {
            name: camp.name.clone(),
            moniker: camp.moniker.clone(),
            venue: camp.venue_name.clone(),
            event_date: camp.event_date,
            length: camp.length,
            talks,
            links: Vec::new(),
        }
    }

    pub fn into_create(self) -> CreateCamp {
        CreateCamp {
            moniker: self.moniker,
            name: self.name,
            event_date: Some(self.event_date),
            length: Some(self.length),
            venue_name: self.venue,
        }
    }
}

/// Alternate camp representation carrying the derived display name
/// `"{name} ({moniker})"`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampFriendlyModel {
    pub name_with_moniker: String,
    pub venue: Option<String>,
    pub event_date: EventDate,
    pub length: i32,
    pub talks: Option<Vec<TalkModel>>,
    pub links: Vec<LinkDto>,
}

impl CampFriendlyModel {
    pub fn from_entity(camp: &Camp, talks: Option<Vec<TalkModel>>) -> Self {
        Self {
            name_with_moniker: format!("{} ({})", camp.name, camp.moniker),
            venue: camp.venue_name.clone(),
            event_date: camp.event_date,
            length: camp.length,
            talks,
            links: Vec::new(),
        }
    }
}

/// Reduced create payload accepted by the v2 surface.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CampModelForSimpleCreation {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub moniker: String,
    #[serde(default = "default_event_date")]
    pub event_date: EventDate,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_length")]
    pub length: i32,
}

impl CampModelForSimpleCreation {
    pub fn into_create(self) -> CreateCamp {
        CreateCamp {
            moniker: self.moniker,
            name: self.name,
            event_date: Some(self.event_date),
            length: Some(self.length),
            venue_name: None,
        }
    }
}

/// Update payload for PUT. Absent fields keep their stored values; the
/// moniker comes from the URL and is never updated.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampModel {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub venue: Option<String>,
    pub event_date: Option<EventDate>,
    #[validate(range(min = 1, max = 100))]
    pub length: Option<i32>,
}

impl UpdateCampModel {
    pub fn into_update(self) -> UpdateCamp {
        UpdateCamp {
            name: self.name,
            event_date: self.event_date,
            length: self.length,
            venue_name: self.venue,
        }
    }
}

/// Talk representation, embedded in camps and served by the talks routes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkModel {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub level: i32,
    pub speaker: Option<SpeakerModel>,
}

impl TalkModel {
    pub fn from_entity(entry: &TalkWithSpeaker) -> Self {
        Self {
            title: entry.talk.title.clone(),
            abstract_text: entry.talk.abstract_text.clone(),
            level: entry.talk.level,
            speaker: entry.speaker.as_ref().map(SpeakerModel::from_entity),
        }
    }
}

/// Speaker representation, embedded in talks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerModel {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}

impl SpeakerModel {
    pub fn from_entity(speaker: &Speaker) -> Self {
        Self {
            first_name: speaker.first_name.clone(),
            last_name: speaker.last_name.clone(),
            middle_name: speaker.middle_name.clone(),
            company: speaker.company.clone(),
            company_url: speaker.company_url.clone(),
            blog_url: speaker.blog_url.clone(),
            twitter: speaker.twitter.clone(),
            git_hub: speaker.git_hub.clone(),
        }
    }
}

/// One entry in the API root resource directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiModel {
    pub name: String,
    pub description: String,
    pub links: Vec<LinkDto>,
}

//! DTOs for fall incident registration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// Lookup ids that unlock the matching `*_other` free text field.
pub mod other {
    /// Lookup type 31.
    pub const LOCATION: i32 = 9;
    /// Lookup type 32.
    pub const NATURE_OF_FALL: i32 = 6;
    /// Lookup type 33.
    pub const PEOPLE_PRESENT: i32 = 11;
    /// Lookup type 35.
    pub const SUSPECTED_CAUSE: i32 = 7;
}

/// "Nobody present" in `people_present_on_fall`. Must be the only entry.
pub const NOBODY_PRESENT: i32 = 0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFallIncidentsParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids, see [`id_list`](super::id_list).
    #[serde(rename = "ResidentIDList", skip_serializing_if = "Option::is_none")]
    pub resident_id_list: Option<String>,
    /// `Some(false)` returns only inactive incidents, `None` all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub from_date: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub until_date: Option<NaiveDateTime>,
}

/// A new fall incident. The coded fields are lookup value ids: location is
/// type 31, nature of fall 32, people present 33, injury 34, suspected cause
/// 35 and historical background 47.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterFallIncidentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    /// `None` registers the incident for the session's user.
    #[serde(rename = "UserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    pub location: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_other: Option<String>,
    pub nature_of_fall: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature_of_fall_other: Option<String>,
    pub people_present_on_fall: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_present_on_fall_other: Option<String>,
    pub injury_by_fall: i32,
    pub suspected_cause: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspected_cause_other: Option<String>,
    pub was_using_freedom_restricted_measures: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freedom_restricted_measure_desc: Option<String>,
    pub family_was_informed: bool,
    pub doctor_was_informed: bool,
    pub historical_background: i32,
    #[serde(with = "crate::dates")]
    pub fall_time_stamp: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Module ids from `get_mod_linkables`, comma separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_to_modules: Option<String>,
    /// Only `Some(false)` suppresses the diary observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_diary: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FallIncident {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "UserID")]
    pub user_id: i32,
    #[serde(with = "crate::dates")]
    pub care_date: NaiveDateTime,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
    pub location: i32,
    pub location_other: Option<String>,
    pub nature_of_fall: i32,
    pub nature_of_fall_other: Option<String>,
    pub people_present_on_fall: Vec<i32>,
    pub people_present_on_fall_other: Option<String>,
    pub injury_by_fall: i32,
    pub suspected_cause: i32,
    pub suspected_cause_other: Option<String>,
    pub was_using_freedom_restricted_measures: Option<bool>,
    pub freedom_restricted_measure_desc: Option<String>,
    #[serde(with = "crate::dates")]
    pub created_on: NaiveDateTime,
    pub family_was_informed: bool,
    pub is_active: bool,
    pub doctor_was_informed: bool,
    pub historical_background: Option<i32>,
    #[serde(with = "crate::dates")]
    pub fall_time_stamp: NaiveDateTime,
    pub remarks: Option<String>,
}

impl RegisterFallIncidentParameters {
    /// Marks the resident as alone when the fall happened.
    pub fn nobody_present(mut self) -> Self {
        self.people_present_on_fall = vec![NOBODY_PRESENT];
        self.people_present_on_fall_other = None;
        self
    }
}

//! DTOs for parameter measurements, observations and action registrations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// A measurable parameter type (weight, pulse, blood pressure, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    /// Whether `ParamDetail` values exist for this parameter.
    pub has_details: bool,
    pub param_unit: Option<String>,
    pub decimals: i32,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetParamDetailParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ParamListID", skip_serializing_if = "Option::is_none")]
    pub param_list_id: Option<i32>,
}

/// Qualifier of a measured value, e.g. "weak" for a pulse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ParamDetail {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ParamListID")]
    pub param_list_id: i32,
    pub description: Option<String>,
}

/// A care action that can be registered or planned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ActionList {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    pub is_custom_action: bool,
    #[serde(rename = "ParentID")]
    pub parent_id: i32,
    pub can_register: bool,
}

/// Records one measured value.
///
/// Blood pressure goes either as two calls (systolic id 2, diastolic id 3)
/// or as one call on id 13 with both values packed: 110/55 is `110055`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertParamParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ParamListID")]
    pub param_list_id: u8,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    pub value: f64,
    /// `ParamDetail` id qualifying the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value2: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(with = "crate::dates")]
    pub stamp: NaiveDateTime,
    pub observation: bool,
    pub in_diary: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateObservationParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates")]
    pub care_date: NaiveDateTime,
    #[serde(rename = "CareMomentID", skip_serializing_if = "Option::is_none")]
    pub care_moment_id: Option<u8>,
    pub remarks: String,
    /// Comma separated modlinkable tree ids the observation shows up in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_to_modules: Option<String>,
    pub diary: bool,
    #[serde(rename = "ActionListID", skip_serializing_if = "Option::is_none")]
    pub action_list_id: Option<i16>,
    /// Link of the care plan item being executed.
    #[serde(rename = "LinkTaskID", skip_serializing_if = "Option::is_none")]
    pub link_task_id: Option<i32>,
}

/// Registers an action as executed.
///
/// Set either `stamp` or the pair `care_date` and `care_moment_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRegistrationParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stamp: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub care_date: Option<NaiveDateTime>,
    #[serde(rename = "CareMomentID", skip_serializing_if = "Option::is_none")]
    pub care_moment_id: Option<u8>,
    #[serde(rename = "ActionListID", skip_serializing_if = "Option::is_none")]
    pub action_list_id: Option<i16>,
}

impl CreateRegistrationParameters {
    pub fn at(
        session_id: SessionId,
        resident_id: i32,
        action_list_id: i16,
        stamp: NaiveDateTime,
    ) -> Self {
        Self {
            session_id,
            resident_id,
            stamp: Some(stamp),
            action_list_id: Some(action_list_id),
            ..Self::default()
        }
    }
}

//! DTOs for the care plan: care moments, planned items and their signatures.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// A shift of the care day.
///
/// A care day starts with the first moment and runs past midnight until the
/// last moment ends, so 02:00 on the 11th can belong to care day the 10th.
/// Homes configure between two and eight moments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CareMoment {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    /// `"1000"` for 10:00.
    pub start_time: Option<String>,
    pub name: Option<String>,
    pub start_hour: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCarePlanForResidentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentID")]
    pub resident_id: String,
    #[serde(with = "crate::dates")]
    pub care_date: NaiveDateTime,
    /// Comma separated care moment ids.
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CarePlanItem {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ComfortMaterialID")]
    pub comfort_material_id: i32,
    /// Module the task was planned in.
    pub module: i32,
    pub remarks: Option<String>,
    /// Original time of informational items not bound to a care moment.
    #[serde(with = "crate::dates::option")]
    pub hour: Option<NaiveDateTime>,
    pub description: Option<String>,
    /// Full name of the resident.
    pub resident: Option<String>,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    pub room: Option<String>,
    /// Added or changed in the last seven days.
    pub care_plan_changed: bool,
    pub sort_order: i32,
    #[serde(rename = "ActionListID")]
    pub action_list_id: i32,
    #[serde(rename = "ParamListID")]
    pub param_list_id: Option<i32>,
    /// Passed back as `link` when signing.
    #[serde(rename = "LinkTaskID")]
    pub link_task_id: i32,
    /// User who signed the item, if anyone did.
    #[serde(rename = "UserID")]
    pub user_id: Option<i32>,
    pub is_nurse_item: bool,
    pub is_informational: bool,
    pub is_not_done: Option<bool>,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
}

impl CarePlanItem {
    /// Nobody signed the item yet, neither as done nor as not done.
    pub fn needs_signature(&self) -> bool {
        !self.is_informational && self.user_id.is_none() && self.is_not_done.is_none()
    }
}

/// Signs a planned task as done (`SignPlannedTask`) or not done
/// (`SignPlannedTaskNotDone`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignPlannedTaskParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    /// Care date as sent back by the care plan.
    pub care_date: String,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
    #[serde(rename = "ActionListID")]
    pub action_list_id: i32,
    /// `link_task_id` of the planned item.
    pub link: i32,
    /// Only for tasks planned by third-party applications.
    #[serde(rename = "ModuleID", skip_serializing_if = "Option::is_none")]
    pub module_id: Option<i32>,
}

impl SignPlannedTaskParameters {
    /// Signature for an item of the care plan for `care_date`.
    pub fn for_item(session_id: SessionId, item: &CarePlanItem, care_date: NaiveDateTime) -> Self {
        Self {
            session_id,
            resident_id: item.resident_id,
            care_date: crate::dates::format(&care_date),
            care_moment_id: item.care_moment_id,
            action_list_id: item.action_list_id,
            link: item.link_task_id,
            module_id: None,
        }
    }
}

/// Registers the value of a planned parameter measurement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignPlannedParamParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ParamListID", skip_serializing_if = "Option::is_none")]
    pub param_list_id: Option<u8>,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(rename = "CareMomentID", skip_serializing_if = "Option::is_none")]
    pub care_moment_id: Option<u8>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub care_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value2: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<bool>,
    /// Observation text; only with `observation` set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_diary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<i32>,
}

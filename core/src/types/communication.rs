//! DTOs for the communication inbox, the diary, appointments and the modules
//! messages can be linked to.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkCommunicationAsReadParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "CommunicationID")]
    pub communication_id: i32,
    /// `false` marks the message unread again.
    pub read: bool,
}

/// Bulk variant: every message up to `max_communication_id`, optionally for
/// one resident.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkAllCommunicationAsReadParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    pub read: bool,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(rename = "MaxCommunicationID", skip_serializing_if = "Option::is_none")]
    pub max_communication_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAppointmentsParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Resident filter; `None` for every resident.
    #[serde(rename = "SeniorID", skip_serializing_if = "Option::is_none")]
    pub senior_id: Option<i32>,
    #[serde(with = "crate::dates")]
    pub date_from: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub date_until: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AppointmentType {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Appointment {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "AppointmentTypeID")]
    pub appointment_type_id: i32,
    pub appointment_type: Option<String>,
    #[serde(with = "crate::dates")]
    pub appointment_date: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub start_time: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub end_time: NaiveDateTime,
    pub comment: Option<String>,
    pub all_day: bool,
}

/// Adds an appointment to a resident's calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAppointmentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "AppointmentTypeID")]
    pub appointment_type_id: i32,
    #[serde(with = "crate::dates")]
    pub start_time: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub end_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub item_in_diary: bool,
    /// Also show it as an informational item on the care plan.
    #[serde(rename = "ItemOnPlanng")]
    pub item_on_planning: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCommunicationItemsParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ModuleID")]
    pub module_id: i32,
    /// 0 unread only, 1 read only, `None` both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<i16>,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
}

/// A message sent to a communication module (doctor, family).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommunicationItem {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ModuleID")]
    pub module_id: i32,
    pub description: Option<String>,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
    pub remarks: Option<String>,
    pub done: bool,
    pub priority: i32,
    #[serde(rename = "UserID")]
    pub user_id: i32,
    pub checked: bool,
    /// Care date the item was sent on.
    #[serde(with = "crate::dates")]
    pub communication_date: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub stamp: NaiveDateTime,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    pub diary: bool,
    #[serde(rename = "ActionListID")]
    pub action_list_id: i32,
    pub link: i32,
    pub read_by_user: bool,
    pub reported_by_user: Option<String>,
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    /// Full name of the resident.
    pub resident: Option<String>,
}

/// Replies to a message, or starts a thread when `communication_id` is
/// `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RespondToCommunicationParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "CommunicationID", skip_serializing_if = "Option::is_none")]
    pub communication_id: Option<i32>,
    /// Server time when `None`.
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stamp: Option<NaiveDateTime>,
    pub remarks: String,
    /// Comma separated modlinkable tree ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_to_modules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diary: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDiaryParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(with = "crate::dates")]
    pub date_from: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub date_until: NaiveDateTime,
}

/// Diary entry of a resident, as returned by `GetDiary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Diary {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates")]
    pub diary_date: NaiveDateTime,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
    /// Day and care moment, e.g. `Tuesday - Afternoon (14-16)`.
    pub day: Option<String>,
    #[serde(rename = "ActionListID")]
    pub action_list_id: i32,
    pub description: Option<String>,
    pub remarks: Option<String>,
    #[serde(rename = "UserID")]
    pub user_id: i32,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDiaryParametersV2 {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(rename = "DepartmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    #[serde(with = "crate::dates")]
    pub date_from: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub date_until: NaiveDateTime,
    pub get_resident_diary: bool,
    /// Entries not tied to a resident.
    pub get_general_diary: bool,
}

/// Diary entry that may also be general (`resident_id` is `None`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DiaryV2 {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: Option<i32>,
    #[serde(with = "crate::dates")]
    pub diary_date: NaiveDateTime,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
    pub day: Option<String>,
    #[serde(rename = "ActionListID")]
    pub action_list_id: i32,
    pub description: Option<String>,
    pub remarks: Option<String>,
    #[serde(rename = "UserID")]
    pub user_id: i32,
    pub user_name: Option<String>,
    #[serde(rename = "DepartmentID")]
    pub department_id: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Module {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    pub module_group: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetModLinkablesParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentID")]
    pub resident_id: String,
    /// Leave the general modules out.
    pub resident_specific_only: bool,
}

/// A node of the module tree an observation or message can be linked to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModLinkable {
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "TreeID")]
    pub tree_id: Option<String>,
    #[serde(rename = "ParentTreeID")]
    pub parent_tree_id: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "LinkID")]
    pub link_id: i64,
    pub allow_link: bool,
    pub is_resident_specific: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn appointment_keeps_planning_wire_name() {
        let at = |h| {
            chrono::NaiveDate::from_ymd_opt(2024, 2, 1)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        let params = CreateAppointmentParameters {
            session_id: SessionId::new("s"),
            resident_id: 5,
            appointment_type_id: 2,
            start_time: at(9),
            end_time: at(10),
            comment: None,
            item_in_diary: true,
            item_on_planning: true,
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["ItemOnPlanng"], true);
        assert_eq!(value["StartTime"], "2024-02-01T09:00:00");
        assert!(value.get("Comment").is_none());
    }

    #[test]
    fn general_diary_entry_has_no_resident() {
        let entry: DiaryV2 = serde_json::from_value(json!({
            "ID": 8,
            "ResidentID": null,
            "DiaryDate": "2024-02-01T00:00:00",
            "Remarks": "Fire drill at 14:00",
            "DepartmentID": 2
        }))
        .unwrap();
        assert!(entry.resident_id.is_none());
        assert_eq!(entry.department_id, Some(2));
    }
}

//! DTOs for the popup notifications shown in the care apps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SessionId;

/// Longest lifetime the service keeps a notification; longer requests are cut.
pub const MAX_TIME_TO_LIVE_SECS: i32 = 600;

/// A notification held in the server cache until `expires_on`.
///
/// `icon_class` is a glyphicons class name, `glyphicons-info-sign` when
/// blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AppNotification {
    #[serde(rename = "ID")]
    pub id: Uuid,
    pub text: Option<String>,
    pub icon_class: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "LinkedRoomID")]
    pub linked_room_id: Option<i32>,
    #[serde(rename = "LinkedResidentID")]
    pub linked_resident_id: Option<i32>,
    #[serde(rename = "ShowOnlyForDepartmentIDs")]
    pub show_only_for_department_ids: Vec<i32>,
    #[serde(with = "crate::dates")]
    pub expires_on: NaiveDateTime,
}

/// Creates a notification when `id` is `None`, replaces notification `id`
/// otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditAppNotificationParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "LinkedRoomID", skip_serializing_if = "Option::is_none")]
    pub linked_room_id: Option<i32>,
    #[serde(rename = "LinkedResidentID", skip_serializing_if = "Option::is_none")]
    pub linked_resident_id: Option<i32>,
    /// Comma separated department ids, see [`id_list`](super::id_list).
    #[serde(rename = "ShowOnlyForDepartmentIDs", skip_serializing_if = "Option::is_none")]
    pub show_only_for_department_ids: Option<String>,
    /// Capped at [`MAX_TIME_TO_LIVE_SECS`] by the service.
    pub time_to_live_in_sec: i32,
}

impl EditAppNotificationParameters {
    pub fn new(session_id: SessionId, text: impl Into<String>, time_to_live_in_sec: i32) -> Self {
        Self {
            session_id,
            text: text.into(),
            time_to_live_in_sec: time_to_live_in_sec.min(MAX_TIME_TO_LIVE_SECS),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveAppNotificationParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ID")]
    pub id: Uuid,
}

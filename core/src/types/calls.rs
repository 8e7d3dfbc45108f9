//! DTOs for the nurse call system.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetCallByIdParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// The call's `external_id`.
    #[serde(rename = "CallID")]
    pub call_id: String,
}

/// A nurse or emergency call raised from a room.
///
/// Older shape: `start` and `stop` always carry a value, open calls report
/// a default stop time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Call {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "RoomID")]
    pub room_id: i32,
    #[serde(with = "crate::dates")]
    pub start: NaiveDateTime,
    #[serde(with = "crate::dates::option")]
    pub presence: Option<NaiveDateTime>,
    #[serde(with = "crate::dates")]
    pub stop: NaiveDateTime,
    #[serde(rename = "UserID")]
    pub user_id: i32,
    pub priority: i32,
    pub description: Option<String>,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "ExternalID")]
    pub external_id: Option<String>,
    #[serde(rename = "CallReasonID")]
    pub call_reason_id: Option<i32>,
}

/// A nurse call with nullable timestamps; `stop` is `None` while it is open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CallV2 {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "RoomID")]
    pub room_id: i32,
    #[serde(with = "crate::dates::option")]
    pub start: Option<NaiveDateTime>,
    #[serde(with = "crate::dates::option")]
    pub presence: Option<NaiveDateTime>,
    #[serde(with = "crate::dates::option")]
    pub stop: Option<NaiveDateTime>,
    #[serde(rename = "UserID")]
    pub user_id: i32,
    pub priority: i32,
    pub description: Option<String>,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "ExternalID")]
    pub external_id: Option<String>,
    #[serde(rename = "CallReasonID")]
    pub call_reason_id: Option<i32>,
}

impl CallV2 {
    pub fn is_open(&self) -> bool {
        self.stop.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCallsForResidentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(with = "crate::dates")]
    pub date_from: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub date_until: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCallsForUserParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Defaults to the session's user.
    #[serde(rename = "UserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(with = "crate::dates")]
    pub date_from: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub date_until: NaiveDateTime,
    pub get_closed_calls: bool,
    pub get_open_calls: bool,
}

/// Why a call was made, or what was done to answer it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CallReason {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Desc")]
    pub description: Option<String>,
    pub active: bool,
}

/// Creates a call, or updates the one whose external id is `call_id`.
///
/// On update only the `Some` fields change. Creation needs `start`,
/// `room_desc` and `priority`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditCallForResidentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "CallID")]
    pub call_id: String,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub presence: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(rename = "UserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inferred from the room when `None` on creation.
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(rename = "CallReasonID", skip_serializing_if = "Option::is_none")]
    pub call_reason_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_sends_only_changed_fields() {
        let stop = chrono::NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(3, 12, 0)
            .unwrap();
        let params = EditCallForResidentParameters {
            session_id: SessionId::new("s"),
            call_id: "nc-8841".to_string(),
            stop: Some(stop),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "SessionID": "s", "CallID": "nc-8841", "Stop": "2024-02-01T03:12:00" })
        );
    }

    #[test]
    fn open_call_has_no_stop() {
        let call: CallV2 = serde_json::from_value(json!({
            "ID": 3,
            "Start": "2024-02-01T03:10:00",
            "Stop": null
        }))
        .unwrap();
        assert!(call.is_open());
    }
}

//! DTOs for the admission waiting list.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// Creates an entry when `id` is `None`, updates entry `id` otherwise.
///
/// `civil_state` is a lookup value of type 3. `country` and `nationality`
/// are country codes. `preferred_language` is 1 for Dutch and 2 for French.
/// `waiting_list_status` comes from
/// [`get_waiting_list_status`](crate::WzsServiceClient::get_waiting_list_status).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditWaitingListEntryParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_for_admission: Option<String>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub enlist_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Firstname", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    /// `true` is male, `false` female.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<bool>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub civil_state: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_is_urgent: Option<bool>,
    /// Free text, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_short_stay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_list_status: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_anamnesis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_is_preventive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<u8>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub planned_admission_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_room: Option<i16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWaitingListEntriesParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated entry ids, see [`id_list`](super::id_list). `None`
    /// returns every entry.
    #[serde(rename = "WaitingListEntryID", skip_serializing_if = "Option::is_none")]
    pub waiting_list_entry_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_list_status: Option<i16>,
}

/// Writes contact 1 or 2 of an entry. The service keeps at most two.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditWaitingListContactParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "WaitingListEntryID")]
    pub waiting_list_entry_id: i32,
    pub contact_number: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<u8>,
    /// Lookup value of type 87.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_to_resident: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// See [`communication_method`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_communication_method: Option<i16>,
}

/// Values of `preferred_communication_method`.
pub mod communication_method {
    pub const LETTER: i16 = 0;
    pub const EMAIL: i16 = 1;
    pub const PHONE: i16 = 2;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveWaitingListContactParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "WaitingListEntryID")]
    pub waiting_list_entry_id: i32,
    pub contact_number: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WaitingListEntry {
    #[serde(rename = "ID")]
    pub id: i32,
    pub reason_for_admission: Option<String>,
    #[serde(with = "crate::dates::option")]
    pub enlist_date: Option<NaiveDateTime>,
    pub name: Option<String>,
    #[serde(rename = "Firstname")]
    pub first_name: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub sex: Option<bool>,
    #[serde(with = "crate::dates::option")]
    pub date_of_birth: Option<NaiveDateTime>,
    pub phone: Option<String>,
    pub partner_name: Option<String>,
    pub partner_first_name: Option<String>,
    pub civil_state: Option<u8>,
    pub admission_is_urgent: Option<bool>,
    pub room_type: Option<String>,
    pub remarks: Option<String>,
    pub is_short_stay: Option<bool>,
    /// Set once the entry led to an admission.
    #[serde(rename = "ResidentID")]
    pub resident_id: Option<i32>,
    pub waiting_list_status: Option<i32>,
    pub medical_anamnesis: Option<String>,
    pub admission_is_preventive: Option<bool>,
    pub country: Option<i32>,
    #[serde(with = "crate::dates")]
    pub created_on: NaiveDateTime,
    #[serde(with = "crate::dates::option")]
    pub modified_on: Option<NaiveDateTime>,
    pub nationality: Option<i32>,
    pub nat_number: Option<String>,
    pub email: Option<String>,
    pub preferred_language: Option<u8>,
    #[serde(with = "crate::dates::option")]
    pub planned_admission_date: Option<NaiveDateTime>,
    pub planned_room: Option<i32>,
    pub contacts: Vec<WaitingListContact>,
    pub katz_score: Option<WaitingListKatzScore>,
}

/// One of the statuses an entry can carry. Homes add their own on top of the
/// installed defaults; `is_user_created_status` tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WaitingListStatus {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    pub is_user_created_status: bool,
    #[serde(rename = "ConfirmedOnRVTList")]
    pub confirmed_on_rvt_list: bool,
    pub confirmed_on_short_stay_list: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WaitingListContact {
    #[serde(rename = "WaitingListEntryID")]
    pub waiting_list_entry_id: i32,
    pub contact_number: i32,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub address: Option<String>,
    #[serde(with = "crate::dates::option")]
    pub birth_date: Option<NaiveDateTime>,
    pub country: Option<i32>,
    pub nationality: Option<i32>,
    pub nat_number: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub preferred_language: Option<i32>,
    pub preferred_communication_method: Option<i32>,
    pub relation_to_resident: Option<i32>,
    pub town: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WaitingListKatzScore {
    #[serde(rename = "ID")]
    pub id: Option<i32>,
    #[serde(rename = "WaitingListEntryID")]
    pub waiting_list_entry_id: i32,
    #[serde(with = "crate::dates::option")]
    pub time_stamp: Option<NaiveDateTime>,
    pub katz_wash: Option<i32>,
    pub katz_cloth: Option<i32>,
    pub katz_move: Option<i32>,
    pub katz_toilet: Option<i32>,
    pub katz_cont: Option<i32>,
    pub katz_food: Option<i32>,
    pub katz_time: Option<i32>,
    pub katz_place: Option<i32>,
    pub katz_category: Option<String>,
}

//! DTOs for residents and the records attached to them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{id_list, SessionId};

/// Filters for `GetResidents`. Every `None` filter is left out of the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetResidentsParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "DepartmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    #[serde(rename = "RoomID", skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i32>,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    /// `Some(true)` for active residents only, `Some(false)` for archived
    /// ones, `None` for both.
    #[serde(rename = "Active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl GetResidentsParameters {
    pub fn active(session_id: SessionId) -> Self {
        Self {
            session_id,
            active: Some(true),
            ..Self::default()
        }
    }
}

/// A resident as known by the care home.
///
/// Field order is the service's declared order; exports rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Resident {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub call_name: Option<String>,
    /// Date of birth.
    #[serde(rename = "BD", with = "crate::dates")]
    pub birth_date: NaiveDateTime,
    /// Place of birth.
    #[serde(rename = "BP")]
    pub birth_place: Option<String>,
    #[serde(rename = "RoomID")]
    pub room_id: i32,
    pub nat_number: Option<String>,
    /// `false` female, `true` male.
    pub sex: bool,
    /// Country code id.
    pub nationality: i32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    /// Creation time in the care software.
    #[serde(with = "crate::dates")]
    pub stamp: NaiveDateTime,
    pub mut_no: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub room: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "DepartmentID")]
    pub department_id: i32,
    pub active: bool,
    /// 1 present, 2 hospital, 3 family, 4 holiday, 5 deceased, 6 left,
    /// 7 present without mutuality rights.
    pub current_presence_state: i32,
    pub current_presence_desc: Option<String>,
    #[serde(with = "crate::dates::option")]
    pub last_modified_on: Option<NaiveDateTime>,
    #[serde(with = "crate::dates::option")]
    pub vita_link_informed_consent_since: Option<NaiveDateTime>,
    #[serde(with = "crate::dates::option")]
    pub belrai_informed_consent_since: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetContactsForResidentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
}

/// Contact person of exactly one resident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Contact {
    #[serde(rename = "ContactID")]
    pub contact_id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    pub name: Option<String>,
    pub firstname: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub town: Option<String>,
    pub country: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub relation: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "IDNumber")]
    pub id_number: Option<String>,
    pub notify_on_decease: bool,
    pub notify_on_emotional_crisis_resident: bool,
    pub notify_one_emotional_crisis_family: bool,
    /// Lower numbers are called first.
    pub contact_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResidentDiseasesParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub begin_date: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDateTime>,
    pub show_active_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentDisease {
    #[serde(rename = "ResidentDiseaseID")]
    pub resident_disease_id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "Begindate", with = "crate::dates")]
    pub begin_date: NaiveDateTime,
    #[serde(rename = "Enddate", with = "crate::dates")]
    pub end_date: NaiveDateTime,
    #[serde(rename = "DiseaseID")]
    pub disease_id: i32,
    pub disease_desc: Option<String>,
    pub protocol: Option<String>,
    /// Where it was contracted.
    pub location: Option<String>,
    #[serde(rename = "Quarantaine")]
    pub quarantine: bool,
    #[serde(rename = "Colonisation")]
    pub colonisation: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetResidentMedicalRemarksParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    #[serde(rename = "DepartmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i16>,
    #[serde(rename = "RoomID", skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i32>,
    #[serde(rename = "Active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Medical summary of a resident (`ResidentMedicalRemark_v2` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentMedicalRemark {
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    pub is_active: bool,
    pub name: Option<String>,
    pub firstname: Option<String>,
    #[serde(rename = "RoomID")]
    pub room_id: i32,
    pub room_description: Option<String>,
    #[serde(rename = "DepartmentID")]
    pub department_id: i32,
    pub department_description: Option<String>,
    pub bloodtype: Option<String>,
    /// `Some(true)` positive, `Some(false)` negative, `None` unknown.
    pub rhesus: Option<bool>,
    #[serde(rename = "WZDKatzScore")]
    pub wzd_katz_score: Option<String>,
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    pub doctor_info: Option<String>,
    pub is_diabetic: bool,
    pub is_epileptic: bool,
    pub has_angor: bool,
    pub has_pacemaker: bool,
    pub has_coagulation_disorder: bool,
    #[serde(rename = "HasCOPD")]
    pub has_copd: bool,
    #[serde(rename = "HasDemention")]
    pub has_dementia: bool,
    #[serde(rename = "Dementionlevel")]
    pub dementia_level: Option<String>,
    pub allergies: Option<String>,
    pub food_allergies: Option<String>,
    #[serde(rename = "IsPaliative")]
    pub is_palliative: bool,
    /// `true` means do not resuscitate.
    #[serde(rename = "DNR")]
    pub dnr: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResidentParamsParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids, e.g. `"1203,586"`.
    #[serde(rename = "ResidentID")]
    pub resident_ids: String,
    #[serde(rename = "ParamListID", skip_serializing_if = "Option::is_none")]
    pub param_list_id: Option<i32>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_from: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_until: Option<NaiveDateTime>,
    /// Keep only the last `n` values per parameter type and resident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_last_nr: Option<u8>,
}

impl GetResidentParamsParameters {
    pub fn for_residents(session_id: SessionId, resident_ids: &[i32]) -> Self {
        Self {
            session_id,
            resident_ids: id_list(resident_ids),
            ..Self::default()
        }
    }
}

/// One measured value (blood pressure, pulse, ...) for a resident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentParameter {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ActionID")]
    pub action_id: i32,
    #[serde(rename = "ParameterID")]
    pub parameter_id: i32,
    pub parameter_desc: Option<String>,
    pub value: f64,
    /// Secondary detail value, e.g. "irregular" for a pulse.
    pub value2: i32,
    pub param_detail_desc: Option<String>,
    pub remarks: Option<String>,
    #[serde(with = "crate::dates")]
    pub param_value_date: NaiveDateTime,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
    #[serde(with = "crate::dates")]
    pub stamp: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetResidentTreatmentDirectivesParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
}

/// What the resident agreed to in case of hospitalisation or severe illness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentTreatmentDirective {
    #[serde(rename = "DirectiveID")]
    pub directive_id: i32,
    pub directive_desc: Option<String>,
    pub directive_remarks: Option<String>,
    #[serde(with = "crate::dates")]
    pub date_from: NaiveDateTime,
}

/// A Katz dependency score for a resident or a waiting-list entry.
///
/// Exactly one of `resident_id` and `waiting_list_entry_id` is non-zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertKatzParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "WaitingListEntryID")]
    pub waiting_list_entry_id: i32,
    #[serde(with = "crate::dates")]
    pub begin_date: NaiveDateTime,
    pub katz_wash: u8,
    pub katz_cloth: u8,
    pub katz_move: u8,
    pub katz_toilet: u8,
    /// Continence.
    pub katz_cont: u8,
    pub katz_food: u8,
    /// Orientation in time.
    pub katz_time: u8,
    /// Orientation in place.
    pub katz_place: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResidentVaccinationsParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentIDList")]
    pub resident_id_list: String,
    #[serde(rename = "VaccinationTypeID", skip_serializing_if = "Option::is_none")]
    pub vaccination_type_id: Option<i32>,
    /// Only the most recent vaccination per type.
    pub get_last_vacc_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentVaccination {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "VaccinationTypeID")]
    pub vaccination_type_id: i32,
    pub remarks: Option<String>,
    #[serde(with = "crate::dates::option")]
    pub vacc_admin_date: Option<NaiveDateTime>,
    #[serde(with = "crate::dates::option")]
    pub vacc_expiry_date: Option<NaiveDateTime>,
    pub is_last_vacc: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertResidentVaccinationParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "VaccinationTypeID")]
    pub vaccination_type_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Server date when `None`.
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub vacc_begin_date: Option<NaiveDateTime>,
    /// Derived from the vaccination type's validity when `None`.
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub vacc_expiry_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentDocumentType {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertResidentDocumentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(rename = "DocumentTypeID")]
    pub document_type_id: i16,
    /// Title shown in the resident's document list.
    pub document_name: String,
    /// `pdf`, `docx`, ... without the leading dot.
    pub file_extension: String,
    #[serde(rename = "FileDataAsB64")]
    pub file_data_as_b64: String,
}

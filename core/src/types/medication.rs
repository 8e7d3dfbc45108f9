//! DTOs for the medication scheme, the daily medication plan and its
//! signatures, standing orders and vaccination types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// Medication plan action types.
pub mod medication_action {
    /// Medication handed out (put in the dispenser).
    pub const DISTRIBUTE: u8 = 3;
    /// Medication taken by the resident. Expects a prior `DISTRIBUTE`.
    pub const ADMINISTER: u8 = 4;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VaccinationType {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    pub active: bool,
    /// Validity of a vaccination of this type.
    pub months_expiry: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicationPlanForResidentParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(with = "crate::dates")]
    pub medication_date: NaiveDateTime,
    /// Comma separated medication moment ids.
    #[serde(rename = "MedmomentID")]
    pub medmoment_id: String,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentID")]
    pub resident_id: String,
    /// One of the `medication_action` constants.
    pub action_type: u8,
}

/// One planned intake on the medication plan of a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedicationPlanItem {
    #[serde(with = "crate::dates")]
    pub date: NaiveDateTime,
    #[serde(rename = "TreatmentID")]
    pub treatment_id: i32,
    #[serde(rename = "MedicationMomentID")]
    pub medication_moment_id: u8,
    #[serde(rename = "MedicationID")]
    pub medication_id: i32,
    #[serde(rename = "PatientID")]
    pub patient_id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    /// Belgian national product code.
    #[serde(rename = "CNK")]
    pub cnk: i32,
    pub description: Option<String>,
    pub dosage_initial: f64,
    pub dosage: f64,
    pub changed: bool,
    #[serde(rename = "FormID")]
    pub form_id: u8,
    pub unity: Option<String>,
    pub special: bool,
    pub done: bool,
    pub previous_phase_ok: bool,
    pub in_dispenser: bool,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicationSchemeForResidentParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentID")]
    pub resident_id: String,
    /// Include items that are no longer active.
    pub show_history: bool,
}

/// A line of a resident's medication scheme.
///
/// `posologie1` to `posologie12` are the doses per medication moment, in
/// moment order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedicationSchemeItem {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "TreatmentID")]
    pub treatment_id: i32,
    #[serde(rename = "AdminFormID")]
    pub admin_form_id: u8,
    #[serde(rename = "ParentID")]
    pub parent_id: Option<i32>,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates::option")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(with = "crate::dates::option")]
    pub end_date: Option<NaiveDateTime>,
    pub description: Option<String>,
    #[serde(rename = "Standingorder")]
    pub standing_order: bool,
    pub externally_provided: bool,
    pub remarks: Option<String>,
    pub posologie1: f64,
    pub posologie2: f64,
    pub posologie3: f64,
    pub posologie4: f64,
    pub posologie5: f64,
    pub posologie6: f64,
    pub posologie7: f64,
    pub posologie8: f64,
    pub posologie9: f64,
    pub posologie10: f64,
    pub posologie11: f64,
    pub posologie12: f64,
    pub to_be_validated_by_doctor: bool,
    #[serde(rename = "MedicationID")]
    pub medication_id: i32,
}

impl MedicationSchemeItem {
    pub fn posology(&self) -> [f64; 12] {
        [
            self.posologie1,
            self.posologie2,
            self.posologie3,
            self.posologie4,
            self.posologie5,
            self.posologie6,
            self.posologie7,
            self.posologie8,
            self.posologie9,
            self.posologie10,
            self.posologie11,
            self.posologie12,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedicationAdminForm {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    pub is_special_action: bool,
    pub in_dispenser: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedicationMoment {
    #[serde(rename = "ID")]
    pub id: i32,
    pub start_time: Option<String>,
    pub order: i32,
}

/// A department the session's user may handle medication for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedicationDeptAccess {
    #[serde(rename = "DepartmentID")]
    pub department_id: u8,
    pub department_description: Option<String>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignMedicationPlanItemParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates")]
    pub medication_date: NaiveDateTime,
    #[serde(rename = "MedmomentID")]
    pub medmoment_id: u8,
    pub action_type: u8,
    #[serde(rename = "MedicationID")]
    pub medication_id: i32,
    /// Units given, e.g. `0.5` for half a tablet.
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignMedicationPlanItemNotDoneParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates")]
    pub medication_date: NaiveDateTime,
    #[serde(rename = "MedicationID")]
    pub medication_id: i32,
    pub action_type: u8,
    /// Why it was not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Signs a standing order, by `treatment_id` or by `medication_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignMedicationStandingOrderParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates")]
    pub medication_given_on: NaiveDateTime,
    #[serde(rename = "TreatmentID", skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<i32>,
    #[serde(rename = "MedicationID", skip_serializing_if = "Option::is_none")]
    pub medication_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// Marks a scheme as validated. Needs a doctor's session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateMedicationSchemeForResidentParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    /// Server time when `None`.
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_stamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicationStandingOrderLogParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(with = "crate::dates")]
    pub date_from: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub date_until: NaiveDateTime,
    #[serde(rename = "DepartmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentIDList", skip_serializing_if = "Option::is_none")]
    pub resident_id_list: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedicationStandingOrderLogItem {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates")]
    pub stamp: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub med_given_on: NaiveDateTime,
    #[serde(rename = "UserID")]
    pub user_id: i32,
    #[serde(rename = "MedicationID")]
    pub medication_id: i32,
    pub qty: f64,
    pub reason: Option<String>,
}

//! DTOs for doctor visits and the nomenclature they are billed under.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDoctorVisitsParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentIDList")]
    pub resident_id_list: String,
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DoctorVisit {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(with = "crate::dates")]
    pub visit_date: NaiveDateTime,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    /// Nomenclature id the visit was billed under.
    pub nomenclature: i32,
    pub price_total: f64,
    /// Part refunded by the health insurer.
    pub price_health_service: f64,
    pub price_patient: f64,
    pub remarks: Option<String>,
    #[serde(rename = "invoiced")]
    pub invoiced: bool,
}

/// Nomenclature kinds accepted by `GetNomenclature`.
pub mod nomenclature_filter {
    pub const ALL: i16 = 0;
    pub const DOCTOR: i16 = 1;
    pub const PHYSIOTHERAPY: i16 = 2;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetNomenclatureParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "NomenclatureID", skip_serializing_if = "Option::is_none")]
    pub nomenclature_id: Option<i32>,
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
    /// One of the `nomenclature_filter` constants.
    pub filter_type: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NomenclatureWithRateList {
    #[serde(rename = "ID")]
    pub id: i32,
    pub rates: Vec<NomenclatureRate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NomenclatureRate {
    #[serde(with = "crate::dates")]
    pub valid_from: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub valid_until: NaiveDateTime,
    pub rate: f64,
}

/// Books a visit, or corrects an earlier one when `id` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertDoctorVisitParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    #[serde(with = "crate::dates")]
    pub visit_date: NaiveDateTime,
    #[serde(rename = "NomenClatureID")]
    pub nomenclature_id: i32,
    pub rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveDoctorVisitParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ID")]
    pub id: Option<i32>,
}

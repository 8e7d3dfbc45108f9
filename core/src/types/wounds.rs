//! DTOs for resident wounds and their classifications.
//!
//! A wound is classified repeatedly over time. Each classification belongs
//! to a wound category and carries field/value pairs whose expected types are
//! described by `WoundClassificationField`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SessionId;

/// Value kinds of a classification field.
pub mod classification_data_type {
    pub const TEXT: i32 = 0;
    pub const INTEGER: i32 = 1;
    pub const DECIMAL: i32 = 2;
    pub const DATE: i32 = 5;
    pub const DATE_TIME: i32 = 6;
    /// Id of one `WoundClassificationFieldValue`.
    pub const LIST_ITEM: i32 = 14;
    /// Array of `WoundClassificationFieldValue` ids.
    pub const MULTI_SELECT: i32 = 15;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WoundCategory {
    #[serde(rename = "ID")]
    pub id: Option<i32>,
    pub description: Option<String>,
    #[serde(rename = "ParentID")]
    pub parent_id: Option<i32>,
    /// Days until the next classification is due.
    pub remind_days: Option<i32>,
    pub classification_fields: Vec<WoundCategoryClassificationInfo>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WoundCategoryClassificationInfo {
    pub classification_field_name: Option<String>,
    pub mandatory: bool,
}

/// Where the resident got the wound (care home, hospital, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WoundOrigin {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWoundClassificationFieldsParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated field names.
    pub field_name_list: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WoundClassificationField {
    pub classification_field_name: Option<String>,
    pub description: Option<String>,
    /// One of the `classification_data_type` constants.
    pub wound_classification_data_type: i32,
    /// Choices of list and multi-select fields.
    pub value_list: Vec<WoundClassificationFieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WoundClassificationFieldValue {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    /// RGB colour code.
    pub color: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWoundsParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated resident ids.
    #[serde(rename = "ResidentID")]
    pub resident_id: String,
    pub active: bool,
    /// Every classification instead of only the latest.
    pub classification_history: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentWound {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    pub front_of_body: bool,
    /// Position on the body drawing.
    pub x: f32,
    pub y: f32,
    #[serde(with = "crate::dates")]
    pub first_observed_on: NaiveDateTime,
    #[serde(rename = "FirstObservedByUserID")]
    pub first_observed_by_user_id: i32,
    pub location_description: Option<String>,
    #[serde(rename = "LocationID")]
    pub location_id: i32,
    #[serde(rename = "OriginID")]
    pub origin_id: Option<i32>,
    pub closed: Option<bool>,
    #[serde(rename = "ClosedByUserID")]
    pub closed_by_user_id: Option<i32>,
    #[serde(with = "crate::dates::option")]
    pub closed_on: Option<NaiveDateTime>,
    #[serde(with = "crate::dates::option")]
    pub next_classification_date: Option<NaiveDateTime>,
    pub classifications: Vec<ResidentWoundClassification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentWoundClassification {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "WoundCategoryID")]
    pub wound_category_id: i32,
    #[serde(with = "crate::dates")]
    pub created_on: NaiveDateTime,
    #[serde(rename = "CreatedByUserID")]
    pub created_by_user_id: i32,
    pub remarks: Option<String>,
    pub values: Vec<ResidentWoundClassificationDetailValue>,
}

/// A field/value pair. The value's JSON type follows the field's data type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResidentWoundClassificationDetailValue {
    pub field_name: String,
    pub value: Value,
}

impl ResidentWoundClassificationDetailValue {
    pub fn new(field_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertResidentWoundParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
    /// Body location from the service's fixed list (69 is the chin).
    #[serde(rename = "WoundLocationID")]
    pub wound_location_id: i32,
    pub front_of_body: bool,
    /// Location name, optionally refined ("Chin - left side").
    pub wound_location_text: String,
    pub location_x: f64,
    pub location_y: f64,
    #[serde(with = "crate::dates")]
    pub first_observed_on: NaiveDateTime,
    #[serde(rename = "FirsObservedByUser", skip_serializing_if = "Option::is_none")]
    pub first_observed_by_user: Option<i32>,
    #[serde(rename = "OriginID")]
    pub origin_id: i32,
    pub classification: ResidentWoundClassification,
}

/// Adds a classification to an existing wound.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertResidentWoundClassificationParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "WoundID")]
    pub wound_id: i32,
    #[serde(rename = "WoundCategoryID")]
    pub wound_category_id: i32,
    #[serde(with = "crate::dates")]
    pub created_on: NaiveDateTime,
    #[serde(rename = "CreatedByUserID")]
    pub created_by_user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub values: Vec<ResidentWoundClassificationDetailValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wound_parses_nested_classifications() {
        let wound: ResidentWound = serde_json::from_value(json!({
            "ID": 31,
            "ResidentID": 5,
            "FrontOfBody": false,
            "X": 0.42,
            "Y": 0.77,
            "FirstObservedOn": "2024-01-20T09:00:00",
            "LocationID": 82,
            "Closed": null,
            "Classifications": [{
                "ID": 1,
                "WoundCategoryID": 4,
                "CreatedOn": "2024-01-20T09:05:00",
                "Values": [
                    { "FieldName": "Depth", "Value": 2 },
                    { "FieldName": "Colours", "Value": [1, 3] }
                ]
            }]
        }))
        .unwrap();
        assert_eq!(wound.location_id, 82);
        let values = &wound.classifications[0].values;
        assert_eq!(values[0].value, json!(2));
        assert_eq!(values[1].value, json!([1, 3]));
    }

    #[test]
    fn insert_keeps_observer_wire_name() {
        let params = InsertResidentWoundParameters {
            session_id: SessionId::new("s"),
            first_observed_by_user: Some(12),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["FirsObservedByUser"], 12);
        assert_eq!(value["Classification"]["Values"], json!([]));
    }
}

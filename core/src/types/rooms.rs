//! DTOs for rooms, departments and occupancy.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Department {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetRoomListParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "DepartmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Room {
    #[serde(rename = "ID")]
    pub id: i32,
    /// Room name.
    pub description: Option<String>,
    #[serde(rename = "DepartmentID")]
    pub department_id: i32,
    /// Reference used by third-party room terminals.
    #[serde(rename = "NeuronID")]
    pub neuron_id: Option<String>,
    #[serde(rename = "RoomtypeID")]
    pub roomtype_id: Option<i32>,
    #[serde(rename = "RoomstyleID")]
    pub roomstyle_id: Option<i32>,
    pub short_stay_room: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roomtype {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roomstyle {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

/// Period and filters for `GetRoomOccupancy` and `GetShortStayRoomOccupancy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomOccupancyParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(with = "crate::dates")]
    pub start_date: NaiveDateTime,
    #[serde(with = "crate::dates")]
    pub end_date: NaiveDateTime,
    #[serde(rename = "DepartmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    #[serde(rename = "RoomID", skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i32>,
}

/// Occupancy of one room on one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RoomOccupancyStatus {
    #[serde(with = "crate::dates")]
    pub date: NaiveDateTime,
    #[serde(rename = "DepartmentID")]
    pub department_id: i32,
    pub department: Option<String>,
    #[serde(rename = "RoomID")]
    pub room_id: i32,
    pub room_desc: Option<String>,
    #[serde(rename = "RoomTypeID")]
    pub room_type_id: Option<i32>,
    pub room_type_desc: Option<String>,
    #[serde(rename = "RoomStyleID")]
    pub room_style_id: Option<i32>,
    pub room_style_desc: Option<String>,
    pub capacity: Option<u8>,
    pub occupancy: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn room_list_without_filter_sends_only_session() {
        let params = GetRoomListParameters {
            session_id: SessionId::new("s"),
            department_id: None,
        };
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({ "SessionID": "s" }));
    }

    #[test]
    fn occupancy_row_parses_nullable_capacity() {
        let row: RoomOccupancyStatus = serde_json::from_value(json!({
            "Date": "2024-03-01T00:00:00",
            "DepartmentID": 1,
            "Department": "Gelijkvloers",
            "RoomID": 101,
            "RoomDesc": "101",
            "RoomTypeID": null,
            "RoomTypeDesc": null,
            "RoomStyleID": 2,
            "RoomStyleDesc": "Hoekkamer",
            "Capacity": null,
            "Occupancy": 1
        }))
        .unwrap();
        assert_eq!(row.room_id, 101);
        assert_eq!(row.capacity, None);
        assert_eq!(row.room_style_desc.as_deref(), Some("Hoekkamer"));
    }
}

//! Rendering of DTOs as CSV rows.

use chrono::NaiveDateTime;
use wzs_core::types::Resident;

/// A type that exports as one CSV row under a fixed header.
pub trait CsvRecord {
    /// Column names, in the type's declared member order.
    const HEADER: &'static [&'static str];

    /// Unquoted, untrimmed field texts, one per `HEADER` column.
    fn fields(&self) -> Vec<String>;
}

/// Invariant-culture general date pattern: `MM/dd/yyyy HH:mm:ss`.
const DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

fn date(value: &NaiveDateTime) -> String {
    value.format(DATE_FORMAT).to_string()
}

fn optional_date(value: &Option<NaiveDateTime>) -> String {
    value.as_ref().map(date).unwrap_or_default()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn flag(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

impl CsvRecord for Resident {
    const HEADER: &'static [&'static str] = &[
        "ID",
        "Name",
        "FirstName",
        "CallName",
        "BD",
        "BP",
        "RoomID",
        "NatNumber",
        "Sex",
        "Nationality",
        "DoctorID",
        "Stamp",
        "MutNo",
        "Address",
        "ZipCode",
        "Town",
        "Room",
        "Department",
        "DepartmentID",
        "Active",
        "CurrentPresenceState",
        "CurrentPresenceDesc",
        "LastModifiedOn",
        "VitaLinkInformedConsentSince",
        "BelraiInformedConsentSince",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            text(&self.name),
            text(&self.first_name),
            text(&self.call_name),
            date(&self.birth_date),
            text(&self.birth_place),
            self.room_id.to_string(),
            text(&self.nat_number),
            flag(self.sex),
            self.nationality.to_string(),
            self.doctor_id.to_string(),
            date(&self.stamp),
            text(&self.mut_no),
            text(&self.address),
            text(&self.zip_code),
            text(&self.town),
            text(&self.room),
            text(&self.department),
            self.department_id.to_string(),
            flag(self.active),
            self.current_presence_state.to_string(),
            text(&self.current_presence_desc),
            optional_date(&self.last_modified_on),
            optional_date(&self.vita_link_informed_consent_since),
            optional_date(&self.belrai_informed_consent_since),
        ]
    }
}

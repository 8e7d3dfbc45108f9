//! DTOs for booking third-party costs on resident invoices.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// Books a cost, good or service on a resident's next open invoice period.
///
/// The resident is identified by `resident_id`, or by `resident_nat_number`
/// (digits only) when the id is `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertVendorInvoiceLineParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(with = "crate::dates")]
    pub date: NaiveDateTime,
    #[serde(rename = "ResidentID", skip_serializing_if = "Option::is_none")]
    pub resident_id: Option<i32>,
    pub invoice_code_name: String,
    pub quantity: i16,
    pub price_per_unit: f64,
    /// Line text on the invoice, unless the home groups lines per code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub vendor_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_invoice_number: Option<String>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub vendor_invoice_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_nat_number: Option<String>,
}

impl InsertVendorInvoiceLineParams {
    /// Strips the separators the service does not accept in a national number.
    pub fn with_nat_number(mut self, nat_number: &str) -> Self {
        self.resident_nat_number = Some(nat_number.chars().filter(char::is_ascii_digit).collect());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InvoiceCode {
    #[serde(rename = "ID")]
    pub id: i32,
    pub invoice_code_name: Option<String>,
    /// Text printed on the invoice.
    pub description: Option<String>,
    pub active: bool,
    #[serde(with = "crate::dates::option")]
    pub active_until: Option<NaiveDateTime>,
}

use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{ActiveFilterParameters, IdValue, InsertVendorInvoiceLineParams, InvoiceCode};

impl<T: Transport> WzsServiceClient<T> {
    pub fn insert_vendor_invoice_line(
        &self,
        params: &InsertVendorInvoiceLineParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "InsertVendorInvoiceLine", params)
    }

    pub fn get_invoice_codes(
        &self,
        params: &ActiveFilterParameters,
    ) -> Result<Vec<InvoiceCode>, ApiError> {
        self.call(Controller::WZS, "GetInvoiceCodes", params)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::client::tests::ScriptedTransport;
    use crate::types::{InsertVendorInvoiceLineParams, SessionId};
    use crate::WzsServiceClient;

    #[test]
    fn invoice_line_by_nat_number_returns_line_id() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(200, r#"{"ID":5120}"#),
        );
        let params = InsertVendorInvoiceLineParams {
            session_id: SessionId::new("abc-123"),
            date: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            invoice_code_name: "PEDI".to_string(),
            quantity: 1,
            price_per_unit: 32.5,
            vendor_number: "V-9".to_string(),
            ..InsertVendorInvoiceLineParams::default()
        }
        .with_nat_number("31.04.02-123.45");
        let line = client.insert_vendor_invoice_line(&params).unwrap();
        assert_eq!(line.id, Some(5120));
        let body = client.transport().last_body();
        assert_eq!(body["method"], "InsertVendorInvoiceLine");
        assert_eq!(body["params"]["ResidentNatNumber"], "31040212345");
        assert!(body["params"].get("ResidentID").is_none());
    }
}

use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ActiveFilterParameters, CountValue, GetMedicationPlanForResidentParams,
    GetMedicationSchemeForResidentParams, GetMedicationStandingOrderLogParams, IdValue,
    MedicationAdminForm, MedicationDeptAccess, MedicationMoment, MedicationPlanItem,
    MedicationSchemeItem, MedicationStandingOrderLogItem, SessionParameters,
    SignMedicationPlanItemNotDoneParams, SignMedicationPlanItemParams,
    SignMedicationStandingOrderParams, ValidateMedicationSchemeForResidentParams, VaccinationType,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_vaccination_types(
        &self,
        params: &ActiveFilterParameters,
    ) -> Result<Vec<VaccinationType>, ApiError> {
        self.call(Controller::WZS, "GetVaccinationTypes", params)
    }

    /// What has to be distributed or administered at the given moments.
    pub fn get_medication_plan_for_resident(
        &self,
        params: &GetMedicationPlanForResidentParams,
    ) -> Result<Vec<MedicationPlanItem>, ApiError> {
        self.call(Controller::WZS, "GetMedicationPlanForResident", params)
    }

    pub fn get_medication_scheme_for_resident(
        &self,
        params: &GetMedicationSchemeForResidentParams,
    ) -> Result<Vec<MedicationSchemeItem>, ApiError> {
        self.call(Controller::WZS, "GetMedicationSchemeForResident", params)
    }

    pub fn get_medication_admin_forms(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<MedicationAdminForm>, ApiError> {
        self.call(Controller::WZS, "GetMedicationAdminForms", params)
    }

    pub fn get_medication_moments(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<MedicationMoment>, ApiError> {
        self.call(Controller::WZS, "GetMedicationMoments", params)
    }

    /// Departments whose medication the session's user may sign.
    pub fn get_medication_dept_access(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<MedicationDeptAccess>, ApiError> {
        self.call(Controller::WZS, "GetMedicationDeptAccess", params)
    }

    pub fn sign_medication_plan_item(
        &self,
        params: &SignMedicationPlanItemParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "SignMedicationPlanItem", params)
    }

    pub fn sign_medication_plan_item_not_done(
        &self,
        params: &SignMedicationPlanItemNotDoneParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "SignMedicationPlanItemNotDone", params)
    }

    pub fn sign_medication_standing_order(
        &self,
        params: &SignMedicationStandingOrderParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "SignMedicationStandingOrder", params)
    }

    /// Marks scheme lines awaiting a doctor's validation as validated.
    pub fn validate_medication_scheme_for_resident(
        &self,
        params: &ValidateMedicationSchemeForResidentParams,
    ) -> Result<CountValue, ApiError> {
        self.call(Controller::WZS, "ValidateMedicationSchemeForResident", params)
    }

    pub fn get_medication_standing_orders_log(
        &self,
        params: &GetMedicationStandingOrderLogParams,
    ) -> Result<Vec<MedicationStandingOrderLogItem>, ApiError> {
        self.call(Controller::WZS, "GetMedicationStandingOrdersLog", params)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::client::tests::ScriptedTransport;
    use crate::types::{
        medication_action, GetMedicationPlanForResidentParams, SessionId,
        SignMedicationPlanItemParams, ValidateMedicationSchemeForResidentParams,
    };
    use crate::WzsServiceClient;

    #[test]
    fn plan_item_is_signed_with_its_moment() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default()
                .respond(
                    200,
                    r#"[{"Date":"2024-02-01T00:00:00","TreatmentID":3,"MedicationMomentID":2,"MedicationID":881,"ResidentID":5,"CNK":1234567,"Dosage":0.5,"Done":false}]"#,
                )
                .respond(200, r#"{"ID":4410}"#),
        );
        let day = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let plan = client
            .get_medication_plan_for_resident(&GetMedicationPlanForResidentParams {
                session_id: SessionId::new("abc-123"),
                medication_date: day,
                medmoment_id: "2".to_string(),
                resident_id: "5".to_string(),
                action_type: medication_action::ADMINISTER,
            })
            .unwrap();
        let item = &plan[0];
        assert!(!item.done);

        let signed = client
            .sign_medication_plan_item(&SignMedicationPlanItemParams {
                session_id: SessionId::new("abc-123"),
                resident_id: item.resident_id,
                medication_date: item.date,
                medmoment_id: item.medication_moment_id,
                action_type: medication_action::ADMINISTER,
                medication_id: item.medication_id,
                quantity: item.dosage,
            })
            .unwrap();
        assert_eq!(signed.id, Some(4410));
        let body = client.transport().last_body();
        assert_eq!(body["method"], "SignMedicationPlanItem");
        assert_eq!(body["params"]["MedmomentID"], 2);
        assert_eq!(body["params"]["Quantity"], 0.5);
    }

    #[test]
    fn scheme_validation_returns_count() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(200, r#"{"Count":3}"#),
        );
        let validated = client
            .validate_medication_scheme_for_resident(&ValidateMedicationSchemeForResidentParams {
                session_id: SessionId::new("abc-123"),
                resident_id: 5,
                time_stamp: None,
            })
            .unwrap();
        assert_eq!(validated.count, Some(3));
        assert_eq!(
            client.transport().last_body(),
            json!({
                "method": "ValidateMedicationSchemeForResident",
                "params": { "SessionID": "abc-123", "ResidentID": 5 }
            })
        );
    }
}

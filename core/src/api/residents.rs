use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    Contact, GetContactsForResidentParameters, GetResidentDiseasesParameters,
    GetResidentMedicalRemarksParameters, GetResidentParamsParameters,
    GetResidentTreatmentDirectivesParameters, GetResidentVaccinationsParams,
    GetResidentsParameters, IdValue, InsertKatzParameters, InsertResidentDocumentParameters,
    InsertResidentVaccinationParams, Resident, ResidentDisease, ResidentDocumentType,
    ResidentMedicalRemark, ResidentParameter, ResidentTreatmentDirective, ResidentVaccination,
    SessionParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    /// Residents matching the filters, in the order the server returns them.
    pub fn get_residents(&self, params: &GetResidentsParameters) -> Result<Vec<Resident>, ApiError> {
        self.call(Controller::WZS, "GetResidents", params)
    }

    pub fn get_contacts_for_resident(
        &self,
        params: &GetContactsForResidentParameters,
    ) -> Result<Vec<Contact>, ApiError> {
        self.call(Controller::WZS, "GetContactsForResident", params)
    }

    pub fn get_resident_diseases(
        &self,
        params: &GetResidentDiseasesParameters,
    ) -> Result<Vec<ResidentDisease>, ApiError> {
        self.call(Controller::WZS, "GetResidentDiseases", params)
    }

    pub fn get_resident_medical_remarks(
        &self,
        params: &GetResidentMedicalRemarksParameters,
    ) -> Result<Vec<ResidentMedicalRemark>, ApiError> {
        self.call(Controller::WZS, "GetResidentMedicalRemarks_v2", params)
    }

    /// First version of the medical summary. Its `rhesus` is not reliable;
    /// prefer [`get_resident_medical_remarks`](Self::get_resident_medical_remarks).
    pub fn get_resident_medical_remarks_v1(
        &self,
        params: &GetResidentMedicalRemarksParameters,
    ) -> Result<Vec<ResidentMedicalRemark>, ApiError> {
        self.call(Controller::WZS, "GetResidentMedicalRemarks", params)
    }

    pub fn get_resident_params(
        &self,
        params: &GetResidentParamsParameters,
    ) -> Result<Vec<ResidentParameter>, ApiError> {
        self.call(Controller::WZS, "GetResidentParams", params)
    }

    pub fn get_resident_treatment_directives(
        &self,
        params: &GetResidentTreatmentDirectivesParameters,
    ) -> Result<Vec<ResidentTreatmentDirective>, ApiError> {
        self.call(Controller::WZS, "GetResidentTreatmentDirectives", params)
    }

    pub fn insert_katz(&self, params: &InsertKatzParameters) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "InsertKatz", params)
    }

    pub fn get_resident_vaccinations(
        &self,
        params: &GetResidentVaccinationsParams,
    ) -> Result<Vec<ResidentVaccination>, ApiError> {
        self.call(Controller::WZS, "GetResidentVaccinations", params)
    }

    pub fn insert_resident_vaccination(
        &self,
        params: &InsertResidentVaccinationParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "InsertResidentVaccination", params)
    }

    pub fn get_resident_document_types(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<ResidentDocumentType>, ApiError> {
        self.call(Controller::WZS, "GetResidentDocumentTypes", params)
    }

    /// Returns the file name the service stored the document under.
    pub fn insert_resident_document(
        &self,
        params: &InsertResidentDocumentParameters,
    ) -> Result<String, ApiError> {
        self.call(Controller::WZS, "InsertResidentDocument", params)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::ScriptedTransport;
    use crate::types::{
        GetResidentMedicalRemarksParameters, GetResidentVaccinationsParams,
        GetResidentsParameters, InsertKatzParameters, InsertResidentDocumentParameters, SessionId,
    };
    use crate::{ApiError, WzsServiceClient};

    #[test]
    fn residents_keep_server_order() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(
                200,
                r#"[{"ID":9,"Name":"Janssens","Active":true},{"ID":2,"Name":"Claes","Active":true}]"#,
            ),
        );
        let residents = client
            .get_residents(&GetResidentsParameters::active(SessionId::new("abc-123")))
            .unwrap();
        let ids: Vec<i32> = residents.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2]);
        assert_eq!(
            client.transport().last_body(),
            json!({
                "method": "GetResidents",
                "params": { "SessionID": "abc-123", "Active": true }
            })
        );
    }

    #[test]
    fn expired_session_surfaces_server_message() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(401, r#"{"message":"Session expired"}"#),
        );
        let err = client
            .get_residents(&GetResidentsParameters::active(SessionId::new("stale")))
            .unwrap_err();
        assert!(matches!(err, ApiError::Client { .. }));
        assert_eq!(err.to_string(), "Session expired");
    }

    #[test]
    fn medical_remarks_call_the_v2_method() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(
                200,
                r#"[{"ResidentID":5,"IsActive":true,"Rhesus":null,"DNR":true,"HasCOPD":false}]"#,
            ),
        );
        let params = GetResidentMedicalRemarksParameters {
            session_id: SessionId::new("abc-123"),
            resident_id: Some(5),
            ..Default::default()
        };
        let remarks = client.get_resident_medical_remarks(&params).unwrap();
        assert_eq!(remarks[0].rhesus, None);
        assert!(remarks[0].dnr);
        assert_eq!(
            client.transport().last_body()["method"],
            "GetResidentMedicalRemarks_v2"
        );
    }

    #[test]
    fn medical_remarks_v1_calls_the_first_method() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(200, r#"[{"ResidentID":5,"Rhesus":true}]"#),
        );
        let remarks = client
            .get_resident_medical_remarks_v1(&GetResidentMedicalRemarksParameters {
                session_id: SessionId::new("abc-123"),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(remarks[0].rhesus, Some(true));
        assert_eq!(
            client.transport().last_body()["method"],
            "GetResidentMedicalRemarks"
        );
    }

    #[test]
    fn katz_insert_sends_all_scores() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(204, ""),
        );
        let begin = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        client
            .insert_katz(&InsertKatzParameters {
                session_id: SessionId::new("abc-123"),
                resident_id: 5,
                begin_date: begin,
                katz_wash: 3,
                katz_place: 1,
                ..Default::default()
            })
            .unwrap();
        let body = client.transport().last_body();
        assert_eq!(body["method"], "InsertKatz");
        assert_eq!(body["params"]["ResidentID"], 5);
        assert_eq!(body["params"]["WaitingListEntryID"], 0);
        assert_eq!(body["params"]["BeginDate"], "2024-03-01T00:00:00");
        assert_eq!(body["params"]["KatzWash"], 3);
        assert_eq!(body["params"]["KatzPlace"], 1);
    }

    #[test]
    fn vaccinations_parse_optional_dates() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(
                200,
                r#"[{"ID":1,"ResidentID":5,"VaccinationTypeID":2,"VaccAdminDate":"2023-10-02T00:00:00","VaccExpiryDate":null,"IsLastVacc":true}]"#,
            ),
        );
        let vaccinations = client
            .get_resident_vaccinations(&GetResidentVaccinationsParams {
                session_id: SessionId::new("abc-123"),
                resident_id_list: "5".to_string(),
                vaccination_type_id: None,
                get_last_vacc_only: true,
            })
            .unwrap();
        assert!(vaccinations[0].vacc_admin_date.is_some());
        assert!(vaccinations[0].vacc_expiry_date.is_none());
        assert!(vaccinations[0].is_last_vacc);
        assert_eq!(
            client.transport().last_body(),
            json!({
                "method": "GetResidentVaccinations",
                "params": { "SessionID": "abc-123", "ResidentIDList": "5", "GetLastVaccOnly": true }
            })
        );
    }

    #[test]
    fn document_insert_returns_stored_name() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default()
                .respond(200, r#""3f2b8c1e-8d7a-4a51-9c1e-2b7a0d6c9f10.pdf""#),
        );
        let stored = client
            .insert_resident_document(&InsertResidentDocumentParameters {
                session_id: SessionId::new("abc-123"),
                resident_id: 5,
                document_type_id: 2,
                document_name: "Intake letter".to_string(),
                file_extension: "pdf".to_string(),
                file_data_as_b64: "JVBERi0=".to_string(),
            })
            .unwrap();
        assert!(stored.ends_with(".pdf"));
        assert_eq!(
            client.transport().last_body()["params"]["FileDataAsB64"],
            "JVBERi0="
        );
    }
}

use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    DoctorVisit, GetDoctorVisitsParameters, GetNomenclatureParameters, IdValue,
    InsertDoctorVisitParameters, NomenclatureWithRateList, RemoveDoctorVisitParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_doctor_visits(
        &self,
        params: &GetDoctorVisitsParameters,
    ) -> Result<Vec<DoctorVisit>, ApiError> {
        self.call(Controller::WZS, "GetDoctorVisits", params)
    }

    pub fn get_nomenclature(
        &self,
        params: &GetNomenclatureParameters,
    ) -> Result<Vec<NomenclatureWithRateList>, ApiError> {
        self.call(Controller::WZS, "GetNomenclature", params)
    }

    /// Inserts a visit, or updates visit `params.id` when set.
    pub fn insert_doctor_visit(
        &self,
        params: &InsertDoctorVisitParameters,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "InsertDoctorVisit", params)
    }

    pub fn remove_doctor_visit(&self, params: &RemoveDoctorVisitParameters) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "RemoveDoctorVisit", params)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::ScriptedTransport;
    use crate::types::{nomenclature_filter, GetNomenclatureParameters, SessionId};
    use crate::WzsServiceClient;

    #[test]
    fn nomenclature_carries_rate_periods() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default().respond(
                200,
                r#"[{"ID":101076,"Description":"Visit","Rates":[{"ValidFrom":"2023-01-01T00:00:00","ValidUntil":"2023-12-31T00:00:00","Rate":27.69}]}]"#,
            ),
        );
        let list = client
            .get_nomenclature(&GetNomenclatureParameters {
                session_id: SessionId::new("abc-123"),
                filter_type: nomenclature_filter::DOCTOR,
                ..GetNomenclatureParameters::default()
            })
            .unwrap();
        assert_eq!(list[0].id, 101076);
        assert_eq!(list[0].rates[0].rate, 27.69);
        assert_eq!(
            client.transport().last_body(),
            json!({
                "method": "GetNomenclature",
                "params": { "SessionID": "abc-123", "FilterType": 1 }
            })
        );
    }
}

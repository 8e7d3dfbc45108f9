use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    CareMoment, CarePlanItem, GetCarePlanForResidentParameters, SessionParameters,
    SignPlannedParamParameters, SignPlannedTaskParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_care_moments(&self, params: &SessionParameters) -> Result<Vec<CareMoment>, ApiError> {
        self.call(Controller::WZS, "GetCareMoments", params)
    }

    pub fn get_care_plan_for_resident(
        &self,
        params: &GetCarePlanForResidentParameters,
    ) -> Result<Vec<CarePlanItem>, ApiError> {
        self.call(Controller::WZS, "GetCarePlanForResident", params)
    }

    pub fn sign_planned_task(&self, params: &SignPlannedTaskParameters) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "SignPlannedTask", params)
    }

    /// Records that a planned task was skipped.
    pub fn sign_planned_task_not_done(
        &self,
        params: &SignPlannedTaskParameters,
    ) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "SignPlannedTaskNotDone", params)
    }

    /// Signs a planned measurement by storing its value.
    pub fn sign_planned_param(&self, params: &SignPlannedParamParameters) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "SignPlannedParam", params)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::client::tests::ScriptedTransport;
    use crate::types::{GetCarePlanForResidentParameters, SessionId, SignPlannedTaskParameters};
    use crate::WzsServiceClient;

    #[test]
    fn open_plan_item_is_signed_not_done() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default()
                .respond(
                    200,
                    r#"[{"ID":1,"ResidentID":5,"ActionListID":12,"LinkTaskID":40,"CareMomentID":2,"UserID":null,"IsInformational":false,"IsNotDone":null}]"#,
                )
                .respond(200, ""),
        );
        let care_date = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let plan = client
            .get_care_plan_for_resident(&GetCarePlanForResidentParameters {
                session_id: SessionId::new("abc-123"),
                resident_id: "5".to_string(),
                care_date,
                care_moment_id: "2".to_string(),
            })
            .unwrap();
        assert!(plan[0].needs_signature());

        client
            .sign_planned_task_not_done(&SignPlannedTaskParameters::for_item(
                SessionId::new("abc-123"),
                &plan[0],
                care_date,
            ))
            .unwrap();
        let body = client.transport().last_body();
        assert_eq!(body["method"], "SignPlannedTaskNotDone");
        assert_eq!(body["params"]["Link"], 40);
        assert_eq!(body["params"]["CareDate"], "2024-05-06T00:00:00");
    }
}

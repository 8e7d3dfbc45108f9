use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ActionList, CreateObservationParameters, CreateRegistrationParameters,
    GetParamDetailParameters, InsertParamParameters, ParamDetail, Parameter, SessionParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    /// Measurable parameters (weight, blood pressure, ...).
    pub fn get_param_list(&self, params: &SessionParameters) -> Result<Vec<Parameter>, ApiError> {
        self.call(Controller::WZS, "GetParamList", params)
    }

    pub fn get_param_details(
        &self,
        params: &GetParamDetailParameters,
    ) -> Result<Vec<ParamDetail>, ApiError> {
        self.call(Controller::WZS, "GetParamDetails", params)
    }

    pub fn get_action_list(&self, params: &SessionParameters) -> Result<Vec<ActionList>, ApiError> {
        self.call(Controller::WZS, "GetActionList", params)
    }

    pub fn insert_param(&self, params: &InsertParamParameters) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "InsertParam", params)
    }

    pub fn create_observation(&self, params: &CreateObservationParameters) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "CreateObservation", params)
    }

    pub fn create_registration(
        &self,
        params: &CreateRegistrationParameters,
    ) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "CreateRegistration", params)
    }
}

use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ActiveFilterParameters, Call, CallReason, CallV2, EditCallForResidentParameters,
    GetCallByIdParameters, GetCallsForResidentParameters, GetCallsForUserParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_call_by_id(&self, params: &GetCallByIdParameters) -> Result<Vec<Call>, ApiError> {
        self.call(Controller::WZS, "GetCallByID", params)
    }

    /// Same lookup, with unset timestamps reported as `None`.
    pub fn get_call_by_id_v2(
        &self,
        params: &GetCallByIdParameters,
    ) -> Result<Vec<CallV2>, ApiError> {
        self.call(Controller::WZS, "GetCallByID_v2", params)
    }

    pub fn get_calls_for_resident(
        &self,
        params: &GetCallsForResidentParameters,
    ) -> Result<Vec<Call>, ApiError> {
        self.call(Controller::WZS, "GetCallsForResident", params)
    }

    pub fn get_calls_for_resident_v2(
        &self,
        params: &GetCallsForResidentParameters,
    ) -> Result<Vec<CallV2>, ApiError> {
        self.call(Controller::WZS, "GetCallsForResident_v2", params)
    }

    pub fn get_calls_for_user(
        &self,
        params: &GetCallsForUserParameters,
    ) -> Result<Vec<CallV2>, ApiError> {
        self.call(Controller::WZS, "GetCallsForUser", params)
    }

    pub fn get_call_reasons(
        &self,
        params: &ActiveFilterParameters,
    ) -> Result<Vec<CallReason>, ApiError> {
        // The service spells this method with a capital L.
        self.call(Controller::WZS, "GetCalLReasons", params)
    }

    /// Creates or updates the call with external id `params.call_id`.
    pub fn edit_call_for_resident(
        &self,
        params: &EditCallForResidentParameters,
    ) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "EditCallForResident", params)
    }
}

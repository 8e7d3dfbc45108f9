use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ActiveFilterParameters, GetWoundClassificationFieldsParams, GetWoundsParams, IdValue,
    InsertResidentWoundClassificationParameters, InsertResidentWoundParameters, ResidentWound,
    SessionParameters, WoundCategory, WoundClassificationField, WoundOrigin,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_wound_categories(
        &self,
        params: &ActiveFilterParameters,
    ) -> Result<Vec<WoundCategory>, ApiError> {
        self.call(Controller::WZS, "GetWoundCategories", params)
    }

    pub fn get_wound_origins(&self, params: &SessionParameters) -> Result<Vec<WoundOrigin>, ApiError> {
        self.call(Controller::WZS, "GetWoundOrigins", params)
    }

    /// Field definitions for the names listed by a category's
    /// `classification_fields`.
    pub fn get_wound_classification_fields(
        &self,
        params: &GetWoundClassificationFieldsParams,
    ) -> Result<Vec<WoundClassificationField>, ApiError> {
        self.call(Controller::WZS, "GetWoundClassificationFields", params)
    }

    pub fn get_wounds(&self, params: &GetWoundsParams) -> Result<Vec<ResidentWound>, ApiError> {
        self.call(Controller::WZS, "GetWounds", params)
    }

    pub fn insert_resident_wound(
        &self,
        params: &InsertResidentWoundParameters,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "InsertResidentWound", params)
    }

    pub fn insert_resident_wound_classification(
        &self,
        params: &InsertResidentWoundClassificationParameters,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "InsertResidentWoundClassification", params)
    }
}

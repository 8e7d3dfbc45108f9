use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    CountryCode, DateTimeAsCareMoment, DateTimeToCaremomentParameters, DbImage,
    GetCountryCodesParameters, GetImageStatusParameters, GetImagesParameters,
    GetLookupValuesParameters, GetModifiedObjectsParameters, GetTextParameters, IdValue,
    ImageStatus, LookupValue, ModifiedObject, UploadDbImageParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    /// Images with their base64 payload, in the requested size.
    pub fn get_images(&self, params: &GetImagesParameters) -> Result<Vec<DbImage>, ApiError> {
        self.call(Controller::WZS, "GetImages", params)
    }

    pub fn get_image_status(
        &self,
        params: &GetImageStatusParameters,
    ) -> Result<Vec<ImageStatus>, ApiError> {
        self.call(Controller::WZS, "GetImageStatus", params)
    }

    /// Translated text for a text id, in the requested or session language.
    pub fn get_text(&self, params: &GetTextParameters) -> Result<String, ApiError> {
        self.call(Controller::WZS, "GetText", params)
    }

    pub fn date_time_to_caremoment(
        &self,
        params: &DateTimeToCaremomentParameters,
    ) -> Result<Vec<DateTimeAsCareMoment>, ApiError> {
        self.call(Controller::WZS, "DateTimeToCaremoment", params)
    }

    pub fn upload_db_image(&self, params: &UploadDbImageParameters) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "UploadDBImage", params)
    }

    pub fn get_modified_objects(
        &self,
        params: &GetModifiedObjectsParameters,
    ) -> Result<Vec<ModifiedObject>, ApiError> {
        self.call(Controller::WZS, "GetModifiedObjects", params)
    }

    pub fn get_country_codes(
        &self,
        params: &GetCountryCodesParameters,
    ) -> Result<Vec<CountryCode>, ApiError> {
        self.call(Controller::WZS, "GetCountryCodes", params)
    }

    pub fn get_lookup_values(
        &self,
        params: &GetLookupValuesParameters,
    ) -> Result<Vec<LookupValue>, ApiError> {
        self.call(Controller::WZS, "GetLookUpValues", params)
    }
}

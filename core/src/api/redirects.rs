use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{GetRedirectUrlForResidentParams, GetResidentIdsForRedirectParams, IdValue};

impl<T: Transport> WzsServiceClient<T> {
    /// Partner application URL that opens on the given resident.
    pub fn get_redirect_url_for_resident(
        &self,
        params: &GetRedirectUrlForResidentParams,
    ) -> Result<String, ApiError> {
        self.call(Controller::WZS, "GetRedirectURLForResident", params)
    }

    /// Residents the named redirect is configured for.
    pub fn get_resident_ids_for_redirect(
        &self,
        params: &GetResidentIdsForRedirectParams,
    ) -> Result<Vec<IdValue>, ApiError> {
        self.call(Controller::WZS, "GetResidentIDsForRedirect", params)
    }
}

use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    FallIncident, GetFallIncidentsParameters, IdValue, RegisterFallIncidentParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_fall_incidents(
        &self,
        params: &GetFallIncidentsParameters,
    ) -> Result<Vec<FallIncident>, ApiError> {
        self.call(Controller::WZS, "GetFallIncidents", params)
    }

    /// Registers a fall. Unless `in_diary` is `Some(false)` the service also
    /// writes a diary observation.
    pub fn register_fall_incident(
        &self,
        params: &RegisterFallIncidentParameters,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "RegisterFallIncident", params)
    }
}

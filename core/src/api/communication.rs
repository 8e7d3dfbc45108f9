use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    Appointment, AppointmentType, CommunicationItem, CreateAppointmentParameters, Diary, DiaryV2,
    GetAppointmentsParameters, GetCommunicationItemsParameters, GetDiaryParameters,
    GetDiaryParametersV2, GetModLinkablesParameters, MarkAllCommunicationAsReadParameters,
    MarkCommunicationAsReadParameters, ModLinkable, Module, RespondToCommunicationParameters,
    SessionParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_appointments(
        &self,
        params: &GetAppointmentsParameters,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.call(Controller::WZS, "GetAppointments", params)
    }

    pub fn get_appointment_types(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<AppointmentType>, ApiError> {
        self.call(Controller::WZS, "GetAppointmentTypes", params)
    }

    pub fn get_communication_items(
        &self,
        params: &GetCommunicationItemsParameters,
    ) -> Result<Vec<CommunicationItem>, ApiError> {
        self.call(Controller::WZS, "GetCommunicationItems", params)
    }

    /// Resident diary only. [`get_diary_v2`](Self::get_diary_v2) also
    /// returns general entries.
    pub fn get_diary(&self, params: &GetDiaryParameters) -> Result<Vec<Diary>, ApiError> {
        self.call(Controller::WZS, "GetDiary", params)
    }

    pub fn get_diary_v2(&self, params: &GetDiaryParametersV2) -> Result<Vec<DiaryV2>, ApiError> {
        self.call(Controller::WZS, "GetDiary_v2", params)
    }

    pub fn get_modules(&self, params: &SessionParameters) -> Result<Vec<Module>, ApiError> {
        self.call(Controller::WZS, "GetModules", params)
    }

    pub fn create_appointment(&self, params: &CreateAppointmentParameters) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "CreateAppointment", params)
    }

    pub fn mark_communication_as_read(
        &self,
        params: &MarkCommunicationAsReadParameters,
    ) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "MarkCommunicationAsRead", params)
    }

    /// Returns the number of messages that changed state.
    pub fn mark_all_communication_as_read(
        &self,
        params: &MarkAllCommunicationAsReadParameters,
    ) -> Result<i32, ApiError> {
        self.call(Controller::WZS, "MarkAllCommunicationAsRead", params)
    }

    /// Returns the id of the created message.
    pub fn respond_to_communication(
        &self,
        params: &RespondToCommunicationParameters,
    ) -> Result<i32, ApiError> {
        self.call(Controller::WZS, "RespondToCommunication", params)
    }

    pub fn get_mod_linkables(
        &self,
        params: &GetModLinkablesParameters,
    ) -> Result<Vec<ModLinkable>, ApiError> {
        self.call(Controller::WZS, "GetModlinkables", params)
    }
}

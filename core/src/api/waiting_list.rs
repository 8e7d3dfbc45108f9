use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    EditWaitingListContactParams, EditWaitingListEntryParams, GetWaitingListEntriesParams,
    IdValue, RemoveWaitingListContactParams, SessionParameters, WaitingListEntry,
    WaitingListStatus,
};

impl<T: Transport> WzsServiceClient<T> {
    /// Returns the id of the created or updated entry.
    pub fn edit_waiting_list_entry(
        &self,
        params: &EditWaitingListEntryParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "EditWaitingListEntry", params)
    }

    pub fn get_waiting_list_entries(
        &self,
        params: &GetWaitingListEntriesParams,
    ) -> Result<Vec<WaitingListEntry>, ApiError> {
        self.call(Controller::WZS, "GetWaitingListEntries", params)
    }

    /// Returns the id of the entry the contact belongs to.
    pub fn edit_waiting_list_contact(
        &self,
        params: &EditWaitingListContactParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "EditWaitingListContact", params)
    }

    pub fn get_waiting_list_status(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<WaitingListStatus>, ApiError> {
        self.call(Controller::WZS, "GetWaitingListStatus", params)
    }

    /// Returns the id of the entry the contact belonged to.
    pub fn remove_waiting_list_contact(
        &self,
        params: &RemoveWaitingListContactParams,
    ) -> Result<IdValue, ApiError> {
        self.call(Controller::WZS, "RemoveWaitingListContact", params)
    }
}

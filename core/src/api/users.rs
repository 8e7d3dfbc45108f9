use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{GetUserForUserKeyParams, GetUserListParameters, User};

impl<T: Transport> WzsServiceClient<T> {
    /// Looks a user up by the key of an external identity system.
    pub fn get_user_for_user_key(
        &self,
        params: &GetUserForUserKeyParams,
    ) -> Result<Vec<User>, ApiError> {
        self.call(Controller::WZS, "GetUserForUserKey", params)
    }

    pub fn get_user_list(&self, params: &GetUserListParameters) -> Result<Vec<User>, ApiError> {
        self.call(Controller::WZS, "GetUserList", params)
    }
}

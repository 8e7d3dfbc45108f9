use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    AppNotification, EditAppNotificationParameters, RemoveAppNotificationParameters,
    SessionParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    /// Notifications that have not expired yet.
    pub fn get_current_app_notifications(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<AppNotification>, ApiError> {
        self.call(Controller::WZS, "GetCurrentAppNotifications", params)
    }

    /// Creates or replaces a notification and returns the current set.
    pub fn edit_app_notification(
        &self,
        params: &EditAppNotificationParameters,
    ) -> Result<Vec<AppNotification>, ApiError> {
        self.call(Controller::WZS, "EditAppNotification", params)
    }

    pub fn remove_app_notification(
        &self,
        params: &RemoveAppNotificationParameters,
    ) -> Result<(), ApiError> {
        self.call_void(Controller::WZS, "RemoveAppNotification", params)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use crate::client::tests::ScriptedTransport;
    use crate::types::{
        EditAppNotificationParameters, RemoveAppNotificationParameters, SessionId,
    };
    use crate::WzsServiceClient;

    #[test]
    fn edit_returns_current_set_and_remove_sends_guid() {
        let client = WzsServiceClient::with_transport(
            "http://localhost:9000/",
            ScriptedTransport::default()
                .respond(
                    200,
                    r##"[{"ID":"6f1c2b1e-8a7d-4c55-9a33-0d2f5e4b7a10","Text":"Lunch","Color":"#3c763d","ShowOnlyForDepartmentIDs":[],"ExpiresOn":"2024-05-06T12:10:00"}]"##,
                )
                .respond(200, ""),
        );
        let mut params = EditAppNotificationParameters::new(SessionId::new("abc-123"), "Lunch", 300);
        params.color = Some("#3c763d".to_string());
        let current = client.edit_app_notification(&params).unwrap();
        assert_eq!(current[0].text.as_deref(), Some("Lunch"));
        assert_eq!(client.transport().last_body()["params"]["TimeToLiveInSec"], 300);

        client
            .remove_app_notification(&RemoveAppNotificationParameters {
                session_id: SessionId::new("abc-123"),
                id: current[0].id,
            })
            .unwrap();
        let expected: Uuid = "6f1c2b1e-8a7d-4c55-9a33-0d2f5e4b7a10".parse().unwrap();
        assert_eq!(current[0].id, expected);
        assert_eq!(
            client.transport().last_body(),
            json!({
                "method": "RemoveAppNotification",
                "params": { "SessionID": "abc-123", "ID": "6f1c2b1e-8a7d-4c55-9a33-0d2f5e4b7a10" }
            })
        );
    }
}

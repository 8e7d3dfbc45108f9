use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    GetWzDatabasesParams, LoginInfo, LoginParams, LoginUserByExtIdParams,
    LoginValidatedUserByEmailParams, LoginValidatedUserByUserNameParams, SconDb,
    ValidateUserByEmailParams, ValidateUserByUserNameParams,
};

impl<T: Transport> WzsServiceClient<T> {
    /// Open a session. The returned `session_id` authenticates every later
    /// call; it is never refreshed by the client.
    pub fn login(&self, params: &LoginParams) -> Result<LoginInfo, ApiError> {
        self.call(Controller::LOGIN, "login", params)
    }

    /// Databases reachable with the session's application key.
    pub fn get_wz_databases(&self, params: &GetWzDatabasesParams) -> Result<Vec<SconDb>, ApiError> {
        self.call(Controller::LOGIN, "GetWZDatabases", params)
    }

    pub fn login_user_by_ext_id(&self, params: &LoginUserByExtIdParams) -> Result<LoginInfo, ApiError> {
        self.call(Controller::LOGIN, "LoginUserByExtId", params)
    }

    /// Requires an earlier successful [`validate_user_by_email`](Self::validate_user_by_email).
    pub fn login_validated_user_by_email(
        &self,
        params: &LoginValidatedUserByEmailParams,
    ) -> Result<LoginInfo, ApiError> {
        self.call(Controller::LOGIN, "LoginValidatedUserByEmail", params)
    }

    pub fn validate_user_by_email(&self, params: &ValidateUserByEmailParams) -> Result<bool, ApiError> {
        self.call(Controller::LOGIN, "ValidateUserByEmail", params)
    }

    /// Requires an earlier successful
    /// [`validate_user_by_username`](Self::validate_user_by_username).
    pub fn login_validated_user_by_username(
        &self,
        params: &LoginValidatedUserByUserNameParams,
    ) -> Result<LoginInfo, ApiError> {
        self.call(Controller::LOGIN, "LoginValidatedUserByUsername", params)
    }

    pub fn validate_user_by_username(
        &self,
        params: &ValidateUserByUserNameParams,
    ) -> Result<bool, ApiError> {
        self.call(Controller::LOGIN, "ValidateUserByUserName", params)
    }

    /// Names of the active connections on the server. Sent without params.
    pub fn connections(&self) -> Result<Vec<String>, ApiError> {
        self.call_without_params(Controller::LOGIN_LEGACY, "connections")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::ScriptedTransport;
    use crate::types::{LoginParams, SessionId, ValidateUserByEmailParams};
    use crate::{ApiError, WzsServiceClient};

    fn client(transport: ScriptedTransport) -> WzsServiceClient<ScriptedTransport> {
        WzsServiceClient::with_transport("http://localhost:9000/", transport)
    }

    #[test]
    fn login_posts_credentials_to_login_controller() {
        let client = client(ScriptedTransport::default().respond(
            200,
            r#"{"firstName":"John","lastName":"Doe","languageID":1,"userID":12,"sessionID":"abc-123"}"#,
        ));
        let info = client
            .login(&LoginParams::new("JD", "SilverMeadows", "secret", "demo-key"))
            .unwrap();
        assert_eq!(info.session_id, SessionId::new("abc-123"));

        let transport = client.transport();
        assert_eq!(transport.requests.borrow()[0].url, "http://localhost:9000/api/login");
        assert_eq!(
            transport.last_body(),
            json!({
                "method": "login",
                "params": {
                    "aUserID": "JD@SilverMeadows",
                    "aPassword": "secret",
                    "aApplicationKey": "demo-key"
                }
            })
        );
    }

    #[test]
    fn rejected_login_is_client_error() {
        let client = client(
            ScriptedTransport::default().respond(401, r#"{"message":"Invalid user or password"}"#),
        );
        let err = client
            .login(&LoginParams::new("JD", "SilverMeadows", "wrong", "demo-key"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Client { status: 401, .. }));
        assert_eq!(err.remote_message(), Some("Invalid user or password"));
    }

    #[test]
    fn connections_uses_capitalised_controller_and_no_params() {
        let client = client(ScriptedTransport::default().respond(200, r#"["conn-1","conn-2"]"#));
        let names = client.connections().unwrap();
        assert_eq!(names, vec!["conn-1", "conn-2"]);

        let transport = client.transport();
        assert_eq!(transport.requests.borrow()[0].url, "http://localhost:9000/api/Login");
        assert_eq!(transport.last_body(), json!({ "method": "connections" }));
    }

    #[test]
    fn validate_by_email_returns_flag() {
        let client = client(ScriptedTransport::default().respond(200, "true"));
        let params = ValidateUserByEmailParams {
            session_id: SessionId::new("abc-123"),
            user_email: "jd@example.org".to_string(),
            user_password: "secret".to_string(),
            database_id: Some(3),
        };
        assert!(client.validate_user_by_email(&params).unwrap());
        assert_eq!(client.transport().last_body()["method"], "ValidateUserByEmail");
    }
}

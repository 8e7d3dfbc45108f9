//! DTOs for the `login` controller.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// Parameters for `login`.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginParams {
    /// User initials, `@`, then the target database display name,
    /// e.g. `JD@SilverMeadows`.
    #[serde(rename = "aUserID")]
    pub user_id: String,
    #[serde(rename = "aPassword")]
    pub password: String,
    /// Key issued per integrating application.
    #[serde(rename = "aApplicationKey")]
    pub application_key: String,
}

impl LoginParams {
    pub fn new(login: &str, domain: &str, password: &str, application_key: &str) -> Self {
        Self {
            user_id: format!("{login}@{domain}"),
            password: password.to_string(),
            application_key: application_key.to_string(),
        }
    }
}

impl fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginParams")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .field("application_key", &"***")
            .finish()
    }
}

/// Session details returned by every login variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginInfo {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    /// Session language; string results are translated into it.
    #[serde(rename = "languageID")]
    pub language_id: u8,
    #[serde(rename = "userID")]
    pub user_id: i16,
    #[serde(rename = "sessionID")]
    pub session_id: SessionId,
    /// Application that opened the session.
    #[serde(rename = "SConName")]
    pub application_name: Option<String>,
    #[serde(rename = "LoggedOnToTestEnv")]
    pub logged_on_to_test_env: Option<bool>,
    #[serde(rename = "ServerSettings")]
    pub server_settings: Option<PublicServerSettings>,
    #[serde(rename = "Availablefeatures")]
    pub available_features: Option<Vec<String>>,
    #[serde(rename = "ActiveWZXLicenses")]
    pub active_wzx_licenses: Option<Vec<String>>,
}

/// How the customer's service installation is configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PublicServerSettings {
    /// Minutes a session stays alive without requests.
    pub server_session_time_out: i32,
    pub client_session_time_out: i32,
    pub check_minutes: i32,
    #[serde(rename = "ServerInstallationID")]
    pub server_installation_id: Option<String>,
    pub server_port: i32,
    #[serde(rename = "UseSSL")]
    pub use_ssl: bool,
    pub server_host_url: Option<String>,
    /// Either a `"1.2.3.4"` string or a component object depending on the
    /// server's serializer, so it is kept as raw JSON.
    pub server_version: Option<serde_json::Value>,
}

/// Care-home database reachable with the application key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SconDb {
    pub id: i32,
    #[serde(rename = "dbName")]
    pub db_name: Option<String>,
    /// Used as the suffix after `@` in `LoginParams::user_id`.
    #[serde(rename = "dbDisplayName")]
    pub db_display_name: Option<String>,
    #[serde(rename = "lastCheckedfornotifs", with = "crate::dates::option")]
    pub last_checked_for_notifications: Option<NaiveDateTime>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetWzDatabasesParams {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
}

/// Login by badge number, iButton or similar external id. No password.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginUserByExtIdParams {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
    #[serde(rename = "externalId")]
    pub external_id: String,
    #[serde(rename = "databaseID", skip_serializing_if = "Option::is_none")]
    pub database_id: Option<i16>,
    /// `None` keeps the user's default; 1 forces Dutch, 2 French.
    #[serde(rename = "languageID", skip_serializing_if = "Option::is_none")]
    pub language_id: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginValidatedUserByEmailParams {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "databaseID", skip_serializing_if = "Option::is_none")]
    pub database_id: Option<i16>,
    #[serde(rename = "languageID", skip_serializing_if = "Option::is_none")]
    pub language_id: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginValidatedUserByUserNameParams {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "databaseID", skip_serializing_if = "Option::is_none")]
    pub database_id: Option<i16>,
    #[serde(rename = "languageID", skip_serializing_if = "Option::is_none")]
    pub language_id: Option<u8>,
}

/// One-time validation with email and password; enables
/// `login_validated_user_by_email` afterwards.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ValidateUserByEmailParams {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "userPassword")]
    pub user_password: String,
    #[serde(rename = "databaseID", skip_serializing_if = "Option::is_none")]
    pub database_id: Option<i16>,
}

impl fmt::Debug for ValidateUserByEmailParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidateUserByEmailParams")
            .field("user_email", &self.user_email)
            .field("user_password", &"***")
            .field("database_id", &self.database_id)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ValidateUserByUserNameParams {
    #[serde(rename = "sessionid")]
    pub session_id: SessionId,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userPassword")]
    pub user_password: String,
    #[serde(rename = "databaseID", skip_serializing_if = "Option::is_none")]
    pub database_id: Option<i16>,
}

impl fmt::Debug for ValidateUserByUserNameParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidateUserByUserNameParams")
            .field("user_name", &self.user_name)
            .field("user_password", &"***")
            .field("database_id", &self.database_id)
            .finish_non_exhaustive()
    }
}

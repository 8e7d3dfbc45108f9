//! DTOs for the user directory.

use serde::{Deserialize, Serialize};

use super::SessionId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetUserForUserKeyParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Badge or iButton code configured for the user.
    #[serde(rename = "UserKey")]
    pub user_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetUserListParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "Active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "UserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

/// A staff member of the care home.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub initials: Option<String>,
    pub password: Option<String>,
    pub intellia_key: Option<String>,
    pub active: bool,
    #[serde(rename = "LanguageID")]
    pub language_id: i32,
    pub level: i32,
    pub email: Option<String>,
    #[serde(rename = "IButton")]
    pub i_button: Option<String>,
    /// National register number.
    #[serde(rename = "INSZNumber")]
    pub insz_number: Option<String>,
    /// RIZIV/INAMI practitioner number.
    pub riziv_number: Option<String>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("first_name", &self.first_name)
            .field("initials", &self.initials)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("active", &self.active)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

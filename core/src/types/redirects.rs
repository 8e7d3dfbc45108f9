//! DTOs for the configured redirects to partner applications.

use serde::{Deserialize, Serialize};

use super::SessionId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRedirectUrlForResidentParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    pub redirect_name: String,
    #[serde(rename = "ResidentID")]
    pub resident_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResidentIdsForRedirectParams {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    pub redirect_name: String,
}

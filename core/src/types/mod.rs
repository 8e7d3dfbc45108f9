//! Parameter and result DTOs, grouped the way the service groups its methods.
//!
//! Field names on the wire are the service's own (`SessionID`, `aUserID`,
//! `sessionid`, ...), mapped onto snake-case Rust fields with serde renames.
//! Result types default every missing member so older servers that omit a
//! field still deserialize.

pub mod calls;
pub mod care_planning;
pub mod communication;
pub mod doctors;
pub mod fall_incidents;
pub mod invoicing;
pub mod login;
pub mod medication;
pub mod notifications;
pub mod redirects;
pub mod registrations;
pub mod residents;
pub mod rooms;
pub mod users;
pub mod utilities;
pub mod waiting_list;
pub mod wounds;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use calls::*;
pub use care_planning::*;
pub use communication::*;
pub use doctors::*;
pub use fall_incidents::*;
pub use invoicing::*;
pub use login::*;
pub use medication::*;
pub use notifications::*;
pub use redirects::*;
pub use registrations::*;
pub use residents::*;
pub use rooms::*;
pub use users::*;
pub use utilities::*;
pub use waiting_list::*;
pub use wounds::*;

/// Session handle returned by a successful login.
///
/// Opaque to the client: it is attached to later requests and never
/// refreshed. Expiry is only observable as a `ClientError` from the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a freshly inserted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdValue {
    #[serde(rename = "ID")]
    pub id: Option<i32>,
}

/// Number of records a call touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountValue {
    #[serde(rename = "Count")]
    pub count: Option<i32>,
}

/// Parameters of the list calls that take nothing but the session
/// (`GetDepartmentList`, `GetCareMoments`, `GetModules`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
}

impl SessionParameters {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// Session plus the optional `Active` filter of the catalogue calls
/// (call reasons, vaccination types, wound categories, invoice codes).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveFilterParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// `None` returns active and inactive entries.
    #[serde(rename = "Active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ActiveFilterParameters {
    pub fn active_only(session_id: SessionId) -> Self {
        Self {
            session_id,
            active: Some(true),
        }
    }
}

/// Comma separated id list, the service's format for multi-id filters.
pub fn id_list(ids: &[i32]) -> String {
    ids.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

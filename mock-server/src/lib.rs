//! In-memory stub of the WZS.Net service.
//!
//! Serves `POST /api/login` (also reachable as `/api/Login`) and
//! `POST /api/wzs`, dispatching on the envelope's `method`. Failures answer
//! with the service's `{ "message": ... }` body: 401 for bad credentials or an
//! unknown session, 400 for an unknown method or bad params, and 500 for the
//! reserved `__fail` method.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// Method name that always answers 500.
pub const FAIL_METHOD: &str = "__fail";

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// Error answered with `{ "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub message: String,
}

impl ApiFailure {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn server(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Department {
    #[serde(rename = "ID")]
    pub id: i32,
    pub description: String,
    pub phone: Option<String>,
}

/// Resident as the service serializes it. Dates are kept as wire strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resident {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub call_name: Option<String>,
    #[serde(rename = "BD")]
    pub birth_date: String,
    #[serde(rename = "BP")]
    pub birth_place: Option<String>,
    #[serde(rename = "RoomID")]
    pub room_id: i32,
    pub nat_number: Option<String>,
    pub sex: bool,
    pub nationality: i32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    pub stamp: String,
    pub mut_no: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub town: Option<String>,
    pub room: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "DepartmentID")]
    pub department_id: i32,
    pub active: bool,
    pub current_presence_state: i32,
    pub current_presence_desc: Option<String>,
    pub last_modified_on: Option<String>,
    pub vita_link_informed_consent_since: Option<String>,
    pub belrai_informed_consent_since: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Account {
    pub user_id: String,
    pub password: String,
    pub application_key: String,
    pub first_name: String,
    pub last_name: String,
    pub number: i16,
}

#[derive(Deserialize)]
struct LoginParams {
    #[serde(rename = "aUserID")]
    user_id: String,
    #[serde(rename = "aPassword")]
    password: String,
    #[serde(rename = "aApplicationKey")]
    application_key: String,
}

#[derive(Default, Deserialize)]
struct ResidentFilter {
    #[serde(rename = "DepartmentID")]
    department_id: Option<i32>,
    #[serde(rename = "RoomID")]
    room_id: Option<i32>,
    #[serde(rename = "ResidentID")]
    resident_id: Option<i32>,
    #[serde(rename = "Active")]
    active: Option<bool>,
}

#[derive(Deserialize)]
struct MarkRead {
    #[serde(rename = "CommunicationID")]
    communication_id: i32,
    #[serde(rename = "Read")]
    read: bool,
}

/// Accounts, sessions and care-home data served by the stub.
#[derive(Debug, Default)]
pub struct Directory {
    accounts: Vec<Account>,
    sessions: HashMap<String, String>,
    departments: Vec<Department>,
    residents: Vec<Resident>,
    communications: HashMap<i32, bool>,
}

pub type SharedDirectory = Arc<RwLock<Directory>>;

impl Directory {
    /// One account (`JD@SilverMeadows` / `secret` / `demo-key`), two
    /// departments, four residents in non-sorted order (one archived) and
    /// three unread communication items.
    pub fn seeded() -> Self {
        Directory::default()
            .with_account(Account {
                user_id: "JD@SilverMeadows".to_string(),
                password: "secret".to_string(),
                application_key: "demo-key".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                number: 12,
            })
            .with_department(Department {
                id: 1,
                description: "Gelijkvloers".to_string(),
                phone: Some("016 00 00 01".to_string()),
            })
            .with_department(Department {
                id: 2,
                description: "Eerste verdieping".to_string(),
                phone: None,
            })
            .with_resident(Resident {
                id: 5,
                name: Some("Peeters".to_string()),
                first_name: Some("Maria".to_string()),
                call_name: Some("Mieke".to_string()),
                birth_date: "1931-04-02T00:00:00".to_string(),
                birth_place: Some("Leuven".to_string()),
                room_id: 101,
                sex: false,
                room: Some("101".to_string()),
                department: Some("Gelijkvloers".to_string()),
                department_id: 1,
                vita_link_informed_consent_since: Some("2020-01-01T00:00:00".to_string()),
                ..resident_defaults()
            })
            .with_resident(Resident {
                id: 2,
                name: Some("Claes".to_string()),
                first_name: Some("Jozef".to_string()),
                call_name: Some("Jef, \"de smid\"".to_string()),
                birth_date: "1928-11-30T00:00:00".to_string(),
                birth_place: Some("Mechelen".to_string()),
                room_id: 201,
                sex: true,
                room: Some("201".to_string()),
                department: Some("Eerste verdieping".to_string()),
                department_id: 2,
                ..resident_defaults()
            })
            .with_resident(Resident {
                id: 9,
                name: Some("Janssens".to_string()),
                first_name: Some("Anna".to_string()),
                call_name: Some(String::new()),
                birth_date: "1940-07-15T00:00:00".to_string(),
                address: Some("  Kerkstraat 1  ".to_string()),
                room_id: 102,
                room: Some("102".to_string()),
                department: Some("Gelijkvloers".to_string()),
                department_id: 1,
                ..resident_defaults()
            })
            .with_resident(Resident {
                id: 7,
                name: Some("Willems".to_string()),
                first_name: Some("Karel".to_string()),
                birth_date: "1935-02-01T00:00:00".to_string(),
                room_id: 202,
                sex: true,
                room: Some("202".to_string()),
                department: Some("Eerste verdieping".to_string()),
                department_id: 2,
                active: false,
                current_presence_state: 6,
                current_presence_desc: Some("Vertrokken".to_string()),
                ..resident_defaults()
            })
            .with_communications(&[100, 101, 102])
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.departments.push(department);
        self
    }

    pub fn with_resident(mut self, resident: Resident) -> Self {
        self.residents.push(resident);
        self
    }

    pub fn with_communications(mut self, ids: &[i32]) -> Self {
        self.communications.extend(ids.iter().map(|id| (*id, false)));
        self
    }

    /// Open a session for `user_id` without checking credentials.
    pub fn open_session(&mut self, user_id: &str) -> String {
        let session = Uuid::new_v4().to_string();
        self.sessions.insert(session.clone(), user_id.to_string());
        session
    }

    pub fn is_read(&self, communication_id: i32) -> Option<bool> {
        self.communications.get(&communication_id).copied()
    }

    fn require_session(&self, params: &Value, key: &str) -> Result<(), ApiFailure> {
        let session = params.get(key).and_then(Value::as_str).unwrap_or_default();
        if self.sessions.contains_key(session) {
            Ok(())
        } else {
            Err(ApiFailure::unauthorized("Session expired"))
        }
    }

    fn authenticate(&self, params: &LoginParams) -> Option<&Account> {
        self.accounts.iter().find(|a| {
            a.user_id.eq_ignore_ascii_case(&params.user_id)
                && a.password == params.password
                && a.application_key == params.application_key
        })
    }

    fn residents_matching(&self, filter: &ResidentFilter) -> Vec<Resident> {
        self.residents
            .iter()
            .filter(|r| filter.department_id.is_none_or(|id| r.department_id == id))
            .filter(|r| filter.room_id.is_none_or(|id| r.room_id == id))
            .filter(|r| filter.resident_id.is_none_or(|id| r.id == id))
            .filter(|r| filter.active.is_none_or(|active| r.active == active))
            .cloned()
            .collect()
    }
}

fn resident_defaults() -> Resident {
    Resident {
        nationality: 1,
        doctor_id: 3,
        stamp: "2019-06-01T10:12:00".to_string(),
        zip_code: Some("3000".to_string()),
        town: Some("Leuven".to_string()),
        active: true,
        current_presence_state: 1,
        current_presence_desc: Some("Aanwezig".to_string()),
        ..Resident::default()
    }
}

fn params_as<T: for<'de> Deserialize<'de>>(params: &Value) -> Result<T, ApiFailure> {
    serde_json::from_value(params.clone()).map_err(|e| ApiFailure::bad_request(e.to_string()))
}

pub fn app() -> Router {
    app_with(Directory::seeded())
}

pub fn app_with(directory: Directory) -> Router {
    router(Arc::new(RwLock::new(directory)))
}

/// Router over caller-owned state, so tests can inspect it afterwards.
pub fn router(state: SharedDirectory) -> Router {
    Router::new()
        .route("/api/login", post(login_controller))
        .route("/api/Login", post(login_controller))
        .route("/api/wzs", post(data_controller))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Directory::seeded()).await
}

pub async fn run_with(listener: TcpListener, directory: Directory) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(directory)).await
}

async fn login_controller(
    State(state): State<SharedDirectory>,
    Json(request): Json<RpcRequest>,
) -> Result<Json<Value>, ApiFailure> {
    debug!(method = %request.method, "login controller");
    match request.method.as_str() {
        "login" => {
            let params: LoginParams = params_as(&request.params)?;
            let mut directory = state.write().await;
            let account = directory
                .authenticate(&params)
                .cloned()
                .ok_or_else(|| ApiFailure::unauthorized("Invalid user or password"))?;
            let session = directory.open_session(&account.user_id);
            info!(user = %account.user_id, "session opened");
            Ok(Json(json!({
                "firstName": account.first_name,
                "lastName": account.last_name,
                "languageID": 1,
                "userID": account.number,
                "sessionID": session,
                "SConName": "StartResidents",
                "LoggedOnToTestEnv": true,
                "ServerSettings": {
                    "ServerSessionTimeOut": 20,
                    "ClientSessionTimeOut": 15,
                    "CheckMinutes": 5,
                    "ServerInstallationID": "mock",
                    "ServerPort": 9000,
                    "UseSSL": false,
                    "ServerHostUrl": "http://localhost:9000/",
                    "ServerVersion": "4.2.0.0"
                },
                "Availablefeatures": [],
                "ActiveWZXLicenses": []
            })))
        }
        "connections" => {
            let directory = state.read().await;
            let mut users: Vec<&String> = directory.sessions.values().collect();
            users.sort();
            Ok(Json(json!(users)))
        }
        "GetWZDatabases" => {
            state.read().await.require_session(&request.params, "sessionid")?;
            Ok(Json(json!([{
                "id": 1,
                "dbName": "WZD_SILVER",
                "dbDisplayName": "SilverMeadows",
                "lastCheckedfornotifs": null,
                "version": "4.2"
            }])))
        }
        FAIL_METHOD => Err(ApiFailure::server("Simulated server failure")),
        other => Err(ApiFailure::bad_request(format!("Unknown method {other}"))),
    }
}

async fn data_controller(
    State(state): State<SharedDirectory>,
    Json(request): Json<RpcRequest>,
) -> Result<Response, ApiFailure> {
    debug!(method = %request.method, "data controller");
    if request.method == FAIL_METHOD {
        return Err(ApiFailure::server("Simulated server failure"));
    }

    let mut directory = state.write().await;
    directory.require_session(&request.params, "SessionID")?;

    match request.method.as_str() {
        "GetResidents" => {
            let filter: ResidentFilter = params_as(&request.params)?;
            Ok(Json(directory.residents_matching(&filter)).into_response())
        }
        "GetDepartmentList" => Ok(Json(directory.departments.clone()).into_response()),
        "MarkCommunicationAsRead" => {
            let params: MarkRead = params_as(&request.params)?;
            let flag = directory
                .communications
                .get_mut(&params.communication_id)
                .ok_or_else(|| ApiFailure::not_found("Communication item not found"))?;
            *flag = params.read;
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        other => Err(ApiFailure::bad_request(format!("Unknown method {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resident_serializes_wire_names() {
        let json = serde_json::to_value(resident_defaults()).unwrap();
        assert_eq!(json["ID"], 0);
        assert_eq!(json["BD"], "");
        assert_eq!(json["DepartmentID"], 0);
        assert_eq!(json["CurrentPresenceDesc"], "Aanwezig");
        assert!(json["VitaLinkInformedConsentSince"].is_null());
    }

    #[test]
    fn filter_matches_every_given_field() {
        let directory = Directory::seeded();
        let active_first_floor = ResidentFilter {
            department_id: Some(1),
            active: Some(true),
            ..ResidentFilter::default()
        };
        let ids: Vec<i32> = directory
            .residents_matching(&active_first_floor)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn empty_filter_returns_everyone_in_seed_order() {
        let directory = Directory::seeded();
        let ids: Vec<i32> = directory
            .residents_matching(&ResidentFilter::default())
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![5, 2, 9, 7]);
    }

    #[test]
    fn login_is_case_insensitive_on_user_only() {
        let directory = Directory::seeded();
        let params = LoginParams {
            user_id: "jd@silvermeadows".to_string(),
            password: "secret".to_string(),
            application_key: "demo-key".to_string(),
        };
        assert!(directory.authenticate(&params).is_some());

        let wrong = LoginParams {
            password: "SECRET".to_string(),
            ..params
        };
        assert!(directory.authenticate(&wrong).is_none());
    }

    #[test]
    fn unknown_session_is_rejected() {
        let mut directory = Directory::seeded();
        let session = directory.open_session("JD@SilverMeadows");
        assert!(directory
            .require_session(&json!({ "SessionID": session }), "SessionID")
            .is_ok());
        let err = directory
            .require_session(&json!({ "SessionID": "nope" }), "SessionID")
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}

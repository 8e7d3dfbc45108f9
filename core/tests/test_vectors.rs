//! Verify envelope building and response mapping against `test-vectors/calls.json`.
//!
//! Each case names a controller, a method and optional params, the request the
//! client must build, a simulated response, and either the parsed result or
//! the expected error. Parsed JSON is compared rather than raw strings, so
//! member order does not matter.

use serde_json::Value;
use wzs_core::{parse_result, ApiError, Controller, HttpResponse, WzsServiceClient};

const BASE_URL: &str = "http://localhost:9000/";

fn controller(name: &str) -> Controller {
    match name {
        "login" => Controller::LOGIN,
        "wzs" => Controller::WZS,
        other => panic!("unknown controller: {other}"),
    }
}

fn check_error(name: &str, err: ApiError, expected: &Value) {
    let status = expected["status"].as_u64().unwrap() as u16;
    assert_eq!(err.status(), Some(status), "{name}: status");
    match expected["kind"].as_str().unwrap() {
        "Client" => assert!(matches!(err, ApiError::Client { .. }), "{name}: expected Client, got {err:?}"),
        "Server" => assert!(matches!(err, ApiError::Server { .. }), "{name}: expected Server, got {err:?}"),
        "MalformedResponse" => assert!(
            matches!(err, ApiError::MalformedResponse { .. }),
            "{name}: expected MalformedResponse, got {err:?}"
        ),
        other => panic!("{name}: unknown error kind: {other}"),
    }
    if let Some(message) = expected.get("message") {
        assert_eq!(err.remote_message(), message.as_str(), "{name}: message");
    }
}

#[test]
fn call_test_vectors() {
    let raw = include_str!("../../test-vectors/calls.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let client = WzsServiceClient::with_transport(BASE_URL, ());
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let ctrl = controller(case["controller"].as_str().unwrap());
        let method = case["method"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = client.build_call(ctrl, method, case.get("params")).unwrap();
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: url"
        );

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let pair = h.as_array().unwrap();
                (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let result = parse_result::<Value>(&response);

        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}

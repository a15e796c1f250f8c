use crate::utils::{CannedClient, HangingClient, UnreachableClient};
use serde::Deserialize;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use xing_api_rs::http;
use xing_api_rs::http::{Method, RequestData, RequestFactory};
use xing_api_rs::spec::extract::{body, first, Extractor};
use xing_api_rs::spec::{CallError, CallSpec, CallSpecBuilder, ExtractionError};
use xing_api_rs::XingApi;

#[derive(Debug, Deserialize, Eq, PartialEq)]
struct User {
    id: String,
    name: String,
}

fn user_spec() -> CallSpec<User, Value> {
    CallSpecBuilder::get("/v1/users/{id}")
        .path_param("id", "me")
        .response_as(first(&["users"]))
        .error_as(body())
        .build()
        .expect("valid spec")
}

/// Counts how often extraction ran.
struct Counting {
    calls: Arc<AtomicUsize>,
}

impl Extractor for Counting {
    type Output = ();

    fn extract(&self, _: &Value) -> Result<(), ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn end_to_end_get() {
    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"users":[{"id":"me","name":"Ann"}]}"#,
    ));

    let user = api.execute(&user_spec()).expect("success");
    assert_eq!(
        user,
        User {
            id: "me".to_string(),
            name: "Ann".to_string()
        }
    );
}

#[test]
fn executing_twice_sends_twice() {
    let body = r#"{"users":[{"id":"me","name":"Ann"}]}"#;
    let api = XingApi::new(CannedClient::new(200, body).then(200, body));
    let spec = user_spec();

    let first = api.execute(&spec).expect("first");
    let second = api.execute(&spec).expect("second");

    assert_eq!(first, second);
    assert_eq!(api.client().requests().len(), 2);
}

#[test]
fn each_execution_sees_its_own_response() {
    let api = XingApi::new(
        CannedClient::new(503, r#"{"error_name":"SERVICE_UNAVAILABLE"}"#)
            .then(200, r#"{"users":[{"id":"me","name":"Ann"}]}"#),
    );
    let spec = user_spec();

    let err = api.execute(&spec).expect_err("unavailable");
    assert_eq!(err.status(), Some(503));
    assert_eq!(
        err.api_error().and_then(|e| e.get("error_name")),
        Some(&Value::from("SERVICE_UNAVAILABLE"))
    );

    assert!(api.execute(&spec).is_ok());
}

#[test]
fn transport_errors_are_surfaced() {
    let api = XingApi::new(UnreachableClient);
    let err = api.execute(&user_spec()).expect_err("timeout");
    assert!(matches!(err, CallError::Transport(http::Error::Timeout(_))));
}

#[test]
fn shape_errors_are_not_api_errors() {
    let api = XingApi::new(CannedClient::new(200, r#"{"user":{"id":"me"}}"#));
    let err = api.execute(&user_spec()).expect_err("wrong shape");
    assert!(matches!(
        err,
        CallError::Extraction(ExtractionError::FieldNotFound { ref path }) if path == "users"
    ));
}

#[test]
fn request_factory_is_applied() {
    struct Signed;

    impl RequestFactory for Signed {
        fn new_request(&self, method: Method, url: &str) -> RequestData {
            RequestData::new(method, url).header("Authorization", "OAuth signed")
        }
    }

    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"users":[{"id":"me","name":"Ann"}]}"#,
    ))
    .with_request_factory(Signed);

    api.execute(&user_spec()).expect("success");
    assert_eq!(
        api.client().requests()[0].header_value("authorization"),
        Some("OAuth signed")
    );
}

#[tokio::test]
async fn concurrent_async_executions_share_one_spec() {
    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"users":[{"id":"me","name":"Ann"}]}"#,
    ));
    let spec = user_spec();

    let (a, b) = tokio::join!(api.execute_async(&spec), api.execute_async(&spec));
    assert_eq!(a.expect("a"), b.expect("b"));
    assert_eq!(api.client().requests().len(), 2);
}

#[tokio::test]
async fn cancelled_execution_never_extracts() {
    let calls = Arc::new(AtomicUsize::new(0));
    let spec: CallSpec<(), Value> = CallSpecBuilder::get("/v1/users/me")
        .response_as(Counting {
            calls: calls.clone(),
        })
        .build()
        .expect("valid spec");

    let api = XingApi::new(HangingClient);
    let result = tokio::time::timeout(Duration::from_millis(20), api.execute_async(&spec)).await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn spec_can_move_between_threads() {
    let spec = Arc::new(user_spec());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let spec = Arc::clone(&spec);
            std::thread::spawn(move || {
                let client = CannedClient::new(200, r#"{"users":[{"id":"me","name":"Ann"}]}"#);
                spec.execute_sync(&client, &http::DefaultRequestFactory {})
                    .expect("success")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread").id, "me");
    }
}

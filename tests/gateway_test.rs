/// Integration tests for the HTTP gateway against a local stub backend
mod test_utilities;

use gym_console::operations::domain::EndpointDescriptor;
use gym_console::prelude::*;
use serde_json::json;
use std::time::Duration;
use test_utilities::stub_backend::{unreachable_base_url, StubBackend, StubResponse};

fn fetcher(base_url: &str) -> HttpResourceFetcher {
    HttpResourceFetcher::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_success_body_is_decoded() {
    let backend = StubBackend::start(vec![(
        "/api/product/products",
        StubResponse::json(json!({"products": [{"sku": "WHEY-01"}]})),
    )]);

    let outcome = fetcher(backend.base_url())
        .fetch(&EndpointDescriptor::get("/api/product/products"), None)
        .await;

    assert_eq!(outcome, Ok(json!({"products": [{"sku": "WHEY-01"}]})));
}

#[tokio::test]
async fn test_rejection_carries_status_and_server_message() {
    let backend = StubBackend::start(vec![(
        "/api/auth/users",
        StubResponse::raw(401, r#"{"message": "Token expired"}"#),
    )]);

    let outcome = fetcher(backend.base_url())
        .fetch(&EndpointDescriptor::get("/api/auth/users"), None)
        .await;

    assert_eq!(
        outcome,
        Err(FetchFailure::Rejected {
            status: 401,
            message: Some("Token expired".to_string()),
        })
    );
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let backend = StubBackend::start(vec![("/api/order/orders", StubResponse::raw(200, ""))]);

    let outcome = fetcher(backend.base_url())
        .fetch(&EndpointDescriptor::get("/api/order/orders"), None)
        .await;

    assert_eq!(outcome, Ok(serde_json::Value::Null));
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let backend = StubBackend::start(vec![(
        "/api/sensor/readings",
        StubResponse::raw(200, "<html>maintenance</html>"),
    )]);

    let outcome = fetcher(backend.base_url())
        .fetch(&EndpointDescriptor::get("/api/sensor/readings"), None)
        .await;

    assert!(matches!(outcome, Err(FetchFailure::Decode { .. })));
}

#[tokio::test]
async fn test_bearer_token_only_when_credential_given() {
    let backend = StubBackend::start(vec![
        ("/api/auth/users", StubResponse::json(json!([]))),
        ("/api/product/products", StubResponse::json(json!([]))),
    ]);
    let fetcher = fetcher(backend.base_url());
    let credential = Credential::new("abc.def").unwrap();

    let _ = fetcher
        .fetch(&EndpointDescriptor::get("/api/auth/users"), Some(&credential))
        .await;
    let _ = fetcher
        .fetch(&EndpointDescriptor::get("/api/product/products"), None)
        .await;

    let users = backend.requests_to("/api/auth/users");
    assert_eq!(users[0].header("authorization"), Some("Bearer abc.def"));
    assert_eq!(users[0].header("accept"), Some("application/json"));
    assert!(users[0]
        .header("user-agent")
        .is_some_and(|ua| ua.starts_with("gym-console/")));

    let products = backend.requests_to("/api/product/products");
    assert_eq!(products[0].header("authorization"), None);
}

#[tokio::test]
async fn test_query_parameters_are_encoded() {
    let backend = StubBackend::start(vec![("/api/sensor/readings", StubResponse::json(json!([])))]);

    let descriptor = EndpointDescriptor::get("/api/sensor/readings")
        .with_query("zone", "Zona Cardio")
        .with_query("date", "2024-05-10");
    let outcome = fetcher(backend.base_url()).fetch(&descriptor, None).await;

    assert!(outcome.is_ok());
    let seen = backend.requests_to("/api/sensor/readings");
    assert_eq!(seen[0].method, "GET");
    assert_eq!(
        seen[0].target,
        "/api/sensor/readings?zone=Zona%20Cardio&date=2024-05-10"
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    let outcome = fetcher(&unreachable_base_url())
        .fetch(&EndpointDescriptor::get("/api/product/products"), None)
        .await;

    assert!(matches!(outcome, Err(FetchFailure::Transport { .. })));
}

#[tokio::test]
async fn test_slow_backend_times_out_as_transport_failure() {
    let backend = StubBackend::start(vec![(
        "/api/access/records",
        StubResponse::json(json!([])).delayed(Duration::from_millis(1500)),
    )]);
    let fetcher = HttpResourceFetcher::new(backend.base_url(), Duration::from_millis(200)).unwrap();

    let outcome = fetcher
        .fetch(&EndpointDescriptor::get("/api/access/records"), None)
        .await;

    assert!(matches!(outcome, Err(FetchFailure::Transport { .. })));
}

#[tokio::test]
async fn test_use_case_over_http_isolates_failures() {
    let backend = StubBackend::start(vec![
        (
            "/api/product/products",
            StubResponse::json(json!({"products": [
                {"sku": "WHEY-01", "name": "Whey Protein", "price": 100, "stock": 0},
                {"sku": "MAT-02", "name": "Yoga Mat", "price": 50, "stock": 40}
            ]})),
        ),
        ("/api/sensor/readings", StubResponse::raw(503, "Service Unavailable")),
    ]);

    let use_case = RefreshScreenUseCase::new(
        fetcher(backend.base_url()),
        StaticCredentialProvider::new(Some("tok".to_string())),
        QuietProgressReporter,
        ScreenCatalog::default(),
    );

    let view = use_case.execute(RefreshRequest::new(ScreenKind::Dashboard)).await;

    let failed: Vec<&str> = view.notices().iter().map(|n| n.source.as_str()).collect();
    assert_eq!(failed, vec!["sensors", "access"]);
    assert_eq!(
        view.notices()[0].failure,
        FetchFailure::Rejected {
            status: 503,
            message: Some("Service Unavailable".to_string()),
        }
    );
    assert_eq!(view.view_model().count("outOfStockCount"), Some(1));
    assert_eq!(
        view.view_model().get("avgTemperature"),
        Some(&DerivedValue::NoData)
    );

    // Sensors and access are authenticated; the catalog is public
    assert_eq!(
        backend.requests_to("/api/sensor/readings")[0].header("authorization"),
        Some("Bearer tok")
    );
    assert_eq!(
        backend.requests_to("/api/product/products")[0].header("authorization"),
        None
    );
}

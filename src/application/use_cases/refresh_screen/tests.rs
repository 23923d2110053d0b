use super::*;
use crate::application::profiles::{EngineSettings, ScreenKind};
use crate::operations::domain::{
    fields, DerivedValue, EndpointDescriptor, FetchFailure, FilterCriteria, ResourceOutcome,
};
use crate::operations::policies::StockPolicy;
use crate::ports::outbound::Credential;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

// Mock implementations for testing
#[derive(Default)]
struct MockResourceFetcher {
    responses: HashMap<String, ResourceOutcome>,
    calls: Mutex<Vec<(String, bool)>>,
}

impl MockResourceFetcher {
    fn respond(mut self, path: &str, outcome: ResourceOutcome) -> Self {
        self.responses.insert(path.to_string(), outcome);
        self
    }
}

#[async_trait]
impl ResourceFetcher for MockResourceFetcher {
    async fn fetch(
        &self,
        descriptor: &EndpointDescriptor,
        credential: Option<&Credential>,
    ) -> ResourceOutcome {
        let path = descriptor.path_template().to_string();
        self.calls
            .lock()
            .unwrap()
            .push((path.clone(), credential.is_some()));
        self.responses.get(&path).cloned().unwrap_or(Err(FetchFailure::Rejected {
            status: 404,
            message: Some("Not found".to_string()),
        }))
    }
}

struct MockCredentialProvider(Option<&'static str>);

impl CredentialProvider for MockCredentialProvider {
    fn current_token(&self) -> Option<Credential> {
        self.0.and_then(Credential::new)
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.completions.lock().unwrap().push(message.to_string());
    }
}

fn products_payload() -> Value {
    json!({"products": [
        {"_id": "p1", "sku": "WHEY-01", "name": "Whey Protein", "category": "supplements", "price": 100, "stock": 0},
        {"_id": "p2", "sku": "MAT-02", "name": "Yoga Mat", "category": "equipment", "price": 50, "stock": 5},
        {"_id": "p3", "sku": "BAR-03", "name": "Protein Bar", "category": "supplements", "price": 2.5, "stock": 25}
    ]})
}

fn use_case(
    fetcher: MockResourceFetcher,
    token: Option<&'static str>,
) -> RefreshScreenUseCase<MockResourceFetcher, MockCredentialProvider, MockProgressReporter> {
    RefreshScreenUseCase::new(
        fetcher,
        MockCredentialProvider(token),
        MockProgressReporter::default(),
        ScreenCatalog::default(),
    )
}

#[tokio::test]
async fn test_inventory_refresh() {
    let fetcher = MockResourceFetcher::default()
        .respond("/api/product/products", Ok(products_payload()));
    let use_case = use_case(fetcher, Some("tok"));

    let view = use_case
        .execute(RefreshRequest::new(ScreenKind::Inventory))
        .await;

    assert!(!view.has_failures());
    assert_eq!(view.view_model().count(fields::PRODUCT_COUNT), Some(3));
    assert_eq!(view.view_model().count(fields::LOW_STOCK_COUNT), Some(1));
    assert_eq!(view.view_model().count(fields::OUT_OF_STOCK_COUNT), Some(1));
    assert_eq!(view.subset().len(), 3);
    assert_eq!(
        view.subset()[0].text("stockStatus").as_deref(),
        Some("out-of-stock")
    );

    // Products are public: no credential even though one is available
    let calls = use_case.fetcher.calls.lock().unwrap().clone();
    assert_eq!(calls, vec![("/api/product/products".to_string(), false)]);
}

#[tokio::test]
async fn test_initial_criteria_and_refilter() {
    let fetcher = MockResourceFetcher::default()
        .respond("/api/product/products", Ok(products_payload()));
    let use_case = use_case(fetcher, None);

    let request = RefreshRequest::new(ScreenKind::Inventory)
        .with_criteria(FilterCriteria::new().with_category("supplements"));
    let mut view = use_case.execute(request).await;
    assert_eq!(view.subset().len(), 2);

    view.apply_filter(
        FilterCriteria::new()
            .with_category("supplements")
            .with_status("in-stock"),
    );
    let skus: Vec<String> = view.subset().iter().filter_map(|r| r.text("sku")).collect();
    assert_eq!(skus, vec!["BAR-03"]);
    assert_eq!(
        use_case.fetcher.calls.lock().unwrap().len(),
        1,
        "re-filtering must not fetch again"
    );
}

#[tokio::test]
async fn test_orders_refresh_with_partial_failure() {
    let fetcher = MockResourceFetcher::default()
        .respond(
            "/api/order/orders",
            Ok(json!({"orders": [
                {"_id": "o1", "IDUser": "u1", "Status": "pending", "createDate": "2024-05-10T10:00:00Z",
                 "Products": [{"sku": "WHEY-01", "quantity": 2}, {"sku": "MAT-02", "quantity": 1}]}
            ]})),
        )
        .respond("/api/product/products", Ok(products_payload()))
        .respond(
            "/api/auth/users",
            Err(FetchFailure::Rejected {
                status: 401,
                message: Some("Token expired".to_string()),
            }),
        );
    let use_case = use_case(fetcher, Some("tok"));

    let view = use_case.execute(RefreshRequest::new(ScreenKind::Orders)).await;

    assert!(view.has_failures());
    assert_eq!(view.notices().len(), 1);
    assert_eq!(view.notices()[0].source, "users");

    let Some(DerivedValue::Orders(orders)) = view.view_model().get(fields::ORDERS) else {
        panic!("orders missing");
    };
    assert_eq!(orders[0].total, 290.0);
    assert_eq!(orders[0].creator_name, "Unknown");
    assert!(view.view_model().is_degraded(fields::ORDERS));
    assert_eq!(view.view_model().count(fields::PENDING_ORDERS), Some(1));
    assert_eq!(view.subset()[0].number("total"), Some(290.0));

    let errors = use_case.progress_reporter.errors.lock().unwrap().clone();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("users unavailable: rejected with HTTP 401: Token expired"));
}

#[tokio::test]
async fn test_missing_token_is_reported_but_cycle_still_runs() {
    let use_case = use_case(MockResourceFetcher::default(), None);

    let view = use_case
        .execute(RefreshRequest::new(ScreenKind::Employees))
        .await;

    assert_eq!(view.notices().len(), 1);
    assert_eq!(view.view_model().count(fields::EMPLOYEE_COUNT), Some(0));
    assert!(view.view_model().is_degraded(fields::EMPLOYEE_COUNT));

    let errors = use_case.progress_reporter.errors.lock().unwrap().clone();
    assert!(errors[0].contains("No session token"));
    assert_eq!(use_case.progress_reporter.completions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_all_sources_failing_still_yields_a_view() {
    let use_case = use_case(MockResourceFetcher::default(), Some("tok"));

    let view = use_case
        .execute(RefreshRequest::new(ScreenKind::Dashboard))
        .await;

    assert_eq!(view.notices().len(), 3);
    assert_eq!(
        view.view_model().get(fields::AVG_TEMPERATURE),
        Some(&DerivedValue::NoData)
    );
    let Some(DerivedValue::Alerts(alerts)) = view.view_model().get(fields::ALERTS) else {
        panic!("alerts missing");
    };
    assert_eq!(alerts.len(), 3);
}

#[tokio::test]
async fn test_settings_change_classification() {
    let fetcher = MockResourceFetcher::default()
        .respond("/api/product/products", Ok(products_payload()));
    let use_case = RefreshScreenUseCase::new(
        fetcher,
        MockCredentialProvider(None),
        MockProgressReporter::default(),
        ScreenCatalog::new(EngineSettings {
            stock: StockPolicy::new(30),
            ..EngineSettings::default()
        }),
    );

    let view = use_case
        .execute(RefreshRequest::new(ScreenKind::Inventory))
        .await;
    assert_eq!(view.view_model().count(fields::LOW_STOCK_COUNT), Some(2));
}

#[tokio::test]
async fn test_refresh_port_delegates_to_execute() {
    let fetcher = MockResourceFetcher::default()
        .respond("/api/product/products", Ok(products_payload()));
    let port: Box<dyn ScreenRefreshPort> = Box::new(use_case(fetcher, None));

    let view = port.refresh(RefreshRequest::new(ScreenKind::Inventory)).await;
    assert_eq!(view.screen(), ScreenKind::Inventory);
}
